use super::*;

fn parse(input: &str) -> IndexMap<String, Value> {
    parse_document(input).0
}

#[test]
fn test_top_level_scalars_are_coerced() {
    let root = parse("name: harness\nretries: 3\nratio: 0.5\nverbose: yes\nlabel: ~\n");

    assert_eq!(root.get("name"), Some(&Value::Str("harness".into())));
    assert_eq!(root.get("retries"), Some(&Value::Int(3)));
    assert_eq!(root.get("ratio"), Some(&Value::Float(0.5)));
    assert_eq!(root.get("verbose"), Some(&Value::Bool(true)));
    assert_eq!(root.get("label"), Some(&Value::Null));
}

#[test]
fn test_blank_lines_and_comments_skipped() {
    let input = "# header comment\n\nname: harness\n   \n# trailing comment\n";
    let (root, warnings) = parse_document(input);

    assert_eq!(root.len(), 1);
    assert!(warnings.is_empty());
}

#[test]
fn test_empty_value_stores_placeholder_mapping() {
    let root = parse("platforms:\n");
    assert_eq!(root.get("platforms"), Some(&Value::Map(IndexMap::new())));
}

#[test]
fn test_top_level_scalar_list() {
    let root = parse("archs:\n  - x86_64\n  - aarch64\n");

    let archs = root.get("archs").and_then(Value::as_seq).unwrap();
    assert_eq!(
        archs,
        &[
            Value::Str("x86_64".into()),
            Value::Str("aarch64".into())
        ]
    );
}

#[test]
fn test_scalar_items_are_raw_strings_not_coerced() {
    let root = parse("ports:\n  - 8080\n  - true\n");

    let ports = root.get("ports").and_then(Value::as_seq).unwrap();
    assert_eq!(ports, &[Value::Str("8080".into()), Value::Str("true".into())]);
}

#[test]
fn test_second_level_scalar_list() {
    let root = parse("build:\n  flags:\n    - -O2\n    - -static\n");

    let flags = root
        .get("build")
        .and_then(Value::as_map)
        .and_then(|m| m.get("flags"))
        .and_then(Value::as_seq)
        .unwrap();
    assert_eq!(flags, &[Value::Str("-O2".into()), Value::Str("-static".into())]);
}

#[test]
fn test_list_object_values_are_coerced() {
    let root = parse("platforms:\n  - enabled: false\n");

    let platforms = root.get("platforms").and_then(Value::as_seq).unwrap();
    let entry = platforms[0].as_map().unwrap();
    assert_eq!(entry.get("enabled"), Some(&Value::Bool(false)));
}

#[test]
fn test_list_of_objects_with_deeper_fields() {
    let input = "\
platforms:
  - name: alpine
    base_image: alpine:3.19
    architectures:
      - x86_64
      - aarch64
    zig_target_map:
      x86_64: x86_64-linux-musl
      aarch64: aarch64-linux-musl
";
    let root = parse(input);

    let platforms = root.get("platforms").and_then(Value::as_seq).unwrap();
    assert_eq!(platforms.len(), 1);

    let alpine = platforms[0].as_map().unwrap();
    assert_eq!(alpine.get("name"), Some(&Value::Str("alpine".into())));
    assert_eq!(
        alpine.get("base_image"),
        Some(&Value::Str("alpine:3.19".into()))
    );

    let archs = alpine.get("architectures").and_then(Value::as_seq).unwrap();
    assert_eq!(
        archs,
        &[Value::Str("x86_64".into()), Value::Str("aarch64".into())]
    );

    let targets = alpine.get("zig_target_map").and_then(Value::as_map).unwrap();
    assert_eq!(
        targets.get("x86_64"),
        Some(&Value::Str("x86_64-linux-musl".into()))
    );
    assert_eq!(
        targets.get("aarch64"),
        Some(&Value::Str("aarch64-linux-musl".into()))
    );
}

#[test]
fn test_each_list_element_keeps_its_own_nested_map() {
    let input = "\
platforms:
  - name: alpine
    architectures:
      - x86_64
    zig_target_map:
      x86_64: x86_64-linux-musl
  - name: debian
    architectures:
      - aarch64
    zig_target_map:
      aarch64: aarch64-linux-gnu
";
    let root = parse(input);
    let platforms = root.get("platforms").and_then(Value::as_seq).unwrap();
    assert_eq!(platforms.len(), 2);

    let alpine = platforms[0].as_map().unwrap();
    let alpine_targets = alpine.get("zig_target_map").and_then(Value::as_map).unwrap();
    assert_eq!(alpine_targets.len(), 1);
    assert_eq!(
        alpine_targets.get("x86_64"),
        Some(&Value::Str("x86_64-linux-musl".into()))
    );
    assert_eq!(alpine_targets.get("aarch64"), None);

    let debian = platforms[1].as_map().unwrap();
    let debian_targets = debian.get("zig_target_map").and_then(Value::as_map).unwrap();
    assert_eq!(debian_targets.len(), 1);
    assert_eq!(
        debian_targets.get("aarch64"),
        Some(&Value::Str("aarch64-linux-gnu".into()))
    );
}

// When a list item declares more than one mapping-valued field, deeper
// keys attach to the last-declared one. This tie-break is part of the
// accepted grammar and must not drift.
#[test]
fn test_fourth_level_attaches_to_last_declared_mapping_field() {
    let input = "\
servers:
  - host: alpha
    env_map:
    port_map:
      http: 80
      https: 443
";
    let root = parse(input);
    let servers = root.get("servers").and_then(Value::as_seq).unwrap();
    let alpha = servers[0].as_map().unwrap();

    let env_map = alpha.get("env_map").and_then(Value::as_map).unwrap();
    assert!(env_map.is_empty());

    let port_map = alpha.get("port_map").and_then(Value::as_map).unwrap();
    assert_eq!(port_map.get("http"), Some(&Value::Int(80)));
    assert_eq!(port_map.get("https"), Some(&Value::Int(443)));
}

#[test]
fn test_second_level_values_under_active_section() {
    let root = parse("timeouts:\n  global: 300\n  build: 600\n");

    let timeouts = root.get("timeouts").and_then(Value::as_map).unwrap();
    assert_eq!(timeouts.get("global"), Some(&Value::Int(300)));
    assert_eq!(timeouts.get("build"), Some(&Value::Int(600)));
}

#[test]
fn test_third_level_values_under_subsection() {
    let root = parse("test_suites:\n  basic:\n    timeout: 60\n    tests:\n      - echo.sh\n");

    let basic = root
        .get("test_suites")
        .and_then(Value::as_map)
        .and_then(|m| m.get("basic"))
        .and_then(Value::as_map)
        .unwrap();
    assert_eq!(basic.get("timeout"), Some(&Value::Int(60)));
    assert_eq!(
        basic.get("tests").and_then(Value::as_seq),
        Some(&[Value::Str("echo.sh".into())][..])
    );
}

#[test]
fn test_duplicate_top_level_key_keeps_position_last_value_wins() {
    let root = parse("first: 1\nname: old\nlast: 2\nname: new\n");

    assert_eq!(root.get("name"), Some(&Value::Str("new".into())));
    let keys: Vec<_> = root.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["first", "name", "last"]);
}

#[test]
fn test_insertion_order_preserved() {
    let root = parse("zeta: 1\nalpha: 2\nmike: 3\n");
    let keys: Vec<_> = root.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["zeta", "alpha", "mike"]);
}

#[test]
fn test_unsupported_indent_is_dropped_with_warning() {
    let (root, warnings) = parse_document("name: x\n   odd: 1\n");

    assert_eq!(root.len(), 1);
    assert_eq!(root.get("odd"), None);
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].line, 2);
    assert_eq!(warnings[0].text, "odd: 1");
}

#[test]
fn test_list_item_with_no_open_sequence_is_dropped() {
    let (root, warnings) = parse_document("name: x\n  - stray\n");

    assert_eq!(root.get("name"), Some(&Value::Str("x".into())));
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].text, "- stray");
}

#[test]
fn test_content_without_colon_is_dropped() {
    let (root, warnings) = parse_document("just some words\n");

    assert!(root.is_empty());
    assert_eq!(warnings.len(), 1);
}

#[test]
fn test_second_level_key_without_section_is_dropped() {
    let (root, warnings) = parse_document("  orphan: 1\n");

    assert!(root.is_empty());
    assert_eq!(warnings.len(), 1);
}

#[test]
fn test_fourth_level_key_without_list_context_is_dropped() {
    let (root, warnings) = parse_document("top:\n  sub: 1\n      deep: 2\n");

    let top = root.get("top").and_then(Value::as_map).unwrap();
    assert_eq!(top.get("deep"), None);
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].line, 3);
}

#[test]
fn test_trailing_comment_is_part_of_the_value() {
    let root = parse("timeout: 60 # seconds\n");
    assert_eq!(root.get("timeout"), Some(&Value::Str("60 # seconds".into())));
}

#[test]
fn test_value_with_colon_splits_at_first_colon_only() {
    let root = parse("image: alpine:3.19\n");
    assert_eq!(root.get("image"), Some(&Value::Str("alpine:3.19".into())));
}

#[test]
fn test_crlf_line_endings() {
    let root = parse("name: x\r\nretries: 3\r\n");
    assert_eq!(root.get("name"), Some(&Value::Str("x".into())));
    assert_eq!(root.get("retries"), Some(&Value::Int(3)));
}

#[test]
fn test_context_does_not_leak_between_sections() {
    let input = "\
platforms:
  - name: alpine
tail:
  late: 1
";
    // `tail` resets the context: the indent-2 line lands under `tail`,
    // not on the platform list.
    let root = parse(input);
    let platforms = root.get("platforms").and_then(Value::as_seq).unwrap();
    assert_eq!(platforms.len(), 1);
    assert!(platforms[0].as_map().unwrap().get("late").is_none());

    let tail = root.get("tail").and_then(Value::as_map).unwrap();
    assert_eq!(tail.get("late"), Some(&Value::Int(1)));
}
