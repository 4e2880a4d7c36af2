use crate::value::Value;

/// Resolve a dotted path expression against a parsed tree.
///
/// Each `.`-separated segment descends one level: a mapping key by exact
/// match, or a zero-based index into a sequence when the segment is all
/// decimal digits. Evaluation stops at the first segment that cannot
/// descend and the whole lookup is absent.
///
/// `None` means "absent", which is distinct from a found `Value::Null`;
/// callers that cannot represent the difference conflate the two at their
/// own output boundary.
pub fn query<'a>(root: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = root;
    for segment in path.split('.') {
        current = match current {
            Value::Map(fields) => fields.get(segment)?,
            Value::Seq(items) => {
                if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
                    return None;
                }
                let index: usize = segment.parse().ok()?;
                items.get(index)?
            }
            _ => return None,
        };
    }
    Some(current)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HarnessConfig;

    fn sample() -> HarnessConfig {
        HarnessConfig::from_str(
            "platforms:\n  - name: alpine\n    zig_target_map:\n      x86_64: x86_64-linux-musl\ntimeouts:\n  build: 600\nempty: null\n",
        )
    }

    #[test]
    fn test_mapping_descent() {
        let config = sample();
        assert_eq!(
            query(config.root(), "timeouts.build"),
            Some(&Value::Int(600))
        );
    }

    #[test]
    fn test_sequence_index_descent() {
        let config = sample();
        assert_eq!(
            query(config.root(), "platforms.0.name"),
            Some(&Value::Str("alpine".into()))
        );
        assert_eq!(
            query(config.root(), "platforms.0.zig_target_map.x86_64"),
            Some(&Value::Str("x86_64-linux-musl".into()))
        );
    }

    #[test]
    fn test_out_of_bounds_index_is_absent() {
        let config = sample();
        assert_eq!(query(config.root(), "platforms.1"), None);
    }

    #[test]
    fn test_non_numeric_segment_on_sequence_is_absent() {
        let config = sample();
        assert_eq!(query(config.root(), "platforms.first"), None);
        assert_eq!(query(config.root(), "platforms.-1"), None);
    }

    #[test]
    fn test_absent_is_distinct_from_found_null() {
        let config = sample();
        assert_eq!(query(config.root(), "empty"), Some(&Value::Null));
        assert_eq!(query(config.root(), "missing"), None);
    }

    #[test]
    fn test_descent_through_scalar_is_absent() {
        let config = sample();
        assert_eq!(query(config.root(), "timeouts.build.nested"), None);
    }

    #[test]
    fn test_empty_path_is_absent() {
        let config = sample();
        assert_eq!(query(config.root(), ""), None);
    }
}
