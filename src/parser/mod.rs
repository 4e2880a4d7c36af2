//! Single-pass reader for the indentation-structured configuration format.
//!
//! The grammar is depth-indexed rather than generally recursive: `key: value`
//! lines are dispatched on their exact indentation (0, 2, 4 or 6 spaces),
//! which covers the nesting shapes the harness configuration uses and
//! nothing more. Lines that fit none of the supported shapes are dropped
//! from the tree and recorded as warnings.

use indexmap::IndexMap;

use crate::scalar::coerce;
use crate::value::Value;

/// Line-to-line parser state.
///
/// Placement only ever needs the active top-level key and the active
/// second-level key; the current list object is always the last element of
/// the active top-level sequence. The context is scoped to one
/// [`parse_document`] call and discarded when it returns.
#[derive(Debug, Default)]
struct ParseContext {
    section: Option<String>,
    subsection: Option<String>,
}

/// One line the reader could not place in the tree.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseWarning {
    /// 1-based line number in the source text.
    pub line: usize,
    /// The trimmed content of the dropped line.
    pub text: String,
}

/// Parse a full document into its root mapping.
///
/// Infallible over in-memory text: structural ambiguity is resolved by
/// best-effort placement, never by failing the parse. Unplaceable lines
/// are returned as warnings so callers can surface them on request; by
/// default they are simply skipped.
pub fn parse_document(input: &str) -> (IndexMap<String, Value>, Vec<ParseWarning>) {
    let mut root = IndexMap::new();
    let mut ctx = ParseContext::default();
    let mut warnings = Vec::new();

    for (idx, raw) in input.lines().enumerate() {
        let content = raw.trim();
        if content.is_empty() || content.starts_with('#') {
            continue;
        }
        let indent = raw.len() - raw.trim_start().len();

        let placed = if let Some(item) = content.strip_prefix("- ") {
            let item = item.trim();
            match split_key_value(item) {
                Some((key, value)) => append_list_object(&mut root, &ctx, key, value),
                None => append_scalar_item(&mut root, &ctx, item),
            }
        } else if let Some((key, value)) = split_key_value(content) {
            match indent {
                0 => {
                    place_top_level(&mut root, &mut ctx, key, value);
                    true
                }
                2 => place_second_level(&mut root, &mut ctx, key, value),
                4 => place_third_level(&mut root, &ctx, key, value),
                6 => place_fourth_level(&mut root, &ctx, key, value),
                _ => false,
            }
        } else {
            false
        };

        if !placed {
            warnings.push(ParseWarning {
                line: idx + 1,
                text: content.to_string(),
            });
        }
    }

    (root, warnings)
}

fn split_key_value(content: &str) -> Option<(&str, &str)> {
    let (key, value) = content.split_once(':')?;
    Some((key.trim(), value.trim()))
}

/// A key written with no value stores this placeholder; whether the slot
/// ends up a mapping or a sequence is decided by whichever branch touches
/// it first.
fn placeholder() -> Value {
    Value::Map(IndexMap::new())
}

fn stored_value(value: &str) -> Value {
    if value.is_empty() { placeholder() } else { coerce(value) }
}

/// True for slots a `- ` item may still open or extend: an existing
/// sequence, or the untouched placeholder.
fn is_open_slot(slot: &Value) -> bool {
    match slot {
        Value::Seq(_) => true,
        Value::Map(fields) => fields.is_empty(),
        _ => false,
    }
}

fn push_into_open_seq(slot: &mut Value, item: Value) -> bool {
    match slot {
        Value::Seq(items) => {
            items.push(item);
            true
        }
        Value::Map(fields) if fields.is_empty() => {
            *slot = Value::Seq(vec![item]);
            true
        }
        _ => false,
    }
}

/// Append to the most recently declared open field of `fields`, if any.
/// Reverse declaration order matches the fourth-level attachment rule:
/// the last-declared candidate wins.
fn push_into_open_field(fields: &mut IndexMap<String, Value>, item: Value) -> bool {
    match fields.values_mut().rev().find(|f| is_open_slot(f)) {
        Some(slot) => push_into_open_seq(slot, item),
        None => false,
    }
}

/// Place a `- item` line (no colon in the body). Scalar items are kept as
/// raw strings, not coerced. The open sequence is searched innermost
/// first: the active second-level slot (or an open field inside it), then
/// the last element of the active top-level sequence, then the top-level
/// slot itself.
fn append_scalar_item(root: &mut IndexMap<String, Value>, ctx: &ParseContext, item: &str) -> bool {
    let Some(section) = ctx.section.as_deref() else {
        return false;
    };

    if let Some(subsection) = ctx.subsection.as_deref() {
        if let Some(Value::Map(fields)) = root.get_mut(section) {
            if let Some(slot) = fields.get_mut(subsection) {
                if is_open_slot(slot) {
                    return push_into_open_seq(slot, Value::Str(item.to_string()));
                }
                if let Value::Map(nested) = slot {
                    if push_into_open_field(nested, Value::Str(item.to_string())) {
                        return true;
                    }
                }
            }
        }
    }

    match root.get_mut(section) {
        Some(Value::Seq(items)) => {
            if let Some(Value::Map(last)) = items.last_mut() {
                if push_into_open_field(last, Value::Str(item.to_string())) {
                    return true;
                }
            }
            items.push(Value::Str(item.to_string()));
            true
        }
        Some(slot @ Value::Map(_)) => push_into_open_seq(slot, Value::Str(item.to_string())),
        _ => false,
    }
}

/// Place a `- key: value` line: a new single-entry mapping appended to the
/// active top-level sequence. It becomes the current list object, which
/// deeper-indented `key: value` lines attach further fields to.
fn append_list_object(
    root: &mut IndexMap<String, Value>,
    ctx: &ParseContext,
    key: &str,
    value: &str,
) -> bool {
    let Some(section) = ctx.section.as_deref() else {
        return false;
    };
    let slot = root
        .entry(section.to_string())
        .or_insert_with(|| Value::Seq(Vec::new()));
    let mut entry = IndexMap::new();
    entry.insert(key.to_string(), coerce(value));
    push_into_open_seq(slot, Value::Map(entry))
}

fn place_top_level(
    root: &mut IndexMap<String, Value>,
    ctx: &mut ParseContext,
    key: &str,
    value: &str,
) {
    // duplicate keys keep their original position, last value wins
    root.insert(key.to_string(), stored_value(value));
    ctx.section = Some(key.to_string());
    ctx.subsection = None;
}

fn place_second_level(
    root: &mut IndexMap<String, Value>,
    ctx: &mut ParseContext,
    key: &str,
    value: &str,
) -> bool {
    let Some(section) = ctx.section.as_deref() else {
        return false;
    };
    let slot = root
        .entry(section.to_string())
        .or_insert_with(placeholder);
    let Value::Map(fields) = slot else {
        return false;
    };
    fields.insert(key.to_string(), stored_value(value));
    ctx.subsection = Some(key.to_string());
    true
}

fn place_third_level(
    root: &mut IndexMap<String, Value>,
    ctx: &ParseContext,
    key: &str,
    value: &str,
) -> bool {
    let Some(section) = ctx.section.as_deref() else {
        return false;
    };

    if let Some(subsection) = ctx.subsection.as_deref() {
        let Some(Value::Map(fields)) = root.get_mut(section) else {
            return false;
        };
        let slot = fields
            .entry(subsection.to_string())
            .or_insert_with(placeholder);
        let Value::Map(nested) = slot else {
            return false;
        };
        nested.insert(key.to_string(), stored_value(value));
        return true;
    }

    if let Some(Value::Seq(items)) = root.get_mut(section) {
        if let Some(Value::Map(last)) = items.last_mut() {
            last.insert(key.to_string(), stored_value(value));
            return true;
        }
    }
    false
}

/// Fourth-level keys model one extra level of nesting inside a list item,
/// e.g. a per-architecture target map inside a per-platform entry. The
/// field is attached to the first mapping-valued field of the current list
/// object, scanned in reverse declaration order: when an item carries more
/// than one mapping field, the last-declared one wins.
fn place_fourth_level(
    root: &mut IndexMap<String, Value>,
    ctx: &ParseContext,
    key: &str,
    value: &str,
) -> bool {
    let Some(section) = ctx.section.as_deref() else {
        return false;
    };
    let Some(Value::Seq(items)) = root.get_mut(section) else {
        return false;
    };
    let Some(Value::Map(last)) = items.last_mut() else {
        return false;
    };
    match last.values_mut().rev().find(|f| f.as_map().is_some()) {
        Some(Value::Map(nested)) => {
            nested.insert(key.to_string(), coerce(value));
            true
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests;
