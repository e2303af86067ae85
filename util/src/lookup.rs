//! Case-insensitive readers for the TV's device-info JSON.
//!
//! Firmware revisions disagree about key casing in device-info payloads
//! ("ITEMS" vs "Items" vs "items"), so every lookup here normalizes case on
//! both sides instead of trusting the payload.

use serde_json::{Map, Value};

/// Look up `key` in `map`, ignoring case on both sides.
///
/// When several keys normalize to the same lower-cased form, the last one in
/// map iteration order wins. Returns `None` when nothing matches; callers
/// supply a fallback with `unwrap_or`.
pub fn get_case_insensitive<'a>(map: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    let needle = key.to_lowercase();
    let mut found = None;
    for (k, v) in map {
        if k.to_lowercase() == needle {
            found = Some(v);
        }
    }
    found
}

/// Walk `info` down each candidate path in turn and return the first
/// resolved value that has content.
///
/// Every step descends case-insensitively. A missing key or a non-object
/// intermediate value quietly ends that candidate; traversal never fails.
/// `null`, `false`, `0`, empty strings and empty containers at the end of a
/// path count as "nothing there" and the next candidate is tried. When no
/// candidate yields content the result is `None`.
pub fn value_from_paths<'a>(info: &'a Value, paths: &[&[&str]]) -> Option<&'a Value> {
    for path in paths {
        // A zero-length path can never name a value.
        if path.is_empty() {
            continue;
        }
        let mut current = Some(info);
        for step in *path {
            current = current
                .and_then(Value::as_object)
                .and_then(|map| get_case_insensitive(map, step));
        }
        if let Some(value) = current.filter(|v| has_content(v)) {
            return Some(value);
        }
    }
    log::trace!("no value found under any candidate path");
    None
}

/// Whether `value` carries usable content for a "first non-empty value"
/// lookup.
fn has_content(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64() != Some(0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_values_have_no_content() {
        for value in [json!(null), json!(false), json!(0), json!(""), json!([]), json!({})] {
            assert!(!has_content(&value));
        }
    }

    #[test]
    fn populated_values_have_content() {
        for value in [json!(true), json!(7), json!("on"), json!([0]), json!({"k": 0})] {
            assert!(has_content(&value));
        }
    }
}
