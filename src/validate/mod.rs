// src/validate/mod.rs
// Shape predicates over decoded JSON values, plus the question sanitizer.
// Pure functions - callers decide which error each failure maps to.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

static HTML_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").expect("valid regex"));

/// True iff the value is an integer greater than zero.
pub fn is_positive_integer(value: &Value) -> bool {
    value.as_i64().is_some_and(|n| n > 0)
}

/// True iff the value is a non-empty array of integers.
pub fn is_integer_array(value: &Value) -> bool {
    as_integer_array(value).is_some()
}

/// True iff the value is a non-empty array of integers, all greater than zero.
pub fn is_positive_integer_array(value: &Value) -> bool {
    as_positive_integer_array(value).is_some()
}

/// True iff the value is a string with non-whitespace content.
pub fn is_non_empty_string(value: &Value) -> bool {
    value.as_str().is_some_and(|s| !s.trim().is_empty())
}

/// Narrow to `Vec<i64>`; `None` for anything that is not a non-empty
/// all-integer array. JSON floats (`5.0`) do not count as integers.
pub fn as_integer_array(value: &Value) -> Option<Vec<i64>> {
    let items = value.as_array()?;
    if items.is_empty() {
        return None;
    }
    items.iter().map(Value::as_i64).collect()
}

/// As `as_integer_array`, additionally requiring every element > 0.
pub fn as_positive_integer_array(value: &Value) -> Option<Vec<i64>> {
    let items = as_integer_array(value)?;
    items.iter().all(|&n| n > 0).then_some(items)
}

/// Strip HTML-tag-like runs and stray angle brackets, trim, and truncate.
/// Deterministic; an all-markup input collapses to the empty string.
pub fn sanitize_string(input: &str, max_chars: usize) -> String {
    let stripped = HTML_TAG.replace_all(input, "");
    let cleaned: String = stripped.chars().filter(|&c| c != '<' && c != '>').collect();
    cleaned.trim().chars().take(max_chars).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn positive_integer_rejects_non_integers() {
        assert!(is_positive_integer(&json!(5)));
        assert!(!is_positive_integer(&json!(0)));
        assert!(!is_positive_integer(&json!(-5)));
        assert!(!is_positive_integer(&json!(2.5)));
        assert!(!is_positive_integer(&json!("5")));
        assert!(!is_positive_integer(&json!(null)));
    }

    #[test]
    fn integer_array_requires_non_empty_all_integers() {
        assert!(is_integer_array(&json!([1, -2, 3])));
        assert!(!is_integer_array(&json!([])));
        assert!(!is_integer_array(&json!([1, "2"])));
        assert!(!is_integer_array(&json!([1, 2.5])));
        assert!(!is_integer_array(&json!({"0": 1})));
    }

    #[test]
    fn positive_integer_array_rejects_zero_and_negatives() {
        assert!(is_positive_integer_array(&json!([1, 2, 3])));
        assert!(!is_positive_integer_array(&json!([1, 0])));
        assert!(!is_positive_integer_array(&json!([1, -2])));
        assert!(!is_positive_integer_array(&json!([])));
    }

    #[test]
    fn non_empty_string_trims_whitespace() {
        assert!(is_non_empty_string(&json!("hello")));
        assert!(!is_non_empty_string(&json!("   ")));
        assert!(!is_non_empty_string(&json!("")));
        assert!(!is_non_empty_string(&json!(42)));
    }

    #[test]
    fn sanitize_strips_tags_and_brackets() {
        assert_eq!(sanitize_string("  what is <b>2+2</b>?  ", 1000), "what is 2+2?");
        // "< b >" parses as one tag-like run
        assert_eq!(sanitize_string("a < b > c", 1000), "a  c");
        assert_eq!(sanitize_string("<script>alert(1)</script>", 1000), "alert(1)");
        assert_eq!(sanitize_string("<><>", 1000), "");
    }

    #[test]
    fn sanitize_truncates_to_limit() {
        let long = "x".repeat(2000);
        assert_eq!(sanitize_string(&long, 1000).len(), 1000);
    }
}
