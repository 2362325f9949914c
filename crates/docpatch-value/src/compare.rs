//! Value comparison for prior-value assertions.
//!
//! [`FieldValue`] is the state of a field as a concurrency check sees it: a
//! stored JSON value, or the absent marker. The marker is never stored in a
//! document — it appears only inside patch requests ("I expect this
//! property not to exist yet") and in error reports.
//!
//! Equality is structural, with numbers compared by value rather than by
//! representation: an integer `1` and a float `1.0` are the same number for
//! concurrency purposes.

use std::fmt;

use serde_json::{Map, Number, Value};

/// A field's state: a stored JSON value or the absent marker.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// The property does not exist on the object.
    Absent,
    /// The property holds this value (which may be an explicit null).
    Value(Value),
}

impl FieldValue {
    /// Materializes the effective state of a field from a resolver result.
    pub fn of(current: Option<&Value>) -> Self {
        match current {
            Some(v) => FieldValue::Value(v.clone()),
            None => FieldValue::Absent,
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, FieldValue::Absent)
    }

    /// The stored value, or `None` for the absent marker.
    pub fn as_value(&self) -> Option<&Value> {
        match self {
            FieldValue::Value(v) => Some(v),
            FieldValue::Absent => None,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Absent => f.write_str("absent"),
            FieldValue::Value(v) => write!(f, "{v}"),
        }
    }
}

/// Returns `true` if the current state of a field satisfies an expected
/// prior value.
///
/// `current` is the resolver's view: `None` encodes an absent property.
/// The absent marker matches only an absent property — an expected explicit
/// `null` does NOT match a property that is missing, and vice versa.
///
/// # Example
///
/// ```
/// use docpatch_value::{matches, FieldValue};
/// use serde_json::json;
///
/// assert!(matches(None, &FieldValue::Absent));
/// assert!(!matches(None, &FieldValue::Value(json!(null))));
/// assert!(matches(Some(&json!(1)), &FieldValue::Value(json!(1.0))));
/// ```
pub fn matches(current: Option<&Value>, expected: &FieldValue) -> bool {
    match (current, expected) {
        (None, FieldValue::Absent) => true,
        (Some(c), FieldValue::Value(e)) => values_equal(c, e),
        _ => false,
    }
}

/// Comparator over the full field-state union, for callers that already
/// materialized both sides.
pub fn equal(current: &FieldValue, expected: &FieldValue) -> bool {
    matches(current.as_value(), expected)
}

/// Deep structural equality over JSON values.
///
/// Scalars compare by value and type family; objects compare key-by-key
/// regardless of key order; arrays compare element-wise.
pub fn values_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(a), Value::Bool(b)) => a == b,
        (Value::Number(a), Value::Number(b)) => numbers_equal(a, b),
        (Value::String(a), Value::String(b)) => a == b,

        (Value::Array(arr_a), Value::Array(arr_b)) => {
            if arr_a.len() != arr_b.len() {
                return false;
            }
            arr_a.iter().zip(arr_b).all(|(x, y)| values_equal(x, y))
        }

        (Value::Object(obj_a), Value::Object(obj_b)) => objects_equal(obj_a, obj_b),

        // Different type families are never equal.
        _ => false,
    }
}

fn objects_equal(a: &Map<String, Value>, b: &Map<String, Value>) -> bool {
    if a.len() != b.len() {
        return false;
    }
    for (key, val_a) in a {
        match b.get(key) {
            Some(val_b) => {
                if !values_equal(val_a, val_b) {
                    return false;
                }
            }
            None => return false,
        }
    }
    true
}

// Numbers compare by value across the i64/u64/f64 representations that
// serde_json distinguishes.
fn numbers_equal(a: &Number, b: &Number) -> bool {
    if let (Some(x), Some(y)) = (a.as_i64(), b.as_i64()) {
        return x == y;
    }
    if let (Some(x), Some(y)) = (a.as_u64(), b.as_u64()) {
        return x == y;
    }
    match (a.as_f64(), b.as_f64()) {
        (Some(x), Some(y)) => x == y,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    // ── matches: absent vs null ──────────────────────────────────────────

    #[test]
    fn absent_matches_absent() {
        assert!(matches(None, &FieldValue::Absent));
    }

    #[test]
    fn absent_does_not_match_null() {
        assert!(!matches(None, &FieldValue::Value(json!(null))));
    }

    #[test]
    fn absent_does_not_match_concrete_value() {
        assert!(!matches(None, &FieldValue::Value(json!(2))));
        assert!(!matches(None, &FieldValue::Value(json!("x"))));
    }

    #[test]
    fn present_does_not_match_absent() {
        assert!(!matches(Some(&json!(1)), &FieldValue::Absent));
        assert!(!matches(Some(&json!(null)), &FieldValue::Absent));
    }

    #[test]
    fn null_matches_null() {
        assert!(matches(Some(&json!(null)), &FieldValue::Value(json!(null))));
    }

    #[test]
    fn equal_mirrors_matches_on_materialized_states() {
        assert!(equal(&FieldValue::Absent, &FieldValue::Absent));
        assert!(!equal(&FieldValue::Absent, &FieldValue::Value(json!(null))));
        assert!(!equal(&FieldValue::Value(json!(null)), &FieldValue::Absent));
        assert!(equal(
            &FieldValue::Value(json!("a")),
            &FieldValue::Value(json!("a"))
        ));
    }

    // ── values_equal: scalars ────────────────────────────────────────────

    #[test]
    fn equal_strings() {
        assert!(values_equal(&json!("a"), &json!("a")));
        assert!(!values_equal(&json!("a"), &json!("b")));
    }

    #[test]
    fn equal_booleans() {
        assert!(values_equal(&json!(true), &json!(true)));
        assert!(!values_equal(&json!(true), &json!(false)));
    }

    #[test]
    fn integer_equals_equivalent_float() {
        assert!(values_equal(&json!(1), &json!(1.0)));
        assert!(values_equal(&json!(1.0), &json!(1)));
        assert!(!values_equal(&json!(1), &json!(1.5)));
    }

    #[test]
    fn large_integers_compare_exactly() {
        assert!(values_equal(&json!(i64::MAX), &json!(i64::MAX)));
        assert!(!values_equal(&json!(i64::MAX), &json!(i64::MAX - 1)));
    }

    #[test]
    fn cross_family_values_never_equal() {
        assert!(!values_equal(&json!(0), &json!(null)));
        assert!(!values_equal(&json!(0), &json!(false)));
        assert!(!values_equal(&json!(1), &json!(true)));
        assert!(!values_equal(&json!(""), &json!(null)));
        assert!(!values_equal(&json!(1), &json!("1")));
        assert!(!values_equal(&json!({}), &json!([])));
    }

    // ── values_equal: structures ─────────────────────────────────────────

    #[test]
    fn equal_arrays() {
        assert!(values_equal(&json!([1, 2, 3]), &json!([1, 2, 3])));
        assert!(!values_equal(&json!([1, 2, 3]), &json!([1, 2, 4])));
        assert!(!values_equal(&json!([1, 2, 3]), &json!([1, 2])));
    }

    #[test]
    fn equal_objects_ignore_key_order() {
        assert!(values_equal(
            &json!({"a": 1, "b": "2"}),
            &json!({"b": "2", "a": 1})
        ));
    }

    #[test]
    fn objects_with_extra_property_not_equal() {
        assert!(!values_equal(
            &json!({"a": 1}),
            &json!({"a": 1, "b": 2})
        ));
    }

    #[test]
    fn nested_structures_compare_deeply() {
        assert!(values_equal(
            &json!({"a": [{"b": "c", "n": 1}]}),
            &json!({"a": [{"n": 1.0, "b": "c"}]})
        ));
        assert!(!values_equal(
            &json!({"a": [{"b": "c"}]}),
            &json!({"a": [{"b": "d"}]})
        ));
    }
}
