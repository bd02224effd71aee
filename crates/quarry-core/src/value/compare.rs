use crate::value::Value;
use std::cmp::Ordering;

/// Strict equality between two values.
///
/// Returns `None` when the variants differ; evaluation treats that as an
/// invalid comparison, never as inequality.
#[must_use]
pub(crate) fn compare_eq(left: &Value, right: &Value) -> Option<bool> {
    match (left, right) {
        (Value::Blob(a), Value::Blob(b)) => Some(a == b),
        (Value::Bool(a), Value::Bool(b)) => Some(a == b),
        (Value::Float(a), Value::Float(b)) => Some(a == b),
        (Value::Int(a), Value::Int(b)) => Some(a == b),
        (Value::List(a), Value::List(b)) => compare_eq_list(a, b),
        (Value::Null, Value::Null) | (Value::Unit, Value::Unit) => Some(true),
        (Value::Record(a), Value::Record(b)) => Some(a == b),
        (Value::Text(a), Value::Text(b)) => Some(a == b),
        (Value::Uint(a), Value::Uint(b)) => Some(a == b),
        (Value::Ulid(a), Value::Ulid(b)) => Some(a == b),
        _ => None,
    }
}

/// Strict comparator for identical orderable variants.
///
/// Returns `None` for mismatched or non-orderable variants.
#[must_use]
pub(crate) fn strict_order_cmp(left: &Value, right: &Value) -> Option<Ordering> {
    match (left, right) {
        (Value::Blob(a), Value::Blob(b)) => Some(a.cmp(b)),
        (Value::Bool(a), Value::Bool(b)) => Some(a.cmp(b)),
        (Value::Float(a), Value::Float(b)) => Some(a.cmp(b)),
        (Value::Int(a), Value::Int(b)) => Some(a.cmp(b)),
        (Value::Text(a), Value::Text(b)) => Some(a.cmp(b)),
        (Value::Uint(a), Value::Uint(b)) => Some(a.cmp(b)),
        (Value::Ulid(a), Value::Ulid(b)) => Some(a.cmp(b)),
        _ => None,
    }
}

fn compare_eq_list(left: &[Value], right: &[Value]) -> Option<bool> {
    if left.len() != right.len() {
        return Some(false);
    }

    let mut all_equal = true;
    for (l, r) in left.iter().zip(right.iter()) {
        match compare_eq(l, r) {
            Some(true) => {}
            Some(false) => all_equal = false,
            // Mixed-variant elements make the whole comparison invalid.
            None => return None,
        }
    }

    Some(all_equal)
}
