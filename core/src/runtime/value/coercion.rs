use std::rc::Rc;

use super::Value;

/// SameValue comparison: NaN equals NaN and +0 differs from -0.
pub fn same_value(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => {
            if a.is_nan() && b.is_nan() {
                true
            } else if *a == 0.0 && *b == 0.0 {
                a.is_sign_positive() == b.is_sign_positive()
            } else {
                a == b
            }
        }
        (Value::Record(a), Value::Record(b)) => Rc::ptr_eq(a, b),
        _ => left == right,
    }
}

pub(super) fn format_number(n: f64) -> String {
    if n == 0.0 {
        "0".to_string()
    } else if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e21 {
        // through f64 formatting: an i64 cast saturates above 2^63
        format!("{n:.0}")
    } else if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        let text = if n > 0.0 { "Infinity" } else { "-Infinity" };
        text.to_string()
    } else {
        n.to_string()
    }
}
