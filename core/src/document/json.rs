use std::cell::RefCell;

use crate::errors::DocumentError;
use crate::runtime::value::object::{Property, Record};
use crate::runtime::value::Value;

/// Convert JSON into a value. Objects become plain records; arrays become
/// records with index keys and a hidden `length`.
pub fn json_to_value(json: serde_json::Value) -> Value {
    match json {
        serde_json::Value::Null => Value::Null,
        serde_json::Value::Bool(b) => Value::Boolean(b),
        serde_json::Value::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
        serde_json::Value::String(s) => Value::String(s),
        serde_json::Value::Array(items) => {
            let len = items.len();
            let mut record = Record::new();
            for (idx, item) in items.into_iter().enumerate() {
                record = record.with_value(idx.to_string(), json_to_value(item));
            }
            record = record.with_property(
                "length",
                Property::with_attributes(Value::Number(len as f64), true, false, false),
            );
            Value::record(record)
        }
        serde_json::Value::Object(members) => {
            let mut record = Record::new();
            for (key, value) in members {
                record = record.with_value(key, json_to_value(value));
            }
            Value::record(record)
        }
    }
}

/// Render a value as JSON. Fails on records that reference themselves.
pub fn value_to_json(value: &Value) -> Result<serde_json::Value, DocumentError> {
    render(value, &mut Vec::new())
}

pub(super) fn render(
    value: &Value,
    seen: &mut Vec<*const RefCell<Record>>,
) -> Result<serde_json::Value, DocumentError> {
    Ok(match value {
        Value::Undefined | Value::Null => serde_json::Value::Null,
        Value::Boolean(b) => serde_json::Value::Bool(*b),
        Value::Number(n) => number_to_json(*n),
        Value::String(s) => serde_json::Value::String(s.clone()),
        Value::Record(rec) => {
            let ptr = std::rc::Rc::as_ptr(rec);
            if seen.contains(&ptr) {
                return Err(DocumentError::Cycle);
            }
            seen.push(ptr);
            let borrowed = rec.borrow();
            let visible: Vec<(String, Property)> = borrowed
                .own_properties()
                .into_iter()
                .filter(|(_, prop)| prop.enumerable)
                .collect();
            let json = if is_array_like(&borrowed, &visible) {
                let items = visible
                    .iter()
                    .map(|(_, prop)| render(&prop.value, seen))
                    .collect::<Result<Vec<_>, _>>()?;
                serde_json::Value::Array(items)
            } else {
                let mut members = serde_json::Map::new();
                for (key, prop) in visible {
                    members.insert(key, render(&prop.value, seen)?);
                }
                serde_json::Value::Object(members)
            };
            seen.pop();
            json
        }
    })
}

/// The shape `json_to_value` gives arrays: a hidden `length` of `n` and
/// enumerable keys exactly `0..n`.
fn is_array_like(record: &Record, visible: &[(String, Property)]) -> bool {
    let Some(length) = record.get_own_property("length") else {
        return false;
    };
    let Value::Number(n) = length.value else {
        return false;
    };
    if length.enumerable || n < 0.0 || n.fract() != 0.0 || n as usize != visible.len() {
        return false;
    }
    visible
        .iter()
        .enumerate()
        .all(|(idx, (key, _))| *key == idx.to_string())
}

fn number_to_json(n: f64) -> serde_json::Value {
    if n == 0.0 && n.is_sign_negative() {
        // serde_json keeps the sign of a float zero
        return serde_json::Number::from_f64(n)
            .map(serde_json::Value::Number)
            .unwrap_or(serde_json::Value::Null);
    }
    if n.is_finite() && n.fract() == 0.0 && n.abs() < 9_007_199_254_740_992.0 {
        serde_json::Value::from(n as i64)
    } else {
        serde_json::Number::from_f64(n)
            .map(serde_json::Value::Number)
            .unwrap_or(serde_json::Value::Null)
    }
}
