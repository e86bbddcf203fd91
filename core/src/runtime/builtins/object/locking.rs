use crate::errors::RecordError;
use crate::runtime::value::object::Property;
use crate::runtime::value::Value;

use super::require_record;

/// A shallow copy of `target` where `key` is read-only.
///
/// The locked property keeps the source's value when `key` is an own
/// enumerable property, and is `null` otherwise (missing, inherited or
/// hidden keys alike). Its enumerable and configurable
/// flags are always set to `true`, whatever they were on the source. Every
/// other property is copied with its attributes untouched.
pub fn assign_locked_value(target: &Value, key: &str) -> Result<Value, RecordError> {
    let source = require_record(target, "assign_locked_value")?;
    let source = source.borrow();
    let visible = source.get_own_property(key).filter(|prop| prop.enumerable);
    let kept = visible.is_some();
    let value = visible
        .map(|prop| prop.value.clone())
        .unwrap_or(Value::Null);

    let mut copy = source.shallow_copy();
    copy.force_property(
        key.to_string(),
        Property::with_attributes(value, false, true, true),
    );
    log::debug!(
        "assign_locked_value: locked '{key}' (kept value: {kept})"
    );
    Ok(Value::record(copy))
}
