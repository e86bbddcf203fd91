use crate::errors::RecordError;
use crate::runtime::value::object::{Attribute, Property};
use crate::runtime::value::Value;

/// Every own property of `target` with its attributes, in enumeration order.
///
/// Strings expose one read-only index property per UTF-16 unit plus a
/// hidden `length`; other primitives have no own properties.
pub fn own_property_descriptors(target: &Value) -> Result<Vec<(String, Property)>, RecordError> {
    match target {
        Value::Undefined | Value::Null => Err(RecordError::NullishConversion),
        Value::Record(rec) => Ok(rec.borrow().own_properties()),
        Value::String(s) => Ok(string_descriptors(s)),
        Value::Boolean(_) | Value::Number(_) => Ok(Vec::new()),
    }
}

fn string_descriptors(s: &str) -> Vec<(String, Property)> {
    let units: Vec<u16> = s.encode_utf16().collect();
    let mut out: Vec<(String, Property)> = units
        .iter()
        .enumerate()
        .map(|(idx, unit)| {
            let ch = String::from_utf16_lossy(&[*unit]);
            (
                idx.to_string(),
                Property::with_attributes(Value::String(ch), false, true, false),
            )
        })
        .collect();
    out.push((
        "length".to_string(),
        Property::with_attributes(Value::Number(units.len() as f64), false, false, false),
    ));
    out
}

/// Keys of the own properties whose `attribute` flag is set, in enumeration order.
pub fn keys_by_descriptor(
    target: &Value,
    attribute: Attribute,
) -> Result<Vec<String>, RecordError> {
    let descriptors = own_property_descriptors(target)?;
    let keys: Vec<String> = descriptors
        .into_iter()
        .filter(|(_, prop)| prop.attribute(attribute))
        .map(|(key, _)| key)
        .collect();
    log::debug!("keys_by_descriptor: {} key(s) are {attribute}", keys.len());
    Ok(keys)
}

/// Same as [`keys_by_descriptor`] but selects the attribute by name. A name
/// outside writable/enumerable/configurable never matches.
pub fn keys_by_descriptor_name(
    target: &Value,
    attribute: &str,
) -> Result<Vec<String>, RecordError> {
    // Nullish input still fails before the attribute name is considered.
    if matches!(target, Value::Undefined | Value::Null) {
        return Err(RecordError::NullishConversion);
    }
    let Some(attribute) = Attribute::from_name(attribute) else {
        log::debug!("keys_by_descriptor: unknown attribute {attribute:?}, nothing matches");
        return Ok(Vec::new());
    };
    keys_by_descriptor(target, attribute)
}
