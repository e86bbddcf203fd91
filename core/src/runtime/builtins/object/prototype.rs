use crate::errors::RecordError;
use crate::runtime::value::object::prototype;
use crate::runtime::value::Value;

use super::require_record;

/// The prototype link of `target` as a value: `Null` at the end of the chain.
pub fn get_prototype_of(target: &Value) -> Result<Value, RecordError> {
    match target {
        Value::Record(rec) => Ok(rec
            .borrow()
            .prototype()
            .map(Value::Record)
            .unwrap_or(Value::Null)),
        Value::Undefined | Value::Null => Err(RecordError::NullishConversion),
        other => Err(RecordError::NotARecord {
            type_name: other.type_name(),
        }),
    }
}

/// Relink `target` onto `proto`, which must be a record or `Null`.
pub fn set_prototype_of(target: &Value, proto: &Value) -> Result<(), RecordError> {
    let rec = require_record(target, "set_prototype_of")?;
    let proto = match proto {
        Value::Null => None,
        Value::Record(p) => Some(p.clone()),
        other => {
            return Err(RecordError::NotARecord {
                type_name: other.type_name(),
            });
        }
    };
    prototype::try_set_prototype_of(rec, proto)
}
