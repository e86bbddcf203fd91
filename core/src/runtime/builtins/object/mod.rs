//! Reflection helpers over record property metadata.
//!
//! None of these functions mutate their input; the copying operations hand
//! back a freshly allocated record that shares the source's prototype link.

mod descriptor;
mod integrity;
mod locking;
mod prototype;

pub use descriptor::{keys_by_descriptor, keys_by_descriptor_name, own_property_descriptors};
pub use integrity::{freeze_all, is_any_frozen};
pub use locking::assign_locked_value;
pub use prototype::{get_prototype_of, set_prototype_of};

use crate::errors::RecordError;
use crate::runtime::value::{RecordRef, Value};

/// Operations that produce a derived record only accept records.
fn require_record<'a>(target: &'a Value, operation: &str) -> Result<&'a RecordRef, RecordError> {
    match target {
        Value::Record(rec) => Ok(rec),
        Value::Undefined | Value::Null => {
            log::debug!("{operation}: rejected {} input", target.type_name());
            Err(RecordError::NullishConversion)
        }
        other => {
            log::debug!("{operation}: rejected {} input", other.type_name());
            Err(RecordError::NotARecord {
                type_name: other.type_name(),
            })
        }
    }
}
