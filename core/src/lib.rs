pub mod document;
pub mod errors;
pub mod runtime;

pub use document::{PropertyDocument, RecordDocument};
pub use errors::{DocumentError, PropkitError, RecordError};
pub use runtime::builtins::object::{
    assign_locked_value, freeze_all, get_prototype_of, is_any_frozen, keys_by_descriptor,
    keys_by_descriptor_name, own_property_descriptors, set_prototype_of,
};
pub use runtime::value::object::{Attribute, Property, PropertyDescriptor, Record};
pub use runtime::value::{RecordRef, Value};

/// Convenience function: parse a document and load it as a record value.
pub fn load(text: &str, plain: bool) -> Result<Value, PropkitError> {
    let document = RecordDocument::parse(text, plain)?;
    Ok(Value::Record(document.into_record()))
}

/// Convenience function: render a record value back into a document.
pub fn describe(value: &Value) -> Result<RecordDocument, PropkitError> {
    Ok(RecordDocument::describe_value(value)?)
}
