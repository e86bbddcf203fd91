use super::Property;
use crate::runtime::value::Value;

/// A partial property description, as passed to `define_own_property`.
///
/// Absent fields keep the current attribute when redefining an existing
/// property and fall back to `false` (or `undefined` for the value) when
/// creating a new one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertyDescriptor {
    pub value: Option<Value>,
    pub writable: Option<bool>,
    pub enumerable: Option<bool>,
    pub configurable: Option<bool>,
}

impl PropertyDescriptor {
    /// A fully specified, unrestricted data descriptor.
    pub fn data(value: Value) -> Self {
        Self {
            value: Some(value),
            writable: Some(true),
            enumerable: Some(true),
            configurable: Some(true),
        }
    }

    pub fn value(mut self, value: Value) -> Self {
        self.value = Some(value);
        self
    }

    pub fn writable(mut self, writable: bool) -> Self {
        self.writable = Some(writable);
        self
    }

    pub fn enumerable(mut self, enumerable: bool) -> Self {
        self.enumerable = Some(enumerable);
        self
    }

    pub fn configurable(mut self, configurable: bool) -> Self {
        self.configurable = Some(configurable);
        self
    }

    /// Materialize a brand new property from this descriptor.
    pub(crate) fn into_property(self) -> Property {
        Property {
            value: self.value.unwrap_or(Value::Undefined),
            writable: self.writable.unwrap_or(false),
            enumerable: self.enumerable.unwrap_or(false),
            configurable: self.configurable.unwrap_or(false),
        }
    }

    /// Overlay the specified fields onto an existing property.
    pub(crate) fn apply_to(self, prop: &mut Property) {
        if let Some(value) = self.value {
            prop.value = value;
        }
        if let Some(writable) = self.writable {
            prop.writable = writable;
        }
        if let Some(enumerable) = self.enumerable {
            prop.enumerable = enumerable;
        }
        if let Some(configurable) = self.configurable {
            prop.configurable = configurable;
        }
    }
}
