use super::attribute::Attribute;
use crate::runtime::value::Value;

/// An own data property together with its attribute flags.
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    pub value: Value,
    pub writable: bool,
    pub enumerable: bool,
    pub configurable: bool,
}

impl Property {
    pub fn new(value: Value) -> Self {
        Self {
            value,
            writable: true,
            enumerable: true,
            configurable: true,
        }
    }

    pub fn with_attributes(
        value: Value,
        writable: bool,
        enumerable: bool,
        configurable: bool,
    ) -> Self {
        Self {
            value,
            writable,
            enumerable,
            configurable,
        }
    }

    /// Read one attribute flag.
    pub fn attribute(&self, attribute: Attribute) -> bool {
        match attribute {
            Attribute::Writable => self.writable,
            Attribute::Enumerable => self.enumerable,
            Attribute::Configurable => self.configurable,
        }
    }
}
