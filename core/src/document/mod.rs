//! JSON interchange format for records and their property metadata.
//!
//! A document lists every own property with its attribute flags, the
//! record-level extensibility flag and, optionally, the prototype record:
//!
//! ```json
//! { "extensible": true,
//!   "properties": { "a": { "value": 1, "writable": false } } }
//! ```
//!
//! Omitted flags default to `true`, so a document written by hand only needs
//! to spell out the restrictions.

mod json;

use std::cell::RefCell;
use std::rc::Rc;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::errors::DocumentError;
use crate::runtime::value::object::{Property, Record};
use crate::runtime::value::{RecordRef, Value};

pub use json::{json_to_value, value_to_json};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RecordDocument {
    #[serde(default = "default_true")]
    pub extensible: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prototype: Option<Box<RecordDocument>>,
    #[serde(default)]
    pub properties: IndexMap<String, PropertyDocument>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PropertyDocument {
    #[serde(default)]
    pub value: serde_json::Value,
    #[serde(default = "default_true")]
    pub writable: bool,
    #[serde(default = "default_true")]
    pub enumerable: bool,
    #[serde(default = "default_true")]
    pub configurable: bool,
}

fn default_true() -> bool {
    true
}

impl Default for RecordDocument {
    fn default() -> Self {
        Self {
            extensible: true,
            prototype: None,
            properties: IndexMap::new(),
        }
    }
}

impl PropertyDocument {
    pub fn new(value: serde_json::Value) -> Self {
        Self {
            value,
            writable: true,
            enumerable: true,
            configurable: true,
        }
    }
}

impl RecordDocument {
    /// Parse either a full document or, with `plain`, a bare JSON object
    /// whose members all become unrestricted properties.
    pub fn parse(text: &str, plain: bool) -> Result<Self, DocumentError> {
        if plain {
            let json: serde_json::Value = serde_json::from_str(text)?;
            Self::from_plain_json(json)
        } else {
            Ok(serde_json::from_str(text)?)
        }
    }

    pub fn from_plain_json(json: serde_json::Value) -> Result<Self, DocumentError> {
        let serde_json::Value::Object(members) = json else {
            return Err(DocumentError::NotAnObject);
        };
        let properties = members
            .into_iter()
            .map(|(key, value)| (key, PropertyDocument::new(value)))
            .collect();
        Ok(Self {
            properties,
            ..Self::default()
        })
    }

    /// Build a live record from this document.
    pub fn into_record(self) -> RecordRef {
        let prototype = self.prototype.map(|proto| proto.into_record());
        let mut record = Record::with_prototype(prototype);
        for (key, prop) in self.properties {
            record = record.with_property(
                key,
                Property::with_attributes(
                    json_to_value(prop.value),
                    prop.writable,
                    prop.enumerable,
                    prop.configurable,
                ),
            );
        }
        if !self.extensible {
            record.prevent_extensions();
        }
        Rc::new(RefCell::new(record))
    }

    /// Snapshot the metadata of a live record.
    ///
    /// Property values that are records render as plain JSON of their
    /// enumerable own properties; a reference cycle is an error.
    pub fn describe(record: &RecordRef) -> Result<Self, DocumentError> {
        let mut seen = vec![Rc::as_ptr(record)];
        let rec = record.borrow();
        let mut properties = IndexMap::with_capacity(rec.len());
        for (key, prop) in rec.own_properties() {
            let value = json::render(&prop.value, &mut seen)?;
            properties.insert(
                key,
                PropertyDocument {
                    value,
                    writable: prop.writable,
                    enumerable: prop.enumerable,
                    configurable: prop.configurable,
                },
            );
        }
        let prototype = match rec.prototype() {
            Some(proto) => Some(Box::new(Self::describe(&proto)?)),
            None => None,
        };
        Ok(Self {
            extensible: rec.is_extensible(),
            prototype,
            properties,
        })
    }

    /// Like [`RecordDocument::describe`] for an arbitrary value.
    pub fn describe_value(value: &Value) -> Result<Self, DocumentError> {
        match value {
            Value::Record(rec) => Self::describe(rec),
            _ => Err(DocumentError::NotAnObject),
        }
    }
}
