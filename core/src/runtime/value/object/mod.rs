mod attribute;
mod property;
pub mod property_descriptor;
pub mod prototype;

pub use attribute::Attribute;
pub use property::Property;
pub use property_descriptor::PropertyDescriptor;

use indexmap::IndexMap;

use super::{same_value, RecordRef, Value};
use crate::errors::RecordError;

/// A structured key/value container with per-property attribute metadata.
///
/// Own properties keep their insertion order; `own_keys` applies the
/// array-index-first enumeration order on top of it.
#[derive(Debug, Clone)]
pub struct Record {
    pub(crate) properties: IndexMap<String, Property>,
    pub(crate) prototype: Option<RecordRef>,
    pub(crate) extensible: bool,
}

impl Default for Record {
    fn default() -> Self {
        Self::new()
    }
}

impl Record {
    pub fn new() -> Self {
        Self {
            properties: IndexMap::new(),
            prototype: None,
            extensible: true,
        }
    }

    pub fn with_prototype(prototype: Option<RecordRef>) -> Self {
        Self {
            prototype,
            ..Self::new()
        }
    }

    /// Builder helper: add an unrestricted data property.
    pub fn with_value(self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.with_property(key, Property::new(value.into()))
    }

    /// Builder helper: add a property with explicit attributes.
    pub fn with_property(mut self, key: impl Into<String>, prop: Property) -> Self {
        self.properties.insert(key.into(), prop);
        self
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    pub fn get_own_property(&self, key: &str) -> Option<&Property> {
        self.properties.get(key)
    }

    pub fn has_own_property(&self, key: &str) -> bool {
        self.properties.contains_key(key)
    }

    /// Own keys in enumeration order: array indices ascending, then the
    /// remaining keys in insertion order.
    pub fn own_keys(&self) -> Vec<String> {
        let mut indices: Vec<(u32, &String)> = Vec::new();
        let mut names: Vec<&String> = Vec::new();
        for key in self.properties.keys() {
            match array_index(key) {
                Some(idx) => indices.push((idx, key)),
                None => names.push(key),
            }
        }
        indices.sort_by_key(|(idx, _)| *idx);
        indices
            .into_iter()
            .map(|(_, key)| key.clone())
            .chain(names.into_iter().cloned())
            .collect()
    }

    /// Snapshot of every own property in `own_keys` order.
    pub fn own_properties(&self) -> Vec<(String, Property)> {
        self.own_keys()
            .into_iter()
            .filter_map(|key| {
                let prop = self.properties.get(&key)?.clone();
                Some((key, prop))
            })
            .collect()
    }

    /// Look up `key` on this record, then along the prototype chain.
    pub fn get(&self, key: &str) -> Option<Value> {
        if let Some(prop) = self.properties.get(key) {
            return Some(prop.value.clone());
        }
        let proto = self.prototype.as_ref()?;
        proto.borrow().get(key)
    }

    /// Define or redefine an own property. Returns `false` when the change
    /// is not allowed by the current attributes or extensibility.
    pub fn define_own_property(
        &mut self,
        key: impl Into<String>,
        desc: PropertyDescriptor,
    ) -> bool {
        let key = key.into();
        match self.properties.get_mut(&key) {
            Some(current) => {
                if !current.configurable && !redefinition_allowed(current, &desc) {
                    return false;
                }
                desc.apply_to(current);
                true
            }
            None => {
                if !self.extensible {
                    return false;
                }
                self.properties.insert(key, desc.into_property());
                true
            }
        }
    }

    /// Strict variant of [`Record::define_own_property`].
    pub fn try_define_own_property(
        &mut self,
        key: impl Into<String>,
        desc: PropertyDescriptor,
    ) -> Result<(), RecordError> {
        let key = key.into();
        let existed = self.properties.contains_key(&key);
        if self.define_own_property(key.clone(), desc) {
            return Ok(());
        }
        if existed {
            Err(RecordError::NonConfigurable { key })
        } else {
            Err(RecordError::NotExtensible { key })
        }
    }

    /// Ordinary assignment. Returns `false` when the property is read-only
    /// (own or inherited) or when adding to a non-extensible record.
    pub fn set(&mut self, key: impl Into<String>, value: Value) -> bool {
        self.assign(key.into(), value).is_ok()
    }

    /// Strict variant of [`Record::set`].
    pub fn try_set(&mut self, key: impl Into<String>, value: Value) -> Result<(), RecordError> {
        self.assign(key.into(), value)
    }

    fn assign(&mut self, key: String, value: Value) -> Result<(), RecordError> {
        if let Some(prop) = self.properties.get_mut(&key) {
            if !prop.writable {
                return Err(RecordError::ReadOnly { key });
            }
            prop.value = value;
            return Ok(());
        }
        if prototype::inherits_read_only(self, &key) {
            return Err(RecordError::ReadOnly { key });
        }
        if !self.extensible {
            return Err(RecordError::NotExtensible { key });
        }
        self.properties.insert(key, Property::new(value));
        Ok(())
    }

    /// Remove an own property. Absent keys delete trivially; non-configurable
    /// properties refuse.
    pub fn delete(&mut self, key: &str) -> bool {
        match self.properties.get(key) {
            None => true,
            Some(prop) if !prop.configurable => false,
            Some(_) => {
                self.properties.shift_remove(key);
                true
            }
        }
    }

    /// Strict variant of [`Record::delete`].
    pub fn try_delete(&mut self, key: &str) -> Result<(), RecordError> {
        if self.delete(key) {
            Ok(())
        } else {
            Err(RecordError::NonConfigurable {
                key: key.to_string(),
            })
        }
    }

    pub fn prototype(&self) -> Option<RecordRef> {
        self.prototype.clone()
    }

    pub fn is_extensible(&self) -> bool {
        self.extensible
    }

    pub fn prevent_extensions(&mut self) {
        self.extensible = false;
    }

    /// No additions or removals; values of writable properties may still change.
    pub fn seal(&mut self) {
        self.extensible = false;
        for prop in self.properties.values_mut() {
            prop.configurable = false;
        }
    }

    /// No additions, removals, value changes or reconfiguration.
    pub fn freeze(&mut self) {
        self.extensible = false;
        for prop in self.properties.values_mut() {
            prop.configurable = false;
            prop.writable = false;
        }
    }

    pub fn is_sealed(&self) -> bool {
        !self.extensible && self.properties.values().all(|p| !p.configurable)
    }

    pub fn is_frozen(&self) -> bool {
        !self.extensible
            && self
                .properties
                .values()
                .all(|p| !p.configurable && !p.writable)
    }

    /// A new extensible record sharing this record's prototype link and
    /// holding a copy of every own property with identical attributes.
    /// Values are copied by handle, so nested records are shared.
    pub fn shallow_copy(&self) -> Record {
        Record {
            properties: self.properties.clone(),
            prototype: self.prototype.clone(),
            extensible: true,
        }
    }

    /// Install `prop` under `key` without attribute validation. Only used on
    /// freshly copied records that nobody else can observe yet.
    pub(crate) fn force_property(&mut self, key: String, prop: Property) {
        self.properties.insert(key, prop);
    }
}

fn redefinition_allowed(current: &Property, desc: &PropertyDescriptor) -> bool {
    if desc.configurable == Some(true) {
        return false;
    }
    if desc.enumerable.is_some_and(|e| e != current.enumerable) {
        return false;
    }
    if !current.writable {
        if desc.writable == Some(true) {
            return false;
        }
        if let Some(value) = &desc.value
            && !same_value(value, &current.value)
        {
            return false;
        }
    }
    true
}

/// Canonical array index: decimal without leading zeros, below 2^32 - 1.
pub(crate) fn array_index(key: &str) -> Option<u32> {
    if key.is_empty() || (key.len() > 1 && key.starts_with('0')) {
        return None;
    }
    if !key.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    key.parse::<u32>().ok().filter(|idx| *idx != u32::MAX)
}
