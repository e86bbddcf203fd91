use std::rc::Rc;

use super::Record;
use crate::errors::RecordError;
use crate::runtime::value::RecordRef;

/// True when some record on the prototype chain of `record` defines `key`
/// as a non-writable property, which blocks assignment on `record`.
pub(crate) fn inherits_read_only(record: &Record, key: &str) -> bool {
    let mut current = record.prototype.clone();
    while let Some(candidate) = current {
        let borrowed = candidate.borrow();
        if let Some(prop) = borrowed.properties.get(key) {
            return !prop.writable;
        }
        current = borrowed.prototype.clone();
    }
    false
}

/// Records reachable through the prototype link of `target`, nearest first.
pub fn prototype_chain(target: &RecordRef) -> Vec<RecordRef> {
    let mut chain = Vec::new();
    let mut current = target.borrow().prototype.clone();
    while let Some(candidate) = current {
        current = candidate.borrow().prototype.clone();
        chain.push(candidate);
    }
    chain
}

/// Replace the prototype link of `target`. Refused when `target` is not
/// extensible or when `proto` would make the chain cyclic.
pub fn set_prototype_of(target: &RecordRef, proto: Option<RecordRef>) -> bool {
    try_set_prototype_of(target, proto).is_ok()
}

/// Strict variant of [`set_prototype_of`].
pub fn try_set_prototype_of(
    target: &RecordRef,
    proto: Option<RecordRef>,
) -> Result<(), RecordError> {
    let unchanged = match (&target.borrow().prototype, &proto) {
        (None, None) => true,
        (Some(a), Some(b)) => Rc::ptr_eq(a, b),
        _ => false,
    };
    if unchanged {
        return Ok(());
    }
    if !target.borrow().extensible {
        return Err(RecordError::NotExtensible {
            key: "[[Prototype]]".to_string(),
        });
    }
    if let Some(candidate) = &proto {
        let mut cursor = Some(Rc::clone(candidate));
        while let Some(node) = cursor {
            if Rc::ptr_eq(&node, target) {
                return Err(RecordError::PrototypeCycle);
            }
            cursor = node.borrow().prototype.clone();
        }
    }
    target.borrow_mut().prototype = proto;
    Ok(())
}
