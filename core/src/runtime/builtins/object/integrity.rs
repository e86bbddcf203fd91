use crate::errors::RecordError;
use crate::runtime::value::Value;

use super::require_record;

/// True when any restriction has been applied to `target`: frozen, sealed
/// or merely non-extensible. Primitives are never extensible, so they
/// always report `true`.
pub fn is_any_frozen(target: &Value) -> bool {
    let Value::Record(rec) = target else {
        return true;
    };
    let rec = rec.borrow();
    let frozen = rec.is_frozen();
    let sealed = rec.is_sealed();
    let extensible = rec.is_extensible();
    log::trace!("is_any_frozen: frozen={frozen} sealed={sealed} extensible={extensible}");
    frozen || sealed || !extensible
}

/// A frozen shallow copy of `target`. The input stays mutable; values that
/// are records themselves are shared, not frozen.
pub fn freeze_all(target: &Value) -> Result<Value, RecordError> {
    let source = require_record(target, "freeze_all")?;
    let mut copy = source.borrow().shallow_copy();
    copy.freeze();
    log::debug!("freeze_all: froze copy with {} propert(ies)", copy.len());
    Ok(Value::record(copy))
}
