mod coercion;
mod display;
pub mod object;

pub use coercion::same_value;

use std::cell::RefCell;
use std::rc::Rc;

use object::Record;

/// Shared handle to a record. Cloning the handle aliases the same record.
pub type RecordRef = Rc<RefCell<Record>>;

#[derive(Debug, Clone)]
pub enum Value {
    Undefined,
    Null,
    Boolean(bool),
    Number(f64),
    String(String),
    Record(RecordRef),
}

impl Value {
    /// Wrap a record into a freshly allocated handle.
    pub fn record(record: Record) -> Self {
        Value::Record(Rc::new(RefCell::new(record)))
    }

    pub fn as_record(&self) -> Option<&RecordRef> {
        match self {
            Value::Record(rec) => Some(rec),
            _ => None,
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Undefined => "undefined",
            Value::Null => "null",
            Value::Boolean(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Record(_) => "record",
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Undefined, Value::Undefined) => true,
            (Value::Null, Value::Null) => true,
            (Value::Boolean(a), Value::Boolean(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Record(a), Value::Record(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<RecordRef> for Value {
    fn from(rec: RecordRef) -> Self {
        Value::Record(rec)
    }
}
