use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum RecordError {
    #[error("type error: cannot convert undefined or null to a record")]
    NullishConversion,

    #[error("type error: expected a record but got {type_name}")]
    #[diagnostic(help("only records carry property metadata that can be copied"))]
    NotARecord { type_name: &'static str },

    #[error("type error: cannot assign to read only property '{key}'")]
    ReadOnly { key: String },

    #[error("type error: cannot add property '{key}', record is not extensible")]
    NotExtensible { key: String },

    #[error("type error: cannot redefine or delete property '{key}'")]
    NonConfigurable { key: String },

    #[error("type error: cyclic prototype chain")]
    PrototypeCycle,
}
