use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum DocumentError {
    #[error("invalid record document: {0}")]
    #[diagnostic(help("pass --plain to read a bare JSON object instead of a record document"))]
    Parse(#[from] serde_json::Error),

    #[error("expected a JSON object at the top level")]
    NotAnObject,

    #[error("record contains a reference cycle and cannot be rendered as JSON")]
    Cycle,
}
