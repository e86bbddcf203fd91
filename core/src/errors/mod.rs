mod document_error;
mod record_error;

pub use document_error::DocumentError;
pub use record_error::RecordError;

use miette::Diagnostic;
use thiserror::Error;

/// Unified error type wrapping all propkit errors.
#[derive(Debug, Error, Diagnostic)]
pub enum PropkitError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Record(#[from] RecordError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Document(#[from] DocumentError),
}
