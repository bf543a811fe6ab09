//! Extraction error taxonomy.

use std::path::PathBuf;

use gemini_client::GeminiError;
use thiserror::Error;

use crate::documents::DocumentTypeId;

/// Every way an extraction can fail, one variant per kind so callers can
/// assert on *which* failure occurred, not merely that one did.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// Content path exists but is a directory.
    #[error("Expected a file but got a directory: {}", .0.display())]
    IsADirectory(PathBuf),

    /// Content path does not exist.
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    /// Document type has no descriptor in the registry.
    #[error("Unsupported document type: {0}")]
    UnsupportedType(DocumentTypeId),

    /// The upload or generation call failed. Not retried here; upstream
    /// detail is preserved as-is.
    #[error("Upstream generation failure: {0}")]
    Upstream(#[from] GeminiError),

    /// The backend returned a result shape outside the two accepted forms.
    /// This breaks the client contract and is never silently coerced.
    #[error("Generation returned {got} where a JSON object was expected")]
    ContractViolation { got: &'static str },
}
