//! Error taxonomy for the generation engine.

use thiserror::Error;

/// Result type for code generation operations.
pub type Result<T> = std::result::Result<T, CodegenError>;

/// Fatal, structural errors in the model IR or a backend.
///
/// These indicate a defect in the input model (or a backend that cannot
/// express it) and abort the generation run. Recoverable conditions
/// such as a missing formatter or an unreachable version-info server
/// are not errors at this level; they degrade to warnings at the call
/// site.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CodegenError {
    /// A composite type kind the type mapper does not recognize.
    #[error("unsupported composite type kind: {kind}")]
    UnsupportedType { kind: String },

    /// A leaf type carrying neither a name nor an element type.
    #[error("cannot map a type with neither a name nor an element type")]
    InvalidType,
}
