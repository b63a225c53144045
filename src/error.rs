//! Error types for the trellis engine.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for trellis operations.
///
/// Each variant maps to a specific exit code. Soft conditions (reading or
/// deleting a path that does not exist, malformed fields during
/// normalization) are never errors; they are defined "nothing here"
/// outcomes handled in place.
#[derive(Error, Debug)]
pub enum TrellisError {
    /// User provided invalid arguments or referenced a missing file.
    #[error("{0}")]
    UserError(String),

    /// The textual workflow document could not be decoded.
    #[error("failed to decode workflow document: {0}")]
    Decode(String),

    /// A path string could not be parsed.
    #[error("invalid path '{0}': {1}")]
    InvalidPath(String, String),

    /// Rename target key already exists on the parent object.
    ///
    /// This is the one editor operation that fails loudly: silently
    /// overwriting the sibling would lose its value.
    #[error("a field named '{0}' already exists")]
    DuplicateKey(String),
}

impl TrellisError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            TrellisError::UserError(_) => exit_codes::USER_ERROR,
            TrellisError::InvalidPath(_, _) => exit_codes::USER_ERROR,
            TrellisError::Decode(_) => exit_codes::DECODE_FAILURE,
            TrellisError::DuplicateKey(_) => exit_codes::EDIT_FAILURE,
        }
    }
}

/// Result type alias for trellis operations.
pub type Result<T> = std::result::Result<T, TrellisError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_error_has_correct_exit_code() {
        let err = TrellisError::UserError("bad argument".to_string());
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
    }

    #[test]
    fn invalid_path_has_correct_exit_code() {
        let err = TrellisError::InvalidPath("a..b".to_string(), "empty segment".to_string());
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
    }

    #[test]
    fn decode_error_has_correct_exit_code() {
        let err = TrellisError::Decode("not a mapping".to_string());
        assert_eq!(err.exit_code(), exit_codes::DECODE_FAILURE);
    }

    #[test]
    fn duplicate_key_has_correct_exit_code() {
        let err = TrellisError::DuplicateKey("steps".to_string());
        assert_eq!(err.exit_code(), exit_codes::EDIT_FAILURE);
    }

    #[test]
    fn error_messages_are_descriptive() {
        let err = TrellisError::Decode("mapping expected at line 1".to_string());
        assert_eq!(
            err.to_string(),
            "failed to decode workflow document: mapping expected at line 1"
        );

        let err = TrellisError::DuplicateKey("env".to_string());
        assert_eq!(err.to_string(), "a field named 'env' already exists");
    }
}
