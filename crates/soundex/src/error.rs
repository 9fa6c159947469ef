//! Error types for Soundex encoding

use thiserror::Error;

/// Soundex error types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SoundexError {
    #[error("Invalid argument: {msg}")]
    InvalidArgument { msg: String },

    #[error("Invalid Soundex code '{code}': {msg}")]
    InvalidCode { code: String, msg: String },
}

impl SoundexError {
    pub(crate) fn empty_word() -> Self {
        SoundexError::InvalidArgument {
            msg: "`value` must be a non-empty string".to_string(),
        }
    }
}

/// Result type for Soundex operations
pub type Result<T> = std::result::Result<T, SoundexError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = SoundexError::empty_word();
        assert_eq!(err.to_string(), "Invalid argument: `value` must be a non-empty string");

        let err = SoundexError::InvalidCode {
            code: "A12".to_string(),
            msg: "expected 4 characters".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid Soundex code 'A12': expected 4 characters");
    }
}
