//! Error types for sparse vector operations

use thiserror::Error;

/// Errors that can occur during sparse vector operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SpvecError {
    /// Index outside `[0, length)`
    #[error("index {index} out of range for length {length}")]
    IndexOutOfRange { index: usize, length: usize },
    /// Attempt to change the length of a fixed-length vector
    #[error("vector length is fixed")]
    LengthLocked,
    /// Operands or assignment source/target disagree on length
    #[error("length mismatch: expected {expected}, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
    /// A value reference resolved to a slot beyond the logical length
    #[error("reference resolves to index {index}, beyond logical length {length}")]
    InvalidReference { index: usize, length: usize },
    /// `fix_length` on a vector that is not freshly constructed
    #[error("fix_length requires an empty, unfixed vector")]
    FixLengthMisuse,
    /// Malformed text representation
    #[error("parse error at byte {offset}: {reason}")]
    Parse { offset: usize, reason: &'static str },
    /// Invalid binary header
    #[error("invalid binary vector header")]
    InvalidHeader,
    /// Unsupported format version or element width
    #[error("unsupported format version or element width")]
    UnsupportedFormat,
    /// Data corruption detected
    #[error("data corruption detected")]
    CorruptedData,
    /// Insufficient buffer space
    #[error("insufficient buffer space")]
    InsufficientBuffer,
}

/// Coarse grouping of [`SpvecError`] variants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Element access and reference resolution
    Access,
    /// Length, locking and operand shape
    Lifecycle,
    /// Text and binary encodings
    Format,
}

impl SpvecError {
    pub const fn category(&self) -> ErrorCategory {
        match self {
            SpvecError::IndexOutOfRange { .. } | SpvecError::InvalidReference { .. } => {
                ErrorCategory::Access
            }
            SpvecError::LengthLocked
            | SpvecError::LengthMismatch { .. }
            | SpvecError::FixLengthMisuse => ErrorCategory::Lifecycle,
            SpvecError::Parse { .. }
            | SpvecError::InvalidHeader
            | SpvecError::UnsupportedFormat
            | SpvecError::CorruptedData
            | SpvecError::InsufficientBuffer => ErrorCategory::Format,
        }
    }
}

/// Result type for sparse vector operations
pub type Result<T> = core::result::Result<T, SpvecError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categories() {
        assert_eq!(
            SpvecError::IndexOutOfRange { index: 3, length: 2 }.category(),
            ErrorCategory::Access
        );
        assert_eq!(SpvecError::LengthLocked.category(), ErrorCategory::Lifecycle);
        assert_eq!(SpvecError::CorruptedData.category(), ErrorCategory::Format);
    }
}
