//! Encoding definitions for sparse vectors
//!
//! Pure data definitions for the text and binary encodings. No I/O.

pub mod constants;
pub mod header;

pub use header::VectorHeader;

/// Textual encodings of a sparse vector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TextFormat {
    /// `<i0 v0 i1 v1 ... n>`
    Sparse,
    /// `[v0 v1 ... v_{n-1}]`
    Dense,
}

impl TextFormat {
    /// Detect the format from a leading delimiter
    pub const fn from_open(c: char) -> Option<Self> {
        match c {
            constants::SPARSE_OPEN => Some(TextFormat::Sparse),
            constants::DENSE_OPEN => Some(TextFormat::Dense),
            _ => None,
        }
    }

    /// Opening delimiter
    pub const fn open(self) -> char {
        match self {
            TextFormat::Sparse => constants::SPARSE_OPEN,
            TextFormat::Dense => constants::DENSE_OPEN,
        }
    }

    /// Closing delimiter
    pub const fn close(self) -> char {
        match self {
            TextFormat::Sparse => constants::SPARSE_CLOSE,
            TextFormat::Dense => constants::DENSE_CLOSE,
        }
    }
}
