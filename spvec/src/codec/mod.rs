//! Encodings for sparse vectors

#[cfg(feature = "binary")]
pub mod binary;
#[cfg(feature = "serde")]
mod serialize;
pub mod text;

pub use text::{parse_text, Dense};
