//! spvec - Lazily-allocated sparse vectors
//!
//! This library provides a sparse vector container whose logical length is
//! decoupled from its stored entries. Reads of unmaterialized indices yield
//! zero without allocating; writes allocate entries in sorted position.
//!
//! ## Architecture
//!
//! spvec follows a definition/implementation separation:
//!
//! - **spvec-core**: Element contract, errors, encodings and validation (no_std, no I/O)
//! - **spvec**: The [`SparseVector`] container, its codecs and arithmetic
//!
//! ## Quick Start
//!
//! ```rust
//! use spvec::SparseVector;
//!
//! fn example() -> spvec::Result<()> {
//!     let mut v: SparseVector<f64> = SparseVector::with_length(5);
//!     v[1] = 3.0;
//!     v[3] = 4.0;
//!
//!     assert_eq!(v.to_string(), "<1 3 3 4 5>");
//!     assert_eq!(v.dense().to_string(), "[0 3 0 4 0]");
//!
//!     let w: SparseVector<f64> = "[1 0 0 1 0]".parse()?;
//!     assert_eq!(v.dot(&w)?, 4.0);
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! ## Features
//!
//! - **Allocate on write**: Entries exist only where a value was written
//! - **Fixed length**: Lock a vector's length for its lifetime
//! - **Compaction**: Drop stored zeros, optionally releasing capacity
//! - **Text codec**: Sparse `<i v ... n>` and dense `[v ...]` forms, auto-detected
//! - **Binary codec**: Little-endian header plus raw arrays (`binary` feature)
//! - **Serde**: `{length, entries}` representation (`serde` feature)
//! - **Merge arithmetic**: Sum, difference, inner product, scaling

// Re-export core abstractions and format definitions
pub use spvec_core::{
    // Element contract
    Arithmetic, Element,
    // Format definitions
    TextFormat, VectorHeader,
    // Error handling
    ErrorCategory, Result, SpvecError,
};

// Implementation modules
pub mod arithmetic;
pub mod codec;
pub mod compaction;
pub mod config;
pub mod lifecycle;
pub mod vector;

// Public exports
pub use codec::{parse_text, Dense};
pub use config::{GrowthPolicy, PositionStrategy, VectorConfig};
pub use vector::{vector_copy, SparseVector};
