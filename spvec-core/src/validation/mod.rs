//! Validation utilities for sparse vectors
//!
//! Pure functions with no I/O or storage access: index and length checks,
//! binary layout arithmetic, and text scanning.

pub mod bounds;
pub mod format;
pub mod parsing;

pub use bounds::{check_index, check_one_based, check_same_length, check_sorted_indices};
pub use format::{align_to_boundary, calculate_padding, encoded_size};
pub use parsing::{parse_usize, scan_vector, VectorText};
