#![no_std]

//! spvec core - sparse vector definitions
//!
//! This crate provides the element contract, error type, encoding
//! definitions and pure validation used by the `spvec` container

pub mod error;
pub mod format;
pub mod traits;
pub mod validation;

pub use error::*;
pub use format::*;
pub use traits::*;
pub use validation::*;
