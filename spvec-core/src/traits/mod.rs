//! Abstract interfaces for sparse vector elements
//!
//! Traits are pure interfaces; the container lives in the `spvec` crate.

pub mod element;

pub use element::{Arithmetic, Element};
