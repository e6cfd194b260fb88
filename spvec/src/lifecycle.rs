//! Length management, capacity reservation, locking and swap

use crate::vector::SparseVector;
use spvec_core::{Element, Result, SpvecError};
use tracing::debug;

impl<T: Element> SparseVector<T> {
    /// Set the logical length
    ///
    /// Shrinking drops every entry at or beyond `length`; backing capacity
    /// is kept. Fails with `LengthLocked` on a fixed vector.
    pub fn set_length(&mut self, length: usize) -> Result<()> {
        if self.fixed {
            return Err(SpvecError::LengthLocked);
        }

        if length < self.length {
            let kept = self.indices.partition_point(|&index| index < length);
            let dropped = self.indices.len() - kept;
            self.indices.truncate(kept);
            self.values.truncate(kept);
            if dropped > 0 {
                debug!(from = self.length, to = length, dropped, "shrank sparse vector");
            }
        }

        self.length = length;
        self.max_length = self.max_length.max(length);
        Ok(())
    }

    /// Set the length once and lock it for the lifetime of the vector
    ///
    /// Only valid on a vector that is unfixed, has length 0 and holds no
    /// entries (fresh, or after [`kill`](Self::kill)).
    pub fn fix_length(&mut self, length: usize) -> Result<()> {
        if self.fixed || self.length != 0 || !self.indices.is_empty() {
            return Err(SpvecError::FixLengthMisuse);
        }

        self.length = length;
        self.max_length = self.max_length.max(length);
        self.fixed = true;
        debug!(length, "fixed sparse vector length");
        Ok(())
    }

    /// Reserve capacity for at least `capacity` entries
    ///
    /// Length and entries are untouched; a no-op when capacity suffices.
    pub fn set_alloc(&mut self, capacity: usize) {
        let len = self.indices.len();
        if capacity <= self.allocated() {
            return;
        }
        self.indices.reserve_exact(capacity - len);
        self.values.reserve_exact(capacity - len);
    }

    /// Release all storage and reset the length to 0
    ///
    /// Fails with `LengthLocked` on a fixed vector.
    pub fn kill(&mut self) -> Result<()> {
        if self.fixed {
            return Err(SpvecError::LengthLocked);
        }

        debug!(
            length = self.length,
            nvalues = self.indices.len(),
            "released sparse vector storage"
        );
        self.indices = Vec::new();
        self.values = Vec::new();
        self.length = 0;
        self.max_length = 0;
        Ok(())
    }

    /// Exchange storage, length and high-water mark with `other` in O(1)
    ///
    /// The `fixed` flags and configurations stay with their vectors. If
    /// either vector is fixed, both must have the same length.
    pub fn swap(&mut self, other: &mut Self) -> Result<()> {
        if (self.fixed || other.fixed) && self.length != other.length {
            return Err(SpvecError::LengthMismatch {
                expected: self.length,
                actual: other.length,
            });
        }

        std::mem::swap(&mut self.indices, &mut other.indices);
        std::mem::swap(&mut self.values, &mut other.values);
        std::mem::swap(&mut self.length, &mut other.length);
        std::mem::swap(&mut self.max_length, &mut other.max_length);
        debug!(
            left = self.indices.len(),
            right = other.indices.len(),
            "swapped sparse vector storage"
        );
        Ok(())
    }
}
