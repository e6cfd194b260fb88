//! Compaction and clearing of stored entries

use crate::vector::SparseVector;
use spvec_core::Element;
use tracing::debug;

impl<T: Element> SparseVector<T> {
    /// Remove every stored entry equal to zero
    ///
    /// Order and length are preserved and logical values are unchanged.
    /// Spare capacity is released afterwards when the configuration asks for
    /// it. Returns the number of entries removed.
    pub fn compact(&mut self) -> usize {
        let mut write = 0;
        for read in 0..self.values.len() {
            if self.values[read].is_zero() {
                continue;
            }
            if write != read {
                self.indices[write] = self.indices[read];
                self.values.swap(write, read);
            }
            write += 1;
        }

        let removed = self.values.len() - write;
        self.indices.truncate(write);
        self.values.truncate(write);

        if removed > 0 && self.config.shrink_on_compact {
            self.indices.shrink_to_fit();
            self.values.shrink_to_fit();
        }

        if removed > 0 {
            debug!(removed, nvalues = write, "compacted sparse vector");
        }
        removed
    }

    /// Set every stored value to zero, keeping entries and capacity
    pub fn clear(&mut self) {
        for value in self.values.iter_mut() {
            *value = self.zero.clone();
        }
    }

    /// Whether every logical value is zero
    pub fn is_zero(&self) -> bool {
        self.values.iter().all(|value| value.is_zero())
    }
}
