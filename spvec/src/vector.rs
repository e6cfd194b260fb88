//! Sparse vector storage and element access
//!
//! A [`SparseVector`] keeps two parallel arrays: strictly ascending logical
//! indices and their values. Logical length is independent of how many
//! entries are stored; writing to an index that has no entry allocates one
//! in sorted position, reading such an index yields the element zero.

use crate::config::{PositionStrategy, VectorConfig};
use spvec_core::{check_index, check_one_based, check_sorted_indices, Element, Result, SpvecError};
use std::ops::{Index, IndexMut};
use tracing::trace;

/// Sparse vector over element type `T`
///
/// Borrows returned by the accessors are tied to the vector, so a value
/// reference can never outlive a call that may relocate storage.
#[derive(Debug)]
pub struct SparseVector<T: Element> {
    pub(crate) indices: Vec<usize>,
    pub(crate) values: Vec<T>,
    pub(crate) length: usize,
    pub(crate) max_length: usize,
    pub(crate) fixed: bool,
    pub(crate) zero: T,
    pub(crate) config: VectorConfig,
}

impl<T: Element> SparseVector<T> {
    /// Create an empty vector of length 0 with no storage
    pub fn new() -> Self {
        Self::with_config(VectorConfig::default())
    }

    /// Create an empty vector using the given storage configuration
    pub fn with_config(config: VectorConfig) -> Self {
        Self {
            indices: Vec::new(),
            values: Vec::new(),
            length: 0,
            max_length: 0,
            fixed: false,
            zero: T::zero(),
            config,
        }
    }

    /// Create an all-zero vector of the given length, without allocating entries
    pub fn with_length(length: usize) -> Self {
        let mut vector = Self::new();
        vector.length = length;
        vector.max_length = length;
        vector
    }

    /// Build a vector from already sorted storage arrays
    ///
    /// Fails with `CorruptedData` unless `indices` is strictly ascending,
    /// bounded by `length`, and as long as `values`.
    pub fn from_parts(length: usize, indices: Vec<usize>, values: Vec<T>) -> Result<Self> {
        if indices.len() != values.len() {
            return Err(SpvecError::CorruptedData);
        }
        check_sorted_indices(indices.iter().copied(), length)
            .map_err(|_| SpvecError::CorruptedData)?;

        let mut vector = Self::with_length(length);
        vector.indices = indices;
        vector.values = values;
        Ok(vector)
    }

    /// Build a vector from a dense slice, storing only non-zero positions
    pub fn from_dense(dense: &[T]) -> Self {
        let mut vector = Self::with_length(dense.len());
        for (index, value) in dense.iter().enumerate() {
            if !value.is_zero() {
                vector.indices.push(index);
                vector.values.push(value.clone());
            }
        }
        vector
    }

    /// Materialize every logical position, using zero for missing entries
    pub fn to_dense(&self) -> Vec<T> {
        let mut dense = vec![self.zero.clone(); self.length];
        for (index, value) in self.iter() {
            dense[index] = value.clone();
        }
        dense
    }

    /// Logical length
    pub fn length(&self) -> usize {
        self.length
    }

    /// Whether the logical length is zero
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Largest length this vector has had since construction or `kill`
    pub fn max_length(&self) -> usize {
        self.max_length
    }

    /// Number of stored entries
    pub fn nvalues(&self) -> usize {
        self.indices.len()
    }

    /// Number of entries the backing storage can hold without growing
    pub fn allocated(&self) -> usize {
        self.indices.capacity().min(self.values.capacity())
    }

    /// Whether the length has been locked with `fix_length`
    pub fn is_fixed(&self) -> bool {
        self.fixed
    }

    /// Storage configuration
    pub fn config(&self) -> &VectorConfig {
        &self.config
    }

    /// The zero value handed out for unmaterialized indices
    pub fn zero(&self) -> &T {
        &self.zero
    }

    /// Stored indices, strictly ascending
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Stored values, parallel to [`indices`](Self::indices)
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Iterate stored `(index, value)` pairs in ascending index order
    pub fn iter(&self) -> impl Iterator<Item = (usize, &T)> + '_ {
        self.indices.iter().copied().zip(self.values.iter())
    }

    /// Iterate stored entries with mutable access to their values
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (usize, &mut T)> + '_ {
        self.indices.iter().copied().zip(self.values.iter_mut())
    }

    /// Read the value at `index`, or zero when no entry is stored
    pub fn get(&self, index: usize) -> Result<&T> {
        check_index(index, self.length)?;
        Ok(self.raw_get(index))
    }

    /// Mutable access to the value at `index`, allocating a zero entry if needed
    ///
    /// Allocation may relocate storage; the borrow checker keeps earlier
    /// borrows from surviving this call.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        check_index(index, self.length)?;
        Ok(self.raw_get_mut(index))
    }

    /// Store `value` at `index`
    pub fn set(&mut self, index: usize, value: T) -> Result<()> {
        *self.get_mut(index)? = value;
        Ok(())
    }

    /// [`get`](Self::get) without the range check
    ///
    /// Indices at or past the length read as zero.
    pub fn raw_get(&self, index: usize) -> &T {
        match self.indices.binary_search(&index) {
            Ok(slot) => &self.values[slot],
            Err(_) => &self.zero,
        }
    }

    /// [`get_mut`](Self::get_mut) without the range check
    ///
    /// Writing past the length stores an entry outside the logical range;
    /// validating `index` is the caller's job.
    pub fn raw_get_mut(&mut self, index: usize) -> &mut T {
        let slot = match self.indices.binary_search(&index) {
            Ok(slot) => slot,
            Err(slot) => {
                self.reserve_for_insert();
                self.indices.insert(slot, index);
                self.values.insert(slot, self.zero.clone());
                slot
            }
        };
        &mut self.values[slot]
    }

    /// One-based read access, valid for `1..=length`
    pub fn get_one_based(&self, index: usize) -> Result<&T> {
        let index = check_one_based(index, self.length)?;
        Ok(self.raw_get(index))
    }

    /// One-based mutable access, valid for `1..=length`
    pub fn get_one_based_mut(&mut self, index: usize) -> Result<&mut T> {
        let index = check_one_based(index, self.length)?;
        Ok(self.raw_get_mut(index))
    }

    /// Logical index under which `value` is stored, if it borrows this vector's storage
    ///
    /// References to anything else, including the zero handed out for
    /// missing entries, yield `None`.
    pub fn position(&self, value: &T) -> Option<usize> {
        self.slot_of(value).map(|slot| self.indices[slot])
    }

    /// Like [`position`](Self::position), but reports a stored entry that lies
    /// at or beyond the logical length as `InvalidReference`
    pub fn position_logical(&self, value: &T) -> Result<Option<usize>> {
        match self.position(value) {
            Some(index) if index >= self.length => Err(SpvecError::InvalidReference {
                index,
                length: self.length,
            }),
            found => Ok(found),
        }
    }

    fn slot_of(&self, value: &T) -> Option<usize> {
        let size = std::mem::size_of::<T>();
        let strategy = if size == 0 {
            PositionStrategy::Scan
        } else {
            self.config.position_strategy
        };

        match strategy {
            PositionStrategy::Address => {
                let base = self.values.as_ptr() as usize;
                let address = value as *const T as usize;
                let offset = address.checked_sub(base)?;
                if offset % size != 0 {
                    return None;
                }
                let slot = offset / size;
                (slot < self.values.len()).then_some(slot)
            }
            PositionStrategy::Scan => self.values.iter().position(|v| std::ptr::eq(v, value)),
        }
    }

    pub(crate) fn reserve_for_insert(&mut self) {
        let len = self.indices.len();
        if len < self.allocated() {
            return;
        }
        let additional = self.config.growth.additional(len);
        self.indices.reserve_exact(additional);
        self.values.reserve_exact(additional);
        trace!(
            nvalues = len,
            allocated = self.allocated(),
            "grew sparse vector storage"
        );
    }

    /// Clone that skips stored entries equal to zero
    pub fn copy_compacted(&self) -> Self {
        let kept = self.values.iter().filter(|v| !v.is_zero()).count();
        let mut copy = Self::with_config(self.config.clone());
        copy.length = self.length;
        copy.max_length = self.length;
        copy.indices.reserve_exact(kept);
        copy.values.reserve_exact(kept);
        for (index, value) in self.iter().filter(|(_, v)| !v.is_zero()) {
            copy.indices.push(index);
            copy.values.push(value.clone());
        }
        copy
    }

    /// Copy of this vector with length exactly `length`
    ///
    /// Entries at or beyond `length` are dropped; growing adds no entries.
    pub fn copy_with_length(&self, length: usize) -> Self {
        let kept = self.indices.partition_point(|&index| index < length);
        let mut copy = Self::with_config(self.config.clone());
        copy.length = length;
        copy.max_length = length;
        copy.indices.reserve_exact(kept);
        copy.values.reserve_exact(kept);
        copy.indices.extend_from_slice(&self.indices[..kept]);
        copy.values.extend(self.values[..kept].iter().cloned());
        copy
    }

    /// Replace this vector's content with a copy of `source`
    ///
    /// A fixed vector only accepts sources of its own length.
    pub fn assign_from(&mut self, source: &Self) -> Result<()> {
        if self.fixed && source.length != self.length {
            return Err(SpvecError::LengthMismatch {
                expected: self.length,
                actual: source.length,
            });
        }

        self.indices.clear();
        self.indices.extend_from_slice(&source.indices);
        self.values.clear();
        self.values.extend(source.values.iter().cloned());
        self.length = source.length;
        self.max_length = self.max_length.max(source.length);
        Ok(())
    }
}

/// Copy `vector` into a new vector of length exactly `length`
pub fn vector_copy<T: Element>(vector: &SparseVector<T>, length: usize) -> SparseVector<T> {
    vector.copy_with_length(length)
}

impl<T: Element> Default for SparseVector<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Element> Clone for SparseVector<T> {
    /// Copies content with capacity for exactly the stored entries; the
    /// copy starts unfixed and its high-water mark starts at its length
    fn clone(&self) -> Self {
        let mut copy = Self::with_config(self.config.clone());
        copy.length = self.length;
        copy.max_length = self.length;
        copy.indices.reserve_exact(self.indices.len());
        copy.values.reserve_exact(self.values.len());
        copy.indices.extend_from_slice(&self.indices);
        copy.values.extend(self.values.iter().cloned());
        copy
    }
}

impl<T: Element> PartialEq for SparseVector<T> {
    /// Logical equality: same length and the same value at every index,
    /// whatever the sparsity pattern
    fn eq(&self, other: &Self) -> bool {
        if self.length != other.length {
            return false;
        }

        let (mut i, mut j) = (0, 0);
        while i < self.indices.len() && j < other.indices.len() {
            match self.indices[i].cmp(&other.indices[j]) {
                std::cmp::Ordering::Less => {
                    if !self.values[i].is_zero() {
                        return false;
                    }
                    i += 1;
                }
                std::cmp::Ordering::Greater => {
                    if !other.values[j].is_zero() {
                        return false;
                    }
                    j += 1;
                }
                std::cmp::Ordering::Equal => {
                    if self.values[i] != other.values[j] {
                        return false;
                    }
                    i += 1;
                    j += 1;
                }
            }
        }

        self.values[i..].iter().all(|v| v.is_zero())
            && other.values[j..].iter().all(|v| v.is_zero())
    }
}

impl<T: Element> Index<usize> for SparseVector<T> {
    type Output = T;

    /// # Panics
    ///
    /// Panics if `index >= length`.
    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T: Element> IndexMut<usize> for SparseVector<T> {
    /// # Panics
    ///
    /// Panics if `index >= length`.
    fn index_mut(&mut self, index: usize) -> &mut T {
        match self.get_mut(index) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<'a, T: Element> IntoIterator for &'a SparseVector<T> {
    type Item = (usize, &'a T);
    type IntoIter = std::iter::Zip<std::iter::Copied<std::slice::Iter<'a, usize>>, std::slice::Iter<'a, T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.indices.iter().copied().zip(self.values.iter())
    }
}
