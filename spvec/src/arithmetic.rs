//! Merge arithmetic over sorted sparse storage
//!
//! Binary operations walk both ascending index arrays once. Entries are
//! produced for every index stored in either operand, even when the result
//! cancels to zero; call `compact` to drop those.

use crate::vector::SparseVector;
use spvec_core::{check_same_length, Arithmetic, Result};
use std::cmp::Ordering;
use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

impl<T: Arithmetic> SparseVector<T> {
    fn merge_with(
        &self,
        other: &Self,
        both: impl Fn(&T, &T) -> T,
        left_only: impl Fn(&T) -> T,
        right_only: impl Fn(&T) -> T,
    ) -> Result<Self> {
        check_same_length(self.length, other.length)?;

        let mut result = Self::with_config(self.config.clone());
        result.length = self.length;
        result.max_length = self.length;
        result.set_alloc(self.nvalues() + other.nvalues());

        let (mut i, mut j) = (0, 0);
        while i < self.indices.len() && j < other.indices.len() {
            match self.indices[i].cmp(&other.indices[j]) {
                Ordering::Less => {
                    result.indices.push(self.indices[i]);
                    result.values.push(left_only(&self.values[i]));
                    i += 1;
                }
                Ordering::Greater => {
                    result.indices.push(other.indices[j]);
                    result.values.push(right_only(&other.values[j]));
                    j += 1;
                }
                Ordering::Equal => {
                    result.indices.push(self.indices[i]);
                    result.values.push(both(&self.values[i], &other.values[j]));
                    i += 1;
                    j += 1;
                }
            }
        }
        for (index, value) in self.indices[i..].iter().zip(&self.values[i..]) {
            result.indices.push(*index);
            result.values.push(left_only(value));
        }
        for (index, value) in other.indices[j..].iter().zip(&other.values[j..]) {
            result.indices.push(*index);
            result.values.push(right_only(value));
        }

        Ok(result)
    }

    /// Multiply every stored value by `scalar`
    pub fn scale(&self, scalar: &T) -> Self {
        let mut result = self.clone();
        for value in result.values.iter_mut() {
            let stored = std::mem::replace(value, self.zero.clone());
            *value = stored * scalar.clone();
        }
        result
    }

    /// Element-wise sum; both operands must have the same length
    pub fn try_add(&self, other: &Self) -> Result<Self> {
        self.merge_with(
            other,
            |a, b| a.clone() + b.clone(),
            |a| a.clone() + self.zero.clone(),
            |b| self.zero.clone() + b.clone(),
        )
    }

    /// Element-wise difference; both operands must have the same length
    pub fn try_sub(&self, other: &Self) -> Result<Self> {
        self.merge_with(
            other,
            |a, b| a.clone() - b.clone(),
            |a| a.clone() - self.zero.clone(),
            |b| self.zero.clone() - b.clone(),
        )
    }

    /// Inner product, accumulated over indices stored in both operands
    pub fn dot(&self, other: &Self) -> Result<T> {
        check_same_length(self.length, other.length)?;

        let mut sum = self.zero.clone();
        let (mut i, mut j) = (0, 0);
        while i < self.indices.len() && j < other.indices.len() {
            match self.indices[i].cmp(&other.indices[j]) {
                Ordering::Less => i += 1,
                Ordering::Greater => j += 1,
                Ordering::Equal => {
                    sum = sum + self.values[i].clone() * other.values[j].clone();
                    i += 1;
                    j += 1;
                }
            }
        }
        Ok(sum)
    }

    /// `self + dense`, materialized densely
    pub fn add_dense(&self, dense: &[T]) -> Result<Vec<T>> {
        check_same_length(self.length, dense.len())?;

        let mut result = dense.to_vec();
        for (index, value) in self.iter() {
            let other = std::mem::replace(&mut result[index], self.zero.clone());
            result[index] = value.clone() + other;
        }
        Ok(result)
    }

    /// `self - dense`, materialized densely
    pub fn sub_dense(&self, dense: &[T]) -> Result<Vec<T>> {
        check_same_length(self.length, dense.len())?;

        let mut stored = self.iter().peekable();
        let result: Vec<T> = dense
            .iter()
            .enumerate()
            .map(|(index, d)| {
                let left = match stored.next_if(|&(stored_index, _)| stored_index == index) {
                    Some((_, value)) => value.clone(),
                    None => self.zero.clone(),
                };
                left - d.clone()
            })
            .collect();
        Ok(result)
    }

    /// Inner product with a dense slice, indexing the slice directly
    pub fn dot_dense(&self, dense: &[T]) -> Result<T> {
        check_same_length(self.length, dense.len())?;

        let mut sum = self.zero.clone();
        for (index, value) in self.iter() {
            sum = sum + value.clone() * dense[index].clone();
        }
        Ok(sum)
    }

    /// `self += other`, storing the merged entries in `self`
    pub fn try_add_assign(&mut self, other: &Self) -> Result<()> {
        let merged = self.try_add(other)?;
        self.replace_storage(merged);
        Ok(())
    }

    /// `self -= other`, storing the merged entries in `self`
    pub fn try_sub_assign(&mut self, other: &Self) -> Result<()> {
        let merged = self.try_sub(other)?;
        self.replace_storage(merged);
        Ok(())
    }

    fn replace_storage(&mut self, merged: Self) {
        self.indices = merged.indices;
        self.values = merged.values;
    }
}

impl<T: Arithmetic + Neg<Output = T>> SparseVector<T> {
    /// Negate every stored value
    pub fn negate(&self) -> Self {
        let mut result = self.clone();
        for value in result.values.iter_mut() {
            let stored = std::mem::replace(value, self.zero.clone());
            *value = -stored;
        }
        result
    }
}

fn unwrap_or_panic<V>(result: Result<V>) -> V {
    match result {
        Ok(value) => value,
        Err(err) => panic!("{err}"),
    }
}

/// # Panics
///
/// Panics if the lengths differ; use [`SparseVector::try_add`] to handle that.
impl<T: Arithmetic> Add<&SparseVector<T>> for &SparseVector<T> {
    type Output = SparseVector<T>;

    fn add(self, rhs: &SparseVector<T>) -> SparseVector<T> {
        unwrap_or_panic(self.try_add(rhs))
    }
}

/// # Panics
///
/// Panics if the lengths differ; use [`SparseVector::try_sub`] to handle that.
impl<T: Arithmetic> Sub<&SparseVector<T>> for &SparseVector<T> {
    type Output = SparseVector<T>;

    fn sub(self, rhs: &SparseVector<T>) -> SparseVector<T> {
        unwrap_or_panic(self.try_sub(rhs))
    }
}

/// Inner product
///
/// # Panics
///
/// Panics if the lengths differ; use [`SparseVector::dot`] to handle that.
impl<T: Arithmetic> Mul<&SparseVector<T>> for &SparseVector<T> {
    type Output = T;

    fn mul(self, rhs: &SparseVector<T>) -> T {
        unwrap_or_panic(self.dot(rhs))
    }
}

impl<T: Arithmetic + Neg<Output = T>> Neg for &SparseVector<T> {
    type Output = SparseVector<T>;

    fn neg(self) -> SparseVector<T> {
        self.negate()
    }
}

impl<T: Arithmetic> AddAssign<&SparseVector<T>> for SparseVector<T> {
    fn add_assign(&mut self, rhs: &SparseVector<T>) {
        unwrap_or_panic(self.try_add_assign(rhs))
    }
}

impl<T: Arithmetic> SubAssign<&SparseVector<T>> for SparseVector<T> {
    fn sub_assign(&mut self, rhs: &SparseVector<T>) {
        unwrap_or_panic(self.try_sub_assign(rhs))
    }
}

macro_rules! impl_scalar_mul {
    ($($t:ty),* $(,)?) => {
        $(
            impl Mul<$t> for &SparseVector<$t> {
                type Output = SparseVector<$t>;

                fn mul(self, scalar: $t) -> SparseVector<$t> {
                    self.scale(&scalar)
                }
            }

            impl Mul<&SparseVector<$t>> for $t {
                type Output = SparseVector<$t>;

                fn mul(self, vector: &SparseVector<$t>) -> SparseVector<$t> {
                    vector.scale(&self)
                }
            }
        )*
    };
}

impl_scalar_mul!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

#[cfg(test)]
mod tests {
    use super::*;
    use spvec_core::SpvecError;

    fn sparse(length: usize, entries: &[(usize, i64)]) -> SparseVector<i64> {
        let mut v = SparseVector::with_length(length);
        for &(index, value) in entries {
            v[index] = value;
        }
        v
    }

    #[test]
    fn test_inner_product_overlap_only() {
        let a = sparse(4, &[(0, 1), (2, 2)]);
        let b = sparse(4, &[(2, 3), (3, 5)]);
        assert_eq!(&a * &b, 6);
        assert_eq!(a.dot(&b), Ok(6));
        assert_eq!(b.dot(&a), Ok(6));
    }

    #[test]
    fn test_add_and_sub_merge() {
        let a = sparse(6, &[(0, 1), (2, 2), (5, 4)]);
        let b = sparse(6, &[(2, 3), (3, 5)]);

        let sum = &a + &b;
        assert_eq!(sum.indices(), &[0, 2, 3, 5]);
        assert_eq!(sum.to_dense(), vec![1, 0, 5, 5, 0, 4]);

        let diff = &a - &b;
        assert_eq!(diff.to_dense(), vec![1, 0, -1, -5, 0, 4]);
    }

    #[test]
    fn test_cancellation_keeps_entry() {
        let a = sparse(3, &[(1, 7)]);
        let mut diff = a.try_sub(&a).unwrap();
        assert_eq!(diff.nvalues(), 1);
        assert!(diff.is_zero());
        diff.compact();
        assert_eq!(diff.nvalues(), 0);
    }

    #[test]
    fn test_length_mismatch() {
        let a = sparse(3, &[]);
        let b = sparse(4, &[]);
        let mismatch = Err(SpvecError::LengthMismatch { expected: 3, actual: 4 });

        assert_eq!(a.try_add(&b).err(), mismatch.err());
        assert_eq!(a.dot(&b), mismatch);
        assert!(a.add_dense(&[0, 0]).is_err());
        assert!(a.dot_dense(&[0; 4]).is_err());
    }

    #[test]
    #[should_panic(expected = "length mismatch")]
    fn test_operator_panics_on_mismatch() {
        let _sum = &sparse(3, &[]) + &sparse(4, &[]);
    }

    #[test]
    fn test_scale_and_negate() {
        let a = sparse(5, &[(1, 2), (4, -3)]);

        let scaled = &a * 3i64;
        assert_eq!(scaled.indices(), a.indices());
        assert_eq!(scaled.to_dense(), vec![0, 6, 0, 0, -9]);
        assert_eq!(3i64 * &a, scaled);

        assert_eq!((-&a).to_dense(), vec![0, -2, 0, 0, 3]);
        assert_eq!(a.negate().length(), 5);
    }

    #[test]
    fn test_dense_variants() {
        let a = sparse(4, &[(1, 2), (3, 1)]);
        let dense = [10, 20, 30, 40];

        assert_eq!(a.add_dense(&dense), Ok(vec![10, 22, 30, 41]));
        assert_eq!(a.sub_dense(&dense), Ok(vec![-10, -18, -30, -39]));
        assert_eq!(a.dot_dense(&dense), Ok(80));
    }

    #[test]
    fn test_sub_dense_unsigned() {
        let a = SparseVector::from_dense(&[5u32, 7]);
        assert_eq!(a.sub_dense(&[3, 2]), Ok(vec![2, 5]));
        assert_eq!(
            a.try_sub(&SparseVector::from_dense(&[3, 2])).unwrap().to_dense(),
            vec![2, 5]
        );

        let mut partial: SparseVector<u8> = SparseVector::with_length(3);
        partial[1] = 9;
        assert_eq!(partial.sub_dense(&[0, 4, 0]), Ok(vec![0, 5, 0]));
    }

    #[test]
    fn test_compound_assignment() {
        let mut a = sparse(4, &[(0, 1)]);
        let b = sparse(4, &[(0, 1), (2, 2)]);

        a += &b;
        assert_eq!(a.to_dense(), vec![2, 0, 2, 0]);
        a -= &b;
        assert_eq!(a.to_dense(), vec![1, 0, 0, 0]);
        assert_eq!(a.nvalues(), 2);

        let mut fixed: SparseVector<i64> = SparseVector::new();
        fixed.fix_length(4).unwrap();
        fixed.try_add_assign(&b).unwrap();
        assert!(fixed.is_fixed());
        assert_eq!(fixed, b);
        assert!(fixed.try_add_assign(&sparse(5, &[])).is_err());
    }

    #[test]
    fn test_float_arithmetic() {
        let mut a: SparseVector<f64> = SparseVector::with_length(3);
        a[0] = 0.5;
        let b = SparseVector::from_dense(&[2.0, 0.0, 1.0]);
        assert_eq!(a.dot(&b), Ok(1.0));
        assert_eq!((&a * 2.0f64).to_dense(), vec![1.0, 0.0, 0.0]);
        assert_eq!((&a + &b).to_dense(), vec![2.5, 0.0, 1.0]);
    }
}
