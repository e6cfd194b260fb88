//! Index and length validation for sparse vectors
//!
//! Pure checks with no storage access.

use crate::SpvecError;

/// Validate a zero-based index against a logical length
pub const fn check_index(index: usize, length: usize) -> Result<(), SpvecError> {
    if index >= length {
        return Err(SpvecError::IndexOutOfRange { index, length });
    }
    Ok(())
}

/// Validate a one-based (Fortran-style) index and translate it to zero-based
pub const fn check_one_based(index: usize, length: usize) -> Result<usize, SpvecError> {
    if index == 0 || index > length {
        return Err(SpvecError::IndexOutOfRange { index, length });
    }
    Ok(index - 1)
}

/// Validate that two operands share a length
pub const fn check_same_length(expected: usize, actual: usize) -> Result<(), SpvecError> {
    if expected != actual {
        return Err(SpvecError::LengthMismatch { expected, actual });
    }
    Ok(())
}

/// Validate that `indices` is strictly ascending and bounded by `length`
///
/// Returns the position of the first offending entry on failure.
pub fn check_sorted_indices<I>(indices: I, length: usize) -> Result<(), usize>
where
    I: IntoIterator<Item = usize>,
{
    let mut previous: Option<usize> = None;
    for (position, index) in indices.into_iter().enumerate() {
        if index >= length || previous.is_some_and(|p| p >= index) {
            return Err(position);
        }
        previous = Some(index);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_index() {
        assert_eq!(check_index(0, 1), Ok(()));
        assert_eq!(check_index(4, 5), Ok(()));
        assert_eq!(
            check_index(5, 5),
            Err(SpvecError::IndexOutOfRange { index: 5, length: 5 })
        );
        assert_eq!(
            check_index(0, 0),
            Err(SpvecError::IndexOutOfRange { index: 0, length: 0 })
        );
    }

    #[test]
    fn test_check_one_based() {
        assert_eq!(check_one_based(1, 3), Ok(0));
        assert_eq!(check_one_based(3, 3), Ok(2));
        assert!(check_one_based(0, 3).is_err());
        assert!(check_one_based(4, 3).is_err());
    }

    #[test]
    fn test_check_same_length() {
        assert_eq!(check_same_length(4, 4), Ok(()));
        assert_eq!(
            check_same_length(4, 3),
            Err(SpvecError::LengthMismatch { expected: 4, actual: 3 })
        );
    }

    #[test]
    fn test_check_sorted_indices() {
        assert_eq!(check_sorted_indices([0, 2, 7], 8), Ok(()));
        assert_eq!(check_sorted_indices([0usize; 0], 0), Ok(()));
        assert_eq!(check_sorted_indices([0, 2, 2], 8), Err(2));
        assert_eq!(check_sorted_indices([3, 1], 8), Err(1));
        assert_eq!(check_sorted_indices([1, 8], 8), Err(1));
    }
}
