//! Layout helpers for the binary encoding

use crate::SpvecError;

/// Align an offset to a specific boundary
///
/// `boundary` must be a power of two.
pub const fn align_to_boundary(offset: usize, boundary: usize) -> usize {
    (offset + boundary - 1) & !(boundary - 1)
}

/// Calculate padding needed to reach alignment boundary
pub const fn calculate_padding(offset: usize, boundary: usize) -> usize {
    align_to_boundary(offset, boundary) - offset
}

/// Total encoded size for a vector with `nvalues` entries of `element_width` bytes
///
/// Header, u64 indices, padding to the alignment boundary, then elements.
pub const fn encoded_size(
    header_size: usize,
    nvalues: usize,
    element_width: usize,
    boundary: usize,
) -> Result<usize, SpvecError> {
    let indices_end = match nvalues.checked_mul(8) {
        Some(bytes) => match header_size.checked_add(bytes) {
            Some(end) => end,
            None => return Err(SpvecError::CorruptedData),
        },
        None => return Err(SpvecError::CorruptedData),
    };
    let values_start = align_to_boundary(indices_end, boundary);
    match nvalues.checked_mul(element_width) {
        Some(bytes) => match values_start.checked_add(bytes) {
            Some(total) => Ok(total),
            None => Err(SpvecError::CorruptedData),
        },
        None => Err(SpvecError::CorruptedData),
    }
}
