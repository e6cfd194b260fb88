//! Format constants and delimiters

/// Opening delimiter of the sparse text format `<i v ... n>`
pub const SPARSE_OPEN: char = '<';

/// Closing delimiter of the sparse text format
pub const SPARSE_CLOSE: char = '>';

/// Opening delimiter of the dense text format `[v0 v1 ...]`
pub const DENSE_OPEN: char = '[';

/// Closing delimiter of the dense text format
pub const DENSE_CLOSE: char = ']';

/// Alignment boundary for the element section of the binary encoding
pub const ALIGNMENT_BOUNDARY: usize = 8;

/// Structure flag: stored indices are strictly ascending
pub const SORTED_INDICES: u8 = 1;
