//! Binary header for encoded sparse vectors

use crate::error::{Result, SpvecError};

/// Fixed-size header preceding a binary-encoded sparse vector
///
/// All multi-byte fields are little-endian. The header is followed by
/// `nvalues` u64 indices, zero padding up to the next 8-byte boundary,
/// then `nvalues` elements of `element_width` bytes each.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VectorHeader {
    /// Magic bytes: "SPVC"
    pub magic: [u8; 4],
    /// Format version
    pub version: u8,
    /// Size of one element in bytes
    pub element_width: u8,
    /// Structure flags (see [`super::constants`])
    pub flags: u8,
    /// Logical length of the vector
    pub length: u64,
    /// Number of stored entries
    pub nvalues: u64,
    /// Reserved bytes for future use
    pub reserved: [u8; 9],
}

impl VectorHeader {
    /// Magic bytes for encoded vectors
    pub const MAGIC: [u8; 4] = *b"SPVC";

    /// Current format version
    pub const VERSION: u8 = 1;

    /// Size of the encoded header in bytes
    pub const SIZE: usize = 32;

    /// Create a new header with default values
    pub const fn new() -> Self {
        Self {
            magic: Self::MAGIC,
            version: Self::VERSION,
            element_width: 0,
            flags: super::constants::SORTED_INDICES,
            length: 0,
            nvalues: 0,
            reserved: [0; 9],
        }
    }

    /// Parse header from bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() < Self::SIZE {
            return Err(SpvecError::InsufficientBuffer);
        }

        if bytes[0..4] != Self::MAGIC {
            return Err(SpvecError::InvalidHeader);
        }

        let version = bytes[4];
        if version == 0 || version > Self::VERSION {
            return Err(SpvecError::UnsupportedFormat);
        }

        let mut reserved = [0u8; 9];
        reserved[0] = bytes[7];
        reserved[1..].copy_from_slice(&bytes[24..32]);

        Ok(Self {
            magic: Self::MAGIC,
            version,
            element_width: bytes[5],
            flags: bytes[6],
            length: read_u64_le(bytes, 8),
            nvalues: read_u64_le(bytes, 16),
            reserved,
        })
    }

    /// Convert header to a byte array
    pub fn to_bytes_array(&self) -> [u8; Self::SIZE] {
        let mut bytes = [0u8; Self::SIZE];

        bytes[0..4].copy_from_slice(&self.magic);
        bytes[4] = self.version;
        bytes[5] = self.element_width;
        bytes[6] = self.flags;
        bytes[7] = self.reserved[0];
        bytes[8..16].copy_from_slice(&self.length.to_le_bytes());
        bytes[16..24].copy_from_slice(&self.nvalues.to_le_bytes());
        bytes[24..32].copy_from_slice(&self.reserved[1..]);

        bytes
    }
}

impl Default for VectorHeader {
    fn default() -> Self {
        Self::new()
    }
}

/// Read a little-endian u64 at `offset`; caller guarantees 8 bytes are available
pub fn read_u64_le(bytes: &[u8], offset: usize) -> u64 {
    let mut word = [0u8; 8];
    word.copy_from_slice(&bytes[offset..offset + 8]);
    u64::from_le_bytes(word)
}
