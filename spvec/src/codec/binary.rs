//! Binary encoding for plain-old-data element types
//!
//! Layout: a [`VectorHeader`], `nvalues` little-endian u64 indices, zero
//! padding to [`ALIGNMENT_BOUNDARY`], then the raw element bytes in native
//! byte order.

use crate::vector::SparseVector;
use bytemuck::Pod;
use spvec_core::format::constants::ALIGNMENT_BOUNDARY;
use spvec_core::format::header::read_u64_le;
use spvec_core::{calculate_padding, encoded_size, Element, Result, SpvecError, VectorHeader};

impl<T: Element + Pod> SparseVector<T> {
    /// Encode this vector into a byte buffer
    ///
    /// Elements wider than 255 bytes are rejected with `UnsupportedFormat`.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let width = std::mem::size_of::<T>();
        let mut header = VectorHeader::new();
        header.element_width = u8::try_from(width).map_err(|_| SpvecError::UnsupportedFormat)?;
        header.length = self.length as u64;
        header.nvalues = self.indices.len() as u64;

        let indices_end = VectorHeader::SIZE + self.indices.len() * 8;
        let padding = calculate_padding(indices_end, ALIGNMENT_BOUNDARY);

        let mut bytes = Vec::with_capacity(indices_end + padding + self.values.len() * width);
        bytes.extend_from_slice(&header.to_bytes_array());
        for &index in &self.indices {
            bytes.extend_from_slice(&(index as u64).to_le_bytes());
        }
        bytes.resize(indices_end + padding, 0);
        if width > 0 {
            bytes.extend_from_slice(bytemuck::cast_slice(&self.values));
        }
        Ok(bytes)
    }

    /// Decode a vector produced by [`to_bytes`](Self::to_bytes)
    ///
    /// The buffer does not need to be aligned.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let header = VectorHeader::from_bytes(bytes)?;

        let width = std::mem::size_of::<T>();
        if header.element_width as usize != width {
            return Err(SpvecError::UnsupportedFormat);
        }

        let length = usize::try_from(header.length).map_err(|_| SpvecError::CorruptedData)?;
        let nvalues = usize::try_from(header.nvalues).map_err(|_| SpvecError::CorruptedData)?;
        if nvalues > length {
            return Err(SpvecError::CorruptedData);
        }

        let total = encoded_size(VectorHeader::SIZE, nvalues, width, ALIGNMENT_BOUNDARY)?;
        if bytes.len() < total {
            return Err(SpvecError::InsufficientBuffer);
        }

        let indices_end = VectorHeader::SIZE + nvalues * 8;
        let mut indices = Vec::with_capacity(nvalues);
        for offset in (VectorHeader::SIZE..indices_end).step_by(8) {
            let index =
                usize::try_from(read_u64_le(bytes, offset)).map_err(|_| SpvecError::CorruptedData)?;
            indices.push(index);
        }

        let values_start = indices_end + calculate_padding(indices_end, ALIGNMENT_BOUNDARY);
        let values: Vec<T> = if width == 0 {
            vec![T::zeroed(); nvalues]
        } else {
            bytes[values_start..total]
                .chunks_exact(width)
                .map(bytemuck::pod_read_unaligned)
                .collect()
        };

        Self::from_parts(length, indices, values)
    }
}
