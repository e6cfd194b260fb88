//! Text encodings
//!
//! Sparse: `<i0 v0 i1 v1 ... n>`, dense: `[v0 v1 ... v_{n-1}]`. Reading
//! accepts either, writing through `Display` always produces the sparse
//! form and [`SparseVector::dense`] produces the dense form.

use crate::vector::SparseVector;
use spvec_core::{parse_usize, scan_vector, Element, Result, SpvecError, TextFormat};
use std::fmt;
use std::str::FromStr;

/// Display adapter that writes a vector in the dense text format
#[derive(Debug)]
pub struct Dense<'a, T: Element>(&'a SparseVector<T>);

impl<T: Element> SparseVector<T> {
    /// View this vector for dense text output, whatever its sparsity
    pub fn dense(&self) -> Dense<'_, T> {
        Dense(self)
    }
}

impl<T: Element + FromStr> SparseVector<T> {
    /// Replace this vector's content with a parsed sparse or dense string
    ///
    /// A fixed vector only accepts text of its own length. On error the
    /// vector is left unchanged.
    pub fn read_text(&mut self, text: &str) -> Result<()> {
        let parsed = parse_text::<T>(text)?;
        if self.fixed && parsed.length != self.length {
            return Err(SpvecError::LengthMismatch {
                expected: self.length,
                actual: parsed.length,
            });
        }

        self.indices = parsed.indices;
        self.values = parsed.values;
        self.length = parsed.length;
        self.max_length = self.max_length.max(parsed.length);
        Ok(())
    }
}

fn parse_error(offset: usize, reason: &'static str) -> SpvecError {
    SpvecError::Parse { offset, reason }
}

fn parse_value<T: FromStr>(word: &str, offset: usize) -> Result<T> {
    word.parse::<T>()
        .map_err(|_| parse_error(offset, "invalid element value"))
}

/// Parse a vector from either text format, detected by its opening delimiter
pub fn parse_text<T: Element + FromStr>(text: &str) -> Result<SparseVector<T>> {
    let scanned = scan_vector(text)?;
    let words: Vec<(usize, &str)> = scanned.words().collect();

    match scanned.format {
        TextFormat::Sparse => parse_sparse(text, &words),
        TextFormat::Dense => parse_dense(&words),
    }
}

fn parse_sparse<T: Element + FromStr>(
    text: &str,
    words: &[(usize, &str)],
) -> Result<SparseVector<T>> {
    let (&(length_offset, length_word), pairs) = words
        .split_last()
        .ok_or(parse_error(text.len(), "missing length"))?;
    let length = parse_usize(length_word, length_offset)?;

    if pairs.len() % 2 != 0 {
        return Err(parse_error(length_offset, "index without a value"));
    }

    let mut indices = Vec::with_capacity(pairs.len() / 2);
    let mut values = Vec::with_capacity(pairs.len() / 2);
    for pair in pairs.chunks_exact(2) {
        let (index_offset, index_word) = pair[0];
        let (value_offset, value_word) = pair[1];

        let index = parse_usize(index_word, index_offset)?;
        if index >= length {
            return Err(parse_error(index_offset, "index out of range"));
        }
        if indices.last().is_some_and(|&previous| previous >= index) {
            return Err(parse_error(index_offset, "indices not strictly ascending"));
        }

        indices.push(index);
        values.push(parse_value::<T>(value_word, value_offset)?);
    }

    let mut vector = SparseVector::with_length(length);
    vector.indices = indices;
    vector.values = values;
    Ok(vector)
}

fn parse_dense<T: Element + FromStr>(words: &[(usize, &str)]) -> Result<SparseVector<T>> {
    let mut vector = SparseVector::with_length(words.len());
    for (index, &(offset, word)) in words.iter().enumerate() {
        let value = parse_value::<T>(word, offset)?;
        if !value.is_zero() {
            vector.indices.push(index);
            vector.values.push(value);
        }
    }
    Ok(vector)
}

impl<T: Element + FromStr> FromStr for SparseVector<T> {
    type Err = SpvecError;

    fn from_str(s: &str) -> Result<Self> {
        parse_text(s)
    }
}

impl<T: Element + fmt::Display> fmt::Display for SparseVector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", TextFormat::Sparse.open())?;
        for (index, value) in self.iter() {
            write!(f, "{index} {value} ")?;
        }
        write!(f, "{}{}", self.length, TextFormat::Sparse.close())
    }
}

impl<T: Element + fmt::Display> fmt::Display for Dense<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let vector = self.0;
        let mut stored = vector.iter().peekable();

        write!(f, "{}", TextFormat::Dense.open())?;
        for index in 0..vector.length {
            if index > 0 {
                write!(f, " ")?;
            }
            match stored.next_if(|&(stored_index, _)| stored_index == index) {
                Some((_, value)) => write!(f, "{value}")?,
                None => write!(f, "{}", vector.zero)?,
            }
        }
        write!(f, "{}", TextFormat::Dense.close())
    }
}
