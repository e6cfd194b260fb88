//! Parsing utilities for the sparse vector text formats
//!
//! Splits `<i0 v0 ... n>` and `[v0 v1 ...]` strings into delimited words
//! without allocating. Element values are left as string slices for the
//! caller to convert.

use crate::format::{constants, TextFormat};
use crate::SpvecError;

/// A bracketed vector body located inside a larger string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VectorText<'a> {
    /// Encoding selected by the opening delimiter
    pub format: TextFormat,
    body: &'a str,
    body_offset: usize,
}

impl<'a> VectorText<'a> {
    /// Whitespace-separated words between the delimiters, with byte offsets
    /// into the original string
    pub fn words(&self) -> Words<'a> {
        Words {
            rest: self.body,
            offset: self.body_offset,
        }
    }
}

/// Iterator over `(offset, word)` pairs of a vector body
#[derive(Debug, Clone)]
pub struct Words<'a> {
    rest: &'a str,
    offset: usize,
}

impl<'a> Iterator for Words<'a> {
    type Item = (usize, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        let trimmed = self.rest.trim_start();
        self.offset += self.rest.len() - trimmed.len();
        if trimmed.is_empty() {
            self.rest = trimmed;
            return None;
        }

        let end = trimmed
            .find(char::is_whitespace)
            .unwrap_or(trimmed.len());
        let word = &trimmed[..end];
        let start = self.offset;

        self.rest = &trimmed[end..];
        self.offset += end;
        Some((start, word))
    }
}

fn is_delimiter(c: char) -> bool {
    matches!(
        c,
        constants::SPARSE_OPEN
            | constants::SPARSE_CLOSE
            | constants::DENSE_OPEN
            | constants::DENSE_CLOSE
    )
}

fn parse_error(offset: usize, reason: &'static str) -> SpvecError {
    SpvecError::Parse { offset, reason }
}

/// Locate the vector body in `text` and detect its format
///
/// Leading and trailing whitespace is accepted; anything else outside the
/// delimiters is rejected.
pub fn scan_vector(text: &str) -> Result<VectorText<'_>, SpvecError> {
    let trimmed = text.trim_start();
    let open_offset = text.len() - trimmed.len();

    let open = trimmed
        .chars()
        .next()
        .ok_or(parse_error(open_offset, "empty input"))?;
    let format =
        TextFormat::from_open(open).ok_or(parse_error(open_offset, "expected '<' or '['"))?;

    let body_offset = open_offset + open.len_utf8();
    let after_open = &text[body_offset..];

    let close_pos = after_open
        .find(is_delimiter)
        .ok_or(parse_error(text.len(), "missing closing delimiter"))?;
    let close = after_open[close_pos..]
        .chars()
        .next()
        .ok_or(parse_error(text.len(), "missing closing delimiter"))?;
    if close != format.close() {
        return Err(parse_error(body_offset + close_pos, "unexpected delimiter"));
    }

    let tail_offset = body_offset + close_pos + close.len_utf8();
    let tail = &text[tail_offset..];
    if let Some(pos) = tail.find(|c: char| !c.is_whitespace()) {
        return Err(parse_error(tail_offset + pos, "trailing characters"));
    }

    Ok(VectorText {
        format,
        body: &after_open[..close_pos],
        body_offset,
    })
}

/// Parse a usize index or length word
pub fn parse_usize(s: &str, offset: usize) -> Result<usize, SpvecError> {
    if s.is_empty() {
        return Err(parse_error(offset, "expected an integer"));
    }

    let mut result: usize = 0;

    for byte in s.bytes() {
        if !byte.is_ascii_digit() {
            return Err(parse_error(offset, "expected an integer"));
        }

        let digit = (byte - b'0') as usize;

        if result > (usize::MAX - digit) / 10 {
            return Err(parse_error(offset, "integer overflow"));
        }

        result = result * 10 + digit;
    }

    Ok(result)
}
