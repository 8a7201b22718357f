//! XBM bitmap reader.
//!
//! XBM files are C source fragments:
//!
//! ```text
//! #define close_width 6
//! #define close_height 6
//! static unsigned char close_bits[] = {
//!    0x33, 0x3f, 0x1e, 0x1e, 0x3f, 0x33 };
//! ```
//!
//! Each row occupies `ceil(width / 8)` bytes, and within a byte the least
//! significant bit is the leftmost pixel.

use std::fs;
use std::path::Path;

use crate::error::{ParseError, Result};

/// A decoded 1-bit bitmap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Xbm {
    pub width: u32,
    pub height: u32,
    /// Row-major, `stride()` bytes per row.
    pub bits: Vec<u8>,
}

impl Xbm {
    /// Bytes per row.
    pub fn stride(&self) -> usize {
        (self.width as usize).div_ceil(8)
    }

    /// Returns whether the pixel at `(x, y)` is set. Out-of-range
    /// coordinates read as unset.
    pub fn pixel(&self, x: u32, y: u32) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        let byte = self.bits[y as usize * self.stride() + (x as usize / 8)];
        byte & (1 << (x % 8)) != 0
    }

    /// Parses XBM source text.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::Xbm`] when the dimensions are missing or the
    /// data array is shorter than the dimensions require.
    pub fn parse(source: &str) -> Result<Self> {
        let mut width = None;
        let mut height = None;

        for line in source.lines() {
            let mut words = line.split_whitespace();
            if words.next() != Some("#define") {
                continue;
            }
            let (Some(name), Some(value)) = (words.next(), words.next()) else {
                continue;
            };
            let value = parse_number(value);
            if name.ends_with("_width") {
                width = value;
            } else if name.ends_with("_height") {
                height = value;
            }
        }

        let width = width.ok_or_else(|| ParseError::xbm("missing width"))?;
        let height = height.ok_or_else(|| ParseError::xbm("missing height"))?;

        let open = source
            .find('{')
            .ok_or_else(|| ParseError::xbm("missing data array"))?;
        let close = source[open..]
            .find('}')
            .map(|i| open + i)
            .ok_or_else(|| ParseError::xbm("unterminated data array"))?;

        let mut bits = Vec::new();
        for token in source[open + 1..close].split(',') {
            let token = token.trim();
            if token.is_empty() {
                continue;
            }
            let byte = parse_number(token)
                .and_then(|v| u8::try_from(v).ok())
                .ok_or_else(|| ParseError::xbm(format!("invalid byte {token:?}")))?;
            bits.push(byte);
        }

        let needed = (width as usize).div_ceil(8) * height as usize;
        if bits.len() < needed {
            return Err(ParseError::xbm(format!(
                "expected {needed} bytes, found {}",
                bits.len()
            )));
        }
        bits.truncate(needed);

        Ok(Self {
            width,
            height,
            bits,
        })
    }

    /// Reads and parses an XBM file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| ParseError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&source)
    }
}

fn parse_number(token: &str) -> Option<u32> {
    match token
        .strip_prefix("0x")
        .or_else(|| token.strip_prefix("0X"))
    {
        Some(hex) => u32::from_str_radix(hex, 16).ok(),
        None => token.parse().ok(),
    }
}
