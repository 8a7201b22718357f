//! Stencil masks for small iconic controls.
//!
//! A [`Mask`] owns its bits, so a state variant made by deep copy can be
//! recolored or edited without touching the mask it came from. Masks come
//! from authored XBM files through a [`BitmapSource`], or from the compiled
//! [`patterns`] when no file is available.

mod assembler;
pub mod patterns;
mod source;

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use decor_parse::Xbm;

pub use assembler::{MaskAssembler, ResolvedMask};
pub use patterns::Pattern;
pub use source::{BitmapSource, NoBitmaps, XbmDirectory};

/// A 1-bit stencil. Rows are `ceil(width / 8)` bytes, least significant
/// bit leftmost.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Mask {
    pub width: u32,
    pub height: u32,
    pub bits: Vec<u8>,
}

impl Mask {
    pub fn new(width: u32, height: u32, bits: Vec<u8>) -> Self {
        Self {
            width,
            height,
            bits,
        }
    }

    pub fn stride(&self) -> usize {
        (self.width as usize).div_ceil(8)
    }

    pub fn is_set(&self, x: u32, y: u32) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        self.bits
            .get(y as usize * self.stride() + x as usize / 8)
            .is_some_and(|byte| byte & (1 << (x % 8)) != 0)
    }

    /// Renders the mask as rows of `#` (set) and `.` (clear).
    pub fn rows(&self) -> Vec<String> {
        (0..self.height)
            .map(|y| {
                (0..self.width)
                    .map(|x| if self.is_set(x, y) { '#' } else { '.' })
                    .collect()
            })
            .collect()
    }
}

impl From<Xbm> for Mask {
    fn from(xbm: Xbm) -> Self {
        Self::new(xbm.width, xbm.height, xbm.bits)
    }
}

impl Serialize for Mask {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("Mask", 3)?;
        s.serialize_field("width", &self.width)?;
        s.serialize_field("height", &self.height)?;
        s.serialize_field("rows", &self.rows())?;
        s.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows() {
        let m = patterns::MAX.to_mask();
        assert_eq!(
            m.rows(),
            vec!["######", "######", "#....#", "#....#", "#....#", "######"]
        );
    }

    #[test]
    fn test_from_xbm() {
        let xbm = Xbm::parse("#define a_width 2\n#define a_height 1\nstatic char a_bits[] = { 0x02 };")
            .unwrap();
        let m = Mask::from(xbm);
        assert!(!m.is_set(0, 0));
        assert!(m.is_set(1, 0));
    }

    #[test]
    fn test_serialize_rows() {
        let json = serde_json::to_value(patterns::BULLET.to_mask()).unwrap();
        assert_eq!(json["width"], 4);
        assert_eq!(json["rows"][3], "####");
    }
}
