//! Compiled-in mask patterns used when a theme ships no bitmap.

use super::Mask;

/// A static bit pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pattern {
    pub width: u32,
    pub height: u32,
    pub bits: &'static [u8],
}

impl Pattern {
    const fn button(bits: &'static [u8; 6]) -> Self {
        Self {
            width: 6,
            height: 6,
            bits,
        }
    }

    pub fn to_mask(&self) -> Mask {
        Mask::new(self.width, self.height, self.bits.to_vec())
    }
}

pub const MAX: Pattern = Pattern::button(&[0x3f, 0x3f, 0x21, 0x21, 0x21, 0x3f]);
pub const MAX_TOGGLED: Pattern = Pattern::button(&[0x3e, 0x22, 0x2f, 0x29, 0x39, 0x0f]);
pub const CLOSE: Pattern = Pattern::button(&[0x33, 0x3f, 0x1e, 0x1e, 0x3f, 0x33]);
pub const DESK: Pattern = Pattern::button(&[0x33, 0x33, 0x00, 0x00, 0x33, 0x33]);
pub const DESK_TOGGLED: Pattern = Pattern::button(&[0x00, 0x1e, 0x1a, 0x16, 0x1e, 0x00]);
pub const SHADE: Pattern = Pattern::button(&[0x3f, 0x3f, 0x00, 0x00, 0x00, 0x00]);
pub const ICONIFY: Pattern = Pattern::button(&[0x00, 0x00, 0x00, 0x00, 0x3f, 0x3f]);

pub const BULLET: Pattern = Pattern {
    width: 4,
    height: 7,
    bits: &[0x01, 0x03, 0x07, 0x0f, 0x07, 0x03, 0x01],
};
