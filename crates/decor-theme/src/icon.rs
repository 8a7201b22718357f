//! The default window icon.
//!
//! The icon is compiled in as RGBA bytes and reordered once into packed
//! ARGB pixels, the layout the renderer consumes.

use serde::Serialize;

pub const DEFAULT_ICON_WIDTH: u32 = 16;
pub const DEFAULT_ICON_HEIGHT: u32 = 16;

/// A packed ARGB image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Icon {
    pub width: u32,
    pub height: u32,
    #[serde(skip)]
    pub pixels: Vec<u32>,
}

/// Reorders RGBA byte quads into `0xAARRGGBB` words. A trailing partial
/// quad is ignored.
pub fn reformat_pixels(rgba: &[u8]) -> Vec<u32> {
    rgba.chunks_exact(4)
        .map(|px| {
            let [r, g, b, a] = [px[0], px[1], px[2], px[3]];
            (u32::from(a) << 24) | (u32::from(r) << 16) | (u32::from(g) << 8) | u32::from(b)
        })
        .collect()
}

/// Returns the compiled-in default icon.
pub fn default_icon() -> Icon {
    Icon {
        width: DEFAULT_ICON_WIDTH,
        height: DEFAULT_ICON_HEIGHT,
        pixels: reformat_pixels(&default_icon_rgba()),
    }
}

/// A small window glyph: dark frame, blue titlebar, light client area,
/// transparent one-pixel margin.
fn default_icon_rgba() -> Vec<u8> {
    const CLEAR: [u8; 4] = [0, 0, 0, 0];
    const FRAME: [u8; 4] = [0x2e, 0x34, 0x36, 0xff];
    const TITLE: [u8; 4] = [0x34, 0x65, 0xa4, 0xff];
    const CLIENT: [u8; 4] = [0xee, 0xee, 0xec, 0xff];

    let (w, h) = (DEFAULT_ICON_WIDTH, DEFAULT_ICON_HEIGHT);
    let mut out = Vec::with_capacity((w * h * 4) as usize);
    for y in 0..h {
        for x in 0..w {
            let px = if x == 0 || y == 0 || x == w - 1 || y == h - 1 {
                CLEAR
            } else if x == 1 || y == 1 || x == w - 2 || y == h - 2 {
                FRAME
            } else if y <= 4 {
                TITLE
            } else {
                CLIENT
            };
            out.extend_from_slice(&px);
        }
    }
    out
}
