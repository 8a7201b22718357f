//! Foreground textures and appearances.

use std::sync::Arc;

use serde::Serialize;

use super::color::Rgb;
use super::surface::SurfaceStyle;
use crate::font::Font;
use crate::icon::Icon;
use crate::mask::Mask;
use crate::util::parse_inline_number;

/// Horizontal text alignment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Justify {
    #[default]
    Left,
    Center,
    Right,
}

impl Justify {
    /// Parses `left`, `center` or `right`, ignoring case. Anything else is
    /// left-aligned.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "right" => Justify::Right,
            "center" => Justify::Center,
            _ => Justify::Left,
        }
    }
}

/// Drop shadow drawn under text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct TextShadow {
    pub offset_x: i32,
    pub offset_y: i32,
    pub color: Rgb,
    pub alpha: u8,
}

impl TextShadow {
    /// No shadow at all.
    pub const NONE: TextShadow = TextShadow {
        offset_x: 0,
        offset_y: 0,
        color: Rgb::BLACK,
        alpha: 0,
    };

    /// Parses the shadow options embedded in a font string such as
    /// `sans:bold:shadow=y:shadowoffset=2:shadowtint=30`.
    ///
    /// `shadow=y` enables the offset (from `shadowoffset=` anywhere in the
    /// string, default 1).
    /// `shadowtint=N` picks black for positive N and white otherwise, with
    /// alpha `|N * 255 / 100|`; without it the shadow is black at alpha 50.
    pub fn parse(font: Option<&str>) -> Self {
        let Some(font) = font else {
            return Self::NONE;
        };

        let offset = if font.contains("shadow=y") {
            match font.find("shadowoffset=") {
                Some(p) => parse_inline_number(&font[p + "shadowoffset=".len()..]),
                None => 1,
            }
        } else {
            0
        };

        let (color, alpha) = match font.find("shadowtint=") {
            Some(p) => {
                let tint = parse_inline_number(&font[p + "shadowtint=".len()..]);
                let color = if tint > 0 { Rgb::BLACK } else { Rgb::WHITE };
                let alpha = (i64::from(tint) * 255 / 100).unsigned_abs().min(255) as u8;
                (color, alpha)
            }
            None => (Rgb::BLACK, 50),
        };

        Self {
            offset_x: offset,
            offset_y: offset,
            color,
            alpha,
        }
    }
}

/// Text drawn on a surface.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextTexture {
    pub font: Arc<Font>,
    pub justify: Justify,
    pub color: Arc<Rgb>,
    pub shadow: TextShadow,
}

/// A stencil filled with a color.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MaskTexture {
    pub mask: Arc<Mask>,
    pub color: Arc<Rgb>,
}

/// Optional foreground content of an appearance.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Texture {
    #[default]
    None,
    Text(TextTexture),
    Mask(MaskTexture),
    Bitmap(Arc<Icon>),
}

/// A surface plus what is drawn on it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Appearance {
    pub surface: Arc<SurfaceStyle>,
    pub texture: Texture,
}

impl Appearance {
    pub fn new(surface: Arc<SurfaceStyle>, texture: Texture) -> Self {
        Self { surface, texture }
    }

    /// An appearance with no foreground content.
    pub fn plain(surface: Arc<SurfaceStyle>) -> Self {
        Self::new(surface, Texture::None)
    }

    pub fn text(&self) -> Option<&TextTexture> {
        match &self.texture {
            Texture::Text(t) => Some(t),
            _ => None,
        }
    }

    pub fn mask(&self) -> Option<&MaskTexture> {
        match &self.texture {
            Texture::Mask(m) => Some(m),
            _ => None,
        }
    }
}
