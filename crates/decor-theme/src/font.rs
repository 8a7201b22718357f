//! Font handles.
//!
//! Shaping and metrics belong to the renderer; the theme only needs a
//! font's pixel height to derive geometry. Handles are `Arc<Font>` so one
//! font can back several text textures.

use std::sync::Arc;

use serde::Serialize;

/// A font handle.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Font {
    pub name: String,
    pub pixel_height: i32,
}

impl Font {
    pub fn new(name: impl Into<String>, pixel_height: i32) -> Self {
        Self {
            name: name.into(),
            pixel_height,
        }
    }

    /// Line height including a text shadow's vertical offset.
    pub fn height(&self, shadow_offset_y: i32) -> i32 {
        self.pixel_height + shadow_offset_y
    }
}

/// Opens fonts for slots the caller did not supply.
pub trait FontProvider: Send + Sync {
    fn open_default(&self) -> Arc<Font>;
}

/// Provides `sans` at 12 pixels.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultFontProvider;

impl DefaultFontProvider {
    pub const NAME: &'static str = "sans";
    pub const PIXEL_HEIGHT: i32 = 12;
}

impl FontProvider for DefaultFontProvider {
    fn open_default(&self) -> Arc<Font> {
        Arc::new(Font::new(Self::NAME, Self::PIXEL_HEIGHT))
    }
}
