//! The resolved theme graph.
//!
//! A [`Theme`] is immutable once built. Every attribute is present: the
//! tables are completed [`AttrMap`]s, so lookups by a valid key cannot
//! fail. Values shared between attributes are shared `Arc`s, which makes
//! aliasing visible with [`Arc::ptr_eq`]:
//!
//! ```rust
//! use std::sync::Arc;
//! use std::collections::HashMap;
//! use decor_theme::{ColorId, Focus, ThemeBuilder};
//!
//! let mut config = HashMap::new();
//! config.insert("window.active.border.color".to_string(), "#336699".to_string());
//!
//! let theme = ThemeBuilder::new("example", &config).build().unwrap();
//! let focused = theme.color(ColorId::FrameBorder(Focus::Focused));
//! let unfocused = theme.color(ColorId::FrameBorder(Focus::Unfocused));
//! assert!(Arc::ptr_eq(focused, unfocused));
//! ```

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Serialize;

use super::geometry::Geometry;
use crate::attr::AttrMap;
use crate::font::Font;
use crate::ids::{Button, ButtonKey, ButtonState, ColorId, Dim, Element, Focus, FontSlot, MaskId, StyleId};
use crate::mask::Mask;
use crate::style::{Appearance, Rgb, SurfaceStyle};

/// A fully resolved window decoration theme.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Theme {
    pub(crate) name: String,
    /// Directory holding the theme's `themerc` and bitmaps.
    pub(crate) path: Option<PathBuf>,
    pub(crate) fonts: AttrMap<FontSlot, Arc<Font>>,
    pub(crate) dims: AttrMap<Dim, i32>,
    pub(crate) colors: AttrMap<ColorId, Arc<Rgb>>,
    pub(crate) masks: AttrMap<MaskId, Arc<Mask>>,
    pub(crate) styles: AttrMap<StyleId, Arc<SurfaceStyle>>,
    pub(crate) elements: AttrMap<Element, Appearance>,
    pub(crate) buttons: AttrMap<ButtonKey, Appearance>,
    pub(crate) geometry: Geometry,
}

impl Theme {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn font(&self, slot: FontSlot) -> &Arc<Font> {
        self.fonts.get(slot)
    }

    pub fn dim(&self, dim: Dim) -> i32 {
        *self.dims.get(dim)
    }

    pub fn color(&self, id: ColorId) -> &Arc<Rgb> {
        self.colors.get(id)
    }

    /// Returns `None` for masks that do not exist, such as a toggled close
    /// button.
    pub fn mask(&self, id: MaskId) -> Option<&Arc<Mask>> {
        self.masks.try_get(id)
    }

    pub fn style(&self, id: StyleId) -> &Arc<SurfaceStyle> {
        self.styles.get(id)
    }

    pub fn element(&self, element: Element) -> &Appearance {
        self.elements.get(element)
    }

    /// Returns `None` for a toggled state of a button that never toggles.
    pub fn button(&self, button: Button, state: ButtonState, focus: Focus) -> Option<&Appearance> {
        self.buttons.try_get(ButtonKey::new(button, state, focus))
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    pub fn colors(&self) -> &AttrMap<ColorId, Arc<Rgb>> {
        &self.colors
    }

    pub fn styles(&self) -> &AttrMap<StyleId, Arc<SurfaceStyle>> {
        &self.styles
    }

    pub fn masks(&self) -> &AttrMap<MaskId, Arc<Mask>> {
        &self.masks
    }

    pub fn fonts(&self) -> &AttrMap<FontSlot, Arc<Font>> {
        &self.fonts
    }

    pub fn dims(&self) -> &AttrMap<Dim, i32> {
        &self.dims
    }

    pub fn elements(&self) -> &AttrMap<Element, Appearance> {
        &self.elements
    }

    pub fn buttons(&self) -> &AttrMap<ButtonKey, Appearance> {
        &self.buttons
    }
}
