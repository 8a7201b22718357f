//! # Decor Theme - Window Decoration Theme Engine
//!
//! `decor-theme` turns an Openbox-style theme description into a complete,
//! immutable graph of visual attributes: colors, background surfaces,
//! button masks, text textures and the geometry derived from them.
//!
//! Theme files are sparse. Authors set a handful of keys and expect the
//! rest to follow, so every attribute has a fallback: a constant, or an
//! attribute resolved before it. Missing or malformed values never fail a
//! build.
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use decor_parse::ResourceDb;
//! use decor_theme::{Button, ButtonState, ColorId, Focus, Rgb, StyleId, ThemeBuilder};
//!
//! let db = ResourceDb::parse(r#"
//! window.active.title.bg: Raised Gradient Vertical
//! window.active.title.bg.color: #3465a4
//! window.active.title.bg.colorTo: #204a87
//! window.active.button.unpressed.image.color: white
//! "#);
//!
//! let theme = ThemeBuilder::new("Demo", &db).build().unwrap();
//!
//! let title = theme.style(StyleId::Title(Focus::Focused));
//! assert_eq!(title.primary, Rgb(0x34, 0x65, 0xa4));
//!
//! // Hover falls back to the unpressed color, sharing the same node.
//! assert!(Arc::ptr_eq(
//!     theme.color(ColorId::ButtonImage(ButtonState::Hover, Focus::Focused)),
//!     theme.color(ColorId::ButtonImage(ButtonState::Unpressed, Focus::Focused)),
//! ));
//!
//! // Close never toggles.
//! assert!(theme.button(Button::Close, ButtonState::Toggled, Focus::Focused).is_none());
//! ```
//!
//! ## Loading by name
//!
//! [`ThemeLoader`] searches `~/.themes` and the XDG data directories for
//! `<name>/openbox-3/themerc`, reads authored bitmaps from the same
//! directory, and falls back to [`DEFAULT_THEME`] when the requested theme
//! is missing.
//!
//! ## Modules
//!
//! - [`ids`]: attribute keys
//! - [`style`]: colors, surfaces, textures and their resolvers
//! - [`mask`]: button and bullet stencils
//! - [`theme`]: the builder, the resolved [`Theme`] and its lifecycle

pub mod attr;
pub mod config;
mod error;
pub mod font;
pub mod icon;
pub mod ids;
pub mod mask;
pub mod style;
pub mod theme;
mod util;

pub use attr::{AttrMap, Partial};
pub use config::{read_color, read_int, read_string, ConfigSource};
pub use error::{Result, ThemeError};
pub use font::{DefaultFontProvider, Font, FontProvider};
pub use icon::{default_icon, reformat_pixels, Icon};
pub use ids::{Attr, Button, ButtonKey, ButtonState, ColorId, Dim, Element, Focus, FontSlot, MaskId, StyleId};
pub use mask::{BitmapSource, Mask, MaskAssembler, NoBitmaps, XbmDirectory};
pub use style::{
    Appearance, Bevel, ColorResolver, Descriptor, Gradient, Justify, Relief, Rgb, SurfaceResolver,
    SurfaceStyle, TextShadow, Texture,
};
pub use theme::{
    Geometry, LoadOptions, NodeCensus, SearchPaths, Theme, ThemeBuilder, ThemeLoader, DEFAULT_THEME,
};
pub use util::{parse_leading_int, rgb_to_ansi256};
