//! Theme construction, lookup and lifecycle.
//!
//! A theme is resolved in one pass by [`ThemeBuilder`] from a
//! [`ConfigSource`](crate::config::ConfigSource) and an optional bitmap
//! directory. [`ThemeLoader`] adds the search for a theme by name and the
//! fallback to [`DEFAULT_THEME`].
//!
//! ## Resolution order
//!
//! Fonts, dimensions, colors, masks and surface styles are each resolved
//! from a table of rules evaluated in order. A rule that finds no valid
//! configuration value falls back to a constant or to a value an earlier
//! rule resolved. Colors and styles taken from an earlier rule are shared
//! (`Arc::ptr_eq` holds); masks are deep-copied so each state owns its
//! bits. Appearances then pair a surface with a texture, and finally the
//! [`Geometry`] is derived.
//!
//! ## Lifecycle
//!
//! A [`Theme`] is immutable. [`Theme::census`] counts its distinct nodes,
//! [`Theme::release`] drops it, and [`ThemeLoader::reload`] swaps in a new
//! theme only once it has been built.

mod builder;
mod geometry;
mod lifecycle;
mod loader;
mod rules;
#[allow(clippy::module_inception)]
mod theme;

pub use builder::ThemeBuilder;
pub use geometry::{Geometry, GRIP_WIDTH};
pub use lifecycle::NodeCensus;
pub use loader::{LoadOptions, SearchPaths, ThemeLoader, DEFAULT_THEME};
pub use theme::Theme;
