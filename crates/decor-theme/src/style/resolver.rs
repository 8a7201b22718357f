//! Color and surface resolvers.
//!
//! Both resolvers report absence with `None` and leave the fallback policy
//! to the caller, which knows the attribute being resolved. The one
//! exception is the auxiliary colors of a surface, which always default to
//! black.

use tracing::trace;

use super::color::Rgb;
use super::surface::{Descriptor, SurfaceStyle};
use crate::config::{read_color, read_string, ConfigSource};

/// Resolves named colors.
pub struct ColorResolver<'a, C: ConfigSource + ?Sized> {
    config: &'a C,
}

impl<'a, C: ConfigSource + ?Sized> ColorResolver<'a, C> {
    pub fn new(config: &'a C) -> Self {
        Self { config }
    }

    /// Resolves the color at `key`. Absent and malformed values both yield
    /// `None`.
    pub fn resolve(&self, key: &str) -> Option<Rgb> {
        read_color(self.config, key)
    }

    /// Resolves the first key holding a valid color.
    pub fn resolve_first<S: AsRef<str>>(&self, keys: &[S]) -> Option<Rgb> {
        keys.iter().find_map(|k| self.resolve(k.as_ref()))
    }

    fn resolve_or_black(&self, key: &str) -> Rgb {
        self.resolve(key).unwrap_or_else(|| {
            trace!(key, "color defaults to black");
            Rgb::BLACK
        })
    }
}

/// Resolves background surface styles from their descriptor strings.
pub struct SurfaceResolver<'a, C: ConfigSource + ?Sized> {
    config: &'a C,
    colors: ColorResolver<'a, C>,
}

impl<'a, C: ConfigSource + ?Sized> SurfaceResolver<'a, C> {
    pub fn new(config: &'a C) -> Self {
        Self {
            config,
            colors: ColorResolver::new(config),
        }
    }

    /// Resolves the surface described at `key`.
    ///
    /// Returns `None` only when the descriptor itself is absent. The
    /// auxiliary colors `<key>.color`, `<key>.colorTo`, `<key>.border.color`
    /// (bordered surfaces) and `<key>.interlace.color` (interlaced surfaces)
    /// each default to black.
    pub fn resolve(&self, key: &str, allow_transparent: bool) -> Option<SurfaceStyle> {
        let descriptor = read_string(self.config, key)?;
        let d = Descriptor::classify(descriptor, allow_transparent);

        let primary = self.colors.resolve_or_black(&format!("{key}.color"));
        let secondary = self.colors.resolve_or_black(&format!("{key}.colorTo"));
        let border_color = d
            .border
            .then(|| self.colors.resolve_or_black(&format!("{key}.border.color")));
        let interlace_color = d
            .interlaced
            .then(|| self.colors.resolve_or_black(&format!("{key}.interlace.color")));

        Some(SurfaceStyle {
            gradient: d.gradient,
            relief: d.relief,
            bevel: d.bevel,
            interlaced: d.interlaced,
            border: d.border,
            primary,
            secondary,
            border_color,
            interlace_color,
        })
    }
}
