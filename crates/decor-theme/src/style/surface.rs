//! Background surface styles and descriptor classification.
//!
//! A surface is described in the configuration by one free-text descriptor,
//! for example `raised gradient vertical bevel2` or `flat border solid`.
//! [`Descriptor::classify`] turns that text into the structured parts of a
//! [`SurfaceStyle`] by ordered substring matching:
//!
//! 1. With transparency allowed, `parentrelative` wins outright
//! 2. Gradient subtype, only when `gradient` is present: `crossdiagonal`,
//!    `pyramid`, `mirrorhorizontal`, `horizontal`, `splitvertical`,
//!    `vertical`, otherwise `diagonal`. Without `gradient` the surface is solid
//! 3. Relief: `sunken`, then `flat`, otherwise raised
//! 4. Flat surfaces take a border when `border` is present; others take
//!    `bevel2` or default to bevel 1
//! 5. `interlaced`
//!
//! Matching ignores case and the `-`/`_` separators, so `Parent-Relative`
//! and `parentrelative` are the same token.

use serde::Serialize;

use super::color::Rgb;

/// Gradient kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Gradient {
    Solid,
    Horizontal,
    Vertical,
    Diagonal,
    CrossDiagonal,
    Pyramid,
    MirrorHorizontal,
    SplitVertical,
    /// Draw nothing; the containing widget's surface shows through.
    ParentRelative,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Relief {
    Raised,
    Sunken,
    Flat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Bevel {
    One,
    Two,
}

impl Bevel {
    pub fn depth(self) -> i32 {
        match self {
            Bevel::One => 1,
            Bevel::Two => 2,
        }
    }
}

/// The structural part of a surface, classified from a descriptor string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Descriptor {
    pub gradient: Gradient,
    pub relief: Relief,
    pub bevel: Bevel,
    pub border: bool,
    pub interlaced: bool,
}

impl Descriptor {
    /// Classifies a descriptor string.
    ///
    /// ```rust
    /// use decor_theme::style::{Bevel, Descriptor, Gradient, Relief};
    ///
    /// let d = Descriptor::classify("Raised Gradient SplitVertical Bevel2", false);
    /// assert_eq!(d.gradient, Gradient::SplitVertical);
    /// assert_eq!(d.relief, Relief::Raised);
    /// assert_eq!(d.bevel, Bevel::Two);
    ///
    /// let d = Descriptor::classify("parentrelative", false);
    /// assert_eq!(d.gradient, Gradient::Solid);
    /// ```
    pub fn classify(descriptor: &str, allow_transparent: bool) -> Self {
        let text: String = descriptor
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .flat_map(char::to_lowercase)
            .collect();
        let has = |token: &str| text.contains(token);

        if allow_transparent && has("parentrelative") {
            return Self::PARENT_RELATIVE;
        }

        let gradient = if has("gradient") {
            if has("crossdiagonal") {
                Gradient::CrossDiagonal
            } else if has("pyramid") {
                Gradient::Pyramid
            } else if has("mirrorhorizontal") {
                Gradient::MirrorHorizontal
            } else if has("horizontal") {
                Gradient::Horizontal
            } else if has("splitvertical") {
                Gradient::SplitVertical
            } else if has("vertical") {
                Gradient::Vertical
            } else {
                Gradient::Diagonal
            }
        } else {
            Gradient::Solid
        };

        let relief = if has("sunken") {
            Relief::Sunken
        } else if has("flat") {
            Relief::Flat
        } else {
            Relief::Raised
        };

        let (border, bevel) = if relief == Relief::Flat {
            (has("border"), Bevel::One)
        } else if has("bevel2") {
            (false, Bevel::Two)
        } else {
            (false, Bevel::One)
        };

        Self {
            gradient,
            relief,
            bevel,
            border,
            interlaced: has("interlaced"),
        }
    }

    const PARENT_RELATIVE: Descriptor = Descriptor {
        gradient: Gradient::ParentRelative,
        relief: Relief::Flat,
        bevel: Bevel::One,
        border: false,
        interlaced: false,
    };
}

/// Space a surface's edge decoration takes on each side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Margins {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Margins {
    pub fn uniform(n: i32) -> Self {
        Self {
            left: n,
            top: n,
            right: n,
            bottom: n,
        }
    }

    pub fn vertical(&self) -> i32 {
        self.top + self.bottom
    }
}

/// A fully resolved background style.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct SurfaceStyle {
    pub gradient: Gradient,
    pub relief: Relief,
    pub bevel: Bevel,
    pub interlaced: bool,
    pub border: bool,
    pub primary: Rgb,
    pub secondary: Rgb,
    /// Present exactly when `border` is set.
    pub border_color: Option<Rgb>,
    /// Present exactly when `interlaced` is set.
    pub interlace_color: Option<Rgb>,
}

impl SurfaceStyle {
    /// The whole-style fallback: solid, flat, bevel 1, black on black.
    pub fn fallback() -> Self {
        Self {
            gradient: Gradient::Solid,
            relief: Relief::Flat,
            bevel: Bevel::One,
            interlaced: false,
            border: false,
            primary: Rgb::BLACK,
            secondary: Rgb::BLACK,
            border_color: None,
            interlace_color: None,
        }
    }

    pub fn parent_relative() -> Self {
        Self {
            gradient: Gradient::ParentRelative,
            ..Self::fallback()
        }
    }

    pub fn is_parent_relative(&self) -> bool {
        self.gradient == Gradient::ParentRelative
    }

    /// Margins the surface's edges take: none for parent-relative, the
    /// bevel depth for raised/sunken, 1 for a bordered flat surface.
    pub fn margins(&self) -> Margins {
        if self.is_parent_relative() {
            Margins::default()
        } else if self.relief != Relief::Flat {
            Margins::uniform(self.bevel.depth())
        } else if self.border {
            Margins::uniform(1)
        } else {
            Margins::default()
        }
    }
}
