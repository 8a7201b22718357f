//! Resolved visual values: colors, surfaces and the foreground textures
//! drawn over them.

mod color;
mod named;
mod resolver;
mod surface;
mod texture;

pub use color::Rgb;
pub use resolver::{ColorResolver, SurfaceResolver};
pub use surface::{Bevel, Descriptor, Gradient, Margins, Relief, SurfaceStyle};
pub use texture::{Appearance, Justify, MaskTexture, TextShadow, TextTexture, Texture};
