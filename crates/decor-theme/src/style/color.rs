//! Color specification parsing.
//!
//! Supports the X11 color formats theme files use:
//!
//! - Hex: `#RGB`, `#RRGGBB`, `#RRRGGGBBB`, `#RRRRGGGGBBBB`. Digits are the most
//!   significant bits of each channel, so `#a00` is `#a00000`, not `#aa0000`
//! - Scaled hex: `rgb:r/g/b` with 1 to 4 digits per channel, scaled to the
//!   full channel range (`rgb:f/8/0` is `#ff8800`)
//! - Names: `black`, `SteelBlue`, `gray40`, `light goldenrod`. Case and
//!   spaces are ignored
//!
//! # Example
//!
//! ```rust
//! use decor_theme::Rgb;
//!
//! assert_eq!(Rgb::parse("#336699").unwrap(), Rgb(0x33, 0x66, 0x99));
//! assert_eq!(Rgb::parse("rgb:f/8/0").unwrap(), Rgb(0xff, 0x88, 0x00));
//! assert_eq!(Rgb::parse("Gray40").unwrap(), Rgb(102, 102, 102));
//! assert!(Rgb::parse("#12345").is_err());
//! ```

use std::fmt;

use serde::{Serialize, Serializer};

use super::named::lookup_named;
use crate::util::rgb_to_ansi256;

/// An RGB color triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const BLACK: Rgb = Rgb(0, 0, 0);
    pub const WHITE: Rgb = Rgb(0xff, 0xff, 0xff);

    /// Parses a color specification.
    pub fn parse(s: &str) -> Result<Self, String> {
        let s = s.trim();

        if let Some(hex) = s.strip_prefix('#') {
            return Self::parse_hex(hex);
        }

        if let Some(channels) = s.strip_prefix("rgb:") {
            return Self::parse_scaled(channels);
        }

        lookup_named(s).ok_or_else(|| format!("Unknown color name: {}", s))
    }

    /// Parses `#` hex digits, 1 to 4 per channel, most significant first.
    fn parse_hex(hex: &str) -> Result<Self, String> {
        let len = hex.len();
        if len == 0 || len % 3 != 0 || len > 12 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(format!("Invalid hex color: #{}", hex));
        }
        let digits = len / 3;
        let mut channels = [0u8; 3];
        for (i, channel) in channels.iter_mut().enumerate() {
            let part = &hex[i * digits..(i + 1) * digits];
            let value = u16::from_str_radix(part, 16).map_err(|_| format!("Invalid hex: {}", hex))?;
            // Left-align to 16 bits, then keep the high byte.
            let wide = value << (16 - 4 * digits as u32);
            *channel = (wide >> 8) as u8;
        }
        Ok(Rgb(channels[0], channels[1], channels[2]))
    }

    /// Parses `r/g/b` channels, each scaled from its digit count to 16 bits.
    fn parse_scaled(channels: &str) -> Result<Self, String> {
        let parts: Vec<&str> = channels.split('/').collect();
        if parts.len() != 3 {
            return Err(format!("rgb: requires exactly 3 channels, got {}", parts.len()));
        }
        let mut out = [0u8; 3];
        for (i, part) in parts.iter().enumerate() {
            if part.is_empty() || part.len() > 4 || !part.bytes().all(|b| b.is_ascii_hexdigit()) {
                return Err(format!("Invalid rgb: channel '{}'", part));
            }
            let value = u32::from_str_radix(part, 16).map_err(|_| format!("Invalid hex: {}", part))?;
            let max = (1u32 << (4 * part.len() as u32)) - 1;
            let wide = value * 0xffff / max;
            out[i] = (wide >> 8) as u8;
        }
        Ok(Rgb(out[0], out[1], out[2]))
    }

    /// Lowercase `#rrggbb`.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }

    /// The nearest 256-color terminal color, for previews.
    pub fn to_console(self) -> console::Color {
        console::Color::Color256(rgb_to_ansi256(self))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}
