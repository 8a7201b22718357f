//! Small numeric helpers shared by the resolvers.

use crate::style::Rgb;

/// Parses an integer the way C's `strtol` does in base 10: optional leading
/// whitespace, an optional sign, then as many digits as follow. Trailing
/// characters are ignored. Returns `None` when no digit is present.
///
/// ```rust
/// use decor_theme::parse_leading_int;
///
/// assert_eq!(parse_leading_int("  42px"), Some(42));
/// assert_eq!(parse_leading_int("-7"), Some(-7));
/// assert_eq!(parse_leading_int("px"), None);
/// ```
pub fn parse_leading_int(s: &str) -> Option<i32> {
    let s = s.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = digits
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    // Saturate like strtol does on overflow.
    let magnitude = digits[..end]
        .bytes()
        .fold(0i64, |acc, b| (acc * 10 + i64::from(b - b'0')).min(i64::from(u32::MAX)));
    let value = if negative { -magnitude } else { magnitude };
    Some(value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32)
}

/// Reads the number embedded at the start of `s`: an optional `-`, then
/// digits. No digits reads as 0.
pub(crate) fn parse_inline_number(s: &str) -> i32 {
    let (negative, digits) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s),
    };
    let value = digits
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0i32, |acc, b| {
            acc.saturating_mul(10).saturating_add(i32::from(b - b'0'))
        });
    if negative {
        -value
    } else {
        value
    }
}

/// Converts an RGB color to the nearest ANSI 256-color palette index.
///
/// ```rust
/// use decor_theme::{rgb_to_ansi256, Rgb};
///
/// assert_eq!(rgb_to_ansi256(Rgb(255, 0, 0)), 196);
/// assert_eq!(rgb_to_ansi256(Rgb(0, 0, 0)), 16);
/// ```
pub fn rgb_to_ansi256(Rgb(r, g, b): Rgb) -> u8 {
    if r == g && g == b {
        if r < 8 {
            16
        } else if r > 248 {
            231
        } else {
            232 + ((r as u16 - 8) * 24 / 247) as u8
        }
    } else {
        let red = (r as u16 * 5 / 255) as u8;
        let green = (g as u16 * 5 / 255) as u8;
        let blue = (b as u16 * 5 / 255) as u8;
        16 + 36 * red + 6 * green + blue
    }
}
