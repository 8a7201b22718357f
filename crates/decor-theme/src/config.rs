//! Configuration access.
//!
//! [`ConfigSource`] is the seam to the key/value store backing a theme. The
//! resolvers only ever ask it for the raw string at a fully qualified key;
//! matching rules (wildcards, classes) belong to the store.
//!
//! The `read_*` helpers convert raw strings into typed values. A value that
//! does not parse reads as absent, exactly like a missing key.

use std::collections::{BTreeMap, HashMap};

use decor_parse::ResourceDb;

use crate::style::Rgb;
use crate::util::parse_leading_int;

/// A flat store mapping dotted attribute paths to raw strings.
pub trait ConfigSource {
    fn lookup(&self, key: &str) -> Option<&str>;
}

impl ConfigSource for ResourceDb {
    fn lookup(&self, key: &str) -> Option<&str> {
        ResourceDb::lookup(self, key)
    }
}

impl ConfigSource for HashMap<String, String> {
    fn lookup(&self, key: &str) -> Option<&str> {
        self.get(key).map(String::as_str)
    }
}

impl ConfigSource for BTreeMap<String, String> {
    fn lookup(&self, key: &str) -> Option<&str> {
        self.get(key).map(String::as_str)
    }
}

/// Reads a raw string.
pub fn read_string<'a, C: ConfigSource + ?Sized>(config: &'a C, key: &str) -> Option<&'a str> {
    config.lookup(key)
}

/// Reads an integer with `strtol` semantics.
pub fn read_int<C: ConfigSource + ?Sized>(config: &C, key: &str) -> Option<i32> {
    config.lookup(key).and_then(parse_leading_int)
}

/// Reads a color specification.
pub fn read_color<C: ConfigSource + ?Sized>(config: &C, key: &str) -> Option<Rgb> {
    config.lookup(key).and_then(|v| Rgb::parse(v).ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_read_int() {
        let c = config(&[("border.width", "2"), ("padding.width", "x"), ("o", "-4px")]);
        assert_eq!(read_int(&c, "border.width"), Some(2));
        assert_eq!(read_int(&c, "padding.width"), None);
        assert_eq!(read_int(&c, "o"), Some(-4));
        assert_eq!(read_int(&c, "missing"), None);
    }

    #[test]
    fn test_read_color_malformed_is_absent() {
        let c = config(&[("a", "#336699"), ("b", "#33669")]);
        assert_eq!(read_color(&c, "a"), Some(Rgb(0x33, 0x66, 0x99)));
        assert_eq!(read_color(&c, "b"), None);
    }

    #[test]
    fn test_resource_db_source_uses_wildcards() {
        let db = ResourceDb::parse("*.border.color: #010203\n");
        assert_eq!(
            read_color(&db, "window.active.border.color"),
            Some(Rgb(1, 2, 3))
        );
        assert_eq!(read_string(&db, "window.active.title.bg"), None);
    }
}
