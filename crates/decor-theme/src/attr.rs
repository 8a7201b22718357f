//! Keyed attribute tables.
//!
//! The builder fills a [`Partial`] one rule at a time and may read back any
//! value resolved so far. [`Partial::finish`] converts it into an
//! [`AttrMap`], checking that every key of the key type was resolved, so a
//! completed table can be indexed without a fallible lookup.

use std::collections::BTreeMap;
use std::ops::Index;

use serde::{Serialize, Serializer};

use crate::error::{Result, ThemeError};
use crate::ids::Attr;

/// A completed attribute table holding a value for every key in `K::all()`.
#[derive(Debug, Clone, PartialEq)]
pub struct AttrMap<K: Attr, V> {
    values: BTreeMap<K, V>,
}

impl<K: Attr, V> AttrMap<K, V> {
    /// Returns the value for `key`.
    ///
    /// # Panics
    ///
    /// Panics if `key` is not one of `K::all()`.
    pub fn get(&self, key: K) -> &V {
        &self.values[&key]
    }

    /// Returns the value for a key that may not belong to `K::all()`.
    pub fn try_get(&self, key: K) -> Option<&V> {
        self.values.get(&key)
    }

    /// Iterates entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (K, &V)> {
        self.values.iter().map(|(k, v)| (*k, v))
    }

    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.values.values()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K: Attr, V> Index<K> for AttrMap<K, V> {
    type Output = V;

    fn index(&self, key: K) -> &V {
        self.get(key)
    }
}

impl<K: Attr, V: Serialize> Serialize for AttrMap<K, V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_map(self.values.iter().map(|(k, v)| (k.to_string(), v)))
    }
}

/// An attribute table under construction.
#[derive(Debug, Clone)]
pub struct Partial<K: Attr, V> {
    values: BTreeMap<K, V>,
}

impl<K: Attr, V> Default for Partial<K, V> {
    fn default() -> Self {
        Self {
            values: BTreeMap::new(),
        }
    }
}

impl<K: Attr, V> Partial<K, V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value for `key`. The first assignment wins; later ones are
    /// ignored and reported with `false`.
    pub fn insert(&mut self, key: K, value: V) -> bool {
        if self.values.contains_key(&key) {
            return false;
        }
        self.values.insert(key, value);
        true
    }

    pub fn get(&self, key: K) -> Option<&V> {
        self.values.get(&key)
    }

    /// Completes the table.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Incomplete`] naming the first unresolved key.
    pub fn finish(self) -> Result<AttrMap<K, V>> {
        if let Some(missing) = K::all().into_iter().find(|k| !self.values.contains_key(k)) {
            return Err(ThemeError::Incomplete {
                attribute: missing.to_string(),
            });
        }
        Ok(AttrMap {
            values: self.values,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::Dim;

    fn full() -> Partial<Dim, i32> {
        let mut partial = Partial::new();
        for (i, dim) in Dim::all().into_iter().enumerate() {
            partial.insert(dim, i as i32);
        }
        partial
    }

    #[test]
    fn test_finish_complete() {
        let map = full().finish().unwrap();
        assert_eq!(map.len(), Dim::all().len());
        assert_eq!(map[Dim::MenuOverlap], 0);
        assert_eq!(*map.get(Dim::PaddingX), 2);
    }

    #[test]
    fn test_finish_incomplete_names_key() {
        let mut partial = Partial::new();
        partial.insert(Dim::MenuOverlap, 0);
        let err = partial.finish().unwrap_err();
        assert!(matches!(
            err,
            ThemeError::Incomplete { ref attribute } if attribute == "handle_height"
        ));
    }

    #[test]
    fn test_first_insert_wins() {
        let mut partial: Partial<Dim, i32> = Partial::new();
        assert!(partial.insert(Dim::PaddingX, 3));
        assert!(!partial.insert(Dim::PaddingX, 9));
        assert_eq!(partial.get(Dim::PaddingX), Some(&3));
    }

    #[test]
    fn test_serializes_with_display_keys() {
        let map = full().finish().unwrap();
        let json = serde_json::to_value(&map).unwrap();
        assert_eq!(json["padding_x"], 2);
        assert_eq!(json["client_padding_y"], 7);
    }
}
