//! Node accounting and release.
//!
//! Attributes of a theme share nodes: aliased colors point at one
//! `Arc<Rgb>`, copied styles at one `Arc<SurfaceStyle>`. A census counts
//! each distinct node once, which is the number of allocations a release
//! frees.

use std::collections::HashSet;
use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use super::theme::Theme;
use crate::style::{Appearance, Texture};

/// Distinct nodes owned by a theme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct NodeCensus {
    pub colors: usize,
    pub surfaces: usize,
    pub masks: usize,
    pub fonts: usize,
    pub icons: usize,
    /// Attribute slots pointing at those nodes.
    pub references: usize,
}

impl NodeCensus {
    pub fn nodes(&self) -> usize {
        self.colors + self.surfaces + self.masks + self.fonts + self.icons
    }
}

#[derive(Default)]
struct Tally {
    seen: HashSet<usize>,
    census: NodeCensus,
}

impl Tally {
    /// Records one reference; returns true the first time a node is seen.
    fn visit<T>(&mut self, node: &Arc<T>) -> bool {
        self.census.references += 1;
        self.seen.insert(Arc::as_ptr(node) as *const () as usize)
    }

    fn appearance(&mut self, appearance: &Appearance) {
        if self.visit(&appearance.surface) {
            self.census.surfaces += 1;
        }
        match &appearance.texture {
            Texture::None => {}
            Texture::Text(text) => {
                if self.visit(&text.font) {
                    self.census.fonts += 1;
                }
                if self.visit(&text.color) {
                    self.census.colors += 1;
                }
            }
            Texture::Mask(mask) => {
                if self.visit(&mask.mask) {
                    self.census.masks += 1;
                }
                if self.visit(&mask.color) {
                    self.census.colors += 1;
                }
            }
            Texture::Bitmap(icon) => {
                if self.visit(icon) {
                    self.census.icons += 1;
                }
            }
        }
    }
}

impl Theme {
    /// Counts the distinct nodes reachable from this theme.
    pub fn census(&self) -> NodeCensus {
        let mut tally = Tally::default();
        for font in self.fonts.values() {
            if tally.visit(font) {
                tally.census.fonts += 1;
            }
        }
        for color in self.colors.values() {
            if tally.visit(color) {
                tally.census.colors += 1;
            }
        }
        for mask in self.masks.values() {
            if tally.visit(mask) {
                tally.census.masks += 1;
            }
        }
        for style in self.styles.values() {
            if tally.visit(style) {
                tally.census.surfaces += 1;
            }
        }
        for appearance in self.elements.values().chain(self.buttons.values()) {
            tally.appearance(appearance);
        }
        tally.census
    }

    /// Drops the theme. Each distinct node is freed exactly once; nodes
    /// the caller still holds (such as supplied fonts) stay alive.
    pub fn release(self) -> NodeCensus {
        let census = self.census();
        debug!(theme = %self.name, nodes = census.nodes(), "releasing theme");
        drop(self);
        census
    }
}
