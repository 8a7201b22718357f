//! X resource database.
//!
//! Theme configuration files use the X resource manager syntax: one
//! `key: value` pair per line, where the key is a path of components joined
//! by tight (`.`) or loose (`*`) bindings.
//!
//! ```text
//! ! comment
//! window.active.title.bg: raised gradient vertical
//! window.active.title.bg.color: #336699
//! *.text.justify: center
//! window*border.color: gray40
//! #include "common.rc"
//! ```
//!
//! # Lookup
//!
//! [`ResourceDb::lookup`] takes a fully qualified dotted name such as
//! `window.active.label.text.color`. Its class is derived by upper-casing the
//! first character of every component (`Window.Active.Label.Text.Color`).
//! An entry component matches a query component if it equals the name, the
//! class, or is the single-component wildcard `?`. A loose binding may skip
//! any number of query components.
//!
//! When several entries match, precedence is decided level by level, from
//! the leftmost component:
//!
//! 1. An entry that matches the component beats one that skips the level
//! 2. A name match beats a class match, which beats `?`
//! 3. A tight binding beats a loose binding
//!
//! Later definitions of an identical key replace earlier ones.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::trace;

use crate::error::{ParseError, Result};

/// Maximum `#include` nesting depth.
pub const MAX_INCLUDE_DEPTH: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Binding {
    Tight,
    Loose,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Component {
    Word(String),
    Any,
}

#[derive(Debug, Clone)]
struct Entry {
    key: String,
    path: Vec<(Binding, Component)>,
    value: String,
}

/// How a single query level was matched, ordered by precedence.
///
/// A skipped level scores 0; matched levels score
/// `1 + 2 * kind + tight` where kind is name=3, class=2, any=1.
fn level_score(kind: u8, binding: Binding) -> u8 {
    1 + 2 * kind + u8::from(binding == Binding::Tight)
}

/// An in-memory X resource database.
#[derive(Debug, Clone, Default)]
pub struct ResourceDb {
    entries: Vec<Entry>,
    /// Normalized key -> index into `entries`.
    by_key: HashMap<String, usize>,
}

impl ResourceDb {
    /// Creates an empty database.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses resource content. `#include` directives are ignored since
    /// there is no base directory to resolve them against.
    pub fn parse(content: &str) -> Self {
        let mut db = Self::new();
        db.load_str(content, None, 0);
        db
    }

    /// Reads a resource file, following `#include` directives relative to
    /// the including file.
    ///
    /// Bytes that are not valid UTF-8 are replaced. Includes that cannot be
    /// read, or that nest deeper than [`MAX_INCLUDE_DEPTH`], are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::Io`] if the file itself cannot be read.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = read_lossy(path).map_err(|source| ParseError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut db = Self::new();
        db.load_str(&content, path.parent(), 0);
        Ok(db)
    }

    /// Adds or replaces a single resource. Returns `false` if the key is
    /// not a valid resource specifier.
    pub fn insert(&mut self, key: &str, value: impl Into<String>) -> bool {
        let Some(path) = parse_key(key) else {
            return false;
        };
        let key = normalize(&path);
        let value = value.into();
        match self.by_key.get(&key) {
            Some(&idx) => self.entries[idx].value = value,
            None => {
                self.by_key.insert(key.clone(), self.entries.len());
                self.entries.push(Entry { key, path, value });
            }
        }
        true
    }

    /// Looks up a fully qualified dotted resource name.
    pub fn lookup(&self, name: &str) -> Option<&str> {
        let names: Vec<&str> = name.split('.').collect();
        if names.iter().any(|n| n.is_empty()) {
            return None;
        }

        // A fully tight entry spelling out the name is the best possible match.
        if let Some(&idx) = self.by_key.get(name) {
            return Some(self.entries[idx].value.as_str());
        }

        let classes: Vec<String> = names.iter().map(|n| class_of(n)).collect();
        let mut best: Option<(Vec<u8>, usize)> = None;
        for (idx, entry) in self.entries.iter().enumerate() {
            let mut scratch = Vec::with_capacity(names.len());
            if let Some(score) = best_match(&entry.path, &names, &classes, &mut scratch) {
                if best.as_ref().map_or(true, |(b, _)| score > *b) {
                    best = Some((score, idx));
                }
            }
        }
        best.map(|(_, idx)| self.entries[idx].value.as_str())
    }

    /// Number of distinct resource keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the database holds no resources.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates `(key, value)` pairs in definition order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|e| (e.key.as_str(), e.value.as_str()))
    }

    fn include(&mut self, path: &Path, depth: usize) {
        if depth > MAX_INCLUDE_DEPTH {
            trace!(path = %path.display(), depth, "include nested too deep, skipping");
            return;
        }
        match read_lossy(path) {
            Ok(content) => self.load_str(&content, path.parent(), depth),
            Err(err) => trace!(path = %path.display(), error = %err, "unreadable include, skipping"),
        }
    }

    fn load_str(&mut self, content: &str, base: Option<&Path>, depth: usize) {
        for line in logical_lines(content) {
            let trimmed = line.trim_start();
            if trimmed.is_empty() || trimmed.starts_with('!') {
                continue;
            }
            if let Some(directive) = trimmed.strip_prefix('#') {
                if let (Some(base), Some(file)) = (base, include_target(directive)) {
                    let target: PathBuf = base.join(file);
                    self.include(&target, depth + 1);
                }
                continue;
            }
            let Some((key, value)) = trimmed.split_once(':') else {
                continue;
            };
            self.insert(key.trim(), unescape(value.trim()));
        }
    }
}

fn read_lossy(path: &Path) -> std::io::Result<String> {
    let bytes = fs::read(path)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Joins backslash-continued physical lines into logical lines.
fn logical_lines(content: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for raw in content.lines() {
        let trailing = raw.len() - raw.trim_end_matches('\\').len();
        if trailing % 2 == 1 {
            current.push_str(&raw[..raw.len() - 1]);
            continue;
        }
        current.push_str(raw);
        lines.push(std::mem::take(&mut current));
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Extracts the file name from `include "file"` (the leading `#` already
/// stripped). Other directives yield `None`.
fn include_target(directive: &str) -> Option<&str> {
    let rest = directive.trim_start().strip_prefix("include")?.trim();
    let rest = rest.strip_prefix('"')?;
    let end = rest.find('"')?;
    Some(&rest[..end])
}

fn unescape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some(d) if d.is_digit(8) => {
                let mut code = d.to_digit(8).unwrap_or(0);
                for _ in 0..2 {
                    match chars.peek().and_then(|p| p.to_digit(8)) {
                        Some(v) => {
                            code = code * 8 + v;
                            chars.next();
                        }
                        None => break,
                    }
                }
                if let Some(ch) = char::from_u32(code) {
                    out.push(ch);
                }
            }
            Some(other) => out.push(other),
            None => out.push('\\'),
        }
    }
    out
}

/// Splits a resource specifier into bound components.
fn parse_key(key: &str) -> Option<Vec<(Binding, Component)>> {
    let mut path = Vec::new();
    let mut binding = Binding::Tight;
    let mut word = String::new();

    for c in key.chars() {
        match c {
            '.' => flush_component(&mut word, &mut binding, &mut path),
            '*' => {
                flush_component(&mut word, &mut binding, &mut path);
                binding = Binding::Loose;
            }
            c if c.is_whitespace() => return None,
            c => word.push(c),
        }
    }
    if word.is_empty() {
        // Trailing binding or empty key.
        return None;
    }
    flush_component(&mut word, &mut binding, &mut path);
    Some(path)
}

fn flush_component(
    word: &mut String,
    binding: &mut Binding,
    path: &mut Vec<(Binding, Component)>,
) {
    if word.is_empty() {
        return;
    }
    let component = if word == "?" {
        word.clear();
        Component::Any
    } else {
        Component::Word(std::mem::take(word))
    };
    path.push((*binding, component));
    *binding = Binding::Tight;
}

fn normalize(path: &[(Binding, Component)]) -> String {
    let mut out = String::new();
    for (i, (binding, component)) in path.iter().enumerate() {
        match binding {
            Binding::Loose => out.push('*'),
            Binding::Tight if i > 0 => out.push('.'),
            Binding::Tight => {}
        }
        match component {
            Component::Word(w) => out.push_str(w),
            Component::Any => out.push('?'),
        }
    }
    out
}

fn class_of(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Returns the best per-level score for `path` against the query, or
/// `None` if the entry does not match.
fn best_match(
    path: &[(Binding, Component)],
    names: &[&str],
    classes: &[String],
    scratch: &mut Vec<u8>,
) -> Option<Vec<u8>> {
    let Some(((binding, component), rest)) = path.split_first() else {
        return (scratch.len() == names.len()).then(|| scratch.clone());
    };
    let level = scratch.len();
    if level == names.len() {
        return None;
    }

    let mut best: Option<Vec<u8>> = None;

    let kind = match component {
        Component::Word(w) if w == names[level] => Some(3),
        Component::Word(w) if *w == classes[level] => Some(2),
        Component::Word(_) => None,
        Component::Any => Some(1),
    };
    if let Some(kind) = kind {
        scratch.push(level_score(kind, *binding));
        best = best_match(rest, names, classes, scratch);
        scratch.pop();
    }

    if *binding == Binding::Loose {
        scratch.push(0);
        if let Some(skipped) = best_match(path, names, classes, scratch) {
            if best.as_ref().map_or(true, |b| skipped > *b) {
                best = Some(skipped);
            }
        }
        scratch.pop();
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;

    // =========================================================================
    // Line parsing
    // =========================================================================

    #[test]
    fn test_parse_simple_pairs() {
        let db = ResourceDb::parse(
            "window.active.title.bg: raised gradient\nborder.width:   2\n",
        );
        assert_eq!(db.len(), 2);
        assert_eq!(db.lookup("window.active.title.bg"), Some("raised gradient"));
        assert_eq!(db.lookup("border.width"), Some("2"));
    }

    #[test]
    fn test_parse_skips_comments_and_garbage() {
        let db = ResourceDb::parse("! a comment\n  ! indented\nnot a pair\n\n#define X 1\nk: v\n");
        assert_eq!(db.len(), 1);
        assert_eq!(db.lookup("k"), Some("v"));
    }

    #[test]
    fn test_parse_trims_value_whitespace() {
        let db = ResourceDb::parse("a.b:\t  flat solid  \t\n");
        assert_eq!(db.lookup("a.b"), Some("flat solid"));
    }

    #[test]
    fn test_parse_value_may_contain_colons() {
        let db = ResourceDb::parse("a.font: shadow=y:shadowtint=30\n");
        assert_eq!(db.lookup("a.font"), Some("shadow=y:shadowtint=30"));
    }

    #[test]
    fn test_line_continuation() {
        let db = ResourceDb::parse("a.b: raised \\\ngradient\n");
        assert_eq!(db.lookup("a.b"), Some("raised gradient"));
    }

    #[test]
    fn test_escapes() {
        let db = ResourceDb::parse("a: one\\ntwo\nb: back\\\\slash\nc: \\101\n");
        assert_eq!(db.lookup("a"), Some("one\ntwo"));
        assert_eq!(db.lookup("b"), Some("back\\slash"));
        assert_eq!(db.lookup("c"), Some("A"));
    }

    #[test]
    fn test_later_definition_replaces() {
        let db = ResourceDb::parse("a.b: first\na.b: second\n");
        assert_eq!(db.len(), 1);
        assert_eq!(db.lookup("a.b"), Some("second"));
    }

    #[test]
    fn test_invalid_keys_rejected() {
        let mut db = ResourceDb::new();
        assert!(!db.insert("", "x"));
        assert!(!db.insert("a.", "x"));
        assert!(!db.insert("a b", "x"));
        assert!(db.insert("a.b", "x"));
    }

    // =========================================================================
    // Matching and precedence
    // =========================================================================

    #[test]
    fn test_lookup_missing() {
        let db = ResourceDb::parse("a.b: 1\n");
        assert_eq!(db.lookup("a.c"), None);
        assert_eq!(db.lookup("a"), None);
        assert_eq!(db.lookup("a.b.c"), None);
        assert_eq!(db.lookup(""), None);
        assert_eq!(db.lookup("a..b"), None);
    }

    #[test]
    fn test_loose_binding_skips_levels() {
        let db = ResourceDb::parse("*color: red\n");
        assert_eq!(db.lookup("window.active.border.color"), Some("red"));
        assert_eq!(db.lookup("color"), Some("red"));
    }

    #[test]
    fn test_class_match() {
        let db = ResourceDb::parse("Window.Active.Title.Bg: flat\n");
        assert_eq!(db.lookup("window.active.title.bg"), Some("flat"));
    }

    #[test]
    fn test_name_beats_class() {
        let db = ResourceDb::parse("Window.title: class\nwindow.title: name\n");
        assert_eq!(db.lookup("window.title"), Some("name"));
    }

    #[test]
    fn test_wildcard_component() {
        let db = ResourceDb::parse("window.?.border.color: #111111\n");
        assert_eq!(db.lookup("window.active.border.color"), Some("#111111"));
        assert_eq!(db.lookup("window.inactive.border.color"), Some("#111111"));
    }

    #[test]
    fn test_matched_level_beats_skipped_level() {
        let db = ResourceDb::parse("window*color: loose\nwindow.?.border.color: any\n");
        assert_eq!(db.lookup("window.active.border.color"), Some("any"));
    }

    #[test]
    fn test_tight_beats_loose() {
        let db = ResourceDb::parse("a*c: loose\na.b.c: tight-b\n*b.c: lead\n");
        assert_eq!(db.lookup("a.b.c"), Some("tight-b"));
        assert_eq!(db.lookup("x.b.c"), Some("lead"));
    }

    #[test]
    fn test_leftmost_level_decides() {
        // Both match; the first differs at level 0 (name vs skipped).
        let db = ResourceDb::parse("*active.bg: skipped\nwindow*bg: named\n");
        assert_eq!(db.lookup("window.active.bg"), Some("named"));
    }

    #[test]
    fn test_iter_in_definition_order() {
        let db = ResourceDb::parse("z: 1\n*a: 2\nm.?: 3\n");
        let keys: Vec<&str> = db.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["z", "*a", "m.?"]);
    }

    // =========================================================================
    // Files and includes
    // =========================================================================

    #[test]
    fn test_from_file_with_include() {
        let dir = tempfile::TempDir::new().unwrap();
        std::fs::write(dir.path().join("common.rc"), "shared.value: 7\nlocal: base\n").unwrap();
        std::fs::write(
            dir.path().join("themerc"),
            "#include \"common.rc\"\nlocal: override\n",
        )
        .unwrap();

        let db = ResourceDb::from_file(dir.path().join("themerc")).unwrap();
        assert_eq!(db.lookup("shared.value"), Some("7"));
        assert_eq!(db.lookup("local"), Some("override"));
    }

    #[test]
    fn test_from_file_missing() {
        let err = ResourceDb::from_file("/nonexistent/themerc").unwrap_err();
        assert!(matches!(err, ParseError::Io { .. }));
    }

    #[test]
    fn test_include_cycle_is_bounded() {
        let dir = tempfile::TempDir::new().unwrap();
        std::fs::write(dir.path().join("self.rc"), "#include \"self.rc\"\na: 1\n").unwrap();
        let db = ResourceDb::from_file(dir.path().join("self.rc")).unwrap();
        assert_eq!(db.lookup("a"), Some("1"));
        assert_eq!(db.len(), 1);
    }

    #[test]
    fn test_missing_include_is_skipped() {
        let dir = tempfile::TempDir::new().unwrap();
        std::fs::write(
            dir.path().join("themerc"),
            "#include \"gone.rc\"\nborder.width: 4\n",
        )
        .unwrap();
        let db = ResourceDb::from_file(dir.path().join("themerc")).unwrap();
        assert_eq!(db.lookup("border.width"), Some("4"));
    }

    #[test]
    fn test_non_utf8_bytes_are_replaced() {
        let dir = tempfile::TempDir::new().unwrap();
        std::fs::write(
            dir.path().join("themerc"),
            b"! Th\xe8me by Andr\xe9\nborder.width: 4\nauthor: Andr\xe9\n",
        )
        .unwrap();
        let db = ResourceDb::from_file(dir.path().join("themerc")).unwrap();
        assert_eq!(db.lookup("border.width"), Some("4"));
        assert_eq!(db.lookup("author"), Some("Andr\u{fffd}"));
    }

    #[test]
    fn test_parse_ignores_includes() {
        let db = ResourceDb::parse("#include \"nowhere.rc\"\na: 1\n");
        assert_eq!(db.lookup("a"), Some("1"));
    }
}
