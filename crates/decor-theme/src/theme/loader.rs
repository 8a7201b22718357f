//! Locating and loading themes by name.
//!
//! A theme lives in a directory holding `openbox-3/themerc` plus optional
//! bitmap overrides next to it. [`SearchPaths`] lists where such
//! directories are looked for; [`ThemeLoader`] opens the first `themerc`
//! found, falling back to [`DEFAULT_THEME`] when allowed.
//!
//! ```rust,no_run
//! use decor_theme::{LoadOptions, ThemeLoader};
//!
//! let loader = ThemeLoader::new(LoadOptions::default());
//! let theme = loader.load(Some("Onyx")).unwrap();
//! println!("{}", theme.geometry().title_height);
//! ```

use std::collections::BTreeMap;
use std::env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use decor_parse::ResourceDb;
use tracing::{debug, warn};

use super::builder::ThemeBuilder;
use super::lifecycle::NodeCensus;
use super::theme::Theme;
use crate::error::{Result, ThemeError};
use crate::font::{DefaultFontProvider, Font, FontProvider};
use crate::ids::FontSlot;
use crate::mask::XbmDirectory;

/// The theme loaded when the requested one cannot be found.
pub const DEFAULT_THEME: &str = "Clearlooks";

const THEMERC: &str = "themerc";
const SUBDIR: &str = "openbox-3";

fn non_empty(value: OsString) -> Option<OsString> {
    (!value.is_empty()).then_some(value)
}

/// Directories searched for themes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchPaths {
    /// Directories of theme directories, searched first.
    theme_dirs: Vec<PathBuf>,
    /// XDG data directories; themes live under `<dir>/themes`.
    data_dirs: Vec<PathBuf>,
}

impl SearchPaths {
    /// `user_dir` is a directory of themes such as `~/.themes`.
    pub fn new(user_dir: Option<PathBuf>, data_dirs: Vec<PathBuf>) -> Self {
        Self {
            theme_dirs: user_dir.into_iter().collect(),
            data_dirs,
        }
    }

    /// Builds the search path from `HOME`, `XDG_DATA_HOME` and
    /// `XDG_DATA_DIRS`.
    pub fn from_env() -> Self {
        let home = env::var_os("HOME").and_then(non_empty).map(PathBuf::from);
        let data_home = env::var_os("XDG_DATA_HOME")
            .and_then(non_empty)
            .map(PathBuf::from)
            .or_else(|| home.as_ref().map(|h| h.join(".local").join("share")));
        let system = match env::var_os("XDG_DATA_DIRS").and_then(non_empty) {
            Some(dirs) => env::split_paths(&dirs).collect(),
            None => vec![
                PathBuf::from("/usr/local/share"),
                PathBuf::from("/usr/share"),
            ],
        };
        Self::new(
            home.map(|h| h.join(".themes")),
            data_home.into_iter().chain(system).collect(),
        )
    }

    /// Adds a directory of themes searched before all others.
    pub fn with_theme_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.theme_dirs.insert(0, dir.into());
        self
    }

    /// Every `themerc` path tried for `name`, in order.
    pub fn candidates(&self, name: &str) -> Vec<PathBuf> {
        let bare = Path::new(name);
        let mut out = Vec::new();
        if bare.is_absolute() {
            out.push(bare.join(SUBDIR).join(THEMERC));
        } else {
            for dir in &self.theme_dirs {
                out.push(dir.join(name).join(SUBDIR).join(THEMERC));
            }
            for dir in &self.data_dirs {
                out.push(dir.join("themes").join(name).join(SUBDIR).join(THEMERC));
            }
        }
        out.push(bare.join(THEMERC));
        out
    }
}

/// Options for [`ThemeLoader`].
#[derive(Clone)]
pub struct LoadOptions {
    search: SearchPaths,
    allow_fallback: bool,
    fonts: BTreeMap<FontSlot, Arc<Font>>,
    provider: Arc<dyn FontProvider>,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            search: SearchPaths::from_env(),
            allow_fallback: true,
            fonts: BTreeMap::new(),
            provider: Arc::new(DefaultFontProvider),
        }
    }
}

impl LoadOptions {
    pub fn search_paths(mut self, search: SearchPaths) -> Self {
        self.search = search;
        self
    }

    /// Whether to load [`DEFAULT_THEME`] when the requested theme is
    /// missing. On by default.
    pub fn allow_fallback(mut self, allow: bool) -> Self {
        self.allow_fallback = allow;
        self
    }

    pub fn font(mut self, slot: FontSlot, font: Arc<Font>) -> Self {
        self.fonts.insert(slot, font);
        self
    }

    pub fn font_provider(mut self, provider: Arc<dyn FontProvider>) -> Self {
        self.provider = provider;
        self
    }

    pub fn search(&self) -> &SearchPaths {
        &self.search
    }
}

/// Finds, reads and builds themes.
#[derive(Clone, Default)]
pub struct ThemeLoader {
    options: LoadOptions,
}

impl ThemeLoader {
    pub fn new(options: LoadOptions) -> Self {
        Self { options }
    }

    /// Returns the first existing `themerc` for `name`.
    pub fn locate(&self, name: &str) -> Option<PathBuf> {
        self.options
            .search
            .candidates(name)
            .into_iter()
            .find(|p| p.is_file())
    }

    /// Loads `name`, or the default theme when `name` is `None`, missing,
    /// and fallback is allowed.
    ///
    /// # Errors
    ///
    /// [`ThemeError::NotFound`] when neither the requested nor the default
    /// theme can be found. A `themerc` that exists but cannot be read counts
    /// as not found.
    pub fn load(&self, name: Option<&str>) -> Result<Theme> {
        let mut searched = Vec::new();

        if let Some(name) = name {
            if let Some((themerc, db)) = self.open(name, &mut searched) {
                return self.build(name, &themerc, &db);
            }
            if self.options.allow_fallback {
                warn!(
                    theme = name,
                    fallback = DEFAULT_THEME,
                    "unable to load the theme, falling back to the default"
                );
            }
        }

        if self.options.allow_fallback {
            if let Some((themerc, db)) = self.open(DEFAULT_THEME, &mut searched) {
                return self.build(DEFAULT_THEME, &themerc, &db);
            }
        }

        Err(ThemeError::NotFound {
            name: name.unwrap_or(DEFAULT_THEME).to_string(),
            searched,
        })
    }

    /// Replaces `current` with a freshly loaded theme and releases the old
    /// one. On error `current` is left as it was.
    pub fn reload(&self, current: &mut Theme, name: Option<&str>) -> Result<NodeCensus> {
        let next = self.load(name)?;
        let old = std::mem::replace(current, next);
        Ok(old.release())
    }

    fn open(&self, name: &str, searched: &mut Vec<PathBuf>) -> Option<(PathBuf, ResourceDb)> {
        for candidate in self.options.search.candidates(name) {
            if !candidate.is_file() {
                searched.push(candidate);
                continue;
            }
            match ResourceDb::from_file(&candidate) {
                Ok(db) => return Some((candidate, db)),
                Err(err) => {
                    debug!(path = %candidate.display(), error = %err, "unreadable themerc, skipping");
                    searched.push(candidate);
                }
            }
        }
        None
    }

    fn build(&self, name: &str, themerc: &Path, db: &ResourceDb) -> Result<Theme> {
        let dir = themerc.parent().map(Path::to_path_buf).unwrap_or_default();
        debug!(theme = name, path = %themerc.display(), entries = db.len(), "loading theme");
        let bitmaps = XbmDirectory::new(&dir);
        ThemeBuilder::new(name, db)
            .path(dir)
            .bitmaps(&bitmaps)
            .fonts(&self.options.fonts)
            .font_provider(Arc::clone(&self.options.provider))
            .build()
    }
}
