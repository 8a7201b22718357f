use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

use decor_parse::{ParseError, Xbm};

/// Supplies authored bitmaps by file name.
pub trait BitmapSource {
    /// Reads and decodes `file`.
    fn read(&self, file: &str) -> decor_parse::Result<Xbm>;
}

/// Reads XBM files from a theme directory.
#[derive(Debug, Clone)]
pub struct XbmDirectory {
    dir: PathBuf,
}

impl XbmDirectory {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl BitmapSource for XbmDirectory {
    fn read(&self, file: &str) -> decor_parse::Result<Xbm> {
        Xbm::from_file(self.dir.join(file))
    }
}

/// A source with no bitmaps; every mask takes its compiled fallback.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoBitmaps;

impl BitmapSource for NoBitmaps {
    fn read(&self, file: &str) -> decor_parse::Result<Xbm> {
        Err(not_found(file))
    }
}

impl BitmapSource for HashMap<String, Xbm> {
    fn read(&self, file: &str) -> decor_parse::Result<Xbm> {
        self.get(file).cloned().ok_or_else(|| not_found(file))
    }
}

fn not_found(file: &str) -> ParseError {
    ParseError::Io {
        path: PathBuf::from(file),
        source: io::Error::new(io::ErrorKind::NotFound, "no such bitmap"),
    }
}
