//! Decor Parse - readers for the file formats window decoration themes use.
//!
//! Themes are described by two kinds of files:
//!
//! - **Resource files** (`themerc`): X resource manager syntax, read into a
//!   [`ResourceDb`] and queried by fully qualified name
//! - **Bitmaps** (`*.xbm`): 1-bit button glyphs, read into an [`Xbm`]
//!
//! # Quick Start
//!
//! ```rust
//! use decor_parse::ResourceDb;
//!
//! let db = ResourceDb::parse(
//!     "window.active.title.bg: raised gradient vertical\n\
//!      *.border.color: #336699\n",
//! );
//!
//! assert_eq!(db.lookup("window.active.title.bg"), Some("raised gradient vertical"));
//! assert_eq!(db.lookup("window.active.border.color"), Some("#336699"));
//! assert_eq!(db.lookup("window.active.label.bg"), None);
//! ```
//!
//! ```rust
//! use decor_parse::Xbm;
//!
//! let xbm = Xbm::parse(
//!     "#define max_width 6\n#define max_height 1\nstatic char max_bits[] = { 0x21 };",
//! ).unwrap();
//! assert!(xbm.pixel(0, 0));
//! assert!(!xbm.pixel(1, 0));
//! assert!(xbm.pixel(5, 0));
//! ```
//!
//! Malformed resource lines and unreadable includes are skipped silently.
//! Only whole-file failures (an unreadable file, a broken bitmap) surface
//! as [`ParseError`].

mod error;
pub mod xbm;
pub mod xrm;

pub use error::{ParseError, Result};
pub use xbm::Xbm;
pub use xrm::{ResourceDb, MAX_INCLUDE_DEPTH};
