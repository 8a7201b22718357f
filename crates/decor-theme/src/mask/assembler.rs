use tracing::trace;

use super::{BitmapSource, Mask};

/// A mask together with where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedMask {
    pub mask: Mask,
    /// True when the mask was read from an authored bitmap.
    pub authored: bool,
}

/// Resolves masks from authored bitmaps, falling back to a caller-supplied
/// mask when the bitmap is missing or invalid.
pub struct MaskAssembler<'a> {
    source: &'a dyn BitmapSource,
}

impl<'a> MaskAssembler<'a> {
    pub fn new(source: &'a dyn BitmapSource) -> Self {
        Self { source }
    }

    /// Loads `file`, or builds the fallback mask. Read and decode failures
    /// are not distinguished from absence.
    pub fn resolve(&self, file: &str, fallback: impl FnOnce() -> Mask) -> ResolvedMask {
        match self.source.read(file) {
            Ok(xbm) => ResolvedMask {
                mask: Mask::from(xbm),
                authored: true,
            },
            Err(err) => {
                trace!(file, %err, "no usable bitmap");
                ResolvedMask {
                    mask: fallback(),
                    authored: false,
                }
            }
        }
    }
}
