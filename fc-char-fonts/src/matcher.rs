//! Font matching interface and match descriptors.

use std::fmt;
use std::path::PathBuf;

/// One installed face whose character map covers the queried code point.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct FontMatch {
    /// Primary (English) family name, e.g. "DejaVu Sans"
    pub family: String,
    /// Style description, e.g. "Regular", "Bold Italic"
    pub style: String,
    /// File the face was loaded from (`None` for in-memory faces)
    pub path: Option<PathBuf>,
    /// Face index within the file (non-zero for TrueType collections)
    pub face_index: u32,
    /// Database handle, set when the match came from a `FontCatalog`
    pub(crate) id: Option<fontdb::ID>,
}

impl FontMatch {
    /// Create a match that is not tied to any database entry.
    ///
    /// Loading such a match reads `path` directly.
    pub fn new(
        family: impl Into<String>,
        style: impl Into<String>,
        path: Option<PathBuf>,
        face_index: u32,
    ) -> Self {
        Self {
            family: family.into(),
            style: style.into(),
            path,
            face_index,
            id: None,
        }
    }
}

impl fmt::Debug for FontMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FontMatch")
            .field("family", &self.family)
            .field("style", &self.style)
            .field("path", &self.path)
            .field("face_index", &self.face_index)
            .finish()
    }
}

/// Finds installed fonts that contain a glyph for a code point.
pub trait FontMatcher {
    /// Return every eligible face that maps `codepoint`, in the matcher's
    /// ranking order.
    ///
    /// When `include_fixed` is false only scalable (outline) faces are
    /// eligible. No match is an empty vector, never an error.
    fn find(&self, codepoint: u32, include_fixed: bool) -> Vec<FontMatch>;
}
