//! Typed errors for face loading.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when loading the bytes of a matched face.
#[derive(Debug, Error)]
pub enum FontError {
    /// The font file backing a match could not be read.
    #[error("Failed to read font file {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The face is no longer present in the database and has no file path.
    #[error("Font face '{family}' is not available")]
    Unavailable { family: String },

    /// The bytes were read but do not parse as a font face at that index.
    #[error("Invalid font data for '{family}' (face index {face_index})")]
    InvalidFace { family: String, face_index: u32 },
}
