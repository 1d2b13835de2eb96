//! Fallback chain for the window chrome and family label font.
//!
//! The configured family (default "charter") is tried first; these are tried
//! in order when it is not installed, before settling for any serif or
//! sans-serif face.

/// Fallback label font families in priority order.
pub const TITLE_FALLBACK_FAMILIES: &[&str] = &[
    // Charter and its common packagings
    "Charter",
    "Bitstream Charter",
    "Charis SIL",
    // Widely installed serif faces
    "DejaVu Serif",
    "Liberation Serif",
    "Noto Serif",
    "Times New Roman",
    // Sans fallbacks
    "DejaVu Sans",
    "Liberation Sans",
    "Noto Sans",
    "Arial",
];
