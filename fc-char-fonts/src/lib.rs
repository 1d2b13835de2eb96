//! System font discovery and glyph coverage matching for fc-char.
//!
//! This crate provides:
//! - A font catalog over the system font database (via fontdb)
//! - Coverage queries: which installed faces map a given code point
//! - Scalable vs. fixed-size (bitmap-only) face classification
//! - Face loading by family name (with fallbacks) or by a previous match
//!
//! # Architecture
//!
//! `FontCatalog` owns the `fontdb::Database` and implements the
//! `FontMatcher` trait. Each match is described by a `FontMatch` that can be
//! handed back to the catalog to load the face's bytes as `FontData`.

pub mod error;
pub mod font_catalog;
pub mod matcher;

// Re-export main types for convenience
pub use error::FontError;
pub use font_catalog::{FontCatalog, FontData, TITLE_FALLBACK_FAMILIES};
pub use matcher::{FontMatch, FontMatcher};
