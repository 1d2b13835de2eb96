//! Font catalog over the system font database.
//!
//! This module provides coverage queries and face loading. It supports:
//! - Listing every installed face whose charmap contains a code point
//! - Filtering out fixed-size (bitmap-only) faces
//! - Loading the label font by family with a fallback chain
//! - Loading a matched face for rendering, keeping its bytes for the run

mod fallbacks;
mod loader;
mod types;

use std::cell::RefCell;
use std::collections::HashMap;

use fontdb::{Database, FaceInfo, Family, Source};
use swash::FontRef;

use crate::error::FontError;
use crate::matcher::{FontMatch, FontMatcher};

pub use fallbacks::TITLE_FALLBACK_FAMILIES;
pub use types::FontData;

/// Installed fonts, queried for glyph coverage and loaded for rendering.
///
/// Matches are ordered by family name (case-insensitive), then weight,
/// style, file path and face index, so one query always yields the same
/// order for the same set of installed fonts.
///
/// Loaded faces are kept until the catalog is dropped; repaints share the
/// same bytes instead of reading the font file again.
pub struct FontCatalog {
    font_db: Database,
    loaded: RefCell<HashMap<FontMatch, FontData>>,
    families: RefCell<HashMap<String, Option<FontData>>>,
}

impl FontCatalog {
    /// Create a catalog over all system fonts.
    pub fn system() -> Self {
        let mut font_db = Database::new();
        font_db.load_system_fonts();
        log::info!("Loaded {} system font faces", font_db.len());
        Self::from_database(font_db)
    }

    /// Create a catalog over an existing database.
    pub fn from_database(font_db: Database) -> Self {
        Self {
            font_db,
            loaded: RefCell::new(HashMap::new()),
            families: RefCell::new(HashMap::new()),
        }
    }

    /// Load a face for `family`, falling back through
    /// [`TITLE_FALLBACK_FAMILIES`] and then generic serif/sans-serif.
    pub fn load_family(&self, family: &str) -> Option<FontData> {
        if let Some(cached) = self.families.borrow().get(family) {
            return cached.clone();
        }
        let font_data = self.resolve_family(family);
        self.families
            .borrow_mut()
            .insert(family.to_string(), font_data.clone());
        font_data
    }

    fn resolve_family(&self, family: &str) -> Option<FontData> {
        if let Some(font_data) = loader::load_font_from_db(&self.font_db, Family::Name(family)) {
            return Some(font_data);
        }
        log::debug!("Font family '{}' not found, trying fallbacks", family);

        for fallback in TITLE_FALLBACK_FAMILIES {
            if let Some(font_data) =
                loader::load_font_from_db(&self.font_db, Family::Name(*fallback))
            {
                log::debug!("Using fallback family '{}' for '{}'", fallback, family);
                return Some(font_data);
            }
        }

        loader::load_font_from_db(&self.font_db, Family::Serif)
            .or_else(|| loader::load_font_from_db(&self.font_db, Family::SansSerif))
    }

    /// Load the face behind a match. Failures are not remembered.
    pub fn load_match(&self, font: &FontMatch) -> Result<FontData, FontError> {
        if let Some(font_data) = self.loaded.borrow().get(font) {
            return Ok(font_data.clone());
        }
        let font_data = loader::load_match(&self.font_db, font)?;
        log::debug!(
            "Loaded {} {} ({} bytes)",
            font.family,
            font.style,
            font_data.data.len()
        );
        self.loaded
            .borrow_mut()
            .insert(font.clone(), font_data.clone());
        Ok(font_data)
    }

    /// Check a single face for coverage, returning a match when eligible.
    fn match_face(
        &self,
        face: &FaceInfo,
        character: char,
        include_fixed: bool,
    ) -> Option<FontMatch> {
        let Some((family, _)) = face.families.first() else {
            log::debug!("Skipping face {:?} without a family name", face.id);
            return None;
        };

        let eligible = self
            .font_db
            .with_face_data(face.id, |data, index| {
                let font = FontRef::from_index(data, index as usize)?;
                let covers = font.charmap().map(character) != 0;
                Some(covers && (include_fixed || types::is_scalable(&font)))
            })
            .flatten()
            .unwrap_or(false);

        if !eligible {
            return None;
        }

        let path = match &face.source {
            Source::File(path) => Some(path.clone()),
            Source::SharedFile(path, _) => Some(path.clone()),
            Source::Binary(_) => None,
        };

        Some(FontMatch {
            family: family.clone(),
            style: style_name(face),
            path,
            face_index: face.index,
            id: Some(face.id),
        })
    }
}

impl FontMatcher for FontCatalog {
    fn find(&self, codepoint: u32, include_fixed: bool) -> Vec<FontMatch> {
        let Some(character) = char::from_u32(codepoint) else {
            log::warn!(
                "U+{:04X} is not a Unicode scalar value, no font can map it",
                codepoint
            );
            return Vec::new();
        };

        let mut faces: Vec<&FaceInfo> = self.font_db.faces().collect();
        faces.sort_by(|a, b| {
            let family = |f: &FaceInfo| {
                f.families
                    .first()
                    .map(|(name, _)| name.to_lowercase())
                    .unwrap_or_default()
            };
            family(a)
                .cmp(&family(b))
                .then(a.weight.0.cmp(&b.weight.0))
                .then((a.style as u8).cmp(&(b.style as u8)))
                .then(source_path(a).cmp(&source_path(b)))
                .then(a.index.cmp(&b.index))
        });

        let matches: Vec<FontMatch> = faces
            .into_iter()
            .filter_map(|face| self.match_face(face, character, include_fixed))
            .collect();

        log::debug!(
            "U+{:04X}: {} of {} faces match (include_fixed={})",
            codepoint,
            matches.len(),
            self.font_db.len(),
            include_fixed
        );
        matches
    }
}

fn source_path(face: &FaceInfo) -> Option<&std::path::Path> {
    match &face.source {
        Source::File(path) | Source::SharedFile(path, _) => Some(path.as_path()),
        Source::Binary(_) => None,
    }
}

/// Human-readable style in the usual "Weight Slant" form.
fn style_name(face: &FaceInfo) -> String {
    let weight = match face.weight.0 {
        0..=149 => "Thin",
        150..=249 => "ExtraLight",
        250..=349 => "Light",
        350..=449 => "Regular",
        450..=549 => "Medium",
        550..=649 => "SemiBold",
        650..=749 => "Bold",
        750..=849 => "ExtraBold",
        _ => "Black",
    };
    match (face.style, weight) {
        (fontdb::Style::Normal, w) => w.to_string(),
        (fontdb::Style::Italic, "Regular") => "Italic".to_string(),
        (fontdb::Style::Oblique, "Regular") => "Oblique".to_string(),
        (fontdb::Style::Italic, w) => format!("{w} Italic"),
        (fontdb::Style::Oblique, w) => format!("{w} Oblique"),
    }
}
