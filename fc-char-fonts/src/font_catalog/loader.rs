//! Face loading from the font database or from disk.

use fontdb::{Database, Family, Query};

use super::types::FontData;
use crate::error::FontError;
use crate::matcher::FontMatch;

/// Load a face from the database by family name.
///
/// # Returns
/// `Some(FontData)` if a face of that family was found and parsed.
pub fn load_font_from_db(db: &Database, family: Family<'_>) -> Option<FontData> {
    let query = Query {
        families: &[family],
        weight: fontdb::Weight::NORMAL,
        style: fontdb::Style::Normal,
        ..Query::default()
    };

    let id = db.query(&query)?;
    load_face_by_id(db, id)
}

/// Load the bytes of a face by database ID.
///
/// Passes the face index through for TrueType Collection (.ttc) files where
/// multiple faces share the same data.
pub fn load_face_by_id(db: &Database, id: fontdb::ID) -> Option<FontData> {
    db.with_face_data(id, |data, face_index| {
        FontData::new_with_index(data.to_vec(), face_index as usize)
    })
    .flatten()
}

/// Load the face described by a previous match.
///
/// Matches produced by this database are loaded through it; detached matches
/// (or ones whose entry is gone) are read from their file path.
pub fn load_match(db: &Database, font: &FontMatch) -> Result<FontData, FontError> {
    if let Some(id) = font.id
        && db.face(id).is_some()
    {
        return load_face_by_id(db, id).ok_or_else(|| FontError::InvalidFace {
            family: font.family.clone(),
            face_index: font.face_index,
        });
    }

    let Some(path) = &font.path else {
        return Err(FontError::Unavailable {
            family: font.family.clone(),
        });
    };

    let bytes = std::fs::read(path).map_err(|source| FontError::Read {
        path: path.clone(),
        source,
    })?;
    FontData::new_with_index(bytes, font.face_index as usize).ok_or_else(|| {
        FontError::InvalidFace {
            family: font.family.clone(),
            face_index: font.face_index,
        }
    })
}
