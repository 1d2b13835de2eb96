//! Integration tests for fc-char-fonts crate.

use std::path::PathBuf;
use std::sync::Arc;

use fc_char_fonts::{FontCatalog, FontData, FontError, FontMatch, FontMatcher};
use fontdb::Database;

#[test]
fn test_font_data_invalid_bytes() {
    let data = vec![0u8; 100];
    let font_data = FontData::new(data);
    assert!(
        font_data.is_none(),
        "Should return None for invalid font data"
    );
}

#[test]
fn test_font_data_empty_bytes() {
    let data = vec![];
    let font_data = FontData::new(data);
    assert!(font_data.is_none(), "Should return None for empty data");
}

#[test]
fn test_garbage_binary_is_not_a_face() {
    let mut db = Database::new();
    db.load_font_data(vec![0xAB; 64]);
    assert_eq!(db.len(), 0);
    let catalog = FontCatalog::from_database(db);
    assert!(catalog.find(0x41, true).is_empty());
}

#[test]
fn test_detached_match_without_path_is_unavailable() {
    let catalog = FontCatalog::from_database(Database::new());
    let font = FontMatch::new("Ghost Sans", "Regular", None, 0);
    match catalog.load_match(&font) {
        Err(FontError::Unavailable { family }) => assert_eq!(family, "Ghost Sans"),
        other => panic!("expected Unavailable, got {:?}", other),
    }
}

#[test]
fn test_detached_match_with_missing_file_is_read_error() {
    let catalog = FontCatalog::from_database(Database::new());
    let path = PathBuf::from("/nonexistent/fc-char/ghost.ttf");
    let font = FontMatch::new("Ghost Sans", "Regular", Some(path.clone()), 0);
    match catalog.load_match(&font) {
        Err(FontError::Read { path: p, .. }) => assert_eq!(p, path),
        other => panic!("expected Read error, got {:?}", other),
    }
}

#[test]
fn test_match_debug_omits_database_handle() {
    let font = FontMatch::new("DejaVu Sans", "Bold", Some(PathBuf::from("/f.ttf")), 0);
    let debug_str = format!("{:?}", font);
    assert!(debug_str.contains("DejaVu Sans"));
    assert!(!debug_str.contains("id"));
}

/// Private-use code point mapped by the in-memory fixture fonts.
const FIXTURE_CODEPOINT: u32 = 0xE0A0;

/// Build a minimal sfnt: a format 12 cmap mapping [`FIXTURE_CODEPOINT`] to
/// glyph 1, a name table carrying `family`, plus `extra` tables.
fn fixture_font(family: &str, extra: &[(&[u8; 4], Vec<u8>)]) -> Vec<u8> {
    fn be16(out: &mut Vec<u8>, value: u16) {
        out.extend_from_slice(&value.to_be_bytes());
    }
    fn be32(out: &mut Vec<u8>, value: u32) {
        out.extend_from_slice(&value.to_be_bytes());
    }

    let mut cmap = Vec::new();
    be16(&mut cmap, 0); // version
    be16(&mut cmap, 1); // subtables
    be16(&mut cmap, 3); // Windows
    be16(&mut cmap, 10); // Unicode full repertoire
    be32(&mut cmap, 12); // subtable offset
    be16(&mut cmap, 12); // format
    be16(&mut cmap, 0);
    be32(&mut cmap, 28); // length
    be32(&mut cmap, 0); // language
    be32(&mut cmap, 1); // groups
    be32(&mut cmap, FIXTURE_CODEPOINT);
    be32(&mut cmap, FIXTURE_CODEPOINT);
    be32(&mut cmap, 1);

    let utf16: Vec<u8> = family
        .encode_utf16()
        .flat_map(|unit| unit.to_be_bytes())
        .collect();
    let mut name = Vec::new();
    be16(&mut name, 0); // format
    be16(&mut name, 2); // records
    be16(&mut name, 6 + 2 * 12); // storage offset
    for name_id in [1, 6] {
        be16(&mut name, 0); // Unicode platform
        be16(&mut name, 3);
        be16(&mut name, 0);
        be16(&mut name, name_id);
        be16(&mut name, utf16.len() as u16);
        be16(&mut name, 0); // both records share one string
    }
    name.extend_from_slice(&utf16);

    let mut tables: Vec<(&[u8; 4], Vec<u8>)> = vec![(b"cmap", cmap), (b"name", name)];
    tables.extend(extra.iter().cloned());
    tables.sort_by(|a, b| a.0.cmp(b.0));

    let mut font = Vec::new();
    be32(&mut font, 0x0001_0000);
    be16(&mut font, tables.len() as u16);
    font.extend_from_slice(&[0; 6]);
    let mut offset = 12 + 16 * tables.len();
    for (tag, data) in &tables {
        font.extend_from_slice(*tag);
        be32(&mut font, 0); // checksum
        be32(&mut font, offset as u32);
        be32(&mut font, data.len() as u32);
        offset += data.len().next_multiple_of(4);
    }
    for (_, data) in &tables {
        font.extend_from_slice(data);
        font.resize(font.len().next_multiple_of(4), 0);
    }
    font
}

fn fixture_catalog() -> FontCatalog {
    let mut db = Database::new();
    db.load_font_data(fixture_font(
        "Fixture Bitmap",
        &[(b"EBDT", vec![0, 2, 0, 0]), (b"EBLC", vec![0, 2, 0, 0, 0, 0, 0, 0])],
    ));
    db.load_font_data(fixture_font(
        "Fixture Outline",
        &[(b"glyf", vec![0; 4]), (b"loca", vec![0; 4])],
    ));
    FontCatalog::from_database(db)
}

fn families(matches: &[FontMatch]) -> Vec<&str> {
    matches.iter().map(|m| m.family.as_str()).collect()
}

#[test]
fn test_bitmap_only_face_needs_fixed() {
    let catalog = fixture_catalog();
    assert_eq!(
        families(&catalog.find(FIXTURE_CODEPOINT, false)),
        vec!["Fixture Outline"]
    );
    assert_eq!(
        families(&catalog.find(FIXTURE_CODEPOINT, true)),
        vec!["Fixture Bitmap", "Fixture Outline"]
    );
}

#[test]
fn test_bitmap_only_face_is_not_scalable() {
    let catalog = fixture_catalog();
    let relaxed = catalog.find(FIXTURE_CODEPOINT, true);
    let bitmap = catalog.load_match(&relaxed[0]).expect("bitmap fixture loads");
    let outline = catalog.load_match(&relaxed[1]).expect("outline fixture loads");
    assert!(!bitmap.is_scalable());
    assert!(outline.is_scalable());
    assert_ne!(bitmap.font_ref.charmap().map(FIXTURE_CODEPOINT), 0);
}

#[test]
fn test_uncovered_codepoint_matches_nothing() {
    let catalog = fixture_catalog();
    assert!(catalog.find(0x41, true).is_empty());
}

#[test]
fn test_repeated_loads_share_bytes() {
    let catalog = fixture_catalog();
    let font = catalog.find(FIXTURE_CODEPOINT, false).remove(0);
    let first = catalog.load_match(&font).expect("fixture loads");
    let second = catalog.load_match(&font).expect("fixture loads again");
    assert!(Arc::ptr_eq(&first.data, &second.data));
}

/// Relaxing the scalable-only filter can only add faces.
#[test]
fn test_fixed_matching_is_superset_of_scalable() {
    let catalog = FontCatalog::system();
    for codepoint in [0x41, 0x263A, 0x4E2D, 0x1F600] {
        let strict = catalog.find(codepoint, false);
        let relaxed = catalog.find(codepoint, true);
        for font in &strict {
            assert!(
                relaxed.contains(font),
                "{:?} matched U+{:04X} strictly but not relaxed",
                font,
                codepoint
            );
        }
    }
}

/// Every strict match loads as an outline face that maps the code point.
#[test]
fn test_scalable_matches_cover_and_have_outlines() {
    let catalog = FontCatalog::system();
    for font in catalog.find(0x41, false).iter().take(10) {
        let data = catalog.load_match(font).expect("matched face should load");
        assert!(data.is_scalable(), "{:?} should be scalable", font);
        assert_ne!(data.font_ref.charmap().map('A'), 0, "{:?} should map 'A'", font);
    }
}

#[test]
fn test_repeated_queries_are_stable() {
    let catalog = FontCatalog::system();
    assert_eq!(catalog.find(0x41, false), catalog.find(0x41, false));
}
