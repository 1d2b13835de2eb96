//! Default values for every configurable setting.
//!
//! Kept as free functions so they can be referenced from
//! `#[serde(default = "...")]` attributes.

pub fn title_font_family() -> String {
    "charter".to_string()
}

pub fn title_font_size() -> f32 {
    14.0 // Points, quit button and title line
}

pub fn label_base_size() -> f32 {
    12.0 // Points, starting size for the family label scale search
}

pub fn h_padding() -> u32 {
    5
}

pub fn v_padding() -> u32 {
    5
}

pub fn name_band_fraction() -> f32 {
    0.2
}

pub fn border_width() -> u32 {
    2
}

pub fn refresh_interval_ms() -> u64 {
    100
}

pub fn window_width() -> u32 {
    800
}

pub fn window_height() -> u32 {
    600
}

/// Standard install locations of the Unicode `NamesList.txt` data file.
pub fn names_list_candidates() -> &'static [&'static str] {
    &[
        "/usr/share/unicode/NamesList.txt",
        "/usr/share/unicode-data/NamesList.txt",
        "/usr/share/unicode/ucd/NamesList.txt",
    ]
}
