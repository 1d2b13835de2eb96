//! Shared integration test helpers for fc-char.
//!
//! This module provides test doubles for the font matcher and the drawing
//! surface so sessions, painting and reports can be exercised without
//! installed fonts or a display.
//!
//! # Usage
//!
//! ```ignore
//! mod common;
//! use common::{RecordingCanvas, FixtureMatcher};
//! ```
//!
//! The `#[allow(dead_code)]` attribute suppresses warnings when only a
//! subset of helpers are used per file.

#![allow(dead_code)]

use std::path::PathBuf;

use fc_char::canvas::{Canvas, Color, FaceMetrics, FontSize};
use fc_char::character::resolve_str;
use fc_char::fonts::{FontError, FontMatch, FontMatcher};
use fc_char::geometry::{Rect, Size};
use fc_char::names::NameLookup;
use fc_char::session::Session;

/// Builds a scalable match with a fake file path.
pub fn font(family: &str) -> FontMatch {
    FontMatch::new(
        family,
        "Regular",
        Some(PathBuf::from(format!(
            "/fixtures/{}.ttf",
            family.replace(' ', "")
        ))),
        0,
    )
}

/// Matcher returning a fixed list, with extra faces only when fixed-size
/// fonts are included.
#[derive(Debug, Default, Clone)]
pub struct FixtureMatcher {
    pub scalable: Vec<FontMatch>,
    pub fixed: Vec<FontMatch>,
}

impl FixtureMatcher {
    pub fn with_families(families: &[&str]) -> Self {
        Self {
            scalable: families.iter().map(|f| font(f)).collect(),
            fixed: Vec::new(),
        }
    }
}

impl FontMatcher for FixtureMatcher {
    fn find(&self, _codepoint: u32, include_fixed: bool) -> Vec<FontMatch> {
        let mut fonts = self.scalable.clone();
        if include_fixed {
            fonts.extend(self.fixed.iter().cloned());
        }
        fonts
    }
}

/// Session for `token` over the given families.
pub fn session(token: &str, families: &[&str], max_fonts: Option<usize>) -> Session {
    let character = resolve_str(token).expect("fixture token should resolve");
    Session::new(
        character,
        &NameLookup::builtin(),
        &FixtureMatcher::with_families(families),
        false,
        max_fonts,
    )
}

/// A face opened on a [`RecordingCanvas`].
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedFace {
    pub family: String,
    pub px: f32,
}

/// One recorded drawing call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Clear(Color),
    StrokeRect(Rect, i32),
    Text {
        family: String,
        px: f32,
        x: i32,
        baseline: i32,
        text: String,
    },
}

/// Canvas that records calls instead of drawing.
///
/// Faces measure every character as half the pixel size wide; ascent is
/// 80% and descent 20% of the pixel size.
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    pub size: Size,
    pub ops: Vec<DrawOp>,
    /// Families `open_family` refuses to open
    pub missing_families: Vec<String>,
    /// Families `open_font` fails for
    pub broken_fonts: Vec<String>,
}

impl RecordingCanvas {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            size: Size::new(width, height),
            ..Self::default()
        }
    }

    pub fn strokes(&self) -> Vec<Rect> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::StrokeRect(rect, _) => Some(*rect),
                _ => None,
            })
            .collect()
    }

    pub fn texts(&self) -> Vec<(String, i32, i32)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text {
                    x, baseline, text, ..
                } => Some((text.clone(), *x, *baseline)),
                _ => None,
            })
            .collect()
    }
}

impl Canvas for RecordingCanvas {
    type Face = RecordedFace;

    fn size(&self) -> Size {
        self.size
    }

    fn clear(&mut self, color: Color) {
        self.ops.push(DrawOp::Clear(color));
    }

    fn stroke_rect(&mut self, rect: Rect, thickness: i32, _color: Color) {
        self.ops.push(DrawOp::StrokeRect(rect, thickness));
    }

    fn open_family(&mut self, family: &str, size: FontSize) -> Option<RecordedFace> {
        if self.missing_families.iter().any(|f| f == family) {
            return None;
        }
        Some(RecordedFace {
            family: family.to_string(),
            px: size.to_pixels(1.0),
        })
    }

    fn open_font(&mut self, font: &FontMatch, size: FontSize) -> Result<RecordedFace, FontError> {
        if self.broken_fonts.contains(&font.family) {
            return Err(FontError::Unavailable {
                family: font.family.clone(),
            });
        }
        Ok(RecordedFace {
            family: font.family.clone(),
            px: size.to_pixels(1.0),
        })
    }

    fn metrics(&self, face: &RecordedFace) -> FaceMetrics {
        FaceMetrics {
            ascent: (face.px * 0.8).round() as i32,
            descent: (face.px * 0.2).round() as i32,
            height: face.px.round() as i32,
        }
    }

    fn text_width(&mut self, face: &RecordedFace, text: &str) -> i32 {
        (text.chars().count() as f32 * face.px * 0.5).round() as i32
    }

    fn draw_text(&mut self, face: &RecordedFace, x: i32, baseline: i32, text: &str, _color: Color) {
        self.ops.push(DrawOp::Text {
            family: face.family.clone(),
            px: face.px,
            x,
            baseline,
            text: text.to_string(),
        });
    }
}
