//! Drawing surface abstraction used by the preview painter.
//!
//! `Canvas` is the seam between the grid painter and the pixels on screen.
//! The window uses [`FrameCanvas`], which rasterizes with swash into an RGBA
//! frame; tests use a recording implementation.

mod frame;

pub use frame::{FrameCanvas, RasterFace};

use fc_char_fonts::{FontError, FontMatch};

use crate::geometry::{Rect, Size};

/// Font points per inch over screen pixels per inch.
const POINTS_TO_PIXELS: f32 = 96.0 / 72.0;

/// An 8-bit RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(0xFF, 0xFF, 0xFF);
    pub const BLACK: Color = Color::rgb(0x00, 0x00, 0x00);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xFF }
    }
}

/// Requested face size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FontSize {
    /// Typographic points, converted at 96 DPI times the display scale
    Points(f32),
    /// Device pixels per em
    Pixels(f32),
}

impl FontSize {
    pub fn to_pixels(self, scale_factor: f32) -> f32 {
        match self {
            FontSize::Points(pt) => pt * POINTS_TO_PIXELS * scale_factor,
            FontSize::Pixels(px) => px,
        }
    }
}

/// Vertical metrics of an opened face in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceMetrics {
    pub ascent: i32,
    pub descent: i32,
    /// Baseline-to-baseline distance
    pub height: i32,
}

/// A 2D surface the preview is painted onto.
///
/// Faces returned by `open_family` / `open_font` are plain values owned by
/// the caller and released when dropped.
pub trait Canvas {
    type Face;

    fn size(&self) -> Size;

    /// Fill the whole surface with `color`.
    fn clear(&mut self, color: Color);

    /// Outline `rect` with a border `thickness` pixels wide, drawn inside it.
    fn stroke_rect(&mut self, rect: Rect, thickness: i32, color: Color);

    /// Open a face by family name, with fallbacks; `None` if nothing loads.
    fn open_family(&mut self, family: &str, size: FontSize) -> Option<Self::Face>;

    /// Open the face behind a font match.
    fn open_font(&mut self, font: &FontMatch, size: FontSize) -> Result<Self::Face, FontError>;

    fn metrics(&self, face: &Self::Face) -> FaceMetrics;

    /// Advance width of `text` in pixels.
    fn text_width(&mut self, face: &Self::Face, text: &str) -> i32;

    /// Draw `text` with its left edge at `x` and its baseline at `baseline`.
    fn draw_text(&mut self, face: &Self::Face, x: i32, baseline: i32, text: &str, color: Color);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_points_to_pixels() {
        assert!((FontSize::Points(72.0).to_pixels(1.0) - 96.0).abs() < 1e-3);
        assert!((FontSize::Points(12.0).to_pixels(2.0) - 32.0).abs() < 1e-3);
        assert_eq!(FontSize::Pixels(40.0).to_pixels(2.0), 40.0);
    }
}
