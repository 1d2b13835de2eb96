//! CPU canvas over an RGBA frame, rasterizing text with swash.

use fc_char_fonts::{FontCatalog, FontData, FontError, FontMatch};
use swash::scale::image::{Content, Image};
use swash::scale::{Render, ScaleContext, Source, StrikeWith};
use swash::zeno::Format;

use super::{Canvas, Color, FaceMetrics, FontSize};
use crate::geometry::{Rect, Size};

/// A face loaded at a fixed pixel size.
#[derive(Debug, Clone)]
pub struct RasterFace {
    font: FontData,
    px: f32,
}

impl RasterFace {
    fn new(font: FontData, px: f32) -> Self {
        Self { font, px }
    }

    fn scale(&self) -> f32 {
        let units_per_em = self.font.font_ref.metrics(&[]).units_per_em.max(1);
        self.px / units_per_em as f32
    }

    fn glyph_id(&self, c: char) -> u16 {
        self.font.font_ref.charmap().map(c)
    }
}

/// Paints into a `width * height * 4` RGBA byte buffer, such as a `pixels`
/// frame.
pub struct FrameCanvas<'a> {
    frame: &'a mut [u8],
    size: Size,
    catalog: &'a FontCatalog,
    scale_context: &'a mut ScaleContext,
    scale_factor: f32,
}

impl<'a> FrameCanvas<'a> {
    /// Wrap `frame`, which must hold exactly `size.width * size.height` RGBA
    /// pixels. Drawing outside the frame is clipped.
    pub fn new(
        frame: &'a mut [u8],
        size: Size,
        catalog: &'a FontCatalog,
        scale_context: &'a mut ScaleContext,
        scale_factor: f32,
    ) -> Self {
        debug_assert_eq!(
            frame.len(),
            (size.width.max(0) * size.height.max(0) * 4) as usize
        );
        Self {
            frame,
            size,
            catalog,
            scale_context,
            scale_factor,
        }
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        let Some(rect) = rect.clipped_to(&Rect::new(0, 0, self.size.width, self.size.height))
        else {
            return;
        };
        let stride = self.size.width as usize * 4;
        let pixel = [color.r, color.g, color.b, color.a];
        for y in rect.y..rect.bottom() {
            let row = y as usize * stride;
            for x in rect.x..rect.right() {
                let offset = row + x as usize * 4;
                self.frame[offset..offset + 4].copy_from_slice(&pixel);
            }
        }
    }

    /// Source-over blend of one straight-alpha pixel.
    fn blend(&mut self, x: i32, y: i32, rgba: [u8; 4]) {
        if x < 0 || y < 0 || x >= self.size.width || y >= self.size.height || rgba[3] == 0 {
            return;
        }
        let offset = (y as usize * self.size.width as usize + x as usize) * 4;
        let dst = &mut self.frame[offset..offset + 4];
        let alpha = rgba[3] as u32;
        for i in 0..3 {
            dst[i] = ((rgba[i] as u32 * alpha + dst[i] as u32 * (255 - alpha)) / 255) as u8;
        }
        dst[3] = 0xFF;
    }

    fn blit(&mut self, image: &Image, origin_x: i32, baseline: i32, color: Color) {
        let width = image.placement.width as i32;
        let height = image.placement.height as i32;
        let left = origin_x + image.placement.left;
        let top = baseline - image.placement.top;

        for row in 0..height {
            for col in 0..width {
                let i = (row * width + col) as usize;
                let rgba = match image.content {
                    Content::Mask => {
                        let coverage = image.data[i] as u32 * color.a as u32 / 255;
                        [color.r, color.g, color.b, coverage as u8]
                    }
                    Content::Color => {
                        let p = &image.data[i * 4..i * 4 + 4];
                        [p[0], p[1], p[2], p[3]]
                    }
                    // Alpha format never yields subpixel masks
                    Content::SubpixelMask => continue,
                };
                self.blend(left + col, top + row, rgba);
            }
        }
    }

    fn open(&self, font: FontData, size: FontSize) -> RasterFace {
        RasterFace::new(font, size.to_pixels(self.scale_factor))
    }
}

impl Canvas for FrameCanvas<'_> {
    type Face = RasterFace;

    fn size(&self) -> Size {
        self.size
    }

    fn clear(&mut self, color: Color) {
        let pixel = [color.r, color.g, color.b, color.a];
        for chunk in self.frame.chunks_exact_mut(4) {
            chunk.copy_from_slice(&pixel);
        }
    }

    fn stroke_rect(&mut self, rect: Rect, thickness: i32, color: Color) {
        let t = thickness.min(rect.width).min(rect.height).max(1);
        self.fill_rect(Rect::new(rect.x, rect.y, rect.width, t), color);
        self.fill_rect(Rect::new(rect.x, rect.bottom() - t, rect.width, t), color);
        self.fill_rect(Rect::new(rect.x, rect.y, t, rect.height), color);
        self.fill_rect(Rect::new(rect.right() - t, rect.y, t, rect.height), color);
    }

    fn open_family(&mut self, family: &str, size: FontSize) -> Option<RasterFace> {
        let font = self.catalog.load_family(family)?;
        Some(self.open(font, size))
    }

    fn open_font(&mut self, font: &FontMatch, size: FontSize) -> Result<RasterFace, FontError> {
        let data = self.catalog.load_match(font)?;
        Ok(self.open(data, size))
    }

    fn metrics(&self, face: &RasterFace) -> FaceMetrics {
        let metrics = face.font.font_ref.metrics(&[]);
        let scale = face.scale();
        let ascent = metrics.ascent * scale;
        let descent = metrics.descent.abs() * scale;
        let leading = metrics.leading * scale;
        FaceMetrics {
            ascent: ascent.round() as i32,
            descent: descent.round() as i32,
            height: (ascent + descent + leading).round() as i32,
        }
    }

    fn text_width(&mut self, face: &RasterFace, text: &str) -> i32 {
        let glyph_metrics = face.font.font_ref.glyph_metrics(&[]);
        let scale = face.scale();
        let width: f32 = text
            .chars()
            .map(|c| glyph_metrics.advance_width(face.glyph_id(c)) * scale)
            .sum();
        width.round() as i32
    }

    fn draw_text(&mut self, face: &RasterFace, x: i32, baseline: i32, text: &str, color: Color) {
        let glyph_metrics = face.font.font_ref.glyph_metrics(&[]);
        let scale = face.scale();
        let mut pen_x = x as f32;

        for c in text.chars() {
            let glyph_id = face.glyph_id(c);
            let image = {
                let mut scaler = self
                    .scale_context
                    .builder(face.font.font_ref)
                    .size(face.px)
                    .hint(true)
                    .build();
                // Color sources first so emoji faces render in color; bitmap
                // strikes cover fixed-size faces
                Render::new(&[
                    Source::ColorBitmap(StrikeWith::BestFit),
                    Source::ColorOutline(0),
                    Source::Outline,
                    Source::Bitmap(StrikeWith::BestFit),
                ])
                .format(Format::Alpha)
                .render(&mut scaler, glyph_id)
            };

            match image {
                Some(image) => self.blit(&image, pen_x.round() as i32, baseline, color),
                None => log::debug!("No image for '{}' (glyph {})", c, glyph_id),
            }
            pen_x += glyph_metrics.advance_width(glyph_id) * scale;
        }
    }
}
