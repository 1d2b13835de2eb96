//! Painting the preview window: quit button, title line and font grid.

use fc_char_config::{Config, MAX_INSET};
use thiserror::Error;

use crate::canvas::{Canvas, Color, FontSize};
use crate::geometry::{Rect, Size};
use crate::layout::{GridLayout, GridParams, LayoutError};
use crate::session::Session;
use crate::view_state::QuitButton;

const QUIT_LABEL: &str = "Quit";

/// Fonts, padding and border settings used for painting.
#[derive(Debug, Clone, PartialEq)]
pub struct PaintStyle {
    pub title_family: String,
    pub title_size: f32,
    pub label_base_size: f32,
    pub border_width: i32,
    pub grid: GridParams,
}

impl PaintStyle {
    pub fn from_config(config: &Config) -> Self {
        Self {
            title_family: config.title_font_family.clone(),
            title_size: config.title_font_size,
            label_base_size: config.label_base_size,
            border_width: inset(config.border_width),
            grid: GridParams {
                h_padding: inset(config.h_padding),
                v_padding: inset(config.v_padding),
                name_band_fraction: config.name_band_fraction,
            },
        }
    }
}

/// Pixel inset, clamped for configs that skipped validation.
fn inset(value: u32) -> i32 {
    value.min(MAX_INSET) as i32
}

impl Default for PaintStyle {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PaintError {
    /// Neither the configured family nor any fallback could be opened
    #[error("Failed to open title font '{family}'")]
    TitleFont { family: String },

    #[error(transparent)]
    Layout(#[from] LayoutError),
}

/// Outcome of drawing the font grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GridReport {
    pub cells_drawn: usize,
    /// Cells whose own font failed to open; border and label are still drawn
    pub glyphs_skipped: usize,
    /// Fonts beyond the grid's capacity
    pub omitted: usize,
}

/// Result of a window paint. The chrome is always drawn once the title font
/// opens; the grid may still fail for a too-small window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaintedFrame {
    pub quit_button: QuitButton,
    pub grid: Result<GridReport, PaintError>,
}

impl PaintedFrame {
    /// Whether the whole window was painted.
    pub fn is_complete(&self) -> bool {
        self.grid.is_ok()
    }
}

/// Paint the full window contents.
pub fn paint_window<C: Canvas>(
    canvas: &mut C,
    session: &Session,
    style: &PaintStyle,
) -> Result<PaintedFrame, PaintError> {
    let hp = style.grid.h_padding;
    let vp = style.grid.v_padding;

    canvas.clear(Color::WHITE);

    let font = canvas
        .open_family(&style.title_family, FontSize::Points(style.title_size))
        .ok_or_else(|| PaintError::TitleFont {
            family: style.title_family.clone(),
        })?;
    let metrics = canvas.metrics(&font);

    let button_width = 2 * hp + canvas.text_width(&font, QUIT_LABEL);
    let button_height = 2 * vp + metrics.height;
    let quit_button = QuitButton::new(Rect::new(hp, vp, button_width, button_height));
    let baseline = 2 * vp + metrics.height - metrics.descent;

    canvas.stroke_rect(quit_button.rect(), style.border_width, Color::BLACK);
    canvas.draw_text(&font, 2 * hp, baseline, QUIT_LABEL, Color::BLACK);
    canvas.draw_text(
        &font,
        2 * hp + button_width,
        baseline,
        &session.title(),
        Color::BLACK,
    );
    drop(font);

    let offset = button_height + 2 * vp;
    let size = canvas.size();
    let grid = paint_grid(
        canvas,
        session,
        style,
        Size::new(size.width, size.height - offset),
        offset,
    );

    match &grid {
        Ok(report) => log::debug!(
            "Painted {} cells ({} glyphs skipped, {} omitted)",
            report.cells_drawn,
            report.glyphs_skipped,
            report.omitted
        ),
        Err(e) => log::debug!("Grid not painted: {}", e),
    }

    Ok(PaintedFrame { quit_button, grid })
}

/// Paint one cell per shown font into the area below the chrome.
pub fn paint_grid<C: Canvas>(
    canvas: &mut C,
    session: &Session,
    style: &PaintStyle,
    viewport: Size,
    y_offset: i32,
) -> Result<GridReport, PaintError> {
    let fonts = session.shown_fonts();
    if fonts.is_empty() {
        return Ok(GridReport::default());
    }

    let layout = GridLayout::compute(viewport, y_offset, fonts.len(), &style.grid)?;
    let label_size = layout.label_size();

    let label_font = open_label_font(canvas, session, style, label_size)?;
    let glyph_text = session
        .character()
        .as_char()
        .map(String::from)
        .unwrap_or_default();

    let mut report = GridReport {
        omitted: layout.omitted,
        ..GridReport::default()
    };

    for cell in &layout.cells {
        let font = &fonts[cell.index];
        canvas.stroke_rect(cell.bounds, style.border_width, Color::BLACK);

        let label_width = canvas.text_width(&label_font, &font.family);
        let x = cell.name_box.x + ((cell.name_box.width - label_width) / 2).max(0);
        canvas.draw_text(
            &label_font,
            x,
            cell.name_box.bottom(),
            &font.family,
            Color::BLACK,
        );

        match canvas.open_font(font, FontSize::Pixels(cell.glyph_box.height as f32)) {
            Ok(face) => {
                let metrics = canvas.metrics(&face);
                let glyph_width = canvas.text_width(&face, &glyph_text);
                let x = cell.glyph_box.x + ((cell.glyph_box.width - glyph_width) / 2).max(0);
                let baseline = cell.glyph_box.bottom() - metrics.descent;
                canvas.draw_text(&face, x, baseline, &glyph_text, Color::BLACK);
            }
            Err(e) => {
                log::warn!("Skipping glyph for '{}': {}", font.family, e);
                report.glyphs_skipped += 1;
            }
        }
        report.cells_drawn += 1;
    }

    Ok(report)
}

/// Open the label font at the largest size where every shown family name
/// fits the label area.
fn open_label_font<C: Canvas>(
    canvas: &mut C,
    session: &Session,
    style: &PaintStyle,
    label_size: Size,
) -> Result<C::Face, PaintError> {
    let missing = || PaintError::TitleFont {
        family: style.title_family.clone(),
    };

    let base = canvas
        .open_family(&style.title_family, FontSize::Points(style.label_base_size))
        .ok_or_else(missing)?;
    let height = canvas.metrics(&base).height.max(1) as f32;

    let mut scale: Option<f32> = None;
    for font in session.shown_fonts() {
        let width = canvas.text_width(&base, &font.family).max(1) as f32;
        let fit = (label_size.width as f32 / width).min(label_size.height as f32 / height);
        scale = Some(scale.map_or(fit, |s| s.min(fit)));
    }
    drop(base);

    let size = style.label_base_size * scale.unwrap_or(1.0);
    log::debug!("Label font size {:.2}pt", size);
    canvas
        .open_family(&style.title_family, FontSize::Points(size))
        .ok_or_else(missing)
}
