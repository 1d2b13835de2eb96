//! Grid layout for the preview window.
//!
//! The grid area is tiled into roughly square cells, one per font. Each cell
//! has a name band at the top for the family label and a glyph band below it
//! for the character rendered in that font. Both bands are inset by the
//! configured padding.

use thiserror::Error;

use crate::geometry::{Rect, Size};

/// Padding and band proportions for [`GridLayout::compute`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridParams {
    pub h_padding: i32,
    pub v_padding: i32,
    /// Share of the cell height taken by the name band
    pub name_band_fraction: f32,
}

impl Default for GridParams {
    fn default() -> Self {
        Self {
            h_padding: 5,
            v_padding: 5,
            name_band_fraction: 0.2,
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// No font to lay out
    #[error("No fonts to lay out")]
    Empty,

    /// The grid area has no pixels
    #[error("Grid area {width}x{height} is empty")]
    EmptyViewport { width: i32, height: i32 },

    /// A band has no usable area once padding is applied
    #[error(
        "Grid area {width}x{height} is too small for {count} fonts \
         (usable label {label_width}x{label_height}, glyph {label_width}x{glyph_height})"
    )]
    ViewportTooSmall {
        width: i32,
        height: i32,
        count: usize,
        label_width: i32,
        label_height: i32,
        glyph_height: i32,
    },
}

/// One font's cell: outer border and the two inset bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridCell {
    /// Position in row-major order (also the index into the font list)
    pub index: usize,
    pub bounds: Rect,
    /// Usable area of the name band
    pub name_box: Rect,
    /// Usable area of the glyph band
    pub glyph_box: Rect,
}

/// A computed grid, deterministic for the same inputs.
#[derive(Debug, Clone, PartialEq)]
pub struct GridLayout {
    pub columns: i32,
    pub rows: i32,
    pub cell_width: i32,
    pub cell_height: i32,
    /// Full (un-inset) height of the name band
    pub name_band_height: i32,
    pub cells: Vec<GridCell>,
    /// Fonts that did not fit the `columns * rows` tiling
    pub omitted: usize,
}

impl GridLayout {
    /// Tile `count` cells over a `viewport`-sized area whose top edge sits
    /// `y_offset` pixels below the window top.
    pub fn compute(
        viewport: Size,
        y_offset: i32,
        count: usize,
        params: &GridParams,
    ) -> Result<Self, LayoutError> {
        if count == 0 {
            return Err(LayoutError::Empty);
        }
        if viewport.is_empty() {
            return Err(LayoutError::EmptyViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }

        let w = viewport.width as f64;
        let h = viewport.height as f64;
        let c = count as f64;

        let columns = ((c * w / h).sqrt().round() as i32).max(1);
        let rows = ((c / columns as f64).round() as i32).max(1);

        let cell_width = (w / columns as f64).floor() as i32;
        let cell_height = (h / rows as f64).floor() as i32;
        let name_band_height = (cell_height as f64 * params.name_band_fraction as f64) as i32;
        let glyph_band_height = cell_height - name_band_height;

        let label_height = name_band_height - 2 * params.v_padding;
        let glyph_height = glyph_band_height - 2 * params.v_padding;
        let label_width = cell_width - 2 * params.h_padding;

        log::debug!(
            "Grid {}x{} for {} fonts: cell {}x{}, name band {}",
            columns,
            rows,
            count,
            cell_width,
            cell_height,
            name_band_height
        );

        if label_height <= 0 || glyph_height <= 0 || label_width <= 0 {
            return Err(LayoutError::ViewportTooSmall {
                width: viewport.width,
                height: viewport.height,
                count,
                label_width,
                label_height,
                glyph_height,
            });
        }

        let capacity = (columns as usize).saturating_mul(rows as usize);
        let shown = count.min(capacity);
        let omitted = count - shown;
        if omitted > 0 {
            log::debug!(
                "{} fonts do not fit a {}x{} grid and are omitted",
                omitted,
                columns,
                rows
            );
        }

        let cells = (0..shown)
            .map(|index| {
                let col = index as i32 % columns;
                let row = index as i32 / columns;
                let x = col * cell_width;
                let y = row * cell_height + y_offset;
                GridCell {
                    index,
                    bounds: Rect::new(x, y, cell_width, cell_height),
                    name_box: Rect::new(
                        x + params.h_padding,
                        y + params.v_padding,
                        label_width,
                        label_height,
                    ),
                    glyph_box: Rect::new(
                        x + params.h_padding,
                        y + name_band_height + params.v_padding,
                        label_width,
                        glyph_height,
                    ),
                }
            })
            .collect();

        Ok(Self {
            columns,
            rows,
            cell_width,
            cell_height,
            name_band_height,
            cells,
            omitted,
        })
    }

    /// Usable label area, shared by every cell.
    pub fn label_size(&self) -> Size {
        self.cells
            .first()
            .map(|cell| cell.name_box.size())
            .unwrap_or_default()
    }
}

/// Number of fonts to show given an optional cap.
pub fn effective_count(total: usize, max_fonts: Option<usize>) -> usize {
    match max_fonts {
        Some(max) if max > 0 => total.min(max),
        _ => total,
    }
}
