//! Text output printed after the preview closes (or instead of it).

use std::io::{self, Write};

use thiserror::Error;

use crate::session::Session;

/// Which items to print, in output order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportOptions {
    pub name: bool,
    pub annotation: bool,
    pub fonts: bool,
}

impl ReportOptions {
    pub fn is_empty(&self) -> bool {
        !(self.name || self.annotation || self.fonts)
    }
}

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Failed to write output: {0}")]
    Write(#[from] io::Error),
}

/// Write the selected items, one per line.
pub fn write_report<W: Write>(
    out: &mut W,
    session: &Session,
    options: ReportOptions,
) -> Result<(), ReportError> {
    let annotation = session.annotation();

    if options.name {
        match &annotation.name {
            Some(name) => writeln!(out, "Name: {}", name)?,
            None => writeln!(out, "Name lookup failed.")?,
        }
    }

    if options.annotation {
        match &annotation.annotation {
            Some(text) => writeln!(out, "{}", text)?,
            None => writeln!(out, "Annotation lookup failed.")?,
        }
    }

    if options.fonts {
        for font in session.shown_fonts() {
            writeln!(out, "{}", font.family)?;
        }
    }

    out.flush()?;
    Ok(())
}
