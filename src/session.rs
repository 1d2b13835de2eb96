//! Per-run state: the resolved character, its annotation and matched fonts.

use fc_char_fonts::{FontMatch, FontMatcher};

use crate::character::ResolvedCharacter;
use crate::layout::effective_count;
use crate::names::{CharacterAnnotation, NameLookup};

/// Everything looked up once at startup and read by both the preview window
/// and the text report. The font list is never re-queried.
#[derive(Debug, Clone)]
pub struct Session {
    character: ResolvedCharacter,
    annotation: CharacterAnnotation,
    fonts: Vec<FontMatch>,
    max_fonts: Option<usize>,
}

impl Session {
    pub fn new(
        character: ResolvedCharacter,
        names: &NameLookup,
        matcher: &impl FontMatcher,
        include_fixed: bool,
        max_fonts: Option<usize>,
    ) -> Self {
        let annotation = names.lookup(character.codepoint());
        let fonts = matcher.find(character.codepoint(), include_fixed);
        log::info!(
            "{} ({}): {} matching fonts",
            character,
            annotation.name.as_deref().unwrap_or("unnamed"),
            fonts.len()
        );
        Self {
            character,
            annotation,
            fonts,
            max_fonts,
        }
    }

    pub fn character(&self) -> &ResolvedCharacter {
        &self.character
    }

    pub fn annotation(&self) -> &CharacterAnnotation {
        &self.annotation
    }

    /// Matched fonts truncated to the font cap.
    pub fn shown_fonts(&self) -> &[FontMatch] {
        &self.fonts[..effective_count(self.fonts.len(), self.max_fonts)]
    }

    /// Title line text: the display form, then the name if known.
    pub fn title(&self) -> String {
        match &self.annotation.name {
            Some(name) => format!("{} {}", self.character, name),
            None => self.character.to_string(),
        }
    }

    /// Window title.
    pub fn window_title(&self) -> String {
        format!("fc-char {}", self.title())
    }
}
