//! Unicode character names and annotations.
//!
//! The primary source is a Unicode `NamesList.txt` file, which carries both
//! names and the informative annotation lines (aliases, cross references,
//! notes). When no such file is available, names come from the table
//! compiled into `unicode_names2` and annotations are absent.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::Path;

use fc_char_config::Config;

/// Name and annotation for a code point; either may be absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CharacterAnnotation {
    pub name: Option<String>,
    pub annotation: Option<String>,
}

#[derive(Debug, Clone, Default)]
struct NamesEntry {
    name: String,
    annotation_lines: Vec<String>,
}

/// Parsed contents of a `NamesList.txt` file.
#[derive(Debug, Clone, Default)]
pub struct NamesList {
    entries: HashMap<u32, NamesEntry>,
}

impl NamesList {
    /// Read and parse a `NamesList.txt` file.
    ///
    /// The file is nominally UTF-8; invalid sequences are replaced rather
    /// than rejected.
    pub fn load(path: &Path) -> io::Result<Self> {
        let bytes = fs::read(path)?;
        let list = Self::parse(&String::from_utf8_lossy(&bytes));
        if list.is_empty() {
            log::warn!("No name entries in {:?}", path);
        } else {
            log::info!("Loaded {} names from {:?}", list.len(), path);
        }
        Ok(list)
    }

    pub fn parse(contents: &str) -> Self {
        let mut entries = HashMap::new();
        let mut current: Option<(u32, NamesEntry)> = None;

        for line in contents.lines() {
            if line.starts_with(';') {
                continue;
            }

            if let Some(rest) = line.strip_prefix('\t') {
                // Annotation lines only attach to the entry directly above
                if let Some((_, entry)) = current.as_mut()
                    && rest.starts_with(['=', '*', 'x', ':', '#', '%', '~'])
                {
                    entry.annotation_lines.push(line.to_string());
                }
                continue;
            }

            if let Some((codepoint, entry)) = current.take() {
                entries.insert(codepoint, entry);
            }

            if let Some((hex, name)) = line.split_once('\t')
                && let Ok(codepoint) = u32::from_str_radix(hex, 16)
            {
                // "<control>" style names are placeholders, not names
                if name.starts_with('<') {
                    continue;
                }
                current = Some((
                    codepoint,
                    NamesEntry {
                        name: name.trim_end().to_string(),
                        annotation_lines: Vec::new(),
                    },
                ));
            }
        }

        if let Some((codepoint, entry)) = current {
            entries.insert(codepoint, entry);
        }

        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn name(&self, codepoint: u32) -> Option<&str> {
        self.entries.get(&codepoint).map(|e| e.name.as_str())
    }

    /// Annotation lines joined with newlines, each with its leading tab.
    pub fn annotation(&self, codepoint: u32) -> Option<String> {
        let entry = self.entries.get(&codepoint)?;
        if entry.annotation_lines.is_empty() {
            None
        } else {
            Some(entry.annotation_lines.join("\n"))
        }
    }
}

/// Code point to name/annotation lookup.
#[derive(Debug, Clone, Default)]
pub struct NameLookup {
    names_list: Option<NamesList>,
}

impl NameLookup {
    /// Lookup backed only by the compiled-in name table.
    pub fn builtin() -> Self {
        Self { names_list: None }
    }

    pub fn with_names_list(names_list: NamesList) -> Self {
        Self {
            names_list: Some(names_list),
        }
    }

    /// Build the lookup from the configured or first standard `NamesList.txt`.
    ///
    /// A file that cannot be read degrades to the built-in table.
    pub fn from_config(config: &Config) -> Self {
        let Some(path) = config.resolve_names_list() else {
            log::debug!("No NamesList.txt found, annotations unavailable");
            return Self::builtin();
        };

        match NamesList::load(&path) {
            Ok(list) => Self::with_names_list(list),
            Err(e) => {
                log::warn!("Failed to read names list {:?}: {}", path, e);
                Self::builtin()
            }
        }
    }

    pub fn has_annotations(&self) -> bool {
        self.names_list.is_some()
    }

    pub fn lookup(&self, codepoint: u32) -> CharacterAnnotation {
        if let Some(list) = &self.names_list
            && let Some(name) = list.name(codepoint)
        {
            return CharacterAnnotation {
                name: Some(name.to_string()),
                annotation: list.annotation(codepoint),
            };
        }

        let name = char::from_u32(codepoint)
            .and_then(unicode_names2::name)
            .map(|n| n.to_string());
        CharacterAnnotation {
            name,
            annotation: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
; comment line
@@\t2600\tMiscellaneous Symbols\t26FF
@\t\tEmoticons
263A\tWHITE SMILING FACE
\t= have a nice day!
\tx (black smiling face - 263B)
263B\tBLACK SMILING FACE
0007\t<control>
\t= BELL
";

    #[test]
    fn test_parse_names_and_annotations() {
        let list = NamesList::parse(SAMPLE);
        assert_eq!(list.len(), 2);
        assert_eq!(list.name(0x263A), Some("WHITE SMILING FACE"));
        assert_eq!(
            list.annotation(0x263A).as_deref(),
            Some("\t= have a nice day!\n\tx (black smiling face - 263B)")
        );
        assert_eq!(list.annotation(0x263B), None);
    }

    #[test]
    fn test_control_placeholder_is_not_a_name() {
        let list = NamesList::parse(SAMPLE);
        assert_eq!(list.name(0x0007), None);
    }

    #[test]
    fn test_builtin_lookup() {
        let lookup = NameLookup::builtin();
        let result = lookup.lookup(0x41);
        assert_eq!(result.name.as_deref(), Some("LATIN CAPITAL LETTER A"));
        assert_eq!(result.annotation, None);
    }

    #[test]
    fn test_lookup_outside_coverage_is_empty() {
        let lookup = NameLookup::builtin();
        assert_eq!(lookup.lookup(0xD800), CharacterAnnotation::default());
        assert_eq!(lookup.lookup(0x11_0000), CharacterAnnotation::default());
    }

    #[test]
    fn test_names_list_falls_back_to_builtin() {
        let lookup = NameLookup::with_names_list(NamesList::parse(SAMPLE));
        assert_eq!(
            lookup.lookup(0x41).name.as_deref(),
            Some("LATIN CAPITAL LETTER A")
        );
    }
}
