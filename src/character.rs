//! Resolution of the user's character argument into a code point.
//!
//! Accepted forms:
//! - `0x263A` / `0X263A` / `U+263A`: hexadecimal code point
//! - `☺`: a single literal character in the process text encoding (UTF-8)

use std::ffi::OsStr;
use std::fmt;

use thiserror::Error;
use unicode_segmentation::UnicodeSegmentation;

/// Prefixes that mark a hexadecimal code point.
const HEX_PREFIXES: &[&[u8]] = &[b"0x", b"0X", b"U+"];

/// How the character was supplied on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputForm {
    Hex,
    Literal,
}

/// A code point together with its canonical `U+` display form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedCharacter {
    codepoint: u32,
    display_form: String,
    form: InputForm,
}

impl ResolvedCharacter {
    fn new(codepoint: u32, form: InputForm) -> Self {
        Self {
            codepoint,
            display_form: display_form(codepoint),
            form,
        }
    }

    pub fn codepoint(&self) -> u32 {
        self.codepoint
    }

    /// `U+XXXX` for the BMP, `U+XXXXXXXX` above it.
    pub fn display_form(&self) -> &str {
        &self.display_form
    }

    pub fn form(&self) -> InputForm {
        self.form
    }

    /// A literal token that converted to code point 0. Hex input that parses
    /// to 0 is reported by a warning instead.
    pub fn is_null_literal(&self) -> bool {
        self.form == InputForm::Literal && self.codepoint == 0
    }

    /// The code point as a `char`, if it is a Unicode scalar value.
    pub fn as_char(&self) -> Option<char> {
        char::from_u32(self.codepoint)
    }
}

impl fmt::Display for ResolvedCharacter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_form)
    }
}

/// Errors converting a literal character argument.
#[derive(Debug, Error)]
pub enum CharacterError {
    /// The argument is not valid in the process text encoding.
    #[error("Failed to convert character encoding: '{0}' is not valid UTF-8")]
    Encoding(String),

    /// The argument holds more than one code point.
    #[error(
        "Expected a single character but '{token}' has {count} code points{}",
        grapheme_hint(.single_grapheme)
    )]
    MultipleCodepoints {
        token: String,
        count: usize,
        single_grapheme: bool,
    },
}

fn grapheme_hint(single_grapheme: &bool) -> &'static str {
    if *single_grapheme {
        " (one grapheme cluster; pass a single code point in U+ form)"
    } else {
        ""
    }
}

/// Canonical display form of a code point.
pub fn display_form(codepoint: u32) -> String {
    if codepoint <= 0xFFFF {
        format!("U+{:04X}", codepoint)
    } else {
        format!("U+{:08X}", codepoint)
    }
}

/// Resolve a command-line token into a code point.
///
/// Hex tokens never fail: an unparsable remainder resolves to code point 0
/// (logged as a warning). Literal tokens must be exactly one code point;
/// an empty literal resolves to 0.
pub fn resolve(token: &OsStr) -> Result<ResolvedCharacter, CharacterError> {
    let bytes = token.as_encoded_bytes();

    if let Some(prefix) = HEX_PREFIXES.iter().find(|p| bytes.starts_with(p)) {
        let digits = &bytes[prefix.len()..];
        return Ok(ResolvedCharacter::new(parse_hex(digits), InputForm::Hex));
    }

    let Some(text) = token.to_str() else {
        return Err(CharacterError::Encoding(
            token.to_string_lossy().into_owned(),
        ));
    };

    let mut chars = text.chars();
    let codepoint = match (chars.next(), chars.next()) {
        (None, _) => 0,
        (Some(c), None) => c as u32,
        (Some(_), Some(_)) => {
            return Err(CharacterError::MultipleCodepoints {
                token: text.to_string(),
                count: text.chars().count(),
                single_grapheme: text.graphemes(true).count() == 1,
            });
        }
    };

    log::debug!("Literal '{}' resolved to {}", text, display_form(codepoint));
    Ok(ResolvedCharacter::new(codepoint, InputForm::Literal))
}

/// Convenience wrapper over [`resolve`] for string tokens.
pub fn resolve_str(token: &str) -> Result<ResolvedCharacter, CharacterError> {
    resolve(OsStr::new(token))
}

/// Parse the leading run of hex digits, `strtol`-style.
///
/// Trailing garbage is ignored; an empty run or a value that overflows
/// 32 bits yields 0.
fn parse_hex(digits: &[u8]) -> u32 {
    let run = digits
        .iter()
        .take_while(|b| b.is_ascii_hexdigit())
        .count();
    let hex = String::from_utf8_lossy(&digits[..run]);

    if run < digits.len() {
        log::warn!(
            "Ignoring trailing characters after hex code point '{}'",
            String::from_utf8_lossy(digits)
        );
    }
    if run == 0 {
        log::warn!(
            "No hex digits in '{}', using code point 0",
            String::from_utf8_lossy(digits)
        );
        return 0;
    }

    u32::from_str_radix(&hex, 16).unwrap_or_else(|_| {
        log::warn!("Hex code point '{}' overflows 32 bits, using 0", hex);
        0
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_prefixes() {
        for token in ["0x41", "0X41", "U+41", "U+0041"] {
            let resolved = resolve_str(token).unwrap();
            assert_eq!(resolved.codepoint(), 0x41, "token {token}");
            assert_eq!(resolved.display_form(), "U+0041");
            assert_eq!(resolved.form(), InputForm::Hex);
        }
    }

    #[test]
    fn test_lowercase_hex_digits() {
        assert_eq!(resolve_str("0x1f600").unwrap().codepoint(), 0x1F600);
        assert_eq!(resolve_str("0x1f600").unwrap().display_form(), "U+0001F600");
    }

    #[test]
    fn test_malformed_hex_is_zero() {
        assert_eq!(resolve_str("0xzz").unwrap().codepoint(), 0);
        assert_eq!(resolve_str("U+").unwrap().codepoint(), 0);
        assert_eq!(resolve_str("0xFFFFFFFFF").unwrap().codepoint(), 0);
    }

    #[test]
    fn test_trailing_garbage_is_ignored() {
        assert_eq!(resolve_str("0x41zz").unwrap().codepoint(), 0x41);
    }

    #[test]
    fn test_literal_character() {
        let resolved = resolve_str("☺").unwrap();
        assert_eq!(resolved.codepoint(), 0x263A);
        assert_eq!(resolved.display_form(), "U+263A");
        assert_eq!(resolved.form(), InputForm::Literal);
        assert_eq!(resolved.as_char(), Some('☺'));
    }

    #[test]
    fn test_only_empty_literal_is_null() {
        assert!(resolve_str("").unwrap().is_null_literal());
        assert!(!resolve_str("0x0").unwrap().is_null_literal());
        assert!(!resolve_str("0xzz").unwrap().is_null_literal());
        assert!(!resolve_str("A").unwrap().is_null_literal());
    }

    #[test]
    fn test_lowercase_u_plus_is_a_literal() {
        // Only "U+" is a hex marker; "u+41" is three characters
        assert!(resolve_str("u+41").is_err());
    }
}
