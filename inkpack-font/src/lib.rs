//! Single-stroke vector font tables for the inkpack text renderer.
//!
//! Fonts are compiled in and decoded lazily on first use; after that the
//! tables are process-wide, read-only state shared by every render call.
//! Lookups cover printable ASCII (`!`..=`~`) plus the space character, which
//! maps to a degenerate one-point stroke that reserves a cell without ink.

mod glyph;
mod path;
mod tables;

use std::sync::OnceLock;

use compact_str::{CompactString, ToCompactString};

pub use glyph::{Glyph, Stroke};

/// Error categories for font table access.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum FontError {
    /// The requested font key does not name a compiled-in table.
    #[error("Unknown font: {0}")]
    UnknownFont(CompactString),

    /// The character is outside the printable ASCII range the tables cover.
    #[error("No glyph for {0:?}: outside printable ASCII 33-126")]
    UnsupportedChar(char),

    /// A table entry failed to decode. Only reachable with corrupt table data.
    #[error("Malformed stroke path token: {0}")]
    Malformed(CompactString),
}

/// The glyph substituted for characters that fail lookup.
pub const FALLBACK_CHAR: char = '?';

/// First codepoint covered by the tables (`!`).
const TABLE_FIRST: u32 = 33;
/// Last codepoint covered by the tables (`~`).
const TABLE_LAST: u32 = 126;

/// Space reserves a cell without drawing: a single degenerate stroke.
const SPACE_PATH: &str = "M8,0";

/// A compiled-in stroke font: a name plus one encoded glyph per printable
/// ASCII character.
pub struct Font {
    key: &'static str,
    table: &'static [&'static str; 94],
    decoded: OnceLock<Result<Vec<Glyph>, FontError>>,
}

static SKELETAL: Font = Font {
    key: "skeletal",
    table: &tables::SKELETAL,
    decoded: OnceLock::new(),
};

static PLUME: Font = Font {
    key: "plume",
    table: &tables::PLUME,
    decoded: OnceLock::new(),
};

static FONTS: [&Font; 2] = [&SKELETAL, &PLUME];

impl Font {
    /// Resolves a font key to its compiled-in table.
    ///
    /// # Errors
    /// [`FontError::UnknownFont`] when no table carries the key.
    pub fn get(key: &str) -> Result<&'static Font, FontError> {
        FONTS
            .iter()
            .find(|f| f.key == key)
            .copied()
            .ok_or_else(|| FontError::UnknownFont(key.to_compact_string()))
    }

    /// The key this font registers under.
    pub fn key(&self) -> &'static str {
        self.key
    }

    /// Looks up the glyph for `ch`.
    ///
    /// Callers are expected to substitute [`FALLBACK_CHAR`] and continue on
    /// failure; one bad character must never abort a whole render.
    ///
    /// # Errors
    /// [`FontError::UnsupportedChar`] outside ASCII 33-126 (space excepted),
    /// [`FontError::Malformed`] when the table entry fails to decode.
    pub fn lookup(&self, ch: char) -> Result<Glyph, FontError> {
        if ch == ' ' {
            return path::decode(SPACE_PATH);
        }
        let code = ch as u32;
        if !(TABLE_FIRST..=TABLE_LAST).contains(&code) {
            return Err(FontError::UnsupportedChar(ch));
        }
        let glyphs = self.glyphs()?;
        Ok(glyphs[(code - TABLE_FIRST) as usize].clone())
    }

    /// Whether `ch` has its own glyph, so callers can announce fallback
    /// substitutions before rendering instead of swapping glyphs silently.
    pub fn supports(&self, ch: char) -> bool {
        ch == ' ' || (TABLE_FIRST..=TABLE_LAST).contains(&(ch as u32))
    }

    fn glyphs(&self) -> Result<&[Glyph], FontError> {
        let decoded = self
            .decoded
            .get_or_init(|| self.table.iter().map(|entry| path::decode(entry)).collect());
        match decoded {
            Ok(glyphs) => Ok(glyphs),
            Err(e) => Err(e.clone()),
        }
    }
}

impl std::fmt::Debug for Font {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Font")
            .field("key", &self.key)
            .field("glyphs", &self.table.len())
            .finish()
    }
}

/// Keys of every compiled-in font, in registration order.
pub fn font_keys() -> impl Iterator<Item = &'static str> {
    FONTS.iter().map(|f| f.key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registered_fonts_resolve_by_key() {
        for key in font_keys() {
            assert_eq!(Font::get(key).unwrap().key(), key);
        }
        assert!(matches!(
            Font::get("futural"),
            Err(FontError::UnknownFont(_))
        ));
    }

    #[test]
    fn every_table_entry_decodes() {
        for key in font_keys() {
            let font = Font::get(key).unwrap();
            for code in TABLE_FIRST..=TABLE_LAST {
                let ch = char::from_u32(code).unwrap();
                let glyph = font.lookup(ch).unwrap();
                assert!(!glyph.is_empty(), "{key}: empty glyph for {ch:?}");
            }
        }
    }

    #[test]
    fn space_is_a_degenerate_single_point_stroke() {
        let glyph = SKELETAL.lookup(' ').unwrap();
        assert_eq!(glyph.strokes, vec![vec![[8.0, 0.0]]]);
    }

    #[test]
    fn characters_outside_the_table_are_rejected() {
        assert_eq!(
            SKELETAL.lookup('\u{7f}'),
            Err(FontError::UnsupportedChar('\u{7f}'))
        );
        assert_eq!(
            SKELETAL.lookup('é'),
            Err(FontError::UnsupportedChar('é'))
        );
        assert_eq!(
            SKELETAL.lookup('\n'),
            Err(FontError::UnsupportedChar('\n'))
        );
    }

    #[test]
    fn supports_mirrors_lookup_success() {
        for ch in ['a', '~', '!', ' ', FALLBACK_CHAR] {
            assert!(SKELETAL.supports(ch), "{ch:?}");
            assert!(SKELETAL.lookup(ch).is_ok());
        }
        for ch in ['\u{7f}', 'é', '\n', '\t'] {
            assert!(!SKELETAL.supports(ch), "{ch:?}");
            assert!(SKELETAL.lookup(ch).is_err());
        }
    }

    #[test]
    fn fallback_char_always_has_a_glyph() {
        for key in font_keys() {
            assert!(Font::get(key).unwrap().lookup(FALLBACK_CHAR).is_ok());
        }
    }

    #[test]
    fn lookups_are_stable_across_calls() {
        let a = PLUME.lookup('A').unwrap();
        let b = PLUME.lookup('A').unwrap();
        assert_eq!(a, b);
    }
}
