/// Error categories for the rendering engine.
///
/// Configuration mistakes fail fast; glyph lookup failures never reach this
/// type because the word composer recovers them with a fallback glyph.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Malformed render configuration, caught before any layout runs.
    #[error("Config error: {0}")]
    Config(String),

    /// Font table access failed outside the per-character fallback path.
    #[error("Font error: {0}")]
    Font(#[from] inkpack_font::FontError),
}

impl Error {
    pub(crate) fn nonpositive_cell(axis: &str, value: f32) -> Self {
        Self::Config(format!("cell {axis} must be positive and finite, got {value}"))
    }

    pub(crate) fn padding_out_of_range(which: &str, value: f32) -> Self {
        Self::Config(format!("{which} padding must be in [0, 0.5), got {value}"))
    }

    pub(crate) fn negative_stroke_width(value: f32) -> Self {
        Self::Config(format!("stroke width must be non-negative, got {value}"))
    }
}
