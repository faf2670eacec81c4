//! Layout, packing and glyph-vectorization engine rendering short text as
//! stylized vector art.
//!
//! Each word is packed into a cell, the cell is recursively subdivided into
//! one sub-box per character, and each character's pen-stroke glyph is scaled
//! into its sub-box and drawn as a smoothed stroked path. The whole pipeline
//! is a pure, synchronous function from `(text, RenderConfig)` to a
//! [`Drawing`] tree; the only shared state is the read-only glyph table in
//! [`inkpack_font`].
//!
//! ```
//! use inkpack_core::{render, RenderConfig};
//!
//! let drawing = render("hello world", &RenderConfig::default())?;
//! let svg = drawing.to_svg();
//! assert!(svg.starts_with("<svg"));
//! # Ok::<(), inkpack_core::Error>(())
//! ```

mod config;
mod curve;
mod error;
mod geometry;
mod packer;
mod paragraph;
mod scale;
mod svg;
mod word;

pub use config::{
    BackgroundStyle, DEFAULT_CELL_SIZE, DEFAULT_FONT, DEFAULT_PACK_PADDING, DEFAULT_PADDING,
    GridStyle, Layout, RenderConfig, WordStyle,
};
pub use error::Error;
pub use geometry::{Cell, Point, Rect};
pub use paragraph::{MIN_DIMENSION, Token, tokenize};
pub use scale::LinearScale;
pub use svg::{Drawing, GroupNode, Node, PathNode, RectNode};
pub use word::{PackedWord, ScaledGlyph};

use inkpack_font::Font;

/// Renders `text` into a drawing tree.
///
/// Fails fast on a malformed configuration; individual glyph lookup failures
/// are recovered internally with the fallback glyph and never surface here.
///
/// # Errors
/// [`Error::Config`] or [`Error::Font`] when the configuration is invalid.
pub fn render(text: &str, config: &RenderConfig) -> Result<Drawing, Error> {
    config.validate()?;
    let font = Font::get(&config.font)?;
    Ok(paragraph::compose(text, config, font))
}

/// Convenience wrapper serializing straight to an SVG document string.
///
/// # Errors
/// Same conditions as [`render`].
pub fn render_svg(text: &str, config: &RenderConfig) -> Result<String, Error> {
    render(text, config).map(|drawing| drawing.to_svg())
}
