//! Render configuration: explicit structs with named nested sub-structures.
//!
//! The configuration is the engine's entire public contract. Unknown fields
//! are rejected at deserialization time, and a merge is just deserializing a
//! partial document over the defaults; there is no open-ended deep merge.

use std::collections::BTreeMap;

use compact_str::CompactString;
use serde::Deserialize;

use crate::error::Error;

/// Default cell edge in pixels.
pub const DEFAULT_CELL_SIZE: f32 = 80.0;
/// Default outer padding as a fraction of the shorter cell side.
pub const DEFAULT_PADDING: f32 = 0.1;
/// Default packer padding as a fraction of the packed rectangle's shorter side.
pub const DEFAULT_PACK_PADDING: f32 = 0.05;
/// Default font key.
pub const DEFAULT_FONT: &str = "skeletal";

/// The packing strategy, dispatched by exhaustive match.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Layout {
    /// Recursive binary rectangle subdivision driven by the character-code
    /// direction rule.
    Flex {
        #[serde(default = "default_pack_padding")]
        padding: f32,
    },
    /// Binary slice-and-dice tiling with equal-weight leaves.
    Treemap {
        #[serde(default = "default_pack_padding")]
        padding: f32,
    },
}

impl Default for Layout {
    fn default() -> Self {
        Layout::Flex { padding: DEFAULT_PACK_PADDING }
    }
}

impl Layout {
    /// The strategy's packing padding fraction.
    pub fn padding(self) -> f32 {
        match self {
            Layout::Flex { padding } | Layout::Treemap { padding } => padding,
        }
    }
}

fn default_pack_padding() -> f32 {
    DEFAULT_PACK_PADDING
}

/// Stroke and fill attributes for glyph paths.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields, default)]
pub struct WordStyle {
    pub fill: CompactString,
    pub stroke: CompactString,
    pub stroke_width: f32,
}

impl Default for WordStyle {
    fn default() -> Self {
        Self {
            fill: CompactString::const_new("transparent"),
            stroke: CompactString::const_new("black"),
            stroke_width: 2.0,
        }
    }
}

/// Stroke and fill attributes for per-cell grid outlines.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct GridStyle {
    pub stroke: CompactString,
    pub fill: CompactString,
}

impl Default for GridStyle {
    fn default() -> Self {
        Self {
            stroke: CompactString::const_new("#eee"),
            fill: CompactString::const_new("none"),
        }
    }
}

/// Fill attributes for per-word-cell background rectangles.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct BackgroundStyle {
    pub fill: CompactString,
}

impl Default for BackgroundStyle {
    fn default() -> Self {
        Self { fill: CompactString::const_new("transparent") }
    }
}

/// Full render configuration.
///
/// `cell_size` is a shorthand applied to whichever of `cell_width` and
/// `cell_height` is not set explicitly. The optional layers (`word`, `grid`,
/// `background`, `canvas`) are suppressed independently by setting them to
/// `null`; `grid` and `background` default to off, `word` to on.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields, default)]
pub struct RenderConfig {
    pub cell_size: Option<f32>,
    pub cell_width: Option<f32>,
    pub cell_height: Option<f32>,
    pub padding: f32,
    pub font: CompactString,
    pub cursive: bool,
    pub layout: Layout,
    pub word: Option<WordStyle>,
    pub grid: Option<GridStyle>,
    pub background: Option<BackgroundStyle>,
    pub canvas: Option<CompactString>,
    /// Extra attributes copied onto the root SVG element.
    pub style: BTreeMap<CompactString, CompactString>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            cell_size: None,
            cell_width: None,
            cell_height: None,
            padding: DEFAULT_PADDING,
            font: CompactString::const_new(DEFAULT_FONT),
            cursive: false,
            layout: Layout::default(),
            word: Some(WordStyle::default()),
            grid: None,
            background: None,
            canvas: None,
            style: BTreeMap::new(),
        }
    }
}

impl RenderConfig {
    /// Resolved cell width in pixels.
    pub fn cell_width(&self) -> f32 {
        self.cell_width
            .or(self.cell_size)
            .unwrap_or(DEFAULT_CELL_SIZE)
    }

    /// Resolved cell height in pixels.
    pub fn cell_height(&self) -> f32 {
        self.cell_height
            .or(self.cell_size)
            .unwrap_or(DEFAULT_CELL_SIZE)
    }

    /// Outer padding in pixels, derived from the shorter cell side.
    pub fn padding_px(&self) -> f32 {
        self.cell_width().min(self.cell_height()) * self.padding
    }

    /// Fails fast on programmer/config mistakes; nothing here is recoverable
    /// mid-render.
    ///
    /// # Errors
    /// [`Error::Config`] on non-positive cell dimensions, out-of-range
    /// padding or a negative stroke width; [`Error::Font`] on an unknown
    /// font key.
    pub fn validate(&self) -> Result<(), Error> {
        let w = self.cell_width();
        let h = self.cell_height();
        if !(w.is_finite() && w > 0.0) {
            return Err(Error::nonpositive_cell("width", w));
        }
        if !(h.is_finite() && h > 0.0) {
            return Err(Error::nonpositive_cell("height", h));
        }
        if !(0.0..0.5).contains(&self.padding) {
            return Err(Error::padding_out_of_range("outer", self.padding));
        }
        let pack_padding = self.layout.padding();
        if !(0.0..0.5).contains(&pack_padding) {
            return Err(Error::padding_out_of_range("layout", pack_padding));
        }
        if let Some(word) = &self.word
            && word.stroke_width < 0.0
        {
            return Err(Error::negative_stroke_width(word.stroke_width));
        }
        inkpack_font::Font::get(&self.font)?;
        Ok(())
    }
}
