/// A single pen stroke: an ordered polyline in font design units.
pub type Stroke = Vec<[f32; 2]>;

/// The pen strokes defining one character of a single-stroke vector font.
///
/// Coordinates are unnormalized design units; consumers rescale the glyph's
/// combined bounding box into whatever cell they are drawing into. A glyph
/// with a single one-point stroke (the space character) reserves a cell
/// without producing any ink.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Glyph {
    /// Strokes in drawing order.
    pub strokes: Vec<Stroke>,
}

impl Glyph {
    /// Returns `true` when the glyph carries no strokes at all.
    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }

    /// Iterates over every point of every stroke, in drawing order.
    pub fn points(&self) -> impl Iterator<Item = &[f32; 2]> {
        self.strokes.iter().flatten()
    }
}
