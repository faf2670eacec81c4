//! Linear coordinate scales and glyph-to-cell fitting.

use inkpack_font::Glyph;

use crate::geometry::Bounds;

/// A linear map from a source domain to a target range.
///
/// A degenerate domain (`d0 == d1`) maps every input to the range midpoint,
/// so zero-extent glyphs like the space stroke never divide by zero.
#[derive(Debug, Clone, Copy)]
pub struct LinearScale {
    d0: f32,
    span: f32,
    r0: f32,
    r1: f32,
}

impl LinearScale {
    pub fn new(domain: (f32, f32), range: (f32, f32)) -> Self {
        Self {
            d0: domain.0,
            span: domain.1 - domain.0,
            r0: range.0,
            r1: range.1,
        }
    }

    pub fn apply(&self, v: f32) -> f32 {
        if self.span == 0.0 {
            return (self.r0 + self.r1) / 2.0;
        }
        let t = (v - self.d0) / self.span;
        self.r0 + t * (self.r1 - self.r0)
    }
}

/// Rescales a glyph's strokes so its combined bounding box fills
/// `[0, width] x [0, height]`.
///
/// One bounding box is computed over all strokes together; scaling per stroke
/// would tear the glyph apart. The two axes scale independently, so glyphs
/// stretch to the cell's aspect ratio.
pub(crate) fn scale_glyph(glyph: &Glyph, width: f32, height: f32) -> Vec<Vec<[f32; 2]>> {
    let bounds = Bounds::from_points(glyph.points());
    if bounds.is_empty() {
        return Vec::new();
    }
    let sx = LinearScale::new((bounds.min_x, bounds.max_x), (0.0, width));
    let sy = LinearScale::new((bounds.min_y, bounds.max_y), (0.0, height));

    glyph
        .strokes
        .iter()
        .map(|stroke| {
            stroke
                .iter()
                .map(|&[x, y]| [sx.apply(x), sy.apply(y)])
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_domain_endpoints_to_range_endpoints() {
        let s = LinearScale::new((2.0, 10.0), (0.0, 80.0));
        assert_eq!(s.apply(2.0), 0.0);
        assert_eq!(s.apply(10.0), 80.0);
        assert_eq!(s.apply(6.0), 40.0);
    }

    #[test]
    fn degenerate_domain_maps_to_range_midpoint() {
        let s = LinearScale::new((8.0, 8.0), (0.0, 60.0));
        assert_eq!(s.apply(8.0), 30.0);
        assert_eq!(s.apply(123.0), 30.0);
    }

    #[test]
    fn scaled_points_stay_within_the_cell() {
        let glyph = Glyph {
            strokes: vec![
                vec![[2.0, 0.0], [6.0, 16.0]],
                vec![[0.0, 8.0], [8.0, 8.0]],
            ],
        };
        let scaled = scale_glyph(&glyph, 50.0, 70.0);
        for point in scaled.iter().flatten() {
            assert!(point[0] >= 0.0 && point[0] <= 50.0);
            assert!(point[1] >= 0.0 && point[1] <= 70.0);
        }
        // the combined box spans the full cell
        let bounds = Bounds::from_points(scaled.iter().flatten());
        assert_eq!((bounds.min_x, bounds.max_x), (0.0, 50.0));
        assert_eq!((bounds.min_y, bounds.max_y), (0.0, 70.0));
    }

    #[test]
    fn space_glyph_lands_on_the_cell_midpoint() {
        let glyph = Glyph {
            strokes: vec![vec![[8.0, 0.0]]],
        };
        let scaled = scale_glyph(&glyph, 40.0, 40.0);
        assert_eq!(scaled, vec![vec![[20.0, 20.0]]]);
    }

    #[test]
    fn empty_glyph_scales_to_nothing() {
        assert!(scale_glyph(&Glyph::default(), 40.0, 40.0).is_empty());
    }
}
