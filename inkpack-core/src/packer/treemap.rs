//! Treemap packing: binary slice-and-dice tiling with equal-weight leaves.
//!
//! Every character carries the same weight, so the tiling reduces to
//! recursively halving the leaf list (left half rounds up), cutting the
//! rectangle along its longer side proportionally to the leaf counts, and
//! leaving an inner gap between siblings. Equal weights never reorder, so
//! leaf-traversal order equals input order by construction.

use crate::geometry::{Cell, Rect};

/// Packs `chars` into an equal-area tiling of `rect`, one cell per character,
/// in input order. `padding` is a fraction of the rectangle's shorter side
/// and becomes the gap between sibling tiles.
pub(crate) fn treemap(chars: &[char], rect: Rect, padding: f32) -> Vec<Cell> {
    let n = chars.len();
    if n == 0 {
        return Vec::new();
    }

    let gap = rect.min_side() * padding;
    let mut leaves = Vec::with_capacity(n);
    // tile in local coordinates, then translate back by the rect origin
    partition(
        n,
        Rect::new(0.0, 0.0, rect.width(), rect.height()),
        gap,
        &mut leaves,
    );

    chars
        .iter()
        .zip(leaves)
        .map(|(&ch, leaf)| Cell {
            rect: Rect::new(
                leaf.x + rect.x,
                leaf.y + rect.y,
                leaf.x1 + rect.x,
                leaf.y1 + rect.y,
            ),
            ch,
        })
        .collect()
}

fn partition(count: usize, rect: Rect, gap: f32, out: &mut Vec<Rect>) {
    if count == 1 {
        out.push(rect);
        return;
    }

    let left = count.div_ceil(2);
    let right = count - left;
    let frac = left as f32 / count as f32;
    let half = gap / 2.0;

    if rect.width() > rect.height() {
        let xk = rect.x + rect.width() * frac;
        partition(left, Rect::new(rect.x, rect.y, xk - half, rect.y1), gap, out);
        partition(right, Rect::new(xk + half, rect.y, rect.x1, rect.y1), gap, out);
    } else {
        let yk = rect.y + rect.height() * frac;
        partition(left, Rect::new(rect.x, rect.y, rect.x1, yk - half), gap, out);
        partition(right, Rect::new(rect.x, yk + half, rect.x1, rect.y1), gap, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn one_cell_per_character_in_input_order() {
        let rect = Rect::new(0.0, 0.0, 100.0, 100.0);
        for s in ["a", "ab", "tiling", "equal-weight leaves"] {
            let cells = treemap(&chars(s), rect, 0.05);
            assert_eq!(cells.len(), s.len());
            let packed: String = cells.iter().map(|c| c.ch).collect();
            assert_eq!(packed, s);
        }
    }

    #[test]
    fn empty_string_packs_to_nothing() {
        assert!(treemap(&[], Rect::new(0.0, 0.0, 10.0, 10.0), 0.0).is_empty());
    }

    #[test]
    fn unpadded_leaves_have_equal_areas_and_tile_the_rectangle() {
        let rect = Rect::new(0.0, 0.0, 120.0, 80.0);
        for n in [1usize, 2, 3, 5, 8, 13] {
            let s: String = std::iter::repeat_n('x', n).collect();
            let cells = treemap(&chars(&s), rect, 0.0);
            let want = rect.area() / n as f32;
            let mut total = 0.0;
            for cell in &cells {
                let area = cell.rect.area();
                assert!(
                    (area - want).abs() / want < 1e-3,
                    "n={n}: leaf area {area}, want {want}"
                );
                total += area;
            }
            assert!((total - rect.area()).abs() < 1e-2);
        }
    }

    #[test]
    fn leaves_respect_the_origin_translation() {
        let rect = Rect::new(40.0, 60.0, 140.0, 160.0);
        for cell in treemap(&chars("abcd"), rect, 0.1) {
            assert!(rect.contains(&cell.rect), "{cell:?} outside {rect:?}");
        }
    }

    #[test]
    fn first_cut_follows_the_longer_side() {
        let wide = Rect::new(0.0, 0.0, 200.0, 100.0);
        let cells = treemap(&chars("ab"), wide, 0.0);
        // wide rect cuts vertically: equal x spans, full y spans
        assert_eq!(cells[0].rect, Rect::new(0.0, 0.0, 100.0, 100.0));
        assert_eq!(cells[1].rect, Rect::new(100.0, 0.0, 200.0, 100.0));

        let tall = Rect::new(0.0, 0.0, 100.0, 200.0);
        let cells = treemap(&chars("ab"), tall, 0.0);
        assert_eq!(cells[0].rect, Rect::new(0.0, 0.0, 100.0, 100.0));
        assert_eq!(cells[1].rect, Rect::new(0.0, 100.0, 100.0, 200.0));
    }

    #[test]
    fn padding_opens_a_gap_between_siblings() {
        let rect = Rect::new(0.0, 0.0, 100.0, 50.0);
        let cells = treemap(&chars("ab"), rect, 0.1);
        let gap = cells[1].rect.x - cells[0].rect.x1;
        assert!((gap - 5.0).abs() < 1e-4); // min_side 50 * 0.1
    }

    #[test]
    fn packing_is_deterministic() {
        let rect = Rect::new(0.0, 0.0, 90.0, 90.0);
        let a = treemap(&chars("stable"), rect, 0.05);
        let b = treemap(&chars("stable"), rect, 0.05);
        assert_eq!(a, b);
    }
}
