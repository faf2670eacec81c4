//! Flex packing: recursive binary rectangle subdivision.
//!
//! The whole rectangle starts as one cell holding the first character. Each
//! following character splits the most recently produced cell (the growing
//! "trunk") in two; the split-off piece keeps the trunk's character and is
//! final, while the larger remainder becomes the new trunk and receives the
//! incoming character. The cut direction comes from a deterministic rule over
//! the string's character codes, so identical inputs always produce identical
//! geometry.

use crate::geometry::{Cell, Rect};

/// Split fraction while more characters remain; the trunk keeps the larger
/// share so it can keep subdividing.
const GROWING_SPLIT: f32 = 0.33;
/// Split fraction for the final cut.
const FINAL_SPLIT: f32 = 0.5;

/// Packs `chars` into cells tiling `rect`, one cell per character, in input
/// order. `padding` is a fraction of the rectangle's shorter side; each cut
/// shrinks both children by the resulting amount.
pub(crate) fn flex(chars: &[char], rect: Rect, padding: f32) -> Vec<Cell> {
    let n = chars.len();
    if n == 0 {
        return Vec::new();
    }

    let p = rect.min_side() * padding;
    let (r, d) = split_rule(chars);
    let mut cells = vec![Cell { rect, ch: chars[0] }];

    for (i, &ch) in chars.iter().enumerate().skip(1) {
        // the trunk is always the most recently produced cell
        let Some(trunk) = cells.pop() else { break };
        let Rect { x, y, x1, y1 } = trunk.rect;
        let t = if n - i <= 1 { FINAL_SPLIT } else { GROWING_SPLIT };

        // the shave can outgrow a trunk thinned by repeated same-direction
        // cuts; cap each padded edge at the opposite edge so a starved child
        // collapses to zero extent instead of inverting
        let (kept, grown) = if (ch as u32) % r == d {
            // vertical cut: children sit side by side
            let xt = x + (x1 - x) * t;
            (
                Rect::new(x, y, (xt - p).max(x), y1),
                Rect::new((xt + p).min(x1), y, x1, y1),
            )
        } else {
            // horizontal cut: children stack
            let yt = y + (y1 - y) * t;
            (
                Rect::new(x, y, x1, (yt - p).max(y)),
                Rect::new(x, (yt + p).min(y1), x1, y1),
            )
        };

        cells.push(Cell { rect: kept.clamp_within(&rect), ch: trunk.ch });
        cells.push(Cell { rect: grown.clamp_within(&rect), ch });
    }

    cells
}

/// Finds the smallest modulus `r` in `2..10` under which the character codes
/// of `chars[1..]` take more than one distinct remainder, so both cut
/// directions occur. Strings of length <= 3 keep the fallback `r = 2`:
/// stacking such short words in one direction is fine. `d` is the remainder
/// of the first scanned character; a code with `code % r == d` cuts
/// vertically.
fn split_rule(chars: &[char]) -> (u32, u32) {
    let codes: Vec<u32> = chars.iter().skip(1).map(|&c| c as u32).collect();
    let mut r = 2;
    if chars.len() > 3 {
        while r < 10 && !has_distinct_remainders(&codes, r) {
            r += 1;
        }
    }
    let d = codes.first().map_or(0, |&c| c % r);
    (r, d)
}

fn has_distinct_remainders(codes: &[u32], r: u32) -> bool {
    let mut first = None;
    for &code in codes {
        let rem = code % r;
        match first {
            None => first = Some(rem),
            Some(f) if f != rem => return true,
            Some(_) => {},
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    fn rect() -> Rect {
        Rect::new(0.0, 0.0, 100.0, 100.0)
    }

    #[test]
    fn one_cell_per_character_in_input_order() {
        for s in ["A", "AB", "hello", "subdivision!"] {
            let cells = flex(&chars(s), rect(), 0.05);
            assert_eq!(cells.len(), s.len());
            let packed: String = cells.iter().map(|c| c.ch).collect();
            assert_eq!(packed, s);
        }
    }

    #[test]
    fn empty_string_packs_to_nothing() {
        assert!(flex(&[], rect(), 0.05).is_empty());
    }

    #[test]
    fn single_character_takes_the_whole_rectangle() {
        let cells = flex(&chars("X"), rect(), 0.05);
        assert_eq!(cells[0].rect, rect());
    }

    #[test]
    fn short_string_fallback_splits_ab_vertically() {
        // len <= 3 keeps r = 2; 'B' is 66, 66 % 2 == 0 == d, so the final
        // 50/50 cut is vertical: two side-by-side cells sharing the y span.
        let cells = flex(&chars("AB"), rect(), 0.0);
        assert_eq!(cells.len(), 2);
        assert_eq!(cells[0].rect, Rect::new(0.0, 0.0, 50.0, 100.0));
        assert_eq!(cells[1].rect, Rect::new(50.0, 0.0, 100.0, 100.0));
    }

    #[test]
    fn cells_never_exceed_the_target_rectangle() {
        let r = Rect::new(10.0, 20.0, 210.0, 120.0);
        for s in ["ab", "typography", "!!!!!!!!", "mixed CASE 42"] {
            for cell in flex(&chars(s), r, 0.08) {
                assert!(r.contains(&cell.rect), "{s}: {cell:?} outside {r:?}");
                assert!(cell.rect.x <= cell.rect.x1 && cell.rect.y <= cell.rect.y1);
            }
        }
    }

    #[test]
    fn heavy_padding_collapses_starved_cells_instead_of_inverting_them() {
        // identical codes cut in one direction only, so the trunk keeps
        // thinning until the shave exceeds its remaining span
        let r = Rect::new(10.0, 20.0, 210.0, 120.0);
        let cells = flex(&chars("!!!!!!!!"), r, 0.08);
        assert_eq!(cells.len(), 8);
        for cell in cells {
            assert!(
                cell.rect.width() >= 0.0 && cell.rect.height() >= 0.0,
                "inverted cell: {cell:?}"
            );
            assert!(r.contains(&cell.rect), "{cell:?} outside {r:?}");
        }
    }

    #[test]
    fn unpadded_cells_tile_the_rectangle_exactly() {
        let r = Rect::new(0.0, 0.0, 120.0, 90.0);
        for s in ["ab", "word", "packing", "abcdefghij"] {
            let total: f32 = flex(&chars(s), r, 0.0).iter().map(|c| c.rect.area()).sum();
            assert!(
                (total - r.area()).abs() < 1e-2,
                "{s}: covered {total}, want {}",
                r.area()
            );
        }
    }

    #[test]
    fn packing_is_deterministic() {
        let a = flex(&chars("determinism"), rect(), 0.05);
        let b = flex(&chars("determinism"), rect(), 0.05);
        assert_eq!(a, b);
    }

    #[test]
    fn modulus_rule_prefers_the_smallest_discriminating_r() {
        // substring "bcd" has codes 98, 99, 100: distinct mod 2 already
        assert_eq!(split_rule(&chars("abcd")), (2, 0));
        // substring "aca" has codes 97, 99, 97: equal mod 2, distinct mod 3
        assert_eq!(split_rule(&chars("zaca")), (3, 97 % 3));
        // short strings keep the fallback r = 2
        assert_eq!(split_rule(&chars("AB")), (2, 0));
        assert_eq!(split_rule(&chars("A")), (2, 0));
    }

    #[test]
    fn identical_codes_exhaust_the_modulus_scan() {
        // every remainder set is a singleton; the scan runs off the end
        let (r, d) = split_rule(&chars("aaaaaa"));
        assert_eq!(r, 10);
        assert_eq!(d, ('a' as u32) % 10);
    }
}
