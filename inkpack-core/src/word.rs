//! Word composition: packed cells plus scaled glyph strokes.

use inkpack_font::{FALLBACK_CHAR, Font, Glyph};

use crate::{
    config::RenderConfig,
    geometry::{Cell, Point, Rect},
    packer, scale,
};

/// A glyph rescaled into its owning cell's local frame (origin at the cell's
/// top-left corner).
#[derive(Debug, Clone, PartialEq)]
pub struct ScaledGlyph {
    pub origin: Point,
    pub strokes: Vec<Vec<[f32; 2]>>,
}

/// One word's packed cells and scaled glyph paths.
#[derive(Debug, Clone, PartialEq)]
pub struct PackedWord {
    pub cells: Vec<Cell>,
    pub paths: Vec<ScaledGlyph>,
}

/// Packs one word into `rect` and scales each character's glyph into its
/// cell. Glyph lookup failures substitute the fallback glyph and continue.
///
/// In cursive mode every scaled point is translated by its cell's absolute
/// origin, then all of the word's points collapse into a single continuous
/// stroke at origin (0,0): the pen never lifts inside the word.
pub(crate) fn pack_word(
    word: &str,
    rect: Rect,
    config: &RenderConfig,
    font: &Font,
) -> PackedWord {
    let chars: Vec<char> = word.chars().collect();
    let cells = packer::pack(config.layout, &chars, rect);

    let mut paths: Vec<ScaledGlyph> = cells
        .iter()
        .map(|cell| {
            let glyph = lookup_or_fallback(font, cell.ch);
            let strokes = scale::scale_glyph(&glyph, cell.rect.width(), cell.rect.height());
            ScaledGlyph {
                origin: Point::new(cell.rect.x, cell.rect.y),
                strokes,
            }
        })
        .collect();

    if config.cursive {
        let mut line: Vec<[f32; 2]> = Vec::new();
        for path in &paths {
            for stroke in &path.strokes {
                for &[x, y] in stroke {
                    line.push([x + path.origin.x, y + path.origin.y]);
                }
            }
        }
        paths = vec![ScaledGlyph { origin: Point::default(), strokes: vec![line] }];
    }

    PackedWord { cells, paths }
}

fn lookup_or_fallback(font: &Font, ch: char) -> Glyph {
    font.lookup(ch)
        .or_else(|_| font.lookup(FALLBACK_CHAR))
        .unwrap_or_default()
}
