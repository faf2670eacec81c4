//! Paragraph composition: tokenizing multi-line text, assigning grid
//! positions and assembling the final drawing tree.

use compact_str::CompactString;
use inkpack_font::Font;

use crate::{
    config::{RenderConfig, WordStyle},
    curve,
    geometry::{Point, Rect},
    svg::{Drawing, GroupNode, Node, PathNode, RectNode},
    word,
};

/// Floor for the drawing's width and height: even a render with zero words
/// reports positive dimensions.
pub const MIN_DIMENSION: f32 = 1.0;

/// A whitespace-delimited run of characters, or the explicit line-break
/// sentinel `"\n"`, with its assigned grid position.
///
/// Empty tokens (from consecutive, leading or trailing spaces) are preserved
/// so cursor-addressable positions survive edits: they reserve their grid
/// slot but draw nothing.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub text: CompactString,
    pub col: u32,
    pub row: u32,
}

impl Token {
    /// Line-break tokens advance the row without occupying a slot.
    pub fn is_line_break(&self) -> bool {
        self.text == "\n"
    }

    fn occupies_slot(&self) -> bool {
        !self.is_line_break()
    }

    fn has_ink(&self) -> bool {
        self.occupies_slot() && !self.text.trim().is_empty()
    }
}

/// Splits `text` on line breaks, then each line on single spaces, appending a
/// line-break token after every line except the last, and assigns (column,
/// row) grid positions in walking order.
///
/// An entirely-empty single-line input yields zero tokens. For text made of
/// printable-ASCII words separated by single spaces and single newlines,
/// rejoining the tokens with those separators reproduces the input.
pub fn tokenize(text: &str) -> Vec<Token> {
    let lines: Vec<&str> = text.split('\n').collect();
    let last = lines.len() - 1;

    let mut texts: Vec<CompactString> = Vec::new();
    for (j, line) in lines.iter().enumerate() {
        let start = texts.len();
        texts.extend(line.split(' ').map(CompactString::from));
        if j < last {
            texts.push(CompactString::const_new("\n"));
        }
        // a lone empty word on the final line is not a token
        if texts.len() - start == 1 && texts[start].is_empty() {
            texts.pop();
        }
    }

    let mut col = 0u32;
    let mut row = 0u32;
    texts
        .into_iter()
        .map(|text| {
            let token = Token { text, col, row };
            if token.is_line_break() {
                row += 1;
                col = 0;
            } else {
                col += 1;
            }
            token
        })
        .collect()
}

/// Assembles the full drawing for `text`.
///
/// Canvas extent counts every slot-occupying token, empty ones included, so
/// the drawing stays aligned with any external cursor-tracking surface; only
/// tokens with non-empty trimmed content are packed and drawn. The paragraph
/// owns the outer padding and hands each word an inner rectangle of
/// `cell - 2 * padding_px` per axis; word packing applies its own inset
/// inside that rectangle.
pub(crate) fn compose(text: &str, config: &RenderConfig, font: &Font) -> Drawing {
    let tokens = tokenize(text);
    let cell_w = config.cell_width();
    let cell_h = config.cell_height();
    let pad = config.padding_px();

    let mut extent: Option<(u32, u32)> = None;
    for token in tokens.iter().filter(|t| t.occupies_slot()) {
        let (c, r) = extent.get_or_insert((0, 0));
        *c = (*c).max(token.col);
        *r = (*r).max(token.row);
    }

    let (width, height) = match extent {
        Some((max_col, max_row)) => (
            ((max_col + 1) as f32 * cell_w + 2.0 * pad).max(MIN_DIMENSION),
            ((max_row + 1) as f32 * cell_h + 2.0 * pad).max(MIN_DIMENSION),
        ),
        None => (MIN_DIMENSION, MIN_DIMENSION),
    };

    let inner_w = cell_w - 2.0 * pad;
    let inner_h = cell_h - 2.0 * pad;
    let inset = inner_w.min(inner_h) * config.padding;
    let pack_rect = Rect::new(
        inset,
        inset,
        inner_w * (1.0 - config.padding),
        inner_h * (1.0 - config.padding),
    );

    let mut children = Vec::new();
    if let Some(canvas) = &config.canvas {
        children.push(Node::Rect(RectNode {
            x: 0.0,
            y: 0.0,
            width,
            height,
            fill: canvas.clone(),
            stroke: None,
        }));
    }

    for token in tokens.iter().filter(|t| t.has_ink()) {
        let packed = word::pack_word(&token.text, pack_rect, config, font);
        let mut group = GroupNode {
            translate: Some(Point::new(
                token.col as f32 * cell_w + pad,
                token.row as f32 * cell_h + pad,
            )),
            children: Vec::new(),
        };

        if let Some(background) = &config.background {
            group.children.push(Node::Rect(RectNode {
                x: 0.0,
                y: 0.0,
                width: inner_w,
                height: inner_h,
                fill: background.fill.clone(),
                stroke: None,
            }));
        }

        if let Some(grid) = &config.grid {
            for cell in &packed.cells {
                group.children.push(Node::Rect(RectNode {
                    x: cell.rect.x,
                    y: cell.rect.y,
                    width: cell.rect.width().max(1.0),
                    height: cell.rect.height().max(1.0),
                    fill: grid.fill.clone(),
                    stroke: Some(grid.stroke.clone()),
                }));
            }
        }

        if let Some(style) = &config.word {
            if config.cursive {
                if let Some(path) = packed.paths.first() {
                    group.children.push(Node::Path(path_node(&path.strokes, style)));
                }
            } else {
                for path in &packed.paths {
                    group.children.push(Node::Group(GroupNode {
                        translate: Some(path.origin),
                        children: vec![Node::Path(path_node(&path.strokes, style))],
                    }));
                }
            }
        }

        children.push(Node::Group(group));
    }

    Drawing {
        width,
        height,
        attrs: config.style.clone(),
        children,
    }
}

fn path_node(strokes: &[Vec<[f32; 2]>], style: &WordStyle) -> PathNode {
    PathNode {
        d: curve::multi_path(strokes),
        fill: style.fill.clone(),
        stroke: style.stroke.clone(),
        stroke_width: style.stroke_width,
    }
}
