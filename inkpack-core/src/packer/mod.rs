//! Box-packing strategies mapping a word's characters onto cells.

mod flex;
mod treemap;

pub(crate) use flex::flex;
pub(crate) use treemap::treemap;

use crate::{
    config::Layout,
    geometry::{Cell, Rect},
};

/// Runs the configured packing strategy. Dispatch is an exhaustive match over
/// the closed [`Layout`] variants.
pub(crate) fn pack(layout: Layout, chars: &[char], rect: Rect) -> Vec<Cell> {
    match layout {
        Layout::Flex { padding } => flex(chars, rect, padding),
        Layout::Treemap { padding } => treemap(chars, rect, padding),
    }
}
