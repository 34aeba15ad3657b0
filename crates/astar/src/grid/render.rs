//! Plain-text rendering of a board.

use super::board::Board;
use super::palette::{Palette, SHADES};
use crate::search::Label;

const SHADE_GLYPHS: [char; SHADES] = ['.', ':', '+', '%', '#'];
const PATH_GLYPH: char = '*';
const DESTINATION_GLYPH: char = '@';
const UNKNOWN_GLYPH: char = '?';

/// One line per row. Marks win over shades; a colour outside the palette is
/// shown as `?`.
pub fn render(board: &Board, palette: &Palette) -> String {
    let side = board.side();
    let mut out = String::with_capacity(board.count() + side);
    for row in 0..side {
        for col in 0..side {
            let label = (row * side + col) as Label;
            out.push(glyph(board, palette, label));
        }
        out.push('\n');
    }
    out
}

fn glyph(board: &Board, palette: &Palette, label: Label) -> char {
    match board.mark(label) {
        Some(m) if m == palette.destination() => DESTINATION_GLYPH,
        Some(_) => PATH_GLYPH,
        None => board
            .cell(label)
            .and_then(|c| palette.index(c))
            .map_or(UNKNOWN_GLYPH, |i| SHADE_GLYPHS[i]),
    }
}
