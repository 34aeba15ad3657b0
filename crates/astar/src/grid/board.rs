//! Square board of shaded cells and its `Graph` adapter.

use rand::rngs::StdRng;
use rand::SeedableRng;

use super::palette::{Palette, Rgba};
use crate::search::{Cost, Graph, Label, LookupError, Neighbors};

/// Replay token to make board draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finaliser.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        StdRng::seed_from_u64(mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15))))
    }
}

/// `side × side` cells labelled row-major from 0, each with a colour and an
/// optional route mark.
#[derive(Clone, Debug, PartialEq)]
pub struct Board {
    side: usize,
    cells: Vec<Rgba>,
    marks: Vec<Option<Rgba>>,
}

impl Board {
    /// A white board without marks.
    pub fn new(side: usize) -> Self {
        let count = side * side;
        Self {
            side,
            cells: vec![Rgba::WHITE; count],
            marks: vec![None; count],
        }
    }

    #[inline]
    pub fn side(&self) -> usize {
        self.side
    }

    /// Total number of cells.
    #[inline]
    pub fn count(&self) -> usize {
        self.cells.len()
    }

    /// Paint every cell with a random shade drawn from `tok`.
    pub fn randomise(&mut self, palette: &Palette, tok: ReplayToken) {
        let mut rng = tok.to_std_rng();
        for cell in &mut self.cells {
            *cell = palette.choose(&mut rng);
        }
    }

    /// Paint one cell. Returns false if `label` is off the board.
    pub fn set(&mut self, label: Label, colour: Rgba) -> bool {
        match self.slot(label) {
            Some(i) => {
                self.cells[i] = colour;
                true
            }
            None => false,
        }
    }

    pub fn cell(&self, label: Label) -> Option<Rgba> {
        self.slot(label).map(|i| self.cells[i])
    }

    pub fn mark(&self, label: Label) -> Option<Rgba> {
        self.slot(label).and_then(|i| self.marks[i])
    }

    /// Mark every label of `route` with the path colour and the last one with
    /// the destination colour. Labels off the board are ignored.
    pub fn mark_route(&mut self, route: &[Label], palette: &Palette) {
        let Some((&last, rest)) = route.split_last() else {
            return;
        };
        for &label in rest {
            if let Some(i) = self.slot(label) {
                self.marks[i] = Some(palette.path());
            }
        }
        if let Some(i) = self.slot(last) {
            self.marks[i] = Some(palette.destination());
        }
    }

    /// Remove all marks. Returns true if there was anything to remove.
    pub fn clear_route(&mut self) -> bool {
        let mut done = false;
        for mark in self.marks.iter_mut().filter(|m| m.is_some()) {
            *mark = None;
            done = true;
        }
        done
    }

    /// A search view of the board: entering a cell costs its shade index.
    pub fn search_with<'a>(&'a self, palette: &'a Palette) -> BoardSearch<'a> {
        BoardSearch {
            board: self,
            palette,
        }
    }

    /// (column, row) of a label known to be on the board.
    #[inline]
    pub(crate) fn column_row(&self, i: usize) -> (usize, usize) {
        (i % self.side, i / self.side)
    }

    fn slot(&self, label: Label) -> Option<usize> {
        usize::try_from(label).ok().filter(|&i| i < self.count())
    }
}

/// `Graph` over a board and the palette that prices its colours.
#[derive(Clone, Copy, Debug)]
pub struct BoardSearch<'a> {
    board: &'a Board,
    palette: &'a Palette,
}

impl Graph for BoardSearch<'_> {
    /// The up to eight surrounding cells. Fails for a label off the board or
    /// when a surrounding cell is painted with a colour outside the palette.
    fn neighbors(&self, label: Label) -> Result<Neighbors, LookupError> {
        let i = self
            .board
            .slot(label)
            .ok_or(LookupError::UnknownLabel(label))?;
        let side = self.board.side;
        let (c, r) = self.board.column_row(i);
        let mut out = Neighbors::new();
        for rx in r.saturating_sub(1)..=(r + 1).min(side - 1) {
            for cx in c.saturating_sub(1)..=(c + 1).min(side - 1) {
                if (rx, cx) == (r, c) {
                    continue;
                }
                let k = rx * side + cx;
                let colour = self.board.cells[k];
                let shade = self
                    .palette
                    .index(colour)
                    .ok_or_else(|| LookupError::Unavailable {
                        label,
                        reason: format!("cell {k} has colour {colour} outside the palette"),
                    })?;
                out.insert(k as Label, shade as Cost);
            }
        }
        Ok(out)
    }

    /// Manhattan distance times an assumed average shade cost of 2.
    fn estimate(&self, from: Label, to: Label) -> Cost {
        let (Some(i), Some(j)) = (self.board.slot(from), self.board.slot(to)) else {
            return 0.0;
        };
        let (ci, ri) = self.board.column_row(i);
        let (cj, rj) = self.board.column_row(j);
        2.0 * (ri.abs_diff(rj) + ci.abs_diff(cj)) as Cost
    }
}
