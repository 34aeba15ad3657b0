//! Demonstration consumer: a shaded square board routed corner to corner.
//!
//! Purpose
//! - Exercise the search on a concrete, visual problem. Each cell carries one
//!   of five shades; entering a cell costs its shade index (0..=4); all eight
//!   surrounding cells are adjacent.
//!
//! Notes
//! - The heuristic (2 × Manhattan distance) assumes an average shade cost and is
//!   neither admissible nor consistent with diagonal moves, so routes are good
//!   rather than provably cheapest. This is a demo, not a planner.
//! - Boards are painted deterministically from a `ReplayToken`.

mod board;
mod palette;
mod render;

pub use board::{Board, BoardSearch, ReplayToken};
pub use palette::{Palette, Rgba, SHADES};
pub use render::render;

#[cfg(test)]
mod tests;
