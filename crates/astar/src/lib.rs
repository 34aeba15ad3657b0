//! A* shortest-path search over caller-defined graphs.
//!
//! The caller describes the problem space through the [`Graph`] capability
//! (neighbour costs and a heuristic between integer labels); [`find`] returns
//! the cheapest route or an empty vector.
//!
//! Modules
//! - `search`: the engine (indexed open set, node registry, expansion loop,
//!   route reconstruction).
//! - `adjacency`: an explicit edge-list graph.
//! - `grid`: a shaded-board demonstration consumer with text rendering.

pub mod adjacency;
pub mod grid;
pub mod search;

pub use search::{
    find, find_with, Cost, Graph, Label, LookupError, Neighbors, Search, SearchCfg, SearchStats,
};

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::adjacency::{AdjacencyGraph, Edge, Kind};
    pub use crate::grid::{render, Board, Palette, ReplayToken, Rgba};
    pub use crate::search::{
        find, find_with, Cost, Graph, Label, LookupError, Neighbors, Search, SearchCfg,
    };
}
