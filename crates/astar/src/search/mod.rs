//! A* search over an abstract graph of integer labels.
//!
//! Purpose
//! - Find the cheapest route between two labels given only a neighbour-cost
//!   lookup and a heuristic (`Graph`). No graph storage is prescribed.
//!
//! Structure
//! - `heap`: binary min-heap on `f` whose elements carry their own slot, so a
//!   decreased priority is repaired in O(log n) without a scan.
//! - `registry`: one `SearchNode` per label, created lazily, owned by a single
//!   search invocation.
//! - `engine`: the expansion loop (`find`, `find_with`).
//! - `route`: predecessor-map walk from goal back to start.
//!
//! Assumptions
//! - Edge costs are non-negative. The heuristic is admissible and consistent;
//!   the returned route is optimal only under that assumption.
//! - There is no closed set by default: an expanded node is re-opened whenever a
//!   strictly cheaper route to it shows up. `SearchCfg::closed_set` switches
//!   to the classic closed-set variant.
//! - A failed neighbour lookup is treated as "no neighbours". The failure is
//!   counted in `SearchStats::lookup_failures` and logged at debug level.
//! - Neighbours are relaxed in ascending label order; among equal-`f` open
//!   nodes the pop order is implementation-defined.
//!
//! Each call owns all of its state, so independent searches may run on
//! separate threads against a shared `Sync` graph.

mod engine;
mod heap;
mod registry;
mod route;
mod types;

pub use engine::{find, find_with};
pub use types::{Cost, Graph, Label, LookupError, Neighbors, Search, SearchCfg, SearchStats};
