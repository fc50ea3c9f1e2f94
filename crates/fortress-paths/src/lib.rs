//! Pathfinding for units on weighted tile grids.
//!
//! The main entry points are:
//!
//! - [`search_path`]: one-off lowest-cost path between two tiles of a
//!   [`Grid`](fortress_core::Grid), moving east/west/north/south.
//! - [`Pathfinder::search`]: the same, with a reusable node arena and a
//!   [`SearchConfig`] choosing A\* or greedy best-first ordering, diagonal
//!   moves, the weight of unset tiles and the open-set cap.
//!
//! Every failure (out-of-bounds or walled endpoints, disconnected regions, an
//! open set that outgrows the map) is reported as `None`.
//!
//! # Trait hierarchy
//!
//! | Trait | Required for |
//! |---|---|
//! | [`Pather`] | neighbor enumeration |
//! | [`WeightedPather`] : [`Pather`] | step costs |
//! | [`AstarPather`] : [`WeightedPather`] | [`Pathfinder::astar_path`], [`Pathfinder::best_first_path`] |
//!
//! [`GridPather`] implements all three for a grid.

mod astar;
mod config;
mod distance;
mod grid_pather;
mod path;
mod pathfinder;
mod search;
mod traits;

pub use config::{Movement, SearchConfig, SearchMode};
pub use distance::{DIAGONAL_COST, chebyshev, manhattan, octile};
pub use grid_pather::GridPather;
pub use path::{Path, Step};
pub use pathfinder::Pathfinder;
pub use search::search_path;
pub use traits::{AstarPather, Pather, WeightedPather};
