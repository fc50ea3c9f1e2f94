//! **fortress-core** — core types for fortress tile maps.
//!
//! This crate provides the foundational types shared by the pathfinding and
//! map-generation crates: geometry primitives and a weighted tile grid in
//! which walls are marked by the [`MAX_WEIGHT`] sentinel.

pub mod error;
pub mod geom;
pub mod grid;

pub use error::GridError;
pub use geom::{Point, Range, RangeIter};
pub use grid::{Cell, Grid, MAX_WEIGHT};
