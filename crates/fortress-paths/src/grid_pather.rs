//! The pather used for unit movement on a weighted [`Grid`].

use fortress_core::{Cell, Grid, Point};

use crate::config::{Movement, SearchConfig};
use crate::distance::{DIAGONAL_COST, manhattan, octile};
use crate::traits::{AstarPather, Pather, WeightedPather};

// East, west, north, south.
const CARDINALS: [Point; 4] = [
    Point::new(1, 0),
    Point::new(-1, 0),
    Point::new(0, -1),
    Point::new(0, 1),
];

const DIAGONALS: [Point; 4] = [
    Point::new(1, -1),
    Point::new(-1, -1),
    Point::new(1, 1),
    Point::new(-1, 1),
];

/// Walks a [`Grid`]: walls block, unset tiles cost the configured default
/// weight, and every other tile costs its weight.
///
/// Neighbors are listed east, west, north, south, and in the reverse order
/// on tiles where `x + y` is even. Alternating the order keeps equal-cost
/// routes zig-zagging along the diagonal instead of running along one edge
/// and then turning once.
#[derive(Debug, Clone, Copy)]
pub struct GridPather<'a> {
    grid: &'a Grid,
    movement: Movement,
    default_weight: f64,
}

impl<'a> GridPather<'a> {
    pub fn new(grid: &'a Grid, config: &SearchConfig) -> Self {
        let default_weight = match Cell::new(config.default_weight) {
            Some(c) if c.is_passable() => c.weight(),
            _ => {
                log::warn!(
                    "invalid default weight {}, using 1",
                    config.default_weight
                );
                1.0
            }
        };
        Self {
            grid,
            movement: config.movement,
            default_weight,
        }
    }

    /// Weight of entering `p`: the cell's weight, or the default if unset.
    #[inline]
    pub fn weight(&self, p: Point) -> f64 {
        self.grid.weight(p).unwrap_or(self.default_weight)
    }

    fn push_ordered(&self, p: Point, dirs: &[Point; 4], buf: &mut Vec<Point>, diagonal: bool) {
        let mut push = |d: &Point| {
            let n = p + *d;
            if !self.grid.is_passable(n) {
                return;
            }
            // No squeezing between two walls or past a corner.
            if diagonal
                && (!self.grid.is_passable(p.shift(d.x, 0))
                    || !self.grid.is_passable(p.shift(0, d.y)))
            {
                return;
            }
            buf.push(n);
        };
        if p.is_even() {
            dirs.iter().rev().for_each(&mut push);
        } else {
            dirs.iter().for_each(&mut push);
        }
    }
}

impl Pather for GridPather<'_> {
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        self.push_ordered(p, &CARDINALS, buf, false);
        if self.movement == Movement::Diagonal {
            self.push_ordered(p, &DIAGONALS, buf, true);
        }
    }

    fn passable(&self, p: Point) -> bool {
        self.grid.is_passable(p)
    }
}

impl WeightedPather for GridPather<'_> {
    fn cost(&self, from: Point, to: Point) -> f64 {
        let w = self.weight(to);
        if from.x != to.x && from.y != to.y {
            w * DIAGONAL_COST
        } else {
            w
        }
    }
}

impl AstarPather for GridPather<'_> {
    fn estimate(&self, from: Point, to: Point) -> f64 {
        match self.movement {
            Movement::Cardinal => f64::from(manhattan(from, to)),
            Movement::Diagonal => octile(from, to),
        }
    }
}
