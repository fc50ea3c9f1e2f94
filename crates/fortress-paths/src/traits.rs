use fortress_core::Point;

/// Minimal pathfinding interface — provides neighbor enumeration.
pub trait Pather {
    /// Append neighbors of `p` into `buf`. The caller clears `buf` before calling.
    ///
    /// The order neighbors are appended in is the order they are pushed onto
    /// the open set, so it decides which of several equal-cost routes wins.
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>);

    /// Whether a search may start or end at `p`.
    fn passable(&self, _p: Point) -> bool {
        true
    }
}

/// Pather with weighted (positive-cost) edges.
pub trait WeightedPather: Pather {
    /// Cost of moving from `from` to adjacent `to`. Must be > 0.
    fn cost(&self, from: Point, to: Point) -> f64;
}

/// Full A* pather with a heuristic.
pub trait AstarPather: WeightedPather {
    /// Heuristic estimate of the cost from `from` to `to`.
    /// A* paths are optimal only when this never overestimates.
    fn estimate(&self, from: Point, to: Point) -> f64;
}
