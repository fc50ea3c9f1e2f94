use fortress_core::Point;

use crate::distance::DIAGONAL_COST;

/// One tile of a [`Path`], annotated with its grid weight.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Step {
    pub pos: Point,
    pub weight: f64,
}

/// A route from start to goal, both inclusive.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    steps: Vec<Step>,
    cost: f64,
}

impl Path {
    /// Build a path from consecutive steps.
    ///
    /// The cost is the sum of the weights of every step but the first, with
    /// diagonal moves scaled by [`DIAGONAL_COST`].
    pub fn new(steps: Vec<Step>) -> Self {
        let cost = steps
            .windows(2)
            .map(|w| {
                let d = w[1].pos - w[0].pos;
                if d.x != 0 && d.y != 0 {
                    w[1].weight * DIAGONAL_COST
                } else {
                    w[1].weight
                }
            })
            .sum();
        Self { steps, cost }
    }

    /// Total traversal cost, start tile excluded.
    #[inline]
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Number of tiles, endpoints included.
    #[inline]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn first(&self) -> Option<&Step> {
        self.steps.first()
    }

    pub fn last(&self) -> Option<&Step> {
        self.steps.last()
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Step> {
        self.steps.iter()
    }

    /// Tile positions in order.
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        self.steps.iter().map(|s| s.pos)
    }

    /// The step after `from`, i.e. where a unit standing on `from` heads next.
    ///
    /// `None` when `from` is the goal or not on the path at all.
    pub fn next_waypoint(&self, from: Point) -> Option<&Step> {
        let i = self.steps.iter().position(|s| s.pos == from)?;
        self.steps.get(i + 1)
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Step;
    type IntoIter = std::slice::Iter<'a, Step>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}
