//! Map generation for fortress tile maps.
//!
//! Produces [`Grid`]s for pathfinding: scattered walls, cellular-automata
//! caves and patches of heavier terrain. All generators draw from the
//! caller's RNG, so a seeded RNG regenerates the same map.

use fortress_core::{Cell, Grid, GridError, Point};
use rand::{Rng, RngExt};

/// A rule for one iteration of cellular automata smoothing.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct CellularAutomataRule {
    /// If a cell has >= this many wall neighbors in the 1-ring (8 neighbors),
    /// it becomes a wall.
    pub w_cutoff1: i32,
    /// If a cell has <= this many wall neighbors in the 2-ring
    /// (24 neighbors), it becomes a wall.
    pub w_cutoff2: i32,
    /// Whether tiles outside the grid count as walls.
    pub walls_out_of_range: bool,
    /// How many times to apply this rule.
    pub reps: usize,
}

impl Default for CellularAutomataRule {
    fn default() -> Self {
        Self {
            w_cutoff1: 5,
            w_cutoff2: 2,
            walls_out_of_range: true,
            reps: 4,
        }
    }
}

/// Map generator writing into a [`Grid`].
pub struct MapGen<R: Rng> {
    pub rng: R,
    pub grid: Grid,
}

impl<R: Rng> MapGen<R> {
    /// Create a generator over a fresh `width` x `height` floor grid.
    pub fn new(width: i32, height: i32, rng: R) -> Result<Self, GridError> {
        Ok(Self::with_grid(Grid::filled(width, height, Cell::FLOOR)?, rng))
    }

    /// Create a generator over an existing grid.
    pub fn with_grid(grid: Grid, rng: R) -> Self {
        Self { rng, grid }
    }

    /// Consume the generator and return the map.
    pub fn into_grid(self) -> Grid {
        self.grid
    }

    /// Make each tile a wall with probability `wall_pct` (0.0–1.0) and
    /// plain floor otherwise.
    ///
    /// Returns the number of walls placed.
    pub fn random_walls(&mut self, wall_pct: f64) -> usize {
        let mut walls = 0;
        for p in self.grid.bounds() {
            let r: f64 = self.rng.random();
            if r < wall_pct {
                self.grid.set(p, Cell::WALL);
                walls += 1;
            } else {
                self.grid.set(p, Cell::FLOOR);
            }
        }
        log::debug!("random walls: {walls} of {} tiles", self.grid.len());
        walls
    }

    /// Generate a cave using cellular automata.
    ///
    /// 1. Each tile becomes a wall with probability `wall_init_pct`,
    ///    otherwise floor.
    /// 2. Each rule in `rules` is applied for its number of repetitions.
    ///
    /// Returns the number of passable tiles in the final grid.
    pub fn cellular_automata_cave(
        &mut self,
        wall_init_pct: f64,
        rules: &[CellularAutomataRule],
    ) -> usize {
        self.random_walls(wall_init_pct);

        let bounds = self.grid.bounds();
        let mut scratch = vec![Cell::FLOOR; self.grid.len()];

        for rule in rules {
            for _ in 0..rule.reps {
                for (i, p) in bounds.iter().enumerate() {
                    let walls1 = self.count_walls_ring(p, 1, rule.walls_out_of_range);
                    let walls2 = self.count_walls_ring(p, 2, rule.walls_out_of_range);
                    scratch[i] = if walls1 >= rule.w_cutoff1 || walls2 <= rule.w_cutoff2 {
                        Cell::WALL
                    } else {
                        Cell::FLOOR
                    };
                }
                for (p, &cell) in bounds.iter().zip(scratch.iter()) {
                    self.grid.set(p, cell);
                }
            }
        }

        let ground = self.grid.count_passable();
        log::debug!("cave: {ground} passable of {} tiles", self.grid.len());
        ground
    }

    /// Overlay `patches` blobs of `terrain` (mud, rubble, shallow water...)
    /// with the given Chebyshev `radius`, centred on random passable tiles.
    ///
    /// Walls are never overwritten. Returns the number of tiles changed.
    pub fn scatter_terrain(&mut self, terrain: Cell, patches: usize, radius: i32) -> usize {
        let mut changed = 0;
        for _ in 0..patches {
            let Some(center) = self.random_passable() else {
                break;
            };
            for dy in -radius..=radius {
                for dx in -radius..=radius {
                    let p = center.shift(dx, dy);
                    if !self.grid.is_passable(p) || self.grid.at(p) == Some(terrain) {
                        continue;
                    }
                    self.grid.set(p, terrain);
                    changed += 1;
                }
            }
        }
        changed
    }

    /// A random passable tile, or `None` if the map has none.
    ///
    /// Tries random positions first, then falls back to picking among all
    /// passable tiles.
    pub fn random_passable(&mut self) -> Option<Point> {
        let size = self.grid.size();
        for _ in 0..64 {
            let p = Point::new(
                self.rng.random_range(0..size.x),
                self.rng.random_range(0..size.y),
            );
            if self.grid.is_passable(p) {
                return Some(p);
            }
        }
        let open: Vec<Point> = self
            .grid
            .bounds()
            .iter()
            .filter(|&p| self.grid.is_passable(p))
            .collect();
        if open.is_empty() {
            return None;
        }
        Some(open[self.rng.random_range(0..open.len())])
    }

    /// Count wall tiles within Chebyshev distance `radius` of `center`.
    fn count_walls_ring(&self, center: Point, radius: i32, walls_out_of_range: bool) -> i32 {
        let mut count = 0;
        for dy in -radius..=radius {
            for dx in -radius..=radius {
                if dx == 0 && dy == 0 {
                    continue;
                }
                let p = center.shift(dx, dy);
                let wall = if self.grid.contains(p) {
                    !self.grid.is_passable(p)
                } else {
                    walls_out_of_range
                };
                if wall {
                    count += 1;
                }
            }
        }
        count
    }
}
