//! Grid-level entry points used by unit movement code.

use fortress_core::{Grid, Point};

use crate::config::SearchConfig;
use crate::grid_pather::GridPather;
use crate::path::{Path, Step};
use crate::pathfinder::Pathfinder;

impl Pathfinder {
    /// Find a path across `grid` from `from` to `to`.
    ///
    /// Returns `None` when either endpoint is out of bounds or a wall, when
    /// the goal cannot be reached, or when the search gives up after the open
    /// set grows to one entry per tile (or `config.max_open`). The grid is
    /// only read. If the grid's size differs from the current range the
    /// pathfinder is resized first.
    pub fn search(
        &mut self,
        grid: &Grid,
        from: Point,
        to: Point,
        config: &SearchConfig,
    ) -> Option<Path> {
        if self.rng != grid.bounds() {
            self.set_range(grid.bounds());
        }
        let pather = GridPather::new(grid, config);
        let points = self.find_path(&pather, from, to, config.mode, config.max_open)?;
        let steps = points
            .into_iter()
            .map(|pos| Step {
                pos,
                weight: pather.weight(pos),
            })
            .collect();
        Some(Path::new(steps))
    }
}

/// Find a lowest-cost cardinal path on `grid` between two tiles.
///
/// Uses a fresh [`Pathfinder`] and [`SearchConfig::default`]. Units that
/// re-plan often should keep their own `Pathfinder` and call
/// [`Pathfinder::search`] instead.
pub fn search_path(
    grid: &Grid,
    start_x: i32,
    start_y: i32,
    end_x: i32,
    end_y: i32,
) -> Option<Path> {
    Pathfinder::new(grid.bounds()).search(
        grid,
        Point::new(start_x, start_y),
        Point::new(end_x, end_y),
        &SearchConfig::default(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Movement, SearchMode};
    use fortress_core::{Cell, MAX_WEIGHT, Range};
    use fortress_mapgen::MapGen;
    use rand::rngs::StdRng;
    use rand::{RngExt, SeedableRng};

    fn open_grid(w: i32, h: i32) -> Grid {
        Grid::filled(w, h, Cell::FLOOR).unwrap()
    }

    fn assert_valid(grid: &Grid, path: &Path, from: Point, to: Point) {
        assert_eq!(path.first().map(|s| s.pos), Some(from));
        assert_eq!(path.last().map(|s| s.pos), Some(to));
        for w in path.steps().windows(2) {
            assert_eq!(crate::manhattan(w[0].pos, w[1].pos), 1, "gap in {path:?}");
        }
        assert!(path.points().all(|p| grid.is_passable(p)));
    }

    /// Cheapest cost from `from` to `to` over every simple path, by DFS.
    fn brute_force_cost(grid: &Grid, from: Point, to: Point) -> Option<f64> {
        fn dfs(
            grid: &Grid,
            p: Point,
            to: Point,
            seen: &mut Vec<Point>,
            g: f64,
            best: &mut Option<f64>,
        ) {
            if best.is_some_and(|b| g >= b) {
                return;
            }
            if p == to {
                *best = Some(g);
                return;
            }
            for (dx, dy) in [(1, 0), (-1, 0), (0, 1), (0, -1)] {
                let n = p.shift(dx, dy);
                if !grid.is_passable(n) || seen.contains(&n) {
                    continue;
                }
                seen.push(n);
                dfs(grid, n, to, seen, g + grid.weight(n).unwrap_or(1.0), best);
                seen.pop();
            }
        }
        if !grid.is_passable(from) || !grid.is_passable(to) {
            return None;
        }
        let mut best = None;
        dfs(grid, from, to, &mut vec![from], 0.0, &mut best);
        best
    }

    #[test]
    fn corner_to_corner_on_open_grid() {
        let g = open_grid(5, 5);
        let path = search_path(&g, 0, 0, 4, 4).unwrap();
        assert_eq!(path.len(), 9);
        assert_eq!(path.cost(), 8.0);
        assert_valid(&g, &path, Point::new(0, 0), Point::new(4, 4));
    }

    #[test]
    fn detours_through_gap_in_wall() {
        let mut g = open_grid(5, 5);
        g.fill_range(g.bounds().column(2), Cell::WALL);
        g.set(Point::new(2, 4), Cell::FLOOR);
        let path = search_path(&g, 0, 0, 4, 0).unwrap();
        assert!(path.points().any(|p| p == Point::new(2, 4)));
        assert_valid(&g, &path, Point::new(0, 0), Point::new(4, 0));
        assert_eq!(path.cost(), 12.0);
    }

    #[test]
    fn full_wall_row_blocks() {
        let mut g = open_grid(6, 5);
        g.fill_range(g.bounds().line(2), Cell::WALL);
        assert!(search_path(&g, 0, 0, 5, 4).is_none());
        assert!(search_path(&g, 3, 4, 0, 3).is_some());
    }

    #[test]
    fn start_equals_goal() {
        let g = Grid::parse("..\n.3").unwrap();
        let path = search_path(&g, 1, 1, 1, 1).unwrap();
        assert_eq!(path.len(), 1);
        assert_eq!(path.steps()[0].pos, Point::new(1, 1));
        assert_eq!(path.steps()[0].weight, 3.0);
        assert_eq!(path.cost(), 0.0);
    }

    #[test]
    fn invalid_queries_return_none() {
        let g = Grid::parse(
            "
...
.#.
...
",
        )
        .unwrap();
        assert!(search_path(&g, -1, 0, 2, 2).is_none());
        assert!(search_path(&g, 0, -1, 2, 2).is_none());
        assert!(search_path(&g, 3, 0, 2, 2).is_none());
        assert!(search_path(&g, 0, 3, 2, 2).is_none());
        assert!(search_path(&g, 0, 0, 2, 3).is_none());
        assert!(search_path(&g, 1, 1, 2, 2).is_none());
        assert!(search_path(&g, 0, 0, 1, 1).is_none());
        assert!(search_path(&g, 1, 1, 1, 1).is_none());
    }

    #[test]
    fn prefers_cheap_terrain() {
        let g = Grid::parse(
            "
.9.
...
",
        )
        .unwrap();
        let path = search_path(&g, 0, 0, 2, 0).unwrap();
        assert_eq!(path.cost(), 4.0);
        assert!(path.points().all(|p| p != Point::new(1, 0)));
    }

    #[test]
    fn search_does_not_mutate_grid() {
        let g = Grid::parse("1.2\n.#.\n3.4").unwrap();
        let before = g.clone();
        let _ = search_path(&g, 0, 0, 2, 2);
        assert_eq!(g, before);
    }

    #[test]
    fn unset_tiles_use_default_weight() {
        let g = Grid::parse("???\n.#.").unwrap();
        let cfg = SearchConfig::default().with_default_weight(3.0);
        let mut pf = Pathfinder::new(g.bounds());
        let path = pf
            .search(&g, Point::new(0, 0), Point::new(2, 0), &cfg)
            .unwrap();
        assert_eq!(path.cost(), 6.0);
        assert!(path.iter().all(|s| s.weight == 3.0));
        assert_eq!(search_path(&g, 0, 0, 2, 0).map(|p| p.cost()), Some(2.0));
    }

    #[test]
    fn repeated_searches_agree() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut mg = MapGen::new(20, 15, StdRng::seed_from_u64(11)).unwrap();
        mg.random_walls(0.25);
        let grid = mg.into_grid();
        let mut pf = Pathfinder::new(grid.bounds());
        for _ in 0..50 {
            let from = Point::new(rng.random_range(0..20), rng.random_range(0..15));
            let to = Point::new(rng.random_range(0..20), rng.random_range(0..15));
            let a = pf.search(&grid, from, to, &SearchConfig::default());
            let b = search_path(&grid, from.x, from.y, to.x, to.y);
            assert_eq!(a.map(|p| p.cost()), b.map(|p| p.cost()));
        }
    }

    #[test]
    fn astar_matches_exhaustive_search() {
        let mut rng = StdRng::seed_from_u64(42);
        for round in 0..40 {
            let mut grid = open_grid(4, 4);
            for p in Range::new(0, 0, 4, 4) {
                let roll: f64 = rng.random();
                let cell = if roll < 0.2 {
                    Cell::WALL
                } else {
                    Cell::new(f64::from(rng.random_range(1..6u8))).unwrap()
                };
                grid.set(p, cell);
            }
            let from = Point::new(rng.random_range(0..4), rng.random_range(0..4));
            let to = Point::new(rng.random_range(0..4), rng.random_range(0..4));

            let found = search_path(&grid, from.x, from.y, to.x, to.y);
            let expected = brute_force_cost(&grid, from, to);
            match (&found, expected) {
                (Some(path), Some(cost)) => {
                    assert_valid(&grid, path, from, to);
                    assert!(
                        (path.cost() - cost).abs() < 1e-9,
                        "round {round}: got {} expected {cost}",
                        path.cost()
                    );
                }
                (None, None) => {}
                _ => panic!("round {round}: {found:?} vs {expected:?}"),
            }
        }
    }

    #[test]
    fn best_first_finds_a_path_when_astar_does() {
        let mut mg = MapGen::new(24, 24, StdRng::seed_from_u64(3)).unwrap();
        mg.random_walls(0.3);
        let grid = mg.into_grid();
        let greedy = SearchConfig::default().with_mode(SearchMode::BestFirst);
        let mut pf = Pathfinder::new(grid.bounds());
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..40 {
            let from = Point::new(rng.random_range(0..24), rng.random_range(0..24));
            let to = Point::new(rng.random_range(0..24), rng.random_range(0..24));
            let optimal = pf.search(&grid, from, to, &SearchConfig::default());
            let fast = pf.search(&grid, from, to, &greedy);
            assert_eq!(optimal.is_some(), fast.is_some());
            if let (Some(o), Some(f)) = (optimal, fast) {
                assert_valid(&grid, &f, from, to);
                assert!(f.cost() >= o.cost() - 1e-9);
            }
        }
    }

    #[test]
    fn diagonal_movement() {
        let g = open_grid(5, 5);
        let cfg = SearchConfig::default().with_movement(Movement::Diagonal);
        let mut pf = Pathfinder::new(g.bounds());
        let path = pf
            .search(&g, Point::new(0, 0), Point::new(4, 4), &cfg)
            .unwrap();
        assert_eq!(path.len(), 5);
        assert!((path.cost() - 4.0 * 1.42).abs() < 1e-9);
    }

    #[test]
    fn diagonal_movement_respects_corners() {
        let g = Grid::parse(
            "
.#
#.
",
        )
        .unwrap();
        let cfg = SearchConfig::default().with_movement(Movement::Diagonal);
        let mut pf = Pathfinder::new(g.bounds());
        assert!(pf.search(&g, Point::new(0, 0), Point::new(1, 1), &cfg).is_none());
    }

    #[test]
    fn max_open_limits_search() {
        let g = open_grid(10, 10);
        let mut pf = Pathfinder::new(g.bounds());
        let tight = SearchConfig::default().with_max_open(1);
        assert!(pf.search(&g, Point::new(0, 0), Point::new(9, 9), &tight).is_none());
        let loose = SearchConfig::default().with_max_open(10_000);
        assert!(pf.search(&g, Point::new(0, 0), Point::new(9, 9), &loose).is_some());
    }

    #[test]
    fn adapts_to_regenerated_map_size() {
        let mut pf = Pathfinder::new(Range::new(0, 0, 3, 3));
        let big = open_grid(8, 6);
        let path = pf
            .search(&big, Point::new(0, 0), Point::new(7, 5), &SearchConfig::default())
            .unwrap();
        assert_eq!(pf.range(), big.bounds());
        assert_eq!(path.cost(), 12.0);
        let small = Grid::from_weights(2, 1, vec![1.0, MAX_WEIGHT]).unwrap();
        assert!(pf
            .search(&small, Point::new(0, 0), Point::new(1, 0), &SearchConfig::default())
            .is_none());
        assert_eq!(pf.range(), small.bounds());
    }

    #[test]
    fn agents_follow_waypoints() {
        let g = open_grid(4, 1);
        let path = search_path(&g, 0, 0, 3, 0).unwrap();
        let mut pos = Point::new(0, 0);
        let mut hops = 0;
        while let Some(next) = path.next_waypoint(pos) {
            pos = next.pos;
            hops += 1;
        }
        assert_eq!(pos, Point::new(3, 0));
        assert_eq!(hops, 3);
    }
}
