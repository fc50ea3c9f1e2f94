//! A* and greedy best-first search over a [`Pathfinder`]'s node arena.

use std::collections::BinaryHeap;

use fortress_core::Point;

use crate::config::SearchMode;
use crate::pathfinder::{NodeRef, Pathfinder};
use crate::traits::AstarPather;

impl Pathfinder {
    /// Compute a lowest-cost path from `from` to `to` using A*.
    ///
    /// Returns the full path (including both endpoints) or `None` if no path
    /// exists, either endpoint is outside the range or not passable, or the
    /// open set grows to one entry per cell of the range.
    pub fn astar_path<P: AstarPather>(
        &mut self,
        pather: &P,
        from: Point,
        to: Point,
    ) -> Option<Vec<Point>> {
        self.find_path(pather, from, to, SearchMode::AStar, None)
    }

    /// Compute a path from `from` to `to` by greedy best-first search.
    ///
    /// The open set is ordered by the heuristic alone, so the result heads
    /// straight for the goal but is not necessarily the cheapest route.
    pub fn best_first_path<P: AstarPather>(
        &mut self,
        pather: &P,
        from: Point,
        to: Point,
    ) -> Option<Vec<Point>> {
        self.find_path(pather, from, to, SearchMode::BestFirst, None)
    }

    pub(crate) fn find_path<P: AstarPather>(
        &mut self,
        pather: &P,
        from: Point,
        to: Point,
        mode: SearchMode,
        max_open: Option<usize>,
    ) -> Option<Vec<Point>> {
        let (Some(start_idx), Some(goal_idx)) = (self.idx(from), self.idx(to)) else {
            log::debug!("search {from} -> {to} rejected: outside {}", self.rng);
            return None;
        };
        if !pather.passable(from) || !pather.passable(to) {
            log::debug!("search {from} -> {to} rejected: endpoint not passable");
            return None;
        }
        if start_idx == goal_idx {
            return Some(vec![from]);
        }

        let limit = max_open.map_or(self.rng.len(), |m| m.min(self.rng.len()));
        let cur_gen = self.next_generation();

        let start_h = pather.estimate(from, to);
        {
            let node = &mut self.nodes[start_idx];
            node.g = 0.0;
            node.parent = usize::MAX;
            node.generation = cur_gen;
            node.closed = false;
        }

        let mut seq: u64 = 0;
        let mut open: BinaryHeap<NodeRef> = BinaryHeap::new();
        open.push(NodeRef {
            idx: start_idx,
            priority: start_h,
            g: 0.0,
            seq,
        });

        let mut nbuf = std::mem::take(&mut self.nbuf);
        let mut expanded = 0usize;

        let found = 'search: loop {
            let Some(current) = open.pop() else {
                log::debug!("search {from} -> {to}: no path ({expanded} nodes expanded)");
                break 'search false;
            };

            let ci = current.idx;
            // Skip entries superseded by a cheaper route, and closed nodes.
            if self.nodes[ci].closed || current.g > self.nodes[ci].g {
                continue;
            }

            if ci == goal_idx {
                break 'search true;
            }

            self.nodes[ci].closed = true;
            expanded += 1;
            let current_g = self.nodes[ci].g;
            let current_point = self.point(ci);

            nbuf.clear();
            pather.neighbors(current_point, &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = self.idx(np) else {
                    continue;
                };
                let tentative_g = current_g + pather.cost(current_point, np);

                let n = &mut self.nodes[ni];
                if n.generation == cur_gen {
                    if n.closed || tentative_g >= n.g {
                        continue;
                    }
                } else {
                    n.generation = cur_gen;
                    n.closed = false;
                }

                let h = pather.estimate(np, to);
                n.g = tentative_g;
                n.parent = ci;

                seq += 1;
                open.push(NodeRef {
                    idx: ni,
                    priority: match mode {
                        SearchMode::AStar => tentative_g + h,
                        SearchMode::BestFirst => h,
                    },
                    g: tentative_g,
                    seq,
                });
            }

            if open.len() >= limit {
                log::debug!(
                    "search {from} -> {to} aborted: open set reached {} entries",
                    open.len()
                );
                break 'search false;
            }
        };

        self.nbuf = nbuf;

        if !found {
            return None;
        }

        // Reconstruct path.
        let mut path = Vec::new();
        let mut ci = goal_idx;
        while ci != usize::MAX {
            path.push(self.point(ci));
            ci = self.nodes[ci].parent;
        }
        path.reverse();
        log::trace!(
            "search {from} -> {to}: {} steps, cost {}, {expanded} nodes expanded",
            path.len(),
            self.nodes[goal_idx].g
        );
        Some(path)
    }
}
