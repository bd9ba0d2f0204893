use log::{debug, trace};
use pathgrid_core::{Passability, Point, PosId};

use crate::distance::manhattan;
use crate::error::{Endpoint, PathError, Result};
use crate::frontier::Frontier;
use crate::neighbors::Neighbors;
use crate::registry::{NodeId, NodeRegistry, SearchNode};
use crate::visited::VisitedSet;

// ---------------------------------------------------------------------------
// Results
// ---------------------------------------------------------------------------

/// A shortest path found by [`astar_path`].
///
/// The path is stored as the cells entered after leaving the start, so
/// [`len`](Path::len) is the number of steps and the last step is the goal.
/// When start and goal coincide the path has no steps.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    start: Point,
    steps: Vec<Point>,
}

impl Path {
    /// Where the path begins.
    #[inline]
    pub fn start(&self) -> Point {
        self.start
    }

    /// Where the path ends.
    #[inline]
    pub fn goal(&self) -> Point {
        self.steps.last().copied().unwrap_or(self.start)
    }

    /// Cells entered, in order, ending with the goal.
    #[inline]
    pub fn steps(&self) -> &[Point] {
        &self.steps
    }

    /// Number of steps.
    #[inline]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether start and goal are the same cell.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Identifiers of the steps on a map `width` cells wide.
    pub fn ids(&self, width: i32) -> impl Iterator<Item = PosId> + '_ {
        self.steps.iter().map(move |&p| PosId::of(p, width))
    }

    /// Write the step identifiers into `out` and return how many slots were
    /// filled.
    ///
    /// A path without steps writes the goal's own identifier to slot 0, so it
    /// still needs one slot. Nothing is written if `out` is too short.
    pub fn write_ids(&self, out: &mut [i32], width: i32) -> Result<usize> {
        let needed = self.steps.len().max(1);
        if out.len() < needed {
            return Err(PathError::CapacityExceeded {
                capacity: out.len(),
            });
        }
        if self.steps.is_empty() {
            out[0] = PosId::of(self.start, width).value();
            return Ok(1);
        }
        for (slot, id) in out.iter_mut().zip(self.ids(width)) {
            *slot = id.value();
        }
        Ok(self.steps.len())
    }
}

/// Counters describing the work done by one search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchStats {
    /// Positions popped from the frontier and expanded.
    pub expanded: usize,
    /// Nodes allocated in the registry.
    pub created: usize,
    /// Largest number of nodes waiting in the frontier at once.
    pub frontier_peak: usize,
    /// Frontier nodes moved onto a cheaper route after discovery.
    pub relaxed: usize,
}

// ---------------------------------------------------------------------------
// Entry points
// ---------------------------------------------------------------------------

/// Compute a shortest 4-directional path from `from` to `to` using A*.
///
/// `capacity` bounds the number of steps: if no path of at most `capacity`
/// steps exists the search fails with [`PathError::CapacityExceeded`]
/// instead of returning a longer one.
pub fn astar_path<M: Passability>(map: &M, from: Point, to: Point, capacity: usize) -> Result<Path> {
    astar_path_with_stats(map, from, to, capacity).map(|(path, _)| path)
}

/// Like [`astar_path`], also reporting how much of the map was explored.
pub fn astar_path_with_stats<M: Passability>(
    map: &M,
    from: Point,
    to: Point,
    capacity: usize,
) -> Result<(Path, SearchStats)> {
    let start_id = map.id(from).ok_or(PathError::OutOfBounds {
        endpoint: Endpoint::Start,
        point: from,
    })?;
    let goal_id = map.id(to).ok_or(PathError::OutOfBounds {
        endpoint: Endpoint::Goal,
        point: to,
    })?;

    if start_id == goal_id {
        let path = Path {
            start: from,
            steps: Vec::new(),
        };
        return Ok((path, SearchStats::default()));
    }

    Search::new(map, to, goal_id).run(from, start_id, capacity)
}

/// Whether `to` can be reached from `from` at all.
pub fn path_exists<M: Passability>(map: &M, from: Point, to: Point) -> bool {
    astar_path(map, from, to, usize::MAX).is_ok()
}

// ---------------------------------------------------------------------------
// Search state
// ---------------------------------------------------------------------------

/// State of a single search. Everything is dropped when the search returns.
struct Search<'m, M> {
    map: &'m M,
    goal: Point,
    goal_id: PosId,
    width: i32,
    registry: NodeRegistry,
    frontier: Frontier,
    visited: VisitedSet,
    relaxed: usize,
}

impl<'m, M: Passability> Search<'m, M> {
    fn new(map: &'m M, goal: Point, goal_id: PosId) -> Self {
        Self {
            map,
            goal,
            goal_id,
            width: map.width(),
            registry: NodeRegistry::new(),
            frontier: Frontier::new(),
            visited: VisitedSet::new(),
            relaxed: 0,
        }
    }

    fn run(mut self, from: Point, start_id: PosId, capacity: usize) -> Result<(Path, SearchStats)> {
        let start = SearchNode::new(from, start_id, 0, manhattan(from, self.goal), None);
        let start_f = start.f;
        let root = self.registry.insert(start);
        self.frontier.push(root, start_id, start_f);

        let map = self.map;
        let mut neighbors = Neighbors::new();

        while let Some(ci) = self.frontier.pop_min() {
            let current = self.registry[ci];

            // Popped scores never decrease, so nothing left can fit either.
            if current.f as usize > capacity {
                debug!(
                    "search gave up at {}: f={} exceeds capacity {}",
                    current.pos, current.f, capacity
                );
                return Err(PathError::CapacityExceeded { capacity });
            }

            self.visited.mark(current.id);
            trace!(
                "expand {} g={} f={} open={}",
                current.pos,
                current.g,
                current.f,
                self.frontier.len()
            );

            if current.id == self.goal_id {
                let path = self.reconstruct(from, ci);
                let stats = self.stats();
                debug!(
                    "path {} -> {}: {} steps, {} expanded, {} created",
                    from,
                    self.goal,
                    path.len(),
                    stats.expanded,
                    stats.created
                );
                return Ok((path, stats));
            }

            let g = current.g + 1;
            for &np in neighbors.cardinal(current.pos, |p| map.passable(p)) {
                let id = PosId::of(np, self.width);
                if self.visited.contains(id) {
                    continue;
                }
                let h = manhattan(np, self.goal);

                match self.frontier.find(id) {
                    None => {
                        let node = self.registry.insert(SearchNode::new(np, id, g, h, Some(ci)));
                        self.frontier.push(node, id, g + h);
                    }
                    Some(ni) => {
                        let node = &mut self.registry[ni];
                        if node.f > g + h {
                            node.relax(g, ci);
                            let f = node.f;
                            let reordered = self.frontier.decrease_key(id, f);
                            debug_assert!(reordered, "{np} relaxed but not reordered");
                            self.relaxed += 1;
                            debug!("cheaper route to {np}: g={g} via {}", current.pos);
                        }
                    }
                }
            }
        }

        debug_assert!(self.frontier.is_empty());
        debug!(
            "no path {} -> {} after expanding {} cells",
            from,
            self.goal,
            self.visited.len()
        );
        Err(PathError::NoPath)
    }

    /// Follow parent links back from the goal node, dropping the start.
    fn reconstruct(&self, start: Point, goal: NodeId) -> Path {
        let mut steps: Vec<Point> = self
            .registry
            .ancestry(goal)
            .filter(|n| n.parent.is_some())
            .map(|n| n.pos)
            .collect();
        steps.reverse();
        debug_assert_eq!(steps.len(), self.registry[goal].g as usize);
        Path { start, steps }
    }

    fn stats(&self) -> SearchStats {
        SearchStats {
            expanded: self.visited.len(),
            created: self.registry.len(),
            frontier_peak: self.frontier.peak(),
            relaxed: self.relaxed,
        }
    }
}
