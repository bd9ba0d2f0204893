use std::collections::VecDeque;

use pathgrid_core::{Passability, Point, Range};

use crate::neighbors::Neighbors;

/// Sentinel distance for cells the source cannot reach.
pub const UNREACHABLE: i32 = i32::MAX;

/// Unit-cost distances from one source to every cell of a map.
#[derive(Debug, Clone)]
pub struct DistanceMap {
    range: Range,
    dist: Vec<i32>,
}

impl DistanceMap {
    /// Distance to `p`, or [`UNREACHABLE`] if `p` was not reached or lies
    /// outside the map.
    pub fn at(&self, p: Point) -> i32 {
        slot(self.range, p).map_or(UNREACHABLE, |i| self.dist[i])
    }

    /// Number of cells reached, the source included.
    pub fn reachable(&self) -> usize {
        self.dist.iter().filter(|&&d| d != UNREACHABLE).count()
    }
}

/// Offset of `p` in a row-major table covering `range`, which need not start
/// at the origin.
fn slot(range: Range, p: Point) -> Option<usize> {
    if !range.contains(p) {
        return None;
    }
    Some(((p.y - range.min.y) * range.width() + (p.x - range.min.x)) as usize)
}

/// Compute a breadth-first distance map from `source`.
///
/// Each step has cost 1 and only passable cells are entered. The source
/// itself is at distance 0 whatever its own passability. An out-of-bounds
/// source reaches nothing.
pub fn bfs_distances<M: Passability>(map: &M, source: Point) -> DistanceMap {
    let range = map.bounds();
    let mut dist = vec![UNREACHABLE; range.len()];

    let Some(si) = slot(range, source) else {
        return DistanceMap { range, dist };
    };
    dist[si] = 0;

    let mut queue: VecDeque<Point> = VecDeque::new();
    queue.push_back(source);
    let mut nbuf = Neighbors::new();

    while let Some(cp) = queue.pop_front() {
        let Some(ci) = slot(range, cp) else { continue };
        let nd = dist[ci] + 1;
        for &np in nbuf.cardinal(cp, |p| map.passable(p)) {
            let Some(ni) = slot(range, np) else { continue };
            if dist[ni] != UNREACHABLE {
                continue;
            }
            dist[ni] = nd;
            queue.push_back(np);
        }
    }

    DistanceMap { range, dist }
}
