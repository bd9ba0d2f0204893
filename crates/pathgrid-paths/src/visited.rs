use std::collections::HashSet;

use pathgrid_core::PosId;

/// Closed set of an A* search: positions that have been expanded.
///
/// Expanded positions are never reopened. This is sound only while step costs
/// are uniform and the heuristic is consistent.
#[derive(Debug, Default)]
pub(crate) struct VisitedSet {
    seen: HashSet<PosId>,
}

impl VisitedSet {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub(crate) fn contains(&self, id: PosId) -> bool {
        self.seen.contains(&id)
    }

    /// Mark `id` expanded. Returns `false` if it already was.
    #[inline]
    pub(crate) fn mark(&mut self, id: PosId) -> bool {
        self.seen.insert(id)
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.seen.len()
    }
}
