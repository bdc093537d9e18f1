//! Grid occupancy tracking
//!
//! One entry per placed room. The set only grows during a run.

use hashbrown::HashSet;

use crate::grid::GridPosition;

/// Set of grid keys already holding a room
#[derive(Debug, Clone, Default)]
pub struct OccupancyTracker {
    occupied: HashSet<GridPosition>,
}

impl OccupancyTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if a room already sits at `pos`
    #[inline]
    pub fn contains(&self, pos: GridPosition) -> bool {
        self.occupied.contains(&pos)
    }

    /// Mark `pos` occupied. Returns false if it already was.
    pub fn insert(&mut self, pos: GridPosition) -> bool {
        self.occupied.insert(pos)
    }

    pub fn len(&self) -> usize {
        self.occupied.len()
    }

    pub fn is_empty(&self) -> bool {
        self.occupied.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &GridPosition> {
        self.occupied.iter()
    }
}
