//! Summary of a generation run

use serde::{Deserialize, Serialize};

use crate::grid::GridPosition;
use crate::history::{PlacedRoom, PlacementKind};

/// Inclusive bounding box of grid keys
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridBounds {
    pub min: GridPosition,
    pub max: GridPosition,
}

impl GridBounds {
    fn around(pos: GridPosition) -> Self {
        Self { min: pos, max: pos }
    }

    fn include(&mut self, pos: GridPosition) {
        self.min.x = self.min.x.min(pos.x);
        self.min.z = self.min.z.min(pos.z);
        self.max.x = self.max.x.max(pos.x);
        self.max.z = self.max.z.max(pos.z);
    }
}

/// Counts collected over one run
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationStats {
    /// Iterations requested, including the origin
    pub requested: usize,
    pub placed: usize,
    /// Iterations that found no free slot or had no variant to place
    pub skipped: usize,
    pub extensions: usize,
    pub dead_ends: usize,
    pub loops: usize,
    pub bounds: Option<GridBounds>,
}

impl GenerationStats {
    pub fn new(requested: usize) -> Self {
        Self {
            requested,
            ..Self::default()
        }
    }

    pub(crate) fn record(&mut self, room: &PlacedRoom) {
        self.placed += 1;
        match room.kind {
            PlacementKind::Origin => {}
            PlacementKind::Extension => self.extensions += 1,
            PlacementKind::DeadEnd => self.dead_ends += 1,
            PlacementKind::Loop => self.loops += 1,
        }
        match &mut self.bounds {
            Some(bounds) => bounds.include(room.position),
            None => self.bounds = Some(GridBounds::around(room.position)),
        }
    }

    pub(crate) fn record_skip(&mut self) {
        self.skipped += 1;
    }
}
