//! Placement history
//!
//! Ordered record of every room placed in a run, the bounded queue of path
//! rooms, and the last movement direction.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::grid::{GridPosition, LastDirection, WorldPosition};

/// How a room came to be placed
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlacementKind {
    /// The first room, always at the origin
    Origin,
    /// Direction-biased continuation of the path
    Extension,
    /// Branch off an arbitrary existing room, not continued
    DeadEnd,
    /// Connector adjacent to two or more existing rooms
    Loop,
}

impl PlacementKind {
    /// Whether rooms of this kind join the path queue
    pub fn extends_path(self) -> bool {
        matches!(self, PlacementKind::Extension | PlacementKind::Loop)
    }
}

/// A room placed by the generator
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlacedRoom {
    /// Index into the variant catalog
    pub variant: usize,
    pub position: GridPosition,
    pub world: WorldPosition,
    pub kind: PlacementKind,
}

/// Everything a run has placed so far
#[derive(Debug, Clone)]
pub struct PlacementHistory {
    rooms: Vec<PlacedRoom>,
    path: VecDeque<WorldPosition>,
    path_capacity: usize,
    last_direction: LastDirection,
}

impl PlacementHistory {
    /// Create an empty history for a run of `room_count` rooms.
    ///
    /// The path queue holds at most `room_count / 2` entries.
    pub fn new(room_count: usize) -> Self {
        Self {
            rooms: Vec::with_capacity(room_count),
            path: VecDeque::new(),
            path_capacity: room_count / 2,
            last_direction: LastDirection::Unset,
        }
    }

    pub fn rooms(&self) -> &[PlacedRoom] {
        &self.rooms
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    pub fn last(&self) -> Option<&PlacedRoom> {
        self.rooms.last()
    }

    pub fn path_queue(&self) -> &VecDeque<WorldPosition> {
        &self.path
    }

    pub fn path_capacity(&self) -> usize {
        self.path_capacity
    }

    pub fn last_direction(&self) -> LastDirection {
        self.last_direction
    }

    /// Append a room, enqueue it on the path if its kind extends the path,
    /// and point the last direction from the previously last room to it.
    pub(crate) fn record(&mut self, room: PlacedRoom) {
        if let Some(prev) = self.rooms.last() {
            self.last_direction.update(prev.world, room.world);
        }
        self.rooms.push(room);

        if room.kind.extends_path() {
            self.path.push_back(room.world);
            while self.path.len() > self.path_capacity {
                self.path.pop_front();
            }
        }
    }

    pub(crate) fn into_rooms(self) -> Vec<PlacedRoom> {
        self.rooms
    }
}
