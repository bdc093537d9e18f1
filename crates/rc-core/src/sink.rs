//! Placement sinks
//!
//! A sink is whatever turns placed rooms into something visible: an engine
//! spawning prefabs, a debug renderer, a test recorder. It receives rooms in
//! placement order and returns nothing the generator could act on.

use crate::history::PlacedRoom;

/// Receiver of placement events
pub trait PlacementSink {
    fn on_room_placed(&mut self, room: &PlacedRoom);
}

impl PlacementSink for Vec<PlacedRoom> {
    fn on_room_placed(&mut self, room: &PlacedRoom) {
        self.push(*room);
    }
}

impl<F> PlacementSink for F
where
    F: FnMut(&PlacedRoom),
{
    fn on_room_placed(&mut self, room: &PlacedRoom) {
        self(room)
    }
}
