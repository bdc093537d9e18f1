//! Candidate enumeration
//!
//! Free orthogonal neighbour slots around one room or around every room of a
//! run. Neighbours are always produced in +z, -z, +x, -x order.

use crate::grid::{to_grid_key, GridPosition, RoomSize, WorldPosition};
use crate::history::PlacedRoom;
use crate::occupancy::OccupancyTracker;

/// A free slot a room could be placed in
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Candidate {
    pub world: WorldPosition,
    pub position: GridPosition,
}

/// Unoccupied orthogonal neighbours of `world`
pub fn neighbors_of(
    world: WorldPosition,
    room_size: RoomSize,
    occupancy: &OccupancyTracker,
) -> Vec<Candidate> {
    room_size
        .offsets()
        .iter()
        .map(|&offset| {
            let world = world + offset;
            Candidate {
                world,
                position: to_grid_key(world, room_size),
            }
        })
        .filter(|c| !occupancy.contains(c.position))
        .collect()
}

/// Free neighbours of every room, concatenated in history order.
///
/// A slot next to several rooms appears once per room, which weights uniform
/// picks toward well-connected regions.
pub fn all_candidates(
    rooms: &[PlacedRoom],
    room_size: RoomSize,
    occupancy: &OccupancyTracker,
) -> Vec<Candidate> {
    rooms
        .iter()
        .flat_map(|room| neighbors_of(room.world, room_size, occupancy))
        .collect()
}

/// Number of the four orthogonal neighbours of `world` that hold a room
pub fn occupied_neighbor_count(
    world: WorldPosition,
    room_size: RoomSize,
    occupancy: &OccupancyTracker,
) -> usize {
    room_size
        .offsets()
        .iter()
        .filter(|&&offset| occupancy.contains(to_grid_key(world + offset, room_size)))
        .count()
}
