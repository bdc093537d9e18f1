//! Grid coordinates, room spacing and movement direction
//!
//! Rooms live in continuous space as sums of room-size steps. Positions are
//! only ever compared through [`to_grid_key`], which truncates toward zero.
//! Rounding instead would change which cells collide and therefore every
//! layout produced from a given seed.

use core::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

/// Integer grid key identifying one room slot.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridPosition {
    pub x: i32,
    pub z: i32,
}

impl GridPosition {
    pub const ORIGIN: GridPosition = GridPosition { x: 0, z: 0 };

    #[inline]
    pub const fn new(x: i32, z: i32) -> Self {
        Self { x, z }
    }
}

/// Continuous room coordinate on the ground plane.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct WorldPosition {
    pub x: f32,
    pub z: f32,
}

impl WorldPosition {
    pub const ORIGIN: WorldPosition = WorldPosition { x: 0.0, z: 0.0 };

    #[inline]
    pub const fn new(x: f32, z: f32) -> Self {
        Self { x, z }
    }

    #[inline]
    pub fn length(self) -> f32 {
        (self.x * self.x + self.z * self.z).sqrt()
    }
}

impl Add for WorldPosition {
    type Output = WorldPosition;

    fn add(self, rhs: Self) -> Self::Output {
        WorldPosition::new(self.x + rhs.x, self.z + rhs.z)
    }
}

impl Sub for WorldPosition {
    type Output = WorldPosition;

    fn sub(self, rhs: Self) -> Self::Output {
        WorldPosition::new(self.x - rhs.x, self.z - rhs.z)
    }
}

/// Spacing between neighbouring rooms along each axis.
///
/// Any positive finite size is accepted, but grid keys truncate world
/// positions, so along an axis with a step below 1.0 a neighbour can land
/// on the key of the room it came from and count as occupied. Layouts then
/// degenerate: with 0.5 × 0.5 every run stops after the origin room.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoomSize {
    pub x: f32,
    pub z: f32,
}

impl RoomSize {
    #[inline]
    pub const fn new(x: f32, z: f32) -> Self {
        Self { x, z }
    }

    /// Both steps are finite and strictly positive
    pub fn is_valid(&self) -> bool {
        self.x.is_finite() && self.z.is_finite() && self.x > 0.0 && self.z > 0.0
    }

    /// The four orthogonal step offsets, in enumeration order: +z, -z, +x, -x.
    ///
    /// Seeded draws index into lists built in this order, so it must not change.
    pub fn offsets(&self) -> [WorldPosition; 4] {
        [
            WorldPosition::new(0.0, self.z),
            WorldPosition::new(0.0, -self.z),
            WorldPosition::new(self.x, 0.0),
            WorldPosition::new(-self.x, 0.0),
        ]
    }

    /// Continuous position for a grid key, for collaborators that only kept the key.
    ///
    /// Exact when the room size is integral; otherwise the fractional part lost
    /// by truncation cannot be recovered.
    pub fn world_of(&self, grid: GridPosition) -> WorldPosition {
        WorldPosition::new(grid.x as f32, grid.z as f32)
    }
}

impl Default for RoomSize {
    fn default() -> Self {
        Self { x: 10.0, z: 10.0 }
    }
}

/// Quantize a continuous position to its grid key by truncation toward zero.
///
/// The room size is part of the signature so every comparison site names the
/// spacing it works in; keys are expressed in world units.
#[inline]
pub fn to_grid_key(world: WorldPosition, _room_size: RoomSize) -> GridPosition {
    GridPosition::new(world.x as i32, world.z as i32)
}

/// Unit-length movement direction.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Direction {
    x: f32,
    z: f32,
}

impl Direction {
    /// Normalized direction from `from` to `to`, or `None` if they coincide.
    pub fn between(from: WorldPosition, to: WorldPosition) -> Option<Self> {
        let delta = to - from;
        let len = delta.length();
        if len <= f32::EPSILON {
            return None;
        }
        Some(Self {
            x: delta.x / len,
            z: delta.z / len,
        })
    }

    #[inline]
    pub fn dot(self, other: Direction) -> f32 {
        self.x * other.x + self.z * other.z
    }

    pub fn x(self) -> f32 {
        self.x
    }

    pub fn z(self) -> f32 {
        self.z
    }
}

/// Last movement direction of a run; unset until a second room exists.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub enum LastDirection {
    #[default]
    Unset,
    Set(Direction),
}

impl LastDirection {
    pub fn get(self) -> Option<Direction> {
        match self {
            LastDirection::Unset => None,
            LastDirection::Set(dir) => Some(dir),
        }
    }

    /// Point from `from` toward `to`; a zero-length move keeps the previous value.
    pub fn update(&mut self, from: WorldPosition, to: WorldPosition) {
        if let Some(dir) = Direction::between(from, to) {
            *self = LastDirection::Set(dir);
        }
    }
}
