//! Placement policy
//!
//! Decides where the next room goes. Each attempt is independent and reads
//! only the occupancy and history of the run:
//!
//! 1. Draw the dead-end roll, then the loop roll.
//! 2. Loop: place a connector next to two or more rooms, if one exists.
//! 3. Gather the free neighbours of every room; stop if there are none.
//! 4. Dead end: branch off a random room, not continued as a path.
//! 5. Otherwise extend the path, biased toward the last movement direction.

use crate::candidates::{all_candidates, neighbors_of, occupied_neighbor_count, Candidate};
use crate::config::{GenerationConfig, ALIGNMENT_THRESHOLD, STRAIGHT_BIAS};
use crate::grid::{Direction, RoomSize};
use crate::history::{PlacementHistory, PlacementKind};
use crate::occupancy::OccupancyTracker;
use crate::rng::GenerationRng;

/// Connectors must touch at least this many placed rooms
pub const LOOP_MIN_NEIGHBORS: usize = 2;

/// Outcome of the two mode rolls of an attempt
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ModeRoll {
    pub wants_dead_end: bool,
    pub wants_loop: bool,
}

/// Where a room should go and why
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Placement {
    pub candidate: Candidate,
    pub kind: PlacementKind,
}

/// Probabilities and spacing driving each placement attempt
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PlacementPolicy {
    dead_end_probability: f32,
    loop_probability: f32,
    room_size: RoomSize,
}

impl PlacementPolicy {
    pub fn new(dead_end_probability: f32, loop_probability: f32, room_size: RoomSize) -> Self {
        Self {
            dead_end_probability,
            loop_probability,
            room_size,
        }
    }

    pub fn from_config(config: &GenerationConfig) -> Self {
        Self::new(
            config.dead_end_probability(),
            config.loop_probability(),
            config.room_size(),
        )
    }

    pub fn room_size(&self) -> RoomSize {
        self.room_size
    }

    /// Draw the dead-end roll, then the loop roll. Both are drawn whatever
    /// the history length.
    pub fn roll_mode(&self, history_len: usize, rng: &mut GenerationRng) -> ModeRoll {
        let dead_end_roll = rng.unit();
        let loop_roll = rng.unit();
        ModeRoll {
            wants_dead_end: dead_end_roll < self.dead_end_probability && history_len > 1,
            wants_loop: loop_roll < self.loop_probability && history_len > 2,
        }
    }

    /// Choose the next room position, or `None` if no slot is free.
    pub fn attempt(
        &self,
        occupancy: &OccupancyTracker,
        history: &PlacementHistory,
        rng: &mut GenerationRng,
    ) -> Option<Placement> {
        let roll = self.roll_mode(history.len(), rng);

        // Loop takes precedence over dead end
        if roll.wants_loop {
            let connectors = self.loop_connectors(occupancy, history);
            if let Some(&candidate) = rng.choose(&connectors) {
                log::debug!(
                    "loop connector at ({}, {}) out of {} qualifying slots",
                    candidate.position.x,
                    candidate.position.z,
                    connectors.len()
                );
                return Some(Placement {
                    candidate,
                    kind: PlacementKind::Loop,
                });
            }
        }

        let candidates = all_candidates(history.rooms(), self.room_size, occupancy);
        if candidates.is_empty() {
            return None;
        }

        if roll.wants_dead_end {
            let candidate = self.dead_end(occupancy, history, &candidates, rng)?;
            return Some(Placement {
                candidate,
                kind: PlacementKind::DeadEnd,
            });
        }

        let candidate = self.biased_pick(history, &candidates, rng)?;
        Some(Placement {
            candidate,
            kind: PlacementKind::Extension,
        })
    }

    /// Free slots touching at least [`LOOP_MIN_NEIGHBORS`] placed rooms.
    ///
    /// A slot is listed once per room it neighbours.
    pub fn loop_connectors(
        &self,
        occupancy: &OccupancyTracker,
        history: &PlacementHistory,
    ) -> Vec<Candidate> {
        history
            .rooms()
            .iter()
            .flat_map(|room| neighbors_of(room.world, self.room_size, occupancy))
            .filter(|c| {
                occupied_neighbor_count(c.world, self.room_size, occupancy) >= LOOP_MIN_NEIGHBORS
            })
            .collect()
    }

    fn dead_end(
        &self,
        occupancy: &OccupancyTracker,
        history: &PlacementHistory,
        candidates: &[Candidate],
        rng: &mut GenerationRng,
    ) -> Option<Candidate> {
        let anchor = rng.choose(history.rooms())?;
        let local = neighbors_of(anchor.world, self.room_size, occupancy);
        if local.is_empty() {
            rng.choose(candidates).copied()
        } else {
            rng.choose(&local).copied()
        }
    }

    /// Uniform pick over `candidates`, biased toward continuing straight.
    pub fn biased_pick(
        &self,
        history: &PlacementHistory,
        candidates: &[Candidate],
        rng: &mut GenerationRng,
    ) -> Option<Candidate> {
        let (Some(last_dir), Some(last_room)) = (history.last_direction().get(), history.last())
        else {
            return rng.choose(candidates).copied();
        };

        let (straight, turn): (Vec<Candidate>, Vec<Candidate>) =
            candidates.iter().partition(|c| {
                Direction::between(last_room.world, c.world)
                    .is_some_and(|dir| dir.dot(last_dir) > ALIGNMENT_THRESHOLD)
            });

        let (first, second) = if rng.unit() < STRAIGHT_BIAS {
            (&straight, &turn)
        } else {
            (&turn, &straight)
        };

        let pool: &[Candidate] = if !first.is_empty() {
            first
        } else if !second.is_empty() {
            second
        } else {
            candidates
        };
        rng.choose(pool).copied()
    }
}
