//! Generation driver
//!
//! Owns all state of one run: the random source, occupancy and history.
//! The first iteration places the origin room; each later iteration asks the
//! [`PlacementPolicy`] for one slot and places at most one room. Iterations
//! that find nothing are skipped, never retried.

use std::collections::VecDeque;

use crate::candidates::Candidate;
use crate::config::GenerationConfig;
use crate::grid::{to_grid_key, LastDirection, WorldPosition};
use crate::history::{PlacedRoom, PlacementHistory, PlacementKind};
use crate::occupancy::OccupancyTracker;
use crate::policy::PlacementPolicy;
use crate::rng::GenerationRng;
use crate::sink::PlacementSink;
use crate::stats::GenerationStats;

/// Generate a layout and return its rooms in placement order
pub fn generate(config: &GenerationConfig) -> Vec<PlacedRoom> {
    LevelGenerator::new(config.clone()).run().into_rooms()
}

/// Generate a layout, then hand every room to `sink` in placement order
pub fn generate_into<S: PlacementSink + ?Sized>(
    config: &GenerationConfig,
    sink: &mut S,
) -> GeneratedLevel {
    let level = LevelGenerator::new(config.clone()).run();
    level.emit(sink);
    level
}

/// Finished layout of one run
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedLevel {
    rooms: Vec<PlacedRoom>,
    seed: u64,
    stats: GenerationStats,
}

impl GeneratedLevel {
    pub fn rooms(&self) -> &[PlacedRoom] {
        &self.rooms
    }

    /// Seed the run used, after defaulting
    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn stats(&self) -> &GenerationStats {
        &self.stats
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// Send every room to `sink` in placement order
    pub fn emit<S: PlacementSink + ?Sized>(&self, sink: &mut S) {
        for room in &self.rooms {
            sink.on_room_placed(room);
        }
    }

    pub fn into_rooms(self) -> Vec<PlacedRoom> {
        self.rooms
    }
}

impl IntoIterator for GeneratedLevel {
    type Item = PlacedRoom;
    type IntoIter = std::vec::IntoIter<PlacedRoom>;

    fn into_iter(self) -> Self::IntoIter {
        self.rooms.into_iter()
    }
}

impl<'a> IntoIterator for &'a GeneratedLevel {
    type Item = &'a PlacedRoom;
    type IntoIter = std::slice::Iter<'a, PlacedRoom>;

    fn into_iter(self) -> Self::IntoIter {
        self.rooms.iter()
    }
}

/// Step-by-step generator for one run
#[derive(Debug, Clone)]
pub struct LevelGenerator {
    config: GenerationConfig,
    policy: PlacementPolicy,
    rng: GenerationRng,
    occupancy: OccupancyTracker,
    history: PlacementHistory,
    stats: GenerationStats,
    iteration: usize,
}

impl LevelGenerator {
    pub fn new(config: GenerationConfig) -> Self {
        let seed = config.effective_seed();
        if config.variants().is_empty() && config.room_count() > 0 {
            log::warn!("room variant catalog is empty, no rooms will be placed");
        }
        log::info!(
            "generating {} rooms from {} variants with seed {}",
            config.room_count(),
            config.variants().len(),
            seed
        );

        Self {
            policy: PlacementPolicy::from_config(&config),
            rng: GenerationRng::new(seed),
            occupancy: OccupancyTracker::new(),
            history: PlacementHistory::new(config.room_count()),
            stats: GenerationStats::new(config.room_count()),
            iteration: 0,
            config,
        }
    }

    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }

    pub fn history(&self) -> &PlacementHistory {
        &self.history
    }

    pub fn occupancy(&self) -> &OccupancyTracker {
        &self.occupancy
    }

    pub fn last_direction(&self) -> LastDirection {
        self.history.last_direction()
    }

    /// Iterations run so far, placed or skipped
    pub fn iteration(&self) -> usize {
        self.iteration
    }

    pub fn is_finished(&self) -> bool {
        self.iteration >= self.config.room_count()
    }

    /// Rooms extensions may still continue from, oldest first
    pub fn path_queue(&self) -> &VecDeque<WorldPosition> {
        self.history.path_queue()
    }

    /// Run the first iteration: the origin room at world `(0, 0)`.
    ///
    /// Returns `None` once the first iteration has run, for a zero-room run,
    /// or when the catalog is empty. [`step`](Self::step) calls this on its
    /// first iteration.
    pub fn place_origin(&mut self) -> Option<PlacedRoom> {
        if self.iteration != 0 || self.is_finished() {
            return None;
        }
        self.iteration = 1;

        if self.config.variants().is_empty() {
            self.stats.record_skip();
            return None;
        }

        let world = WorldPosition::ORIGIN;
        let candidate = Candidate {
            world,
            position: to_grid_key(world, self.policy.room_size()),
        };
        let room = self.commit(candidate, PlacementKind::Origin);
        if room.is_none() {
            self.skip(0);
        }
        room
    }

    /// Run one iteration. Returns the room it placed, if any.
    pub fn step(&mut self) -> Option<PlacedRoom> {
        if self.iteration == 0 {
            return self.place_origin();
        }
        if self.is_finished() {
            return None;
        }
        let iteration = self.iteration;
        self.iteration += 1;

        if self.config.variants().is_empty() {
            self.stats.record_skip();
            return None;
        }

        let room = self
            .policy
            .attempt(&self.occupancy, &self.history, &mut self.rng)
            .and_then(|p| self.commit(p.candidate, p.kind));
        if room.is_none() {
            self.skip(iteration);
        }
        room
    }

    /// Run all remaining iterations
    pub fn run(mut self) -> GeneratedLevel {
        while !self.is_finished() {
            self.step();
        }
        self.finish()
    }

    /// Stop here and return what has been placed
    pub fn finish(self) -> GeneratedLevel {
        log::info!(
            "placed {} of {} rooms ({} dead ends, {} loops, {} skipped)",
            self.stats.placed,
            self.stats.requested,
            self.stats.dead_ends,
            self.stats.loops,
            self.stats.skipped
        );
        GeneratedLevel {
            seed: self.rng.seed(),
            stats: self.stats,
            rooms: self.history.into_rooms(),
        }
    }

    fn commit(&mut self, candidate: Candidate, kind: PlacementKind) -> Option<PlacedRoom> {
        if !self.occupancy.insert(candidate.position) {
            return None;
        }
        let variant = self.rng.rn2(self.config.variants().len());
        let room = PlacedRoom {
            variant,
            position: candidate.position,
            world: candidate.world,
            kind,
        };
        self.history.record(room);
        self.stats.record(&room);
        debug_assert_eq!(self.occupancy.len(), self.history.len());
        Some(room)
    }

    fn skip(&mut self, iteration: usize) {
        log::debug!("iteration {iteration}: no free slot, skipped");
        self.stats.record_skip();
    }
}
