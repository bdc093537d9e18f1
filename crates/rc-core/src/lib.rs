//! rc-core: seeded room-chain layout generation
//!
//! Lays out a connected chain of rooms on a 2D grid: corridors that tend to
//! run straight, dead-end branches, and loops where a new room touches two
//! existing ones. A run is fully determined by its [`GenerationConfig`].
//!
//! This crate only decides positions. Whatever instantiates the rooms
//! implements [`PlacementSink`] and receives them in placement order.
//!
//! ```
//! use rc_core::{generate, GenerationConfig, GridPosition};
//!
//! let config = GenerationConfig::builder()
//!     .variants(["hall", "crypt", "shrine"])
//!     .room_count(10)
//!     .seed(1234)
//!     .build()
//!     .unwrap();
//! let rooms = generate(&config);
//! assert_eq!(rooms[0].position, GridPosition::ORIGIN);
//! assert!(rooms.len() <= 10);
//! ```

pub mod candidates;
pub mod config;
pub mod error;
pub mod generator;
pub mod grid;
pub mod history;
pub mod occupancy;
pub mod policy;
pub mod rng;
pub mod sink;
pub mod stats;

pub use candidates::{all_candidates, neighbors_of, occupied_neighbor_count, Candidate};
pub use config::{GenerationConfig, GenerationConfigBuilder, RawGenerationConfig};
pub use error::ConfigError;
pub use generator::{generate, generate_into, GeneratedLevel, LevelGenerator};
pub use grid::{to_grid_key, Direction, GridPosition, LastDirection, RoomSize, WorldPosition};
pub use history::{PlacedRoom, PlacementHistory, PlacementKind};
pub use occupancy::OccupancyTracker;
pub use policy::{ModeRoll, Placement, PlacementPolicy};
pub use rng::{GenerationRng, DEFAULT_SEED};
pub use sink::PlacementSink;
pub use stats::{GenerationStats, GridBounds};
