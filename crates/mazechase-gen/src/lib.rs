//! Procedural maze generation for maze-chase games.
//!
//! [`generate`] builds a seeded, connected maze: a randomized frontier carve
//! produces a perfect maze, then a braiding pass opens extra passages next to
//! dead ends so pursuers and the player have loops to run around.
//! [`MazeGen`] exposes the individual passes for callers that bring their own
//! RNG or want to inspect the maze between steps.

pub mod collectibles;
pub mod config;
pub mod maze;
pub mod stats;

pub use collectibles::{random_floor, scatter_collectibles};
pub use config::MazeConfig;
pub use maze::{MIN_SIDE, MazeGen, generate, generate_with, normalize_dimensions};
pub use stats::{MazeStats, is_connected};
