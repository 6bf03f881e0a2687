//! **mazechase-core**: foundational types for the maze-chase engine.
//!
//! This crate provides geometry primitives, the [`CellCode`] cell contents,
//! and [`GridMap`], the maze storage consumed by the generator and the path
//! finder. [`SharedGridMap`] wraps a map for concurrent read-mostly use.

pub mod cell;
pub mod error;
pub mod geom;
pub mod grid;
pub mod shared;

pub use cell::CellCode;
pub use error::{GridError, Result};
pub use geom::{Point, Range};
pub use grid::GridMap;
pub use shared::SharedGridMap;
