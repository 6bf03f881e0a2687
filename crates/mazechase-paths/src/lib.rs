//! A* route planning for maze-chase agents.
//!
//! Pursuers move in eight directions over a [`GridMap`](mazechase_core::GridMap):
//! orthogonal steps cost [`ORTHOGONAL_COST`], diagonal steps
//! [`DIAGONAL_COST`], and walls are impassable. [`PathFinder`] runs the
//! search and keeps its buffers between calls, so an agent replanning every
//! tick allocates nothing after warm-up. [`plan_all`] fans a batch of
//! requests out over rayon workers that share one read-only grid.
//!
//! # Trait hierarchy
//!
//! | Trait | Provides |
//! |---|---|
//! | [`Pather`] | bounds, passability, neighbours |
//! | [`WeightedPather`] : [`Pather`] | step costs |
//! | [`AstarPather`] : [`WeightedPather`] | heuristic estimate |
//!
//! [`GridPather`] implements all three for the standard movement model;
//! [`PathFinder::search`] accepts any other [`AstarPather`].

mod astar;
mod batch;
mod distance;
mod error;
mod grid_pather;
mod limits;
mod node;
mod path;
mod traits;

pub use astar::{PathFinder, find_path};
pub use batch::{PathRequest, plan_all};
pub use distance::{chebyshev, manhattan, octile};
pub use error::{CoordinateIssue, Endpoint, PathError, Result};
pub use grid_pather::{DIAGONAL_COST, GridPather, ORTHOGONAL_COST, step_cost};
pub use limits::{CancelToken, SearchLimits, SearchMode};
pub use node::{NodeId, PathNode};
pub use path::Path;
pub use traits::{AstarPather, Pather, WeightedPather};
