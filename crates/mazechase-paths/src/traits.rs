use mazechase_core::{Point, Range};

/// Minimal pathfinding interface: the searchable area, passability and
/// neighbour enumeration.
pub trait Pather {
    /// Rectangle containing every point the pather can report.
    fn bounds(&self) -> Range;

    /// Whether a route may stand on `p`.
    fn passable(&self, p: Point) -> bool;

    /// Append the passable neighbours of `p` into `buf`. The caller clears
    /// `buf` before calling.
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>);
}

/// Pather with weighted (positive-cost) edges.
pub trait WeightedPather: Pather {
    /// Cost of moving from `from` to adjacent `to`. Must be > 0.
    fn cost(&self, from: Point, to: Point) -> i32;
}

/// Full A* pather with an admissible heuristic.
pub trait AstarPather: WeightedPather {
    /// Heuristic estimate of the remaining cost from `from` to `to`.
    /// Must never overestimate the true cost (admissible).
    fn estimate(&self, from: Point, to: Point) -> i32;
}
