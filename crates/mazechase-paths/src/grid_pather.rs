//! The maze-chase movement model over a [`GridMap`].

use mazechase_core::{GridMap, Point, Range};

use crate::distance::manhattan;
use crate::traits::{AstarPather, Pather, WeightedPather};

/// Cost of an orthogonal step.
pub const ORTHOGONAL_COST: i32 = 10;

/// Cost of a diagonal step (integer approximation of 10·√2).
pub const DIAGONAL_COST: i32 = 14;

/// Cost of a single step between two adjacent cells.
#[inline]
pub fn step_cost(from: Point, to: Point) -> i32 {
    if from.is_diagonal_step(to) {
        DIAGONAL_COST
    } else {
        ORTHOGONAL_COST
    }
}

/// 8-directional pather over a [`GridMap`].
///
/// Any passable neighbour is reachable, diagonals included; a diagonal step
/// only requires its target cell to be passable. The heuristic is the
/// unscaled Manhattan distance, which never exceeds the remaining cost under
/// 10/14 step costs.
#[derive(Clone, Copy, Debug)]
pub struct GridPather<'a> {
    grid: &'a GridMap,
}

impl<'a> GridPather<'a> {
    pub fn new(grid: &'a GridMap) -> Self {
        Self { grid }
    }

    pub fn grid(&self) -> &'a GridMap {
        self.grid
    }
}

impl Pather for GridPather<'_> {
    fn bounds(&self) -> Range {
        self.grid.bounds()
    }

    fn passable(&self, p: Point) -> bool {
        self.grid.passable_at(p)
    }

    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        buf.extend(
            p.neighbors_8()
                .into_iter()
                .filter(|&n| self.grid.passable_at(n)),
        );
    }
}

impl WeightedPather for GridPather<'_> {
    fn cost(&self, from: Point, to: Point) -> i32 {
        step_cost(from, to)
    }
}

impl AstarPather for GridPather<'_> {
    fn estimate(&self, from: Point, to: Point) -> i32 {
        manhattan(from, to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mazechase_core::CellCode;

    #[test]
    fn step_costs() {
        let p = Point::new(3, 3);
        assert_eq!(step_cost(p, Point::new(4, 3)), ORTHOGONAL_COST);
        assert_eq!(step_cost(p, Point::new(3, 2)), ORTHOGONAL_COST);
        assert_eq!(step_cost(p, Point::new(2, 4)), DIAGONAL_COST);
    }

    #[test]
    fn neighbors_skip_walls_and_edges() {
        let g = GridMap::from_ascii(
            "
.#.
...
",
        )
        .unwrap();
        let pather = GridPather::new(&g);
        let mut buf = Vec::new();
        pather.neighbors(Point::new(0, 0), &mut buf);
        assert_eq!(buf, vec![Point::new(1, 1), Point::new(0, 1)]);

        buf.clear();
        pather.neighbors(Point::new(1, 1), &mut buf);
        assert_eq!(buf.len(), 4);
        assert!(!buf.contains(&Point::new(1, 0)));
    }

    #[test]
    fn collectibles_are_passable() {
        let mut g = GridMap::new(2, 1, CellCode::Floor).unwrap();
        g.set(1, 0, CellCode::Collectible).unwrap();
        let pather = GridPather::new(&g);
        assert!(pather.passable(Point::new(1, 0)));
    }

    #[test]
    fn heuristic_never_exceeds_open_grid_cost() {
        let g = GridMap::new(9, 9, CellCode::Floor).unwrap();
        let pather = GridPather::new(&g);
        let goal = Point::new(4, 4);
        for p in g.bounds() {
            let exact = crate::distance::octile(p, goal, ORTHOGONAL_COST, DIAGONAL_COST);
            assert!(pather.estimate(p, goal) <= exact);
        }
    }
}
