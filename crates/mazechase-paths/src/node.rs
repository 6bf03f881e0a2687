use std::cmp::Ordering;

use mazechase_core::Point;

/// Handle of a [`PathNode`] inside the arena of one search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

/// A search-time record: where the route stands, what it cost to get there,
/// and the node it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathNode {
    pub pos: Point,
    /// Accumulated cost from the start.
    pub g: i32,
    /// `g` plus the heuristic estimate to the goal.
    pub f: i32,
    pub parent: Option<NodeId>,
}

impl PathNode {
    /// The heuristic part of `f`.
    #[inline]
    pub fn h(&self) -> i32 {
        self.f - self.g
    }
}

// ---------------------------------------------------------------------------
// Arena
// ---------------------------------------------------------------------------

/// Append-only storage for the nodes of a single search. Parents are stored
/// as handles into the same arena.
#[derive(Debug, Default)]
pub(crate) struct NodeArena {
    nodes: Vec<PathNode>,
}

impl NodeArena {
    pub(crate) fn clear(&mut self) {
        self.nodes.clear();
    }

    pub(crate) fn push(&mut self, node: PathNode) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    #[inline]
    pub(crate) fn get(&self, id: NodeId) -> &PathNode {
        &self.nodes[id.index()]
    }

    pub(crate) fn as_slice(&self) -> &[PathNode] {
        &self.nodes
    }

    /// Positions from the root to `id`, following parent handles.
    pub(crate) fn trace(&self, id: NodeId) -> Vec<Point> {
        let mut points = Vec::new();
        let mut cur = Some(id);
        while let Some(i) = cur {
            let node = self.get(i);
            points.push(node.pos);
            cur = node.parent;
        }
        points.reverse();
        points
    }
}

// ---------------------------------------------------------------------------
// Open-set entry
// ---------------------------------------------------------------------------

/// Reference into the arena, ordered for use in `BinaryHeap`: smallest `f`
/// first, then smallest `tie`, then earliest inserted.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct NodeRef {
    pub(crate) id: NodeId,
    pub(crate) f: i32,
    pub(crate) tie: i32,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed so the max-heap pops the smallest key first.
        other
            .f
            .cmp(&self.f)
            .then_with(|| other.tie.cmp(&self.tie))
            .then_with(|| other.id.cmp(&self.id))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BinaryHeap;

    fn node(x: i32, g: i32, f: i32, parent: Option<NodeId>) -> PathNode {
        PathNode {
            pos: Point::new(x, 0),
            g,
            f,
            parent,
        }
    }

    #[test]
    fn trace_walks_parents_back_to_root() {
        let mut arena = NodeArena::default();
        let a = arena.push(node(0, 0, 3, None));
        let b = arena.push(node(1, 10, 12, Some(a)));
        let _stray = arena.push(node(5, 10, 12, Some(a)));
        let c = arena.push(node(2, 20, 20, Some(b)));
        assert_eq!(
            arena.trace(c),
            vec![Point::new(0, 0), Point::new(1, 0), Point::new(2, 0)]
        );
        assert_eq!(arena.trace(a), vec![Point::new(0, 0)]);
        assert_eq!(arena.get(b).h(), 2);
    }

    #[test]
    fn heap_pops_lowest_f_then_tie_then_oldest() {
        let mut heap = BinaryHeap::new();
        let r = |id: usize, f: i32, tie: i32| NodeRef {
            id: NodeId(id),
            f,
            tie,
        };
        heap.push(r(0, 20, 0));
        heap.push(r(1, 10, 5));
        heap.push(r(2, 10, 5));
        heap.push(r(3, 10, 1));
        heap.push(r(4, 30, 0));

        let order: Vec<usize> = std::iter::from_fn(|| heap.pop().map(|n| n.id.0)).collect();
        assert_eq!(order, vec![3, 1, 2, 0, 4]);
    }
}
