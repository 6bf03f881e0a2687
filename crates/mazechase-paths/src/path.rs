use std::ops::Index;

use mazechase_core::Point;

use crate::distance::chebyshev;

/// A finished route: the start, every intermediate cell, and the goal.
///
/// Never empty. A route whose start equals its goal holds that single point
/// and costs nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawPath"))]
pub struct Path {
    points: Vec<Point>,
    cost: i32,
}

impl Path {
    pub(crate) fn new(points: Vec<Point>, cost: i32) -> Self {
        debug_assert!(!points.is_empty());
        Self { points, cost }
    }

    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    #[inline]
    pub fn start(&self) -> Point {
        self.points[0]
    }

    #[inline]
    pub fn goal(&self) -> Point {
        self.points[self.points.len() - 1]
    }

    /// Total movement cost.
    #[inline]
    pub fn cost(&self) -> i32 {
        self.cost
    }

    /// Number of points, endpoints included.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Number of moves.
    #[inline]
    pub fn steps(&self) -> usize {
        self.points.len().saturating_sub(1)
    }

    /// The cell an agent standing on the start should move to next.
    #[inline]
    pub fn next_step(&self) -> Option<Point> {
        self.points.get(1).copied()
    }

    /// Whether every consecutive pair of points is one of the eight
    /// neighbouring offsets.
    pub fn is_contiguous(&self) -> bool {
        self.points.windows(2).all(|w| chebyshev(w[0], w[1]) == 1)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.points.iter()
    }

    pub fn into_points(self) -> Vec<Point> {
        self.points
    }
}

/// Unchecked wire form of a [`Path`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawPath {
    points: Vec<Point>,
    cost: i32,
}

#[cfg(feature = "serde")]
impl TryFrom<RawPath> for Path {
    type Error = &'static str;

    fn try_from(raw: RawPath) -> Result<Self, Self::Error> {
        if raw.points.is_empty() {
            return Err("a path holds at least its start point");
        }
        Ok(Self {
            points: raw.points,
            cost: raw.cost,
        })
    }
}

impl Index<usize> for Path {
    type Output = Point;

    fn index(&self, i: usize) -> &Point {
        &self.points[i]
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors() {
        let p = Path::new(
            vec![Point::new(0, 0), Point::new(1, 1), Point::new(2, 1)],
            24,
        );
        assert_eq!(p.start(), Point::new(0, 0));
        assert_eq!(p.goal(), Point::new(2, 1));
        assert_eq!(p[1], Point::new(1, 1));
        assert_eq!(p.len(), 3);
        assert_eq!(p.steps(), 2);
        assert_eq!(p.next_step(), Some(Point::new(1, 1)));
        assert_eq!(p.cost(), 24);
        assert!(p.is_contiguous());
        assert_eq!(p.iter().count(), 3);
    }

    #[test]
    fn single_point_path() {
        let p = Path::new(vec![Point::new(3, 3)], 0);
        assert_eq!(p.start(), p.goal());
        assert_eq!(p.steps(), 0);
        assert_eq!(p.next_step(), None);
        assert!(p.is_contiguous());
    }

    #[test]
    fn gaps_are_not_contiguous() {
        let p = Path::new(vec![Point::new(0, 0), Point::new(2, 0)], 20);
        assert!(!p.is_contiguous());
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn path_round_trip() {
        let p = Path::new(vec![Point::new(0, 0), Point::new(1, 0)], 10);
        let json = serde_json::to_string(&p).unwrap();
        let back: Path = serde_json::from_str(&json).unwrap();
        assert_eq!(p, back);
    }

    #[test]
    fn empty_point_list_is_rejected() {
        let err = serde_json::from_str::<Path>(r#"{"points":[],"cost":0}"#).unwrap_err();
        assert!(err.to_string().contains("at least its start point"), "{err}");

        let single: Path = serde_json::from_str(r#"{"points":[{"x":4,"y":1}],"cost":0}"#).unwrap();
        assert_eq!(single.goal(), Point::new(4, 1));
        assert_eq!(single.steps(), 0);
    }
}
