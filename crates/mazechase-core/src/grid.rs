//! The [`GridMap`] type: the maze's persistent cell storage.
//!
//! Cells are stored row-major. The structural layer (wall or floor) is kept
//! apart from the collectible overlay, so passability never depends on
//! gameplay pickups: a collectible is simply a floor cell whose overlay bit
//! is set. [`GridMap::get`] merges both layers into a single [`CellCode`].

use std::fmt;

use crate::cell::CellCode;
use crate::error::{GridError, Result};
use crate::geom::{Point, Range};

// ---------------------------------------------------------------------------
// GridMap
// ---------------------------------------------------------------------------

/// A rectangular maze of `width × height` cells.
///
/// A `GridMap` is only mutated between searches; path searches borrow it
/// immutably and touch it only through [`is_passable`](GridMap::is_passable)
/// and friends.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawGridMap"))]
pub struct GridMap {
    width: i32,
    height: i32,
    walls: Vec<bool>,
    collectibles: Vec<bool>,
}

impl GridMap {
    /// Create a `width × height` grid with every cell set to `fill`.
    pub fn new(width: i32, height: i32, fill: CellCode) -> Result<Self> {
        if width <= 0 || height <= 0 {
            return Err(GridError::InvalidDimension { width, height });
        }
        let len = (width as usize) * (height as usize);
        Ok(Self {
            width,
            height,
            walls: vec![fill == CellCode::Wall; len],
            collectibles: vec![fill == CellCode::Collectible; len],
        })
    }

    /// Parse a grid from ASCII art: `#` wall, `.` (or space) floor,
    /// `o` collectible. Leading and trailing blank lines, and trailing
    /// whitespace on each line, are ignored.
    pub fn from_ascii(s: &str) -> Result<Self> {
        let lines: Vec<&str> = s
            .lines()
            .map(str::trim_end)
            .skip_while(|l| l.is_empty())
            .collect();
        let lines: Vec<&str> = match lines.iter().rposition(|l| !l.is_empty()) {
            Some(last) => lines[..=last].to_vec(),
            None => Vec::new(),
        };
        let height = lines.len() as i32;
        let width = lines.first().map_or(0, |l| l.chars().count() as i32);
        let mut grid = Self::new(width, height, CellCode::Wall)?;

        for (y, line) in lines.iter().enumerate() {
            let y = y as i32;
            let found = line.chars().count() as i32;
            if found != width {
                return Err(GridError::RaggedRows {
                    row: y,
                    expected: width,
                    found,
                });
            }
            for (x, ch) in line.chars().enumerate() {
                let x = x as i32;
                let code = CellCode::from_glyph(ch).ok_or(GridError::InvalidGlyph { ch, x, y })?;
                grid.set(x, y, code)?;
            }
        }
        Ok(grid)
    }

    /// Render the grid as ASCII art, one line per row.
    pub fn to_ascii(&self) -> String {
        let mut out = String::with_capacity(self.walls.len() + self.height as usize);
        for y in 0..self.height {
            for x in 0..self.width {
                out.push(self.code_at(self.index_unchecked(x, y)).glyph());
            }
            if y + 1 < self.height {
                out.push('\n');
            }
        }
        out
    }

    /// Grid dimensions as `(rows, cols)`.
    #[inline]
    pub fn shape(&self) -> (i32, i32) {
        (self.height, self.width)
    }

    /// Number of columns.
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Number of rows.
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.walls.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.walls.is_empty()
    }

    /// The bounding range `[0, width) × [0, height)`.
    #[inline]
    pub fn bounds(&self) -> Range {
        Range::new(0, 0, self.width, self.height)
    }

    /// Whether `(x, y)` lies inside the grid.
    #[inline]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && x < self.width && y < self.height
    }

    /// Whether `p` lies inside the grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.in_bounds(p.x, p.y)
    }

    // -----------------------------------------------------------------------
    // Cell access
    // -----------------------------------------------------------------------

    /// Read the cell at `(x, y)`.
    pub fn get(&self, x: i32, y: i32) -> Result<CellCode> {
        let i = self.index(x, y)?;
        Ok(self.code_at(i))
    }

    /// Write the cell at `(x, y)`.
    ///
    /// Writing `Collectible` makes the cell floor and places a pickup on it;
    /// writing `Floor` or `Wall` removes any pickup.
    pub fn set(&mut self, x: i32, y: i32, value: CellCode) -> Result<()> {
        let i = self.index(x, y)?;
        self.walls[i] = value == CellCode::Wall;
        self.collectibles[i] = value == CellCode::Collectible;
        Ok(())
    }

    /// True for floor and collectible cells, false for walls and anything
    /// outside the grid.
    #[inline]
    pub fn is_passable(&self, x: i32, y: i32) -> bool {
        self.in_bounds(x, y) && !self.walls[self.index_unchecked(x, y)]
    }

    /// Point-based [`get`](Self::get) returning `None` outside the grid.
    #[inline]
    pub fn at(&self, p: Point) -> Option<CellCode> {
        self.get(p.x, p.y).ok()
    }

    /// Point-based [`set`](Self::set).
    #[inline]
    pub fn set_at(&mut self, p: Point, value: CellCode) -> Result<()> {
        self.set(p.x, p.y, value)
    }

    /// Point-based [`is_passable`](Self::is_passable).
    #[inline]
    pub fn passable_at(&self, p: Point) -> bool {
        self.is_passable(p.x, p.y)
    }

    /// Whether a collectible sits at `p`.
    #[inline]
    pub fn collectible_at(&self, p: Point) -> bool {
        self.contains(p) && self.collectibles[self.index_unchecked(p.x, p.y)]
    }

    /// Pick up the collectible at `p`, turning the cell back into plain
    /// floor. Returns `true` if there was one.
    pub fn take_collectible(&mut self, p: Point) -> Result<bool> {
        let i = self.index(p.x, p.y)?;
        Ok(std::mem::replace(&mut self.collectibles[i], false))
    }

    /// Positions of all remaining collectibles, row-major.
    pub fn collectibles(&self) -> impl Iterator<Item = Point> + '_ {
        self.collectibles
            .iter()
            .enumerate()
            .filter(|&(_, &c)| c)
            .map(|(i, _)| self.point(i))
    }

    /// Count cells equal to `value`.
    pub fn count(&self, value: CellCode) -> usize {
        (0..self.len()).filter(|&i| self.code_at(i) == value).count()
    }

    /// Count passable cells.
    pub fn count_passable(&self) -> usize {
        self.walls.iter().filter(|&&w| !w).count()
    }

    /// Row-major iterator over `(Point, CellCode)` pairs.
    pub fn iter(&self) -> GridIter<'_> {
        GridIter {
            grid: self,
            inner: self.bounds().iter(),
        }
    }

    // -----------------------------------------------------------------------
    // Index helpers
    // -----------------------------------------------------------------------

    fn index(&self, x: i32, y: i32) -> Result<usize> {
        if !self.in_bounds(x, y) {
            return Err(GridError::OutOfBounds {
                x,
                y,
                cols: self.width,
                rows: self.height,
            });
        }
        Ok(self.index_unchecked(x, y))
    }

    #[inline]
    fn index_unchecked(&self, x: i32, y: i32) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }

    #[inline]
    fn point(&self, i: usize) -> Point {
        let w = self.width as usize;
        Point::new((i % w) as i32, (i / w) as i32)
    }

    #[inline]
    fn code_at(&self, i: usize) -> CellCode {
        if self.walls[i] {
            CellCode::Wall
        } else if self.collectibles[i] {
            CellCode::Collectible
        } else {
            CellCode::Floor
        }
    }
}

impl fmt::Display for GridMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_ascii())
    }
}

// ---------------------------------------------------------------------------
// Deserialization
// ---------------------------------------------------------------------------

/// Unchecked wire form of a [`GridMap`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawGridMap {
    width: i32,
    height: i32,
    walls: Vec<bool>,
    collectibles: Vec<bool>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawGridMap> for GridMap {
    type Error = GridError;

    fn try_from(raw: RawGridMap) -> Result<Self> {
        let RawGridMap {
            width,
            height,
            walls,
            mut collectibles,
        } = raw;
        if width <= 0 || height <= 0 {
            return Err(GridError::InvalidDimension { width, height });
        }
        let expected = (width as usize) * (height as usize);
        if walls.len() != expected || collectibles.len() != expected {
            return Err(GridError::LayerLength {
                expected,
                walls: walls.len(),
                collectibles: collectibles.len(),
            });
        }
        // Walls never carry a collectible.
        for (c, &w) in collectibles.iter_mut().zip(&walls) {
            *c &= !w;
        }
        Ok(Self {
            width,
            height,
            walls,
            collectibles,
        })
    }
}

// ---------------------------------------------------------------------------
// GridIter
// ---------------------------------------------------------------------------

/// Iterator over `(Point, CellCode)` pairs in a [`GridMap`].
pub struct GridIter<'a> {
    grid: &'a GridMap,
    inner: crate::geom::RangeIter,
}

impl Iterator for GridIter<'_> {
    type Item = (Point, CellCode);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let p = self.inner.next()?;
        Some((p, self.grid.code_at(self.grid.index_unchecked(p.x, p.y))))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for GridIter<'_> {}

impl<'a> IntoIterator for &'a GridMap {
    type Item = (Point, CellCode);
    type IntoIter = GridIter<'a>;

    fn into_iter(self) -> GridIter<'a> {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_and_shape() {
        let g = GridMap::new(7, 5, CellCode::Wall).unwrap();
        assert_eq!(g.shape(), (5, 7));
        assert_eq!(g.width(), 7);
        assert_eq!(g.height(), 5);
        assert_eq!(g.len(), 35);
        assert_eq!(g.count(CellCode::Wall), 35);
    }

    #[test]
    fn new_rejects_non_positive_dimensions() {
        assert_eq!(
            GridMap::new(0, 4, CellCode::Floor),
            Err(GridError::InvalidDimension { width: 0, height: 4 })
        );
        assert!(GridMap::new(3, -1, CellCode::Floor).is_err());
    }

    #[test]
    fn get_and_set_respect_bounds() {
        let mut g = GridMap::new(4, 3, CellCode::Floor).unwrap();
        g.set(2, 1, CellCode::Wall).unwrap();
        assert_eq!(g.get(2, 1), Ok(CellCode::Wall));
        assert_eq!(g.get(0, 0), Ok(CellCode::Floor));
        assert_eq!(
            g.get(4, 0),
            Err(GridError::OutOfBounds {
                x: 4,
                y: 0,
                cols: 4,
                rows: 3
            })
        );
        assert!(g.get(0, 3).is_err());
        assert!(g.get(-1, 0).is_err());
        assert!(g.set(0, -1, CellCode::Wall).is_err());
    }

    #[test]
    fn passability_ignores_overlay_and_bounds() {
        let mut g = GridMap::new(3, 3, CellCode::Floor).unwrap();
        g.set(0, 0, CellCode::Wall).unwrap();
        g.set(1, 1, CellCode::Collectible).unwrap();
        assert!(!g.is_passable(0, 0));
        assert!(g.is_passable(1, 1));
        assert!(g.is_passable(2, 2));
        assert!(!g.is_passable(3, 0));
        assert!(!g.is_passable(-1, -1));
    }

    #[test]
    fn collectible_pickup_turns_floor() {
        let mut g = GridMap::new(3, 3, CellCode::Floor).unwrap();
        let p = Point::new(2, 1);
        g.set_at(p, CellCode::Collectible).unwrap();
        assert!(g.collectible_at(p));
        assert_eq!(g.collectibles().collect::<Vec<_>>(), vec![p]);

        assert_eq!(g.take_collectible(p), Ok(true));
        assert_eq!(g.at(p), Some(CellCode::Floor));
        assert_eq!(g.take_collectible(p), Ok(false));
        assert!(g.take_collectible(Point::new(9, 9)).is_err());
    }

    #[test]
    fn walling_a_collectible_removes_it() {
        let mut g = GridMap::new(2, 2, CellCode::Collectible).unwrap();
        assert_eq!(g.count(CellCode::Collectible), 4);
        g.set(0, 0, CellCode::Wall).unwrap();
        assert!(!g.collectible_at(Point::new(0, 0)));
        assert_eq!(g.count(CellCode::Collectible), 3);
        assert_eq!(g.count_passable(), 3);
    }

    #[test]
    fn ascii_parse_and_render() {
        let src = "
#####
#.o.#
#####
";
        let g = GridMap::from_ascii(src).unwrap();
        assert_eq!(g.shape(), (3, 5));
        assert_eq!(g.get(2, 1), Ok(CellCode::Collectible));
        assert_eq!(g.get(1, 1), Ok(CellCode::Floor));
        assert_eq!(g.to_ascii(), "#####\n#.o.#\n#####");
        assert_eq!(g.to_string(), g.to_ascii());
    }

    #[test]
    fn ascii_parse_errors() {
        assert!(matches!(
            GridMap::from_ascii("##\n###"),
            Err(GridError::RaggedRows { row: 1, .. })
        ));
        assert!(matches!(
            GridMap::from_ascii("#x#"),
            Err(GridError::InvalidGlyph { ch: 'x', x: 1, y: 0 })
        ));
        assert!(matches!(
            GridMap::from_ascii(""),
            Err(GridError::InvalidDimension { .. })
        ));
    }

    #[test]
    fn iter_is_row_major() {
        let mut g = GridMap::new(3, 2, CellCode::Wall).unwrap();
        g.set(1, 0, CellCode::Floor).unwrap();
        let items: Vec<_> = g.iter().collect();
        assert_eq!(items.len(), 6);
        assert_eq!(items[1], (Point::new(1, 0), CellCode::Floor));
        assert_eq!(items[3], (Point::new(0, 1), CellCode::Wall));
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn gridmap_round_trip() {
        let g = GridMap::from_ascii("#.o\n..#").unwrap();
        let json = serde_json::to_string(&g).unwrap();
        let back: GridMap = serde_json::from_str(&json).unwrap();
        assert_eq!(g, back);
    }

    #[test]
    fn rejects_layers_that_do_not_match_the_shape() {
        let err = serde_json::from_str::<GridMap>(
            r#"{"width":3,"height":3,"walls":[],"collectibles":[]}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("expected 9 cells"), "{err}");

        let short_overlay = r#"{"width":2,"height":1,"walls":[false,true],"collectibles":[false]}"#;
        assert!(serde_json::from_str::<GridMap>(short_overlay).is_err());
    }

    #[test]
    fn rejects_non_positive_dimensions() {
        let err = serde_json::from_str::<GridMap>(
            r#"{"width":0,"height":2,"walls":[],"collectibles":[]}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("invalid grid dimension"), "{err}");
    }

    #[test]
    fn drops_collectibles_on_walls() {
        let g: GridMap = serde_json::from_str(
            r#"{"width":2,"height":1,"walls":[true,false],"collectibles":[true,true]}"#,
        )
        .unwrap();
        assert_eq!(g.get(0, 0), Ok(CellCode::Wall));
        assert_eq!(g.get(1, 0), Ok(CellCode::Collectible));
        assert_eq!(g.collectibles().collect::<Vec<_>>(), vec![Point::new(1, 0)]);
        assert!(!g.is_passable(0, 0));
    }
}
