//! The [`CellCode`] type: what a single maze cell holds.

use std::fmt;

/// Contents of one grid cell.
///
/// `Wall` and `Floor` are structural; `Collectible` is a floor cell that
/// additionally carries a pickup. The numeric codes (`0` floor, `1` wall,
/// `3` collectible) are stable and used by [`CellCode::code`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellCode {
    #[default]
    Wall,
    Floor,
    Collectible,
}

impl CellCode {
    /// Whether a path may traverse this cell.
    #[inline]
    pub const fn is_passable(self) -> bool {
        matches!(self, Self::Floor | Self::Collectible)
    }

    /// Numeric cell code.
    #[inline]
    pub const fn code(self) -> u8 {
        match self {
            Self::Floor => 0,
            Self::Wall => 1,
            Self::Collectible => 3,
        }
    }

    /// Inverse of [`code`](Self::code).
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Floor),
            1 => Some(Self::Wall),
            3 => Some(Self::Collectible),
            _ => None,
        }
    }

    /// ASCII glyph: `#` wall, `.` floor, `o` collectible.
    #[inline]
    pub const fn glyph(self) -> char {
        match self {
            Self::Wall => '#',
            Self::Floor => '.',
            Self::Collectible => 'o',
        }
    }

    /// Inverse of [`glyph`](Self::glyph). A space is read as floor.
    pub const fn from_glyph(ch: char) -> Option<Self> {
        match ch {
            '#' => Some(Self::Wall),
            '.' | ' ' => Some(Self::Floor),
            'o' => Some(Self::Collectible),
            _ => None,
        }
    }
}

impl fmt::Display for CellCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Wall => "wall",
            Self::Floor => "floor",
            Self::Collectible => "collectible",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn passability() {
        assert!(!CellCode::Wall.is_passable());
        assert!(CellCode::Floor.is_passable());
        assert!(CellCode::Collectible.is_passable());
    }

    #[test]
    fn codes_and_glyphs_invert() {
        for c in [CellCode::Wall, CellCode::Floor, CellCode::Collectible] {
            assert_eq!(CellCode::from_code(c.code()), Some(c));
            assert_eq!(CellCode::from_glyph(c.glyph()), Some(c));
        }
        assert_eq!(CellCode::from_code(2), None);
        assert_eq!(CellCode::from_glyph('x'), None);
    }
}
