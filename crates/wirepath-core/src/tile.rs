//! The [`Tile`] type — the state of a single board cell.

use std::fmt;

/// State of one board cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tile {
    #[default]
    Empty,
    /// Impassable.
    Blocked,
    Start,
    Target,
    /// Part of a routed wire, strictly between start and target.
    Path,
}

impl Tile {
    /// All states, in marker-table order.
    pub const ALL: [Tile; 5] = [
        Tile::Empty,
        Tile::Blocked,
        Tile::Start,
        Tile::Target,
        Tile::Path,
    ];

    /// The one-character marker used in text layouts and plain rendering.
    #[inline]
    pub const fn marker(self) -> char {
        match self {
            Tile::Empty => 'e',
            Tile::Blocked => 'U',
            Tile::Start => 'S',
            Tile::Target => 'T',
            Tile::Path => 'W',
        }
    }

    /// Parse a layout marker. Besides the canonical markers, `.` is read as
    /// [`Tile::Empty`] and `#` as [`Tile::Blocked`].
    pub const fn from_marker(ch: char) -> Option<Tile> {
        match ch {
            'e' | '.' => Some(Tile::Empty),
            'U' | '#' => Some(Tile::Blocked),
            'S' => Some(Tile::Start),
            'T' => Some(Tile::Target),
            'W' => Some(Tile::Path),
            _ => None,
        }
    }

    /// Whether a search may step onto a cell in this state.
    #[inline]
    pub const fn is_traversable(self) -> bool {
        matches!(self, Tile::Empty | Tile::Target)
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.marker())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn markers_parse_back() {
        for t in Tile::ALL {
            assert_eq!(Tile::from_marker(t.marker()), Some(t));
        }
        assert_eq!(Tile::from_marker('.'), Some(Tile::Empty));
        assert_eq!(Tile::from_marker('#'), Some(Tile::Blocked));
        assert_eq!(Tile::from_marker('x'), None);
    }

    #[test]
    fn only_empty_and_target_are_traversable() {
        assert!(Tile::Empty.is_traversable());
        assert!(Tile::Target.is_traversable());
        assert!(!Tile::Start.is_traversable());
        assert!(!Tile::Blocked.is_traversable());
        assert!(!Tile::Path.is_traversable());
    }
}
