//! The routing board: a square grid of [`Tile`] states with one start and
//! one target cell.
//!
//! Out-of-bounds access through [`Board::cell_state`] and marking a
//! non-empty cell with [`Board::mark_path`] are contract violations and
//! panic. [`Board::get`] and [`Board::is_traversable`] are the checked
//! queries.

use std::fmt;

use crate::geom::{Point, Range};
use crate::tile::Tile;

/// A square `size × size` board.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Board {
    bounds: Range,
    cells: Vec<Tile>,
    start: Point,
    target: Point,
}

impl Board {
    /// Create a board with every cell empty except `start` and `target`.
    ///
    /// # Panics
    ///
    /// If `size` is not positive, either endpoint is outside the board or
    /// they coincide.
    pub fn new(size: i32, start: Point, target: Point) -> Self {
        assert!(size > 0, "board size must be positive, got {size}");
        let bounds = Range::square(size);
        assert!(bounds.contains(start), "start {start} outside {bounds}");
        assert!(bounds.contains(target), "target {target} outside {bounds}");
        assert_ne!(start, target, "start and target coincide at {start}");

        let mut board = Self {
            bounds,
            cells: vec![Tile::Empty; bounds.len()],
            start,
            target,
        };
        let si = board.checked_index(start);
        let ti = board.checked_index(target);
        board.cells[si] = Tile::Start;
        board.cells[ti] = Tile::Target;
        board
    }

    /// Parse a board from its text layout.
    ///
    /// Each non-blank line is one row; cells are tile markers, optionally
    /// separated by whitespace. `W` (path) markers are read back as empty
    /// cells, so the output of `Display` parses into the unrouted board.
    pub fn from_layout(layout: &str) -> Result<Self, LayoutError> {
        let rows: Vec<Vec<char>> = layout
            .lines()
            .map(|l| l.chars().filter(|c| !c.is_whitespace()).collect::<Vec<_>>())
            .filter(|r| !r.is_empty())
            .collect();
        if rows.is_empty() {
            return Err(LayoutError::Empty);
        }

        let size = rows.len();
        let mut cells = Vec::with_capacity(size * size);
        let mut start = None;
        let mut target = None;

        for (y, row) in rows.iter().enumerate() {
            if row.len() != size {
                return Err(LayoutError::NotSquare {
                    row: y,
                    width: row.len(),
                    expected: size,
                });
            }
            for (x, &ch) in row.iter().enumerate() {
                let pos = Point::new(x as i32, y as i32);
                let tile = Tile::from_marker(ch).ok_or(LayoutError::InvalidMarker { ch, pos })?;
                let tile = match tile {
                    Tile::Start if start.is_some() => {
                        return Err(LayoutError::DuplicateStart(pos));
                    }
                    Tile::Target if target.is_some() => {
                        return Err(LayoutError::DuplicateTarget(pos));
                    }
                    Tile::Start => {
                        start = Some(pos);
                        Tile::Start
                    }
                    Tile::Target => {
                        target = Some(pos);
                        Tile::Target
                    }
                    Tile::Path => Tile::Empty,
                    other => other,
                };
                cells.push(tile);
            }
        }

        Ok(Self {
            bounds: Range::square(size as i32),
            cells,
            start: start.ok_or(LayoutError::MissingStart)?,
            target: target.ok_or(LayoutError::MissingTarget)?,
        })
    }

    /// Side length of the board.
    #[inline]
    pub fn size(&self) -> i32 {
        self.bounds.width()
    }

    /// The board rectangle, `[0, size) × [0, size)`.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    #[inline]
    pub fn start(&self) -> Point {
        self.start
    }

    #[inline]
    pub fn target(&self) -> Point {
        self.target
    }

    /// Whether `p` lies on the board.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    /// The tile at `p`, or `None` if out of bounds.
    #[inline]
    pub fn get(&self, p: Point) -> Option<Tile> {
        self.bounds.index(p).map(|i| self.cells[i])
    }

    /// The tile at `p`.
    ///
    /// # Panics
    ///
    /// If `p` is outside the board.
    #[inline]
    pub fn cell_state(&self, p: Point) -> Tile {
        self.cells[self.checked_index(p)]
    }

    /// Whether a search may enter `p`: in bounds and empty or the target.
    #[inline]
    pub fn is_traversable(&self, p: Point) -> bool {
        self.get(p).is_some_and(Tile::is_traversable)
    }

    /// Mark `p` as part of the routed path.
    ///
    /// # Panics
    ///
    /// If `p` is outside the board or not currently empty.
    pub fn mark_path(&mut self, p: Point) {
        let i = self.checked_index(p);
        assert_eq!(
            self.cells[i],
            Tile::Empty,
            "mark_path on non-empty cell {p}"
        );
        self.cells[i] = Tile::Path;
    }

    /// Make `p` impassable.
    ///
    /// # Panics
    ///
    /// If `p` is outside the board or not currently empty.
    pub fn set_blocked(&mut self, p: Point) {
        let i = self.checked_index(p);
        assert_eq!(
            self.cells[i],
            Tile::Empty,
            "set_blocked on non-empty cell {p}"
        );
        self.cells[i] = Tile::Blocked;
    }

    /// Reset every path cell back to empty.
    pub fn clear_path(&mut self) {
        for c in self.cells.iter_mut().filter(|c| **c == Tile::Path) {
            *c = Tile::Empty;
        }
    }

    /// Count the cells in state `tile`.
    pub fn count(&self, tile: Tile) -> usize {
        self.cells.iter().filter(|&&c| c == tile).count()
    }

    /// Iterate over `(Point, Tile)` pairs in row-major order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (Point, Tile)> + '_ {
        self.bounds.iter().zip(self.cells.iter().copied())
    }

    fn checked_index(&self, p: Point) -> usize {
        match self.bounds.index(p) {
            Some(i) => i,
            None => panic!("{p} outside board {}", self.bounds),
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.size().max(1) as usize) {
            for (x, t) in row.iter().enumerate() {
                if x > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{t}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Board {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(serde::Deserialize)]
        struct RawBoard {
            bounds: Range,
            cells: Vec<Tile>,
            start: Point,
            target: Point,
        }

        let RawBoard {
            bounds,
            cells,
            start,
            target,
        } = RawBoard::deserialize(deserializer)?;
        let board = Board {
            bounds,
            cells,
            start,
            target,
        };
        board
            .check()
            .map_err(<D::Error as serde::de::Error>::custom)?;
        Ok(board)
    }
}

#[cfg(feature = "serde")]
impl Board {
    /// Check the invariants `new` and `from_layout` establish.
    fn check(&self) -> Result<(), String> {
        let size = self.bounds.width();
        if size <= 0 || self.bounds != Range::square(size) {
            return Err(format!("bounds {} are not a square at the origin", self.bounds));
        }
        if self.cells.len() != self.bounds.len() {
            return Err(format!(
                "{} cells for a {size}x{size} board",
                self.cells.len()
            ));
        }
        if self.start == self.target {
            return Err(format!("start and target coincide at {}", self.start));
        }
        for (name, p, tile) in [
            ("start", self.start, Tile::Start),
            ("target", self.target, Tile::Target),
        ] {
            if self.get(p) != Some(tile) {
                return Err(format!("{name} {p} is not a {name} cell"));
            }
            if self.count(tile) != 1 {
                return Err(format!("{} {name} cells", self.count(tile)));
            }
        }
        Ok(())
    }
}

/// Errors that can occur when parsing a board layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// No rows.
    Empty,
    /// A row's width differs from the number of rows.
    NotSquare {
        row: usize,
        width: usize,
        expected: usize,
    },
    /// A character that is not a tile marker.
    InvalidMarker { ch: char, pos: Point },
    MissingStart,
    MissingTarget,
    /// A second start marker, at the given position.
    DuplicateStart(Point),
    /// A second target marker, at the given position.
    DuplicateTarget(Point),
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "layout: no rows"),
            Self::NotSquare {
                row,
                width,
                expected,
            } => write!(
                f,
                "layout: row {row} has {width} cells, expected {expected}"
            ),
            Self::InvalidMarker { ch, pos } => {
                write!(f, "layout contains invalid marker \u{201c}{ch}\u{201d} at {pos}")
            }
            Self::MissingStart => write!(f, "layout: no start cell"),
            Self::MissingTarget => write!(f, "layout: no target cell"),
            Self::DuplicateStart(p) => write!(f, "layout: second start cell at {p}"),
            Self::DuplicateTarget(p) => write!(f, "layout: second target cell at {p}"),
        }
    }
}

impl std::error::Error for LayoutError {}

#[cfg(test)]
mod tests {
    use super::*;

    const ROOM: &str = "\
S e e
e U e
e e T";

    #[test]
    fn new_places_endpoints() {
        let b = Board::new(4, Point::new(0, 0), Point::new(3, 2));
        assert_eq!(b.size(), 4);
        assert_eq!(b.cell_state(Point::new(0, 0)), Tile::Start);
        assert_eq!(b.cell_state(Point::new(3, 2)), Tile::Target);
        assert_eq!(b.count(Tile::Empty), 14);
    }

    #[test]
    #[should_panic]
    fn new_rejects_coinciding_endpoints() {
        Board::new(3, Point::new(1, 1), Point::new(1, 1));
    }

    #[test]
    fn traversable_respects_bounds_and_state() {
        let b = Board::from_layout(ROOM).unwrap();
        assert!(b.is_traversable(Point::new(1, 0)));
        assert!(b.is_traversable(Point::new(2, 2)));
        assert!(!b.is_traversable(Point::new(0, 0)));
        assert!(!b.is_traversable(Point::new(1, 1)));
        assert!(!b.is_traversable(Point::new(-1, 0)));
        assert!(!b.is_traversable(Point::new(0, 3)));
    }

    #[test]
    fn get_is_checked() {
        let b = Board::from_layout(ROOM).unwrap();
        assert_eq!(b.get(Point::new(1, 1)), Some(Tile::Blocked));
        assert_eq!(b.get(Point::new(3, 0)), None);
    }

    #[test]
    #[should_panic]
    fn cell_state_out_of_bounds_panics() {
        let b = Board::from_layout(ROOM).unwrap();
        b.cell_state(Point::new(5, 5));
    }

    #[test]
    fn mark_and_clear_path() {
        let mut b = Board::from_layout(ROOM).unwrap();
        b.mark_path(Point::new(1, 0));
        assert_eq!(b.cell_state(Point::new(1, 0)), Tile::Path);
        assert!(!b.is_traversable(Point::new(1, 0)));
        b.clear_path();
        assert_eq!(b.count(Tile::Path), 0);
        assert_eq!(b.cell_state(Point::new(1, 0)), Tile::Empty);
    }

    #[test]
    #[should_panic]
    fn mark_path_on_target_panics() {
        let mut b = Board::from_layout(ROOM).unwrap();
        b.mark_path(Point::new(2, 2));
    }

    #[test]
    #[should_panic]
    fn set_blocked_on_start_panics() {
        let mut b = Board::from_layout(ROOM).unwrap();
        b.set_blocked(Point::new(0, 0));
    }

    #[test]
    fn display_parses_back() {
        let mut b = Board::from_layout(ROOM).unwrap();
        assert_eq!(b.to_string(), "S e e\ne U e\ne e T\n");
        b.mark_path(Point::new(1, 0));
        let back = Board::from_layout(&b.to_string()).unwrap();
        assert_eq!(back, Board::from_layout(ROOM).unwrap());
    }

    #[test]
    fn layout_accepts_compact_markers() {
        let b = Board::from_layout("S.\n#T\n").unwrap();
        assert_eq!(b.size(), 2);
        assert_eq!(b.start(), Point::new(0, 0));
        assert_eq!(b.target(), Point::new(1, 1));
        assert_eq!(b.cell_state(Point::new(0, 1)), Tile::Blocked);
    }

    #[test]
    fn layout_errors() {
        assert_eq!(Board::from_layout("\n  \n"), Err(LayoutError::Empty));
        assert_eq!(
            Board::from_layout("S e\ne"),
            Err(LayoutError::NotSquare {
                row: 1,
                width: 1,
                expected: 2
            })
        );
        assert_eq!(
            Board::from_layout("S x\ne T"),
            Err(LayoutError::InvalidMarker {
                ch: 'x',
                pos: Point::new(1, 0)
            })
        );
        assert_eq!(Board::from_layout("e e\ne T"), Err(LayoutError::MissingStart));
        assert_eq!(Board::from_layout("S e\ne e"), Err(LayoutError::MissingTarget));
        assert_eq!(
            Board::from_layout("S S\ne T"),
            Err(LayoutError::DuplicateStart(Point::new(1, 0)))
        );
        assert_eq!(
            Board::from_layout("S T\nT e"),
            Err(LayoutError::DuplicateTarget(Point::new(0, 1)))
        );
    }

    #[test]
    fn iter_is_row_major() {
        let b = Board::from_layout(ROOM).unwrap();
        let items: Vec<_> = b.iter().collect();
        assert_eq!(items.len(), 9);
        assert_eq!(items[0], (Point::new(0, 0), Tile::Start));
        assert_eq!(items[4], (Point::new(1, 1), Tile::Blocked));
        assert_eq!(items[8], (Point::new(2, 2), Tile::Target));
    }
}
