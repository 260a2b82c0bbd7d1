use core::fmt;
use std::cmp::Ordering;

/// Offsets of the Moore neighbourhood, clockwise starting at north (`y - 1`).
pub(crate) const MOORE_OFFSETS: [(i32, i32); 8] = [
    (0, -1),
    (1, -1),
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
];

/// Offsets of the von Neumann neighbourhood, same order as [MOORE_OFFSETS].
pub(crate) const NEUMANN_OFFSETS: [(i32, i32); 4] = [(0, -1), (1, 0), (0, 1), (-1, 0)];

/// A cell coordinate on the grid. Row `y = 0` is the top row.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Position {
        Position { x, y }
    }

    pub fn offset(&self, dx: i32, dy: i32) -> Position {
        Position::new(self.x + dx, self.y + dy)
    }

    /// `|dx| + |dy|`, widened so that any two positions have a distance.
    pub fn manhattan_distance(&self, other: &Position) -> u64 {
        self.x.abs_diff(other.x) as u64 + self.y.abs_diff(other.y) as u64
    }

    /// Number of king moves between the two positions, `max(|dx|, |dy|)`.
    pub fn chebyshev_distance(&self, other: &Position) -> u64 {
        self.x.abs_diff(other.x).max(self.y.abs_diff(other.y)) as u64
    }

    /// True if `other` is one of the 8 surrounding cells.
    pub fn is_adjacent(&self, other: &Position) -> bool {
        self.chebyshev_distance(other) == 1
    }

    pub fn moore_neighborhood(&self) -> [Position; 8] {
        MOORE_OFFSETS.map(|(dx, dy)| self.offset(dx, dy))
    }

    pub fn neumann_neighborhood(&self) -> [Position; 4] {
        NEUMANN_OFFSETS.map(|(dx, dy)| self.offset(dx, dy))
    }
}

impl From<(i32, i32)> for Position {
    fn from((x, y): (i32, i32)) -> Position {
        Position::new(x, y)
    }
}

impl Ord for Position {
    fn cmp(&self, other: &Self) -> Ordering {
        // Row-major, matching the order in which the grid is printed
        self.y.cmp(&other.y).then(self.x.cmp(&other.x))
    }
}

impl PartialOrd for Position {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
