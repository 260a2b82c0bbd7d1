use crate::position::Position;

/// Estimates the remaining cost between two positions. For the search to return optimal paths
/// the estimate must never exceed the true remaining cost.
pub trait Heuristic {
    fn estimate(&self, from: &Position, to: &Position) -> i32;
}

/// The [Manhattan distance](https://en.wikipedia.org/wiki/Taxicab_geometry) `|dx| + |dy|`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Manhattan;

impl Heuristic for Manhattan {
    /// Saturates at [i32::MAX] for positions further apart than any cost can express.
    fn estimate(&self, from: &Position, to: &Position) -> i32 {
        i32::try_from(from.manhattan_distance(to)).unwrap_or(i32::MAX)
    }
}

impl<F> Heuristic for F
where
    F: Fn(&Position, &Position) -> i32,
{
    fn estimate(&self, from: &Position, to: &Position) -> i32 {
        self(from, to)
    }
}
