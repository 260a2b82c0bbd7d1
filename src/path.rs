use core::fmt;

use itertools::Itertools;

use crate::grid_graph::GridGraph;
use crate::position::Position;

/// A path from a start to a goal position, both included, together with its total cost.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Path {
    positions: Vec<Position>,
    cost: i32,
}

impl Path {
    pub(crate) fn new(positions: Vec<Position>, cost: i32) -> Path {
        debug_assert!(!positions.is_empty());
        Path { positions, cost }
    }

    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    pub fn into_positions(self) -> Vec<Position> {
        self.positions
    }

    /// Sum of the edge costs along the path.
    pub fn cost(&self) -> i32 {
        self.cost
    }

    /// Number of positions on the path.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Always false, a path holds at least its start.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Number of moves along the path.
    pub fn steps(&self) -> usize {
        self.positions.len().saturating_sub(1)
    }

    pub fn start(&self) -> Option<&Position> {
        self.positions.first()
    }

    pub fn goal(&self) -> Option<&Position> {
        self.positions.last()
    }

    pub fn contains(&self, position: &Position) -> bool {
        self.positions.contains(position)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Position> {
        self.positions.iter()
    }

    /// Checks that every position is free and that each move is allowed on `graph`.
    pub fn is_walkable_on(&self, graph: &GridGraph) -> bool {
        self.start().is_some_and(|p| graph.is_traversable(p))
            && self
                .positions
                .iter()
                .tuple_windows()
                .all(|(a, b)| graph.is_neighbor(a, b))
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Position;
    type IntoIter = std::slice::Iter<'a, Position>;

    fn into_iter(self) -> Self::IntoIter {
        self.positions.iter()
    }
}

impl IntoIterator for Path {
    type Item = Position;
    type IntoIter = std::vec::IntoIter<Position>;

    fn into_iter(self) -> Self::IntoIter {
        self.positions.into_iter()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.positions.iter().join(" -> "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line() -> Path {
        Path::new(
            vec![Position::new(0, 0), Position::new(1, 1), Position::new(2, 1)],
            2,
        )
    }

    #[test]
    fn accessors() {
        let path = line();
        assert_eq!(path.len(), 3);
        assert_eq!(path.steps(), 2);
        assert_eq!(path.cost(), 2);
        assert_eq!(path.start(), Some(&Position::new(0, 0)));
        assert_eq!(path.goal(), Some(&Position::new(2, 1)));
        assert!(path.contains(&Position::new(1, 1)));
        assert!(!path.contains(&Position::new(1, 0)));
        assert_eq!(path.to_string(), "(0, 0) -> (1, 1) -> (2, 1)");
    }

    #[test]
    fn walkability_depends_on_grid() {
        let path = line();
        let open = GridGraph::build(3, 2, std::iter::empty()).unwrap();
        assert!(path.is_walkable_on(&open));
        let blocked = GridGraph::build(3, 2, [Position::new(1, 1)]).unwrap();
        assert!(!path.is_walkable_on(&blocked));
        let mut four = open.clone();
        four.set_allow_diagonal_move(false);
        assert!(!path.is_walkable_on(&four));
    }
}
