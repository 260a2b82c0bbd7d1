//! Text renderings of grids, paths and running searches.
//!
//! [GridView] prints one character per cell: `S` for the start, `E` for the end, `X` for
//! obstacles, `O` for cells on the path and `.` for everything else. Row `y = 0` comes first.
use core::fmt;

use crate::grid_graph::GridGraph;
use crate::heuristic::Heuristic;
use crate::path::Path;
use crate::position::Position;
use crate::solver::Search;

fn for_each_cell<F>(graph: &GridGraph, f: &mut fmt::Formatter, mut cell: F) -> fmt::Result
where
    F: FnMut(&mut fmt::Formatter, Position) -> fmt::Result,
{
    for y in 0..graph.height() as i32 {
        for x in 0..graph.width() as i32 {
            cell(f, Position::new(x, y))?;
        }
        writeln!(f)?;
    }
    Ok(())
}

/// A grid with its start, end and optionally a path through it.
pub struct GridView<'a> {
    pub graph: &'a GridGraph,
    pub start: Position,
    pub end: Position,
    pub path: Option<&'a Path>,
}

impl<'a> GridView<'a> {
    pub fn new(graph: &'a GridGraph, start: Position, end: Position) -> GridView<'a> {
        GridView {
            graph,
            start,
            end,
            path: None,
        }
    }

    /// Takes start and end from the path itself.
    pub fn of_path(graph: &'a GridGraph, path: &'a Path) -> GridView<'a> {
        let start = path.start().copied().unwrap_or_default();
        let end = path.goal().copied().unwrap_or(start);
        GridView {
            graph,
            start,
            end,
            path: Some(path),
        }
    }

    pub fn with_path(mut self, path: &'a Path) -> GridView<'a> {
        self.path = Some(path);
        self
    }

    fn glyph(&self, position: &Position) -> char {
        if *position == self.start {
            'S'
        } else if *position == self.end {
            'E'
        } else if self.graph.is_obstacle(position) {
            'X'
        } else if self.path.is_some_and(|p| p.contains(position)) {
            'O'
        } else {
            '.'
        }
    }
}

impl fmt::Display for GridView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for_each_cell(self.graph, f, |f, p| write!(f, "{}", self.glyph(&p)))
    }
}

impl fmt::Display for GridGraph {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for_each_cell(self, f, |f, p| {
            write!(f, "{}", if self.is_obstacle(&p) { 'X' } else { '.' })
        })
    }
}

/// The g-scores of a running [Search], one `[    ]` cell per position. Undiscovered cells are
/// left blank. The cells show the cost from the start, not the `g + h` key of
/// [Search::f_score].
pub struct ScoreView<'s, 'a, H> {
    search: &'s Search<'a, H>,
}

impl<'s, 'a, H: Heuristic> ScoreView<'s, 'a, H> {
    pub fn new(search: &'s Search<'a, H>) -> ScoreView<'s, 'a, H> {
        ScoreView { search }
    }
}

impl<H: Heuristic> fmt::Display for ScoreView<'_, '_, H> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let search = self.search;
        for_each_cell(search.graph(), f, |f, p| {
            let out = if p == search.start() {
                "S".to_owned()
            } else if p == search.goal() {
                "E".to_owned()
            } else if search.graph().is_obstacle(&p) {
                "X".to_owned()
            } else {
                search
                    .g_score(&p)
                    .map(|g| g.to_string())
                    .unwrap_or_default()
            };
            write!(f, "[{:>4}]", out)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::{AstarSolver, SearchStatus};

    #[test]
    fn renders_path() {
        let graph = GridGraph::build(4, 3, [Position::new(1, 1), Position::new(2, 1)]).unwrap();
        let path = AstarSolver::new()
            .search(&graph, Position::new(0, 2), Position::new(3, 2))
            .unwrap();
        let view = GridView::of_path(&graph, &path);
        assert_eq!(view.to_string(), "....\n.XX.\nSOOE\n");
    }

    #[test]
    fn renders_grid_without_path() {
        let graph = GridGraph::build(3, 2, [Position::new(2, 0)]).unwrap();
        assert_eq!(graph.to_string(), "..X\n...\n");
        let view = GridView::new(&graph, Position::new(0, 0), Position::new(1, 1));
        assert_eq!(view.to_string(), "S.X\n.E.\n");
    }

    #[test]
    fn renders_scores() {
        let graph = GridGraph::build(3, 1, std::iter::empty()).unwrap();
        let solver = AstarSolver::new();
        let mut search = solver
            .begin(&graph, Position::new(0, 0), Position::new(2, 0))
            .unwrap();
        assert_eq!(ScoreView::new(&search).to_string(), "[   S][    ][   E]\n");
        assert_eq!(search.step(), SearchStatus::Searching);
        // The cell holds g = 1 although the frontier key g + h is 2
        assert_eq!(search.f_score(&Position::new(1, 0)), Some(2));
        assert_eq!(ScoreView::new(&search).to_string(), "[   S][   1][   E]\n");
    }
}
