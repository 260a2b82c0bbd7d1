//! # grid_astar
//!
//! Computes shortest paths between two cells of a bounded grid containing impassable
//! obstacles, using [A*](https://en.wikipedia.org/wiki/A*_search_algorithm) with the
//! [Manhattan distance](https://en.wikipedia.org/wiki/Taxicab_geometry) as heuristic. Moves go
//! to any of the 8 surrounding cells (or the 4 cardinal ones) and every move costs 1.
//! Pre-computes [connected components](https://en.wikipedia.org/wiki/Component_(graph_theory))
//! to avoid flood-filling behaviour if no path exists.
//!
//! ```
//! use grid_astar::{build_graph, search, Manhattan, Position};
//!
//! let graph = build_graph(5, 5, [Position::new(1, 0)]).unwrap();
//! let path = search(&graph, Position::new(0, 0), Position::new(4, 4), Manhattan).unwrap();
//! assert_eq!(path.cost(), 4);
//! ```
pub mod astar;
mod error;
pub mod grid_graph;
pub mod heuristic;
pub mod path;
pub mod position;
pub mod render;
pub mod solver;

pub use error::{Error, Result};
pub use grid_graph::GridGraph;
pub use heuristic::{Heuristic, Manhattan};
pub use path::Path;
pub use position::Position;
pub use render::{GridView, ScoreView};
pub use solver::{AstarSolver, Search, SearchStatus};

/// Builds a `width` x `height` grid with 8-directional movement in which every position in
/// `obstacles` is blocked.
pub fn build_graph<I>(width: usize, height: usize, obstacles: I) -> Result<GridGraph>
where
    I: IntoIterator<Item = Position>,
{
    GridGraph::build(width, height, obstacles)
}

/// Computes a path from `start` to `goal` on `graph`, see [AstarSolver::search].
pub fn search<H: Heuristic>(
    graph: &GridGraph,
    start: Position,
    goal: Position,
    heuristic: H,
) -> Result<Path> {
    AstarSolver::with_heuristic(heuristic).search(graph, start, goal)
}
