use log::{debug, info, warn};

use crate::astar::{SearchContext, Step};
use crate::error::{Error, Result};
use crate::grid_graph::GridGraph;
use crate::heuristic::{Heuristic, Manhattan};
use crate::path::Path;
use crate::position::Position;

/// Computes paths on a [GridGraph] using A*. The heuristic defaults to [Manhattan].
///
/// `use_closed_set` selects between the two expansion strategies: with it every position is
/// expanded at most once, without it a position is re-opened whenever a cheaper way to reach
/// it is found.
#[derive(Clone, Debug)]
pub struct AstarSolver<H = Manhattan> {
    pub heuristic: H,
    pub use_closed_set: bool,
}

impl AstarSolver {
    pub fn new() -> AstarSolver {
        AstarSolver::with_heuristic(Manhattan)
    }
}

impl Default for AstarSolver {
    fn default() -> AstarSolver {
        AstarSolver::new()
    }
}

impl<H: Heuristic> AstarSolver<H> {
    pub fn with_heuristic(heuristic: H) -> AstarSolver<H> {
        AstarSolver {
            heuristic,
            use_closed_set: true,
        }
    }

    /// Computes a path from start to goal. Both endpoints must lie on the grid and be free,
    /// otherwise [Error::OutOfBounds] or [Error::Blocked] is returned before searching. A goal
    /// that cannot be reached results in [Error::NoPathFound].
    pub fn search(&self, graph: &GridGraph, start: Position, goal: Position) -> Result<Path> {
        self.begin(graph, start, goal)?.finish()
    }

    /// Prepares a search that can be advanced one expansion at a time with [Search::step].
    pub fn begin<'a>(
        &'a self,
        graph: &'a GridGraph,
        start: Position,
        goal: Position,
    ) -> Result<Search<'a, H>> {
        for endpoint in [&start, &goal] {
            graph.check_bounds(endpoint)?;
            if graph.is_obstacle(endpoint) {
                return Err(Error::Blocked {
                    position: *endpoint,
                });
            }
        }
        let mut context = SearchContext::new(self.use_closed_set);
        context.reset(&start, self.heuristic.estimate(&start, &goal));
        let mut status = SearchStatus::Searching;
        if graph.components_dirty() {
            debug!("Components are dirty, searching without reachability check");
        } else if !graph.reachable(&start, &goal) {
            info!("{} is not reachable from {}", goal, start);
            status = SearchStatus::Exhausted;
        }
        Ok(Search {
            graph,
            heuristic: &self.heuristic,
            start,
            goal,
            context,
            status,
            found: None,
        })
    }
}

/// Progress of a [Search].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchStatus {
    Searching,
    Found,
    Exhausted,
}

/// A single A* run on a grid. The state is exclusive to this run and dropped with it.
pub struct Search<'a, H> {
    graph: &'a GridGraph,
    heuristic: &'a H,
    start: Position,
    goal: Position,
    context: SearchContext<Position, i32>,
    status: SearchStatus,
    found: Option<(usize, i32)>,
}

impl<'a, H: Heuristic> Search<'a, H> {
    /// Pops the most promising frontier position and expands it. Once the search has finished
    /// this returns the final status without doing any work.
    pub fn step(&mut self) -> SearchStatus {
        if self.status != SearchStatus::Searching {
            return self.status;
        }
        let graph = self.graph;
        let heuristic = self.heuristic;
        let goal = self.goal;
        match self.context.step(
            |node| graph.neighbors_and_cost(node),
            |node| heuristic.estimate(node, &goal),
            |node| *node == goal,
        ) {
            Step::Pending => {}
            Step::Found { index, cost } => {
                info!(
                    "Found path from {} to {} with cost {} after {} expansions",
                    self.start,
                    self.goal,
                    cost,
                    self.context.expanded()
                );
                self.found = Some((index, cost));
                self.status = SearchStatus::Found;
            }
            Step::Exhausted => {
                if self.graph.components_dirty() {
                    info!("{} could not be pathed to from {}", self.goal, self.start);
                } else {
                    warn!(
                        "Reachable goal {} could not be pathed to from {}, are the components correct?",
                        self.goal, self.start
                    );
                }
                self.status = SearchStatus::Exhausted;
            }
        }
        self.status
    }

    /// Steps until the search has finished and returns the path.
    pub fn finish(mut self) -> Result<Path> {
        while self.step() == SearchStatus::Searching {}
        self.path().ok_or(Error::NoPathFound {
            start: self.start,
            goal: self.goal,
        })
    }

    pub fn status(&self) -> SearchStatus {
        self.status
    }

    /// The path to the goal once it has been found.
    pub fn path(&self) -> Option<Path> {
        self.found
            .map(|(index, cost)| Path::new(self.context.path_to(index), cost))
    }

    pub fn start(&self) -> Position {
        self.start
    }

    pub fn goal(&self) -> Position {
        self.goal
    }

    pub fn graph(&self) -> &GridGraph {
        self.graph
    }

    /// Best known cost from the start, [None] while the position is undiscovered.
    pub fn g_score(&self, position: &Position) -> Option<i32> {
        self.context.cost_of(position)
    }

    /// `g + h`, the key the frontier is ordered by.
    pub fn f_score(&self, position: &Position) -> Option<i32> {
        self.g_score(position)
            .map(|g| g + self.heuristic.estimate(position, &self.goal))
    }

    /// Predecessor of `position` on its best known path.
    pub fn came_from(&self, position: &Position) -> Option<Position> {
        self.context.parent_of(position).copied()
    }

    pub fn is_closed(&self, position: &Position) -> bool {
        self.context.is_closed(position)
    }

    pub fn open_len(&self) -> usize {
        self.context.open_len()
    }

    pub fn expanded(&self) -> usize {
        self.context.expanded()
    }
}
