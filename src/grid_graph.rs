use grid_util::grid::{BoolGrid, Grid};
use itertools::iproduct;
use log::{debug, info};
use petgraph::unionfind::UnionFind;
use smallvec::SmallVec;

use crate::error::{Error, Result};
use crate::position::{Position, MOORE_OFFSETS, NEUMANN_OFFSETS};

/// Cost of any single move between adjacent cells. Diagonal moves are not penalised.
pub const EDGE_COST: i32 = 1;

/// [GridGraph] stores the obstacle layout of a bounded grid in a [BoolGrid] in which occupied
/// cells are [true], and answers the neighbour and edge cost queries the search needs.
/// Connected components are maintained using a [UnionFind] structure so that unreachable goals
/// can be rejected without flood-filling the grid.
#[derive(Clone, Debug)]
pub struct GridGraph {
    grid: BoolGrid,
    components: UnionFind<usize>,
    components_dirty: bool,
    allow_diagonal_move: bool,
}

impl GridGraph {
    /// Builds a `width` x `height` grid in which every position in `obstacles` is blocked.
    /// Movement is 8-directional.
    pub fn build<I>(width: usize, height: usize, obstacles: I) -> Result<GridGraph>
    where
        I: IntoIterator<Item = Position>,
    {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }
        let mut graph = GridGraph {
            grid: BoolGrid::new(width, height, false),
            components: UnionFind::new(width * height),
            components_dirty: false,
            allow_diagonal_move: true,
        };
        for obstacle in obstacles {
            graph.check_bounds(&obstacle)?;
            graph.grid.set(obstacle.x as usize, obstacle.y as usize, true);
        }
        graph.generate_components();
        info!(
            "Built {}x{} grid with {} obstacles",
            width,
            height,
            graph.obstacle_count()
        );
        Ok(graph)
    }

    pub fn width(&self) -> usize {
        self.grid.width()
    }

    pub fn height(&self) -> usize {
        self.grid.height()
    }

    pub fn allow_diagonal_move(&self) -> bool {
        self.allow_diagonal_move
    }

    /// Switches between 8-directional and 4-directional movement. Components are regenerated
    /// lazily by [update](Self::update).
    pub fn set_allow_diagonal_move(&mut self, allow: bool) {
        if self.allow_diagonal_move != allow {
            self.allow_diagonal_move = allow;
            self.components_dirty = true;
        }
    }

    pub fn in_bounds(&self, position: &Position) -> bool {
        position.x >= 0
            && position.y >= 0
            && (position.x as usize) < self.width()
            && (position.y as usize) < self.height()
    }

    /// Returns [Error::OutOfBounds] unless the position lies on the grid.
    pub fn check_bounds(&self, position: &Position) -> Result<()> {
        if self.in_bounds(position) {
            Ok(())
        } else {
            Err(Error::OutOfBounds {
                position: *position,
                width: self.width(),
                height: self.height(),
            })
        }
    }

    /// Out-of-bounds positions are not obstacles.
    pub fn is_obstacle(&self, position: &Position) -> bool {
        self.in_bounds(position) && self.grid.get(position.x as usize, position.y as usize)
    }

    pub fn is_traversable(&self, position: &Position) -> bool {
        self.in_bounds(position) && !self.grid.get(position.x as usize, position.y as usize)
    }

    /// All obstacles in row-major order.
    pub fn obstacles(&self) -> impl Iterator<Item = Position> + '_ {
        iproduct!(0..self.height(), 0..self.width())
            .filter(|&(y, x)| self.grid.get(x, y))
            .map(|(y, x)| Position::new(x as i32, y as i32))
    }

    pub fn obstacle_count(&self) -> usize {
        self.obstacles().count()
    }

    /// Blocks or frees a cell. Freeing a cell joins it with its neighbours' components, blocking
    /// one flags the components as dirty since they may have been split.
    pub fn set_obstacle(&mut self, position: Position, blocked: bool) -> Result<()> {
        self.check_bounds(&position)?;
        let (x, y) = (position.x as usize, position.y as usize);
        if self.grid.get(x, y) == blocked {
            return Ok(());
        }
        self.grid.set(x, y, blocked);
        if blocked {
            self.components_dirty = true;
        } else {
            let ix = self.index_of(&position);
            for n in self.neighbors(&position) {
                let n_ix = self.index_of(&n);
                self.components.union(ix, n_ix);
            }
        }
        Ok(())
    }

    /// The traversable cells adjacent to `position`, clockwise from north. Out-of-bounds cells
    /// and obstacles are skipped.
    pub fn neighbors(&self, position: &Position) -> SmallVec<[Position; 8]> {
        let offsets: &[(i32, i32)] = if self.allow_diagonal_move {
            &MOORE_OFFSETS
        } else {
            &NEUMANN_OFFSETS
        };
        offsets
            .iter()
            .map(|&(dx, dy)| position.offset(dx, dy))
            .filter(|p| self.is_traversable(p))
            .collect()
    }

    /// Cost of moving between two adjacent cells.
    pub fn edge_cost(&self, from: &Position, to: &Position) -> i32 {
        debug_assert!(from.is_adjacent(to));
        EDGE_COST
    }

    pub fn neighbors_and_cost(&self, position: &Position) -> SmallVec<[(Position, i32); 8]> {
        self.neighbors(position)
            .into_iter()
            .map(|n| (n, self.edge_cost(position, &n)))
            .collect()
    }

    /// True if `to` can be entered directly from `from`.
    pub fn is_neighbor(&self, from: &Position, to: &Position) -> bool {
        let step = if self.allow_diagonal_move {
            from.is_adjacent(to)
        } else {
            from.manhattan_distance(to) == 1
        };
        step && self.is_traversable(to)
    }

    fn index_of(&self, position: &Position) -> usize {
        position.y as usize * self.width() + position.x as usize
    }

    pub fn components_dirty(&self) -> bool {
        self.components_dirty
    }

    /// Checks if start and goal are both free and on the same component. Only meaningful while
    /// the components are not dirty.
    pub fn reachable(&self, start: &Position, goal: &Position) -> bool {
        self.is_traversable(start)
            && self.is_traversable(goal)
            && self
                .components
                .equiv(self.index_of(start), self.index_of(goal))
    }

    /// Regenerates the components if they are marked as dirty.
    pub fn update(&mut self) {
        if self.components_dirty {
            debug!("Components are dirty, regenerating");
            self.generate_components();
        }
    }

    /// Generates a new [UnionFind] structure and links up free grid neighbours to the same
    /// components.
    pub fn generate_components(&mut self) {
        let (w, h) = (self.width(), self.height());
        self.components = UnionFind::new(w * h);
        self.components_dirty = false;
        // Linking towards the east and south halves of the neighbourhood covers every edge once
        let forward: &[(i32, i32)] = if self.allow_diagonal_move {
            &[(1, -1), (1, 0), (1, 1), (0, 1)]
        } else {
            &[(1, 0), (0, 1)]
        };
        for (y, x) in iproduct!(0..h, 0..w) {
            let point = Position::new(x as i32, y as i32);
            if !self.is_traversable(&point) {
                continue;
            }
            let parent_ix = self.index_of(&point);
            for &(dx, dy) in forward {
                let n = point.offset(dx, dy);
                if self.is_traversable(&n) {
                    let ix = self.index_of(&n);
                    self.components.union(parent_ix, ix);
                }
            }
        }
    }
}
