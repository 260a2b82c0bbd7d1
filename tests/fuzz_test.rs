/// Fuzzes the search by checking for many random grids that a path is found exactly when the goal
/// is reachable, and that every path found is walkable. Both expansion strategies and both
/// movement modes are tested.
use grid_astar::*;
use rand::prelude::*;
use std::collections::{HashMap, VecDeque};

fn random_grid(w: usize, h: usize, rng: &mut StdRng, diagonal: bool) -> GridGraph {
    let mut obstacles = Vec::new();
    for x in 0..w as i32 {
        for y in 0..h as i32 {
            if rng.gen_bool(0.4) {
                obstacles.push(Position::new(x, y));
            }
        }
    }
    let mut graph = build_graph(w, h, obstacles).unwrap();
    graph.set_allow_diagonal_move(diagonal);
    graph.update();
    graph
}

/// Breadth-first distances from `start`, computed independently of the search.
fn bfs_distances(graph: &GridGraph, start: Position) -> HashMap<Position, i32> {
    let mut dist = HashMap::new();
    let mut queue = VecDeque::new();
    dist.insert(start, 0);
    queue.push_back(start);
    while let Some(p) = queue.pop_front() {
        let d = dist[&p];
        for n in graph.neighbors(&p) {
            if !dist.contains_key(&n) {
                dist.insert(n, d + 1);
                queue.push_back(n);
            }
        }
    }
    dist
}

fn visualize_grid(graph: &GridGraph, start: &Position, end: &Position) {
    print!("{}", GridView::new(graph, *start, *end));
}

#[test]
fn fuzz() {
    const N: usize = 10;
    const N_GRIDS: usize = 2000;
    let mut rng = StdRng::seed_from_u64(0);
    for (diagonal, use_closed_set) in [(false, true), (true, false), (true, true)] {
        let mut solver = AstarSolver::new();
        solver.use_closed_set = use_closed_set;

        let start = Position::new(0, 0);
        let end = Position::new(N as i32 - 1, N as i32 - 1);
        for _ in 0..N_GRIDS {
            let mut random_grid = random_grid(N, N, &mut rng, diagonal);
            random_grid.set_obstacle(start, false).unwrap();
            random_grid.set_obstacle(end, false).unwrap();
            let reachable = random_grid.reachable(&start, &end);
            let distances = bfs_distances(&random_grid, start);
            assert_eq!(reachable, distances.contains_key(&end));

            let path = solver.search(&random_grid, start, end);
            // Show the grid if a path is not found
            if path.is_ok() != reachable {
                visualize_grid(&random_grid, &start, &end);
            }
            assert_eq!(path.is_ok(), reachable);
            match path {
                Ok(path) => {
                    assert!(path.is_walkable_on(&random_grid));
                    assert_eq!(path.start(), Some(&start));
                    assert_eq!(path.goal(), Some(&end));
                    assert_eq!(path.steps() as i32, path.cost());
                    let shortest = distances[&end];
                    if diagonal {
                        assert!(path.cost() >= shortest);
                    } else {
                        // Manhattan distance is exact-admissible on a 4-grid
                        assert_eq!(path.cost(), shortest);
                    }
                }
                Err(err) => assert_eq!(err, Error::NoPathFound { start, goal: end }),
            }
        }
    }
}

/// Blocking cells after construction leaves the components dirty, so the search has to detect
/// unreachable goals by exhausting the frontier.
#[test]
fn fuzz_dirty_components() {
    const N: usize = 8;
    const N_GRIDS: usize = 500;
    let mut rng = StdRng::seed_from_u64(1);
    let solvers = [false, true].map(|use_closed_set| {
        let mut solver = AstarSolver::new();
        solver.use_closed_set = use_closed_set;
        solver
    });
    let start = Position::new(0, 0);
    let end = Position::new(N as i32 - 1, N as i32 - 1);
    let mut unreachable_grids = 0;
    for _ in 0..N_GRIDS {
        let mut graph = build_graph(N, N, std::iter::empty()).unwrap();
        for _ in 0..(N * N * 2 / 5) {
            let p = Position::new(rng.gen_range(0..N as i32), rng.gen_range(0..N as i32));
            if p != start && p != end {
                graph.set_obstacle(p, true).unwrap();
            }
        }
        let reachable = bfs_distances(&graph, start).contains_key(&end);
        if !reachable {
            unreachable_grids += 1;
        }
        for solver in &solvers {
            match solver.search(&graph, start, end) {
                Ok(path) => {
                    assert!(reachable);
                    assert!(path.is_walkable_on(&graph));
                }
                Err(err) => {
                    if reachable {
                        visualize_grid(&graph, &start, &end);
                    }
                    assert!(!reachable);
                    assert_eq!(err, Error::NoPathFound { start, goal: end });
                }
            }
        }
    }
    // Both outcomes have to occur for the comparison to mean anything
    assert!(unreachable_grids > 0 && unreachable_grids < N_GRIDS);
}

#[test]
fn fuzz_repeatable() {
    const N: usize = 12;
    let mut rng = StdRng::seed_from_u64(2);
    let solver = AstarSolver::new();
    for _ in 0..200 {
        let graph = random_grid(N, N, &mut rng, true);
        let start = Position::new(rng.gen_range(0..N as i32), rng.gen_range(0..N as i32));
        let end = Position::new(rng.gen_range(0..N as i32), rng.gen_range(0..N as i32));
        let first = solver.search(&graph, start, end);
        let second = solver.search(&graph, start, end);
        assert_eq!(first, second);
    }
}
