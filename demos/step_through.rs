use grid_astar::{build_graph, AstarSolver, GridView, Position, ScoreView, SearchStatus};
use std::io::BufRead;

// Advances the search one expansion at a time and prints the g-score of every discovered cell
// in between. Press enter to take the next step.

fn main() {
    let wall = (0..7).map(|y| Position::new(6, y));
    let graph = build_graph(15, 10, wall).unwrap();
    let start = Position::new(2, 3);
    let end = Position::new(11, 2);
    let solver = AstarSolver::new();
    let mut search = solver.begin(&graph, start, end).unwrap();

    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();
    while search.step() == SearchStatus::Searching {
        println!("Step {}:\n{}", search.expanded(), ScoreView::new(&search));
        if lines.next().is_none() {
            break;
        }
    }
    match search.finish() {
        Ok(path) => print!("{}", GridView::of_path(&graph, &path)),
        Err(err) => println!("{err}"),
    }
}
