use grid_astar::{build_graph, AstarSolver, Error, GridView, Position};
use rand::prelude::*;

// Places a random start and end on a 15x10 grid, scatters obstacles around them and prints the
// resulting path, or the bare grid if the end is walled off.

const WIDTH: i32 = 15;
const HEIGHT: i32 = 10;
const OBSTACLE_DENSITY: f64 = 0.25;

fn random_position(rng: &mut StdRng) -> Position {
    Position::new(rng.gen_range(0..WIDTH), rng.gen_range(0..HEIGHT))
}

fn main() {
    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| thread_rng().gen());
    let mut rng = StdRng::seed_from_u64(seed);

    let start = random_position(&mut rng);
    let mut end = random_position(&mut rng);
    while end == start {
        end = random_position(&mut rng);
    }
    let obstacles = (0..HEIGHT)
        .flat_map(|y| (0..WIDTH).map(move |x| Position::new(x, y)))
        .filter(|p| *p != start && *p != end)
        .filter(|_| rng.gen_bool(OBSTACLE_DENSITY))
        .collect::<Vec<_>>();
    let graph = build_graph(WIDTH as usize, HEIGHT as usize, obstacles).unwrap();

    println!("Seed : {seed}");
    println!("Start : {start}");
    println!("End : {end}");
    match AstarSolver::new().search(&graph, start, end) {
        Ok(path) => {
            println!("Cost : {}\n", path.cost());
            print!("{}", GridView::of_path(&graph, &path));
        }
        Err(err @ Error::NoPathFound { .. }) => {
            println!("{err}\n");
            print!("{}", GridView::new(&graph, start, end));
        }
        Err(err) => eprintln!("{err}"),
    }
}
