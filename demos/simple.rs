use grid_astar::{build_graph, search, GridView, Manhattan, Position};

// In this example a path is found on a 3x3 grid with shape
//  ___
// |S  |
// | # |
// |  E|
//  ___
// where
// - # marks an obstacle
// - S marks the start
// - E marks the end
//
// Nodes have an 8-neighborhood

fn main() {
    let graph = build_graph(3, 3, [Position::new(1, 1)]).unwrap();
    println!("{}", graph);
    let start = Position::new(0, 0);
    let end = Position::new(2, 2);
    let path = search(&graph, start, end, Manhattan).unwrap();
    println!("Path (cost {}):", path.cost());
    for p in &path {
        println!("{}", p);
    }
    println!("\n{}", GridView::of_path(&graph, &path));
}
