use maze_pathfinding::{
    fill_shortest_distances, path_points, reconstruct_path, render_distances, CellMark, Grid,
    UNBOUNDED,
};

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
// Nodes have a 4-neighborhood

fn main() {
    env_logger::init();
    let grid: Grid = "S..\n.#.\n..E".parse().unwrap();
    let start = grid.find_mark(CellMark::Start).unwrap();
    let end = grid.find_mark(CellMark::End).unwrap();
    let labeled = fill_shortest_distances(&grid, start, end, UNBOUNDED);
    let path = reconstruct_path(&labeled, end);
    println!("{}\n", render_distances(&labeled, &path));
    println!("Path:");
    for p in path_points(&path).into_iter().rev() {
        println!("{:?}", p);
    }
}
