use maze_pathfinding::{
    create_wall_maze, fill_shortest_distances, reconstruct_path, render_distances, UNBOUNDED,
};
use rand::{rngs::StdRng, SeedableRng};

// Generates a four-room maze, solves it without a cutoff and prints the labeled grid.
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    let mut rng = StdRng::seed_from_u64(7);
    let maze = create_wall_maze(30, 22, &mut rng);
    println!("{}", maze.grid);
    let labeled = fill_shortest_distances(&maze.grid, maze.start, maze.end, UNBOUNDED);
    let path = reconstruct_path(&labeled, maze.end);
    println!("{}", render_distances(&labeled, &path));
    match labeled.at(maze.end).distance {
        Some(d) => println!("Shortest distance from {} to {}: {}", maze.start, maze.end, d),
        None => println!("{} cannot be reached from {}", maze.end, maze.start),
    }
}
