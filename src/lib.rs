//! # maze_pathfinding
//!
//! Shortest paths on a 4-connected grid with blocked cells. A
//! [breadth-first search](https://en.wikipedia.org/wiki/Breadth-first_search) labels every
//! reachable cell with its distance from the start and a backpointer, optionally stopping at a
//! maximum distance; [reconstruct_path] then walks the backpointers from any target back to the
//! start. Since all moves cost one, first discovery is always along a shortest path.
//!
//! ```
//! use grid_util::point::Point;
//! use maze_pathfinding::{fill_shortest_distances, reconstruct_path, Grid, UNBOUNDED};
//!
//! let grid: Grid = "...\n##.\n...".parse().unwrap();
//! let start = Point::new(0, 0);
//! let end = Point::new(0, 2);
//! let labeled = fill_shortest_distances(&grid, start, end, UNBOUNDED);
//! assert_eq!(labeled.at(end).distance, Some(6));
//! assert_eq!(reconstruct_path(&labeled, end).len(), 7);
//! ```
pub mod bfs;
pub mod error;
pub mod explorer;
pub mod grid;
pub mod maze;
pub mod render;

pub use crate::bfs::{fill_shortest_distances, path_points, reached_cells, reconstruct_path};
pub use crate::error::ParseGridError;
pub use crate::explorer::{Explorer, ExplorerConfig};
pub use crate::grid::{Cell, CellKind, CellMark, Grid};
pub use crate::maze::{create_empty_maze, create_wall_maze, Maze};
pub use crate::render::render_distances;

/// Cutoff value meaning the search is not limited in depth.
pub const UNBOUNDED: usize = usize::MAX;

/// Neighbour offsets in expansion order: up, down, left, right. When several shortest paths
/// exist, this order decides which backpointer is recorded.
pub const NEUMANN_OFFSETS: [(i32, i32); 4] = [(0, -1), (0, 1), (-1, 0), (1, 0)];

pub const DEFAULT_MAZE_WIDTH: usize = 30;
pub const DEFAULT_MAZE_HEIGHT: usize = 22;
pub const DEFAULT_MAX_DISTANCE: usize = 30;
