use crate::bfs::{fill_shortest_distances, reconstruct_path};
use crate::grid::{Cell, Grid};
use crate::maze::{create_wall_maze, Maze};
use crate::{DEFAULT_MAX_DISTANCE, DEFAULT_MAZE_HEIGHT, DEFAULT_MAZE_WIDTH};
use log::info;
use rand::Rng;

/// Settings for the mazes an [Explorer] generates and the cutoff it starts from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExplorerConfig {
    pub width: usize,
    pub height: usize,
    pub initial_max_distance: usize,
}

impl Default for ExplorerConfig {
    fn default() -> ExplorerConfig {
        ExplorerConfig {
            width: DEFAULT_MAZE_WIDTH,
            height: DEFAULT_MAZE_HEIGHT,
            initial_max_distance: DEFAULT_MAX_DISTANCE,
        }
    }
}

/// Drives an animated search: the cutoff is moved up or down one frame at a time and the
/// labeled grid and path are recomputed from scratch after every move.
#[derive(Clone, Debug)]
pub struct Explorer {
    config: ExplorerConfig,
    maze: Maze,
    max_distance: usize,
    result: Grid,
    path: Vec<Cell>,
}

impl Explorer {
    /// Generates a wall maze from `config` and runs the first search.
    pub fn new<R: Rng>(config: ExplorerConfig, rng: &mut R) -> Explorer {
        let maze = create_wall_maze(config.width, config.height, rng);
        Explorer::with_maze(config, maze)
    }
    /// Uses a caller-provided maze instead of generating one.
    pub fn with_maze(config: ExplorerConfig, maze: Maze) -> Explorer {
        let max_distance = config.initial_max_distance;
        let result = maze.grid.clone();
        let mut explorer = Explorer {
            config,
            maze,
            max_distance,
            result,
            path: Vec::new(),
        };
        explorer.step(0);
        explorer
    }
    /// Moves the cutoff by `frames` (never below zero) and searches again.
    pub fn step(&mut self, frames: i64) {
        let magnitude = usize::try_from(frames.unsigned_abs()).unwrap_or(usize::MAX);
        self.max_distance = if frames >= 0 {
            self.max_distance.saturating_add(magnitude)
        } else {
            self.max_distance.saturating_sub(magnitude)
        };
        self.result = fill_shortest_distances(
            &self.maze.grid,
            self.maze.start,
            self.maze.end,
            self.max_distance,
        );
        self.path = reconstruct_path(&self.result, self.maze.end);
    }
    /// Replaces the maze with a freshly generated one and restores the initial cutoff.
    pub fn reset<R: Rng>(&mut self, rng: &mut R) {
        info!("Generating a new {}x{} maze", self.config.width, self.config.height);
        self.maze = create_wall_maze(self.config.width, self.config.height, rng);
        self.max_distance = self.config.initial_max_distance;
        self.step(0);
    }
    pub fn max_distance(&self) -> usize {
        self.max_distance
    }
    pub fn maze(&self) -> &Maze {
        &self.maze
    }
    /// The grid labeled by the latest search.
    pub fn result(&self) -> &Grid {
        &self.result
    }
    /// Path from the maze end back towards the start, as far as the latest search reached.
    pub fn path(&self) -> &[Cell] {
        &self.path
    }
    /// True once the cutoff is large enough for the path to connect end and start.
    pub fn is_solved(&self) -> bool {
        self.result.at(self.maze.end).is_reached()
    }
}
