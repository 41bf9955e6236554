use crate::grid::{CellKind, Grid};
use grid_util::point::Point;
use log::debug;
use rand::Rng;

/// A generated grid together with the positions a search should run between.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Maze {
    pub grid: Grid,
    pub start: Point,
    pub end: Point,
}

fn random_point<R: Rng>(
    rng: &mut R,
    xs: std::ops::Range<usize>,
    ys: std::ops::Range<usize>,
) -> Point {
    Point::new(rng.gen_range(xs) as i32, rng.gen_range(ys) as i32)
}

/// An open `width` x `height` grid with start and end placed uniformly at random. They may coincide.
pub fn create_empty_maze<R: Rng>(width: usize, height: usize, rng: &mut R) -> Maze {
    let grid = Grid::new(width, height, CellKind::Empty);
    let start = random_point(rng, 0..width, 0..height);
    let end = random_point(rng, 0..width, 0..height);
    Maze { grid, start, end }
}

/// A grid split into four rooms by a wall along column `width / 2` and a wall along row
/// `height / 2`. Every wall arm on either side of the crossing gets one random opening, so all
/// rooms are connected. The start lies in the bottom-left room, the end in the top-right one.
///
/// # Panics
/// If `width` or `height` is smaller than 3.
pub fn create_wall_maze<R: Rng>(width: usize, height: usize, rng: &mut R) -> Maze {
    assert!(
        width >= 3 && height >= 3,
        "a wall maze needs at least 3x3 cells, got {width}x{height}"
    );
    let mut grid = Grid::new(width, height, CellKind::Empty);
    let (mid_x, mid_y) = (width / 2, height / 2);
    for x in 0..width {
        grid.set_kind(Point::new(x as i32, mid_y as i32), CellKind::Blocked);
    }
    for y in 0..height {
        grid.set_kind(Point::new(mid_x as i32, y as i32), CellKind::Blocked);
    }

    let openings = [
        random_point(rng, 0..mid_x, mid_y..mid_y + 1),
        random_point(rng, mid_x + 1..width, mid_y..mid_y + 1),
        random_point(rng, mid_x..mid_x + 1, 0..mid_y),
        random_point(rng, mid_x..mid_x + 1, mid_y + 1..height),
    ];
    for opening in openings {
        grid.set_kind(opening, CellKind::Empty);
    }
    debug!("Wall maze {}x{} with openings {:?}", width, height, openings);

    let start = random_point(rng, 0..mid_x, mid_y + 1..height);
    let end = random_point(rng, mid_x + 1..width, 0..mid_y);
    Maze { grid, start, end }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn empty_maze_has_no_walls() {
        let mut rng = StdRng::seed_from_u64(0);
        let maze = create_empty_maze(6, 4, &mut rng);
        assert_eq!(maze.grid.size(), (6, 4));
        assert!(maze.grid.cells().all(|cell| !cell.is_blocked()));
        assert!(maze.grid.is_valid(maze.start));
        assert!(maze.grid.is_valid(maze.end));
    }

    #[test]
    fn wall_maze_rooms_are_connected() {
        let mut rng = StdRng::seed_from_u64(0);
        for (w, h) in [(3, 3), (4, 7), (30, 22), (11, 5)] {
            for _ in 0..50 {
                let maze = create_wall_maze(w, h, &mut rng);
                let grid = &maze.grid;
                assert!(grid.can_move_to(maze.start));
                assert!(grid.can_move_to(maze.end));
                assert!(maze.start.x < (w / 2) as i32 && maze.start.y > (h / 2) as i32);
                assert!(maze.end.x > (w / 2) as i32 && maze.end.y < (h / 2) as i32);
                assert!(grid.reachable(&maze.start, &maze.end));
                // Two full walls sharing one cell, minus four openings
                let blocked = grid.cells().filter(|cell| cell.is_blocked()).count();
                assert_eq!(blocked, w + h - 1 - 4);
            }
        }
    }

    #[test]
    #[should_panic(expected = "at least 3x3")]
    fn wall_maze_too_small() {
        let mut rng = StdRng::seed_from_u64(0);
        create_wall_maze(2, 5, &mut rng);
    }
}
