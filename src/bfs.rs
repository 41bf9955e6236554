use crate::grid::{Cell, CellMark, Grid};
use crate::NEUMANN_OFFSETS;
use grid_util::point::Point;
use log::{debug, info};
use std::collections::VecDeque;

/// Labels a copy of `grid` with shortest distances from `start` using breadth-first search over
/// the 4-neighbourhood. Cells further than `max_distance` steps away are left unlabeled; pass
/// [UNBOUNDED](crate::UNBOUNDED) to search the whole grid.
///
/// The copy also gets [CellMark::Start] at `start` and [CellMark::End] at `end`; `end` does not
/// have to be reachable. Both positions must be valid for `grid`. The input grid is never
/// modified, so repeated calls with growing cutoffs are independent of each other.
pub fn fill_shortest_distances(grid: &Grid, start: Point, end: Point, max_distance: usize) -> Grid {
    let mut labeled = grid.clone();
    labeled.reset_distances(None);
    labeled.at_mut(start).mark = CellMark::Start;
    labeled.at_mut(end).mark = CellMark::End;

    debug!("Searching from {} with cutoff {}", start, max_distance);
    labeled.at_mut(start).distance = Some(0);
    let mut open_list = VecDeque::from([start]);
    while let Some(current) = open_list.pop_front() {
        // Only labeled cells are ever queued
        let Some(current_distance) = labeled.at(current).distance else {
            continue;
        };
        let candidate = current_distance + 1;
        for (dx, dy) in NEUMANN_OFFSETS {
            let next = Point::new(current.x + dx, current.y + dy);
            if !labeled.is_valid(next) {
                continue;
            }
            let cell = labeled.at_mut(next);
            if cell.is_blocked() || candidate > max_distance {
                continue;
            }
            if cell.distance.map_or(true, |d| candidate < d) {
                cell.distance = Some(candidate);
                cell.predecessor = Some(current);
                open_list.push_back(next);
            }
        }
    }
    debug!("Labeled {} cells", reached_cells(&labeled));
    labeled
}

/// Follows backpointers from `end` to the search source. The first element is the cell at `end`
/// and the last one is the source. If `end` was never reached the result is just `[end]`.
///
/// # Panics
/// If `end` is out of bounds, like [Grid::at].
pub fn reconstruct_path(grid: &Grid, end: Point) -> Vec<Cell> {
    let end_cell = grid.at(end);
    if !end_cell.is_reached() {
        info!("{} was not reached by the search", end);
    }
    // A valid chain never visits more cells than the grid holds
    let (width, height) = grid.size();
    std::iter::successors(Some(end_cell), |cell| cell.predecessor.map(|p| grid.at(p)))
        .take(width * height)
        .copied()
        .collect()
}

/// The positions of a path of cells, in the same order.
pub fn path_points(path: &[Cell]) -> Vec<Point> {
    path.iter().map(|cell| cell.position).collect()
}

/// Number of cells carrying a distance label.
pub fn reached_cells(grid: &Grid) -> usize {
    grid.cells().filter(|cell| cell.is_reached()).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::CellKind;
    use crate::UNBOUNDED;

    #[test]
    fn open_grid_corner_to_corner() {
        let grid = Grid::new(5, 5, CellKind::Empty);
        let start = Point::new(0, 0);
        let end = Point::new(4, 4);
        let labeled = fill_shortest_distances(&grid, start, end, UNBOUNDED);
        assert_eq!(labeled.at(end).distance, Some(8));
        assert_eq!(reached_cells(&labeled), 25);
        let path = reconstruct_path(&labeled, end);
        assert_eq!(path.len(), 9);
        assert_eq!(path[0].position, end);
        assert_eq!(path[8].position, start);
    }

    #[test]
    fn cutoff_leaves_far_cells_unlabeled() {
        let grid = Grid::new(5, 5, CellKind::Empty);
        let end = Point::new(4, 4);
        let labeled = fill_shortest_distances(&grid, Point::new(0, 0), end, 4);
        assert_eq!(labeled.at(end).distance, None);
        assert_eq!(labeled.at(end).predecessor, None);
        assert_eq!(path_points(&reconstruct_path(&labeled, end)), vec![end]);
        // Diagonals x + y <= 4 of a 5x5 grid
        assert_eq!(reached_cells(&labeled), 15);
    }

    #[test]
    fn zero_cutoff_only_labels_start() {
        let grid = Grid::new(3, 3, CellKind::Empty);
        let labeled = fill_shortest_distances(&grid, Point::new(1, 1), Point::new(2, 2), 0);
        assert_eq!(reached_cells(&labeled), 1);
        assert_eq!(labeled.at(Point::new(1, 1)).distance, Some(0));
    }

    #[test]
    fn solid_wall_blocks_target() {
        // |S..|
        // |###|
        // |..E|
        let grid: Grid = "...\n###\n...".parse().unwrap();
        let end = Point::new(2, 2);
        let labeled = fill_shortest_distances(&grid, Point::new(0, 0), end, UNBOUNDED);
        assert_eq!(labeled.at(end).distance, None);
        assert_eq!(reconstruct_path(&labeled, end).len(), 1);
        assert_eq!(reached_cells(&labeled), 3);
    }

    #[test]
    fn single_opening_routes_the_path() {
        // |S..|
        // |.##|
        // |..E|
        let grid: Grid = "...\n.##\n...".parse().unwrap();
        let start = Point::new(0, 0);
        let end = Point::new(2, 2);
        let labeled = fill_shortest_distances(&grid, start, end, UNBOUNDED);
        assert_eq!(labeled.at(end).distance, Some(4));
        let points = path_points(&reconstruct_path(&labeled, end));
        assert_eq!(
            points,
            vec![
                Point::new(2, 2),
                Point::new(1, 2),
                Point::new(0, 2),
                Point::new(0, 1),
                Point::new(0, 0)
            ]
        );
    }

    #[test]
    fn centre_opening_routes_the_path() {
        let grid: Grid = "...\n#.#\n...".parse().unwrap();
        let end = Point::new(2, 2);
        let labeled = fill_shortest_distances(&grid, Point::new(0, 0), end, UNBOUNDED);
        assert_eq!(labeled.at(end).distance, Some(4));
        assert!(path_points(&reconstruct_path(&labeled, end)).contains(&Point::new(1, 1)));
    }

    #[test]
    fn ties_resolved_by_neighbour_order() {
        // (0, 1) is expanded before (1, 0) because down comes before right
        let grid = Grid::new(2, 2, CellKind::Empty);
        let end = Point::new(1, 1);
        let labeled = fill_shortest_distances(&grid, Point::new(0, 0), end, UNBOUNDED);
        assert_eq!(labeled.at(end).predecessor, Some(Point::new(0, 1)));
    }

    #[test]
    fn marks_are_placed_on_the_copy() {
        let grid = Grid::new(3, 1, CellKind::Empty);
        let start = Point::new(0, 0);
        let end = Point::new(2, 0);
        let labeled = fill_shortest_distances(&grid, start, end, UNBOUNDED);
        assert_eq!(labeled.at(start).mark, CellMark::Start);
        assert_eq!(labeled.at(end).mark, CellMark::End);
        assert!(grid.cells().all(|cell| cell.mark == CellMark::None));
        assert!(grid.cells().all(|cell| !cell.is_reached()));
    }

    #[test]
    fn blocked_start_is_still_expanded() {
        // |...|
        // |.#.|
        // |...|
        let mut grid = Grid::new(3, 3, CellKind::Empty);
        let start = Point::new(1, 1);
        grid.set_kind(start, CellKind::Blocked);
        let labeled = fill_shortest_distances(&grid, start, Point::new(2, 2), UNBOUNDED);
        assert_eq!(labeled.at(start).distance, Some(0));
        for p in grid.neighbours(start) {
            assert_eq!(labeled.at(p).distance, Some(1));
            assert_eq!(labeled.at(p).predecessor, Some(start));
        }
        assert_eq!(labeled.at(Point::new(2, 2)).distance, Some(2));
        assert_eq!(reached_cells(&labeled), 9);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn reconstruct_outside_grid_panics() {
        let grid = Grid::new(2, 2, CellKind::Empty);
        reconstruct_path(&grid, Point::new(0, 2));
    }

    #[test]
    fn start_equal_to_end() {
        let grid = Grid::new(2, 2, CellKind::Empty);
        let p = Point::new(1, 0);
        let labeled = fill_shortest_distances(&grid, p, p, UNBOUNDED);
        assert_eq!(labeled.at(p).mark, CellMark::End);
        assert_eq!(path_points(&reconstruct_path(&labeled, p)), vec![p]);
    }
}
