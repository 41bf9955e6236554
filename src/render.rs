use crate::grid::{Cell, CellKind, CellMark, Grid};
use grid_util::point::Point;
use itertools::Itertools;
use std::collections::HashSet;

/// Draws a labeled grid as text, one line per row. Marks win over everything else, then walls
/// (`#`), then cells on `path` (`*`). Other reached cells show the last digit of their distance
/// and unreached ones a `.`.
pub fn render_distances(grid: &Grid, path: &[Cell]) -> String {
    let on_path = path.iter().map(|cell| cell.position).collect::<HashSet<Point>>();
    grid.rows()
        .map(|row| {
            row.iter()
                .map(|cell| match (cell.mark, cell.kind, cell.distance) {
                    (CellMark::Start, _, _) => 'S',
                    (CellMark::End, _, _) => 'E',
                    (_, CellKind::Blocked, _) => '#',
                    _ if on_path.contains(&cell.position) => '*',
                    (_, _, Some(d)) => char::from_digit((d % 10) as u32, 10).unwrap_or('?'),
                    (_, _, None) => '.',
                })
                .collect::<String>()
        })
        .join("\n")
}
