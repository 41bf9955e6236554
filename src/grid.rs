use crate::error::ParseGridError;
use crate::NEUMANN_OFFSETS;
use core::fmt;
use grid_util::grid::{Grid as ValueGrid, SimpleGrid};
use grid_util::point::Point;
use itertools::{iproduct, Itertools};
use log::debug;
use petgraph::unionfind::UnionFind;
use std::str::FromStr;

/// Whether a cell can be walked through.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CellKind {
    Empty,
    Blocked,
}

/// Cosmetic annotation placed on the start and end of a search. Never read by the search itself.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CellMark {
    #[default]
    None,
    Start,
    End,
}

/// A single grid position together with the search state attached to it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    pub kind: CellKind,
    /// Fixed at creation, always equal to the index of the cell in its [Grid].
    pub position: Point,
    /// Shortest known distance from the search source, [None] while unreached.
    pub distance: Option<usize>,
    /// The neighbour through which [distance](Self::distance) was achieved. Points back
    /// into the same grid, so following it always ends at the search source.
    pub predecessor: Option<Point>,
    pub mark: CellMark,
}

impl Cell {
    pub fn new(kind: CellKind, position: Point) -> Cell {
        Cell {
            kind,
            position,
            distance: None,
            predecessor: None,
            mark: CellMark::None,
        }
    }
    pub fn is_blocked(&self) -> bool {
        self.kind == CellKind::Blocked
    }
    pub fn is_reached(&self) -> bool {
        self.distance.is_some()
    }
}

/// [Grid] stores its [Cell]s in a row-major [SimpleGrid]; the x coordinate of a [Point] is the
/// column and y is the row. Width and height are fixed for the lifetime of the grid and
/// both are at least one.
///
/// Backpointers are kept as [Point]s rather than references, which makes [Clone] a plain
/// deep copy with no storage shared between the original and the copy.
#[derive(Clone, Debug)]
pub struct Grid {
    cells: SimpleGrid<Cell>,
}

impl Grid {
    /// Creates a `width` x `height` grid where every cell has the given kind.
    ///
    /// # Panics
    /// If either dimension is zero.
    pub fn new(width: usize, height: usize, kind: CellKind) -> Grid {
        assert!(
            width >= 1 && height >= 1,
            "grid dimensions must be at least 1x1, got {width}x{height}"
        );
        let values = iproduct!(0..height, 0..width)
            .map(|(y, x)| Cell::new(kind, Point::new(x as i32, y as i32)))
            .collect();
        Grid {
            cells: SimpleGrid {
                width,
                height,
                values,
            },
        }
    }
    /// Returns `(width, height)`.
    pub fn size(&self) -> (usize, usize) {
        (self.cells.width(), self.cells.height())
    }
    pub fn width(&self) -> usize {
        self.cells.width()
    }
    pub fn height(&self) -> usize {
        self.cells.height()
    }
    /// The underlying storage, for index-based lookups such as [ValueGrid::get_ix_point].
    pub fn storage(&self) -> &SimpleGrid<Cell> {
        &self.cells
    }
    /// Checks that `0 <= x < width` and `0 <= y < height`.
    pub fn is_valid(&self, position: Point) -> bool {
        self.cells.point_in_bounds(position)
    }
    fn check_bounds(&self, position: Point) {
        assert!(
            self.is_valid(position),
            "position {} is out of bounds for a {}x{} grid",
            position,
            self.cells.width,
            self.cells.height
        );
    }
    /// The cell at `position`. Callers are expected to check [is_valid](Self::is_valid) first.
    ///
    /// # Panics
    /// If `position` is out of bounds.
    pub fn at(&self, position: Point) -> &Cell {
        self.check_bounds(position);
        &self.cells.values[self.cells.get_ix_point(&position)]
    }
    /// Mutable counterpart of [at](Self::at), with the same precondition.
    pub fn at_mut(&mut self, position: Point) -> &mut Cell {
        self.check_bounds(position);
        let ix = self.cells.get_ix_point(&position);
        &mut self.cells.values[ix]
    }
    /// Checked lookup, [None] outside the grid.
    pub fn get(&self, position: Point) -> Option<&Cell> {
        if self.is_valid(position) {
            Some(&self.cells.values[self.cells.get_ix_point(&position)])
        } else {
            None
        }
    }
    /// Changes the kind of the cell at `position`. Panics like [at](Self::at).
    pub fn set_kind(&mut self, position: Point, kind: CellKind) {
        self.at_mut(position).kind = kind;
    }
    /// True if `position` is inside the grid and not blocked.
    pub fn can_move_to(&self, position: Point) -> bool {
        self.get(position).is_some_and(|cell| !cell.is_blocked())
    }
    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.values.iter()
    }
    /// Rows from top (y = 0) to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.values.chunks(self.cells.width)
    }
    /// The in-bounds 4-neighbourhood of `position`, in the fixed order up, down, left, right.
    pub fn neighbours(&self, position: Point) -> impl Iterator<Item = Point> + '_ {
        NEUMANN_OFFSETS
            .iter()
            .map(move |&(dx, dy)| Point::new(position.x + dx, position.y + dy))
            .filter(move |p| self.is_valid(*p))
    }
    /// Sets every distance to `value` and clears every predecessor.
    pub fn reset_distances(&mut self, value: Option<usize>) {
        for cell in self.cells.values.iter_mut() {
            cell.distance = value;
            cell.predecessor = None;
        }
    }
    /// Position of the first cell carrying `mark`, scanning row-major.
    pub fn find_mark(&self, mark: CellMark) -> Option<Point> {
        self.cells()
            .find(|cell| cell.mark == mark)
            .map(|cell| cell.position)
    }

    /// Builds a [UnionFind] over cell indices in which empty cells sharing an edge are joined.
    /// Blocked cells stay in singleton components.
    pub fn generate_components(&self) -> UnionFind<usize> {
        debug!("Generating connected components");
        let mut components = UnionFind::new(self.cells.values.len());
        for cell in self.cells().filter(|cell| !cell.is_blocked()) {
            let point = cell.position;
            let parent_ix = self.cells.get_ix_point(&point);
            [
                Point::new(point.x + 1, point.y),
                Point::new(point.x, point.y + 1),
            ]
            .into_iter()
            .filter(|p| self.can_move_to(*p))
            .for_each(|p| {
                components.union(parent_ix, self.cells.get_ix_point(&p));
            });
        }
        components
    }
    /// Checks if start and goal are on the same connected component of empty cells.
    pub fn reachable(&self, start: &Point, goal: &Point) -> bool {
        if self.is_valid(*start) && self.is_valid(*goal) {
            let components = self.generate_components();
            components.equiv(
                self.cells.get_ix_point(start),
                self.cells.get_ix_point(goal),
            )
        } else {
            false
        }
    }
}

impl PartialEq for Grid {
    fn eq(&self, other: &Grid) -> bool {
        self.size() == other.size() && self.cells.values == other.cells.values
    }
}

impl Eq for Grid {}

impl fmt::Display for Grid {
    /// One line per row: `#` blocked, `S` start, `E` end, `.` otherwise.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.rows() {
            let line = row
                .iter()
                .map(|cell| match (cell.mark, cell.kind) {
                    (CellMark::Start, _) => 'S',
                    (CellMark::End, _) => 'E',
                    (CellMark::None, CellKind::Blocked) => '#',
                    (CellMark::None, CellKind::Empty) => '.',
                })
                .join("");
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

impl FromStr for Grid {
    type Err = ParseGridError;

    /// Parses the format written by [Display](fmt::Display). Blank lines and surrounding
    /// whitespace are ignored; `S` and `E` are empty cells carrying a mark.
    fn from_str(s: &str) -> Result<Grid, ParseGridError> {
        let lines = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>();
        let width = match lines.first() {
            Some(line) => line.chars().count(),
            None => return Err(ParseGridError::Empty),
        };
        let mut grid = Grid::new(width, lines.len(), CellKind::Empty);
        for (y, line) in lines.iter().enumerate() {
            let found = line.chars().count();
            if found != width {
                return Err(ParseGridError::Ragged {
                    row: y,
                    expected: width,
                    found,
                });
            }
            for (x, symbol) in line.chars().enumerate() {
                let cell = grid.at_mut(Point::new(x as i32, y as i32));
                match symbol {
                    '.' => {}
                    '#' => cell.kind = CellKind::Blocked,
                    'S' => cell.mark = CellMark::Start,
                    'E' => cell.mark = CellMark::End,
                    _ => {
                        return Err(ParseGridError::UnknownSymbol {
                            symbol,
                            row: y,
                            column: x,
                        })
                    }
                }
            }
        }
        Ok(grid)
    }
}
