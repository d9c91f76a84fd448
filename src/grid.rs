use crate::error::GridError;
use crate::label::CellLabel;
use crate::CellIndex;
use core::fmt;
use grid_util::grid::{Grid as ValueGrid, SimpleGrid};
use grid_util::point::Point;
use log::info;
use petgraph::unionfind::UnionFind;

/// [Grid] is the immutable walkability model of a board. Labels live in a [SimpleGrid] addressed
/// by `(col, row)`; in addition it keeps connected components of the walkable cells in a
/// [UnionFind] structure keyed by [CellIndex], which lets the search bail out early when start
/// and goal can never meet.
///
/// Positions are [Point]s with `x` as the column and `y` as the row.
#[derive(Clone, Debug)]
pub struct Grid {
    labels: SimpleGrid<CellLabel>,
    components: UnionFind<usize>,
}

impl Grid {
    /// Builds a grid from columns of labels. Every column must have the same, non-zero length.
    pub fn new(columns: Vec<Vec<CellLabel>>) -> Result<Grid, GridError> {
        let cols = columns.len();
        let rows = columns.first().map_or(0, Vec::len);
        if cols == 0 || rows == 0 {
            return Err(GridError::Empty);
        }
        if let Some((col, column)) = columns.iter().enumerate().find(|(_, c)| c.len() != rows) {
            return Err(GridError::Ragged {
                col,
                len: column.len(),
                expected: rows,
            });
        }
        let mut labels = SimpleGrid::new(cols, rows, CellLabel::Field);
        for (col, column) in columns.into_iter().enumerate() {
            for (row, label) in column.into_iter().enumerate() {
                labels.set(col, row, label);
            }
        }
        let mut grid = Grid {
            labels,
            components: UnionFind::new(cols * rows),
        };
        grid.generate_components();
        Ok(grid)
    }

    /// Builds a grid from raw string labels, see [CellLabel::parse].
    pub fn from_labels<S: AsRef<str>>(columns: &[Vec<S>]) -> Result<Grid, GridError> {
        Grid::new(
            columns
                .iter()
                .map(|column| column.iter().map(|l| CellLabel::parse(l.as_ref())).collect())
                .collect(),
        )
    }

    pub fn cols(&self) -> usize {
        self.labels.width()
    }
    pub fn rows(&self) -> usize {
        self.labels.height()
    }
    /// `(cols, rows)`
    pub fn dimensions(&self) -> (usize, usize) {
        (self.cols(), self.rows())
    }
    /// Number of cells.
    pub fn len(&self) -> usize {
        self.cols() * self.rows()
    }
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn in_bounds(&self, col: i64, row: i64) -> bool {
        col >= 0 && row >= 0 && self.labels.index_in_bounds(col as usize, row as usize)
    }
    pub fn point_in_bounds(&self, point: Point) -> bool {
        self.in_bounds(point.x as i64, point.y as i64)
    }

    /// Encodes a position as its [CellIndex], `col * rows + row`.
    pub fn index_of(&self, point: Point) -> Result<CellIndex, GridError> {
        if self.point_in_bounds(point) {
            Ok(point.x as usize * self.rows() + point.y as usize)
        } else {
            Err(self.out_of_bounds(point.x as i64, point.y as i64))
        }
    }

    /// Decodes a [CellIndex] back into its position.
    pub fn position_of(&self, index: CellIndex) -> Result<Point, GridError> {
        if index < self.len() {
            Ok(Point::new(
                (index / self.rows()) as i32,
                (index % self.rows()) as i32,
            ))
        } else {
            Err(GridError::IndexOutOfBounds {
                index,
                len: self.len(),
            })
        }
    }

    pub fn label(&self, col: usize, row: usize) -> Result<CellLabel, GridError> {
        if self.labels.index_in_bounds(col, row) {
            Ok(self.labels.get(col, row))
        } else {
            Err(self.out_of_bounds(col as i64, row as i64))
        }
    }

    /// Label of the cell with the given index.
    pub fn label_at(&self, index: CellIndex) -> Result<CellLabel, GridError> {
        self.position_of(index).map(|p| self.labels.get_point(p))
    }

    pub fn is_walkable(&self, col: usize, row: usize) -> Result<bool, GridError> {
        self.label(col, row).map(CellLabel::is_walkable)
    }

    /// Whether a path may enter `pos`. Out-of-bounds positions are simply not enterable.
    pub fn can_move_to(&self, pos: Point) -> bool {
        self.point_in_bounds(pos) && self.labels.get_point(pos).is_walkable()
    }

    /// Retrieves the component id a given in-bounds [Point] belongs to.
    pub fn get_component(&self, point: Point) -> Result<usize, GridError> {
        self.index_of(point).map(|ix| self.components.find(ix))
    }

    /// Checks if start and goal are walkable cells of the same component.
    pub fn reachable(&self, start: Point, goal: Point) -> bool {
        !self.unreachable(start, goal)
    }

    /// Checks if start and goal are on different components, or either of them can not be
    /// entered at all.
    pub fn unreachable(&self, start: Point, goal: Point) -> bool {
        if !self.can_move_to(start) || !self.can_move_to(goal) {
            return true;
        }
        match (self.index_of(start), self.index_of(goal)) {
            (Ok(start_ix), Ok(goal_ix)) => {
                if self.components.equiv(start_ix, goal_ix) {
                    false
                } else {
                    info!("{} and {} are not equivalent components", start_ix, goal_ix);
                    true
                }
            }
            _ => true,
        }
    }

    fn out_of_bounds(&self, col: i64, row: i64) -> GridError {
        GridError::OutOfBounds {
            col,
            row,
            cols: self.cols(),
            rows: self.rows(),
        }
    }

    /// Links up walkable grid neighbours into the same components. Only the cells below and to
    /// the right need to be visited since unions are symmetric.
    fn generate_components(&mut self) {
        info!("Generating connected components");
        for col in 0..self.cols() as i32 {
            for row in 0..self.rows() as i32 {
                let point = Point::new(col, row);
                if !self.can_move_to(point) {
                    continue;
                }
                let neighbours = [Point::new(col, row + 1), Point::new(col + 1, row)]
                    .into_iter()
                    .filter(|&p| self.can_move_to(p))
                    .filter_map(|p| self.index_of(p).ok())
                    .collect::<Vec<CellIndex>>();
                if let Ok(parent_ix) = self.index_of(point) {
                    for ix in neighbours {
                        self.components.union(parent_ix, ix);
                    }
                }
            }
        }
    }
}

impl PartialEq for Grid {
    fn eq(&self, other: &Self) -> bool {
        self.dimensions() == other.dimensions()
            && (0..self.cols()).all(|col| {
                (0..self.rows()).all(|row| self.labels.get(col, row) == other.labels.get(col, row))
            })
    }
}
impl Eq for Grid {}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in 0..self.rows() {
            let line = (0..self.cols())
                .map(|col| self.labels.get(col, row).glyph())
                .collect::<String>();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
