use derive_more::{Display, Error};

/// Errors raised when a grid is built or addressed incorrectly. These are caller faults and are
/// never clamped or retried; an unreachable destination is not an error and is reported as an
/// empty path instead.
#[derive(Clone, Debug, PartialEq, Eq, Display, Error)]
pub enum GridError {
    /// A `(col, row)` position outside the grid.
    #[display("position ({col}, {row}) is outside the {cols}x{rows} grid")]
    OutOfBounds {
        col: i64,
        row: i64,
        cols: usize,
        rows: usize,
    },
    /// A cell index at or past the number of cells.
    #[display("cell index {index} is outside a grid of {len} cells")]
    IndexOutOfBounds { index: usize, len: usize },
    /// A grid needs at least one column and one row.
    #[display("a grid needs at least one column and one row")]
    Empty,
    /// Column `col` has `len` cells where `expected` were required.
    #[display("column {col} has {len} cells, expected {expected}")]
    Ragged {
        col: usize,
        len: usize,
        expected: usize,
    },
    /// Text line `line` of an ASCII map is `len` characters wide where `expected` were required.
    #[display("line {line} is {len} characters wide, expected {expected}")]
    RaggedLine {
        line: usize,
        len: usize,
        expected: usize,
    },
    /// A restart asked for a window larger than the label map.
    #[display("requested {cols}x{rows} board but the map is only {map_cols}x{map_rows}")]
    MapTooSmall {
        cols: usize,
        rows: usize,
        map_cols: usize,
        map_rows: usize,
    },
}
