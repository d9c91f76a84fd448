use crate::error::GridError;
use crate::grid::Grid;
use crate::label::CellLabel;
use core::fmt;
use serde::Deserialize;
use std::str::FromStr;

/// The source map a board is cut from: columns of [CellLabel]s indexed `[col][row]`. A board of
/// `cols x rows` uses the top left window of the map, so one map can back boards of several
/// sizes.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct LabelMap {
    columns: Vec<Vec<CellLabel>>,
}

impl LabelMap {
    pub fn new(columns: Vec<Vec<CellLabel>>) -> LabelMap {
        LabelMap { columns }
    }

    /// Normalises raw string labels, see [CellLabel::parse].
    pub fn from_labels<S: AsRef<str>>(columns: &[Vec<S>]) -> LabelMap {
        LabelMap::new(
            columns
                .iter()
                .map(|column| column.iter().map(|l| CellLabel::parse(l.as_ref())).collect())
                .collect(),
        )
    }

    /// A map where every cell carries the same label.
    pub fn filled(cols: usize, rows: usize, label: CellLabel) -> LabelMap {
        LabelMap::new(vec![vec![label; rows]; cols])
    }

    pub fn cols(&self) -> usize {
        self.columns.len()
    }

    /// Rows of the shortest column, the largest board height that can be cut from the map.
    pub fn rows(&self) -> usize {
        self.columns.iter().map(Vec::len).min().unwrap_or(0)
    }

    pub fn columns(&self) -> &[Vec<CellLabel>] {
        &self.columns
    }

    /// Builds a [Grid] from the top left `cols x rows` window of the map.
    pub fn crop(&self, cols: usize, rows: usize) -> Result<Grid, GridError> {
        if cols > self.cols() || rows > self.rows() {
            return Err(GridError::MapTooSmall {
                cols,
                rows,
                map_cols: self.cols(),
                map_rows: self.rows(),
            });
        }
        Grid::new(
            self.columns
                .iter()
                .take(cols)
                .map(|column| column[..rows].to_vec())
                .collect(),
        )
    }
}

/// Parses ASCII art with one text line per row: `.` is road and any other character is field.
/// Blank lines and surrounding whitespace are ignored.
impl FromStr for LabelMap {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lines = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| line.chars().collect::<Vec<char>>())
            .collect::<Vec<_>>();
        let cols = lines.first().map_or(0, Vec::len);
        if let Some((ix, line)) = lines.iter().enumerate().find(|(_, l)| l.len() != cols) {
            return Err(GridError::RaggedLine {
                line: ix,
                len: line.len(),
                expected: cols,
            });
        }
        let columns = (0..cols)
            .map(|col| {
                lines
                    .iter()
                    .map(|line| match line[col] {
                        '.' => CellLabel::Road,
                        _ => CellLabel::Field,
                    })
                    .collect()
            })
            .collect();
        Ok(LabelMap::new(columns))
    }
}

impl fmt::Display for LabelMap {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in 0..self.rows() {
            let line = self
                .columns
                .iter()
                .map(|column| column[row].glyph())
                .collect::<String>();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
