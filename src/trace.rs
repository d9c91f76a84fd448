use crate::CellIndex;
use core::fmt;
use grid_util::point::Point;
use itertools::Itertools;

/// Spreadsheet-style column name: 0 -> `A`, 25 -> `Z`, 26 -> `AA`.
pub fn column_name(col: usize) -> String {
    let mut name = Vec::new();
    let mut n = col + 1;
    while n > 0 {
        n -= 1;
        name.push(char::from(b'A' + (n % 26) as u8));
        n /= 26;
    }
    name.iter().rev().collect()
}

/// Human readable record of a finished playback: every path cell as `<column><row>`, joined by
/// `-` in path order, e.g. `A0-A1-B1`. An empty path gives an empty trace.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Trace {
    cells: Vec<Point>,
}

impl Trace {
    /// Decodes a path of cell indices for a board with `rows` rows. A board without rows has no
    /// cells, so `rows == 0` gives an empty trace.
    pub fn from_path(path: &[CellIndex], rows: usize) -> Trace {
        if rows == 0 {
            return Trace::default();
        }
        Trace {
            cells: path
                .iter()
                .map(|&ix| Point::new((ix / rows) as i32, (ix % rows) as i32))
                .collect(),
        }
    }

    pub fn cells(&self) -> &[Point] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl fmt::Display for Trace {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let joined = self
            .cells
            .iter()
            .map(|p| format!("{}{}", column_name(p.x as usize), p.y))
            .join("-");
        write!(f, "{}", joined)
    }
}
