#![allow(dead_code)]
use rand::prelude::*;
use snake_path::{CellIndex, CellLabel, Grid, LabelMap, Point, Surface};

/// Random map where each cell is a field with probability `blocked`.
pub fn random_map(cols: usize, rows: usize, blocked: f64, rng: &mut StdRng) -> LabelMap {
    LabelMap::new(
        (0..cols)
            .map(|_| {
                (0..rows)
                    .map(|_| {
                        if rng.gen_bool(blocked) {
                            CellLabel::Field
                        } else {
                            CellLabel::Road
                        }
                    })
                    .collect()
            })
            .collect(),
    )
}

pub fn random_grid(cols: usize, rows: usize, blocked: f64, rng: &mut StdRng) -> Grid {
    random_map(cols, rows, blocked, rng).crop(cols, rows).unwrap()
}

pub fn random_grid_point(grid: &Grid, rng: &mut StdRng) -> Point {
    Point::new(
        rng.gen_range(0..grid.cols()) as i32,
        rng.gen_range(0..grid.rows()) as i32,
    )
}

/// Prints the grid with `S` and `G` marking start and goal.
pub fn visualize_grid(grid: &Grid, start: &Point, end: &Point) {
    for y in 0..grid.rows() as i32 {
        for x in 0..grid.cols() as i32 {
            let p = Point::new(x, y);
            if *start == p {
                print!("S");
            } else if *end == p {
                print!("G");
            } else if grid.can_move_to(p) {
                print!(".");
            } else {
                print!("#");
            }
        }
        println!();
    }
}

/// One call made on a [RecordingSurface].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SurfaceEvent {
    Reset(usize),
    OnPath(CellIndex, bool),
    Selected(CellIndex, bool),
    ClearPath,
}

/// Surface that records every call in order.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    pub events: Vec<SurfaceEvent>,
}

impl RecordingSurface {
    pub fn marked(&self) -> Vec<CellIndex> {
        self.events
            .iter()
            .filter_map(|e| match e {
                SurfaceEvent::OnPath(ix, true) => Some(*ix),
                _ => None,
            })
            .collect()
    }
}

impl Surface for RecordingSurface {
    fn reset(&mut self, grid: &Grid) {
        self.events.push(SurfaceEvent::Reset(grid.len()));
    }
    fn set_on_path(&mut self, index: CellIndex, on_path: bool) {
        self.events.push(SurfaceEvent::OnPath(index, on_path));
    }
    fn set_selected(&mut self, index: CellIndex, selected: bool) {
        self.events.push(SurfaceEvent::Selected(index, selected));
    }
    fn clear_path(&mut self) {
        self.events.push(SurfaceEvent::ClearPath);
    }
}
