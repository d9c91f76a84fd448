use crate::grid::Grid;
use crate::label::CellLabel;
use crate::CellIndex;
use core::fmt;

/// The rendering side of a board. The board only ever pushes flag changes through this trait and
/// never reads geometry back. Indices are always in range for the grid last passed to
/// [reset](Surface::reset).
pub trait Surface {
    /// Rebuilds the tile set for a fresh grid, all flags off.
    fn reset(&mut self, grid: &Grid);
    fn set_on_path(&mut self, index: CellIndex, on_path: bool);
    fn set_selected(&mut self, index: CellIndex, selected: bool);
    /// Turns off every "on path" flag.
    fn clear_path(&mut self);
}

/// Plain data for one tile of the board; a renderer draws it from the label and the flags.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tile {
    pub index: CellIndex,
    pub label: CellLabel,
    pub on_path: bool,
    pub selected: bool,
}

impl Tile {
    pub fn new(index: CellIndex, label: CellLabel) -> Tile {
        Tile {
            index,
            label,
            on_path: false,
            selected: false,
        }
    }

    /// Glyph of the tile: `*` on path, `o` selected, otherwise the label glyph.
    pub fn glyph(&self) -> char {
        if self.on_path {
            '*'
        } else if self.selected {
            'o'
        } else {
            self.label.glyph()
        }
    }
}

/// In-memory [Surface] holding one [Tile] per cell in [CellIndex] order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TileSurface {
    rows: usize,
    tiles: Vec<Tile>,
}

impl TileSurface {
    pub fn new() -> TileSurface {
        TileSurface::default()
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn tile(&self, index: CellIndex) -> Option<&Tile> {
        self.tiles.get(index)
    }

    /// Indices of the tiles currently flagged as on the path, ascending.
    pub fn path_cells(&self) -> Vec<CellIndex> {
        self.tiles
            .iter()
            .filter(|t| t.on_path)
            .map(|t| t.index)
            .collect()
    }

    pub fn selected_cells(&self) -> Vec<CellIndex> {
        self.tiles
            .iter()
            .filter(|t| t.selected)
            .map(|t| t.index)
            .collect()
    }
}

impl Surface for TileSurface {
    fn reset(&mut self, grid: &Grid) {
        self.rows = grid.rows();
        self.tiles = (0..grid.len())
            .map(|ix| Tile::new(ix, grid.label_at(ix).unwrap_or_default()))
            .collect();
    }
    fn set_on_path(&mut self, index: CellIndex, on_path: bool) {
        if let Some(tile) = self.tiles.get_mut(index) {
            tile.on_path = on_path;
        }
    }
    fn set_selected(&mut self, index: CellIndex, selected: bool) {
        if let Some(tile) = self.tiles.get_mut(index) {
            tile.selected = selected;
        }
    }
    fn clear_path(&mut self) {
        for tile in &mut self.tiles {
            tile.on_path = false;
        }
    }
}

impl fmt::Display for TileSurface {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.rows == 0 {
            return Ok(());
        }
        // [CellIndex] order runs column by column.
        let columns = self.tiles.chunks(self.rows).collect::<Vec<&[Tile]>>();
        for row in 0..self.rows {
            let line = columns
                .iter()
                .filter_map(|column| column.get(row))
                .map(Tile::glyph)
                .collect::<String>();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
