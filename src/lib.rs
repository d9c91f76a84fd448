//! # snake_path
//!
//! Shortest paths on tile boards, picked by tapping and played back one tile at a time.
//!
//! A [Board] is cut from a [LabelMap] of road and field cells. The user taps a walkable origin
//! and destination ([Selection]), after which [Board::play] computes the shortest
//! 4-connected path with a
//! [breadth-first search](https://en.wikipedia.org/wiki/Breadth-first_search) and hands back a
//! [Playing] value. Running it marks one path tile per tick on the board's [Surface] and
//! resolves with a [Trace] such as `A0-B0-B1`. Connected components are pre-computed per grid
//! so an unreachable destination is detected without flood-filling the board.
//!
//! Cells are identified by their [CellIndex], `col * rows + row`, and positions are
//! [Point]s with `x` as the column and `y` as the row.
pub mod bfs;
mod board;
mod error;
mod grid;
mod label;
mod map;
pub mod pathfinder;
mod playback;
mod scheduler;
mod selection;
mod settings;
mod surface;
mod trace;

pub use board::{Board, Playing};
pub use error::GridError;
pub use grid::Grid;
pub use grid_util::point::Point;
pub use label::CellLabel;
pub use map::LabelMap;
pub use pathfinder::{find_shortest_path, NEIGHBOUR_ORDER};
pub use playback::{PlayOutcome, Playback, Step};
pub use scheduler::{CancelToken, ImmediateTicker, IntervalTicker, Ticker};
pub use selection::{Phase, PlayRefusal, Selection, TapOutcome};
pub use settings::Settings;
pub use surface::{Surface, Tile, TileSurface};
pub use trace::{column_name, Trace};

/// Canonical identity of a cell: `col * rows + row`.
pub type CellIndex = usize;

/// Cell indices from origin to destination, one orthogonal step apart. Empty when no path
/// exists.
pub type Path = Vec<CellIndex>;
