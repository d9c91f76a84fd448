use crate::bfs::bfs;
use crate::grid::Grid;
use crate::{CellIndex, Path};
use grid_util::point::Point;
use log::{debug, info, warn};

/// Order in which neighbours are expanded, as `(column delta, row delta)`: column - 1,
/// column + 1, row - 1, row + 1. Labels are indexed `[col][row]`, so in array-index terms this is
/// up, down, left, right. The order decides which of several shortest paths is returned, e.g.
/// `(0, 0) -> (1, 0) -> (1, 1)` rather than `(0, 0) -> (0, 1) -> (1, 1)` on an open 2x2 grid.
pub const NEIGHBOUR_ORDER: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// The 4-neighbourhood of `point` in [NEIGHBOUR_ORDER], without bounds checks.
pub fn neighbours(point: Point) -> [Point; 4] {
    NEIGHBOUR_ORDER.map(|(dx, dy)| Point::new(point.x + dx, point.y + dy))
}

fn pathfinding_neighborhood(grid: &Grid, pos: &Point) -> Vec<Point> {
    neighbours(*pos)
        .into_iter()
        .filter(|&p| grid.can_move_to(p))
        .collect()
}

/// Computes the shortest 4-connected path from `start` to `end` as a sequence of [CellIndex]es,
/// both endpoints included. Returns an empty path if either endpoint is out of bounds or not
/// walkable, or if no path exists; that is an ordinary outcome and not an error.
pub fn find_shortest_path(grid: &Grid, start: Point, end: Point) -> Path {
    if !grid.can_move_to(start) || !grid.can_move_to(end) {
        info!("{} or {} can not be entered, no path", start, end);
        return Path::new();
    }
    if grid.unreachable(start, end) {
        info!("{} is not reachable from {}", end, start);
        return Path::new();
    }
    debug!("{} is reachable from {}, computing path", end, start);
    match bfs(
        &start,
        |node| pathfinding_neighborhood(grid, node),
        |node| *node == end,
    ) {
        Some(points) => points
            .into_iter()
            .filter_map(|p| grid.index_of(p).ok())
            .collect::<Vec<CellIndex>>(),
        None => {
            warn!("Reachable goal could not be pathed to, is the component map correct?");
            Path::new()
        }
    }
}
