use crate::error::GridError;
use crate::grid::Grid;
use crate::map::LabelMap;
use crate::pathfinder::find_shortest_path;
use crate::playback::{PlayOutcome, Playback, Step};
use crate::scheduler::{CancelToken, IntervalTicker, Ticker};
use crate::selection::{Phase, PlayRefusal, Selection, TapOutcome};
use crate::settings::Settings;
use crate::surface::{Surface, TileSurface};
use crate::trace::Trace;
use crate::{CellIndex, Path};
use log::{debug, info};

/// [Board] ties the pieces together: it owns the [Grid] cut from a [LabelMap], the user's
/// [Selection], the active [Playback] and the [Surface] it reports tile changes to. All state
/// changes go through `&mut self`, so there is exactly one writer at any time.
#[derive(Debug)]
pub struct Board<S: Surface = TileSurface> {
    map: LabelMap,
    grid: Grid,
    selection: Selection,
    playback: Option<Playback>,
    surface: S,
    settings: Settings,
}

impl Board<TileSurface> {
    /// A board backed by an in-memory [TileSurface] and default [Settings].
    pub fn with_map(map: LabelMap, cols: usize, rows: usize) -> Result<Self, GridError> {
        Board::new(map, cols, rows, TileSurface::new(), Settings::default())
    }
}

impl<S: Surface> Board<S> {
    pub fn new(
        map: LabelMap,
        cols: usize,
        rows: usize,
        mut surface: S,
        settings: Settings,
    ) -> Result<Self, GridError> {
        let grid = map.crop(cols, rows)?;
        surface.reset(&grid);
        info!("Created {}x{} board", cols, rows);
        Ok(Board {
            map,
            grid,
            selection: Selection::new(),
            playback: None,
            surface,
            settings,
        })
    }

    /// Rebuilds the grid as the top left `cols x rows` window of the map and returns to
    /// [Phase::Idle]. A running playback is dropped without a trace. On error the board is left
    /// untouched.
    pub fn restart(&mut self, cols: usize, rows: usize) -> Result<(), GridError> {
        let grid = self.map.crop(cols, rows)?;
        if self.playback.take().is_some() {
            info!("Restart dropped a running playback");
        }
        self.selection.clear();
        self.grid = grid;
        self.surface.reset(&self.grid);
        info!("Restarted board at {}x{}", cols, rows);
        Ok(())
    }

    /// Delivers a tap on the tile `index`. Taps on blocked tiles, taps while running and taps
    /// once both ends are chosen are ignored. Choosing an origin wipes the previous path from
    /// the surface.
    pub fn tap(&mut self, index: CellIndex) -> Result<TapOutcome, GridError> {
        let walkable = self.grid.label_at(index)?.is_walkable();
        let outcome = self.selection.tap(index, walkable);
        match outcome {
            TapOutcome::OriginSet(ix) => {
                self.surface.clear_path();
                self.surface.set_selected(ix, true);
            }
            TapOutcome::DestinationSet(ix) => self.surface.set_selected(ix, true),
            TapOutcome::Ignored => {}
        }
        debug!("Tap on {}: {:?}, now {}", index, outcome, self.selection.phase());
        Ok(outcome)
    }

    /// Starts a playback between the selected cells. Refuses synchronously, without starting
    /// anything, when a selection is missing. Otherwise the path is computed right away and the
    /// returned [Playing] resolves once every cell has been marked.
    pub fn play(&mut self) -> Result<Playing<'_, S>, PlayRefusal> {
        let (origin, destination) = self.selection.arm().inspect_err(|refusal| {
            info!("Play refused: {}", refusal);
        })?;
        let path = match (
            self.grid.position_of(origin),
            self.grid.position_of(destination),
        ) {
            (Ok(start), Ok(end)) => find_shortest_path(&self.grid, start, end),
            _ => Path::new(),
        };
        info!(
            "Playing {} -> {} over {} cells",
            origin,
            destination,
            path.len()
        );
        self.playback = Some(Playback::new(path, self.grid.rows()));
        Ok(Playing {
            board: self,
            detached: false,
        })
    }

    /// Advances the running playback by one tick. Returns [None] if nothing is running. The
    /// tick after the last cell finishes the playback and returns the board to [Phase::Idle].
    pub fn step(&mut self) -> Option<Step> {
        let playback = self.playback.as_mut()?;
        match playback.advance() {
            Some(ix) => {
                self.surface.set_on_path(ix, true);
                debug!("Marked {} ({}/{})", ix, playback.cursor(), playback.path().len());
                Some(Step::Visited(ix))
            }
            None => {
                let trace = playback.trace();
                self.stop();
                info!("Playback finished: '{}'", trace);
                Some(Step::Finished(trace))
            }
        }
    }

    /// Aborts a running playback without producing a trace. Cells already marked stay marked.
    /// Returns `false` if nothing was running.
    pub fn cancel(&mut self) -> bool {
        if !self.selection.is_running() {
            return false;
        }
        self.stop();
        info!("Playback cancelled");
        true
    }

    fn stop(&mut self) {
        self.playback = None;
        for ix in [self.selection.origin(), self.selection.destination()]
            .into_iter()
            .flatten()
        {
            self.surface.set_selected(ix, false);
        }
        self.selection.clear();
    }

    /// A ticker running at the configured tick interval. It can be reused across playbacks since
    /// [Playing::run] restarts it. Must be called inside a tokio runtime.
    pub fn ticker(&self) -> IntervalTicker {
        IntervalTicker::new(self.settings.tick_interval())
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }
    pub fn map(&self) -> &LabelMap {
        &self.map
    }
    pub fn selection(&self) -> &Selection {
        &self.selection
    }
    pub fn phase(&self) -> Phase {
        self.selection.phase()
    }
    pub fn is_running(&self) -> bool {
        self.selection.is_running()
    }
    pub fn playback(&self) -> Option<&Playback> {
        self.playback.as_ref()
    }
    pub fn surface(&self) -> &S {
        &self.surface
    }
    pub fn settings(&self) -> &Settings {
        &self.settings
    }
}

/// A started playback. Holds the board exclusively until it is run to the end, so no tap or
/// restart can interleave with the ticks. Dropping it while the playback is still running
/// cancels the playback, which is what happens when the [run](Playing::run) future is dropped.
/// Hosts that drive ticks themselves through [Board::step] call [detach](Playing::detach)
/// instead.
#[derive(Debug)]
pub struct Playing<'a, S: Surface> {
    board: &'a mut Board<S>,
    detached: bool,
}

impl<'a, S: Surface> Playing<'a, S> {
    /// The computed path; empty if the destination is unreachable.
    pub fn path(&self) -> &[CellIndex] {
        self.board.playback.as_ref().map_or(&[][..], Playback::path)
    }

    /// Marks one cell per tick of `ticker` until the path is exhausted, then resolves with the
    /// trace. The ticker is restarted first so the first cell is marked one tick after the
    /// call. `cancel` is checked after every tick.
    pub async fn run<T: Ticker>(mut self, ticker: &mut T, cancel: &CancelToken) -> PlayOutcome {
        ticker.restart();
        loop {
            ticker.tick().await;
            if cancel.is_cancelled() {
                self.board.cancel();
                return PlayOutcome::Cancelled;
            }
            match self.board.step() {
                Some(Step::Visited(_)) => {}
                Some(Step::Finished(trace)) => return PlayOutcome::Completed(trace),
                None => return PlayOutcome::Cancelled,
            }
        }
    }

    /// Runs the playback to the end without waiting between ticks.
    pub fn finish(mut self) -> Trace {
        loop {
            match self.board.step() {
                Some(Step::Visited(_)) => {}
                Some(Step::Finished(trace)) => return trace,
                None => return Trace::default(),
            }
        }
    }

    /// Releases the board and leaves the playback running in [Phase::Running], to be advanced
    /// with [Board::step] or stopped with [Board::cancel].
    pub fn detach(mut self) {
        self.detached = true;
    }
}

impl<'a, S: Surface> Drop for Playing<'a, S> {
    fn drop(&mut self) {
        if !self.detached && self.board.cancel() {
            debug!("Playing dropped before the end, playback cancelled");
        }
    }
}
