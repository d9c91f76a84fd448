use crate::trace::Trace;
use crate::{CellIndex, Path};

/// Cursor over a computed path. Each [advance](Playback::advance) hands out the next cell to
/// mark; once the cursor has run past the end the playback is exhausted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Playback {
    path: Path,
    rows: usize,
    cursor: usize,
}

/// One tick of a playback.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Step {
    /// The cell was marked as on the path.
    Visited(CellIndex),
    /// The path is exhausted; the board is idle again.
    Finished(Trace),
}

/// How an awaited playback ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PlayOutcome {
    Completed(Trace),
    /// Stopped through a [CancelToken](crate::CancelToken) or
    /// [Board::cancel](crate::Board::cancel); no trace is produced.
    Cancelled,
}

impl PlayOutcome {
    pub fn trace(&self) -> Option<&Trace> {
        match self {
            PlayOutcome::Completed(trace) => Some(trace),
            PlayOutcome::Cancelled => None,
        }
    }
}

impl Playback {
    /// `rows` is the row count of the grid the path was computed on.
    pub fn new(path: Path, rows: usize) -> Playback {
        Playback {
            path,
            rows,
            cursor: 0,
        }
    }

    pub fn path(&self) -> &[CellIndex] {
        &self.path
    }

    /// Number of cells marked so far.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_exhausted(&self) -> bool {
        self.cursor >= self.path.len()
    }

    pub fn advance(&mut self) -> Option<CellIndex> {
        let next = self.path.get(self.cursor).copied()?;
        self.cursor += 1;
        Some(next)
    }

    pub fn trace(&self) -> Trace {
        Trace::from_path(&self.path, self.rows)
    }
}
