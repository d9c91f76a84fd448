use crate::CellIndex;
use derive_more::{Display, Error};
use log::debug;

/// Where a board is in its select-then-play cycle. Derived from [Selection], never stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display)]
pub enum Phase {
    Idle,
    OriginSet,
    ReadyToPlay,
    Running,
}

/// Result of delivering a tap to the selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TapOutcome {
    OriginSet(CellIndex),
    DestinationSet(CellIndex),
    /// Blocked cell, both ends already chosen, or a playback is running.
    Ignored,
}

/// Why a play request did not start. Origin is checked before destination.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error)]
pub enum PlayRefusal {
    #[display("no origin selected")]
    NoOrigin,
    #[display("no destination selected")]
    NoDestination,
    /// Both ends are set but a playback is already in progress.
    #[display("a playback is already running")]
    Running,
}

/// Origin and destination chosen by the user plus the running flag of the playback. Selections
/// are made origin first, then destination, and are always cleared together.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    origin: Option<CellIndex>,
    destination: Option<CellIndex>,
    running: bool,
}

impl Selection {
    pub fn new() -> Selection {
        Selection::default()
    }

    pub fn origin(&self) -> Option<CellIndex> {
        self.origin
    }
    pub fn destination(&self) -> Option<CellIndex> {
        self.destination
    }
    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn phase(&self) -> Phase {
        match (self.running, self.origin, self.destination) {
            (true, _, _) => Phase::Running,
            (false, Some(_), Some(_)) => Phase::ReadyToPlay,
            (false, Some(_), None) => Phase::OriginSet,
            (false, None, _) => Phase::Idle,
        }
    }

    /// Applies a tap on the cell `index`. Only walkable cells are selectable and nothing changes
    /// while running. Tapping the origin again makes it the destination as well.
    pub fn tap(&mut self, index: CellIndex, walkable: bool) -> TapOutcome {
        if !walkable || self.running {
            debug!("Ignoring tap on {} (walkable: {}, running: {})", index, walkable, self.running);
            return TapOutcome::Ignored;
        }
        match (self.origin, self.destination) {
            (None, _) => {
                self.origin = Some(index);
                TapOutcome::OriginSet(index)
            }
            (Some(_), None) => {
                self.destination = Some(index);
                TapOutcome::DestinationSet(index)
            }
            (Some(_), Some(_)) => TapOutcome::Ignored,
        }
    }

    /// Starts a run if both ends are chosen, returning `(origin, destination)`. Only
    /// [Phase::ReadyToPlay] can start a run.
    pub fn arm(&mut self) -> Result<(CellIndex, CellIndex), PlayRefusal> {
        let origin = self.origin.ok_or(PlayRefusal::NoOrigin)?;
        let destination = self.destination.ok_or(PlayRefusal::NoDestination)?;
        if self.running {
            return Err(PlayRefusal::Running);
        }
        self.running = true;
        Ok((origin, destination))
    }

    /// Back to [Phase::Idle].
    pub fn clear(&mut self) {
        *self = Selection::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tap_sequence() {
        let mut selection = Selection::new();
        assert_eq!(selection.phase(), Phase::Idle);
        assert_eq!(selection.tap(3, true), TapOutcome::OriginSet(3));
        assert_eq!(selection.phase(), Phase::OriginSet);
        assert_eq!(selection.tap(5, true), TapOutcome::DestinationSet(5));
        assert_eq!(selection.phase(), Phase::ReadyToPlay);
        assert_eq!(selection.tap(7, true), TapOutcome::Ignored);
        assert_eq!(selection.origin(), Some(3));
        assert_eq!(selection.destination(), Some(5));
    }

    #[test]
    fn test_blocked_taps_ignored() {
        let mut selection = Selection::new();
        assert_eq!(selection.tap(1, false), TapOutcome::Ignored);
        assert_eq!(selection.phase(), Phase::Idle);
    }

    #[test]
    fn test_same_cell_twice() {
        let mut selection = Selection::new();
        selection.tap(4, true);
        assert_eq!(selection.tap(4, true), TapOutcome::DestinationSet(4));
        assert_eq!(selection.arm(), Ok((4, 4)));
    }

    #[test]
    fn test_arm_refusals() {
        let mut selection = Selection::new();
        assert_eq!(selection.arm(), Err(PlayRefusal::NoOrigin));
        selection.tap(0, true);
        assert_eq!(selection.arm(), Err(PlayRefusal::NoDestination));
        assert!(!selection.is_running());
        selection.tap(1, true);
        assert_eq!(selection.arm(), Ok((0, 1)));
        assert_eq!(selection.phase(), Phase::Running);
        assert_eq!(selection.arm(), Err(PlayRefusal::Running));
    }

    #[test]
    fn test_refusal_is_an_error() {
        let err: Box<dyn std::error::Error> = Box::new(PlayRefusal::NoDestination);
        assert_eq!(err.to_string(), "no destination selected");
    }

    #[test]
    fn test_origin_checked_first() {
        let mut selection = Selection {
            origin: None,
            destination: Some(2),
            running: false,
        };
        assert_eq!(selection.arm(), Err(PlayRefusal::NoOrigin));
    }

    #[test]
    fn test_running_freezes_selection() {
        let mut selection = Selection::new();
        selection.tap(0, true);
        selection.tap(1, true);
        selection.arm().unwrap();
        let before = selection;
        assert_eq!(selection.tap(2, true), TapOutcome::Ignored);
        assert_eq!(selection, before);
        selection.clear();
        assert_eq!(selection, Selection::new());
    }
}
