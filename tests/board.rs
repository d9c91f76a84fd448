mod common;

use common::{RecordingSurface, SurfaceEvent};
use snake_path::{
    Board, CancelToken, CellLabel, GridError, ImmediateTicker, LabelMap, Phase, PlayOutcome,
    PlayRefusal, Settings, TapOutcome, Ticker,
};
use std::time::Duration;
use tokio::time::Instant;

fn open_board(cols: usize, rows: usize) -> Board {
    Board::with_map(LabelMap::filled(cols, rows, CellLabel::Road), cols, rows).unwrap()
}

/// `S` at (0,0), `G` at (2,2) walled in.
const ENCLOSED: &str = "
    .....
    .###.
    .#.#.
    .###.
    .....
";

/// Completes ticks at once and cancels the token on tick number `cancel_at`.
struct CancellingTicker {
    ticks: usize,
    cancel_at: usize,
    token: CancelToken,
}

impl Ticker for CancellingTicker {
    async fn tick(&mut self) {
        self.ticks += 1;
        if self.ticks == self.cancel_at {
            self.token.cancel();
        }
    }
}

#[test]
fn test_selection_state_machine() {
    let mut board = open_board(3, 3);
    assert_eq!(board.phase(), Phase::Idle);
    assert_eq!(board.tap(4), Ok(TapOutcome::OriginSet(4)));
    assert_eq!(board.phase(), Phase::OriginSet);
    assert_eq!(board.tap(8), Ok(TapOutcome::DestinationSet(8)));
    assert_eq!(board.phase(), Phase::ReadyToPlay);
    assert_eq!(board.tap(0), Ok(TapOutcome::Ignored));
    assert_eq!(board.surface().selected_cells(), vec![4, 8]);
}

#[test]
fn test_taps_on_fields_ignored() {
    let map: LabelMap = ".#\n..".parse().unwrap();
    let mut board = Board::with_map(map, 2, 2).unwrap();
    // (1, 0) is the field
    assert_eq!(board.tap(2), Ok(TapOutcome::Ignored));
    assert_eq!(board.phase(), Phase::Idle);
    assert_eq!(
        board.tap(4),
        Err(GridError::IndexOutOfBounds { index: 4, len: 4 })
    );
}

#[test]
fn test_play_refusals_are_synchronous() {
    let mut board = open_board(2, 2);
    assert_eq!(board.play().err(), Some(PlayRefusal::NoOrigin));
    board.tap(0).unwrap();
    assert_eq!(board.play().err(), Some(PlayRefusal::NoDestination));
    assert!(!board.is_running());
    assert!(board.playback().is_none());
}

#[test]
fn test_taps_while_running_are_ignored() {
    let mut board = open_board(2, 2);
    board.tap(0).unwrap();
    board.tap(3).unwrap();
    board.play().unwrap().detach();
    let before = *board.selection();
    assert_eq!(board.tap(1), Ok(TapOutcome::Ignored));
    assert_eq!(*board.selection(), before);
    assert_eq!(board.play().err(), Some(PlayRefusal::Running));
}

#[tokio::test(start_paused = true)]
async fn test_play_two_by_two() {
    let mut board = open_board(2, 2);
    board.tap(0).unwrap();
    board.tap(3).unwrap();
    let mut ticker = board.ticker();
    let start = Instant::now();
    let outcome = board
        .play()
        .unwrap()
        .run(&mut ticker, &CancelToken::new())
        .await;
    assert_eq!(
        outcome.trace().map(ToString::to_string),
        Some("A0-B0-B1".to_owned())
    );
    // Three marking ticks plus the one that finds the end.
    assert_eq!(start.elapsed(), Duration::from_millis(4 * 180));
    assert_eq!(board.phase(), Phase::Idle);
    assert_eq!(board.selection().origin(), None);
    assert_eq!(board.selection().destination(), None);
    assert!(!board.is_running());
    assert_eq!(board.surface().path_cells(), vec![0, 2, 3]);
}

#[tokio::test(start_paused = true)]
async fn test_reused_ticker_waits_a_full_interval() {
    let mut board = open_board(2, 2);
    let mut ticker = board.ticker();
    for _ in 0..2 {
        board.tap(0).unwrap();
        board.tap(3).unwrap();
        let start = Instant::now();
        let outcome = board
            .play()
            .unwrap()
            .run(&mut ticker, &CancelToken::new())
            .await;
        assert_eq!(outcome.trace().unwrap().to_string(), "A0-B0-B1");
        assert_eq!(start.elapsed(), Duration::from_millis(4 * 180));
        tokio::time::sleep(Duration::from_secs(10)).await;
    }
}

#[tokio::test(start_paused = true)]
async fn test_timed_out_run_leaves_board_idle() {
    let mut board = open_board(3, 3);
    board.tap(0).unwrap();
    board.tap(8).unwrap();
    let mut ticker = board.ticker();
    let playing = board.play().unwrap();
    let result = tokio::time::timeout(
        Duration::from_millis(200),
        playing.run(&mut ticker, &CancelToken::new()),
    )
    .await;
    assert!(result.is_err());
    assert_eq!(board.phase(), Phase::Idle);
    assert!(board.playback().is_none());
    assert_eq!(board.surface().path_cells(), vec![0]);
    assert!(board.surface().selected_cells().is_empty());
    assert_eq!(board.tap(4), Ok(TapOutcome::OriginSet(4)));
}

#[tokio::test(start_paused = true)]
async fn test_unreachable_destination_gives_empty_trace() {
    let map: LabelMap = ENCLOSED.parse().unwrap();
    let mut board = Board::with_map(map, 5, 5).unwrap();
    board.tap(0).unwrap();
    board.tap(2 * 5 + 2).unwrap();
    let mut ticker = board.ticker();
    let start = Instant::now();
    let playing = board.play().unwrap();
    assert!(playing.path().is_empty());
    let outcome = playing.run(&mut ticker, &CancelToken::new()).await;
    match outcome {
        PlayOutcome::Completed(trace) => assert_eq!(trace.to_string(), ""),
        PlayOutcome::Cancelled => panic!("playback was not cancelled"),
    }
    assert_eq!(start.elapsed(), Duration::from_millis(180));
    assert_eq!(board.phase(), Phase::Idle);
    assert!(board.surface().path_cells().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_configured_interval() {
    let settings = Settings {
        tick_interval_ms: 50,
    };
    let map = LabelMap::filled(4, 1, CellLabel::Road);
    let mut board = Board::new(map, 4, 1, RecordingSurface::default(), settings).unwrap();
    board.tap(0).unwrap();
    board.tap(3).unwrap();
    let mut ticker = board.ticker();
    let start = Instant::now();
    let outcome = board
        .play()
        .unwrap()
        .run(&mut ticker, &CancelToken::new())
        .await;
    assert_eq!(outcome.trace().unwrap().to_string(), "A0-B0-C0-D0");
    assert_eq!(start.elapsed(), Duration::from_millis(5 * 50));
}

#[tokio::test]
async fn test_surface_sees_path_in_order() {
    let map: LabelMap = "
        ...
        ##.
        ...
    "
    .parse()
    .unwrap();
    let mut board = Board::new(map, 3, 3, RecordingSurface::default(), Settings::default())
        .unwrap();
    // (0, 0) -> (0, 2)
    board.tap(0).unwrap();
    board.tap(2).unwrap();
    let playing = board.play().unwrap();
    let path = playing.path().to_vec();
    let outcome = playing
        .run(&mut ImmediateTicker, &CancelToken::new())
        .await;
    assert_eq!(outcome.trace().unwrap().to_string(), "A0-B0-C0-C1-C2-B2-A2");
    assert_eq!(board.surface().marked(), path);
    assert_eq!(
        board.surface().events.first(),
        Some(&SurfaceEvent::Reset(9))
    );
    assert_eq!(
        board.surface().events[1..3],
        [SurfaceEvent::ClearPath, SurfaceEvent::Selected(0, true)]
    );
}

#[tokio::test]
async fn test_cancel_token_stops_without_trace() {
    let mut board = open_board(5, 1);
    board.tap(0).unwrap();
    board.tap(4).unwrap();
    let token = CancelToken::new();
    let mut ticker = CancellingTicker {
        ticks: 0,
        cancel_at: 3,
        token: token.clone(),
    };
    let outcome = board.play().unwrap().run(&mut ticker, &token).await;
    assert_eq!(outcome, PlayOutcome::Cancelled);
    assert_eq!(board.surface().path_cells(), vec![0, 1]);
    assert_eq!(board.phase(), Phase::Idle);
    assert!(board.playback().is_none());
    assert!(board.surface().selected_cells().is_empty());
}

#[test]
fn test_restart_is_idempotent() {
    let map: LabelMap = ENCLOSED.parse().unwrap();
    let mut once = Board::with_map(map.clone(), 5, 5).unwrap();
    let mut twice = Board::with_map(map, 5, 5).unwrap();
    for board in [&mut once, &mut twice] {
        board.tap(0).unwrap();
        board.tap(4).unwrap();
    }
    once.restart(4, 3).unwrap();
    twice.restart(4, 3).unwrap();
    twice.restart(4, 3).unwrap();
    assert_eq!(once.grid(), twice.grid());
    assert_eq!(once.selection(), twice.selection());
    assert_eq!(once.surface(), twice.surface());
    assert_eq!(once.phase(), Phase::Idle);
    assert_eq!(once.grid().dimensions(), (4, 3));
}

#[test]
fn test_restart_drops_running_playback() {
    let mut board = open_board(3, 3);
    board.tap(0).unwrap();
    board.tap(8).unwrap();
    board.play().unwrap().detach();
    board.step();
    board.restart(3, 3).unwrap();
    assert_eq!(board.phase(), Phase::Idle);
    assert_eq!(board.step(), None);
    assert!(board.surface().path_cells().is_empty());
}

#[test]
fn test_restart_too_large_leaves_board_untouched() {
    let mut board = open_board(2, 2);
    board.tap(1).unwrap();
    assert_eq!(
        board.restart(3, 2),
        Err(GridError::MapTooSmall {
            cols: 3,
            rows: 2,
            map_cols: 2,
            map_rows: 2
        })
    );
    assert_eq!(board.phase(), Phase::OriginSet);
    assert_eq!(board.grid().dimensions(), (2, 2));
}

#[test]
fn test_new_origin_clears_previous_path() {
    let mut board = open_board(2, 2);
    board.tap(0).unwrap();
    board.tap(1).unwrap();
    board.play().unwrap().finish();
    assert_eq!(board.surface().path_cells(), vec![0, 1]);
    board.tap(3).unwrap();
    assert!(board.surface().path_cells().is_empty());
    assert_eq!(board.surface().selected_cells(), vec![3]);
}
