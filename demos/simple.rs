use snake_path::{Board, CancelToken, LabelMap, PlayOutcome, Point};

// In this example a path is played back on a 6x4 board with shape
//  ______
// |S..#..|
// |.#.#.#|
// |.#...#|
// |...#.G|
//  ______
// where
// - # marks a field
// - S marks the origin
// - G marks the destination
//
// Nodes have a 4-neighborhood and one tile is marked every 180 ms.

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let map: LabelMap = "
        ...#..
        .#.#.#
        .#...#
        ...#..
    "
    .parse()
    .unwrap();
    let mut board = Board::with_map(map, 6, 4).unwrap();
    println!("{}", board.grid());

    let origin = board.grid().index_of(Point::new(0, 0)).unwrap();
    let destination = board.grid().index_of(Point::new(5, 3)).unwrap();
    board.tap(origin).unwrap();
    board.tap(destination).unwrap();

    let mut ticker = board.ticker();
    let outcome = board
        .play()
        .unwrap()
        .run(&mut ticker, &CancelToken::new())
        .await;
    println!("{}", board.surface());
    match outcome {
        PlayOutcome::Completed(trace) => println!("Path: {}", trace),
        PlayOutcome::Cancelled => println!("Cancelled"),
    }
}
