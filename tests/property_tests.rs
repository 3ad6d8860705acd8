//! Property tests: random placement attempts against the board invariants

use proptest::prelude::*;

use qwirkle::core::{line_through, Axis, Board, CellView};
use qwirkle::types::{Color, Direction, PlacementRequest, Pos, Shape, Tile, TilePlacement};

// A small palette keeps a useful share of attempts legal
const COLORS: [Color; 2] = [Color::Blue, Color::Red];
const SHAPES: [Shape; 4] = [Shape::Plus, Shape::Cross, Shape::Diamond, Shape::Round];

fn tile() -> impl Strategy<Value = Tile> {
    (0..COLORS.len(), 0..SHAPES.len()).prop_map(|(c, s)| Tile::new(COLORS[c], SHAPES[s]))
}

fn direction() -> impl Strategy<Value = Direction> {
    prop::sample::select(Direction::ALL.to_vec())
}

fn request() -> impl Strategy<Value = PlacementRequest> {
    prop_oneof![
        (41..50i32, 41..50i32, tile())
            .prop_map(|(row, col, tile)| PlacementRequest::Single { row, col, tile }),
        (41..50i32, 41..50i32, direction(), prop::collection::vec(tile(), 1..4)).prop_map(
            |(row, col, direction, tiles)| PlacementRequest::Run {
                row,
                col,
                direction,
                tiles,
            }
        ),
        prop::collection::vec((41..50i32, 41..50i32, tile()), 1..4).prop_map(|triples| {
            PlacementRequest::Set(
                triples
                    .into_iter()
                    .map(|(row, col, tile)| TilePlacement::new(row, col, tile))
                    .collect(),
            )
        }),
    ]
}

fn opened() -> Board {
    let mut board = Board::new();
    board
        .first_move(
            Direction::Right,
            &[Tile::new(Color::Blue, Shape::Plus), Tile::new(Color::Blue, Shape::Cross)],
        )
        .unwrap();
    board
}

fn placed_positions(request: &PlacementRequest) -> Vec<Pos> {
    match request {
        PlacementRequest::First { direction, tiles } => (0..tiles.len())
            .map(|i| Pos::new(45, 45).step(*direction, i as i32))
            .collect(),
        PlacementRequest::Single { row, col, .. } => vec![Pos::new(*row, *col)],
        PlacementRequest::Run {
            row,
            col,
            direction,
            tiles,
        } => (0..tiles.len())
            .map(|i| Pos::new(*row, *col).step(*direction, i as i32))
            .collect(),
        PlacementRequest::Set(placements) => placements.iter().map(|p| p.pos()).collect(),
    }
}

/// Every line on the board is duplicate-free and shares exactly one attribute
fn assert_lines_valid(board: &Board) {
    for placement in board.occupied() {
        for axis in Axis::BOTH {
            let line = line_through(board, placement.pos(), axis);
            assert!(!line.has_duplicate(), "duplicate in {:?}", line);
            if line.len() > 1 {
                assert!(line.shares_exactly_one(), "mixed line {:?}", line);
            }
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn rejected_placements_change_nothing(requests in prop::collection::vec(request(), 1..30)) {
        let mut board = opened();
        for request in &requests {
            let before = board.clone();
            if board.apply(request).is_err() {
                prop_assert_eq!(&board, &before);
            }
        }
    }

    #[test]
    fn accepted_placements_keep_lines_valid(requests in prop::collection::vec(request(), 1..30)) {
        let mut board = opened();
        for request in &requests {
            if board.apply(request).is_ok() {
                assert_lines_valid(&board);
            }
        }
    }

    #[test]
    fn accepted_placements_fill_only_empty_cells(requests in prop::collection::vec(request(), 1..30)) {
        let mut board = opened();
        for request in &requests {
            let before = board.clone();
            if board.apply(request).is_ok() {
                let placed = placed_positions(request);
                prop_assert_eq!(board.tile_count(), before.tile_count() + placed.len());
                for pos in &placed {
                    prop_assert!(!before.is_occupied(*pos));
                    prop_assert!(board.is_occupied(*pos));
                }
                // Everything that was there before is still there
                for old in before.occupied() {
                    prop_assert_eq!(board.get(old.row, old.col), Some(old.tile));
                }
            }
        }
    }

    #[test]
    fn accepted_placements_attach_to_existing_tiles(requests in prop::collection::vec(request(), 1..30)) {
        let mut board = opened();
        for request in &requests {
            let before = board.clone();
            if board.apply(request).is_ok() {
                let attached = placed_positions(request).iter().any(|&pos| {
                    Axis::BOTH.iter().any(|&axis| {
                        line_through(&board, pos, axis)
                            .cells
                            .iter()
                            .any(|&(p, _)| before.is_occupied(p))
                    })
                });
                prop_assert!(attached);
            }
        }
    }

    #[test]
    fn replaying_requests_gives_same_scores(requests in prop::collection::vec(request(), 1..30)) {
        let mut first = opened();
        let mut second = opened();
        let a: Vec<_> = requests.iter().map(|r| first.apply(r)).collect();
        let b: Vec<_> = requests.iter().map(|r| second.apply(r)).collect();
        prop_assert_eq!(a, b);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn can_place_never_mutates(row in 35..56i32, col in 35..56i32, probe in tile()) {
        let board = opened();
        let before = board.clone();
        let _ = board.can_place(row, col, probe);
        prop_assert_eq!(board, before);
    }
}
