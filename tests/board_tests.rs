//! Board tests - placement validation, rollback and the query surface

use qwirkle::core::{Board, LineRule, PlacementError};
use qwirkle::types::{Color, Direction, PlacementRequest, Shape, Tile, TilePlacement};

const C: i32 = 45;

fn blue(shape: Shape) -> Tile {
    Tile::new(Color::Blue, shape)
}

/// Board after the opening blue plus, cross and diamond
fn opened() -> Board {
    let mut board = Board::new();
    let score = board
        .first_move(
            Direction::Right,
            &[blue(Shape::Plus), blue(Shape::Cross), blue(Shape::Diamond)],
        )
        .unwrap();
    assert_eq!(score, 3);
    board
}

#[test]
fn test_board_new_empty() {
    let board = Board::new();
    assert!(board.is_empty());
    assert_eq!(board.side(), 91);
    assert_eq!(board.tile_count(), 0);
    assert_eq!(board.bounds().as_tuple(), (47, 43, 43, 47));
    assert_eq!(board.get(C, C), None);
}

#[test]
fn test_board_get_out_of_range() {
    let board = opened();
    assert_eq!(board.get(-1, 0), None);
    assert_eq!(board.get(0, -1), None);
    assert_eq!(board.get(91, C), None);
    assert_eq!(board.get(C, 91), None);
    assert_eq!(board.get(i32::MAX, i32::MIN), None);
}

#[test]
fn test_first_move_fills_center_row() {
    let board = opened();
    assert!(!board.is_empty());
    assert_eq!(board.get(C, C), Some(blue(Shape::Plus)));
    assert_eq!(board.get(C, C + 1), Some(blue(Shape::Cross)));
    assert_eq!(board.get(C, C + 2), Some(blue(Shape::Diamond)));
    assert_eq!(board.tile_count(), 3);
}

#[test]
fn test_run_below_shares_color() {
    let mut board = opened();
    let score = board
        .place_run(C + 1, C, Direction::Down, &[blue(Shape::Round)])
        .unwrap();
    assert_eq!(score, 2);
    assert_eq!(board.get(C + 1, C), Some(blue(Shape::Round)));
}

#[test]
fn test_run_breaking_line_rules_is_rejected() {
    let mut board = opened();
    let before = board.clone();

    let err = board
        .place_run(C, C + 3, Direction::Right, &[Tile::new(Color::Red, Shape::Plus)])
        .unwrap_err();
    assert_eq!(
        err,
        PlacementError::RuleViolation {
            row: C,
            col: C + 3,
            reason: LineRule::NoSharedAttribute,
        }
    );
    assert_eq!(board, before);
}

#[test]
fn test_occupied_cell_is_rejected() {
    let mut board = opened();
    let before = board.clone();

    assert_eq!(
        board.place_one(C, C, blue(Shape::Round)),
        Err(PlacementError::CellOccupied { row: C, col: C })
    );
    assert_eq!(board, before);
}

#[test]
fn test_completed_line_earns_bonus() {
    let mut board = opened();
    let score = board
        .place_run(
            C,
            C + 3,
            Direction::Right,
            &[blue(Shape::Round), blue(Shape::Star), blue(Shape::Square)],
        )
        .unwrap();
    // Six counted cells plus the completion bonus
    assert_eq!(score, 12);
}

#[test]
fn test_set_off_one_line_is_rejected() {
    let mut board = opened();
    let before = board.clone();

    let err = board
        .place_set(&[
            TilePlacement::new(C + 1, C, blue(Shape::Round)),
            TilePlacement::new(C, C + 3, blue(Shape::Star)),
        ])
        .unwrap_err();
    assert_eq!(err, PlacementError::NotColinear);
    assert_eq!(board, before);
    assert_eq!(board.get(C + 1, C), None);
    assert_eq!(board.get(C, C + 3), None);
}

#[test]
fn test_set_on_both_ends_of_a_line() {
    let mut board = opened();
    let score = board
        .place_set(&[
            TilePlacement::new(C, C + 3, blue(Shape::Star)),
            TilePlacement::new(C, C - 1, blue(Shape::Round)),
        ])
        .unwrap();
    assert_eq!(score, 5);
    assert_eq!(board.get(C, C - 1), Some(blue(Shape::Round)));
}

#[test]
fn test_set_with_a_gap_is_rejected() {
    let mut board = opened();
    let err = board
        .place_set(&[
            TilePlacement::new(C, C + 3, blue(Shape::Star)),
            TilePlacement::new(C, C + 5, blue(Shape::Round)),
        ])
        .unwrap_err();
    assert_eq!(err, PlacementError::NotColinear);
}

#[test]
fn test_detached_set_is_rejected() {
    let mut board = opened();
    let before = board.clone();

    let err = board
        .place_set(&[
            TilePlacement::new(30, 30, blue(Shape::Round)),
            TilePlacement::new(30, 31, blue(Shape::Star)),
        ])
        .unwrap_err();
    assert_eq!(err, PlacementError::NotAttached);
    assert_eq!(board, before);
}

#[test]
fn test_run_rolls_back_when_a_later_tile_fails() {
    let mut board = opened();
    let before = board.clone();

    // The round fits under the plus; the second tile repeats it in the column.
    let err = board
        .place_run(
            C + 1,
            C,
            Direction::Down,
            &[blue(Shape::Round), blue(Shape::Round)],
        )
        .unwrap_err();
    assert!(matches!(
        err,
        PlacementError::RuleViolation {
            reason: LineRule::DuplicateTile,
            ..
        }
    ));
    assert_eq!(board, before);
    assert_eq!(board.get(C + 1, C), None);
}

#[test]
fn test_run_off_the_grid_is_rejected() {
    let mut board = opened();
    let before = board.clone();
    let tiles: Vec<Tile> = [Shape::Round, Shape::Star, Shape::Square]
        .iter()
        .map(|&s| blue(s))
        .collect();

    let err = board.place_run(89, C, Direction::Down, &tiles).unwrap_err();
    assert_eq!(err, PlacementError::OutOfBounds { row: 91, col: C });
    assert_eq!(board, before);
}

#[test]
fn test_phase_errors() {
    let mut board = Board::new();
    assert!(matches!(
        board.place_one(C, C, blue(Shape::Plus)),
        Err(PlacementError::IllegalState(_))
    ));
    assert!(matches!(
        board.place_set(&[TilePlacement::new(C, C, blue(Shape::Plus))]),
        Err(PlacementError::IllegalState(_))
    ));
    assert!(board.is_empty());

    let mut board = opened();
    assert!(matches!(
        board.first_move(Direction::Up, &[blue(Shape::Star)]),
        Err(PlacementError::IllegalState(_))
    ));
}

#[test]
fn test_invalid_first_moves() {
    let mut board = Board::new();
    assert_eq!(
        board.first_move(
            Direction::Right,
            &[blue(Shape::Plus), Tile::new(Color::Red, Shape::Plus)]
        ),
        Err(PlacementError::InvalidFirstMove)
    );
    assert_eq!(
        board.first_move(Direction::Right, &[blue(Shape::Plus), blue(Shape::Plus)]),
        Err(PlacementError::InvalidFirstMove)
    );
    assert_eq!(
        board.first_move(Direction::Right, &[]),
        Err(PlacementError::EmptyPlacement)
    );
    assert!(board.is_empty());
    assert_eq!(board.bounds().as_tuple(), (47, 43, 43, 47));
}

#[test]
fn test_first_move_in_each_direction() {
    for direction in Direction::ALL {
        let mut board = Board::new();
        board
            .first_move(direction, &[blue(Shape::Plus), blue(Shape::Star)])
            .unwrap();
        let (dr, dc) = direction.delta();
        assert_eq!(board.get(C + dr, C + dc), Some(blue(Shape::Star)));
    }
}

#[test]
fn test_can_place_is_pure() {
    let board = opened();
    let before = board.clone();

    assert!(board.can_place(C + 1, C, blue(Shape::Round)));
    assert!(board.can_place(C, C - 1, blue(Shape::Star)));
    assert!(!board.can_place(C, C, blue(Shape::Round)));
    assert!(!board.can_place(C, C + 3, Tile::new(Color::Red, Shape::Plus)));
    assert!(!board.can_place(C, C + 3, blue(Shape::Plus)));
    assert!(!board.can_place(20, 20, blue(Shape::Round)));
    assert!(!board.can_place(-3, 200, blue(Shape::Round)));
    assert_eq!(board, before);

    assert!(!Board::new().can_place(C, C, blue(Shape::Round)));
}

#[test]
fn test_bridge_between_two_lines() {
    let mut board = opened();
    assert_eq!(
        board.place_one(C + 1, C, Tile::new(Color::Red, Shape::Plus)),
        Ok(2)
    );
    // Three distinct cells on the two lines, plus the bridge point
    assert_eq!(
        board.place_one(C + 1, C + 1, Tile::new(Color::Red, Shape::Cross)),
        Ok(4)
    );
}

#[test]
fn test_detached_run_is_rejected() {
    let mut board = opened();
    let before = board.clone();

    // The pair is a legal line on its own but touches nothing on the board
    let err = board
        .place_run(30, 30, Direction::Right, &[blue(Shape::Plus), blue(Shape::Cross)])
        .unwrap_err();
    assert_eq!(err, PlacementError::NotAttached);
    assert_eq!(board, before);
    assert_eq!(board.get(30, 30), None);
}

#[test]
fn test_bounds_follow_placements() {
    let mut board = opened();
    assert_eq!(board.bounds().as_tuple(), (47, 43, 43, 49));

    board
        .place_run(C - 1, C, Direction::Up, &[Tile::new(Color::Red, Shape::Plus)])
        .unwrap();
    assert_eq!(board.bounds().as_tuple(), (47, 43, 42, 49));
    assert!(board.bounds().contains(qwirkle::types::Pos::new(42, 49)));

    // A rejected placement never moves the bounds
    assert_eq!(
        board.place_one(C + 2, C + 6, blue(Shape::Round)),
        Err(PlacementError::RuleViolation {
            row: C + 2,
            col: C + 6,
            reason: LineRule::Isolated,
        })
    );
    assert_eq!(board.bounds().as_tuple(), (47, 43, 42, 49));
}

#[test]
fn test_apply_dispatches_requests() {
    let mut board = Board::new();
    assert_eq!(
        board.apply(&PlacementRequest::First {
            direction: Direction::Right,
            tiles: vec![blue(Shape::Plus), blue(Shape::Cross)],
        }),
        Ok(2)
    );
    assert_eq!(
        board.apply(&PlacementRequest::Single {
            row: C + 1,
            col: C,
            tile: blue(Shape::Round),
        }),
        Ok(2)
    );
    assert_eq!(
        board.apply(&PlacementRequest::Run {
            row: C,
            col: C + 2,
            direction: Direction::Right,
            tiles: vec![blue(Shape::Star)],
        }),
        Ok(3)
    );
    assert_eq!(
        board.apply(&PlacementRequest::Set(vec![TilePlacement::new(
            C - 1,
            C + 2,
            blue(Shape::Square)
        )])),
        Ok(2)
    );
}

#[test]
fn test_find_spot_scans_bounds() {
    let board = opened();
    let spot = board.find_spot(blue(Shape::Round)).unwrap();
    assert!(board.can_place(spot.row, spot.col, blue(Shape::Round)));
    assert_eq!(board.find_spot(Tile::new(Color::Red, Shape::Star)), None);
}
