use seabattle::board::{Board, CannotPlaceReason, Outcome};

#[test]
fn single_cell_ship_sinks_in_one_shot() {
    let mut board = Board::new(vec![((5, 5), (5, 5))]);
    assert_eq!(board.fire((5, 5)), Outcome::Sunk);
    assert_eq!(board.fire((0, 0)), Outcome::Miss);
    // refiring the dead cell reports the same outcome
    assert_eq!(board.fire((5, 5)), Outcome::Sunk);
}

#[test]
fn horizontal_ship_reports_hit_hit_sunk() {
    let mut board = Board::new(vec![((0, 0), (0, 2))]);
    assert_eq!(board.fire((0, 0)), Outcome::Hit);
    assert_eq!(board.fire((0, 1)), Outcome::Hit);
    assert_eq!(board.fire((0, 2)), Outcome::Sunk);

    let dump = board.to_string();
    let first_row = dump.lines().next().unwrap();
    assert_eq!(first_row, "x\tx\tx\t~\t~\t~\t~\t~\t~\t~\t");
    // dead marker on the three sunk cells, water everywhere else
    assert_eq!(dump.matches('x').count(), 3);
    assert_eq!(dump.matches('~').count(), 97);
}

#[test]
fn outcome_text_is_verbatim() {
    assert_eq!(Outcome::Miss.to_string(), "Miss");
    assert_eq!(Outcome::Hit.to_string(), "Hit");
    assert_eq!(Outcome::Sunk.to_string(), "Sunk");

    let mut board = Board::new(vec![((2, 2), (2, 3))]);
    assert_eq!(board.fire((9, 9)).as_str(), "Miss");
    assert_eq!(board.fire((2, 2)).as_str(), "Hit");
    assert_eq!(board.fire((2, 3)).as_str(), "Sunk");
}

#[test]
fn miss_leaves_every_ship_untouched() {
    let mut board = Board::new(vec![((1, 1), (1, 3))]);
    assert_eq!(board.fire((9, 9)), Outcome::Miss);
    let ship = board.ship_at((1, 1)).unwrap();
    assert!(!ship.is_drowned());
    assert!(ship.cells().iter().all(|cell| cell.alive()));
}

#[test]
fn refiring_a_dead_cell_reports_hit_again() {
    let mut board = Board::new(vec![((1, 1), (1, 3))]);
    assert_eq!(board.fire((1, 1)), Outcome::Hit);
    assert_eq!(board.fire((1, 1)), Outcome::Hit);
    assert!(!board.ship_at((1, 1)).unwrap().is_drowned());
}

#[test]
fn sinking_one_ship_leaves_the_other_alone() {
    let mut board = Board::new(vec![((1, 1), (1, 3)), ((3, 0), (5, 0))]);
    assert_eq!(board.fire((1, 1)), Outcome::Hit);
    assert_eq!(board.fire((1, 2)), Outcome::Hit);
    assert_eq!(board.fire((1, 3)), Outcome::Sunk);

    let other = board.ship_at((3, 0)).unwrap();
    assert!(!other.is_drowned());
    assert!(other.cells().iter().all(|cell| cell.alive()));
    assert!(!board.all_sunk());

    assert_eq!(board.fire((3, 0)), Outcome::Hit);
    assert_eq!(board.fire((4, 0)), Outcome::Hit);
    assert_eq!(board.fire((5, 0)), Outcome::Sunk);
    assert!(board.all_sunk());
}

#[test]
fn later_placement_claims_an_overlapping_coordinate() {
    // both spans cover (2, 2)
    let mut board = Board::new(vec![((2, 0), (2, 4)), ((0, 2), (4, 2))]);
    let claimed = board.ship_at((2, 2)).unwrap();
    assert_eq!(claimed.start(), (0, 2).into());

    // firing at the shared coordinate damages the later ship only
    assert_eq!(board.fire((2, 2)), Outcome::Hit);
    let earlier = board.ship_at((2, 0)).unwrap();
    assert!(earlier.get_cell(2, 2).unwrap().alive());
    let later = board.ship_at((0, 2)).unwrap();
    assert!(!later.get_cell(2, 2).unwrap().alive());
}

#[test]
fn diagonal_endpoints_cover_a_rectangular_block() {
    let mut board = Board::new(vec![((1, 1), (2, 2))]);
    assert_eq!(board.ship_at((1, 1)).unwrap().len(), 4);
    assert_eq!(board.fire((1, 1)), Outcome::Hit);
    assert_eq!(board.fire((1, 2)), Outcome::Hit);
    assert_eq!(board.fire((2, 1)), Outcome::Hit);
    assert_eq!(board.fire((2, 2)), Outcome::Sunk);
}

#[test]
fn reversed_span_produces_an_unreachable_ship() {
    let mut board = Board::new(vec![((3, 3), (1, 3))]);
    assert_eq!(board.iter_ships().count(), 1);
    assert_eq!(board.iter_ships().next().unwrap().len(), 0);
    assert_eq!(board.fire((1, 3)), Outcome::Miss);
    assert_eq!(board.fire((3, 3)), Outcome::Miss);
}

#[test]
fn display_marks_ships_alive_until_fully_dead() {
    let mut board = Board::new(vec![((0, 0), (0, 1))]);
    // ten rows, each followed by a blank line
    assert_eq!(board.to_string().lines().count(), 20);

    let dump = board.to_string();
    assert!(dump.contains('\u{25A1}'));
    assert!(dump.contains('~'));
    assert!(!dump.contains('x'));

    // one living cell keeps the whole ship on the alive glyph
    board.fire((0, 0));
    let dump = board.to_string();
    assert!(dump.contains('\u{25A1}'));
    assert!(!dump.contains('x'));

    board.fire((0, 1));
    let dump = board.to_string();
    assert!(dump.contains('x'));
    assert!(!dump.contains('\u{25A1}'));
}

#[test]
fn strict_constructor_rejects_overlap() {
    let err = Board::try_new(vec![((2, 0), (2, 4)), ((0, 2), (4, 2))]).unwrap_err();
    assert_eq!(err.reason(), CannotPlaceReason::AlreadyOccupied);
    assert_eq!(*err.placement(), ((0, 2), (4, 2)).into());
}

#[test]
fn strict_constructor_rejects_diagonal_spans() {
    let err = Board::try_new(vec![((1, 1), (2, 2))]).unwrap_err();
    assert_eq!(err.reason(), CannotPlaceReason::NotAxisAligned);
}

#[test]
fn strict_constructor_rejects_out_of_bounds_spans() {
    let err = Board::try_new(vec![((0, 7), (0, 11))]).unwrap_err();
    assert_eq!(err.reason(), CannotPlaceReason::OutOfBounds);
}

#[test]
fn strict_constructor_accepts_a_legal_fleet() {
    let board =
        Board::try_new(vec![((0, 0), (0, 4)), ((2, 2), (5, 2)), ((9, 9), (9, 9))]).unwrap();
    assert_eq!(board.iter_ships().count(), 3);
    assert_eq!(board.placements().len(), 3);
}
