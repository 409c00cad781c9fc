//! Session scenarios driven only through the public command surface.

use blockfall::core::{Board, GameState, Shape};
use blockfall::types::{GameAction, Phase, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

const W: usize = BOARD_WIDTH as usize;

/// A full row with a hole in column 0.
const HOLE_LEFT: [u8; W] = [0, 5, 5, 5, 5, 5, 5, 5, 5, 5];

/// Vertical I piece parked in column 0 at the top of the board.
fn vertical_i_at_left_wall(board: Board) -> GameState {
    let mut game = GameState::with_active(7, board, Shape::template(PieceKind::I));
    assert!(game.apply_action(GameAction::Rotate));
    while game.apply_action(GameAction::MoveLeft) {}
    let cols: Vec<i8> = game.active().cells().map(|(x, _)| x).collect();
    assert_eq!(cols, vec![0, 0, 0, 0]);
    game
}

#[test]
fn single_line_clear_from_bottom_row() {
    let board = Board::from_rows(&[HOLE_LEFT]).unwrap();
    let mut game = vertical_i_at_left_wall(board);

    assert!(game.apply_action(GameAction::HardDrop));

    assert_eq!(game.score(), 40);
    assert_eq!(game.lines(), 1);
    assert_eq!(game.level(), 1);
    // Row 19 cleared; the three I cells above it shifted down by one.
    for y in 0..17 {
        assert_eq!(game.board().value(0, y), Some(0), "row {}", y);
    }
    for y in 17..20 {
        assert_eq!(game.board().get(0, y), Some(Some(PieceKind::I)));
    }
    assert_eq!(game.board().occupied_count(), 3);

    let event = game.take_last_event().unwrap();
    assert_eq!(event.lines_cleared, 1);
    assert_eq!(event.score_delta, 40);
    assert!(!event.game_over);
}

#[test]
fn tetris_from_fresh_session() {
    let board = Board::from_rows(&[HOLE_LEFT; 4]).unwrap();
    let mut game = vertical_i_at_left_wall(board);

    game.apply_action(GameAction::HardDrop);

    assert_eq!(game.score(), 1200);
    assert_eq!(game.lines(), 4);
    assert_eq!(game.level(), 1);
    assert_eq!(game.drop_interval_ms(), 1000);
    assert_eq!(game.board().occupied_count(), 0);
}

#[test]
fn soft_drops_reach_the_floor_and_lock() {
    let mut game = GameState::with_active(3, Board::new(), Shape::template(PieceKind::O));
    let next = game.next().kind();

    // O spawns at y = 0 and occupies rows 0..2; 18 descents reach the floor.
    for _ in 0..18 {
        game.apply_action(GameAction::SoftDrop);
    }
    assert_eq!(game.active().y, 18);
    assert_eq!(game.board().occupied_count(), 0);

    game.apply_action(GameAction::SoftDrop);
    assert_eq!(game.board().occupied_count(), 4);
    assert_eq!(game.board().get(4, 19), Some(Some(PieceKind::O)));
    assert_eq!(game.active().kind(), next);
    assert_eq!(game.active().y, 0);
}

#[test]
fn horizontal_moves_stop_at_both_walls() {
    let mut game = GameState::with_active(3, Board::new(), Shape::template(PieceKind::T));

    let mut lefts = 0;
    while game.apply_action(GameAction::MoveLeft) {
        lefts += 1;
    }
    assert_eq!(lefts, 4);
    assert_eq!(game.active().cells().map(|(x, _)| x).min(), Some(0));

    let mut rights = 0;
    while game.apply_action(GameAction::MoveRight) {
        rights += 1;
    }
    assert_eq!(rights, 7);
    assert_eq!(game.active().cells().map(|(x, _)| x).max(), Some(9));
}

#[test]
fn o_piece_rotation_never_moves_it() {
    let mut game = GameState::with_active(3, Board::new(), Shape::template(PieceKind::O));
    let before = *game.active();
    for _ in 0..4 {
        assert!(game.apply_action(GameAction::Rotate));
        assert_eq!(game.active().x, before.x);
        assert_eq!(game.active().y, before.y);
    }
    assert_eq!(*game.active(), before);
}

#[test]
fn gravity_follows_the_clock() {
    let mut game = GameState::new(11);
    let y0 = game.active().y;

    // 62 frames of 16ms = 992ms: not yet.
    for _ in 0..62 {
        game.tick(16);
    }
    assert_eq!(game.active().y, y0);

    // 1008ms > 1000ms.
    assert!(game.tick(16));
    assert_eq!(game.active().y, y0 + 1);
    assert_eq!(game.scheduler().accumulated_ms(), 0);
}

#[test]
fn pause_freezes_the_session() {
    let mut game = GameState::new(11);
    assert!(game.apply_action(GameAction::TogglePause));
    assert_eq!(game.phase(), Phase::Paused);

    let before = game.snapshot();
    for _ in 0..200 {
        game.tick(16);
    }
    assert!(!game.apply_action(GameAction::HardDrop));
    assert!(!game.apply_action(GameAction::MoveLeft));
    assert!(!game.apply_action(GameAction::Reset));
    assert_eq!(game.snapshot(), before);
    assert_eq!(game.scheduler().accumulated_ms(), 0);

    assert!(game.apply_action(GameAction::TogglePause));
    assert_eq!(game.phase(), Phase::Active);
}

#[test]
fn blocked_spawn_ends_the_game_and_reset_restores_defaults() {
    // Rows 2..20 are stacked with one hole each, so nothing ever clears. The
    // O fits in rows 0..2 and every piece after it spawns into the O.
    let mut rows = [[1u8; W]; BOARD_HEIGHT as usize - 2];
    for (i, row) in rows.iter_mut().enumerate() {
        row[i % W] = 0;
    }
    let board = Board::from_rows(&rows).unwrap();
    let mut game = GameState::with_active(5, board, Shape::template(PieceKind::O));
    assert_eq!(game.phase(), Phase::Active);

    game.apply_action(GameAction::HardDrop);
    assert_eq!(game.phase(), Phase::GameOver);
    assert!(game.take_last_event().unwrap().game_over);

    // GameOver ignores everything but reset.
    assert!(!game.apply_action(GameAction::MoveLeft));
    assert!(!game.apply_action(GameAction::TogglePause));
    assert!(!game.tick(5000));
    assert_eq!(game.phase(), Phase::GameOver);

    assert!(game.apply_action(GameAction::Reset));
    assert_eq!(game.phase(), Phase::Active);
    assert_eq!(game.score(), 0);
    assert_eq!(game.lines(), 0);
    assert_eq!(game.level(), 1);
    assert_eq!(game.drop_interval_ms(), 1000);
    assert_eq!(game.board().occupied_count(), 0);

    let active = game.active();
    assert_eq!(active.y, 0);
    let size = active.shape.size() as i8;
    assert_eq!(active.x, BOARD_WIDTH as i8 / 2 - size / 2);
}

#[test]
fn start_button_restarts_after_game_over() {
    let mut game = GameState::with_board(5, Board::from_rows(&[[3u8; W]; 20]).unwrap());
    assert_eq!(game.phase(), Phase::GameOver);
    assert!(game.apply_action(GameAction::Start));
    assert_eq!(game.phase(), Phase::Active);
    assert_eq!(game.board().occupied_count(), 0);
}

#[test]
fn same_seed_same_game() {
    let script = [
        GameAction::MoveLeft,
        GameAction::Rotate,
        GameAction::HardDrop,
        GameAction::MoveRight,
        GameAction::MoveRight,
        GameAction::HardDrop,
        GameAction::SoftDrop,
        GameAction::HardDrop,
    ];

    let run = |seed| {
        let mut game = GameState::new(seed);
        for action in script {
            game.apply_action(action);
            game.tick(16);
        }
        game.snapshot()
    };

    assert_eq!(run(99), run(99));
}
