//! Session facade integration tests: requests, turns, snapshots.

use dots_engine::core::{EngineConfig, EngineError, Owner, Position};
use dots_engine::game::{ConnectRequest, Game, PlaceRequest};
use dots_engine::opponent::MoveTier;
use tracing_subscriber::EnvFilter;

fn p(row: i32, col: i32) -> Position {
    Position::new(row, col)
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn game(width: usize, height: usize) -> Game {
    Game::new(EngineConfig::default().with_grid(width, height)).unwrap()
}

/// Draw a closed loop for `owner` through the session.
fn draw_loop(game: &mut Game, owner: Owner, cells: &[Position]) {
    for &c in cells {
        game.place(PlaceRequest::new(c, owner)).unwrap();
    }
    for i in 0..cells.len() {
        let (a, b) = (cells[i], cells[(i + 1) % cells.len()]);
        game.connect(ConnectRequest::new(a, b, owner)).unwrap();
    }
}

// =============================================================================
// Placement
// =============================================================================

#[test]
fn test_place_then_place_again() {
    let mut game = Game::new(EngineConfig::default()).unwrap();

    game.place(PlaceRequest::new(p(5, 5), Owner::PlayerA)).unwrap();
    assert_eq!(game.board().cell_at(p(5, 5)).unwrap().owner, Owner::PlayerA);

    let err = game
        .place(PlaceRequest::new(p(5, 5), Owner::PlayerA))
        .unwrap_err();
    assert_eq!(err, EngineError::AlreadyOwned { position: p(5, 5) });
}

#[test]
fn test_place_out_of_range() {
    let mut game = game(5, 5);
    let err = game
        .place(PlaceRequest::new(p(5, 0), Owner::PlayerA))
        .unwrap_err();
    assert_eq!(err, EngineError::OutOfRange { position: p(5, 0) });
}

#[test]
fn test_place_unowned_rejected() {
    let mut game = game(5, 5);
    let err = game
        .place(PlaceRequest::new(p(0, 0), Owner::Unowned))
        .unwrap_err();
    assert_eq!(err, EngineError::NotAPlayer);
    assert!(game.board().is_empty_cell(p(0, 0)));
}

#[test]
fn test_place_inside_loop_is_blocked() {
    let mut game = game(5, 5);
    draw_loop(&mut game, Owner::PlayerB, &[p(0, 1), p(1, 2), p(2, 1), p(1, 0)]);

    game.place(PlaceRequest::new(p(1, 1), Owner::PlayerA)).unwrap();

    assert!(game.board().is_blocked(p(1, 1)));
}

// =============================================================================
// Connections
// =============================================================================

#[test]
fn test_connect_not_adjacent() {
    let mut game = game(5, 5);
    game.place(PlaceRequest::new(p(0, 0), Owner::PlayerA)).unwrap();
    game.place(PlaceRequest::new(p(0, 2), Owner::PlayerA)).unwrap();

    let err = game
        .connect(ConnectRequest::new(p(0, 0), p(0, 2), Owner::PlayerA))
        .unwrap_err();
    assert_eq!(err, EngineError::NotAdjacent { from: p(0, 0), to: p(0, 2) });
}

#[test]
fn test_connect_unowned_cell() {
    let mut game = game(5, 5);
    game.place(PlaceRequest::new(p(0, 0), Owner::PlayerA)).unwrap();

    let err = game
        .connect(ConnectRequest::new(p(0, 0), p(1, 1), Owner::PlayerA))
        .unwrap_err();
    assert_eq!(err, EngineError::NotOwned { position: p(1, 1) });
}

#[test]
fn test_connect_blocked_cell() {
    init_tracing();
    let mut game = game(5, 5);
    draw_loop(&mut game, Owner::PlayerB, &[p(0, 1), p(1, 2), p(2, 1), p(1, 0)]);
    game.place(PlaceRequest::new(p(0, 0), Owner::PlayerA)).unwrap();
    game.place(PlaceRequest::new(p(1, 1), Owner::PlayerA)).unwrap();

    let err = game
        .connect(ConnectRequest::new(p(1, 1), p(0, 0), Owner::PlayerA))
        .unwrap_err();

    assert_eq!(err, EngineError::Blocked { position: p(1, 1) });
    assert!(!game.board().has_any_connection(p(0, 0)));
}

#[test]
fn test_connecting_a_loop_captures() {
    let mut game = game(5, 5);
    game.place(PlaceRequest::new(p(1, 1), Owner::PlayerB)).unwrap();
    draw_loop(&mut game, Owner::PlayerA, &[p(0, 1), p(1, 2), p(2, 1), p(1, 0)]);

    assert_eq!(game.board().blocked_positions(), vec![p(1, 1)]);
}

// =============================================================================
// Turns
// =============================================================================

#[test]
fn test_play_turn_gets_reply() {
    init_tracing();
    let mut game = Game::new(EngineConfig::default()).unwrap();

    let report = game.play_turn(p(5, 5)).unwrap();

    assert_eq!(report.human_move, p(5, 5));
    assert!(!report.human_can_capture);
    let reply = report.reply.expect("board has room for a reply");
    assert_eq!(reply.position, p(6, 5));
    assert_eq!(reply.tier, MoveTier::ThreatResponse);
    assert_eq!(game.board().owner_at(p(6, 5)), Owner::PlayerB);
}

#[test]
fn test_play_turn_on_last_cell() {
    let mut game = game(1, 1);

    let report = game.play_turn(p(0, 0)).unwrap();

    assert!(report.reply.is_none());
    assert!(game.board().is_full());
}

#[test]
fn test_play_turn_rejects_taken_cell() {
    let mut game = game(5, 5);
    let reply = game.play_turn(p(2, 2)).unwrap().reply.unwrap();

    let err = game.play_turn(reply.position).unwrap_err();
    assert_eq!(err, EngineError::AlreadyOwned { position: reply.position });
}

#[test]
fn test_computer_captures_on_reply() {
    let mut game = game(5, 5);
    for c in [p(1, 2), p(2, 3), p(3, 2)] {
        game.place(PlaceRequest::new(c, Owner::PlayerB)).unwrap();
    }

    let report = game.play_turn(p(2, 2)).unwrap();

    let reply = report.reply.unwrap();
    assert_eq!(reply.position, p(2, 1));
    assert!(reply.capture.is_some());
    assert!(game.board().is_blocked(p(2, 2)));
}

#[test]
fn test_human_capture_feasibility() {
    let mut game = game(7, 7);
    game.place(PlaceRequest::new(p(3, 3), Owner::PlayerB)).unwrap();
    for c in [p(2, 3), p(3, 4), p(3, 2)] {
        game.place(PlaceRequest::new(c, Owner::PlayerA)).unwrap();
    }

    let report = game.play_turn(p(4, 3)).unwrap();

    assert!(report.human_can_capture);
    assert!(game.human_can_capture());
}

#[test]
fn test_capture_flag_clears_once_loop_is_closed() {
    init_tracing();
    let mut game = game(10, 10);
    game.place(PlaceRequest::new(p(5, 5), Owner::PlayerB)).unwrap();
    for c in [p(4, 5), p(5, 6), p(6, 5)] {
        game.place(PlaceRequest::new(c, Owner::PlayerA)).unwrap();
    }

    assert!(game.play_turn(p(5, 4)).unwrap().human_can_capture);

    let diamond = [p(4, 5), p(5, 6), p(6, 5), p(5, 4)];
    for i in 0..diamond.len() {
        let (a, b) = (diamond[i], diamond[(i + 1) % diamond.len()]);
        game.connect(ConnectRequest::new(a, b, Owner::PlayerA)).unwrap();
    }
    assert!(game.board().is_blocked(p(5, 5)));

    let report = game.play_turn(p(0, 7)).unwrap();

    assert!(!report.human_can_capture);
    assert!(game.human_capture_hint().is_none());
    assert_eq!(serde_json::to_value(game.snapshot()).unwrap()["humanCanCapture"], false);
}

#[test]
fn test_human_capture_hint() {
    let mut game = game(5, 5);
    game.place(PlaceRequest::new(p(1, 1), Owner::PlayerB)).unwrap();
    for c in [p(0, 1), p(1, 2), p(2, 1), p(1, 0)] {
        game.place(PlaceRequest::new(c, Owner::PlayerA)).unwrap();
    }

    let hint = game.human_capture_hint().expect("diamond is closable");
    assert!(hint.encloses(p(1, 1)));
}

// =============================================================================
// Snapshots and Config
// =============================================================================

#[test]
fn test_snapshot_json() {
    let mut game = game(4, 3);
    game.place(PlaceRequest::new(p(0, 0), Owner::PlayerA)).unwrap();
    game.place(PlaceRequest::new(p(1, 1), Owner::PlayerA)).unwrap();
    game.connect(ConnectRequest::new(p(0, 0), p(1, 1), Owner::PlayerA))
        .unwrap();

    let json = serde_json::to_value(game.snapshot()).unwrap();

    assert_eq!(json["width"], 4);
    assert_eq!(json["height"], 3);
    assert_eq!(json["dots"].as_array().unwrap().len(), 12);
    assert_eq!(json["dots"][0]["owner"], "PlayerA");
    assert_eq!(json["edges"].as_array().unwrap().len(), 1);
    assert_eq!(json["humanCanCapture"], false);
}

#[test]
fn test_game_from_json_config() {
    let config: EngineConfig =
        serde_json::from_str(r#"{"gridWidth": 10, "gridHeight": 8, "seed": 7}"#).unwrap();
    let game = Game::new(config).unwrap();

    assert_eq!(game.board().width(), 10);
    assert_eq!(game.board().height(), 8);
    assert_eq!(game.config().probe_attempts, 10);
}
