//! Integration tests for whole games

use std::time::{Duration, Instant};

use classic_tetris::core::{Board, SimpleRng};
use classic_tetris::engine::{GameScore, RecordingAudio, Session, Ticker};
use classic_tetris::types::{
    GameCommand, GameEvent, Phase, SoundCue, Status, BOARD_HEIGHT, BOARD_WIDTH,
};

#[test]
fn test_hard_drops_until_game_over() {
    let mut board = Board::new(12345);
    board.start();

    let cells = board.active_cells().unwrap();
    for (x, y) in cells {
        assert!((0..BOARD_WIDTH as i8).contains(&x));
        assert!((0..BOARD_HEIGHT as i8).contains(&y));
    }

    let mut drops = 0;
    while board.phase() != Phase::GameOver {
        assert!(board.hard_drop());
        drops += 1;
        assert!(drops <= BOARD_HEIGHT as u32, "no game over after {drops} drops");
    }

    // Pieces never leave the spawn columns, so no row can complete.
    assert_eq!(board.lines_cleared(), 0);
    assert!(board.active_piece().is_none());
}

#[test]
fn test_same_seed_same_game() {
    let play = |seed: u32| {
        let mut board = Board::new(seed);
        board.start();
        let mut kinds = Vec::new();
        while board.phase() != Phase::GameOver {
            kinds.push(board.active_piece().kind());
            board.hard_drop();
        }
        (kinds, board.grid().clone())
    };

    assert_eq!(play(77), play(77));
}

#[test]
fn test_session_full_game_event_flow() {
    let board = Board::with_source(BOARD_WIDTH, BOARD_HEIGHT, SimpleRng::new(5));
    let mut session = Session::new(
        board,
        GameScore::default(),
        Ticker::from_millis(300),
        RecordingAudio::default(),
    );
    let t0 = Instant::now();

    session.handle(GameCommand::Start, t0).unwrap();
    let mut now = t0;
    for _ in 0..2000 {
        if session.phase() == Phase::GameOver {
            break;
        }
        now += Duration::from_millis(300);
        session.update(now).unwrap();
    }
    assert_eq!(session.phase(), Phase::GameOver);
    assert!(!session.ticker().is_running());

    let events = session.drain_events();
    assert_eq!(events[0], GameEvent::StatusChanged(Status::InGame));
    assert!(events.contains(&GameEvent::StatusChanged(Status::GameOver)));
    assert_eq!(
        events.iter().filter(|e| matches!(e, GameEvent::GameOver { .. })).count(),
        1
    );

    let played = &session.audio().played;
    assert_eq!(played.last(), Some(&SoundCue::GameOver));
    assert!(played.contains(&SoundCue::PieceLocked));
    assert_eq!(session.score().last_points, 0);
}

#[test]
fn test_pause_freezes_a_running_session() {
    let mut session = Session::new(
        Board::new(3),
        GameScore::default(),
        Ticker::from_millis(300),
        RecordingAudio::default(),
    );
    let t0 = Instant::now();
    session.handle(GameCommand::Start, t0).unwrap();
    session.handle(GameCommand::Pause, t0).unwrap();
    let frozen = session.snapshot();

    for command in [
        GameCommand::MoveLeft,
        GameCommand::RotateCw,
        GameCommand::SoftDrop,
        GameCommand::Start,
    ] {
        assert!(!session.handle(command, t0).unwrap());
    }
    assert!(!session.update(t0 + Duration::from_secs(3)).unwrap());
    assert_eq!(session.snapshot(), frozen);
    assert_eq!(*session.score(), GameScore::default());

    assert!(session.handle(GameCommand::Pause, t0).unwrap());
    assert_eq!(session.phase(), Phase::Running);
}
