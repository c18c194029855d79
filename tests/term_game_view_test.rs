use classic_tetris::core::{ActiveSnapshot, BoardSnapshot};
use classic_tetris::term::{kind_color, GameView, Hud, Viewport};
use classic_tetris::types::{Phase, PieceKind, Status};

// 10 cells * 2 columns + border = 22 wide, 22 rows + border = 24 high.
const VP: Viewport = Viewport {
    width: 60,
    height: 24,
};

fn running_snapshot() -> BoardSnapshot {
    let mut snap = BoardSnapshot::empty(10, 22);
    snap.phase = Phase::Running;
    snap
}

#[test]
fn term_view_renders_border_corners() {
    let fb = GameView::default().render(&running_snapshot(), &Hud::default(), VP);

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(21, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 23).unwrap().ch, '└');
    assert_eq!(fb.get(21, 23).unwrap().ch, '┘');
}

#[test]
fn term_view_draws_row_zero_at_the_bottom() {
    let mut snap = running_snapshot();
    snap.cells[0] = PieceKind::Z; // (x 0, row 0)

    let fb = GameView::default().render(&snap, &Hud::default(), VP);

    // Inside border: board row 0 is the last screen row before the frame.
    let cell = fb.get(1, 22).unwrap();
    assert_eq!(cell.ch, '█');
    assert_eq!(cell.style.fg, kind_color(PieceKind::Z));
    assert_eq!(fb.get(2, 22).unwrap().ch, '█', "two columns per cell");
    assert_eq!(fb.get(3, 22).unwrap().ch, ' ');
    assert_eq!(fb.get(1, 1).unwrap().ch, ' ');
}

#[test]
fn term_view_draws_the_active_piece() {
    let mut snap = running_snapshot();
    snap.active = Some(ActiveSnapshot {
        kind: PieceKind::O,
        cells: [(4, 21), (5, 21), (4, 20), (5, 20)],
    });

    let fb = GameView::default().render(&snap, &Hud::default(), VP);
    for (x, row) in [(4u16, 21u16), (5, 21), (4, 20), (5, 20)] {
        let cell = fb.get(1 + x * 2, 1 + (21 - row)).unwrap();
        assert_eq!(cell.ch, '█');
        assert_eq!(cell.style.fg, kind_color(PieceKind::O));
    }
}

#[test]
fn term_view_side_panel_shows_scores() {
    let hud = Hud {
        status: Some(Status::GameOver),
        last_points: 12,
        max_points: 40,
        ..Hud::default()
    };
    let fb = GameView::default().render(&running_snapshot(), &hud, VP);

    let rows: Vec<String> = (0..VP.height).map(|y| fb.row_text(y)).collect();
    assert!(rows.iter().any(|r| r.ends_with("Game Over!")));
    assert!(rows.iter().any(|r| r.ends_with("LAST")));
    assert!(rows.iter().any(|r| r.ends_with("12")));
    assert!(rows.iter().any(|r| r.ends_with("40")));
}

#[test]
fn term_view_share_text_replaces_key_help() {
    let share = "Your results in Tetris:\n\nMax score - 5\nLast score - 2";
    let hud = Hud {
        share_text: Some(share),
        ..Hud::default()
    };
    let fb = GameView::default().render(&running_snapshot(), &hud, VP);
    let rows: Vec<String> = (0..VP.height).map(|y| fb.row_text(y)).collect();

    assert!(rows.iter().any(|r| r.ends_with("Max score - 5")));
    assert!(!rows.iter().any(|r| r.contains("soft drop")));
}

#[test]
fn term_view_overlays_follow_phase() {
    let view = GameView::default();
    let text_of = |phase: Phase| {
        let mut snap = running_snapshot();
        snap.phase = phase;
        let fb = view.render(&snap, &Hud::default(), VP);
        (0..VP.height).map(|y| fb.row_text(y)).collect::<Vec<_>>().join("\n")
    };

    assert!(text_of(Phase::Paused).contains("PAUSED"));
    assert!(text_of(Phase::GameOver).contains("GAME OVER"));
    assert!(text_of(Phase::Idle).contains("PRESS N"));
    let running = text_of(Phase::Running);
    assert!(!running.contains("PAUSED") && !running.contains("GAME OVER"));
}
