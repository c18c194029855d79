use criterion::{black_box, criterion_group, criterion_main, Criterion};
use classic_tetris::core::{Board, Grid};
use classic_tetris::term::{GameView, Hud, Viewport};
use classic_tetris::types::{GameCommand, Phase, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

fn bench_tick(c: &mut Criterion) {
    let mut board = Board::new(12345);
    board.start();

    c.bench_function("board_tick", |b| {
        b.iter(|| {
            if board.phase() == Phase::GameOver {
                board.start();
            }
            board.tick();
            board.drain_events();
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut grid = Grid::new(BOARD_WIDTH, BOARD_HEIGHT);
            for y in 0..4 {
                for x in 0..BOARD_WIDTH as i8 {
                    grid.set(x, y, PieceKind::I);
                }
            }
            black_box(grid.clear_full_rows());
        })
    });
}

fn bench_hard_drop_game(c: &mut Criterion) {
    c.bench_function("hard_drop_to_game_over", |b| {
        b.iter(|| {
            let mut board = Board::new(black_box(7));
            board.start();
            while board.phase() != Phase::GameOver {
                board.apply(GameCommand::HardDrop);
            }
            black_box(board.drain_events().len())
        })
    });
}

fn bench_move_and_rotate(c: &mut Criterion) {
    let mut board = Board::new(12345);
    board.start();

    c.bench_function("move_and_rotate", |b| {
        b.iter(|| {
            board.apply(black_box(GameCommand::MoveRight));
            board.apply(black_box(GameCommand::RotateCw));
            board.apply(black_box(GameCommand::MoveLeft));
            board.apply(black_box(GameCommand::RotateCcw));
            board.drain_events();
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let mut board = Board::new(12345);
    board.start();
    let snap = board.snapshot();
    let view = GameView::default();
    let mut fb = classic_tetris::term::FrameBuffer::new(80, 24);

    c.bench_function("render_frame", |b| {
        b.iter(|| {
            view.render_into(black_box(&snap), &Hud::default(), Viewport::new(80, 24), &mut fb);
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_line_clear,
    bench_hard_drop_game,
    bench_move_and_rotate,
    bench_render
);
criterion_main!(benches);
