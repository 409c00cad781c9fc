use criterion::{black_box, criterion_group, criterion_main, Criterion};
use blockfall::core::{collides, try_rotate, Board, GameSnapshot, GameState, Shape};
use blockfall::term::{FrameBuffer, GameView, Viewport};
use blockfall::types::{GameAction, PieceKind};

fn bench_tick(c: &mut Criterion) {
    let mut state = GameState::new(12345);

    c.bench_function("game_tick_16ms", |b| {
        b.iter(|| {
            state.tick(black_box(16));
            if state.game_over() {
                state.apply_action(GameAction::Reset);
            }
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut board = Board::new();
            for y in 16..20 {
                for x in 0..10 {
                    board.set(x, y, Some(PieceKind::I));
                }
            }
            black_box(board.clear_full_rows());
        })
    });
}

fn bench_hard_drop(c: &mut Criterion) {
    let mut state = GameState::new(12345);

    c.bench_function("hard_drop_and_spawn", |b| {
        b.iter(|| {
            state.apply_action(GameAction::HardDrop);
            if state.game_over() {
                state.apply_action(GameAction::Reset);
            }
        })
    });
}

fn bench_collides(c: &mut Criterion) {
    let board = Board::new();
    let shape = Shape::template(PieceKind::T);

    c.bench_function("collides", |b| {
        b.iter(|| collides(black_box(&shape), black_box(4), black_box(10), &board))
    });
}

fn bench_try_rotate(c: &mut Criterion) {
    let state = GameState::with_active(12345, Board::new(), Shape::template(PieceKind::I));
    let piece = *state.active();

    c.bench_function("try_rotate", |b| {
        b.iter(|| try_rotate(black_box(&piece), state.board()))
    });
}

fn bench_render(c: &mut Criterion) {
    let state = GameState::new(12345);
    let view = GameView::default();
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(80, 24);

    c.bench_function("snapshot_and_render", |b| {
        b.iter(|| {
            state.snapshot_into(&mut snap);
            view.render_into(&snap, Viewport::new(80, 24), &mut fb);
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_line_clear,
    bench_hard_drop,
    bench_collides,
    bench_try_rotate,
    bench_render
);
criterion_main!(benches);
