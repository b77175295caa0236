use criterion::{black_box, criterion_group, criterion_main, Criterion};
use picture_quiz::core::{progressive_hint_into, GameController};
use picture_quiz::term::{fingerprint, FrameBuffer, QuizView, Viewport};
use picture_quiz::types::HostAction;

fn started() -> GameController {
    let mut game = GameController::default();
    game.apply(HostAction::StartGame);
    game
}

fn bench_tick(c: &mut Criterion) {
    let mut game = started();
    game.apply(HostAction::Correct);

    c.bench_function("controller_tick_16ms", |b| {
        b.iter(|| {
            game.tick(black_box(16));
        })
    });
}

fn bench_round_trip(c: &mut Criterion) {
    c.bench_function("play_level_and_advance", |b| {
        let mut game = started();
        b.iter(|| {
            game.apply(HostAction::Hint);
            game.apply(HostAction::Wrong);
            game.apply(HostAction::Correct);
            game.tick(2000);
            if game.round().is_complete() {
                game.apply(HostAction::ResetGame);
            }
        })
    });
}

fn bench_progressive_hint(c: &mut Criterion) {
    let mut out = String::with_capacity(64);
    c.bench_function("progressive_hint_into", |b| {
        b.iter(|| {
            progressive_hint_into(black_box("Phong trào Cần Vương"), black_box(3), &mut out);
        })
    });
}

fn bench_snapshot_fingerprint(c: &mut Criterion) {
    let game = started();
    c.bench_function("snapshot_fingerprint", |b| {
        b.iter(|| black_box(fingerprint(&game.snapshot())))
    });
}

fn bench_render(c: &mut Criterion) {
    let mut game = started();
    game.apply(HostAction::Hint);
    game.apply(HostAction::ContentHint);
    let view = QuizView::default();
    let vp = Viewport::new(120, 36);
    let mut fb = FrameBuffer::new(vp.width, vp.height);

    c.bench_function("render_playing_120x36", |b| {
        b.iter(|| {
            view.render_into(&game.snapshot(), vp, &mut fb);
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_round_trip,
    bench_progressive_hint,
    bench_snapshot_fingerprint,
    bench_render
);
criterion_main!(benches);
