use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

use track_reveal::animation::timing::{
    frames_to_saturation, BACKGROUND_COLOR, SURFACE_HEIGHT, SURFACE_WIDTH,
};
use track_reveal::animation::RevealAnimator;
use track_reveal::canvas::RecordingCanvas;
use track_reveal::render::PixelCanvas;
use track_reveal::track::TrackPoints;

fn bench_saturated_tick(c: &mut Criterion) {
    let track = TrackPoints::demo();
    let frames = frames_to_saturation(track.len());
    let mut animator = RevealAnimator::new(track);
    let mut canvas = PixelCanvas::new(
        SURFACE_WIDTH as usize,
        SURFACE_HEIGHT as usize,
        BACKGROUND_COLOR,
    );
    let mut warmup = RecordingCanvas::new();
    for _ in 0..frames {
        animator.tick(&mut warmup);
    }

    // Worst case: all markers and edges at maximum stroke width
    c.bench_function("tick_saturated_pixel_canvas", |b| {
        b.iter(|| {
            animator.tick(&mut canvas);
            black_box(canvas.buffer());
        })
    });
}

criterion_group!(benches, bench_saturated_tick);
criterion_main!(benches);
