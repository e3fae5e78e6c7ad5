//! End-to-end timing tests for the reveal animation
//!
//! These drive the public animator API tick by tick against a recording
//! canvas and check the properties a viewer of the demo would notice.

use track_reveal::animation::timing::{
    frames_to_saturation, EDGE_COLOR, GROWTH_THRESHOLD, INITIAL_STROKE_WIDTH, MAX_STROKE_WIDTH,
    REVEAL_INTERVAL,
};
use track_reveal::prelude::*;

const POINTS: usize = 9;

fn ticked(ticks: u64) -> (RevealAnimator, RecordingCanvas) {
    let mut animator = RevealAnimator::new(TrackPoints::demo());
    let mut canvas = RecordingCanvas::new();
    for _ in 0..ticks {
        animator.tick(&mut canvas);
    }
    (animator, canvas)
}

fn line_widths(canvas: &RecordingCanvas) -> Vec<u32> {
    canvas
        .commands()
        .iter()
        .filter_map(|c| match c {
            DrawCommand::Line { width, .. } => Some(*width),
            _ => None,
        })
        .collect()
}

// ============================================================================
// Invariants over a full run
// ============================================================================

#[test]
fn test_counters_monotonic_and_bounded() {
    let mut animator = RevealAnimator::default();
    let mut canvas = RecordingCanvas::new();

    let mut last_revealed = 0;
    let mut last_width = INITIAL_STROKE_WIDTH;

    for _ in 0..frames_to_saturation(POINTS) + 100 {
        animator.tick(&mut canvas);
        let state = animator.state();

        assert!(state.revealed_count() >= last_revealed);
        assert!(state.revealed_count() <= POINTS);
        assert!(state.stroke_width() >= last_width);
        assert!(state.stroke_width() >= INITIAL_STROKE_WIDTH);
        assert!(state.stroke_width() <= MAX_STROKE_WIDTH);

        last_revealed = state.revealed_count();
        last_width = state.stroke_width();
    }
}

#[test]
fn test_reveal_cadence_matches_interval() {
    for k in 0..=POINTS as u64 {
        let (animator, canvas) = ticked(k * REVEAL_INTERVAL);
        assert_eq!(animator.state().revealed_count() as u64, k);
        if k > 0 {
            assert_eq!(canvas.marker_count() as u64, k);
        }
    }
}

#[test]
fn test_tick_zero_does_not_reveal() {
    let (animator, _) = ticked(1);
    assert_eq!(animator.state().revealed_count(), 0);

    let (animator, _) = ticked(REVEAL_INTERVAL - 1);
    assert_eq!(animator.state().revealed_count(), 0);
}

// ============================================================================
// Phase transitions
// ============================================================================

#[test]
fn test_edges_start_exactly_at_completion() {
    let completion = POINTS as u64 * REVEAL_INTERVAL;
    let mut animator = RevealAnimator::default();
    let mut canvas = RecordingCanvas::new();

    for tick in 1..=completion + 50 {
        animator.tick(&mut canvas);
        if tick < completion {
            assert_eq!(canvas.line_count(), 0, "edges too early at tick {tick}");
            assert_eq!(animator.phase(), Phase::Revealing);
        } else {
            assert_eq!(canvas.line_count(), POINTS, "edges missing at tick {tick}");
            assert_eq!(animator.phase(), Phase::Complete);
        }
    }
}

#[test]
fn test_growth_gated_by_post_completion_ticks() {
    let mut animator = RevealAnimator::default();
    let mut canvas = RecordingCanvas::new();

    for _ in 0..frames_to_saturation(POINTS) {
        animator.tick(&mut canvas);
        let state = animator.state();
        if state.post_complete_ticks() <= GROWTH_THRESHOLD {
            assert_eq!(state.stroke_width(), INITIAL_STROKE_WIDTH);
        } else {
            assert!(state.stroke_width() > INITIAL_STROKE_WIDTH);
        }
    }
}

#[test]
fn test_demo_scenario() {
    // Track closes at 2700 ticks
    let (animator, canvas) = ticked(2700);
    assert_eq!(animator.state().revealed_count(), POINTS);
    assert!(animator.state().edges_drawn());
    assert_eq!(line_widths(&canvas), vec![INITIAL_STROKE_WIDTH; POINTS]);

    // 500 more ticks and the stroke has started growing
    let (animator, canvas) = ticked(3200);
    assert!(animator.state().stroke_width() > INITIAL_STROKE_WIDTH);
    assert!(line_widths(&canvas)
        .iter()
        .all(|&w| w == animator.state().stroke_width()));

    // Once at the cap it stays there
    let (animator, _) = ticked(frames_to_saturation(POINTS));
    assert_eq!(animator.state().stroke_width(), MAX_STROKE_WIDTH);
    let (animator, _) = ticked(frames_to_saturation(POINTS) + 1_000);
    assert_eq!(animator.state().stroke_width(), MAX_STROKE_WIDTH);
}

#[test]
fn test_saturated_frames_are_identical() {
    let (mut animator, mut canvas) = ticked(frames_to_saturation(POINTS));
    assert!(animator.state().is_saturated());

    let reference = canvas.commands().to_vec();
    for _ in 0..25 {
        animator.tick(&mut canvas);
        assert_eq!(canvas.commands(), reference.as_slice());
    }

    // Edges are green and drawn at the cap
    assert!(reference.iter().any(|c| matches!(
        c,
        DrawCommand::Line { color, width, .. } if *color == EDGE_COLOR && *width == MAX_STROKE_WIDTH
    )));
}

#[test]
fn test_rejected_track_never_builds_an_animator() {
    assert!(TrackPoints::new(Vec::new()).is_err());
    assert!(TrackPoints::new(vec![Vec2::new(f32::INFINITY, 1.0)]).is_err());
}
