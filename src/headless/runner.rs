use anyhow::{Context, Result};
use serde::Serialize;

use crate::animation::timing::{BACKGROUND_COLOR, SURFACE_HEIGHT, SURFACE_WIDTH};
use crate::animation::{Phase, RevealAnimator};
use crate::canvas::{Canvas, RecordingCanvas};
use crate::render::PixelCanvas;
use crate::track::TrackPoints;

/// Final state of a headless run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeadlessReport {
    pub frames: u64,
    pub phase: Phase,
    pub revealed: usize,
    pub point_count: usize,
    pub stroke_width: u32,
    /// Draw calls issued for the last frame, including the clear
    pub draw_calls: usize,
    /// Pixels of the last frame that differ from the background
    pub lit_pixels: usize,
}

impl HeadlessReport {
    /// Pretty RON rendering for logs
    pub fn to_ron(&self) -> Result<String> {
        ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
            .context("Failed to serialize headless report")
    }
}

/// Tick the animator `frames` times without a window.
///
/// Every tick goes through a recording canvas; only the final frame is
/// rasterized, which keeps long runs cheap.
pub fn run_headless(track: TrackPoints, frames: u64) -> Result<HeadlessReport> {
    let mut recorder = RecordingCanvas::new();
    let mut animator = RevealAnimator::new(track);

    log::info!(
        "Headless run: {} frames over {} track points",
        frames,
        animator.track().len()
    );

    for _ in 0..frames {
        animator.tick(&mut recorder);
        recorder.present()?;
    }

    let mut pixels = PixelCanvas::new(
        SURFACE_WIDTH as usize,
        SURFACE_HEIGHT as usize,
        BACKGROUND_COLOR,
    );
    animator.draw(&mut pixels);

    let state = animator.state();
    log::debug!("Headless run presented {} frames", recorder.presented_frames());

    Ok(HeadlessReport {
        frames: state.frame_count(),
        phase: animator.phase(),
        revealed: state.revealed_count(),
        point_count: state.point_count(),
        stroke_width: state.stroke_width(),
        draw_calls: recorder.commands().len(),
        lit_pixels: pixels.lit_pixels(),
    })
}
