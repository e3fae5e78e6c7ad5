use crate::canvas::Canvas;
use crate::track::TrackPoints;

use super::state::{AnimationState, Phase};
use super::timing::{EDGE_COLOR, MARKER_COLOR, MARKER_RADIUS};

/// Drives the reveal animation for one track, one tick per frame
pub struct RevealAnimator {
    track: TrackPoints,
    state: AnimationState,
}

impl RevealAnimator {
    pub fn new(track: TrackPoints) -> Self {
        let state = AnimationState::new(track.len());
        Self { track, state }
    }

    pub fn track(&self) -> &TrackPoints {
        &self.track
    }

    pub fn state(&self) -> &AnimationState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    /// Advance one frame and redraw the whole scene onto `canvas`.
    ///
    /// Presenting the frame is left to the caller.
    pub fn tick<C: Canvas + ?Sized>(&mut self, canvas: &mut C) {
        let events = self.state.advance();

        if events.revealed {
            log::debug!(
                "Frame {}: revealed point {}/{}",
                self.state.frame_count(),
                self.state.revealed_count(),
                self.track.len()
            );
        }
        if events.completed {
            log::info!(
                "Track closed after {} frames, drawing edges",
                self.state.frame_count()
            );
        }
        if events.stroke_grew {
            let width = self.state.stroke_width();
            if self.state.is_saturated() {
                log::info!(
                    "Stroke width saturated at {} (frame {})",
                    width,
                    self.state.frame_count()
                );
            } else {
                log::trace!("Stroke width grew to {}", width);
            }
        }

        self.draw(canvas);
    }

    /// Issue the draw commands for the current state. Everything is redrawn from
    /// scratch each frame; the track is small and fixed.
    ///
    /// Edges go on top of the markers, so a wide stroke hides them.
    pub fn draw<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        canvas.clear();

        let revealed = &self.track.points()[..self.state.revealed_count()];
        for &point in revealed {
            canvas.draw_marker(point, MARKER_RADIUS, MARKER_COLOR);
        }

        if self.state.edges_drawn() {
            let width = self.state.stroke_width();
            for (a, b) in self.track.edges() {
                canvas.draw_line(a, b, EDGE_COLOR, width);
            }
        }
    }
}

impl Default for RevealAnimator {
    fn default() -> Self {
        Self::new(TrackPoints::demo())
    }
}
