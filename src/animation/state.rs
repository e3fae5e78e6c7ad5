use serde::Serialize;

use super::timing::{GROWTH_THRESHOLD, INITIAL_STROKE_WIDTH, MAX_STROKE_WIDTH, REVEAL_INTERVAL};

/// Phase of the reveal animation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Phase {
    /// Some points are still hidden
    Revealing,
    /// Every point is visible; edges are drawn and the stroke may grow
    Complete,
}

/// What changed during a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickEvents {
    pub revealed: bool,
    pub completed: bool,
    pub stroke_grew: bool,
}

/// Mutable animation counters, owned by the animator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnimationState {
    point_count: usize,
    frame_count: u64,
    revealed_count: usize,
    post_complete_ticks: u64,
    stroke_width: u32,
}

impl AnimationState {
    /// Fresh state for a track with `point_count` vertices
    pub fn new(point_count: usize) -> Self {
        Self {
            point_count,
            frame_count: 0,
            revealed_count: 0,
            post_complete_ticks: 0,
            stroke_width: INITIAL_STROKE_WIDTH,
        }
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    pub fn revealed_count(&self) -> usize {
        self.revealed_count
    }

    pub fn post_complete_ticks(&self) -> u64 {
        self.post_complete_ticks
    }

    pub fn stroke_width(&self) -> u32 {
        self.stroke_width
    }

    pub fn point_count(&self) -> usize {
        self.point_count
    }

    /// True once every point is visible
    pub fn edges_drawn(&self) -> bool {
        self.revealed_count == self.point_count
    }

    pub fn phase(&self) -> Phase {
        if self.edges_drawn() {
            Phase::Complete
        } else {
            Phase::Revealing
        }
    }

    /// Stroke width has hit its cap; no tick changes the drawn frame anymore
    pub fn is_saturated(&self) -> bool {
        self.edges_drawn() && self.stroke_width == MAX_STROKE_WIDTH
    }

    /// Advance the counters by one frame.
    ///
    /// The frame counter is bumped before the interval check, so frame 0 never
    /// reveals and the k-th point appears on tick `k * REVEAL_INTERVAL`. The tick
    /// that reveals the last point already counts as a post-completion tick.
    pub fn advance(&mut self) -> TickEvents {
        let mut events = TickEvents::default();

        self.frame_count = self.frame_count.saturating_add(1);

        if self.phase() == Phase::Revealing && self.frame_count % REVEAL_INTERVAL == 0 {
            self.revealed_count = (self.revealed_count + 1).min(self.point_count);
            events.revealed = true;
            events.completed = self.edges_drawn();
        }

        if self.phase() == Phase::Complete {
            self.post_complete_ticks = self.post_complete_ticks.saturating_add(1);

            // Growth keeps firing every frame once past the threshold
            if self.post_complete_ticks > GROWTH_THRESHOLD && self.stroke_width < MAX_STROKE_WIDTH
            {
                self.stroke_width += 1;
                events.stroke_grew = true;
            }
        }

        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn advance_by(state: &mut AnimationState, ticks: u64) {
        for _ in 0..ticks {
            state.advance();
        }
    }

    #[test]
    fn test_initial_state() {
        let state = AnimationState::new(9);
        assert_eq!(state.frame_count(), 0);
        assert_eq!(state.revealed_count(), 0);
        assert_eq!(state.post_complete_ticks(), 0);
        assert_eq!(state.stroke_width(), INITIAL_STROKE_WIDTH);
        assert_eq!(state.phase(), Phase::Revealing);
        assert!(!state.edges_drawn());
    }

    #[test]
    fn test_first_reveal_on_interval_tick() {
        let mut state = AnimationState::new(9);
        advance_by(&mut state, REVEAL_INTERVAL - 1);
        assert_eq!(state.revealed_count(), 0);

        let events = state.advance();
        assert!(events.revealed);
        assert!(!events.completed);
        assert_eq!(state.revealed_count(), 1);
    }

    #[test]
    fn test_reveal_cadence() {
        let mut state = AnimationState::new(9);
        for k in 1..=9 {
            advance_by(&mut state, REVEAL_INTERVAL);
            assert_eq!(state.revealed_count(), k);
        }
    }

    #[test]
    fn test_completion_counts_as_post_complete_tick() {
        let mut state = AnimationState::new(2);
        advance_by(&mut state, 2 * REVEAL_INTERVAL - 1);
        assert_eq!(state.post_complete_ticks(), 0);

        let events = state.advance();
        assert!(events.completed);
        assert_eq!(state.phase(), Phase::Complete);
        assert_eq!(state.post_complete_ticks(), 1);
    }

    #[test]
    fn test_reveal_stops_at_point_count() {
        let mut state = AnimationState::new(3);
        advance_by(&mut state, 10 * REVEAL_INTERVAL);
        assert_eq!(state.revealed_count(), 3);
    }

    #[test]
    fn test_growth_waits_for_threshold() {
        let mut state = AnimationState::new(1);
        advance_by(&mut state, REVEAL_INTERVAL);
        assert_eq!(state.post_complete_ticks(), 1);

        advance_by(&mut state, GROWTH_THRESHOLD - 1);
        assert_eq!(state.post_complete_ticks(), GROWTH_THRESHOLD);
        assert_eq!(state.stroke_width(), INITIAL_STROKE_WIDTH);

        let events = state.advance();
        assert!(events.stroke_grew);
        assert_eq!(state.stroke_width(), INITIAL_STROKE_WIDTH + 1);
    }

    #[test]
    fn test_growth_is_continuous_and_capped() {
        let mut state = AnimationState::new(1);
        advance_by(&mut state, REVEAL_INTERVAL + GROWTH_THRESHOLD);
        assert_eq!(state.stroke_width(), INITIAL_STROKE_WIDTH + 1);

        // One unit per frame
        advance_by(&mut state, 5);
        assert_eq!(state.stroke_width(), INITIAL_STROKE_WIDTH + 6);

        advance_by(&mut state, 1_000);
        assert_eq!(state.stroke_width(), MAX_STROKE_WIDTH);
        assert!(state.is_saturated());

        let events = state.advance();
        assert!(!events.stroke_grew);
        assert_eq!(state.stroke_width(), MAX_STROKE_WIDTH);
    }
}
