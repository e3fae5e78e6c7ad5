//! # Track Reveal
//!
//! Animated demonstration of a racing track being laid out: the vertices of a
//! closed polygon appear one by one, the edges close the loop, and the stroke
//! thickens until it saturates.

pub mod animation;
pub mod app;
pub mod canvas;
pub mod config;
pub mod headless;
pub mod render;
pub mod track;

pub use app::App;

/// Common imports for internal use
pub mod prelude {
    pub use crate::animation::{AnimationState, Phase, RevealAnimator};
    pub use crate::canvas::{Canvas, Color, DrawCommand, RecordingCanvas};
    pub use crate::track::TrackPoints;
    pub use glam::Vec2;
}
