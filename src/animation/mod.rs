//! Reveal animation - the frame-driven state machine behind the track demo
//!
//! Points appear one at a time, edges follow once every point is visible,
//! then the edge stroke thickens until it hits its cap.

mod animator;
mod state;
pub mod timing;

pub use animator::RevealAnimator;
pub use state::{AnimationState, Phase, TickEvents};
