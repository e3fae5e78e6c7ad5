//! Headless mode - run the animation without a window
//!
//! Drives the animator against a CPU pixel canvas for a fixed number of
//! frames and reports where it ended up. Useful for CI smoke runs and for
//! checking timing without waiting on a real display.

mod runner;

pub use runner::{run_headless, HeadlessReport};
