//! Fixed timing and style constants of the reveal animation

use crate::canvas::Color;

/// Frames between two point reveals
pub const REVEAL_INTERVAL: u64 = 300;

/// Edge stroke width when the track first closes
pub const INITIAL_STROKE_WIDTH: u32 = 2;

/// Post-completion frames before the stroke starts growing
pub const GROWTH_THRESHOLD: u64 = 500;

/// Stroke width cap
pub const MAX_STROKE_WIDTH: u32 = 40;

/// Radius of a revealed point marker
pub const MARKER_RADIUS: u32 = 4;

pub const MARKER_COLOR: Color = Color::RED;
pub const EDGE_COLOR: Color = Color::GREEN;
pub const BACKGROUND_COLOR: Color = Color::rgb(25, 25, 25);

/// Size of the drawing surface the track coordinates live in
pub const SURFACE_WIDTH: u32 = 600;
pub const SURFACE_HEIGHT: u32 = 375;

/// Number of ticks until a track of `point_count` vertices is fully revealed
/// and its stroke has saturated.
pub const fn frames_to_saturation(point_count: usize) -> u64 {
    let completion = point_count as u64 * REVEAL_INTERVAL;
    let growth_steps = (MAX_STROKE_WIDTH - INITIAL_STROKE_WIDTH) as u64;
    // The completing tick counts as the first post-completion tick
    completion + GROWTH_THRESHOLD + growth_steps - 1
}
