//! Drawing surface abstraction
//!
//! The animator only ever talks to a [`Canvas`]. The window-backed canvas lives
//! in `render`; [`RecordingCanvas`] captures draw calls for tests and headless
//! summaries.

use glam::Vec2;
use thiserror::Error;

/// 8-bit RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const GREEN: Color = Color::rgb(0, 255, 0);

    /// Opaque color from RGB components
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

/// Failure while flushing a frame to the display
#[derive(Debug, Error)]
pub enum CanvasError {
    #[error("surface error: {0}")]
    Surface(#[from] wgpu::SurfaceError),
}

/// Primitive drawing API consumed by the animator
pub trait Canvas {
    /// Reset the whole surface to the background color
    fn clear(&mut self);

    /// Filled circular marker centered on `point`
    fn draw_marker(&mut self, point: Vec2, radius: u32, color: Color);

    /// Straight segment from `a` to `b` with the given stroke width
    fn draw_line(&mut self, a: Vec2, b: Vec2, color: Color, width: u32);

    /// Flush the finished frame. Called by the host loop, never by the animator.
    fn present(&mut self) -> Result<(), CanvasError>;
}

/// A single recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear,
    Marker {
        point: Vec2,
        radius: u32,
        color: Color,
    },
    Line {
        a: Vec2,
        b: Vec2,
        color: Color,
        width: u32,
    },
}

/// Canvas that records the commands of the current frame instead of drawing
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    commands: Vec<DrawCommand>,
    presented: u64,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands issued since the last `clear`
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Number of frames flushed with `present`
    pub fn presented_frames(&self) -> u64 {
        self.presented
    }

    pub fn marker_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Marker { .. }))
            .count()
    }

    pub fn line_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Line { .. }))
            .count()
    }
}

impl Canvas for RecordingCanvas {
    fn clear(&mut self) {
        // A clear starts a new frame
        self.commands.clear();
        self.commands.push(DrawCommand::Clear);
    }

    fn draw_marker(&mut self, point: Vec2, radius: u32, color: Color) {
        self.commands.push(DrawCommand::Marker {
            point,
            radius,
            color,
        });
    }

    fn draw_line(&mut self, a: Vec2, b: Vec2, color: Color, width: u32) {
        self.commands.push(DrawCommand::Line { a, b, color, width });
    }

    fn present(&mut self) -> Result<(), CanvasError> {
        self.presented += 1;
        Ok(())
    }
}
