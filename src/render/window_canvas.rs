use glam::Vec2;

use super::{PixelCanvas, Renderer};
use crate::canvas::{Canvas, CanvasError, Color};

/// Window-backed canvas: rasterizes on the CPU, presents through wgpu
pub struct WindowCanvas {
    pixels: PixelCanvas,
    renderer: Renderer,
}

impl WindowCanvas {
    pub fn new(pixels: PixelCanvas, renderer: Renderer) -> Self {
        Self { pixels, renderer }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.renderer.resize(width, height);
    }

    pub fn reconfigure(&mut self) {
        self.renderer.reconfigure();
    }
}

impl Canvas for WindowCanvas {
    fn clear(&mut self) {
        self.pixels.clear();
    }

    fn draw_marker(&mut self, point: Vec2, radius: u32, color: Color) {
        self.pixels.draw_marker(point, radius, color);
    }

    fn draw_line(&mut self, a: Vec2, b: Vec2, color: Color, width: u32) {
        self.pixels.draw_line(a, b, color, width);
    }

    fn present(&mut self) -> Result<(), CanvasError> {
        self.renderer.render(self.pixels.buffer())?;
        Ok(())
    }
}
