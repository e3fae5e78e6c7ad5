//! CPU-side rasterizer for the track canvas
//!
//! Draws into an RGBA buffer (row-major, origin top-left) that the wgpu
//! renderer later uploads as a texture.

use glam::Vec2;

use crate::canvas::{Canvas, CanvasError, Color};

/// Pixel buffer canvas
pub struct PixelCanvas {
    /// Width of the surface in pixels
    width: usize,
    /// Height of the surface in pixels
    height: usize,
    /// Color used by `clear`
    background: Color,
    /// RGBA pixel buffer (4 bytes per pixel)
    buffer: Vec<u8>,
}

impl PixelCanvas {
    /// Create a canvas of the given size, initially filled with `background`
    pub fn new(width: usize, height: usize, background: Color) -> Self {
        let mut canvas = Self {
            width,
            height,
            background,
            buffer: vec![0u8; width * height * 4],
        };
        canvas.fill(background);
        canvas
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn buffer(&self) -> &[u8] {
        &self.buffer
    }

    /// Color at `(x, y)`, or `None` outside the surface
    pub fn pixel(&self, x: usize, y: usize) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = (y * self.width + x) * 4;
        let p = &self.buffer[idx..idx + 4];
        Some(Color {
            r: p[0],
            g: p[1],
            b: p[2],
            a: p[3],
        })
    }

    /// Number of pixels that differ from the background
    pub fn lit_pixels(&self) -> usize {
        let bg = self.background.to_array();
        self.buffer
            .chunks_exact(4)
            .filter(|p| **p != bg)
            .count()
    }

    /// Get the pixel buffer as RGB (without alpha)
    pub fn rgb_buffer(&self) -> Vec<u8> {
        let mut rgb = Vec::with_capacity(self.width * self.height * 3);
        for chunk in self.buffer.chunks_exact(4) {
            rgb.extend_from_slice(&chunk[..3]);
        }
        rgb
    }

    fn fill(&mut self, color: Color) {
        let rgba = color.to_array();
        for pixel in self.buffer.chunks_exact_mut(4) {
            pixel.copy_from_slice(&rgba);
        }
    }

    #[inline]
    fn put(&mut self, x: i32, y: i32, rgba: [u8; 4]) {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            let idx = (y as usize * self.width + x as usize) * 4;
            self.buffer[idx..idx + 4].copy_from_slice(&rgba);
        }
    }

    /// Draw a filled circle at screen coordinates
    fn draw_filled_circle(&mut self, cx: i32, cy: i32, radius: i32, color: Color) {
        let rgba = color.to_array();
        for dy in -radius..=radius {
            for dx in -radius..=radius {
                if dx * dx + dy * dy <= radius * radius {
                    self.put(cx + dx, cy + dy, rgba);
                }
            }
        }
    }

    /// Fill every pixel whose center lies within `half_width` of segment `a`-`b`
    fn draw_capsule(&mut self, a: Vec2, b: Vec2, half_width: f32, color: Color) {
        let rgba = color.to_array();

        let min = a.min(b) - Vec2::splat(half_width);
        let max = a.max(b) + Vec2::splat(half_width);
        let x0 = (min.x.floor() as i32).max(0);
        let y0 = (min.y.floor() as i32).max(0);
        let x1 = (max.x.ceil() as i32).min(self.width as i32 - 1);
        let y1 = (max.y.ceil() as i32).min(self.height as i32 - 1);

        let ab = b - a;
        let len_sq = ab.length_squared();
        let hw_sq = half_width * half_width;

        for y in y0..=y1 {
            for x in x0..=x1 {
                let p = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
                let t = if len_sq > 0.0 {
                    ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0)
                } else {
                    0.0
                };
                let closest = a + ab * t;
                if p.distance_squared(closest) <= hw_sq {
                    self.put(x, y, rgba);
                }
            }
        }
    }
}

impl Canvas for PixelCanvas {
    fn clear(&mut self) {
        self.fill(self.background);
    }

    fn draw_marker(&mut self, point: Vec2, radius: u32, color: Color) {
        self.draw_filled_circle(
            point.x.round() as i32,
            point.y.round() as i32,
            radius as i32,
            color,
        );
    }

    fn draw_line(&mut self, a: Vec2, b: Vec2, color: Color, width: u32) {
        let half_width = width.max(1) as f32 / 2.0;
        self.draw_capsule(a, b, half_width, color);
    }

    fn present(&mut self) -> Result<(), CanvasError> {
        // Nothing to flush; the buffer is the frame
        Ok(())
    }
}
