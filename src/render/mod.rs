//! Rendering - CPU rasterization and wgpu presentation

mod pixel_canvas;
mod renderer;
mod window_canvas;

pub use pixel_canvas::PixelCanvas;
pub use renderer::Renderer;
pub use window_canvas::WindowCanvas;
