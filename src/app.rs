//! Application state and main loop

use std::sync::Arc;

use anyhow::{Context, Result};
use instant::{Duration, Instant};
use winit::{
    application::ApplicationHandler,
    event::{ElementState, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowAttributes},
};

use crate::animation::timing::{BACKGROUND_COLOR, SURFACE_HEIGHT, SURFACE_WIDTH};
use crate::animation::RevealAnimator;
use crate::canvas::{Canvas, CanvasError};
use crate::config::AppConfig;
use crate::render::{PixelCanvas, Renderer, WindowCanvas};
use crate::track::TrackPoints;

/// Log a status line every this many ticks
const STATUS_LOG_INTERVAL: u64 = 600;

pub struct App {
    // Dropped first: the canvas owns the surface that points into the window
    canvas: WindowCanvas,
    window: Arc<Window>,
    animator: RevealAnimator,
    frame_duration: Duration,
    next_frame: Instant,
}

impl App {
    pub async fn new(config: &AppConfig, track: TrackPoints) -> Result<(Self, EventLoop<()>)> {
        let event_loop = EventLoop::new()?;

        let window_attrs = WindowAttributes::default()
            .with_title(config.window.title.clone())
            .with_inner_size(winit::dpi::LogicalSize::new(
                config.window.width,
                config.window.height,
            ))
            .with_resizable(false);

        // Use deprecated create_window to avoid async complexity for now
        #[allow(deprecated)]
        let window = Arc::new(event_loop.create_window(window_attrs)?);

        let renderer = Renderer::new(
            window.clone(),
            (SURFACE_WIDTH, SURFACE_HEIGHT),
            config.window.vsync,
        )
        .await
        .context("Failed to initialize renderer")?;

        let pixels = PixelCanvas::new(
            SURFACE_WIDTH as usize,
            SURFACE_HEIGHT as usize,
            BACKGROUND_COLOR,
        );

        let frame_duration = Duration::from_secs_f64(1.0 / f64::from(config.window.target_fps));
        log::info!(
            "Window {}x{}, {} fps ({:?} per tick), {} track points",
            config.window.width,
            config.window.height,
            config.window.target_fps,
            frame_duration,
            track.len()
        );

        let app = Self {
            canvas: WindowCanvas::new(pixels, renderer),
            window,
            animator: RevealAnimator::new(track),
            frame_duration,
            next_frame: Instant::now(),
        };

        Ok((app, event_loop))
    }

    pub fn run(event_loop: EventLoop<()>, mut app: Self) -> Result<()> {
        event_loop.run_app(&mut app)?;
        log::info!(
            "Event loop finished after {} frames",
            app.animator.state().frame_count()
        );
        Ok(())
    }

    fn handle_redraw(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();
        if now < self.next_frame {
            // Spurious redraw (expose, focus change): re-present without ticking
            self.present(event_loop);
            return;
        }

        self.animator.tick(&mut self.canvas);
        self.present(event_loop);

        // One tick per frame; never burst to catch up after a stall
        self.next_frame += self.frame_duration;
        if self.next_frame < now {
            self.next_frame = now + self.frame_duration;
        }

        let state = self.animator.state();
        if state.frame_count() % STATUS_LOG_INTERVAL == 0 {
            log::info!(
                "Frame {}: {:?}, revealed {}/{}, stroke width {}",
                state.frame_count(),
                self.animator.phase(),
                state.revealed_count(),
                state.point_count(),
                state.stroke_width()
            );
        }
    }

    fn present(&mut self, event_loop: &ActiveEventLoop) {
        match self.canvas.present() {
            Ok(()) => {}
            Err(CanvasError::Surface(
                wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated,
            )) => {
                log::debug!("Surface lost or outdated, reconfiguring");
                self.canvas.reconfigure();
            }
            Err(CanvasError::Surface(wgpu::SurfaceError::OutOfMemory)) => {
                log::error!("Out of GPU memory, exiting");
                event_loop.exit();
            }
            Err(e) => {
                log::warn!("Dropped frame: {e}");
            }
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, _event_loop: &ActiveEventLoop) {
        // Window and renderer are already initialized in new()
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: winit::window::WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                log::info!("Close requested");
                event_loop.exit();
            }
            WindowEvent::KeyboardInput {
                event: key_event, ..
            } => {
                if key_event.state == ElementState::Pressed
                    && key_event.physical_key == PhysicalKey::Code(KeyCode::Escape)
                {
                    log::info!("Escape pressed, exiting");
                    event_loop.exit();
                }
            }
            WindowEvent::Resized(size) => {
                self.canvas.resize(size.width, size.height);
            }
            WindowEvent::RedrawRequested => {
                self.handle_redraw(event_loop);
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if Instant::now() >= self.next_frame {
            self.window.request_redraw();
        }
        event_loop.set_control_flow(ControlFlow::WaitUntil(self.next_frame));
    }
}
