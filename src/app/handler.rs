//! `ApplicationHandler` impl for `PreviewApp`.
//!
//! Translates winit events into `ViewEvent`s, feeds them to `ViewState`
//! and acts on the resulting transition.

use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use pixels::{Pixels, SurfaceTexture};
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, MouseButton, StartCause, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow};
use winit::window::{Window, WindowId};

use super::{PreviewApp, PreviewSurface};
use crate::canvas::FrameCanvas;
use crate::geometry::{Point, Size};
use crate::paint::paint_window;
use crate::view_state::{QuitReason, Transition, ViewEvent};

/// Map a window event to a loop event.
///
/// Returns `None` for input the preview ignores (keyboard, focus, wheel,
/// touch and the like). Pointer events use `cursor` as their position.
pub fn translate(event: &WindowEvent, cursor: Point) -> Option<ViewEvent> {
    match event {
        WindowEvent::RedrawRequested => Some(ViewEvent::Damage),
        WindowEvent::Occluded(false) => Some(ViewEvent::Damage),
        WindowEvent::ScaleFactorChanged { .. } => Some(ViewEvent::Damage),
        WindowEvent::Resized(size) => Some(ViewEvent::Resized(Size::new(
            size.width as i32,
            size.height as i32,
        ))),
        WindowEvent::MouseInput {
            state,
            button: MouseButton::Left,
            ..
        } => Some(match state {
            ElementState::Pressed => ViewEvent::PointerPressed(cursor),
            ElementState::Released => ViewEvent::PointerReleased(cursor),
        }),
        WindowEvent::CloseRequested => Some(ViewEvent::CloseRequested),
        WindowEvent::ActivationTokenDone { .. }
        | WindowEvent::Destroyed
        | WindowEvent::DroppedFile(_)
        | WindowEvent::HoveredFile(_)
        | WindowEvent::HoveredFileCancelled => {
            Some(ViewEvent::Unrecognized(format!("{:?}", event)))
        }
        _ => None,
    }
}

impl PreviewApp<'_> {
    fn create_surface(&self, event_loop: &ActiveEventLoop) -> Result<PreviewSurface> {
        let (width, height) = self.initial_size;
        let attributes = Window::default_attributes()
            .with_title(self.session.window_title())
            .with_inner_size(LogicalSize::new(width, height));
        let window = Arc::new(
            event_loop
                .create_window(attributes)
                .context("Failed to create preview window")?,
        );

        let size = window.inner_size();
        let surface_texture = SurfaceTexture::new(size.width, size.height, Arc::clone(&window));
        let pixels = Pixels::new(size.width.max(1), size.height.max(1), surface_texture)
            .context("Failed to allocate pixel surface")?;

        log::info!(
            "Preview window {}x{} (scale {})",
            size.width,
            size.height,
            window.scale_factor()
        );
        Ok(PreviewSurface { pixels, window })
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, error: anyhow::Error) {
        log::error!("{:#}", error);
        self.error = Some(error);
        event_loop.exit();
    }

    fn dispatch(&mut self, event_loop: &ActiveEventLoop, event: ViewEvent) {
        match self.view.handle(event, Instant::now()) {
            Transition::Idle => {}
            Transition::Repaint => {
                if let Err(e) = self.paint() {
                    self.fail(event_loop, e);
                }
            }
            Transition::Quit(reason) => {
                if let QuitReason::UnexpectedEvent(name) = &reason {
                    eprintln!("Unhandled window event {}. Exiting.", name);
                }
                self.quit_reason = Some(reason);
                event_loop.exit();
            }
        }
    }

    fn resize(&mut self, size: Size) -> Result<()> {
        let Some(surface) = self.surface.as_mut() else {
            return Ok(());
        };
        if size.is_empty() {
            return Ok(());
        }
        let (width, height) = (size.width as u32, size.height as u32);
        surface
            .pixels
            .resize_surface(width, height)
            .context("Failed to resize pixel surface")?;
        surface
            .pixels
            .resize_buffer(width, height)
            .context("Failed to resize pixel buffer")?;
        Ok(())
    }

    /// Paint and present one frame. Only presentation failures are errors;
    /// paint failures leave the view dirty for the next attempt.
    fn paint(&mut self) -> Result<()> {
        let Some(surface) = self.surface.as_mut() else {
            return Ok(());
        };
        let size = self.view.window_size();
        if size.is_empty() {
            return Ok(());
        }

        let scale_factor = surface.window.scale_factor() as f32;
        let mut canvas = FrameCanvas::new(
            surface.pixels.frame_mut(),
            size,
            self.catalog,
            &mut self.scale_context,
            scale_factor,
        );

        let complete = match paint_window(&mut canvas, self.session, &self.style) {
            Ok(frame) => {
                self.view.set_quit_button(frame.quit_button);
                if let Err(e) = &frame.grid {
                    log::warn!("Repaint incomplete: {}", e);
                }
                frame.is_complete()
            }
            Err(e) => {
                log::warn!("Repaint failed: {}", e);
                false
            }
        };

        surface
            .pixels
            .render()
            .context("Failed to present frame")?;
        if complete {
            self.view.paint_succeeded(Instant::now());
        }
        Ok(())
    }
}

impl ApplicationHandler for PreviewApp<'_> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.surface.is_some() {
            return;
        }
        match self.create_surface(event_loop) {
            Ok(surface) => {
                let size = surface.window.inner_size();
                self.surface = Some(surface);
                self.dispatch(
                    event_loop,
                    ViewEvent::Resized(Size::new(size.width as i32, size.height as i32)),
                );
            }
            Err(e) => self.fail(event_loop, e),
        }
    }

    fn new_events(&mut self, event_loop: &ActiveEventLoop, cause: StartCause) {
        if let StartCause::ResumeTimeReached { .. } = cause {
            self.dispatch(event_loop, ViewEvent::Timeout);
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        if let WindowEvent::CursorMoved { position, .. } = &event {
            self.cursor = Point::new(position.x as i32, position.y as i32);
            return;
        }

        let Some(view_event) = translate(&event, self.cursor) else {
            return;
        };

        if let ViewEvent::Resized(size) = view_event
            && let Err(e) = self.resize(size)
        {
            self.fail(event_loop, e);
            return;
        }

        self.dispatch(event_loop, view_event);
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();
        let next_wake = self
            .view
            .next_paint_at(now)
            .unwrap_or(now + self.view.refresh_interval());
        event_loop.set_control_flow(ControlFlow::WaitUntil(next_wake));
    }
}
