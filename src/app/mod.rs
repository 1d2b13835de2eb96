//! Preview window for fc-char
//!
//! This module contains the interactive glyph preview:
//! - `run_preview`: creates the event loop and runs it until the user quits
//! - `PreviewApp`: the winit `ApplicationHandler`, driving `ViewState`
//!   and painting through `FrameCanvas` into a `pixels` surface

use std::sync::Arc;

use anyhow::{Context, Result};
use fc_char_config::Config;
use fc_char_fonts::FontCatalog;
use pixels::Pixels;
use swash::scale::ScaleContext;
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::Window;

use crate::geometry::{Point, Size};
use crate::paint::PaintStyle;
use crate::session::Session;
use crate::view_state::{QuitReason, ViewState};

pub mod handler;

/// Window and the pixel surface presenting into it.
struct PreviewSurface {
    pixels: Pixels<'static>,
    window: Arc<Window>,
}

/// Event loop state for one preview window.
pub struct PreviewApp<'a> {
    session: &'a Session,
    catalog: &'a FontCatalog,
    style: PaintStyle,
    initial_size: (u32, u32),
    view: ViewState,
    surface: Option<PreviewSurface>,
    scale_context: ScaleContext,
    cursor: Point,
    error: Option<anyhow::Error>,
    quit_reason: Option<QuitReason>,
}

impl<'a> PreviewApp<'a> {
    pub fn new(session: &'a Session, catalog: &'a FontCatalog, config: &Config) -> Self {
        Self {
            session,
            catalog,
            style: PaintStyle::from_config(config),
            initial_size: (config.window_width, config.window_height),
            view: ViewState::new(
                Size::new(config.window_width as i32, config.window_height as i32),
                config.refresh_interval(),
            ),
            surface: None,
            scale_context: ScaleContext::new(),
            cursor: Point::default(),
            error: None,
            quit_reason: None,
        }
    }

    /// Consume the app after the loop exits, surfacing any fatal error.
    fn finish(self) -> Result<Option<QuitReason>> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(self.quit_reason),
        }
    }
}

/// Show the preview window and block until it is closed.
///
/// Returns why the loop ended, or `None` if it ended without a quit event.
pub fn run_preview(
    session: &Session,
    catalog: &FontCatalog,
    config: &Config,
) -> Result<Option<QuitReason>> {
    let event_loop = EventLoop::new().context("Failed to connect to the window system")?;
    // Wait for events; about_to_wait schedules the refresh timeout
    event_loop.set_control_flow(ControlFlow::Wait);

    let mut app = PreviewApp::new(session, catalog, config);
    event_loop
        .run_app(&mut app)
        .context("Window event loop failed")?;

    let reason = app.finish()?;
    log::info!("Preview closed: {:?}", reason);
    Ok(reason)
}
