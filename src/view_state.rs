//! Event-loop state for the preview window, independent of the windowing
//! backend.
//!
//! The window handler translates platform events into [`ViewEvent`]s and
//! acts on the returned [`Transition`]. Repaints are gated on the dirty flag
//! and the refresh interval.

use std::time::{Duration, Instant};

use crate::geometry::{Point, Rect, Size};

/// Hit-test region of the quit button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuitButton {
    rect: Rect,
}

impl QuitButton {
    pub fn new(rect: Rect) -> Self {
        Self { rect }
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Inclusive of all four edges, including the right and bottom borders.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.rect.x
            && point.x <= self.rect.right()
            && point.y >= self.rect.y
            && point.y <= self.rect.bottom()
    }
}

/// Coarse loop state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    WaitingForEvent,
    Dirty,
    Quitting,
}

/// Backend-neutral input to the loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewEvent {
    /// The wait elapsed with no event
    Timeout,
    /// Contents were damaged or exposed
    Damage,
    Resized(Size),
    PointerPressed(Point),
    PointerReleased(Point),
    /// The window manager asked to close the window
    CloseRequested,
    /// An event the loop does not know how to handle
    Unrecognized(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuitReason {
    QuitButton,
    WindowClosed,
    UnexpectedEvent(String),
}

/// What the handler should do after an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    Idle,
    /// Paint now; report the outcome via [`ViewState::paint_succeeded`]
    Repaint,
    Quit(QuitReason),
}

#[derive(Debug, Clone)]
pub struct ViewState {
    window_size: Size,
    dirty: bool,
    last_paint: Option<Instant>,
    last_attempt: Option<Instant>,
    refresh_interval: Duration,
    quit_button: Option<QuitButton>,
    quit_armed: bool,
    quitting: bool,
}

impl ViewState {
    pub fn new(window_size: Size, refresh_interval: Duration) -> Self {
        Self {
            window_size,
            dirty: true,
            last_paint: None,
            last_attempt: None,
            refresh_interval,
            quit_button: None,
            quit_armed: false,
            quitting: false,
        }
    }

    pub fn handle(&mut self, event: ViewEvent, now: Instant) -> Transition {
        if self.quitting {
            return Transition::Idle;
        }

        match event {
            ViewEvent::Timeout => {}
            ViewEvent::Damage => self.dirty = true,
            ViewEvent::Resized(size) => {
                self.window_size = size;
                self.dirty = true;
            }
            ViewEvent::PointerPressed(point) => {
                self.quit_armed = self.hit_quit(point);
            }
            ViewEvent::PointerReleased(point) => {
                if self.hit_quit(point) {
                    return self.quit(QuitReason::QuitButton);
                }
                self.quit_armed = false;
            }
            ViewEvent::CloseRequested => return self.quit(QuitReason::WindowClosed),
            ViewEvent::Unrecognized(name) => {
                return self.quit(QuitReason::UnexpectedEvent(name));
            }
        }

        if self.should_paint(now) {
            self.last_attempt = Some(now);
            Transition::Repaint
        } else {
            Transition::Idle
        }
    }

    /// Dirty, and at least one refresh interval since the last paint.
    pub fn should_paint(&self, now: Instant) -> bool {
        self.dirty
            && !self.quitting
            && self
                .last_paint
                .is_none_or(|last| now.duration_since(last) >= self.refresh_interval)
    }

    /// Deadline for the next timeout, `None` while clean.
    ///
    /// Measured from the last paint or attempt, so input that never reaches
    /// the state machine cannot push a held-back repaint further out.
    pub fn next_paint_at(&self, now: Instant) -> Option<Instant> {
        if !self.dirty || self.quitting {
            return None;
        }
        let last = self.last_paint.max(self.last_attempt);
        Some(last.map_or(now, |last| (last + self.refresh_interval).max(now)))
    }

    /// Record a complete paint. Failed paints leave the state dirty.
    pub fn paint_succeeded(&mut self, now: Instant) {
        self.dirty = false;
        self.last_paint = Some(now);
    }

    pub fn set_quit_button(&mut self, button: QuitButton) {
        self.quit_button = Some(button);
    }

    pub fn quit_button(&self) -> Option<QuitButton> {
        self.quit_button
    }

    pub fn quit_armed(&self) -> bool {
        self.quit_armed
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn window_size(&self) -> Size {
        self.window_size
    }

    pub fn refresh_interval(&self) -> Duration {
        self.refresh_interval
    }

    pub fn state(&self) -> LoopState {
        if self.quitting {
            LoopState::Quitting
        } else if self.dirty {
            LoopState::Dirty
        } else {
            LoopState::WaitingForEvent
        }
    }

    fn hit_quit(&self, point: Point) -> bool {
        self.quit_button.is_some_and(|b| b.contains(point))
    }

    fn quit(&mut self, reason: QuitReason) -> Transition {
        log::debug!("Quitting: {:?}", reason);
        self.quitting = true;
        self.quit_armed = false;
        Transition::Quit(reason)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quit_button_edges() {
        let button = QuitButton::new(Rect::new(5, 5, 50, 25));
        assert!(button.contains(Point::new(5, 5)));
        assert!(button.contains(Point::new(55, 30)));
        assert!(!button.contains(Point::new(4, 5)));
        assert!(!button.contains(Point::new(5, 31)));
    }

    #[test]
    fn test_starts_dirty() {
        let state = ViewState::new(Size::new(800, 600), Duration::from_millis(100));
        assert_eq!(state.state(), LoopState::Dirty);
        assert!(state.should_paint(Instant::now()));
    }
}
