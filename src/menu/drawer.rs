//! Drawer open/close lifecycle
//!
//! An explicit Closed -> Opening -> Open -> Closing machine with
//! named transition delays, instead of ad hoc timer chains. `tick`
//! is fed the loop clock, so tests drive time by hand. The drawer is
//! never unmounted abruptly: a close request always runs the full
//! exit delay, even when it arrives before the entrance finished.

use std::time::{Duration, Instant};

/// Delay before the entrance presentation is applied (initial paint).
pub const PAINT_DELAY: Duration = Duration::from_millis(10);

/// Duration of the exit transition; the drawer stays mounted this
/// long after a close request.
pub const EXIT_DELAY: Duration = Duration::from_millis(280);

/// Delay before focus moves to the first item of a newly visible drawer.
pub const FOCUS_DELAY: Duration = Duration::from_millis(120);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DrawerPhase {
    #[default]
    Closed,
    Opening,
    Open,
    Closing,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrawerEvent {
    /// Entrance transition applied; the drawer is fully presented.
    Opened,
    /// Initial focus should move to the first drawer item.
    FocusFirst,
    /// Exit transition finished; the drawer unmounted and focus
    /// returns to the control that opened it.
    Closed,
}

#[derive(Debug, Default)]
pub struct Drawer {
    phase: DrawerPhase,
    phase_since: Option<Instant>,
    visible_since: Option<Instant>,
    focus_pending: bool,
}

impl Drawer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> DrawerPhase {
        self.phase
    }

    /// Whether the drawer is mounted (including mid-exit-transition).
    pub fn is_visible(&self) -> bool {
        self.phase != DrawerPhase::Closed
    }

    pub fn request_open(&mut self, now: Instant) {
        if self.phase != DrawerPhase::Closed {
            return;
        }
        self.phase = DrawerPhase::Opening;
        self.phase_since = Some(now);
        self.visible_since = Some(now);
        self.focus_pending = true;
    }

    /// Begin the exit transition. Valid from Opening as well as Open;
    /// the full exit delay runs from this request.
    pub fn request_close(&mut self, now: Instant) {
        if !matches!(self.phase, DrawerPhase::Opening | DrawerPhase::Open) {
            return;
        }
        self.phase = DrawerPhase::Closing;
        self.phase_since = Some(now);
        self.focus_pending = false;
    }

    pub fn toggle(&mut self, now: Instant) {
        if self.is_visible() {
            self.request_close(now);
        } else {
            self.request_open(now);
        }
    }

    /// Advance the lifecycle to `now`; at most one event per call.
    pub fn tick(&mut self, now: Instant) -> Option<DrawerEvent> {
        let since = self.phase_since?;
        match self.phase {
            DrawerPhase::Opening if now.duration_since(since) >= PAINT_DELAY => {
                self.phase = DrawerPhase::Open;
                self.phase_since = Some(now);
                return Some(DrawerEvent::Opened);
            }
            DrawerPhase::Closing if now.duration_since(since) >= EXIT_DELAY => {
                self.phase = DrawerPhase::Closed;
                self.phase_since = None;
                self.visible_since = None;
                self.focus_pending = false;
                return Some(DrawerEvent::Closed);
            }
            _ => {}
        }

        if self.focus_pending {
            if let Some(visible_since) = self.visible_since {
                if now.duration_since(visible_since) >= FOCUS_DELAY {
                    self.focus_pending = false;
                    return Some(DrawerEvent::FocusFirst);
                }
            }
        }
        None
    }
}
