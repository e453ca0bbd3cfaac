//! Toast notifications
//!
//! Deadline-based toasts stacked top-center. A loading toast has no
//! deadline: it stays up until the action it tracks resolves it into a
//! success or error toast in place.

use std::time::{Duration, Instant};

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::ui::Theme;

/// How long a success toast stays visible.
pub const SUCCESS_TTL: Duration = Duration::from_secs(3);

/// How long an info toast stays visible.
pub const INFO_TTL: Duration = Duration::from_millis(3500);

/// How long an error toast stays visible.
pub const ERROR_TTL: Duration = Duration::from_secs(4);

/// Toast severity level
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Success,
    Error,
    /// Pending action; dismissed only by [`Toaster::resolve`].
    Loading,
}

/// Handle to a toast, for resolving it in place later.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToastId(u64);

pub struct Toast {
    pub message: String,
    pub level: ToastLevel,
    id: ToastId,
    /// `None` keeps the toast up until resolved.
    deadline: Option<Instant>,
}

impl Toast {
    pub fn icon(&self) -> &'static str {
        match self.level {
            ToastLevel::Info => "ℹ",
            ToastLevel::Success => "✓",
            ToastLevel::Error => "✗",
            ToastLevel::Loading => "…",
        }
    }

    fn is_expired(&self, now: Instant) -> bool {
        matches!(self.deadline, Some(deadline) if now >= deadline)
    }

    fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let style = match self.level {
            ToastLevel::Info => theme.info(),
            ToastLevel::Success => theme.success(),
            ToastLevel::Error => theme.danger(),
            ToastLevel::Loading => theme.info(),
        };

        // Position at top-center.
        let width = (self.message.chars().count() + 6).min(60) as u16;
        let height = 3;
        let x = area.x + area.width.saturating_sub(width) / 2;
        let y = area.y + 1;

        let toast_area = Rect::new(x, y, width.min(area.width), height);

        frame.render_widget(Clear, toast_area);

        let block = Block::default().borders(Borders::ALL).border_style(style);
        let text = format!("{} {}", self.icon(), self.message);
        let content = Paragraph::new(text)
            .style(style)
            .alignment(Alignment::Center)
            .block(block);

        frame.render_widget(content, toast_area);
    }
}

/// Owns the active toasts and their lifecycle.
pub struct Toaster {
    toasts: Vec<Toast>,
    next_id: u64,
    max_visible: usize,
}

impl Toaster {
    pub fn new() -> Self {
        Self {
            toasts: Vec::new(),
            next_id: 0,
            max_visible: 3,
        }
    }

    fn push(&mut self, message: String, level: ToastLevel, deadline: Option<Instant>) -> ToastId {
        let id = ToastId(self.next_id);
        self.next_id += 1;
        self.toasts.push(Toast {
            message,
            level,
            id,
            deadline,
        });
        // Keep only the most recent.
        while self.toasts.len() > self.max_visible {
            self.toasts.remove(0);
        }
        id
    }

    pub fn info(&mut self, message: impl Into<String>, now: Instant) -> ToastId {
        self.push(message.into(), ToastLevel::Info, Some(now + INFO_TTL))
    }

    pub fn success(&mut self, message: impl Into<String>, now: Instant) -> ToastId {
        self.push(message.into(), ToastLevel::Success, Some(now + SUCCESS_TTL))
    }

    pub fn error(&mut self, message: impl Into<String>, now: Instant) -> ToastId {
        self.push(message.into(), ToastLevel::Error, Some(now + ERROR_TTL))
    }

    /// Show a pending toast with no deadline.
    pub fn loading(&mut self, message: impl Into<String>) -> ToastId {
        self.push(message.into(), ToastLevel::Loading, None)
    }

    /// Replace a toast's content in place and start its dismissal
    /// clock. Missing ids (already evicted) are ignored.
    pub fn resolve(&mut self, id: ToastId, level: ToastLevel, message: impl Into<String>, now: Instant) {
        if let Some(toast) = self.toasts.iter_mut().find(|t| t.id == id) {
            toast.message = message.into();
            toast.level = level;
            toast.deadline = Some(match level {
                ToastLevel::Success => now + SUCCESS_TTL,
                _ => now + ERROR_TTL,
            });
        }
    }

    /// Drop expired toasts.
    pub fn tick(&mut self, now: Instant) {
        self.toasts.retain(|t| !t.is_expired(now));
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        for (i, toast) in self.toasts.iter().enumerate() {
            let offset_y = (i * 3) as u16;
            let adjusted_area = Rect::new(
                area.x,
                area.y + offset_y,
                area.width,
                area.height.saturating_sub(offset_y),
            );
            toast.render(frame, adjusted_area, theme);
        }
    }
}

impl Default for Toaster {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_expires_after_its_ttl() {
        let mut toaster = Toaster::new();
        let t0 = Instant::now();
        toaster.success("done", t0);

        toaster.tick(t0 + SUCCESS_TTL - Duration::from_millis(1));
        assert!(!toaster.is_empty());

        toaster.tick(t0 + SUCCESS_TTL);
        assert!(toaster.is_empty());
    }

    #[test]
    fn loading_persists_until_resolved() {
        let mut toaster = Toaster::new();
        let t0 = Instant::now();
        let id = toaster.loading("Signing in...");

        toaster.tick(t0 + Duration::from_secs(60));
        assert!(!toaster.is_empty());

        let t1 = t0 + Duration::from_secs(61);
        toaster.resolve(id, ToastLevel::Error, "Invalid credentials.", t1);
        assert_eq!(toaster.toasts[0].message, "Invalid credentials.");
        assert_eq!(toaster.toasts[0].level, ToastLevel::Error);

        toaster.tick(t1 + ERROR_TTL);
        assert!(toaster.is_empty());
    }

    #[test]
    fn oldest_toast_is_evicted_past_the_cap() {
        let mut toaster = Toaster::new();
        let t0 = Instant::now();
        for i in 0..4 {
            toaster.info(format!("toast {i}"), t0);
        }
        assert_eq!(toaster.toasts.len(), 3);
        assert_eq!(toaster.toasts[0].message, "toast 1");
    }

    #[test]
    fn resolving_an_evicted_toast_is_a_no_op() {
        let mut toaster = Toaster::new();
        let t0 = Instant::now();
        let id = toaster.loading("pending");
        for i in 0..3 {
            toaster.info(format!("toast {i}"), t0);
        }
        toaster.resolve(id, ToastLevel::Success, "late", t0);
        assert!(toaster.toasts.iter().all(|t| t.message != "late"));
    }
}
