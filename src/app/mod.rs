//! Application state and event handling

mod config;
mod router;
mod state;

pub use config::{AppConfig, ConfigError};
pub use router::Router;
pub use state::{AppState, Screen, SignInFocus};

use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::prelude::*;

use crate::auth::{FlowEvent, ForgotPasswordOutcome, SubmitOutcome};
use crate::menu::{drawer_items, DrawerEvent, DrawerItem};
use crate::notify::ToastLevel;
use crate::session::{FileSessionStore, SessionStore};
use crate::ui;

/// Application result type
pub type AppResult<T> = anyhow::Result<T>;

const TICK_RATE: Duration = Duration::from_millis(100);

/// Main application struct
pub struct App {
    /// Application state
    pub state: AppState,

    /// Whether the app should quit
    pub should_quit: bool,
}

impl App {
    /// Create a new application instance
    pub fn new() -> AppResult<Self> {
        let store = FileSessionStore::open_default()?;
        Ok(Self {
            state: AppState::new(store),
            should_quit: false,
        })
    }

    /// Run the application main loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> AppResult<()> {
        while !self.should_quit {
            let now = Instant::now();
            self.advance(now);

            terminal.draw(|frame| ui::render(frame, &self.state))?;

            if event::poll(TICK_RATE)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key.code);
                    }
                }
            }
        }

        Ok(())
    }

    /// Advance every time-driven machine to `now`.
    fn advance(&mut self, now: Instant) {
        self.state.now = now;

        while let Some(event) = self.state.drawer.tick(now) {
            match event {
                DrawerEvent::FocusFirst => self.state.drawer_focus.focus_first(),
                DrawerEvent::Opened | DrawerEvent::Closed => {}
            }
        }

        if let Some(event) = self.state.sign_in.tick(now) {
            self.on_flow_event(event);
        }

        self.state.toaster.tick(now);

        // Session changes made by another process show up here; same
        // as a second browser tab editing shared storage.
        if let Some(change) = self.state.store.poll_external() {
            self.state.user = change;
        }
    }

    fn on_flow_event(&mut self, event: FlowEvent) {
        match event {
            FlowEvent::SecondFactorRequired => {
                self.state.sign_in_focus = SignInFocus::SecondFactor;
                self.resolve_submit_toast(
                    ToastLevel::Success,
                    "2FA code sent to your email/phone".to_string(),
                );
            }
            FlowEvent::SignedIn {
                record,
                remember_me,
            } => {
                let remembered = remember_me.then(|| record.email.clone());
                if let Err(e) = self.state.config.set_remembered_email(remembered) {
                    tracing::warn!("failed to save preferences: {e}");
                }
                self.state.user = Some(record);
                self.resolve_submit_toast(
                    ToastLevel::Success,
                    "Welcome back! Login successful.".to_string(),
                );
            }
            FlowEvent::Failed { attempts_remaining } => {
                self.resolve_submit_toast(
                    ToastLevel::Error,
                    format!("Invalid credentials. {attempts_remaining} attempts remaining."),
                );
            }
            FlowEvent::LockedOut { lockout_secs } => {
                self.resolve_submit_toast(
                    ToastLevel::Error,
                    format!(
                        "Too many failed attempts. Account locked for {} minutes.",
                        lockout_secs / 60
                    ),
                );
            }
            FlowEvent::LockoutExpired => {}
            FlowEvent::RedirectHome => self.navigate(Screen::Home),
        }
    }

    /// Morph the pending toast into the outcome, or show a fresh one.
    fn resolve_submit_toast(&mut self, level: ToastLevel, message: String) {
        match self.state.submit_toast.take() {
            Some(id) => self
                .state
                .toaster
                .resolve(id, level, message, self.state.now),
            None => {
                let _ = match level {
                    ToastLevel::Error => self.state.toaster.error(message, self.state.now),
                    _ => self.state.toaster.success(message, self.state.now),
                };
            }
        }
    }

    /// Handle key press events
    fn handle_key(&mut self, key: KeyCode) {
        // The open drawer traps all input.
        if self.state.drawer.is_visible() {
            self.handle_drawer_key(key);
            return;
        }

        match self.state.current_screen {
            Screen::SignIn => self.handle_sign_in_key(key),
            _ => self.handle_page_key(key),
        }
    }

    fn handle_drawer_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Esc | KeyCode::Char('m') => self.state.drawer.request_close(self.state.now),
            KeyCode::Tab | KeyCode::Down => self.state.drawer_focus.next(),
            KeyCode::BackTab | KeyCode::Up => self.state.drawer_focus.prev(),
            KeyCode::Enter => {
                if let Some(index) = self.state.drawer_focus.index() {
                    self.activate_drawer_item(index);
                }
            }
            // Everything else is captured while the drawer is up.
            _ => {}
        }
    }

    fn activate_drawer_item(&mut self, index: usize) {
        let items = drawer_items(self.state.signed_in());
        if let Some(item) = items.get(index) {
            match item {
                DrawerItem::Nav(screen) => self.navigate(*screen),
                DrawerItem::SignIn => self.navigate(Screen::SignIn),
                DrawerItem::SignOut => self.sign_out(),
                DrawerItem::Work => self.navigate(Screen::Projects),
            }
        }
        self.state.drawer.request_close(self.state.now);
    }

    fn handle_sign_in_key(&mut self, key: KeyCode) {
        let second_factor = self.state.sign_in.requires_second_factor();
        match key {
            KeyCode::Esc => self.back(),
            KeyCode::Tab | KeyCode::Down => {
                self.state.sign_in_focus = self.state.sign_in_focus.next(second_factor);
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.state.sign_in_focus = self.state.sign_in_focus.prev(second_factor);
            }
            KeyCode::Enter => self.activate_sign_in_focus(),
            KeyCode::F(2) => self.state.show_password = !self.state.show_password,
            KeyCode::Char(' ') if self.state.sign_in_focus == SignInFocus::RememberMe => {
                self.state.sign_in.toggle_remember_me();
            }
            KeyCode::Char(c) => {
                if let Some(field) = self.state.sign_in_focus.field() {
                    self.state.sign_in.input_char(field, c);
                }
            }
            KeyCode::Backspace => {
                if let Some(field) = self.state.sign_in_focus.field() {
                    self.state.sign_in.backspace(field);
                }
            }
            _ => {}
        }
    }

    fn activate_sign_in_focus(&mut self) {
        match self.state.sign_in_focus {
            SignInFocus::Email
            | SignInFocus::Password
            | SignInFocus::SecondFactor
            | SignInFocus::Submit => self.submit(),
            SignInFocus::RememberMe => self.state.sign_in.toggle_remember_me(),
            SignInFocus::Forgot => {
                let now = self.state.now;
                match self.state.sign_in.forgot_password() {
                    ForgotPasswordOutcome::EmailMissing => {
                        self.state
                            .toaster
                            .error("Please enter your email first", now);
                    }
                    ForgotPasswordOutcome::EmailInvalid => {
                        self.state.toaster.error("Please enter a valid email", now);
                    }
                    ForgotPasswordOutcome::LinkSent => {
                        self.state
                            .toaster
                            .success("Password reset link sent to your email", now);
                    }
                }
            }
            SignInFocus::Google => {
                let message = self.state.sign_in.social_login("Google");
                self.state.toaster.success(message, self.state.now);
            }
            SignInFocus::GitHub => {
                let message = self.state.sign_in.social_login("GitHub");
                self.state.toaster.success(message, self.state.now);
            }
        }
    }

    fn submit(&mut self) {
        let now = self.state.now;
        match self.state.sign_in.submit(now) {
            SubmitOutcome::Locked { remaining_secs } => {
                self.state.toaster.error(
                    format!("Account locked. Please wait {remaining_secs} seconds."),
                    now,
                );
            }
            SubmitOutcome::Rejected => {
                self.state
                    .toaster
                    .error("Please fix the errors in the form", now);
            }
            SubmitOutcome::Pending => {
                if self.state.submit_toast.is_none() && self.state.sign_in.is_submitting() {
                    self.state.submit_toast = Some(self.state.toaster.loading("Signing in..."));
                }
            }
        }
    }

    fn handle_page_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') if self.state.current_screen == Screen::Home => {
                self.should_quit = true;
            }
            KeyCode::Char('m') => self.open_drawer(),
            KeyCode::Char('?') => self.navigate(Screen::Help),
            KeyCode::Char(c @ '1'..='6') => {
                let index = c as usize - '1' as usize;
                self.navigate(Screen::nav_order()[index]);
            }
            KeyCode::Esc => self.back(),
            KeyCode::Up if self.state.current_screen == Screen::Projects => {
                self.state.project_index = self.state.project_index.saturating_sub(1);
            }
            KeyCode::Down if self.state.current_screen == Screen::Projects => {
                let max = crate::content::PROJECTS.len() - 1;
                self.state.project_index = (self.state.project_index + 1).min(max);
            }
            KeyCode::Left if self.state.current_screen == Screen::Skills => {
                self.state.skill_tab = self.state.skill_tab.saturating_sub(1);
            }
            KeyCode::Right if self.state.current_screen == Screen::Skills => {
                let max = crate::content::SKILL_GROUPS.len() - 1;
                self.state.skill_tab = (self.state.skill_tab + 1).min(max);
            }
            _ => {}
        }
    }

    fn open_drawer(&mut self) {
        self.state.drawer.request_open(self.state.now);
        let items = drawer_items(self.state.signed_in());
        self.state.drawer_focus.set_len(items.len());
        self.state.drawer_focus.clear();
    }

    /// Navigate to a screen. The sign-in page redirects home when a
    /// session already exists.
    fn navigate(&mut self, screen: Screen) {
        let screen = if screen == Screen::SignIn && self.state.signed_in() {
            Screen::Home
        } else {
            screen
        };
        if screen == Screen::SignIn {
            self.state.reset_sign_in();
        }
        self.state.current_screen = screen;
        self.state.router.push(screen);
    }

    fn back(&mut self) {
        if let Some(screen) = self.state.router.back() {
            self.state.current_screen = screen;
        }
    }

    fn sign_out(&mut self) {
        if let Err(e) = self.state.store.clear() {
            tracing::warn!("failed to clear session: {e}");
        }
        self.state.user = None;
        self.state
            .toaster
            .success("Signed out successfully", self.state.now);
    }
}
