//! UI rendering

pub mod components;
pub mod layout;
pub mod screens;
mod theme;

pub use theme::Theme;

use ratatui::prelude::*;

use crate::app::{AppState, Screen};

use layout::ScreenLayout;

/// Main render function - delegates to the appropriate screen, then
/// layers the drawer and toasts on top.
pub fn render(frame: &mut Frame, state: &AppState) {
    let chrome = ScreenLayout::new(frame.area());

    components::header::render(frame, chrome.header, state);

    match state.current_screen {
        Screen::Home => screens::home::render(frame, chrome.content, state),
        Screen::About => screens::about::render(frame, chrome.content, state),
        Screen::Skills => screens::skills::render(frame, chrome.content, state),
        Screen::Experience => screens::experience::render(frame, chrome.content, state),
        Screen::Projects => screens::projects::render(frame, chrome.content, state),
        Screen::Contact => screens::contact::render(frame, chrome.content, state),
        Screen::SignIn => screens::sign_in::render(frame, chrome.content, state),
        Screen::Help => screens::help::render(frame, chrome.content, state),
    }

    layout::render_footer(frame, chrome.footer, &footer_hints(state), &state.theme);

    if state.drawer.is_visible() {
        components::drawer::render(frame, frame.area(), state);
    }

    // Toasts render last so they sit above everything.
    state.toaster.render(frame, frame.area(), &state.theme);
}

fn footer_hints(state: &AppState) -> Vec<(&'static str, &'static str)> {
    if state.drawer.is_visible() {
        return vec![("Esc", "Close"), ("Tab", "Next"), ("Enter", "Select")];
    }
    match state.current_screen {
        Screen::SignIn => vec![
            ("Tab", "Next"),
            ("Enter", "Select"),
            ("F2", "Show password"),
            ("Esc", "Back"),
        ],
        Screen::Projects => vec![
            ("↑/↓", "Select"),
            ("1-6", "Pages"),
            ("m", "Menu"),
            ("Esc", "Back"),
        ],
        Screen::Skills => vec![
            ("←/→", "Category"),
            ("1-6", "Pages"),
            ("m", "Menu"),
            ("Esc", "Back"),
        ],
        Screen::Home => vec![("1-6", "Pages"), ("m", "Menu"), ("?", "Help"), ("q", "Quit")],
        _ => vec![("1-6", "Pages"), ("m", "Menu"), ("?", "Help"), ("Esc", "Back")],
    }
}
