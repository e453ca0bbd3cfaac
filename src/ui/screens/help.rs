//! Help screen with key bindings

use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::app::AppState;
use crate::ui::layout::{centered_rect, section_block};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let theme = &state.theme;
    let panel = centered_rect(60, 80, area);

    let block = section_block("Help", theme);
    let inner = block.inner(panel);
    frame.render_widget(block, panel);

    let bindings: &[(&str, &str)] = &[
        ("1-6", "Jump to a page"),
        ("m", "Open the navigation menu"),
        ("Tab / ↓", "Next focusable item"),
        ("Shift-Tab / ↑", "Previous focusable item"),
        ("Enter", "Activate the focused item"),
        ("F2", "Toggle password visibility (sign-in)"),
        ("Space", "Toggle remember me (sign-in)"),
        ("Esc", "Close menu / go back"),
        ("?", "This screen"),
        ("q", "Quit (from Home)"),
    ];

    let lines: Vec<Line> = bindings
        .iter()
        .map(|(key, action)| {
            Line::from(vec![
                Span::styled(format!("  {:<16}", key), theme.text_highlight()),
                Span::styled(*action, theme.text()),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), inner);
}
