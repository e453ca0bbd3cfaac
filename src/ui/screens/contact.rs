//! Contact screen

use ratatui::prelude::*;
use ratatui::widgets::{Paragraph, Wrap};

use crate::app::AppState;
use crate::content;
use crate::ui::layout::{centered_rect, section_block};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let theme = &state.theme;
    let panel = centered_rect(60, 70, area);

    let block = section_block("Get In Touch", theme);
    let inner = block.inner(panel);
    frame.render_widget(block, panel);

    let mut lines: Vec<Line> = vec![
        Line::styled(
            "Looking for QA Automation or Full-Stack Development expertise?",
            theme.text(),
        ),
        Line::styled(
            "Let's collaborate and build quality software together!",
            theme.text(),
        ),
        Line::raw(""),
    ];
    for entry in &content::CONTACT {
        lines.push(Line::from(vec![
            Span::styled(format!("{:<10}", entry.label), theme.accent()),
            Span::styled(entry.value, theme.text()),
        ]));
    }
    lines.push(Line::raw(""));
    lines.push(Line::from(vec![
        Span::styled("● ", theme.success()),
        Span::styled("Available for SDET & Full-Stack roles", theme.success()),
    ]));

    let body = Paragraph::new(lines).wrap(Wrap { trim: true });
    frame.render_widget(body, inner);
}
