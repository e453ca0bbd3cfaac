//! Experience timeline screen

use ratatui::prelude::*;
use ratatui::widgets::{Paragraph, Wrap};

use crate::app::AppState;
use crate::content;
use crate::ui::layout::section_block;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let theme = &state.theme;

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints(vec![
            Constraint::Ratio(1, content::EXPERIENCE.len() as u32);
            content::EXPERIENCE.len()
        ])
        .split(area);

    for (entry, row) in content::EXPERIENCE.iter().zip(rows.iter()) {
        let block = section_block(entry.period, theme);
        let inner = block.inner(*row);
        frame.render_widget(block, *row);

        let mut lines: Vec<Line> = vec![
            Line::styled(entry.role, theme.text_highlight()),
            Line::styled(
                format!("{} • {}", entry.company, entry.location),
                theme.text_secondary(),
            ),
            Line::raw(""),
            Line::styled(entry.description, theme.text()),
            Line::raw(""),
            Line::styled("Key Achievements:", theme.accent()),
        ];
        for achievement in entry.achievements {
            lines.push(Line::styled(format!("  • {}", achievement), theme.text()));
        }
        lines.push(Line::raw(""));
        lines.push(Line::from(vec![
            Span::styled("Technologies: ", theme.accent()),
            Span::styled(entry.technologies.join(", "), theme.text_secondary()),
        ]));

        let body = Paragraph::new(lines).wrap(Wrap { trim: true });
        frame.render_widget(body, inner);
    }
}
