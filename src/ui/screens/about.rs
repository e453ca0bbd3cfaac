//! About screen: bio and career snapshot

use ratatui::prelude::*;
use ratatui::widgets::{Paragraph, Wrap};

use crate::app::AppState;
use crate::content;
use crate::ui::layout::{section_block, two_column_layout};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let theme = &state.theme;
    let (left, right) = two_column_layout(area, 60);

    let bio_block = section_block("About Me", theme);
    let bio_inner = bio_block.inner(left);
    frame.render_widget(bio_block, left);

    let mut lines: Vec<Line> = vec![
        Line::styled(content::OWNER, theme.title()),
        Line::styled(content::TAGLINE, theme.accent()),
        Line::raw(""),
    ];
    for paragraph in content::ABOUT {
        lines.push(Line::styled(paragraph, theme.text()));
        lines.push(Line::raw(""));
    }
    let bio = Paragraph::new(lines).wrap(Wrap { trim: true });
    frame.render_widget(bio, bio_inner);

    let journey_block = section_block("Career Journey", theme);
    let journey_inner = journey_block.inner(right);
    frame.render_widget(journey_block, right);

    let mut journey: Vec<Line> = Vec::new();
    for entry in &content::EXPERIENCE {
        journey.push(Line::styled(entry.period, theme.text_muted()));
        journey.push(Line::styled(entry.role, theme.text_highlight()));
        journey.push(Line::styled(
            format!("{} • {}", entry.company, entry.location),
            theme.text_secondary(),
        ));
        journey.push(Line::raw(""));
        journey.push(Line::styled(entry.description, theme.text()));
    }
    let journey = Paragraph::new(journey).wrap(Wrap { trim: true });
    frame.render_widget(journey, journey_inner);
}
