//! Projects screen: selectable list with a detail pane

use ratatui::prelude::*;
use ratatui::widgets::{Paragraph, Wrap};

use crate::app::AppState;
use crate::content;
use crate::ui::layout::{section_block, section_block_focused, two_column_layout};
use crate::utils::truncate;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let theme = &state.theme;
    let (left, right) = two_column_layout(area, 40);
    let selected = state.project_index.min(content::PROJECTS.len() - 1);

    let list_block = section_block_focused("Featured Projects", theme);
    let list_inner = list_block.inner(left);
    frame.render_widget(list_block, left);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(1); content::PROJECTS.len()])
        .split(list_inner);

    let title_width = list_inner.width.saturating_sub(2) as usize;
    for (i, (project, row)) in content::PROJECTS.iter().zip(rows.iter()).enumerate() {
        let marker = if i == selected { "▸ " } else { "  " };
        let line = Paragraph::new(format!("{}{}", marker, truncate(project.title, title_width)))
            .style(theme.menu_item(i == selected));
        frame.render_widget(line, *row);
    }

    let project = &content::PROJECTS[selected];
    let detail_block = section_block(project.title, theme);
    let detail_inner = detail_block.inner(right);
    frame.render_widget(detail_block, right);

    let status_style = if project.status == "Live" {
        theme.success()
    } else {
        theme.warning()
    };
    let mut lines: Vec<Line> = vec![
        Line::from(vec![
            Span::styled(project.category, theme.accent()),
            Span::raw("  "),
            Span::styled(format!("[{}]", project.status), status_style),
        ]),
        Line::raw(""),
        Line::styled(project.description, theme.text()),
        Line::raw(""),
        Line::styled("Key Features:", theme.accent()),
    ];
    for feature in project.features {
        lines.push(Line::styled(format!("  • {}", feature), theme.text()));
    }
    lines.push(Line::raw(""));
    lines.push(Line::from(vec![
        Span::styled("Tech Stack: ", theme.accent()),
        Span::styled(project.technologies.join(", "), theme.text_secondary()),
    ]));
    lines.push(Line::raw(""));
    lines.push(Line::from(vec![
        Span::styled("Link: ", theme.accent()),
        Span::styled(project.link, theme.info()),
    ]));

    let detail = Paragraph::new(lines).wrap(Wrap { trim: true });
    frame.render_widget(detail, detail_inner);
}
