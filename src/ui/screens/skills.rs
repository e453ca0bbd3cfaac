//! Skills screen: tabbed skill groups with proficiency bars

use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::app::AppState;
use crate::content;
use crate::ui::layout::section_block;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let theme = &state.theme;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(2), // Tabs
            Constraint::Min(5),    // Skill bars
        ])
        .split(area);

    let tab = state.skill_tab.min(content::SKILL_GROUPS.len() - 1);
    let tabs: Vec<Span> = content::SKILL_GROUPS
        .iter()
        .enumerate()
        .flat_map(|(i, group)| {
            let style = if i == tab {
                theme.menu_item(true)
            } else {
                theme.text_secondary()
            };
            [Span::styled(format!(" {} ", group.name), style), Span::raw(" ")]
        })
        .collect();
    let tab_bar = Paragraph::new(Line::from(tabs)).alignment(Alignment::Center);
    frame.render_widget(tab_bar, chunks[0]);

    let group = &content::SKILL_GROUPS[tab];
    let block = section_block(group.name, theme);
    let inner = block.inner(chunks[1]);
    frame.render_widget(block, chunks[1]);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(1); group.skills.len()])
        .split(inner);

    let bar_width = 30usize;
    for (skill, row) in group.skills.iter().zip(rows.iter()) {
        let filled = bar_width * skill.level as usize / 100;
        let line = Line::from(vec![
            Span::styled(format!("{:<22}", skill.name), theme.text()),
            Span::styled("█".repeat(filled), Style::default().fg(theme.bar_filled)),
            Span::styled(
                "░".repeat(bar_width - filled),
                Style::default().fg(theme.bar_empty),
            ),
            Span::styled(format!(" {:>3}%", skill.level), theme.text_secondary()),
        ]);
        frame.render_widget(Paragraph::new(line), *row);
    }
}
