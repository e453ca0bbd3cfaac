//! Landing screen

use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::app::AppState;
use crate::content;
use crate::ui::layout::section_block;
use crate::utils::format_login_time;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let theme = &state.theme;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(2), // Greeting
            Constraint::Length(2), // Name
            Constraint::Length(2), // Tagline
            Constraint::Length(4), // Intro
            Constraint::Length(5), // Quick stats
            Constraint::Min(1),    // Explore hint
        ])
        .split(area);

    let greeting = match &state.user {
        Some(user) => format!(
            "Welcome back, {}! Signed in {}",
            user.name,
            format_login_time(&user.login_time)
        ),
        None => format!("Hi, I'm {} 👋", content::OWNER),
    };
    let greeting = Paragraph::new(greeting)
        .style(theme.warning())
        .alignment(Alignment::Center);
    frame.render_widget(greeting, chunks[0]);

    let name = Paragraph::new(content::OWNER)
        .style(theme.title())
        .alignment(Alignment::Center);
    frame.render_widget(name, chunks[1]);

    let tagline = Paragraph::new(content::TAGLINE)
        .style(theme.text_secondary())
        .alignment(Alignment::Center);
    frame.render_widget(tagline, chunks[2]);

    let intro = Paragraph::new(content::INTRO)
        .style(theme.text())
        .alignment(Alignment::Center)
        .wrap(ratatui::widgets::Wrap { trim: true });
    frame.render_widget(intro, chunks[3]);

    render_stats(frame, chunks[4], state);

    let explore = Paragraph::new("Explore: [2] About  [3] Skills  [4] Experience  [5] Projects  [6] Contact")
        .style(theme.text_muted())
        .alignment(Alignment::Center);
    frame.render_widget(explore, chunks[5]);
}

fn render_stats(frame: &mut Frame, area: Rect, state: &AppState) {
    let theme = &state.theme;
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![
            Constraint::Ratio(1, content::QUICK_STATS.len() as u32);
            content::QUICK_STATS.len()
        ])
        .split(area);

    for (stat, col) in content::QUICK_STATS.iter().zip(cols.iter()) {
        let block = section_block(stat.label, theme);
        let inner = block.inner(*col);
        frame.render_widget(block, *col);
        let value = Paragraph::new(stat.value)
            .style(theme.accent())
            .alignment(Alignment::Center);
        frame.render_widget(value, inner);
    }
}
