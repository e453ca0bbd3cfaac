//! Header bar: brand, current page, and sign-in status

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::app::AppState;
use crate::content;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let theme = &state.theme;

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(theme.border());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(30),
            Constraint::Min(10),
            Constraint::Length(30),
        ])
        .split(inner);

    let brand = Line::from(vec![
        Span::styled(" ◆ ", theme.accent()),
        Span::styled(content::OWNER, theme.title()),
    ]);
    frame.render_widget(Paragraph::new(brand), chunks[0]);

    let page = Paragraph::new(state.current_screen.title())
        .style(theme.text_secondary())
        .alignment(Alignment::Center);
    frame.render_widget(page, chunks[1]);

    // Identity badge mirrors the session: avatar initial when signed
    // in, a sign-in affordance otherwise.
    let identity = match &state.user {
        Some(user) => Line::from(vec![
            Span::styled(format!("({}) ", user.initial()), theme.accent()),
            Span::styled(user.name.clone(), theme.text()),
            Span::styled("  [m] menu ", theme.text_muted()),
        ]),
        None => Line::from(vec![
            Span::styled("Sign In", theme.text_muted()),
            Span::styled("  [m] menu ", theme.text_muted()),
        ]),
    };
    let identity = Paragraph::new(identity).alignment(Alignment::Right);
    frame.render_widget(identity, chunks[2]);
}
