//! Navigation drawer overlay

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::app::AppState;
use crate::menu::{drawer_items, DrawerPhase};
use crate::ui::layout::centered_rect_fixed;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let theme = &state.theme;
    let items = drawer_items(state.signed_in());

    let height = items.len() as u16 + 4;
    let panel = centered_rect_fixed(34, height, area);

    frame.render_widget(Clear, panel);

    // The border tracks the transition phase: dim while entering,
    // highlighted once presented, muted on the way out.
    let border_style = match state.drawer.phase() {
        DrawerPhase::Opening => theme.border(),
        DrawerPhase::Open => theme.border_focused(),
        DrawerPhase::Closing | DrawerPhase::Closed => theme.text_muted(),
    };

    let block = Block::default()
        .title(" Menu ")
        .title_style(theme.title())
        .borders(Borders::ALL)
        .border_style(border_style);
    let inner = block.inner(panel);
    frame.render_widget(block, panel);

    let mut constraints = vec![Constraint::Length(1); items.len()];
    constraints.push(Constraint::Min(0));
    constraints.push(Constraint::Length(1));
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    // No row is highlighted until the focus delay has moved focus in.
    let focused = state.drawer_focus.index();
    for (i, item) in items.iter().enumerate() {
        let selected = focused == Some(i);
        let marker = if selected { "▸ " } else { "  " };
        let row = Paragraph::new(format!("{}{}", marker, item.label(state.user.as_ref())))
            .style(theme.menu_item(selected));
        frame.render_widget(row, rows[i]);
    }

    let hint = Paragraph::new("[Esc] Close  [Tab] Next")
        .style(theme.text_muted())
        .alignment(Alignment::Center);
    frame.render_widget(hint, rows[items.len() + 1]);
}
