//! Sign-in screen
//!
//! Centered dialog over the page: email/password inputs with inline
//! errors, the optional one-time code field, a strength meter, the
//! remember-me checkbox, and the secondary actions. While locked, a
//! countdown banner replaces the submit affordance.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::app::{AppState, SignInFocus};
use crate::auth::password_strength;
use crate::ui::layout::centered_rect_fixed;
use crate::ui::Theme;
use crate::utils::format_mmss;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let theme = &state.theme;

    let dialog = centered_rect_fixed(54, 22, area);
    let block = Block::default()
        .title(" Welcome Back ")
        .title_style(theme.title())
        .borders(Borders::ALL)
        .border_style(theme.border_focused());
    let inner = block.inner(dialog);
    frame.render_widget(block, dialog);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(1), // Subtitle
            Constraint::Length(1), // Spacer
            Constraint::Length(2), // Email (+error)
            Constraint::Length(2), // Password (+error)
            Constraint::Length(1), // Strength meter
            Constraint::Length(2), // 2FA code (+error)
            Constraint::Length(1), // Remember me / forgot
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Submit
            Constraint::Length(1), // Social buttons
            Constraint::Min(1),    // Status banner
        ])
        .split(inner);

    let subtitle = Paragraph::new("Sign in to continue")
        .style(theme.text_secondary())
        .alignment(Alignment::Center);
    frame.render_widget(subtitle, chunks[0]);

    let focus = state.sign_in_focus;
    let form = state.sign_in.form();
    let errors = state.sign_in.errors();

    render_input(
        frame,
        chunks[2],
        theme,
        "Email",
        &form.email,
        errors.email.as_deref(),
        focus == SignInFocus::Email,
    );

    let password_display = if state.show_password {
        form.password.clone()
    } else {
        "•".repeat(form.password.chars().count())
    };
    render_input(
        frame,
        chunks[3],
        theme,
        "Password",
        &password_display,
        errors.password.as_deref(),
        focus == SignInFocus::Password,
    );

    render_strength_meter(frame, chunks[4], theme, &form.password);

    if state.sign_in.requires_second_factor() {
        render_input(
            frame,
            chunks[5],
            theme,
            "2FA code",
            &form.second_factor,
            errors.second_factor.as_deref(),
            focus == SignInFocus::SecondFactor,
        );
    }

    let checkbox = if form.remember_me { "[x]" } else { "[ ]" };
    let options = Line::from(vec![
        Span::styled(marker(focus == SignInFocus::RememberMe), theme.text_highlight()),
        Span::styled(
            format!("{} Remember me", checkbox),
            theme.menu_item(focus == SignInFocus::RememberMe),
        ),
        Span::raw("    "),
        Span::styled(marker(focus == SignInFocus::Forgot), theme.text_highlight()),
        Span::styled(
            "Forgot password?",
            theme.menu_item(focus == SignInFocus::Forgot),
        ),
    ]);
    frame.render_widget(Paragraph::new(options), chunks[6]);

    let submit_label = if state.sign_in.is_submitting() {
        "Signing in..."
    } else {
        "[ Sign In ]"
    };
    let submit = Paragraph::new(Line::from(vec![
        Span::styled(marker(focus == SignInFocus::Submit), theme.text_highlight()),
        Span::styled(submit_label, theme.menu_item(focus == SignInFocus::Submit)),
    ]))
    .alignment(Alignment::Center);
    frame.render_widget(submit, chunks[8]);

    let social = Line::from(vec![
        Span::styled(marker(focus == SignInFocus::Google), theme.text_highlight()),
        Span::styled("[ Google ]", theme.menu_item(focus == SignInFocus::Google)),
        Span::raw("   "),
        Span::styled(marker(focus == SignInFocus::GitHub), theme.text_highlight()),
        Span::styled("[ GitHub ]", theme.menu_item(focus == SignInFocus::GitHub)),
    ]);
    frame.render_widget(Paragraph::new(social).alignment(Alignment::Center), chunks[9]);

    if state.sign_in.is_locked() {
        let remaining = state.sign_in.lockout_remaining_secs(state.now);
        let banner = Paragraph::new(format!(
            "⚠ Account locked. Try again in {}",
            format_mmss(remaining)
        ))
        .style(theme.danger())
        .alignment(Alignment::Center);
        frame.render_widget(banner, chunks[10]);
    } else if state.sign_in.failed_attempts() > 0 {
        let banner = Paragraph::new(format!(
            "{} failed attempt(s)",
            state.sign_in.failed_attempts()
        ))
        .style(theme.warning())
        .alignment(Alignment::Center);
        frame.render_widget(banner, chunks[10]);
    }
}

fn marker(focused: bool) -> &'static str {
    if focused {
        "▸ "
    } else {
        "  "
    }
}

fn render_input(
    frame: &mut Frame,
    area: Rect,
    theme: &Theme,
    label: &str,
    value: &str,
    error: Option<&str>,
    focused: bool,
) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(area);

    let cursor = if focused { "▏" } else { "" };
    let line = Line::from(vec![
        Span::styled(marker(focused), theme.text_highlight()),
        Span::styled(format!("{:<10}", label), theme.text_secondary()),
        Span::styled(
            format!("{}{}", value, cursor),
            theme.input(focused, error.is_some()),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), rows[0]);

    if let Some(error) = error {
        let error_line = Paragraph::new(format!("            {}", error)).style(theme.danger());
        frame.render_widget(error_line, rows[1]);
    }
}

fn render_strength_meter(frame: &mut Frame, area: Rect, theme: &Theme, password: &str) {
    if password.is_empty() {
        return;
    }
    let (strength, score) = password_strength(password);
    let filled = score as usize;
    let line = Line::from(vec![
        Span::raw("            "),
        Span::styled("■".repeat(filled), Style::default().fg(theme.bar_filled)),
        Span::styled("□".repeat(6 - filled), Style::default().fg(theme.bar_empty)),
        Span::styled(format!(" {}", strength.label()), theme.text_muted()),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}
