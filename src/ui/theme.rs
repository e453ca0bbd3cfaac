//! Visual theme and color palette

use ratatui::style::{Color, Modifier, Style};

/// Portfolio color palette
pub struct Theme {
    // Primary branding colors
    pub primary: Color,
    pub accent: Color,
    pub surface: Color,

    // Status colors
    pub success: Color,
    pub warning: Color,
    pub danger: Color,
    pub info: Color,

    // UI element colors
    pub border: Color,
    pub border_focused: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,
    pub selection: Color,

    // Skill bar colors
    pub bar_filled: Color,
    pub bar_empty: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            // Primary branding
            primary: Color::Rgb(155, 220, 255), // #9BDCFF
            accent: Color::Rgb(185, 139, 255),  // #B98BFF
            surface: Color::Rgb(7, 16, 37),     // #071025

            // Status colors
            success: Color::Rgb(16, 185, 129), // #10B981 - Green
            warning: Color::Rgb(245, 158, 11), // #F59E0B - Amber
            danger: Color::Rgb(239, 68, 68),   // #EF4444 - Red
            info: Color::Rgb(96, 165, 250),    // #60A5FA - Blue

            // UI elements
            border: Color::Rgb(55, 65, 81),             // #374151
            border_focused: Color::Rgb(155, 220, 255),  // #9BDCFF
            text_primary: Color::Rgb(245, 245, 245),    // #F5F5F5
            text_secondary: Color::Rgb(189, 189, 189),  // #BDBDBD
            text_muted: Color::Rgb(117, 117, 117),      // #757575
            selection: Color::Rgb(40, 52, 80),          // #283450

            // Skill bars
            bar_filled: Color::Rgb(185, 139, 255),
            bar_empty: Color::Rgb(55, 65, 81),
        }
    }
}

impl Theme {
    /// Get default text style
    pub fn text(&self) -> Style {
        Style::default().fg(self.text_primary)
    }

    /// Get secondary text style
    pub fn text_secondary(&self) -> Style {
        Style::default().fg(self.text_secondary)
    }

    /// Get muted text style
    pub fn text_muted(&self) -> Style {
        Style::default().fg(self.text_muted)
    }

    /// Get highlighted text style
    pub fn text_highlight(&self) -> Style {
        Style::default()
            .fg(self.primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Get title style
    pub fn title(&self) -> Style {
        Style::default()
            .fg(self.primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Get accent style
    pub fn accent(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    /// Get border style
    pub fn border(&self) -> Style {
        Style::default().fg(self.border)
    }

    /// Get focused border style
    pub fn border_focused(&self) -> Style {
        Style::default().fg(self.border_focused)
    }

    /// Get success style
    pub fn success(&self) -> Style {
        Style::default().fg(self.success)
    }

    /// Get warning style
    pub fn warning(&self) -> Style {
        Style::default().fg(self.warning)
    }

    /// Get danger style
    pub fn danger(&self) -> Style {
        Style::default()
            .fg(self.danger)
            .add_modifier(Modifier::BOLD)
    }

    /// Get info style
    pub fn info(&self) -> Style {
        Style::default().fg(self.info)
    }

    /// Get menu item style
    pub fn menu_item(&self, selected: bool) -> Style {
        if selected {
            Style::default()
                .bg(self.selection)
                .fg(self.primary)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.text_primary)
        }
    }

    /// Get input field style
    pub fn input(&self, focused: bool, has_error: bool) -> Style {
        let base = if focused {
            Style::default().fg(self.text_primary).bg(self.selection)
        } else {
            Style::default().fg(self.text_secondary)
        };
        if has_error {
            base.fg(self.danger)
        } else {
            base
        }
    }

    /// Create a high-contrast theme variant
    pub fn high_contrast() -> Self {
        Self {
            text_primary: Color::White,
            text_secondary: Color::White,
            text_muted: Color::Gray,
            border: Color::White,
            border_focused: Color::Yellow,
            ..Self::default()
        }
    }
}
