use {
    ratatui::style::{Color, Modifier, Style},
    vitae_content::{ColorToken, Icon},
};

/// Color theme for the portfolio view.
pub struct Theme {
    pub section_title: Style,
    pub subtitle: Style,
    pub category_title: Style,
    pub icon_primary: Style,
    pub icon_accent: Style,
    pub skill_name: Style,
    pub skill_percent: Style,
    pub bar_primary: Style,
    pub bar_accent: Style,
    pub bar_track: Style,
    pub heading: Style,
    pub badge: Style,
    pub stat_number: Style,
    pub stat_label: Style,
    pub footer_key: Style,
    pub footer_desc: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            section_title: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            subtitle: Style::default().fg(Color::Gray),
            category_title: Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            icon_primary: Style::default().fg(Color::Cyan),
            icon_accent: Style::default().fg(Color::Magenta),
            skill_name: Style::default().fg(Color::White),
            skill_percent: Style::default().fg(Color::DarkGray),
            bar_primary: Style::default().fg(Color::Cyan),
            bar_accent: Style::default().fg(Color::Magenta),
            bar_track: Style::default().fg(Color::DarkGray),
            heading: Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            badge: Style::default().bg(Color::DarkGray).fg(Color::White),
            stat_number: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            stat_label: Style::default().fg(Color::Gray),
            footer_key: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            footer_desc: Style::default().fg(Color::DarkGray),
        }
    }
}

impl Theme {
    /// Resolve an abstract color token to the bar fill style.
    pub fn bar(&self, token: ColorToken) -> Style {
        match token {
            ColorToken::Primary => self.bar_primary,
            ColorToken::Accent => self.bar_accent,
        }
    }

    /// Resolve an abstract color token to the icon style.
    pub fn icon(&self, token: ColorToken) -> Style {
        match token {
            ColorToken::Primary => self.icon_primary,
            ColorToken::Accent => self.icon_accent,
        }
    }

    /// Terminal glyph for a category icon.
    pub fn icon_glyph(icon: Icon) -> &'static str {
        match icon {
            Icon::Code => "</>",
            Icon::Smartphone => "[o]",
            Icon::GitBranch => "-<",
            Icon::Database => "[=]",
        }
    }
}
