use {
    super::{common, theme::Theme},
    ratatui::{Frame, layout::Rect, widgets::Paragraph},
};

/// Render the key-hint footer.
pub fn draw(frame: &mut Frame, area: Rect, theme: &Theme) {
    let hints = [
        ("j/k", "Scroll"),
        ("g/G", "Top/Bottom"),
        ("r", "Replay"),
        ("q", "Quit"),
    ];
    let line = common::help_bar(&hints, theme);
    frame.render_widget(Paragraph::new(line), area);
}
