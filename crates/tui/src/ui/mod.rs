pub mod common;
pub mod footer;
pub mod header;
pub mod skills;
pub mod stats;
pub mod tags;
pub mod theme;

use {
    crate::state::AppState,
    ratatui::{
        Frame,
        layout::{Constraint, Layout},
        text::Line,
        widgets::Paragraph,
    },
    theme::Theme,
};

/// Draw the entire UI: the scrollable section plus the footer.
///
/// Drawing also performs visibility detection: a block's entrance is armed
/// the first time its rows intersect the viewport, so the scroll view is
/// the single owner of "did this element enter view".
pub fn draw(frame: &mut Frame, state: &mut AppState, theme: &Theme) {
    let area = frame.area();

    let vertical = Layout::vertical([
        Constraint::Min(1),    // scrollable section
        Constraint::Length(1), // footer
    ])
    .split(area);
    let content = vertical[0];

    let width = content.width as usize;
    let height = content.height as usize;
    let view = state.scroll_offset..state.scroll_offset + height;

    let mut lines: Vec<Line<'static>> = Vec::new();
    header::extend(
        &mut lines,
        &state.section,
        &mut state.animations.header,
        &view,
        width,
        theme,
    );
    skills::extend(
        &mut lines,
        &state.section.categories,
        &mut state.animations.categories,
        &view,
        width,
        theme,
    );
    tags::extend(
        &mut lines,
        &state.section.technologies,
        &mut state.animations.tags_heading,
        &mut state.animations.badges,
        &view,
        width,
        theme,
    );
    stats::extend(
        &mut lines,
        &state.section.stats,
        &mut state.animations.stats,
        &view,
        width,
        theme,
    );

    state.content_height = lines.len();
    state.viewport_height = height;
    if state.scroll_offset > state.max_scroll() {
        state.scroll_offset = state.max_scroll();
    }

    let visible: Vec<Line<'static>> = lines
        .into_iter()
        .skip(state.scroll_offset)
        .take(height)
        .collect();
    frame.render_widget(Paragraph::new(visible), content);

    footer::draw(frame, vertical[1], theme);
}
