use {
    super::{common, theme::Theme},
    crate::reveal::Reveal,
    ratatui::text::{Line, Span},
    std::ops::Range,
    vitae_content::SkillsSection,
};

/// Widest the subtitle paragraph is allowed to grow.
const SUBTITLE_MAX_WIDTH: usize = 72;

/// Append the section header: centered title plus wrapped subtitle.
pub fn extend(
    lines: &mut Vec<Line<'static>>,
    section: &SkillsSection,
    reveal: &mut Reveal,
    view: &Range<usize>,
    width: usize,
    theme: &Theme,
) {
    let subtitle_width = SUBTITLE_MAX_WIDTH.min(width.saturating_sub(4)).max(16);
    let subtitle_lines = common::wrap_words(&section.subtitle, subtitle_width);

    let start = lines.len();
    let height = subtitle_lines.len() + 4;
    if common::overlaps(view, start, height) {
        reveal.trigger();
    }

    if !reveal.is_armed() {
        lines.extend(std::iter::repeat_with(Line::default).take(height));
        return;
    }

    let title_style = common::entrance_style(theme.section_title, reveal);
    let subtitle_style = common::entrance_style(theme.subtitle, reveal);

    lines.push(Line::default());
    lines.push(common::centered(
        vec![Span::styled(section.title.clone(), title_style)],
        width,
    ));
    lines.push(Line::default());
    for text in subtitle_lines {
        lines.push(common::centered(
            vec![Span::styled(text, subtitle_style)],
            width,
        ));
    }
    lines.push(Line::default());
}
