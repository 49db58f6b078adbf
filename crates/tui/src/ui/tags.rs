use {
    super::{common, theme::Theme},
    crate::reveal::Reveal,
    ratatui::text::{Line, Span},
    std::ops::Range,
};

const HEADING: &str = "Technologies I Work With";

fn badge_width(label: &str) -> usize {
    label.chars().count() + 2
}

/// Pack badge indices into rows that fit `max_width`, one-cell gaps.
fn pack_rows(labels: &[String], max_width: usize) -> Vec<Vec<usize>> {
    let mut rows: Vec<Vec<usize>> = Vec::new();
    let mut row: Vec<usize> = Vec::new();
    let mut row_width = 0;

    for (index, label) in labels.iter().enumerate() {
        let width = badge_width(label);
        let needed = if row.is_empty() { width } else { width + 1 };
        if !row.is_empty() && row_width + needed > max_width {
            rows.push(std::mem::take(&mut row));
            row_width = 0;
        }
        row_width += if row.is_empty() { width } else { width + 1 };
        row.push(index);
    }
    if !row.is_empty() {
        rows.push(row);
    }

    rows
}

/// Append the technology tag cloud: centered heading plus wrapped badge
/// rows. Badges arm row by row as they scroll into view.
pub fn extend(
    lines: &mut Vec<Line<'static>>,
    technologies: &[String],
    heading: &mut Reveal,
    badges: &mut [Reveal],
    view: &Range<usize>,
    width: usize,
    theme: &Theme,
) {
    let rows = pack_rows(technologies, width.saturating_sub(4).max(16));

    let start = lines.len();
    if common::overlaps(view, start, 3) {
        heading.trigger();
    }

    lines.push(Line::default());
    if heading.is_armed() {
        lines.push(common::centered(
            vec![Span::styled(
                HEADING.to_string(),
                common::entrance_style(theme.heading, heading),
            )],
            width,
        ));
    } else {
        lines.push(Line::default());
    }
    lines.push(Line::default());

    for row in rows {
        let row_line = lines.len();
        if common::overlaps(view, row_line, 1) {
            for index in &row {
                badges[*index].trigger();
            }
        }

        let mut spans: Vec<Span<'static>> = Vec::new();
        for (position, index) in row.iter().enumerate() {
            if position > 0 {
                spans.push(Span::raw(" "));
            }
            let reveal = &badges[*index];
            if reveal.is_armed() && reveal.progress() > 0.0 {
                let mut span = common::badge(&technologies[*index], theme);
                span.style = common::entrance_style(span.style, reveal);
                spans.push(span);
            } else {
                // Reserve the badge's cell so the row does not reflow.
                spans.push(Span::raw(" ".repeat(badge_width(&technologies[*index]))));
            }
        }
        lines.push(common::centered(spans, width));
    }

    lines.push(Line::default());
}
