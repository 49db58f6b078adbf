use {
    super::{common, theme::Theme},
    crate::state::StatAnimation,
    ratatui::text::{Line, Span},
    std::ops::Range,
    vitae_content::Stat,
};

/// Horizontal gap between neighbouring stat columns.
const COLUMN_GAP: usize = 4;

/// Column width for one stat: wide enough for its settled number and the
/// widest of its label lines.
fn column_width(stat: &Stat) -> usize {
    let number = stat.number.chars().count();
    let label = stat
        .label_lines()
        .map(|line| line.chars().count())
        .max()
        .unwrap_or(0);
    number.max(label)
}

/// Group stat indices into rows of columns that fit `max_width`.
fn pack_chunks(stats: &[Stat], max_width: usize) -> Vec<Vec<usize>> {
    let mut chunks: Vec<Vec<usize>> = Vec::new();
    let mut chunk: Vec<usize> = Vec::new();
    let mut chunk_width = 0;

    for (index, stat) in stats.iter().enumerate() {
        let width = column_width(stat);
        let needed = if chunk.is_empty() {
            width
        } else {
            width + COLUMN_GAP
        };
        if !chunk.is_empty() && chunk_width + needed > max_width {
            chunks.push(std::mem::take(&mut chunk));
            chunk_width = 0;
        }
        chunk_width += if chunk.is_empty() { width } else { width + COLUMN_GAP };
        chunk.push(index);
    }
    if !chunk.is_empty() {
        chunks.push(chunk);
    }

    chunks
}

fn center_in(text: &str, width: usize) -> String {
    let len = text.chars().count();
    let pad = width.saturating_sub(len);
    let left = pad / 2;
    format!(
        "{}{}{}",
        " ".repeat(left),
        text,
        " ".repeat(pad - left)
    )
}

/// The display string for a stat's number cell: the counting value with
/// its qualifier suffix, or the literal string when nothing counts.
fn number_text(stat: &Stat, anim: &StatAnimation) -> String {
    let (value, suffix) = stat.numeric_parts();
    match (&anim.counter, value) {
        (Some(counter), Some(_)) => format!("{}{suffix}", counter.value()),
        _ => stat.number.clone(),
    }
}

/// Append the achievement statistics, side by side in as many rows as the
/// terminal width requires. Numbers count up once their row is on screen.
pub fn extend(
    lines: &mut Vec<Line<'static>>,
    stats: &[Stat],
    anims: &mut [StatAnimation],
    view: &Range<usize>,
    width: usize,
    theme: &Theme,
) {
    let chunks = pack_chunks(stats, width.saturating_sub(2).max(20));

    lines.push(Line::default());

    for chunk in chunks {
        let label_rows = chunk
            .iter()
            .map(|i| stats[*i].label_lines().count())
            .max()
            .unwrap_or(0);
        let start = lines.len();
        let height = 1 + label_rows + 1;
        if common::overlaps(view, start, height) {
            for index in &chunk {
                anims[*index].reveal.trigger();
            }
        }

        // Number row.
        let mut number_spans: Vec<Span<'static>> = Vec::new();
        for (position, index) in chunk.iter().enumerate() {
            if position > 0 {
                number_spans.push(Span::raw(" ".repeat(COLUMN_GAP)));
            }
            let stat = &stats[*index];
            let anim = &anims[*index];
            let cell = column_width(stat);
            if anim.reveal.is_armed() {
                number_spans.push(Span::styled(
                    center_in(&number_text(stat, anim), cell),
                    common::entrance_style(theme.stat_number, &anim.reveal),
                ));
            } else {
                number_spans.push(Span::raw(" ".repeat(cell)));
            }
        }
        lines.push(common::centered(number_spans, width));

        // Label rows.
        for row in 0..label_rows {
            let mut label_spans: Vec<Span<'static>> = Vec::new();
            for (position, index) in chunk.iter().enumerate() {
                if position > 0 {
                    label_spans.push(Span::raw(" ".repeat(COLUMN_GAP)));
                }
                let stat = &stats[*index];
                let anim = &anims[*index];
                let cell = column_width(stat);
                let text = stat.label_lines().nth(row).unwrap_or("");
                if anim.reveal.is_armed() {
                    label_spans.push(Span::styled(
                        center_in(text, cell),
                        common::entrance_style(theme.stat_label, &anim.reveal),
                    ));
                } else {
                    label_spans.push(Span::raw(" ".repeat(cell)));
                }
            }
            lines.push(common::centered(label_spans, width));
        }

        lines.push(Line::default());
    }
}
