use {
    super::theme::Theme,
    crate::reveal::Reveal,
    ratatui::{
        style::{Modifier, Style},
        text::{Line, Span},
    },
};

/// Glyphs for the skill progress bars.
const BAR_FILLED: &str = "█";
const BAR_TRACK: &str = "░";

/// Whether a block occupying `height` rows from `start` intersects the
/// visible row window.
pub fn overlaps(view: &std::ops::Range<usize>, start: usize, height: usize) -> bool {
    start < view.end && start + height > view.start
}

/// Style for a block mid-entrance: dimmed until its transition completes.
pub fn entrance_style(base: Style, reveal: &Reveal) -> Style {
    if reveal.is_complete() {
        base
    } else {
        base.add_modifier(Modifier::DIM)
    }
}

/// Center a line's spans within `width` by left-padding.
pub fn centered(spans: Vec<Span<'static>>, width: usize) -> Line<'static> {
    let content_width: usize = spans.iter().map(Span::width).sum();
    let pad = width.saturating_sub(content_width) / 2;
    let mut padded = Vec::with_capacity(spans.len() + 1);
    if pad > 0 {
        padded.push(Span::raw(" ".repeat(pad)));
    }
    padded.extend(spans);
    Line::from(padded)
}

/// Lay out `left` and `right` at the edges of `width`, filler in between.
pub fn spread(left: Span<'static>, right: Span<'static>, width: usize) -> Line<'static> {
    let used = left.width() + right.width();
    let gap = width.saturating_sub(used).max(1);
    Line::from(vec![left, Span::raw(" ".repeat(gap)), right])
}

/// Greedy word wrap. Words longer than `max_width` get a line of their own.
pub fn wrap_words(text: &str, max_width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current = word.to_string();
        } else if current.len() + 1 + word.len() <= max_width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current = word.to_string();
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }

    lines
}

/// Number of filled cells for a progress bar at the given eased progress.
///
/// At `progress == 1.0` this is exactly `level`% of the track (floor).
pub fn bar_fill(track: usize, level: u8, progress: f64) -> usize {
    let full = (track * usize::from(level)) as f64 / 100.0;
    (full * progress.clamp(0.0, 1.0)).floor() as usize
}

/// Build the spans of one skill progress bar.
pub fn bar_spans(
    track: usize,
    level: u8,
    progress: f64,
    filled_style: Style,
    track_style: Style,
) -> Vec<Span<'static>> {
    let filled = bar_fill(track, level, progress);
    vec![
        Span::styled(BAR_FILLED.repeat(filled), filled_style),
        Span::styled(BAR_TRACK.repeat(track - filled), track_style),
    ]
}

/// A padded technology badge.
pub fn badge(label: &str, theme: &Theme) -> Span<'static> {
    Span::styled(format!(" {label} "), theme.badge)
}

/// Render a key-hint help bar as `key description` pairs.
pub fn help_bar<'a>(hints: &[(&'a str, &'a str)], theme: &Theme) -> Line<'a> {
    let mut spans: Vec<Span<'a>> = Vec::new();
    for (index, (key, desc)) in hints.iter().enumerate() {
        if index > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(*key, theme.footer_key));
        spans.push(Span::styled(format!(" {desc}"), theme.footer_desc));
    }
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlaps_detects_any_intersection() {
        let view = 10..20;
        assert!(overlaps(&view, 5, 6)); // tail inside
        assert!(overlaps(&view, 19, 3)); // head inside
        assert!(overlaps(&view, 12, 2)); // fully inside
        assert!(overlaps(&view, 5, 30)); // spans the window
        assert!(!overlaps(&view, 0, 10)); // ends at window start
        assert!(!overlaps(&view, 20, 4)); // begins at window end
        assert!(!overlaps(&view, 3, 0)); // empty block
    }

    #[test]
    fn bar_fill_is_exact_at_completion() {
        // 95% of a 40-cell track is exactly 38 cells.
        assert_eq!(bar_fill(40, 95, 1.0), 38);
        assert_eq!(bar_fill(40, 100, 1.0), 40);
        assert_eq!(bar_fill(40, 0, 1.0), 0);
    }

    #[test]
    fn bar_fill_grows_with_progress() {
        let track = 40;
        let mut last = 0;
        for step in 0..=10 {
            let fill = bar_fill(track, 95, f64::from(step) / 10.0);
            assert!(fill >= last);
            assert!(fill <= 38);
            last = fill;
        }
    }

    #[test]
    fn bar_spans_cover_the_whole_track() {
        let spans = bar_spans(30, 60, 0.5, Style::default(), Style::default());
        let width: usize = spans.iter().map(Span::width).sum();
        assert_eq!(width, 30);
    }

    #[test]
    fn wrap_words_respects_width() {
        let lines = wrap_words("a comprehensive overview of my technical skills", 16);
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(line.len() <= 16, "{line:?} too wide");
        }
    }

    #[test]
    fn wrap_words_keeps_oversized_word() {
        let lines = wrap_words("tiny incomprehensibilities", 10);
        assert_eq!(lines, vec!["tiny", "incomprehensibilities"]);
    }

    #[test]
    fn centered_pads_to_the_middle() {
        let line = centered(vec![Span::raw("abcd")], 10);
        assert_eq!(line.width(), 7); // 3 pad + 4 content
    }

    #[test]
    fn spread_fills_between_edges() {
        let line = spread(Span::raw("left"), Span::raw("99%"), 20);
        assert_eq!(line.width(), 20);
    }
}
