use {
    super::{common, theme::Theme},
    crate::state::CategoryAnimation,
    ratatui::text::{Line, Span},
    std::ops::Range,
    vitae_content::SkillCategory,
};

/// Preferred progress-bar track width in cells; shrinks on narrow
/// terminals. 40 cells keeps whole-percent levels exact on the track.
const TRACK_WIDTH: usize = 40;

fn card_height(category: &SkillCategory) -> usize {
    // Title, blank, then name/bar/blank per skill.
    2 + category.skills.len() * 3
}

/// Append one card per skill category.
pub fn extend(
    lines: &mut Vec<Line<'static>>,
    categories: &[SkillCategory],
    anims: &mut [CategoryAnimation],
    view: &Range<usize>,
    width: usize,
    theme: &Theme,
) {
    let track = TRACK_WIDTH.min(width.saturating_sub(6)).max(10);

    for (category, anim) in categories.iter().zip(anims.iter_mut()) {
        let start = lines.len();
        let height = card_height(category);
        if common::overlaps(view, start, height) {
            anim.card.trigger();
        }

        if !anim.card.is_armed() {
            lines.extend(std::iter::repeat_with(Line::default).take(height));
            continue;
        }

        let icon_style = common::entrance_style(theme.icon(category.color), &anim.card);
        let title_style = common::entrance_style(theme.category_title, &anim.card);
        lines.push(Line::from(vec![
            Span::raw("  "),
            Span::styled(format!("{} ", Theme::icon_glyph(category.icon)), icon_style),
            Span::styled(category.title.clone(), title_style),
        ]));
        lines.push(Line::default());

        for (skill, bar) in category.skills.iter().zip(anim.bars.iter_mut()) {
            // The bar arms on its own first visibility, giving each skill
            // its staggered fill.
            if common::overlaps(view, lines.len(), 2) {
                bar.trigger();
            }

            let name_style = common::entrance_style(theme.skill_name, &anim.card);
            lines.push(common::spread(
                Span::styled(format!("    {}", skill.name), name_style),
                Span::styled(format!("{}%  ", skill.level), theme.skill_percent),
                width,
            ));

            let mut bar_line = vec![Span::raw("    ")];
            bar_line.extend(common::bar_spans(
                track,
                skill.level,
                bar.progress(),
                theme.bar(skill.color),
                theme.bar_track,
            ));
            lines.push(Line::from(bar_line));
            lines.push(Line::default());
        }
    }
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::state::Animations,
        vitae_content::profile::skills_section,
    };

    fn rendered(lines: &[Line<'_>]) -> String {
        lines
            .iter()
            .map(|line| format!("{line}"))
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn cards_reserve_space_until_visible() {
        let section = skills_section();
        let mut anims = Animations::for_section(&section);
        let mut lines = Vec::new();

        extend(
            &mut lines,
            &section.categories,
            &mut anims.categories,
            &(500..520),
            80,
            &Theme::default(),
        );

        let expected: usize = section.categories.iter().map(card_height).sum();
        assert_eq!(lines.len(), expected);
        assert!(lines.iter().all(|line| line.width() == 0));
        assert!(anims.categories.iter().all(|c| !c.card.is_armed()));
    }

    #[test]
    fn visible_card_lists_each_skill_with_level() {
        let section = skills_section();
        let mut anims = Animations::for_section(&section);
        let mut lines = Vec::new();

        extend(
            &mut lines,
            &section.categories,
            &mut anims.categories,
            &(0..200),
            80,
            &Theme::default(),
        );

        let text = rendered(&lines);
        assert!(text.contains("Frontend Development"));
        assert!(text.contains("Flutter & Dart"));
        assert!(text.contains("95%"));
        assert!(text.contains("Backend & Database"));
    }

    #[test]
    fn settled_bar_fills_exactly_its_level() {
        let section = skills_section();
        let mut anims = Animations::for_section(&section);

        // Settle every animation.
        for anim in &mut anims.categories {
            anim.card.trigger();
            for bar in &mut anim.bars {
                bar.trigger();
            }
        }
        while anims.tick() {}

        let mut lines = Vec::new();
        extend(
            &mut lines,
            &section.categories,
            &mut anims.categories,
            &(0..200),
            80,
            &Theme::default(),
        );

        // Flutter & Dart at level 95 on a 40-cell track: exactly 38 cells.
        let text = rendered(&lines);
        let flutter_bar = "█".repeat(38) + &"░".repeat(2);
        assert!(text.contains(&flutter_bar), "expected settled 95% bar");
    }

    #[test]
    fn untriggered_bar_shows_an_empty_track() {
        let section = skills_section();
        let mut anims = Animations::for_section(&section);
        anims.categories[0].card.trigger();

        let mut lines = Vec::new();
        // Only the card title rows are visible; the bars are below the fold.
        extend(
            &mut lines,
            &section.categories,
            &mut anims.categories,
            &(0..2),
            80,
            &Theme::default(),
        );

        assert!(!anims.categories[0].bars[0].is_armed());
        let text = rendered(&lines);
        assert!(text.contains(&"░".repeat(40)));
        assert!(!text.contains('█'));
    }
}
