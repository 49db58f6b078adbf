use {
    crate::{
        counter::{Counter, DEFAULT_DURATION},
        reveal::Reveal,
    },
    std::time::Duration,
    vitae_content::SkillsSection,
};

/// Entrance timing for the section header and the tag-cloud heading.
const HEADER_DURATION: Duration = Duration::from_millis(600);
/// Entrance timing for one category card; staggered per category index.
const CARD_DURATION: Duration = Duration::from_millis(600);
const CARD_STAGGER: Duration = Duration::from_millis(100);
/// Fill timing for one skill bar; staggered per category and skill index.
const BAR_DURATION: Duration = Duration::from_millis(1500);
const BAR_CATEGORY_STAGGER: Duration = Duration::from_millis(100);
const BAR_SKILL_STAGGER: Duration = Duration::from_millis(200);
/// Entrance timing for one technology badge; staggered per badge index.
const BADGE_DURATION: Duration = Duration::from_millis(400);
const BADGE_STAGGER: Duration = Duration::from_millis(50);
/// Entrance timing for one statistic; staggered per stat index.
const STAT_DURATION: Duration = Duration::from_millis(500);
const STAT_STAGGER: Duration = Duration::from_millis(100);

/// Animation state for one category card and its skill bars.
#[derive(Debug)]
pub struct CategoryAnimation {
    pub card: Reveal,
    pub bars: Vec<Reveal>,
}

/// Animation state for one statistic: its entrance plus the counting-up
/// number. Stats whose display string has no numeric prefix render as-is
/// and carry no counter.
#[derive(Debug)]
pub struct StatAnimation {
    pub reveal: Reveal,
    pub counter: Option<Counter>,
}

/// All per-block animation state.
#[derive(Debug)]
pub struct Animations {
    pub header: Reveal,
    pub categories: Vec<CategoryAnimation>,
    pub tags_heading: Reveal,
    pub badges: Vec<Reveal>,
    pub stats: Vec<StatAnimation>,
}

impl Animations {
    pub fn for_section(section: &SkillsSection) -> Self {
        let categories = section
            .categories
            .iter()
            .enumerate()
            .map(|(i, category)| CategoryAnimation {
                card: Reveal::new(CARD_STAGGER * i as u32, CARD_DURATION),
                bars: (0..category.skills.len())
                    .map(|j| {
                        Reveal::new(
                            BAR_CATEGORY_STAGGER * i as u32 + BAR_SKILL_STAGGER * j as u32,
                            BAR_DURATION,
                        )
                    })
                    .collect(),
            })
            .collect();

        let badges = (0..section.technologies.len())
            .map(|k| Reveal::new(BADGE_STAGGER * k as u32, BADGE_DURATION))
            .collect();

        let stats = section
            .stats
            .iter()
            .enumerate()
            .map(|(k, stat)| StatAnimation {
                reveal: Reveal::new(STAT_STAGGER * k as u32, STAT_DURATION),
                counter: stat
                    .numeric_parts()
                    .0
                    .map(|target| Counter::new(target, DEFAULT_DURATION)),
            })
            .collect();

        Self {
            header: Reveal::new(Duration::ZERO, HEADER_DURATION),
            categories,
            tags_heading: Reveal::new(Duration::ZERO, HEADER_DURATION),
            badges,
            stats,
        }
    }

    /// Advance every armed transition and every visible counter by one
    /// tick. Returns `true` if anything moved.
    pub fn tick(&mut self) -> bool {
        let mut moved = false;

        moved |= self.header.tick();
        for category in &mut self.categories {
            moved |= category.card.tick();
            for bar in &mut category.bars {
                moved |= bar.tick();
            }
        }
        moved |= self.tags_heading.tick();
        for badge in &mut self.badges {
            moved |= badge.tick();
        }
        for stat in &mut self.stats {
            moved |= stat.reveal.tick();
            // The number only counts while its stat is on screen.
            if stat.reveal.is_armed()
                && let Some(counter) = stat.counter.as_mut()
            {
                moved |= counter.tick();
            }
        }

        moved
    }

    /// Rewind every transition and counter, as if the section had just
    /// mounted. Running counters are cancelled and start over from 0.
    pub fn replay(&mut self) {
        self.header.reset();
        for category in &mut self.categories {
            category.card.reset();
            for bar in &mut category.bars {
                bar.reset();
            }
        }
        self.tags_heading.reset();
        for badge in &mut self.badges {
            badge.reset();
        }
        for stat in &mut self.stats {
            stat.reveal.reset();
            if let Some(counter) = stat.counter.as_mut() {
                counter.restart(counter.target(), DEFAULT_DURATION);
            }
        }
    }

    /// Whether any transition or counter still has work to do on future
    /// ticks. Blocks that were never scrolled into view do not count.
    pub fn is_active(&self) -> bool {
        let reveal_active = |reveal: &Reveal| reveal.is_armed() && !reveal.is_complete();

        reveal_active(&self.header)
            || reveal_active(&self.tags_heading)
            || self
                .categories
                .iter()
                .any(|c| reveal_active(&c.card) || c.bars.iter().any(reveal_active))
            || self.badges.iter().any(reveal_active)
            || self.stats.iter().any(|s| {
                reveal_active(&s.reveal)
                    || (s.reveal.is_armed() && s.counter.as_ref().is_some_and(Counter::is_active))
            })
    }
}

/// Full application state.
pub struct AppState {
    pub section: SkillsSection,
    pub animations: Animations,
    /// Scroll offset from the top of the section, in rows.
    pub scroll_offset: usize,
    /// Content height measured at the last draw.
    pub content_height: usize,
    /// Viewport height measured at the last draw.
    pub viewport_height: usize,
    pub dirty: bool,
}

impl AppState {
    pub fn new(section: SkillsSection) -> Self {
        let animations = Animations::for_section(&section);
        Self {
            section,
            animations,
            scroll_offset: 0,
            content_height: 0,
            viewport_height: 0,
            dirty: true,
        }
    }

    /// Largest valid scroll offset given the last measured geometry.
    pub fn max_scroll(&self) -> usize {
        self.content_height.saturating_sub(self.viewport_height)
    }

    pub fn scroll_down(&mut self, amount: usize) {
        let clamped = self
            .scroll_offset
            .saturating_add(amount)
            .min(self.max_scroll());
        if clamped != self.scroll_offset {
            self.scroll_offset = clamped;
            self.dirty = true;
        }
    }

    pub fn scroll_up(&mut self, amount: usize) {
        let clamped = self.scroll_offset.saturating_sub(amount);
        if clamped != self.scroll_offset {
            self.scroll_offset = clamped;
            self.dirty = true;
        }
    }

    pub fn scroll_to_top(&mut self) {
        self.scroll_offset = 0;
        self.dirty = true;
    }

    pub fn scroll_to_bottom(&mut self) {
        self.scroll_offset = self.max_scroll();
        self.dirty = true;
    }

    /// Start all the entrances over, as if the section had just mounted.
    pub fn replay(&mut self) {
        self.animations.replay();
        self.dirty = true;
    }

    /// One animation tick. Returns `true` if anything changed on screen.
    pub fn advance_animations(&mut self) -> bool {
        let moved = self.animations.tick();
        if moved {
            self.dirty = true;
        }
        moved
    }
}

#[cfg(test)]
mod tests {
    use {super::*, vitae_content::profile::skills_section};

    fn state() -> AppState {
        AppState::new(skills_section())
    }

    #[test]
    fn animation_tree_matches_section_shape() {
        let state = state();
        assert_eq!(
            state.animations.categories.len(),
            state.section.categories.len()
        );
        for (anim, category) in state
            .animations
            .categories
            .iter()
            .zip(&state.section.categories)
        {
            assert_eq!(anim.bars.len(), category.skills.len());
        }
        assert_eq!(
            state.animations.badges.len(),
            state.section.technologies.len()
        );
        assert_eq!(state.animations.stats.len(), state.section.stats.len());
    }

    #[test]
    fn every_stat_gets_a_counter() {
        let state = state();
        assert!(state.animations.stats.iter().all(|s| s.counter.is_some()));
    }

    #[test]
    fn untriggered_animations_are_idle() {
        let mut state = state();
        assert!(!state.animations.is_active());
        assert!(!state.advance_animations());
    }

    #[test]
    fn triggered_header_animates_to_completion() {
        let mut state = state();
        state.animations.header.trigger();
        assert!(state.animations.is_active());

        let mut ticks = 0;
        while state.animations.is_active() {
            state.advance_animations();
            ticks += 1;
            assert!(ticks < 10_000, "header animation never settled");
        }
        assert!(state.animations.header.is_complete());
    }

    #[test]
    fn armed_stat_counts_to_its_target() {
        let mut state = state();
        state.animations.stats[0].reveal.trigger();

        while state.animations.is_active() {
            state.advance_animations();
        }

        let counter = match state.animations.stats[0].counter.as_ref() {
            Some(counter) => counter,
            None => panic!("stat 0 should carry a counter"),
        };
        assert_eq!(counter.value(), 15);
        assert!(!counter.is_active());
    }

    #[test]
    fn unarmed_stat_counter_never_runs() {
        let mut state = state();
        state.animations.header.trigger();
        while state.animations.is_active() {
            state.advance_animations();
        }

        for stat in &state.animations.stats {
            if let Some(counter) = stat.counter.as_ref() {
                assert_eq!(counter.value(), 0);
            }
        }
    }

    #[test]
    fn replay_rearms_everything() {
        let mut state = state();
        state.animations.header.trigger();
        while state.animations.is_active() {
            state.advance_animations();
        }

        state.replay();
        assert!(!state.animations.header.is_armed());
        assert!(state.dirty);
    }

    #[test]
    fn replay_cancels_a_mid_run_counter() {
        let mut state = state();
        state.animations.stats[0].reveal.trigger();
        for _ in 0..30 {
            state.advance_animations();
        }
        let mid = match state.animations.stats[0].counter.as_ref() {
            Some(counter) => counter.value(),
            None => panic!("stat 0 should carry a counter"),
        };
        assert!(mid > 0);

        state.replay();
        let counter = match state.animations.stats[0].counter.as_ref() {
            Some(counter) => counter,
            None => panic!("stat 0 should carry a counter"),
        };
        // The old sequence is gone: the count restarts from 0 and, with
        // its stat disarmed, does not advance until re-triggered.
        assert_eq!(counter.value(), 0);
        state.advance_animations();
        let counter = match state.animations.stats[0].counter.as_ref() {
            Some(counter) => counter,
            None => panic!("stat 0 should carry a counter"),
        };
        assert_eq!(counter.value(), 0);
    }

    #[test]
    fn scroll_clamps_to_content() {
        let mut state = state();
        state.content_height = 50;
        state.viewport_height = 20;

        state.scroll_down(100);
        assert_eq!(state.scroll_offset, 30);

        state.scroll_up(100);
        assert_eq!(state.scroll_offset, 0);

        state.scroll_to_bottom();
        assert_eq!(state.scroll_offset, 30);

        state.scroll_to_top();
        assert_eq!(state.scroll_offset, 0);
    }
}
