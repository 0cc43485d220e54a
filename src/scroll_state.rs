//! Scroll-reactive page state.
//!
//! Everything here is a pure function of the current state and a snapshot of
//! the page geometry. The landing page holds a [`ScrollUIState`] through
//! `use_reducer`, feeds it [`ScrollAction`]s from the scroll listener and
//! renders classes straight from it.

use std::collections::HashSet;
use std::rc::Rc;

use yew::functional::Reducible;

use crate::config::{
    UiConfig, CARD_REVEAL_MARGIN, CARD_REVEAL_THRESHOLD, SECTION_REVEAL_MARGIN,
    STAT_REVEAL_THRESHOLD,
};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct NavState {
    pub is_scrolled: bool,
    pub is_menu_open: bool,
    pub active_section_id: Option<String>,
}

impl NavState {
    pub fn is_active(&self, section_id: &str) -> bool {
        self.active_section_id.as_deref() == Some(section_id)
    }
}

/// Layout box of a `section[id]`, read fresh on every tick.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionGeometry {
    pub id: String,
    pub top_offset: f64,
    pub height: f64,
}

impl SectionGeometry {
    pub fn new(id: impl Into<String>, top_offset: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            top_offset,
            height,
        }
    }

    fn contains(&self, position: f64) -> bool {
        position >= self.top_offset && position < self.top_offset + self.height
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RevealKind {
    /// Section headers and about content.
    Section,
    /// Service cards, project items, feature items, info cards.
    Card,
    /// Stat numbers; revealing one starts its counter.
    Stat,
}

impl RevealKind {
    pub fn from_attr(value: &str) -> Option<Self> {
        match value {
            "section" => Some(RevealKind::Section),
            "card" => Some(RevealKind::Card),
            "stat" => Some(RevealKind::Stat),
            _ => None,
        }
    }

    pub fn as_attr(self) -> &'static str {
        match self {
            RevealKind::Section => "section",
            RevealKind::Card => "card",
            RevealKind::Stat => "stat",
        }
    }
}

/// Viewport-relative geometry of one reveal target.
#[derive(Clone, Debug, PartialEq)]
pub struct RevealProbe {
    pub key: String,
    pub kind: RevealKind,
    pub top: f64,
    pub height: f64,
}

impl RevealProbe {
    pub fn is_in_view(&self, viewport_height: f64) -> bool {
        match self.kind {
            RevealKind::Section => self.top < viewport_height - SECTION_REVEAL_MARGIN,
            RevealKind::Card => {
                self.top + self.height * CARD_REVEAL_THRESHOLD < viewport_height - CARD_REVEAL_MARGIN
            }
            RevealKind::Stat => self.top + self.height * STAT_REVEAL_THRESHOLD < viewport_height,
        }
    }
}

/// Geometry read once the scroll debounce settles.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LayoutSnapshot {
    pub scroll_y: f64,
    pub viewport_height: f64,
    pub sections: Vec<SectionGeometry>,
    pub probes: Vec<RevealProbe>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum ScrollAction {
    /// Raw scroll event; drives the navbar chrome and the hero parallax.
    Scrolled { scroll_y: f64, hero_height: Option<f64> },
    /// Debounced geometry pass; drives the active link and reveals.
    Layout(LayoutSnapshot),
    ToggleMenu,
    NavigateTo {
        target_id: String,
        sections: Vec<SectionGeometry>,
    },
}

#[derive(Clone, Debug, PartialEq)]
pub struct ScrollUIState {
    pub config: UiConfig,
    pub nav: NavState,
    pub back_to_top_visible: bool,
    pub parallax_y: f64,
    revealed: HashSet<String>,
}

impl Default for ScrollUIState {
    fn default() -> Self {
        Self::with_config(UiConfig::default())
    }
}

impl ScrollUIState {
    pub fn with_config(config: UiConfig) -> Self {
        Self {
            config,
            nav: NavState::default(),
            back_to_top_visible: false,
            parallax_y: 0.0,
            revealed: HashSet::new(),
        }
    }

    pub fn update_navbar_chrome(&mut self, scroll_y: f64) {
        self.nav.is_scrolled = scroll_y > self.config.navbar_scrolled_after;
        self.back_to_top_visible = scroll_y > self.config.back_to_top_after;
    }

    /// First section containing `scroll_y + bias` wins. With no match the
    /// previous section stays active.
    pub fn update_active_section(&mut self, scroll_y: f64, sections: &[SectionGeometry]) {
        let position = scroll_y + self.config.section_activation_bias;
        if let Some(section) = sections.iter().find(|s| s.contains(position)) {
            self.nav.active_section_id = Some(section.id.clone());
        }
    }

    /// Marks every probe currently in view as revealed and returns how many
    /// were newly revealed. Revealed targets are never hidden again.
    pub fn reveal_on_scroll(&mut self, viewport_height: f64, probes: &[RevealProbe]) -> usize {
        let mut newly = 0;
        for probe in probes {
            if !self.revealed.contains(&probe.key) && probe.is_in_view(viewport_height) {
                self.revealed.insert(probe.key.clone());
                newly += 1;
            }
        }
        newly
    }

    /// Keeps the last offset once the hero has scrolled out.
    pub fn update_parallax(&mut self, scroll_y: f64, hero_height: Option<f64>) {
        if let Some(offset) = parallax_offset(scroll_y, hero_height, self.config.parallax_speed) {
            self.parallax_y = offset;
        }
    }

    /// Flips the menu and returns whether page scroll is now locked.
    pub fn toggle_mobile_menu(&mut self) -> bool {
        self.nav.is_menu_open = !self.nav.is_menu_open;
        self.scroll_locked()
    }

    /// Resolves `target_id` to a scroll destination and closes the menu.
    /// Unknown ids change nothing.
    pub fn smooth_scroll_to(&mut self, target_id: &str, sections: &[SectionGeometry]) -> Option<f64> {
        let top = resolve_scroll_target(target_id, sections, self.config.navbar_height)?;
        self.nav.is_menu_open = false;
        Some(top)
    }

    pub fn scroll_locked(&self) -> bool {
        self.nav.is_menu_open
    }

    pub fn is_revealed(&self, key: &str) -> bool {
        self.revealed.contains(key)
    }

    pub fn apply(&mut self, action: ScrollAction) {
        match action {
            ScrollAction::Scrolled { scroll_y, hero_height } => {
                self.update_navbar_chrome(scroll_y);
                self.update_parallax(scroll_y, hero_height);
            }
            ScrollAction::Layout(snapshot) => {
                self.update_active_section(snapshot.scroll_y, &snapshot.sections);
                let newly = self.reveal_on_scroll(snapshot.viewport_height, &snapshot.probes);
                if newly > 0 {
                    log::debug!("revealed {} element(s)", newly);
                }
            }
            ScrollAction::ToggleMenu => {
                self.toggle_mobile_menu();
            }
            ScrollAction::NavigateTo { target_id, sections } => {
                self.smooth_scroll_to(&target_id, &sections);
            }
        }
    }
}

impl Reducible for ScrollUIState {
    type Action = ScrollAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

/// Destination scroll offset for a section, accounting for the fixed navbar.
pub fn resolve_scroll_target(
    target_id: &str,
    sections: &[SectionGeometry],
    navbar_height: f64,
) -> Option<f64> {
    let id = target_id.trim_start_matches('#');
    sections
        .iter()
        .find(|s| s.id == id)
        .map(|s| s.top_offset - navbar_height)
}

pub fn parallax_offset(scroll_y: f64, hero_height: Option<f64>, speed: f64) -> Option<f64> {
    match hero_height {
        Some(height) if scroll_y < height => Some(scroll_y * speed),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn sections() -> Vec<SectionGeometry> {
        vec![
            SectionGeometry::new("a", 0.0, 200.0),
            SectionGeometry::new("b", 200.0, 300.0),
        ]
    }

    fn probe(key: &str, kind: RevealKind, top: f64) -> RevealProbe {
        RevealProbe {
            key: key.to_string(),
            kind,
            top,
            height: 100.0,
        }
    }

    #[test]
    fn navbar_thresholds_are_exclusive() {
        let mut state = ScrollUIState::default();
        state.update_navbar_chrome(100.0);
        assert!(!state.nav.is_scrolled);
        state.update_navbar_chrome(100.5);
        assert!(state.nav.is_scrolled);
        assert!(!state.back_to_top_visible);
        state.update_navbar_chrome(500.0);
        assert!(!state.back_to_top_visible);
        state.update_navbar_chrome(501.0);
        assert!(state.back_to_top_visible);
    }

    #[test]
    fn active_section_uses_adjusted_position() {
        let mut state = ScrollUIState::default();
        state.update_active_section(150.0, &sections());
        assert_eq!(state.nav.active_section_id.as_deref(), Some("b"));
        state.update_active_section(0.0, &sections());
        assert_eq!(state.nav.active_section_id.as_deref(), Some("a"));
    }

    #[test]
    fn active_section_is_retained_when_nothing_matches() {
        let mut state = ScrollUIState::default();
        state.update_active_section(150.0, &sections());
        state.update_active_section(5000.0, &sections());
        assert_eq!(state.nav.active_section_id.as_deref(), Some("b"));
    }

    #[test]
    fn overlapping_sections_pick_the_first() {
        let overlapping = vec![
            SectionGeometry::new("first", 0.0, 400.0),
            SectionGeometry::new("second", 100.0, 400.0),
        ];
        let mut state = ScrollUIState::default();
        state.update_active_section(50.0, &overlapping);
        assert!(state.nav.is_active("first"));
    }

    #[test]
    fn active_section_update_is_idempotent() {
        let mut once = ScrollUIState::default();
        once.update_active_section(150.0, &sections());
        let mut twice = once.clone();
        twice.update_active_section(150.0, &sections());
        assert_eq!(once, twice);
    }

    #[test]
    fn reveal_is_monotonic() {
        let mut state = ScrollUIState::default();
        let newly = state.reveal_on_scroll(800.0, &[probe("about", RevealKind::Section, 600.0)]);
        assert_eq!(newly, 1);
        assert!(state.is_revealed("about"));

        // Scrolled back far below the fold.
        let newly = state.reveal_on_scroll(800.0, &[probe("about", RevealKind::Section, 2000.0)]);
        assert_eq!(newly, 0);
        assert!(state.is_revealed("about"));
    }

    #[test]
    fn reveal_margins_per_kind() {
        let mut state = ScrollUIState::default();
        state.reveal_on_scroll(
            800.0,
            &[
                probe("header", RevealKind::Section, 650.0),
                probe("card", RevealKind::Card, 690.0),
                probe("stat", RevealKind::Stat, 749.0),
            ],
        );
        assert!(!state.is_revealed("header"));
        assert!(!state.is_revealed("card"));
        assert!(state.is_revealed("stat"));

        state.reveal_on_scroll(
            800.0,
            &[
                probe("header", RevealKind::Section, 649.0),
                probe("card", RevealKind::Card, 689.0),
            ],
        );
        assert!(state.is_revealed("header"));
        assert!(state.is_revealed("card"));
    }

    #[test]
    fn menu_toggle_twice_restores_lock() {
        let mut state = ScrollUIState::default();
        assert!(state.toggle_mobile_menu());
        assert!(!state.toggle_mobile_menu());
        assert!(state.toggle_mobile_menu());
        assert!(state.nav.is_menu_open);
    }

    #[test]
    fn navigation_closes_menu_and_offsets_navbar() {
        let mut state = ScrollUIState::default();
        state.toggle_mobile_menu();
        let top = state.smooth_scroll_to("#b", &sections());
        assert_eq!(top, Some(130.0));
        assert!(!state.nav.is_menu_open);
        assert!(!state.scroll_locked());
    }

    #[test]
    fn unknown_target_is_a_quiet_noop() {
        let mut state = ScrollUIState::default();
        state.toggle_mobile_menu();
        let before = state.clone();
        assert_eq!(state.smooth_scroll_to("missing", &sections()), None);
        assert_eq!(state, before);
    }

    #[test]
    fn parallax_holds_last_value_past_hero() {
        let mut state = ScrollUIState::default();
        state.update_parallax(200.0, Some(600.0));
        assert_eq!(state.parallax_y, 100.0);
        state.update_parallax(900.0, Some(600.0));
        assert_eq!(state.parallax_y, 100.0);
        state.update_parallax(300.0, None);
        assert_eq!(state.parallax_y, 100.0);
    }

    #[test]
    fn reducer_returns_same_rc_when_nothing_changes() {
        let state = Rc::new(ScrollUIState::default());
        let next = state.clone().reduce(ScrollAction::Scrolled {
            scroll_y: 10.0,
            hero_height: None,
        });
        assert!(Rc::ptr_eq(&state, &next));

        let next = state.clone().reduce(ScrollAction::ToggleMenu);
        assert!(!Rc::ptr_eq(&state, &next));
        assert!(next.nav.is_menu_open);
    }

    #[test]
    fn layout_action_updates_link_and_reveals() {
        let state = Rc::new(ScrollUIState::default());
        let next = state.reduce(ScrollAction::Layout(LayoutSnapshot {
            scroll_y: 150.0,
            viewport_height: 900.0,
            sections: sections(),
            probes: vec![probe("services-header", RevealKind::Section, 100.0)],
        }));
        assert!(next.nav.is_active("b"));
        assert!(next.is_revealed("services-header"));
    }

    #[test]
    fn reveal_kind_attr_round_trips() {
        for kind in [RevealKind::Section, RevealKind::Card, RevealKind::Stat] {
            assert_eq!(RevealKind::from_attr(kind.as_attr()), Some(kind));
        }
        assert_eq!(RevealKind::from_attr("banner"), None);
    }

    proptest! {
        #[test]
        fn scrolled_flag_matches_threshold(scroll_y in -1000.0f64..5000.0) {
            let mut state = ScrollUIState::default();
            state.update_navbar_chrome(scroll_y);
            prop_assert_eq!(state.nav.is_scrolled, scroll_y > 100.0);
            prop_assert_eq!(state.back_to_top_visible, scroll_y > 500.0);
        }

        #[test]
        fn revealed_targets_stay_revealed(tops in prop::collection::vec(-500.0f64..3000.0, 1..20)) {
            let mut state = ScrollUIState::default();
            state.reveal_on_scroll(800.0, &[probe("t", RevealKind::Section, 0.0)]);
            for top in tops {
                state.reveal_on_scroll(800.0, &[probe("t", RevealKind::Section, top)]);
                prop_assert!(state.is_revealed("t"));
            }
        }
    }
}
