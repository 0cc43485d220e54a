use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose while running under `trunk serve`
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Navbar gets the `scrolled` class past this offset.
pub const NAVBAR_SCROLLED_AFTER: f64 = 100.0;
/// Back-to-top control shows past this offset.
pub const BACK_TO_TOP_AFTER: f64 = 500.0;
/// Added to the scroll offset so a section activates a little before its top edge.
pub const SECTION_ACTIVATION_BIAS: f64 = 100.0;
/// Fixed navbar height, subtracted when scrolling to a section.
pub const NAVBAR_HEIGHT: f64 = 70.0;

pub const SECTION_REVEAL_MARGIN: f64 = 150.0;
pub const CARD_REVEAL_MARGIN: f64 = 100.0;
pub const CARD_REVEAL_THRESHOLD: f64 = 0.1;
pub const STAT_REVEAL_THRESHOLD: f64 = 0.5;

pub const PARALLAX_SPEED: f64 = 0.5;

pub const SCROLL_DEBOUNCE_MS: u32 = 10;

pub const COUNTER_DURATION_MS: u32 = 2000;
pub const COUNTER_FRAME_MS: u32 = 16;

pub const FORM_SUCCESS_MS: u32 = 5000;
pub const PROJECT_PRESS_MS: u32 = 200;
pub const BODY_FADE_IN_DELAY_MS: u32 = 100;

/// Scroll thresholds consumed by the pure scroll core.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UiConfig {
    pub navbar_scrolled_after: f64,
    pub back_to_top_after: f64,
    pub section_activation_bias: f64,
    pub navbar_height: f64,
    pub parallax_speed: f64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            navbar_scrolled_after: NAVBAR_SCROLLED_AFTER,
            back_to_top_after: BACK_TO_TOP_AFTER,
            section_activation_bias: SECTION_ACTIVATION_BIAS,
            navbar_height: NAVBAR_HEIGHT,
            parallax_speed: PARALLAX_SPEED,
        }
    }
}
