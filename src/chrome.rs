//! Page-level side effects that live outside the Yew tree (the `<body>` and
//! the window scroll position).

use crate::error::UiResult;
use crate::scroll_state::ScrollUIState;
use crate::theme::ThemeMode;

pub trait PageChrome {
    fn set_scroll_locked(&self, locked: bool) -> UiResult<()>;
    fn set_dark_mode(&self, dark: bool) -> UiResult<()>;
    fn set_keyboard_nav(&self, enabled: bool) -> UiResult<()>;
    fn scroll_to(&self, top: f64) -> UiResult<()>;
}

/// Body flags derived from page state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BodyFlags {
    pub scroll_locked: bool,
    pub dark_mode: bool,
}

impl BodyFlags {
    pub fn from_state(state: &ScrollUIState, theme: ThemeMode) -> Self {
        Self {
            scroll_locked: state.scroll_locked(),
            dark_mode: theme.is_dark(),
        }
    }
}

/// Pushes `flags` onto the page, logging instead of failing.
pub fn apply_body_flags(chrome: &impl PageChrome, flags: BodyFlags) {
    if let Err(e) = chrome.set_scroll_locked(flags.scroll_locked) {
        log::warn!("could not update scroll lock: {}", e);
    }
    if let Err(e) = chrome.set_dark_mode(flags.dark_mode) {
        log::warn!("could not update theme: {}", e);
    }
}

/// Releases the scroll lock on teardown so the page never stays frozen.
pub fn release_body(chrome: &impl PageChrome) {
    if let Err(e) = chrome.set_scroll_locked(false) {
        log::warn!("could not release scroll lock: {}", e);
    }
}
