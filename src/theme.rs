#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == ThemeMode::Dark
    }

    /// Toggle button label: shows the mode a click switches to.
    pub fn toggle_icon(self) -> &'static str {
        match self {
            ThemeMode::Light => "🌙",
            ThemeMode::Dark => "☀️",
        }
    }
}

/// Focus-outline mode after a keydown. Only Tab turns it on; other keys
/// leave it as it was.
pub fn keyboard_nav_after_key(key: &str, current: bool) -> bool {
    current || key == "Tab"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_icon() {
        let mode = ThemeMode::default();
        assert_eq!(mode.toggle_icon(), "🌙");
        let mode = mode.toggled();
        assert!(mode.is_dark());
        assert_eq!(mode.toggle_icon(), "☀️");
        assert_eq!(mode.toggled(), ThemeMode::Light);
    }

    #[test]
    fn only_tab_enables_keyboard_nav() {
        assert!(!keyboard_nav_after_key("Enter", false));
        assert!(keyboard_nav_after_key("Tab", false));
        assert!(keyboard_nav_after_key("a", true));
    }
}
