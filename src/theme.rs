pub const THEME_KEY: &str = "theme";
pub const THEME_ATTR: &str = "data-theme";

const ICON_LIGHT: &str = "fa-moon";
const ICON_DARK: &str = "fa-sun";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn toggle_label(self) -> String {
        let next = self.toggled().as_str();
        format!("Switch to {next} theme")
    }

    pub fn pressed(self) -> bool {
        matches!(self, Self::Dark)
    }

    /// Icon class to add and the one to remove.
    pub fn icon_swap(self) -> (&'static str, &'static str) {
        match self {
            Self::Light => (ICON_LIGHT, ICON_DARK),
            Self::Dark => (ICON_DARK, ICON_LIGHT),
        }
    }

    /// Theme the toggle switches to, given the current document attribute.
    pub fn next_from_attribute(current: Option<&str>) -> Self {
        current
            .and_then(Self::parse)
            .unwrap_or(Self::Light)
            .toggled()
    }
}

/// Persisted theme preference.
pub trait ThemeStore {
    fn load(&self) -> Option<String>;
    fn save(&self, theme: Theme);
}

/// Theme to apply at load, or `None` to keep the page default.
///
/// A stored value wins over the OS preference; an unrecognised stored value
/// counts as absent.
pub fn initial_theme(store: &impl ThemeStore, system_prefers_dark: bool) -> Option<Theme> {
    if let Some(stored) = store.load().as_deref().and_then(Theme::parse) {
        return Some(stored);
    }

    system_prefers_dark.then_some(Theme::Dark)
}
