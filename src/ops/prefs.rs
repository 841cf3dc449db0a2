use crate::io::kv::{KvStore, StoreError};

/// Storage key for the theme preference
pub const THEME_KEY: &str = "preferred-theme";
/// Storage key for the visit counter
pub const VISIT_COUNT_KEY: &str = "visitCount";

/// Light/dark theme preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn name(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn parse(s: &str) -> Option<Theme> {
        match s {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// The stored theme, defaulting to light when unset or unreadable.
pub fn theme(store: &dyn KvStore) -> Theme {
    store
        .get(THEME_KEY)
        .and_then(|s| Theme::parse(&s))
        .unwrap_or_default()
}

pub fn set_theme(store: &mut dyn KvStore, theme: Theme) -> Result<(), StoreError> {
    store.set(THEME_KEY, theme.name())
}

/// Flip light⇄dark and persist; returns the new theme.
pub fn toggle_theme(store: &mut dyn KvStore) -> Result<Theme, StoreError> {
    let next = theme(store).toggled();
    set_theme(store, next)?;
    Ok(next)
}

/// The stored visit count; garbage parses as zero.
pub fn visits(store: &dyn KvStore) -> u64 {
    store
        .get(VISIT_COUNT_KEY)
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(0)
}

/// Increment and persist the visit count; returns the new value.
pub fn record_visit(store: &mut dyn KvStore) -> Result<u64, StoreError> {
    let count = visits(store) + 1;
    store.set(VISIT_COUNT_KEY, &count.to_string())?;
    Ok(count)
}
