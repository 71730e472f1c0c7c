use crate::errors::StorageError;
use crate::keys::StorageKey;
use crate::storage::KeyValueStore;
use serde::{Deserialize, Serialize};
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "dark" => Some(Theme::Dark),
            "light" => Some(Theme::Light),
            _ => None,
        }
    }
}

/// Saved preference, or the system preference when nothing usable is stored.
pub fn load_theme(store: &impl KeyValueStore, prefers_dark: bool) -> Theme {
    let fallback = if prefers_dark { Theme::Dark } else { Theme::Light };
    match store.get(&StorageKey::Theme) {
        Some(raw) => Theme::parse(&raw).unwrap_or_else(|| {
            warn!(value = %raw, "ignoring unknown theme");
            fallback
        }),
        None => fallback,
    }
}

pub fn save_theme(store: &mut impl KeyValueStore, theme: Theme) -> Result<(), StorageError> {
    store.set(&StorageKey::Theme, theme.as_str().to_owned())
}
