//! Theme preference (light/dark) and its persistence.
//!
//! The preference is an explicit `Theme` value loaded once at start-up
//! through a `PreferenceStore`, then carried in `UiState`. Toggling writes
//! back through the same store and sets `data-theme` on `<body>`.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort: a missing or failing `localStorage` leaves the
//! theme in memory only.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// Key/value capability for the single persisted preference.
pub trait PreferenceStore {
    fn load(&self, key: &str) -> Option<String>;
    fn save(&self, key: &str, value: &str);
}

/// `localStorage`-backed store. Native builds read nothing and write nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

impl PreferenceStore for BrowserStorage {
    fn load(&self, key: &str) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
            storage.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            None
        }
    }

    fn save(&self, key: &str, value: &str) {
        #[cfg(feature = "csr")]
        {
            let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
                log::warn!("localStorage unavailable; theme not persisted");
                return;
            };
            if storage.set_item(key, value).is_err() {
                log::warn!("failed to persist {key}={value}");
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (key, value);
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    /// Stored preference, or `Light` when nothing usable is stored.
    pub fn load(store: &impl PreferenceStore, key: &str) -> Self {
        store
            .load(key)
            .and_then(|raw| Self::parse(&raw))
            .unwrap_or_default()
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Toggle icon: the sun offers a way out of dark mode, the moon into it.
    #[must_use]
    pub fn icon_class(self) -> &'static str {
        match self {
            Self::Light => "fas fa-moon",
            Self::Dark => "fas fa-sun",
        }
    }
}

/// Flip `current`, persist the result, and apply it to the document.
pub fn toggle(current: Theme, store: &impl PreferenceStore, key: &str) -> Theme {
    let next = current.toggled();
    store.save(key, next.as_str());
    apply(next);
    next
}

/// Set the `data-theme` attribute on `<body>`.
pub fn apply(theme: Theme) {
    #[cfg(feature = "csr")]
    {
        if let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) {
            let _ = body.set_attribute("data-theme", theme.as_str());
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = theme;
    }
}
