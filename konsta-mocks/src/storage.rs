//! Local storage helpers

use konsta_common::Theme;
use tracing::{debug, warn};

/// Storage key for the last theme picked in any mock
pub const THEME_KEY: &str = "konsta-mocks.theme";

pub fn get_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

pub fn get_string(key: &str) -> Option<String> {
    get_storage().and_then(|s| s.get_item(key).ok().flatten())
}

pub fn set_string(key: &str, value: &str) {
    if let Some(storage) = get_storage() {
        if storage.set_item(key, value).is_err() {
            warn!("Failed to write {key} to local storage");
        }
    }
}

/// Parse a stored theme name. Missing or unrecognized values fall back to iOS.
pub fn parse_theme(stored: Option<&str>) -> Theme {
    match stored.map(str::parse::<Theme>) {
        Some(Ok(theme)) => theme,
        Some(Err(e)) => {
            warn!("Ignoring stored theme: {e}");
            Theme::Ios
        }
        None => Theme::Ios,
    }
}

pub fn stored_theme() -> Theme {
    parse_theme(get_string(THEME_KEY).as_deref())
}

pub fn store_theme(theme: Theme) {
    debug!("Persisting theme {theme}");
    set_string(THEME_KEY, theme.as_str());
}
