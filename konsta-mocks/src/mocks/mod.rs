//! Component mocks with interactive controls

mod block_title;
pub mod framework;
mod link;
pub mod url_state;

pub use block_title::BlockTitleMock;
pub use link::LinkMock;

use crate::storage;
use dioxus::prelude::*;
use framework::ControlRegistry;
use konsta_common::{Theme, ThemeSelector};
use tracing::debug;

pub const THEME_CONTROL: &str = "theme";

/// Theme choices offered by every mock. "both" exercises the iOS tie-break.
pub fn theme_options() -> Vec<(&'static str, &'static str)> {
    vec![
        ("ios", "iOS"),
        ("material", "Material"),
        ("both", "Both"),
        ("none", "Neutral"),
    ]
}

/// Selector for a theme control value
pub fn theme_selector(choice: &str) -> ThemeSelector {
    match choice {
        "both" => ThemeSelector {
            ios: true,
            material: true,
        },
        other => ThemeSelector::from(other.parse::<Theme>().ok()),
    }
}

/// Remember the last concrete theme picked so the next mock opens with it
pub fn use_theme_persistence(registry: &ControlRegistry) {
    let registry = registry.clone();
    use_effect(move || {
        let choice = registry.get_choice(THEME_CONTROL);
        if let Ok(theme) = choice.parse::<Theme>() {
            storage::store_theme(theme);
        } else {
            debug!("Theme choice '{choice}' is not persisted");
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_selector_for_each_choice() {
        assert_eq!(theme_selector("ios"), ThemeSelector::ios());
        assert_eq!(theme_selector("material"), ThemeSelector::material());
        assert_eq!(theme_selector("none"), ThemeSelector::NEUTRAL);
        assert!(theme_selector("both").is_ambiguous());
    }

    #[test]
    fn every_option_maps_to_a_selector() {
        let selectors: Vec<_> = theme_options()
            .into_iter()
            .map(|(value, _)| theme_selector(value))
            .collect();
        assert_eq!(selectors.len(), 4);
        assert_eq!(selectors[0].active(), Some(Theme::Ios));
        assert_eq!(selectors[1].active(), Some(Theme::Material));
        assert_eq!(selectors[2].active(), Some(Theme::Ios));
        assert_eq!(selectors[3].active(), None);
    }
}
