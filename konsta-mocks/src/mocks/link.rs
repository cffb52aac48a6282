//! Link mock

use super::framework::{ControlRegistryBuilder, MockPanel, Preset};
use super::{theme_options, theme_selector, use_theme_persistence, THEME_CONTROL};
use crate::{storage, Route};
use dioxus::prelude::*;
use konsta_ui::{link_classes, LinkColors, LinkTag};
use tracing::info;

#[component]
pub fn LinkMock(initial_state: Option<String>) -> Element {
    let registry = ControlRegistryBuilder::new()
        .choice_control(THEME_CONTROL, "Theme", "ios", theme_options())
        .pinned()
        .seed(THEME_CONTROL, storage::stored_theme().as_str())
        .choice_control(
            "tag",
            "Tag",
            "a",
            vec![("a", "a"), ("span", "span"), ("button", "button")],
        )
        .choice_control(
            "color",
            "Color",
            "primary",
            vec![("primary", "Primary"), ("red", "Red")],
        )
        .bool_control("navbar", "Navbar", false)
        .bool_control("toolbar", "Toolbar", false)
        .with_presets(vec![
            Preset::new("Inline"),
            Preset::new("Navbar action")
                .set_choice(THEME_CONTROL, "ios")
                .set_bool("navbar", true),
            Preset::new("Material toolbar")
                .set_choice(THEME_CONTROL, "material")
                .set_bool("toolbar", true),
        ])
        .build(initial_state);

    registry.use_url_sync(|state| Route::MockLink { state });
    use_theme_persistence(&registry);

    let theme = theme_selector(&registry.get_choice(THEME_CONTROL));
    let navbar = registry.get_bool("navbar");
    let toolbar = registry.get_bool("toolbar");
    let colors = match registry.get_choice("color").as_str() {
        "red" => LinkColors {
            text: "text-red-500".to_string(),
        },
        _ => LinkColors::default(),
    };
    let tag = match registry.get_choice("tag").as_str() {
        "span" => LinkTag::Span,
        "button" => LinkTag::Button,
        _ => LinkTag::A,
    };

    let computed = link_classes(theme, &colors, navbar, toolbar, None);
    let mut clicks = use_signal(|| 0u32);

    rsx! {
        MockPanel { title: "Link", registry,
            div { class: "bg-gray-100 text-gray-900 rounded-lg p-4 flex items-center gap-4 h-12",
                konsta_ui::Link {
                    tag,
                    theme,
                    colors,
                    navbar,
                    toolbar,
                    href: "#",
                    onclick: move |_| {
                        clicks += 1;
                        info!("Link clicked {} times", clicks());
                    },
                    "Edit"
                }
                span { class: "text-sm text-gray-500", "Clicks: {clicks}" }
            }

            div { class: "mt-6",
                h3 { class: "text-sm text-gray-400 mb-2", "Resolved classes" }
                code { class: "block text-xs text-gray-300 bg-gray-800 rounded p-3 break-all",
                    "{computed}"
                }
            }
        }
    }
}
