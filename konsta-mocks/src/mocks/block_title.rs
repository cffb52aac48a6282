//! BlockTitle mock

use super::framework::{ControlRegistryBuilder, MockPanel, Preset};
use super::{theme_options, theme_selector, use_theme_persistence, THEME_CONTROL};
use crate::{storage, Route};
use dioxus::prelude::*;
use konsta_ui::{block_title_classes, BlockTitle, BlockTitleTag};

#[component]
pub fn BlockTitleMock(initial_state: Option<String>) -> Element {
    let registry = ControlRegistryBuilder::new()
        .choice_control(THEME_CONTROL, "Theme", "ios", theme_options())
        .pinned()
        .seed(THEME_CONTROL, storage::stored_theme().as_str())
        .choice_control(
            "tag",
            "Tag",
            "div",
            vec![("div", "div"), ("p", "p"), ("h1", "h1"), ("h2", "h2"), ("h3", "h3")],
        )
        .bool_control("with_block", "With block", true)
        .bool_control("custom_class", "Custom class", false)
        .with_presets(vec![
            Preset::new("iOS").set_choice(THEME_CONTROL, "ios"),
            Preset::new("Material").set_choice(THEME_CONTROL, "material"),
            Preset::new("Standalone")
                .set_choice(THEME_CONTROL, "material")
                .set_bool("with_block", false),
        ])
        .build(initial_state);

    registry.use_url_sync(|state| Route::MockBlockTitle { state });
    use_theme_persistence(&registry);

    let theme = theme_selector(&registry.get_choice(THEME_CONTROL));
    let with_block = registry.get_bool("with_block");
    let class = registry
        .get_bool("custom_class")
        .then(|| "text-indigo-400".to_string());

    let tag = match registry.get_choice("tag").as_str() {
        "p" => BlockTitleTag::P,
        "h1" => BlockTitleTag::H1,
        "h2" => BlockTitleTag::H2,
        "h3" => BlockTitleTag::H3,
        _ => BlockTitleTag::Div,
    };

    let computed = block_title_classes(theme, with_block, class.as_deref());

    rsx! {
        MockPanel { title: "BlockTitle", registry,
            div { class: "bg-gray-100 text-gray-900 rounded-lg pb-4",
                BlockTitle {
                    tag,
                    theme,
                    with_block,
                    class,
                    id: "block-title-demo",
                    "Settings"
                }
                div { class: "mx-4 mt-8 p-4 bg-white rounded-lg", "Block content" }
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
