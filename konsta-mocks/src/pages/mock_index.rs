//! Index page and route wrappers for the mocks

use crate::mocks::{BlockTitleMock, LinkMock};
use crate::{storage, Route};
use dioxus::prelude::*;
use konsta_common::{Theme, ThemeSelector};
use konsta_ui::{BlockTitle, LinkTag};

#[component]
pub fn MockIndex() -> Element {
    let stored = storage::stored_theme();

    rsx! {
        div { class: "min-h-screen bg-gray-900 text-white p-8",
            h1 { class: "text-2xl font-bold mb-2", "konsta mocks" }
            p { class: "text-sm text-gray-400 mb-6", "Last used theme: {stored}" }

            div { class: "grid grid-cols-2 gap-4",
                SpecimenCard {
                    title: "BlockTitle",
                    description: "Heading above a content block",
                    to: Route::MockBlockTitle { state: None },
                    for theme in Theme::ALL {
                        BlockTitle {
                            theme: ThemeSelector::from(theme),
                            with_block: false,
                            "{theme}"
                        }
                    }
                }
                SpecimenCard {
                    title: "Link",
                    description: "Inline, navbar and toolbar links",
                    to: Route::MockLink { state: None },
                    for theme in Theme::ALL {
                        konsta_ui::Link {
                            tag: LinkTag::Span,
                            theme: ThemeSelector::from(theme),
                            class: Some("mr-4".to_string()),
                            "{theme}"
                        }
                    }
                }
            }
        }
    }
}

/// Card linking to a mock page, with a small live preview
#[component]
fn SpecimenCard(
    title: &'static str,
    description: &'static str,
    to: Route,
    children: Element,
) -> Element {
    rsx! {
        Link {
            to,
            class: "block p-4 bg-gray-800 rounded-lg hover:bg-gray-700 transition-colors",
            div { class: "font-medium", "{title}" }
            div { class: "text-sm text-gray-400 mb-3", "{description}" }
            div { class: "bg-gray-100 text-gray-900 rounded p-2", {children} }
        }
    }
}

#[component]
pub fn MockBlockTitle(state: Option<String>) -> Element {
    rsx! {
        BlockTitleMock { initial_state: state }
    }
}

#[component]
pub fn MockLink(state: Option<String>) -> Element {
    rsx! {
        LinkMock { initial_state: state }
    }
}
