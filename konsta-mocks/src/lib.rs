//! konsta mocks - Interactive gallery for the konsta components
//!
//! Renders each component against either theme with live controls. Control
//! state is kept in the URL so a configuration can be shared as a link.

pub mod mocks;
pub mod pages;
pub mod storage;

use dioxus::prelude::*;
use pages::{MockBlockTitle, MockIndex, MockLink};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    MockIndex {},
    #[route("/mock/block-title?:state")]
    MockBlockTitle { state: Option<String> },
    #[route("/mock/link?:state")]
    MockLink { state: Option<String> },
}

#[component]
pub fn App() -> Element {
    rsx! {
        div { class: "min-h-screen", Router::<Route> {} }
    }
}
