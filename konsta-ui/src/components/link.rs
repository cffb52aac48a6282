//! Link component - tappable inline text, also used for navbar and toolbar actions

use dioxus::prelude::*;
use konsta_common::{cls, resolve, ClassSpec, SlotSpec, ThemeSelector};

/// Element rendered for a link
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum LinkTag {
    #[default]
    A,
    Span,
    Button,
}

/// Color classes for a link
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct LinkColors {
    pub text: String,
}

impl Default for LinkColors {
    fn default() -> Self {
        Self {
            text: "text-primary".to_string(),
        }
    }
}

/// Classes for a link. `navbar` and `toolbar` add the sizing used when the
/// link sits inside those bars; `class` is appended last.
pub fn link_classes(
    theme: ThemeSelector,
    colors: &LinkColors,
    navbar: bool,
    toolbar: bool,
    class: Option<&str>,
) -> String {
    let spec = ClassSpec::new()
        .slot(
            "base",
            SlotSpec::new(cls!(
                colors.text,
                "inline-flex space-x-1 items-center cursor-pointer select-none"
            ))
            .ios("active:opacity-30 duration-300 active:duration-0")
            .material("active:opacity-55")
            .common(
                "ios-active:opacity-30 ios:duration-300 ios-active:duration-0 material-active:opacity-55",
            ),
        )
        .slot("toolbar", SlotSpec::new("h-full max-h-12").material("p-x-3"))
        .slot("navbar", SlotSpec::new("h-full max-h-12").material("p-x-3"));

    let c = resolve(theme, &spec);

    cls!(
        c.get("base"),
        toolbar.then_some(c.get("toolbar")),
        navbar.then_some(c.get("navbar")),
        class
    )
}

#[component]
pub fn Link(
    #[props(default)] tag: LinkTag,
    #[props(default)] class: Option<String>,
    #[props(default)] colors: LinkColors,
    #[props(default)] navbar: bool,
    #[props(default)] toolbar: bool,
    #[props(default)] theme: ThemeSelector,
    #[props(default)] onclick: Option<EventHandler<MouseEvent>>,
    #[props(extends = GlobalAttributes, extends = a)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let class = link_classes(theme, &colors, navbar, toolbar, class.as_deref());
    let handle_click = move |evt: MouseEvent| {
        if let Some(ref handler) = onclick {
            handler.call(evt);
        }
    };

    match tag {
        LinkTag::A => rsx! {
            a { class: "{class}", onclick: handle_click, ..attributes, {children} }
        },
        LinkTag::Span => rsx! {
            span { class: "{class}", onclick: handle_click, ..attributes, {children} }
        },
        LinkTag::Button => rsx! {
            button {
                class: "{class}",
                r#type: "button",
                onclick: handle_click,
                ..attributes,
                {children}
            }
        },
    }
}
