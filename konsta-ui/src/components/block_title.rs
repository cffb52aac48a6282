//! Block title - heading placed above a content block

use dioxus::prelude::*;
use konsta_common::{cls, resolve_with_base_class, ClassSpec, SlotSpec, ThemeSelector};

/// Element rendered for a block title
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum BlockTitleTag {
    #[default]
    Div,
    P,
    H1,
    H2,
    H3,
}

/// Classes for a block title.
///
/// `with_block` tucks the title into the block that follows it; without it the
/// title keeps a small bottom margin of its own.
pub fn block_title_classes(theme: ThemeSelector, with_block: bool, class: Option<&str>) -> String {
    let spacing = if with_block { "-mb-6" } else { "mb-2" };
    let spec = ClassSpec::new().slot(
        "base",
        SlotSpec::new(cls!("px-4 mt-8 flex items-center", spacing))
            .ios("font-semibold")
            .material("font-medium"),
    );

    resolve_with_base_class(theme, &spec, class)
        .get("base")
        .to_string()
}

#[component]
pub fn BlockTitle(
    #[props(default)] tag: BlockTitleTag,
    #[props(default)] class: Option<String>,
    #[props(default = true)] with_block: bool,
    #[props(default)] theme: ThemeSelector,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let class = block_title_classes(theme, with_block, class.as_deref());

    match tag {
        BlockTitleTag::Div => rsx! {
            div { class: "{class}", ..attributes, {children} }
        },
        BlockTitleTag::P => rsx! {
            p { class: "{class}", ..attributes, {children} }
        },
        BlockTitleTag::H1 => rsx! {
            h1 { class: "{class}", ..attributes, {children} }
        },
        BlockTitleTag::H2 => rsx! {
            h2 { class: "{class}", ..attributes, {children} }
        },
        BlockTitleTag::H3 => rsx! {
            h3 { class: "{class}", ..attributes, {children} }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ios_with_block() {
        assert_eq!(
            block_title_classes(ThemeSelector::ios(), true, None),
            "px-4 mt-8 flex items-center -mb-6 font-semibold"
        );
    }

    #[test]
    fn material_without_block() {
        assert_eq!(
            block_title_classes(ThemeSelector::material(), false, None),
            "px-4 mt-8 flex items-center mb-2 font-medium"
        );
    }

    #[test]
    fn caller_class_goes_last() {
        assert_eq!(
            block_title_classes(ThemeSelector::ios(), true, Some("text-red-500")),
            "px-4 mt-8 flex items-center -mb-6 font-semibold text-red-500"
        );
    }

    #[test]
    fn neutral_theme_has_no_font_weight() {
        let classes = block_title_classes(ThemeSelector::NEUTRAL, true, Some(""));
        assert_eq!(classes, "px-4 mt-8 flex items-center -mb-6");
    }

    #[test]
    fn default_tag_is_div() {
        assert_eq!(BlockTitleTag::default(), BlockTitleTag::Div);
    }
}
