//! Control panel UI

use super::registry::{ControlDef, ControlRegistry, ControlValue};
use crate::Route;
use dioxus::prelude::*;

/// Sticky control bar above the rendered component
#[component]
pub fn MockPanel(title: &'static str, registry: ControlRegistry, children: Element) -> Element {
    let choice_controls: Vec<ControlDef> = registry
        .controls
        .iter()
        .filter(|c| !c.options.is_empty())
        .cloned()
        .collect();
    let bool_controls: Vec<ControlDef> = registry
        .controls
        .iter()
        .filter(|c| c.options.is_empty())
        .cloned()
        .collect();

    rsx! {
        div { class: "min-h-screen bg-gray-900 text-white",
            div { class: "sticky top-0 z-50 bg-gray-800 border-b border-gray-700 p-4",
                div { class: "max-w-4xl mx-auto",
                    div { class: "flex items-center gap-3 mb-3",
                        Link {
                            to: Route::MockIndex {},
                            class: "text-sm text-gray-400 hover:text-white",
                            "← Mocks"
                        }
                        h1 { class: "text-lg font-semibold", "{title}" }
                    }

                    if !registry.presets.is_empty() {
                        div { class: "flex flex-wrap gap-2 mb-3",
                            span { class: "text-xs text-gray-500 self-center mr-2", "Presets:" }
                            for preset in registry.presets.iter().cloned() {
                                PresetButton { registry: registry.clone(), preset }
                            }
                        }
                    }

                    for control in choice_controls {
                        div { class: "flex flex-wrap items-center gap-2 mb-3",
                            span { class: "text-xs text-gray-500 mr-2", "{control.label}:" }
                            for (value , label) in control.options.iter().copied() {
                                ChoiceButton {
                                    registry: registry.clone(),
                                    control_key: control.key,
                                    value,
                                    label,
                                }
                            }
                        }
                    }

                    if !bool_controls.is_empty() {
                        div { class: "flex flex-wrap gap-4 text-sm",
                            for control in bool_controls {
                                BoolCheckbox {
                                    registry: registry.clone(),
                                    control_key: control.key,
                                    label: control.label,
                                }
                            }
                        }
                    }
                }
            }

            div { class: "max-w-4xl mx-auto p-6", {children} }
        }
    }
}

#[component]
fn PresetButton(registry: ControlRegistry, preset: super::Preset) -> Element {
    let class = if preset.matches(&registry) {
        "px-2 py-1 text-xs rounded bg-blue-600 text-white"
    } else {
        "px-2 py-1 text-xs rounded bg-gray-700 text-gray-300 hover:bg-gray-600"
    };

    rsx! {
        button {
            class,
            onclick: move |_| registry.apply_preset(&preset),
            "{preset.name}"
        }
    }
}

/// Reads the control inside its own body so only this button re-renders
#[component]
fn ChoiceButton(
    registry: ControlRegistry,
    control_key: &'static str,
    value: &'static str,
    label: &'static str,
) -> Element {
    let class = if registry.get_choice(control_key) == value {
        "px-3 py-1.5 text-sm rounded bg-blue-600 text-white"
    } else {
        "px-3 py-1.5 text-sm rounded bg-gray-700 text-gray-300 hover:bg-gray-600"
    };

    rsx! {
        button {
            class,
            onclick: move |_| registry.set(control_key, ControlValue::Choice(value.to_string())),
            "{label}"
        }
    }
}

#[component]
fn BoolCheckbox(
    registry: ControlRegistry,
    control_key: &'static str,
    label: &'static str,
) -> Element {
    let checked = registry.get_bool(control_key);

    rsx! {
        label { class: "flex items-center gap-2 cursor-pointer text-gray-300",
            input {
                r#type: "checkbox",
                checked,
                onchange: move |_| registry.set(control_key, ControlValue::Bool(!checked)),
            }
            "{label}"
        }
    }
}
