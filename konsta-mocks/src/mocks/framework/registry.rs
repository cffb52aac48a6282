//! Control registry with URL sync

use super::preset::Preset;
use crate::mocks::url_state::{decode_state, encode_state, StateMap};
use crate::Route;
use dioxus::prelude::*;
use std::collections::HashMap;

/// Current value of a control
#[derive(Clone, Debug, PartialEq)]
pub enum ControlValue {
    Bool(bool),
    Choice(String),
}

impl ControlValue {
    fn encode(&self) -> String {
        match self {
            ControlValue::Bool(true) => "1".to_string(),
            ControlValue::Bool(false) => "0".to_string(),
            ControlValue::Choice(value) => value.clone(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ControlDef {
    pub key: &'static str,
    pub label: &'static str,
    pub default: ControlValue,
    /// (value, label) pairs for choice controls
    pub options: Vec<(&'static str, &'static str)>,
    /// Always written to URL state, even at its default
    pub pinned: bool,
}

impl ControlDef {
    /// Value for this control from decoded URL state, falling back to the default.
    /// Choice values outside `options` are rejected.
    pub fn initial_value(&self, state: &StateMap) -> ControlValue {
        let Some(raw) = state.get(self.key) else {
            return self.default.clone();
        };
        match &self.default {
            ControlValue::Bool(_) => ControlValue::Bool(raw == "1" || raw == "true"),
            ControlValue::Choice(_) if self.options.iter().any(|(v, _)| *v == raw.as_str()) => {
                ControlValue::Choice(raw.clone())
            }
            ControlValue::Choice(_) => self.default.clone(),
        }
    }

    /// URL state entry for `value`. Defaults are left out to keep URLs short,
    /// unless the control is pinned.
    pub fn state_entry(&self, value: &ControlValue) -> Option<(String, String)> {
        (self.pinned || value != &self.default)
            .then(|| (self.key.to_string(), value.encode()))
    }
}

/// State the controls start from: the URL's when it carries any, otherwise the seeds.
pub fn starting_state(initial_state: Option<&str>, seeds: &StateMap) -> StateMap {
    match initial_state {
        Some(encoded) if !encoded.is_empty() => decode_state(encoded),
        _ => seeds.clone(),
    }
}

pub struct ControlRegistryBuilder {
    controls: Vec<ControlDef>,
    presets: Vec<Preset>,
    seeds: StateMap,
}

impl ControlRegistryBuilder {
    pub fn new() -> Self {
        Self {
            controls: Vec::new(),
            presets: Vec::new(),
            seeds: StateMap::new(),
        }
    }

    pub fn bool_control(mut self, key: &'static str, label: &'static str, default: bool) -> Self {
        self.controls.push(ControlDef {
            key,
            label,
            default: ControlValue::Bool(default),
            options: Vec::new(),
            pinned: false,
        });
        self
    }

    pub fn choice_control(
        mut self,
        key: &'static str,
        label: &'static str,
        default: &'static str,
        options: Vec<(&'static str, &'static str)>,
    ) -> Self {
        self.controls.push(ControlDef {
            key,
            label,
            default: ControlValue::Choice(default.to_string()),
            options,
            pinned: false,
        });
        self
    }

    /// Always carry the last control in the URL, so a shared link pins its value
    pub fn pinned(mut self) -> Self {
        if let Some(last) = self.controls.last_mut() {
            last.pinned = true;
        }
        self
    }

    /// Starting value for `key` when the page is opened without URL state
    pub fn seed(mut self, key: &'static str, value: &str) -> Self {
        self.seeds.insert(key.to_string(), value.to_string());
        self
    }

    pub fn with_presets(mut self, presets: Vec<Preset>) -> Self {
        self.presets = presets;
        self
    }

    /// Build the registry - must be called inside a component (uses hooks)
    pub fn build(self, initial_state: Option<String>) -> ControlRegistry {
        let state = starting_state(initial_state.as_deref(), &self.seeds);

        let mut values = HashMap::new();
        for def in &self.controls {
            let initial = def.initial_value(&state);
            values.insert(def.key, use_signal(|| initial));
        }

        ControlRegistry {
            controls: self.controls,
            values,
            presets: self.presets,
        }
    }
}

impl Default for ControlRegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone)]
pub struct ControlRegistry {
    pub controls: Vec<ControlDef>,
    pub values: HashMap<&'static str, Signal<ControlValue>>,
    pub presets: Vec<Preset>,
}

impl PartialEq for ControlRegistry {
    fn eq(&self, other: &Self) -> bool {
        self.controls == other.controls
            && self.values == other.values
            && self.presets == other.presets
    }
}

impl ControlRegistry {
    /// Read a bool control (subscribes the caller)
    pub fn get_bool(&self, key: &'static str) -> bool {
        self.values
            .get(key)
            .map(|s| matches!(&*s.read(), ControlValue::Bool(true)))
            .unwrap_or(false)
    }

    /// Read a choice control (subscribes the caller)
    pub fn get_choice(&self, key: &'static str) -> String {
        self.values
            .get(key)
            .map(|s| match &*s.read() {
                ControlValue::Choice(value) => value.clone(),
                ControlValue::Bool(_) => String::new(),
            })
            .unwrap_or_default()
    }

    pub fn set(&self, key: &'static str, value: ControlValue) {
        if let Some(mut signal) = self.values.get(key).copied() {
            signal.set(value);
        }
    }

    /// Reset every control to its default, then apply the preset's values
    pub fn apply_preset(&self, preset: &Preset) {
        for control in &self.controls {
            let value = preset
                .values
                .get(control.key)
                .cloned()
                .unwrap_or_else(|| control.default.clone());
            self.set(control.key, value);
        }
    }

    /// Current non-default values, without subscribing
    pub fn state(&self) -> StateMap {
        self.controls
            .iter()
            .filter_map(|def| {
                let signal = self.values.get(def.key)?;
                let value = signal.peek();
                def.state_entry(&value)
            })
            .collect()
    }

    /// Replace the current route whenever a control changes
    pub fn use_url_sync(&self, to_route: fn(Option<String>) -> Route) {
        let registry = self.clone();
        let mut is_mounted = use_signal(|| false);

        use_effect(move || {
            // Read all values to subscribe to changes
            for signal in registry.values.values() {
                let _ = signal.read();
            }

            if !*is_mounted.peek() {
                is_mounted.set(true);
                return;
            }

            navigator().replace(to_route(encode_state(&registry.state())));
        });
    }
}
