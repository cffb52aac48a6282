//! Named control configurations

use super::registry::{ControlRegistry, ControlValue};
use std::collections::HashMap;

#[derive(Clone, Debug, PartialEq)]
pub struct Preset {
    pub name: &'static str,
    pub values: HashMap<&'static str, ControlValue>,
}

impl Preset {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            values: HashMap::new(),
        }
    }

    pub fn set_bool(mut self, key: &'static str, value: bool) -> Self {
        self.values.insert(key, ControlValue::Bool(value));
        self
    }

    pub fn set_choice(mut self, key: &'static str, value: &'static str) -> Self {
        self.values
            .insert(key, ControlValue::Choice(value.to_string()));
        self
    }

    /// True when every control holds this preset's value, or its default
    /// if the preset leaves it alone.
    pub fn matches(&self, registry: &ControlRegistry) -> bool {
        registry.controls.iter().all(|control| {
            let expected = self.values.get(control.key).unwrap_or(&control.default);
            registry
                .values
                .get(control.key)
                .is_some_and(|signal| &*signal.read() == expected)
        })
    }
}
