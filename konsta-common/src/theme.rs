//! Theme-variant class resolution
//!
//! Components declare a [`ClassSpec`]: one [`SlotSpec`] per styled region, each
//! carrying base classes plus per-theme additions. [`resolve`] flattens that
//! declaration into one class string per slot for the active [`ThemeSelector`].
//!
//! Fragments are always concatenated as `initial`, then the theme-specific
//! classes, then `common`, since later utilities win in the styling framework.

use crate::cls::merge;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::ops::Index;
use std::str::FromStr;
use thiserror::Error;
use tracing::trace;

/// Slot that receives the caller's class override in [`resolve_with_base_class`].
pub const BASE_SLOT: &str = "base";

/// Supported design languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Ios,
    Material,
}

impl Theme {
    pub const ALL: [Theme; 2] = [Theme::Ios, Theme::Material];

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Ios => "ios",
            Theme::Material => "material",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ThemeParseError {
    #[error("unknown theme '{0}' (expected 'ios' or 'material')")]
    Unknown(String),
}

impl FromStr for Theme {
    type Err = ThemeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        if name.eq_ignore_ascii_case("ios") {
            Ok(Theme::Ios)
        } else if name.eq_ignore_ascii_case("material") {
            Ok(Theme::Material)
        } else {
            Err(ThemeParseError::Unknown(name.to_string()))
        }
    }
}

/// Which theme's classes to apply.
///
/// The flags are independent. Nothing upstream prevents both from being set,
/// in which case iOS wins. With neither set only the theme-independent
/// fragments are emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeSelector {
    pub ios: bool,
    pub material: bool,
}

impl ThemeSelector {
    pub const NEUTRAL: ThemeSelector = ThemeSelector {
        ios: false,
        material: false,
    };

    pub fn ios() -> Self {
        Self {
            ios: true,
            material: false,
        }
    }

    pub fn material() -> Self {
        Self {
            ios: false,
            material: true,
        }
    }

    /// The theme whose classes will be applied, after the iOS-first tie-break.
    pub fn active(&self) -> Option<Theme> {
        if self.ios {
            Some(Theme::Ios)
        } else if self.material {
            Some(Theme::Material)
        } else {
            None
        }
    }

    pub fn is_ambiguous(&self) -> bool {
        self.ios && self.material
    }
}

impl From<Theme> for ThemeSelector {
    fn from(theme: Theme) -> Self {
        match theme {
            Theme::Ios => Self::ios(),
            Theme::Material => Self::material(),
        }
    }
}

impl From<Option<Theme>> for ThemeSelector {
    fn from(theme: Option<Theme>) -> Self {
        theme.map(Self::from).unwrap_or_default()
    }
}

/// Classes contributed by one slot, per theme. Absent fields are empty strings.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "SlotSpecRepr")]
pub struct SlotSpec {
    pub initial: String,
    pub ios: String,
    pub material: String,
    pub common: String,
}

impl SlotSpec {
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            initial: initial.into(),
            ..Self::default()
        }
    }

    pub fn ios(mut self, classes: impl Into<String>) -> Self {
        self.ios = classes.into();
        self
    }

    pub fn material(mut self, classes: impl Into<String>) -> Self {
        self.material = classes.into();
        self
    }

    pub fn common(mut self, classes: impl Into<String>) -> Self {
        self.common = classes.into();
        self
    }

    /// Resolve this slot alone: `initial`, then the active theme's classes, then `common`.
    pub fn resolve(&self, selector: ThemeSelector) -> String {
        let themed = match selector.active() {
            Some(Theme::Ios) => self.ios.as_str(),
            Some(Theme::Material) => self.material.as_str(),
            None => "",
        };
        merge([
            Some(self.initial.as_str()),
            Some(themed),
            Some(self.common.as_str()),
        ])
    }
}

/// A plain string is a theme-independent slot.
impl From<&str> for SlotSpec {
    fn from(initial: &str) -> Self {
        Self::new(initial)
    }
}

impl From<String> for SlotSpec {
    fn from(initial: String) -> Self {
        Self::new(initial)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SlotSpecRepr {
    Plain(String),
    Themed {
        #[serde(default)]
        initial: String,
        #[serde(default)]
        ios: String,
        #[serde(default)]
        material: String,
        #[serde(default)]
        common: String,
    },
}

impl From<SlotSpecRepr> for SlotSpec {
    fn from(repr: SlotSpecRepr) -> Self {
        match repr {
            SlotSpecRepr::Plain(initial) => Self::new(initial),
            SlotSpecRepr::Themed {
                initial,
                ios,
                material,
                common,
            } => Self {
                initial,
                ios,
                material,
                common,
            },
        }
    }
}

#[derive(Debug, Error)]
pub enum ClassSpecError {
    #[error("invalid class spec JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Per-component declaration of slots and their themed classes
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClassSpec {
    slots: BTreeMap<String, SlotSpec>,
}

impl ClassSpec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`ClassSpec::insert`]
    pub fn slot(mut self, name: impl Into<String>, spec: impl Into<SlotSpec>) -> Self {
        self.insert(name, spec);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, spec: impl Into<SlotSpec>) {
        self.slots.insert(name.into(), spec.into());
    }

    pub fn get(&self, name: &str) -> Option<&SlotSpec> {
        self.slots.get(name)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &SlotSpec)> {
        self.slots.iter().map(|(name, spec)| (name.as_str(), spec))
    }

    /// Load a spec from JSON. Slot values may be a plain string or an object
    /// with any of `initial`, `ios`, `material`, `common`.
    pub fn from_json(json: &str) -> Result<Self, ClassSpecError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// One resolved class string per slot
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct ResolvedClasses {
    classes: BTreeMap<String, String>,
}

impl ResolvedClasses {
    /// Classes for `slot`, or an empty string if the spec had no such slot.
    pub fn get(&self, slot: &str) -> &str {
        self.classes.get(slot).map(String::as_str).unwrap_or("")
    }

    pub fn contains(&self, slot: &str) -> bool {
        self.classes.contains_key(slot)
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.classes
            .iter()
            .map(|(slot, classes)| (slot.as_str(), classes.as_str()))
    }
}

impl Index<&str> for ResolvedClasses {
    type Output = str;

    fn index(&self, slot: &str) -> &str {
        self.get(slot)
    }
}

/// Resolve every slot of `spec` for `selector`.
pub fn resolve(selector: ThemeSelector, spec: &ClassSpec) -> ResolvedClasses {
    resolve_with_base_class(selector, spec, None)
}

/// Like [`resolve`], but appends `base_class` to the [`BASE_SLOT`] slot, after `common`.
pub fn resolve_with_base_class(
    selector: ThemeSelector,
    spec: &ClassSpec,
    base_class: Option<&str>,
) -> ResolvedClasses {
    if selector.is_ambiguous() {
        trace!("both ios and material flags set, applying ios classes");
    }

    let classes = spec
        .slots
        .iter()
        .map(|(name, slot)| {
            let resolved = slot.resolve(selector);
            let resolved = match base_class {
                Some(extra) if name == BASE_SLOT => merge([Some(resolved.as_str()), Some(extra)]),
                _ => resolved,
            };
            (name.clone(), resolved)
        })
        .collect();

    ResolvedClasses { classes }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block_spec() -> ClassSpec {
        ClassSpec::new().slot(
            "base",
            SlotSpec::new("px-4 mt-8")
                .ios("font-semibold")
                .material("font-medium"),
        )
    }

    #[test]
    fn theme_from_str() {
        assert_eq!("ios".parse::<Theme>(), Ok(Theme::Ios));
        assert_eq!(" Material ".parse::<Theme>(), Ok(Theme::Material));
        assert_eq!(
            "android".parse::<Theme>(),
            Err(ThemeParseError::Unknown("android".to_string()))
        );
    }

    #[test]
    fn theme_display_matches_parse() {
        for theme in Theme::ALL {
            assert_eq!(theme.to_string().parse::<Theme>(), Ok(theme));
        }
    }

    #[test]
    fn selector_active() {
        assert_eq!(ThemeSelector::ios().active(), Some(Theme::Ios));
        assert_eq!(ThemeSelector::material().active(), Some(Theme::Material));
        assert_eq!(ThemeSelector::NEUTRAL.active(), None);
        let both = ThemeSelector {
            ios: true,
            material: true,
        };
        assert!(both.is_ambiguous());
        assert_eq!(both.active(), Some(Theme::Ios));
    }

    #[test]
    fn selector_from_theme() {
        assert_eq!(ThemeSelector::from(Theme::Material), ThemeSelector::material());
        assert_eq!(ThemeSelector::from(None::<Theme>), ThemeSelector::NEUTRAL);
    }

    #[test]
    fn resolve_ios() {
        let resolved = resolve(ThemeSelector::ios(), &block_spec());
        assert_eq!(&resolved["base"], "px-4 mt-8 font-semibold");
    }

    #[test]
    fn resolve_material() {
        let resolved = resolve(ThemeSelector::material(), &block_spec());
        assert_eq!(resolved.get("base"), "px-4 mt-8 font-medium");
    }

    #[test]
    fn common_always_last() {
        let spec = ClassSpec::new().slot(
            "base",
            SlotSpec::new("a").ios("b").material("c").common("d"),
        );
        assert_eq!(resolve(ThemeSelector::ios(), &spec).get("base"), "a b d");
        assert_eq!(resolve(ThemeSelector::material(), &spec).get("base"), "a c d");
        assert_eq!(resolve(ThemeSelector::NEUTRAL, &spec).get("base"), "a d");
    }

    #[test]
    fn empty_spec() {
        let resolved = resolve(ThemeSelector::ios(), &ClassSpec::new());
        assert!(resolved.is_empty());
        assert_eq!(resolved.get("base"), "");
        assert!(!resolved.contains("base"));
    }

    #[test]
    fn empty_fields_leave_no_gaps() {
        let spec = ClassSpec::new()
            .slot("only_common", SlotSpec::default().common("x"))
            .slot("only_theme", SlotSpec::default().material("y"))
            .slot("blank", SlotSpec::default());
        let resolved = resolve(ThemeSelector::material(), &spec);
        assert_eq!(resolved.get("only_common"), "x");
        assert_eq!(resolved.get("only_theme"), "y");
        assert_eq!(resolved.get("blank"), "");
        assert!(resolved.contains("blank"));
    }

    #[test]
    fn plain_string_slot_ignores_theme() {
        let spec = ClassSpec::new().slot("inner", "flex");
        for selector in [ThemeSelector::ios(), ThemeSelector::material()] {
            assert_eq!(resolve(selector, &spec).get("inner"), "flex");
        }
    }

    #[test]
    fn base_class_only_touches_base() {
        let spec = block_spec().slot("label", "text-sm");
        let resolved = resolve_with_base_class(ThemeSelector::ios(), &spec, Some("my-title"));
        assert_eq!(resolved.get("base"), "px-4 mt-8 font-semibold my-title");
        assert_eq!(resolved.get("label"), "text-sm");
    }

    #[test]
    fn empty_base_class_is_noop() {
        let spec = block_spec();
        assert_eq!(
            resolve_with_base_class(ThemeSelector::ios(), &spec, Some("")),
            resolve(ThemeSelector::ios(), &spec)
        );
    }

    #[test]
    fn from_json_accepts_plain_and_themed_slots() {
        let spec = ClassSpec::from_json(
            r#"{
                "base": { "initial": "px-4", "ios": "font-semibold" },
                "inner": "flex"
            }"#,
        )
        .unwrap();
        assert_eq!(spec.len(), 2);
        assert_eq!(spec.get("base"), Some(&SlotSpec::new("px-4").ios("font-semibold")));
        assert_eq!(spec.get("inner"), Some(&SlotSpec::new("flex")));
    }

    #[test]
    fn from_json_rejects_garbage() {
        assert!(matches!(
            ClassSpec::from_json("[1, 2]"),
            Err(ClassSpecError::Json(_))
        ));
    }
}
