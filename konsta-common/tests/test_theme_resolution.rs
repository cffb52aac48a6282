use konsta_common::{cls, merge, resolve, ClassSpec, SlotSpec, ThemeSelector};

const SELECTORS: [ThemeSelector; 4] = [
    ThemeSelector {
        ios: false,
        material: false,
    },
    ThemeSelector {
        ios: true,
        material: false,
    },
    ThemeSelector {
        ios: false,
        material: true,
    },
    ThemeSelector {
        ios: true,
        material: true,
    },
];

fn link_like_spec() -> ClassSpec {
    ClassSpec::new()
        .slot(
            "base",
            SlotSpec::new("text-primary inline-flex")
                .ios("active:opacity-30")
                .material("active:opacity-55")
                .common("ios:duration-300"),
        )
        .slot("toolbar", SlotSpec::new("h-full max-h-12").material("p-x-3"))
        .slot("navbar", SlotSpec::new("h-full max-h-12").material("p-x-3"))
        .slot("sparse", SlotSpec::new("  ").ios("").common(" x "))
}

fn block_title_spec() -> ClassSpec {
    ClassSpec::new().slot(
        "base",
        SlotSpec::new("px-4 mt-8")
            .ios("font-semibold")
            .material("font-medium")
            .common(""),
    )
}

fn assert_clean(classes: &str) {
    assert_eq!(classes, classes.trim(), "stray outer whitespace in {classes:?}");
    assert!(!classes.contains("  "), "doubled whitespace in {classes:?}");
}

#[test]
fn resolution_is_deterministic() {
    let spec = link_like_spec();
    for selector in SELECTORS {
        assert_eq!(resolve(selector, &spec), resolve(selector, &spec));
    }
}

#[test]
fn resolved_strings_have_no_stray_whitespace() {
    let spec = link_like_spec();
    for selector in SELECTORS {
        for (_, classes) in resolve(selector, &spec).iter() {
            assert_clean(classes);
        }
    }
}

#[test]
fn fragments_keep_initial_theme_common_order() {
    let spec = link_like_spec();
    let base = resolve(ThemeSelector::ios(), &spec);
    let base = base.get("base");
    let initial = base.find("inline-flex").unwrap();
    let themed = base.find("active:opacity-30").unwrap();
    let common = base.find("ios:duration-300").unwrap();
    assert!(initial < themed && themed < common);
}

#[test]
fn ios_wins_when_both_flags_set() {
    let spec = link_like_spec();
    let both = ThemeSelector {
        ios: true,
        material: true,
    };
    assert_eq!(resolve(both, &spec), resolve(ThemeSelector::ios(), &spec));
}

#[test]
fn neutral_selector_emits_initial_and_common_only() {
    let spec = link_like_spec();
    let resolved = resolve(ThemeSelector::NEUTRAL, &spec);
    assert_eq!(resolved.get("base"), "text-primary inline-flex ios:duration-300");
    assert_eq!(resolved.get("toolbar"), "h-full max-h-12");
    assert_eq!(resolved.get("sparse"), "x");
}

#[test]
fn every_slot_is_resolved_including_unknown_names() {
    let spec = link_like_spec().slot("some-custom-slot", "custom");
    let resolved = resolve(ThemeSelector::material(), &spec);
    assert_eq!(resolved.len(), spec.len());
    assert_eq!(resolved.get("some-custom-slot"), "custom");
}

#[test]
fn block_title_scenario_ios() {
    let resolved = resolve(ThemeSelector::ios(), &block_title_spec());
    assert_eq!(resolved.get("base"), "px-4 mt-8 font-semibold");
}

#[test]
fn block_title_scenario_material() {
    let resolved = resolve(ThemeSelector::material(), &block_title_spec());
    assert_eq!(resolved.get("base"), "px-4 mt-8 font-medium");
}

#[test]
fn merge_laws() {
    assert_eq!(merge(Vec::<Option<&str>>::new()), "");
    assert_eq!(merge([None, None, None]), "");
    assert_eq!(merge([Some("a"), None, Some("b")]), "a b");
}

#[test]
fn merge_with_no_extras_returns_base_unchanged() {
    let resolved = resolve(ThemeSelector::ios(), &block_title_spec());
    let conditional_flag = false;
    let caller_class: Option<&str> = None;
    let classes = cls!(
        resolved.get("base"),
        conditional_flag.then_some("extra-class"),
        caller_class
    );
    assert_eq!(classes, resolved.get("base"));
}
