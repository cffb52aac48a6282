//! konsta-common - Theme-aware class resolution shared by the konsta crates
//!
//! Pure functions only: no rendering, no I/O.

pub mod cls;
pub mod theme;

pub use cls::{merge, ClassFragment};
pub use theme::{
    resolve, resolve_with_base_class, ClassSpec, ClassSpecError, ResolvedClasses, SlotSpec, Theme,
    ThemeParseError, ThemeSelector, BASE_SLOT,
};
