//! konsta-ui - Mobile-styled view components
//!
//! Pure view components whose classes come from the theme resolver in
//! `konsta-common`. Each component takes its [`ThemeSelector`] as a prop;
//! the app decides the theme once and threads it down.

pub mod components;

pub use components::*;
pub use konsta_common::{Theme, ThemeSelector};
