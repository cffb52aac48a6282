//! Mock framework: typed controls, presets and the control panel
//!
//! - ControlRegistry: control values in signals, synced to the URL
//! - Preset: named control configurations
//! - MockPanel: control panel UI wrapped around the rendered component

mod panel;
mod preset;
mod registry;

pub use panel::MockPanel;
pub use preset::Preset;
pub use registry::{ControlDef, ControlRegistry, ControlRegistryBuilder, ControlValue};
