#![allow(missing_docs)]
pub mod loader_context;
pub mod settings_context;

pub use loader_context::{LoaderContext, LoaderMessage};
pub use settings_context::{ScaleSlider, SettingsContext, SettingsEvent};
