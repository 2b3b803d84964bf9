//! Title screen settings menu.

pub mod settings;

pub use settings::{MenuOption, SettingsMenu};
