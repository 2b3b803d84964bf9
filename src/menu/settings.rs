//! A wrapping vertical menu of fixed options.
//!
//! The menu only tracks the highlight. What a selection does (opening a
//! panel, calling `GameSession::start`) is up to the host.

use serde::{Deserialize, Serialize};

/// Entries of the settings menu, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MenuOption {
    Tutorial,
    Characters,
    CustomSettings,
    StartGame,
}

impl MenuOption {
    pub const ALL: [MenuOption; 4] = [
        MenuOption::Tutorial,
        MenuOption::Characters,
        MenuOption::CustomSettings,
        MenuOption::StartGame,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            MenuOption::Tutorial => "Tutorial",
            MenuOption::Characters => "Characters",
            MenuOption::CustomSettings => "Custom settings",
            MenuOption::StartGame => "Start game",
        }
    }
}

impl std::fmt::Display for MenuOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Highlight state of the settings menu.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingsMenu {
    selected: usize,
}

impl SettingsMenu {
    /// Menu with the first option highlighted.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn options(&self) -> &'static [MenuOption] {
        &MenuOption::ALL
    }

    #[must_use]
    pub fn selected_index(&self) -> usize {
        self.selected
    }

    #[must_use]
    pub fn selected(&self) -> MenuOption {
        MenuOption::ALL[self.selected]
    }

    /// Move the highlight by `delta` rows, wrapping at both ends.
    pub fn move_selection(&mut self, delta: i64) -> MenuOption {
        let len = MenuOption::ALL.len() as i64;
        self.selected = (self.selected as i64 + delta).rem_euclid(len) as usize;
        log::debug!("menu highlight on {}", self.selected());
        self.selected()
    }

    /// Activate the highlighted option.
    pub fn select(&self) -> MenuOption {
        let option = self.selected();
        log::info!("menu option selected: {}", option);
        option
    }
}
