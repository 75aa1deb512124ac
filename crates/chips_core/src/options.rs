//! Behavioural options for chip input consumers.
//!
//! Styling (colors, typeface, icons) stays with the host toolkit; only
//! switches that change what the core-facing controllers do live here.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Options consumed by `ChipsInput` and `SelectedChipsView`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChipOptions {
    /// Clicking a token expands its details.
    pub show_details: bool,
    /// Expanded details carry the avatar location.
    pub show_avatar: bool,
    /// Expanded details offer a delete action.
    pub show_delete: bool,
    /// Free text submitted from the input becomes a custom chip.
    pub allow_custom_chips: bool,
    /// Selecting a candidate asks the host to hide the keyboard.
    pub hide_keyboard_on_chip_click: bool,
}

impl Default for ChipOptions {
    fn default() -> Self {
        Self {
            show_details: true,
            show_avatar: true,
            show_delete: true,
            allow_custom_chips: true,
            hide_keyboard_on_chip_click: true,
        }
    }
}

/// Configuration parse failure.
#[derive(Debug)]
pub enum OptionsError {
    Parse(serde_json::Error),
}

impl Display for OptionsError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(err) => write!(f, "invalid chip options: {err}"),
        }
    }
}

impl Error for OptionsError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Parse(err) => Some(err),
        }
    }
}

impl From<serde_json::Error> for OptionsError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}

impl ChipOptions {
    /// Parses a JSON object of overrides; missing keys keep their defaults.
    ///
    /// # Errors
    /// - Returns `Parse` for malformed JSON, wrong types or unknown keys.
    pub fn from_json_str(value: &str) -> Result<Self, OptionsError> {
        Ok(serde_json::from_str(value)?)
    }
}
