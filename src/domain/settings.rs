//! Display preferences: currency, number format, and theme.

use serde::{Deserialize, Serialize};

const CURRENT_SCHEMA_VERSION: u8 = 1;

/// Singleton display preferences, overwritten wholesale on every change.
///
/// `currency` and `format` are carried as free strings: whatever the caller
/// stored round-trips unchanged, and unknown values are only interpreted at
/// display time (unknown currency renders with no symbol, unknown format
/// falls back to the `us` locale). Missing fields in persisted data take the
/// defaults below.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    pub currency: String,
    pub format: String,
    pub schema_version: u8,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            currency: "RWF".into(),
            format: "us".into(),
            schema_version: CURRENT_SCHEMA_VERSION,
        }
    }
}

/// UI theme preference, persisted as a bare string (`dark` / `light`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemePreference {
    #[default]
    Dark,
    Light,
}

impl ThemePreference {
    pub fn as_str(self) -> &'static str {
        match self {
            ThemePreference::Dark => "dark",
            ThemePreference::Light => "light",
        }
    }

    /// Unknown tags fall back to the dark default.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "light" => ThemePreference::Light,
            _ => ThemePreference::Dark,
        }
    }
}
