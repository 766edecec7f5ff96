use crate::domain::settings::{Settings, ThemePreference};
use crate::errors::StoreError;
use crate::storage::{keys, KeyValueStore};

use super::load_or_else;

/// Persistence for the display-preference singletons.
pub struct SettingsStore;

impl SettingsStore {
    /// Returns the persisted settings, or the `{RWF, us}` default when the
    /// entry is absent or malformed. The default is never written back.
    pub fn load(kv: &impl KeyValueStore) -> Settings {
        load_or_else(kv, keys::SETTINGS, Settings::default)
    }

    /// Serializes and overwrites the singleton key unconditionally.
    pub fn save(kv: &impl KeyValueStore, settings: &Settings) -> Result<(), StoreError> {
        let json = serde_json::to_string(settings)?;
        kv.set(keys::SETTINGS, &json)
    }

    /// Theme is stored as a bare tag, not JSON; unknown tags read as dark.
    pub fn load_theme(kv: &impl KeyValueStore) -> ThemePreference {
        kv.get(keys::THEME)
            .map(|raw| ThemePreference::from_tag(&raw))
            .unwrap_or_default()
    }

    pub fn save_theme(
        kv: &impl KeyValueStore,
        theme: ThemePreference,
    ) -> Result<(), StoreError> {
        kv.set(keys::THEME, theme.as_str())
    }
}
