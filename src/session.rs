//! Session-scoped application context.
//!
//! Replaces the ambient globals of the original UI glue: the backing store
//! is an explicit injected dependency and the active category filter lives
//! here, scoped to the session. The filter is never persisted; a new session
//! always starts unfiltered.

use crate::currency::{currency_symbol, format_amount};
use crate::domain::record::{Record, RecordDraft};
use crate::domain::seed::seed_records;
use crate::domain::settings::{Settings, ThemePreference};
use crate::errors::{AppendError, StoreError};
use crate::report::{self, CategoryTotal};
use crate::storage::{keys, KeyValueStore};
use crate::store::{CategoryRegistry, RecordStore, SettingsStore};

/// Derived view over the visible record subset, recomputed on demand.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSummary {
    pub totals: Vec<CategoryTotal>,
    pub grand_total: f64,
    pub average: f64,
}

pub struct Session<S: KeyValueStore> {
    kv: S,
    filter: Option<String>,
}

impl<S: KeyValueStore> Session<S> {
    pub fn new(kv: S) -> Self {
        Self { kv, filter: None }
    }

    /// Seeds the demo records if the store is empty. Called once at startup.
    pub fn bootstrap(&self) -> Result<(), StoreError> {
        RecordStore::seed_if_empty(&self.kv, &seed_records())?;
        Ok(())
    }

    pub fn store(&self) -> &S {
        &self.kv
    }

    // --- active filter -----------------------------------------------------

    pub fn active_filter(&self) -> Option<&str> {
        self.filter.as_deref()
    }

    pub fn set_filter(&mut self, category: impl Into<String>) {
        self.filter = Some(category.into());
    }

    pub fn clear_filter(&mut self) {
        self.filter = None;
    }

    // --- derived views -----------------------------------------------------

    /// Records visible under the active filter, in insertion order.
    pub fn visible_records(&self) -> Vec<Record> {
        let records = RecordStore::load(&self.kv);
        report::filter_by_category(&records, self.filter.as_deref())
    }

    /// Totals, grand total, and average over the visible subset; setting a
    /// filter changes the displayed numbers along with the table.
    pub fn summary(&self) -> SessionSummary {
        let visible = self.visible_records();
        SessionSummary {
            totals: report::totals_by_category(&visible),
            grand_total: report::grand_total(&visible),
            average: report::average(&visible),
        }
    }

    /// Renders an amount with the persisted currency symbol and number
    /// format, e.g. `rwf 450.75` or `€1.234,50`.
    pub fn display_amount(&self, amount: f64) -> String {
        let settings = self.settings();
        format!(
            "{}{}",
            currency_symbol(&settings.currency),
            format_amount(amount, &settings.format)
        )
    }

    // --- store passthroughs ------------------------------------------------

    pub fn settings(&self) -> Settings {
        SettingsStore::load(&self.kv)
    }

    pub fn save_settings(&self, settings: &Settings) -> Result<(), StoreError> {
        SettingsStore::save(&self.kv, settings)
    }

    pub fn theme(&self) -> ThemePreference {
        SettingsStore::load_theme(&self.kv)
    }

    pub fn save_theme(&self, theme: ThemePreference) -> Result<(), StoreError> {
        SettingsStore::save_theme(&self.kv, theme)
    }

    pub fn categories(&self) -> Vec<String> {
        CategoryRegistry::load(&self.kv)
    }

    pub fn add_category(&self, name: &str) -> Result<bool, StoreError> {
        CategoryRegistry::add(&self.kv, name)
    }

    pub fn remove_category_at(&self, index: usize) -> Result<bool, StoreError> {
        CategoryRegistry::remove_at(&self.kv, index)
    }

    pub fn remove_category(&self, name: &str) -> Result<bool, StoreError> {
        CategoryRegistry::remove(&self.kv, name)
    }

    pub fn records(&self) -> Vec<Record> {
        RecordStore::load(&self.kv)
    }

    pub fn append_record(&self, draft: &RecordDraft) -> Result<Record, AppendError> {
        RecordStore::append(&self.kv, draft)
    }

    // --- destructive maintenance -------------------------------------------

    /// Removes exactly the four application keys (anything else sharing the
    /// backing store is untouched), resets the active filter, and optionally
    /// re-seeds the demo records.
    pub fn delete_all_data(&mut self, reseed: bool) -> Result<(), StoreError> {
        for key in keys::ALL {
            self.kv.remove(key)?;
        }
        self.filter = None;
        if reseed {
            RecordStore::seed_if_empty(&self.kv, &seed_records())?;
        }
        tracing::info!(reseed, "cleared all saved data");
        Ok(())
    }
}
