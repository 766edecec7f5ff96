pub mod record;
pub mod seed;
pub mod settings;

pub use record::{Record, RecordDraft};
pub use seed::seed_records;
pub use settings::{Settings, ThemePreference};
