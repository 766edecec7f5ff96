#![doc(test(attr(deny(warnings))))]

//! Core state and aggregation engine for a single-user finance log: three
//! write-through stores (settings, categories, records) over a string
//! key-value backend, plus pure per-category summary functions and
//! locale-aware amount formatting for display.

pub mod currency;
pub mod domain;
pub mod errors;
pub mod report;
pub mod session;
pub mod storage;
pub mod store;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        init_tracing();
        tracing::info!("sft_core tracing initialized.");
    });
}

fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::from_default_env().add_directive("sft_core=info".parse().unwrap());

    fmt().with_env_filter(filter).init();
}
