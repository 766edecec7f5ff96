use sft_core::domain::{seed_records, RecordDraft, ThemePreference};
use sft_core::report;
use sft_core::session::Session;
use sft_core::storage::{keys, KeyValueStore, MemoryStore};
use sft_core::store::{CategoryRegistry, RecordStore};

fn coffee_draft() -> RecordDraft {
    RecordDraft {
        date: "2025-09-09".into(),
        description: "Coffee".into(),
        category: "Food".into(),
        amount: "2.50".into(),
    }
}

#[test]
fn seed_then_append_produces_the_expected_aggregates() {
    let session = Session::new(MemoryStore::new());
    session.bootstrap().unwrap();
    session.append_record(&coffee_draft()).unwrap();

    let records = session.records();
    assert_eq!(records.len(), 5);

    let totals = report::totals_by_category(&records);
    let food = totals
        .iter()
        .find(|bucket| bucket.category == "Food")
        .expect("Food bucket");
    assert!((food.total - 453.25).abs() < 1e-9);

    let grand = report::grand_total(&records);
    assert!((grand - 40453.75).abs() < 1e-9);
    let avg = report::average(&records);
    assert!((avg - grand / 5.0).abs() < 1e-9);
}

#[test]
fn deleting_a_category_leaves_records_dangling_but_aggregated() {
    let session = Session::new(MemoryStore::new());
    session.bootstrap().unwrap();

    // "Food" is index 0 of the default registry.
    assert!(session.remove_category_at(0).unwrap());
    assert!(!session.categories().iter().any(|c| c == "Food"));

    // The seeded lunch record still reports the removed name and still
    // buckets under it.
    let records = session.records();
    assert!(records.iter().any(|r| r.category == "Food"));
    let totals = report::totals_by_category(&records);
    assert!(totals.iter().any(|bucket| bucket.category == "Food"));
}

#[test]
fn delete_all_data_removes_exactly_the_application_keys() {
    let kv = MemoryStore::new();
    kv.set("someone-elses-key", "survives").unwrap();
    let mut session = Session::new(kv);
    session.bootstrap().unwrap();
    session.add_category("Rent").unwrap();
    session.save_theme(ThemePreference::Light).unwrap();
    session.set_filter("Food");

    session.delete_all_data(false).unwrap();

    assert_eq!(session.active_filter(), None);
    assert!(session.records().is_empty());
    assert_eq!(
        session.store().get("someone-elses-key"),
        Some("survives".into())
    );
    for key in keys::ALL {
        assert!(!session.store().contains_key(key), "{key} should be gone");
    }
    // Registry and theme read as defaults again.
    assert_eq!(session.categories().len(), 6);
    assert_eq!(session.theme(), ThemePreference::Dark);
}

#[test]
fn delete_all_data_can_reseed_the_demo_records() {
    let mut session = Session::new(MemoryStore::new());
    session.bootstrap().unwrap();
    session.append_record(&coffee_draft()).unwrap();

    session.delete_all_data(true).unwrap();

    assert_eq!(session.records(), seed_records());
}

#[test]
fn filtered_summary_reflects_only_the_selected_category() {
    let mut session = Session::new(MemoryStore::new());
    session.bootstrap().unwrap();
    session.append_record(&coffee_draft()).unwrap();

    session.set_filter("Food");
    let summary = session.summary();
    assert_eq!(summary.totals.len(), 1);
    assert_eq!(summary.totals[0].category, "Food");
    assert!((summary.grand_total - 453.25).abs() < 1e-9);
    assert!((summary.average - 453.25 / 2.0).abs() < 1e-9);

    session.clear_filter();
    let unfiltered = session.summary();
    assert_eq!(unfiltered.totals.len(), 4);
    assert!((unfiltered.grand_total - 40453.75).abs() < 1e-9);
}

#[test]
fn positional_delete_uses_the_current_snapshot_while_name_delete_is_stable() {
    let kv = MemoryStore::new();
    // Render captured ["Food", "Books", ...]; index 1 means "Books".
    let stale_index = 1;
    // The registry changes before the positional delete lands.
    CategoryRegistry::remove_at(&kv, 0).unwrap();
    CategoryRegistry::remove_at(&kv, stale_index).unwrap();
    let after_positional = CategoryRegistry::load(&kv);
    // "Books" survived; "Transport" was removed instead.
    assert!(after_positional.iter().any(|c| c == "Books"));
    assert!(!after_positional.iter().any(|c| c == "Transport"));

    // Name-keyed delete hits the intended entry regardless of reordering.
    let kv = MemoryStore::new();
    CategoryRegistry::remove(&kv, "Food").unwrap();
    CategoryRegistry::remove(&kv, "Books").unwrap();
    let after_named = CategoryRegistry::load(&kv);
    assert!(!after_named.iter().any(|c| c == "Books"));
    assert!(after_named.iter().any(|c| c == "Transport"));
}

#[test]
fn appended_records_keep_unique_ids_across_a_session() {
    let session = Session::new(MemoryStore::new());
    for _ in 0..25 {
        session.append_record(&coffee_draft()).unwrap();
    }
    let records = RecordStore::load(session.store());
    let mut ids: Vec<&str> = records.iter().map(|r| r.id.as_str()).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 25);
}
