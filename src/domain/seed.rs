//! Static demo dataset copied into an empty record store exactly once.

use chrono::{DateTime, Utc};

use crate::domain::record::Record;

/// The fixed demo records. Seeding only ever happens when the store holds
/// zero records; values (ids included) are persisted verbatim.
pub fn seed_records() -> Vec<Record> {
    vec![
        seed_record(
            "rec_1",
            "2025-09-01",
            "Campus registration fee",
            "Fees",
            25000.0,
            "2025-09-01T08:00:00Z",
        ),
        seed_record(
            "rec_2",
            "2025-09-05",
            "Textbooks",
            "Books",
            12000.5,
            "2025-09-05T10:30:00Z",
        ),
        seed_record(
            "rec_3",
            "2025-09-07",
            "Bus pass",
            "Transport",
            3000.0,
            "2025-09-07T07:20:00Z",
        ),
        seed_record(
            "rec_4",
            "2025-09-08",
            "Lunch",
            "Food",
            450.75,
            "2025-09-08T12:15:00Z",
        ),
    ]
}

fn seed_record(
    id: &str,
    date: &str,
    description: &str,
    category: &str,
    amount: f64,
    stamp: &str,
) -> Record {
    let stamp: DateTime<Utc> = stamp.parse().expect("static seed timestamp");
    Record {
        id: id.into(),
        date: date.into(),
        description: description.into(),
        category: category.into(),
        amount,
        created_at: stamp,
        updated_at: stamp,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_has_four_records_with_unique_ids() {
        let seed = seed_records();
        assert_eq!(seed.len(), 4);
        for (i, record) in seed.iter().enumerate() {
            for other in &seed[i + 1..] {
                assert_ne!(record.id, other.id);
            }
            assert_eq!(record.created_at, record.updated_at);
        }
    }

    #[test]
    fn seed_amounts_sum_to_expected_total() {
        let total: f64 = seed_records().iter().map(|r| r.amount).sum();
        assert!((total - 40451.25).abs() < 1e-9);
    }
}
