//! Pure aggregation over a record snapshot: no side effects, no persistence.

use crate::domain::record::Record;

/// One aggregation bucket: a category name and the summed amount of every
/// record carrying it.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    pub category: String,
    pub total: f64,
}

/// Sums amounts per category value. Bucket order is first-appearance order
/// among the input records, not the registry's order; dangling category
/// references bucket under their orphaned string like any other.
pub fn totals_by_category(records: &[Record]) -> Vec<CategoryTotal> {
    let mut buckets: Vec<CategoryTotal> = Vec::new();
    for record in records {
        match buckets
            .iter_mut()
            .find(|bucket| bucket.category == record.category)
        {
            Some(bucket) => bucket.total += record.amount,
            None => buckets.push(CategoryTotal {
                category: record.category.clone(),
                total: record.amount,
            }),
        }
    }
    buckets
}

/// Plain sum of every record's amount, regardless of grouping.
pub fn grand_total(records: &[Record]) -> f64 {
    records.iter().map(|record| record.amount).sum()
}

/// Mean amount, defined as zero for an empty snapshot.
pub fn average(records: &[Record]) -> f64 {
    if records.is_empty() {
        0.0
    } else {
        grand_total(records) / records.len() as f64
    }
}

/// Identity when `category` is `None`; otherwise the order-preserving
/// subsequence whose category exactly equals the filter string.
pub fn filter_by_category(records: &[Record], category: Option<&str>) -> Vec<Record> {
    match category {
        None => records.to_vec(),
        Some(name) => records
            .iter()
            .filter(|record| record.category == name)
            .cloned()
            .collect(),
    }
}
