//! Sentiment count aggregations backing the dashboard charts.

use std::collections::HashMap;

use autosent_core::{FeedbackRecord, SentimentCategory};
use chrono::NaiveDate;

use crate::types::{
    DateCategoryRow, ModelCategoryRow, SentimentBreakdown, SentimentCounts, SentimentShare,
};

/// Group key used for a missing model or category.
pub const UNKNOWN: &str = "Unknown";

/// Category pinned to the front of every chart.
pub const PRICE_CATEGORY: &str = "Price";

fn key_or_unknown(value: Option<&str>) -> String {
    value.unwrap_or(UNKNOWN).to_string()
}

/// Counts per key in first-seen order.
fn group_counts<'a, K, I, F>(records: I, key_of: F) -> Vec<(K, SentimentCounts)>
where
    K: Eq + std::hash::Hash + Clone,
    I: IntoIterator<Item = &'a FeedbackRecord>,
    F: Fn(&FeedbackRecord) -> Option<K>,
{
    let mut positions: HashMap<K, usize> = HashMap::new();
    let mut groups: Vec<(K, SentimentCounts)> = Vec::new();

    for record in records {
        let Some(key) = key_of(record) else {
            continue;
        };
        let pos = *positions.entry(key.clone()).or_insert_with(|| {
            groups.push((key, SentimentCounts::default()));
            groups.len() - 1
        });
        groups[pos].1.increment(record.sentiment);
    }
    groups
}

/// Sentiment counts per `(model, category)`.
///
/// Rows in the `"Price"` category come first, then rows by descending
/// total. Ties keep the order in which the group was first seen.
pub fn aggregate_by_model_and_category<'a, I>(records: I) -> Vec<ModelCategoryRow>
where
    I: IntoIterator<Item = &'a FeedbackRecord>,
{
    let mut rows: Vec<ModelCategoryRow> = group_counts(records, |r| {
        Some((
            key_or_unknown(r.model.as_deref()),
            key_or_unknown(r.category.as_deref()),
        ))
    })
    .into_iter()
    .map(|((model, category), counts)| ModelCategoryRow {
        model,
        category,
        total: counts.total(),
        counts,
    })
    .collect();

    rows.sort_by(|a, b| {
        let a_price = a.category == PRICE_CATEGORY;
        let b_price = b.category == PRICE_CATEGORY;
        b_price.cmp(&a_price).then(b.total.cmp(&a.total))
    });
    rows
}

/// Sentiment counts per `(date, category)`, ascending by date.
///
/// Records without a date are skipped. Within one date the `"Price"` row
/// comes first.
pub fn aggregate_by_date_and_category<'a, I>(records: I) -> Vec<DateCategoryRow>
where
    I: IntoIterator<Item = &'a FeedbackRecord>,
{
    let mut rows: Vec<DateCategoryRow> = group_counts(records, |r| {
        r.date
            .map(|date: NaiveDate| (date, key_or_unknown(r.category.as_deref())))
    })
    .into_iter()
    .map(|((date, category), counts)| DateCategoryRow {
        date,
        category,
        total: counts.total(),
        counts,
    })
    .collect();

    rows.sort_by(|a, b| {
        let a_price = a.category == PRICE_CATEGORY;
        let b_price = b.category == PRICE_CATEGORY;
        a.date.cmp(&b.date).then(b_price.cmp(&a_price))
    });
    rows
}

/// Distribution of records across the five sentiment categories.
pub fn sentiment_breakdown<'a, I>(records: I) -> SentimentBreakdown
where
    I: IntoIterator<Item = &'a FeedbackRecord>,
{
    let mut counts = SentimentCounts::default();
    for record in records {
        counts.increment(record.sentiment);
    }
    let total = counts.total();

    let shares = SentimentCategory::ALL
        .iter()
        .map(|&category| {
            let count = counts.get(category);
            #[allow(clippy::cast_precision_loss)]
            let percentage = if total == 0 {
                0.0
            } else {
                count as f64 / total as f64 * 100.0
            };
            SentimentShare {
                category,
                count,
                percentage,
            }
        })
        .collect();

    SentimentBreakdown {
        total,
        counts,
        shares,
    }
}
