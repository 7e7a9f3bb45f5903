//! Record lists behind chart drill-downs, plus paging and text shortening.

use autosent_core::{FeatureFocus, FeedbackRecord, Polarity};
use serde::Serialize;

use crate::normalize::eq_ignore_case;

/// Records shown per page on the model feedback view.
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// Records listed on the feature feedback view.
pub const DEFAULT_FEATURE_LIMIT: usize = 10;

/// Words kept by [`truncate_words`] on summary tables.
pub const SUMMARY_WORD_LIMIT: usize = 10;

/// Feedback for one model, optionally narrowed to a feature and polarity.
///
/// The model comparison ignores case. With a focus, only records of that
/// exact feature whose numeric ranking has the requested sign are kept.
pub fn model_feedback<'a, I>(
    records: I,
    model: &str,
    focus: Option<&FeatureFocus>,
) -> Vec<&'a FeedbackRecord>
where
    I: IntoIterator<Item = &'a FeedbackRecord>,
{
    records
        .into_iter()
        .filter(|r| {
            r.model
                .as_deref()
                .is_some_and(|m| eq_ignore_case(m, model))
        })
        .filter(|r| match focus {
            None => true,
            Some(focus) => {
                r.feature.as_deref() == Some(focus.feature.as_str())
                    && r.critical_ranking
                        .is_some_and(|ranking| Polarity::of(ranking) == focus.polarity)
            }
        })
        .collect()
}

/// The first `limit` records mentioning `feature`.
pub fn feature_feedback<'a, I>(records: I, feature: &str, limit: usize) -> Vec<&'a FeedbackRecord>
where
    I: IntoIterator<Item = &'a FeedbackRecord>,
{
    records
        .into_iter()
        .filter(|r| r.feature.as_deref() == Some(feature))
        .take(limit)
        .collect()
}

/// One page of a longer list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// 1-based, after clamping.
    pub page: usize,
    pub per_page: usize,
    pub total_items: usize,
    /// Always at least 1, even for an empty list.
    pub total_pages: usize,
}

/// Slices `items` into a 1-based page.
///
/// `page` is clamped into `1..=total_pages` and `per_page` is at least 1.
#[must_use]
pub fn paginate<T: Clone>(items: &[T], page: usize, per_page: usize) -> Page<T> {
    let per_page = per_page.max(1);
    let total_items = items.len();
    let total_pages = total_items.div_ceil(per_page).max(1);
    let page = page.clamp(1, total_pages);
    let start = (page - 1) * per_page;
    let end = (start + per_page).min(total_items);

    Page {
        items: items[start.min(end)..end].to_vec(),
        page,
        per_page,
        total_items,
        total_pages,
    }
}

/// Keeps the first `limit` words of `text`, appending `...` when cut.
#[must_use]
pub fn truncate_words(text: &str, limit: usize) -> String {
    let words: Vec<&str> = text.split_whitespace().collect();
    if words.len() > limit {
        format!("{}...", words[..limit].join(" "))
    } else {
        text.to_string()
    }
}
