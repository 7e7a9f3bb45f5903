use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::SentimentCategory;

/// A single customer feedback entry after normalization.
///
/// Every optional field has already been trimmed; empty upstream values are
/// `None`. Downstream code never needs to re-validate field presence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackRecord {
    /// Position of the record in the raw dataset.
    pub index: usize,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub feature: Option<String>,
    /// Raw sentiment text as supplied upstream (e.g. "Very Positive").
    pub sentiment_label: Option<String>,
    /// Classified bucket for `sentiment_label`.
    pub sentiment: SentimentCategory,
    pub source: Option<String>,
    pub country: Option<String>,
    pub date: Option<NaiveDate>,
    pub feedback_text: Option<String>,
    pub summary_text: Option<String>,
    /// Signed score; `None` when the upstream value was not numeric.
    pub critical_ranking: Option<f64>,
    pub category: Option<String>,
    pub segment: Option<String>,
}

impl FeedbackRecord {
    /// A record with only its index and a neutral sentiment set.
    #[must_use]
    pub fn empty(index: usize) -> Self {
        Self {
            index,
            brand: None,
            model: None,
            feature: None,
            sentiment_label: None,
            sentiment: SentimentCategory::Neutral,
            source: None,
            country: None,
            date: None,
            feedback_text: None,
            summary_text: None,
            critical_ranking: None,
            category: None,
            segment: None,
        }
    }
}

/// A feedback entry exactly as the data API returns it.
///
/// Upstream rows are loosely typed: any field may be missing, `null`, a
/// string or a number. The normalizer turns these into [`FeedbackRecord`]s.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawFeedbackRecord {
    #[serde(default)]
    pub brand: Option<Value>,
    #[serde(default)]
    pub model: Option<Value>,
    #[serde(default, rename = "Feature")]
    pub feature: Option<Value>,
    #[serde(default, rename = "fact")]
    pub sentiment_label: Option<Value>,
    #[serde(default)]
    pub source: Option<Value>,
    #[serde(default)]
    pub country: Option<Value>,
    #[serde(default)]
    pub date: Option<Value>,
    #[serde(default, rename = "feedback")]
    pub feedback_text: Option<Value>,
    #[serde(default, rename = "Summary")]
    pub summary_text: Option<Value>,
    #[serde(default, rename = "CriticalRanking")]
    pub critical_ranking: Option<Value>,
    #[serde(default)]
    pub category: Option<Value>,
    #[serde(default)]
    pub segment: Option<Value>,
}
