//! Normalization from upstream [`RawFeedbackRecord`]s to [`FeedbackRecord`].
//!
//! Fields are coerced one at a time. A value that cannot be interpreted is
//! dropped to `None` rather than rejecting the whole record, so a malformed
//! date only removes the record from date-based views.

use autosent_core::{FeedbackRecord, RawFeedbackRecord, SentimentCategory};
use chrono::NaiveDate;
use serde_json::Value;

use crate::classify::classify;

/// Model names that upstream uses as placeholders rather than real models.
const NOISE_MODELS: &[&str] = &["Unknown", "Climate Control"];

/// Normalizes one upstream row; `index` is its position in the raw dataset.
#[must_use]
pub fn normalize_record(index: usize, raw: &RawFeedbackRecord) -> FeedbackRecord {
    let sentiment_label = value_text(raw.sentiment_label.as_ref());
    let sentiment = classify(sentiment_label.as_deref());

    FeedbackRecord {
        index,
        brand: value_text(raw.brand.as_ref()),
        model: value_text(raw.model.as_ref()),
        feature: value_text(raw.feature.as_ref()),
        sentiment_label,
        sentiment,
        source: value_text(raw.source.as_ref()),
        country: value_text(raw.country.as_ref()),
        date: value_text(raw.date.as_ref()).and_then(|d| parse_date(&d)),
        feedback_text: value_text(raw.feedback_text.as_ref()),
        summary_text: value_text(raw.summary_text.as_ref()),
        critical_ranking: raw.critical_ranking.as_ref().and_then(parse_ranking),
        category: value_text(raw.category.as_ref()),
        segment: value_text(raw.segment.as_ref()),
    }
}

/// Renders a loosely typed JSON value as trimmed text.
///
/// Numbers and booleans become their JSON text; blank strings, `null`,
/// arrays and objects become `None`.
fn value_text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) => {
            let trimmed = s.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Parses a feedback date.
///
/// The dataset format is `DD-MM-YYYY`; ISO `YYYY-MM-DD` (optionally followed
/// by a time component) is accepted as well.
#[must_use]
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%d-%m-%Y") {
        return Some(date);
    }
    let date_part = raw.split(['T', ' ']).next().unwrap_or(raw);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}

/// Parses a critical ranking from a JSON number or numeric string.
///
/// Non-numeric text such as `"N/A"` and non-finite values yield `None`.
fn parse_ranking(value: &Value) -> Option<f64> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }?;
    parsed.is_finite().then_some(parsed)
}

/// Case-insensitive equality under full Unicode lowercasing.
#[must_use]
pub fn eq_ignore_case(a: &str, b: &str) -> bool {
    a == b || a.to_lowercase() == b.to_lowercase()
}

fn is_digits(value: &str) -> bool {
    !value.is_empty() && value.chars().all(|c| c.is_ascii_digit())
}

/// `true` for placeholder model names that must not appear in listings or rankings.
#[must_use]
pub fn is_noise_model(model: &str) -> bool {
    NOISE_MODELS.iter().any(|noise| model.contains(noise)) || is_digits(model)
}

/// `true` when a sentiment label leaked into the brand column.
#[must_use]
pub fn is_noise_brand(brand: &str) -> bool {
    SentimentCategory::ALL
        .iter()
        .any(|c| eq_ignore_case(c.label(), brand))
}

#[must_use]
pub fn is_noise_feature(feature: &str) -> bool {
    is_digits(feature)
}

/// `true` for numeric-looking sources such as `"1500000"`.
#[must_use]
pub fn is_noise_source(source: &str) -> bool {
    source.parse::<f64>().is_ok()
}
