//! Free-text sentiment label classification.

use autosent_core::SentimentCategory;

/// Substring rules, checked in order.
///
/// The "very" variants must come before their plain counterparts: every
/// "very positive" label also contains "positive".
const RULES: &[(&str, SentimentCategory)] = &[
    ("very positive", SentimentCategory::VeryPositive),
    ("very negative", SentimentCategory::VeryNegative),
    ("positive", SentimentCategory::Positive),
    ("negative", SentimentCategory::Negative),
    ("neutral", SentimentCategory::Neutral),
];

/// Classify a raw sentiment label into one of the five fixed categories.
///
/// Matching is a case-insensitive substring test. Missing, empty or
/// unrecognised labels resolve to [`SentimentCategory::Neutral`].
#[must_use]
pub fn classify(raw: Option<&str>) -> SentimentCategory {
    let Some(raw) = raw else {
        return SentimentCategory::Neutral;
    };
    let lower = raw.to_lowercase();
    RULES
        .iter()
        .find(|(needle, _)| lower.contains(needle))
        .map_or(SentimentCategory::Neutral, |&(_, category)| category)
}
