use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::CoreError;

/// The five fixed sentiment buckets every feedback record resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SentimentCategory {
    #[serde(rename = "Very Positive")]
    VeryPositive,
    Positive,
    Neutral,
    Negative,
    #[serde(rename = "Very Negative")]
    VeryNegative,
}

impl SentimentCategory {
    /// All categories, most positive first.
    pub const ALL: [SentimentCategory; 5] = [
        SentimentCategory::VeryPositive,
        SentimentCategory::Positive,
        SentimentCategory::Neutral,
        SentimentCategory::Negative,
        SentimentCategory::VeryNegative,
    ];

    /// Display label as it appears in the upstream dataset.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            SentimentCategory::VeryPositive => "Very Positive",
            SentimentCategory::Positive => "Positive",
            SentimentCategory::Neutral => "Neutral",
            SentimentCategory::Negative => "Negative",
            SentimentCategory::VeryNegative => "Very Negative",
        }
    }
}

impl std::fmt::Display for SentimentCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SentimentCategory {
    type Err = CoreError;

    /// Parses an exact label, ignoring case and surrounding whitespace.
    ///
    /// This is for user-supplied filter values; free-form upstream labels go
    /// through the classifier instead.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        SentimentCategory::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| CoreError::UnknownSentiment(s.to_string()))
    }
}
