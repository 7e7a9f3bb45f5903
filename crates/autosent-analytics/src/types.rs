use autosent_core::SentimentCategory;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Number of records per sentiment category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentCounts {
    #[serde(rename = "Very Positive")]
    pub very_positive: u64,
    #[serde(rename = "Positive")]
    pub positive: u64,
    #[serde(rename = "Neutral")]
    pub neutral: u64,
    #[serde(rename = "Negative")]
    pub negative: u64,
    #[serde(rename = "Very Negative")]
    pub very_negative: u64,
}

impl SentimentCounts {
    pub fn increment(&mut self, category: SentimentCategory) {
        *self.slot(category) += 1;
    }

    #[must_use]
    pub fn get(&self, category: SentimentCategory) -> u64 {
        match category {
            SentimentCategory::VeryPositive => self.very_positive,
            SentimentCategory::Positive => self.positive,
            SentimentCategory::Neutral => self.neutral,
            SentimentCategory::Negative => self.negative,
            SentimentCategory::VeryNegative => self.very_negative,
        }
    }

    #[must_use]
    pub fn total(&self) -> u64 {
        SentimentCategory::ALL.iter().map(|c| self.get(*c)).sum()
    }

    fn slot(&mut self, category: SentimentCategory) -> &mut u64 {
        match category {
            SentimentCategory::VeryPositive => &mut self.very_positive,
            SentimentCategory::Positive => &mut self.positive,
            SentimentCategory::Neutral => &mut self.neutral,
            SentimentCategory::Negative => &mut self.negative,
            SentimentCategory::VeryNegative => &mut self.very_negative,
        }
    }
}

/// Sentiment counts for one `(model, category)` pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelCategoryRow {
    pub model: String,
    pub category: String,
    pub counts: SentimentCounts,
    pub total: u64,
}

/// Sentiment counts for one `(date, category)` pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DateCategoryRow {
    pub date: NaiveDate,
    pub category: String,
    pub counts: SentimentCounts,
    pub total: u64,
}

/// Mean critical ranking of one feature within a sign bucket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureRanking {
    pub feature: String,
    pub count: u64,
    pub average_ranking: f64,
}

/// Top positive and negative features for a single model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelFeatureRanking {
    pub model: String,
    /// Highest average first, at most three entries.
    pub positive_features: Vec<FeatureRanking>,
    /// Most negative average first, at most three entries.
    pub negative_features: Vec<FeatureRanking>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentShare {
    pub category: SentimentCategory,
    pub count: u64,
    /// Share of the total in percent, `0.0` when there are no records.
    pub percentage: f64,
}

/// Overall sentiment distribution of a record set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentBreakdown {
    pub total: u64,
    pub counts: SentimentCounts,
    /// One entry per category, most positive first.
    pub shares: Vec<SentimentShare>,
}

/// Mean counts per sentiment category over a trailing window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SentimentAverages {
    #[serde(rename = "Very Positive")]
    pub very_positive: f64,
    #[serde(rename = "Positive")]
    pub positive: f64,
    #[serde(rename = "Neutral")]
    pub neutral: f64,
    #[serde(rename = "Negative")]
    pub negative: f64,
    #[serde(rename = "Very Negative")]
    pub very_negative: f64,
}

impl SentimentAverages {
    #[must_use]
    pub fn get(&self, category: SentimentCategory) -> f64 {
        match category {
            SentimentCategory::VeryPositive => self.very_positive,
            SentimentCategory::Positive => self.positive,
            SentimentCategory::Neutral => self.neutral,
            SentimentCategory::Negative => self.negative,
            SentimentCategory::VeryNegative => self.very_negative,
        }
    }
}

/// One smoothed point of the per-category time series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovingAveragePoint {
    pub date: NaiveDate,
    pub category: String,
    pub averages: SentimentAverages,
}
