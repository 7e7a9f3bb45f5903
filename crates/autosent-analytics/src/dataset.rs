use autosent_core::{FeedbackRecord, RawFeedbackRecord};
use serde::Deserialize;

use crate::error::AnalyticsError;
use crate::normalize::normalize_record;

/// The normalized feedback dataset, built once and shared read-only.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    records: Vec<FeedbackRecord>,
}

/// Payload shapes accepted when loading a dataset from JSON.
#[derive(Deserialize)]
#[serde(untagged)]
enum Payload {
    Bare(Vec<RawFeedbackRecord>),
    Wrapped { data: Vec<RawFeedbackRecord> },
}

impl Dataset {
    /// Normalizes raw rows, assigning each its position as `index`.
    #[must_use]
    pub fn from_raw(raw: &[RawFeedbackRecord]) -> Self {
        let records: Vec<FeedbackRecord> = raw
            .iter()
            .enumerate()
            .map(|(index, row)| normalize_record(index, row))
            .collect();

        let undated = records.iter().filter(|r| r.date.is_none()).count();
        let unranked = records
            .iter()
            .filter(|r| r.critical_ranking.is_none())
            .count();
        tracing::debug!(
            records = records.len(),
            undated,
            unranked,
            "normalized feedback dataset"
        );

        Self { records }
    }

    /// Parses a JSON array of raw rows, or an object wrapping one in `data`.
    ///
    /// # Errors
    ///
    /// Returns [`AnalyticsError::Json`] if the payload is neither shape.
    pub fn from_json(json: &str) -> Result<Self, AnalyticsError> {
        let raw = match serde_json::from_str::<Payload>(json)? {
            Payload::Bare(rows) | Payload::Wrapped { data: rows } => rows,
        };
        Ok(Self::from_raw(&raw))
    }

    /// Wraps records that are already normalized.
    #[must_use]
    pub fn from_records(records: Vec<FeedbackRecord>) -> Self {
        Self { records }
    }

    #[must_use]
    pub fn records(&self) -> &[FeedbackRecord] {
        &self.records
    }

    /// Looks up a record by its position in the raw dataset.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&FeedbackRecord> {
        self.records.get(index).filter(|r| r.index == index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
