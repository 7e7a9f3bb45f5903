use autosent_analytics::{filter_records, FilterInput};
use autosent_core::{FeedbackRecord, FilterState};
use serde::Deserialize;

use super::{ApiError, AppState};

/// Filter parameters shared by every dashboard endpoint.
///
/// List dimensions are comma-separated; dates are `YYYY-MM-DD` or
/// `DD-MM-YYYY`.
#[derive(Debug, Default, Deserialize)]
pub(super) struct FilterQuery {
    pub brands: Option<String>,
    pub models: Option<String>,
    pub features: Option<String>,
    pub sentiments: Option<String>,
    pub sources: Option<String>,
    pub categories: Option<String>,
    pub countries: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
}

impl FilterQuery {
    pub(super) fn into_state(self, request_id: &str) -> Result<FilterState, ApiError> {
        let input = FilterInput {
            brands: self.brands,
            models: self.models,
            features: self.features,
            sentiments: self.sentiments,
            sources: self.sources,
            categories: self.categories,
            countries: self.countries,
            from: self.from,
            to: self.to,
        };
        input
            .build()
            .map_err(|e| ApiError::new(request_id, "bad_request", e.to_string()))
    }
}

pub(super) fn filtered<'a>(state: &'a AppState, filters: &FilterState) -> Vec<&'a FeedbackRecord> {
    filter_records(state.dataset.records(), filters)
}
