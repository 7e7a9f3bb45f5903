//! Record-level filter evaluation and parsing of filter input.

use autosent_core::{Dimension, FeedbackRecord, FilterAction, FilterState, SentimentCategory, Selection};

use crate::error::FilterParseError;
use crate::normalize::{eq_ignore_case, parse_date};

/// How a record value is compared against a selection.
#[derive(Clone, Copy)]
enum Compare {
    Exact,
    IgnoreCase,
}

fn selection_matches(selection: &Selection, value: Option<&str>, compare: Compare) -> bool {
    let Some(wanted) = selection.values() else {
        return true;
    };
    let Some(value) = value else {
        return false;
    };
    match compare {
        Compare::Exact => wanted.contains(value),
        Compare::IgnoreCase => wanted.iter().any(|w| eq_ignore_case(w, value)),
    }
}

/// `true` when `record` satisfies every active constraint in `filter`.
#[must_use]
pub fn matches(record: &FeedbackRecord, filter: &FilterState) -> bool {
    selection_matches(&filter.brands, record.brand.as_deref(), Compare::IgnoreCase)
        && selection_matches(&filter.models, record.model.as_deref(), Compare::IgnoreCase)
        && selection_matches(&filter.features, record.feature.as_deref(), Compare::Exact)
        && selection_matches(
            &filter.sentiments,
            Some(record.sentiment.label()),
            Compare::IgnoreCase,
        )
        && selection_matches(&filter.sources, record.source.as_deref(), Compare::Exact)
        && selection_matches(&filter.categories, record.category.as_deref(), Compare::Exact)
        && selection_matches(&filter.countries, record.country.as_deref(), Compare::Exact)
        && date_in_range(record, filter)
}

fn date_in_range(record: &FeedbackRecord, filter: &FilterState) -> bool {
    if filter.from_date.is_none() && filter.to_date.is_none() {
        return true;
    }
    let Some(date) = record.date else {
        return false;
    };
    filter.from_date.is_none_or(|from| date >= from) && filter.to_date.is_none_or(|to| date <= to)
}

/// Records that satisfy `filter`, in input order.
#[must_use]
pub fn filter_records<'a>(
    records: &'a [FeedbackRecord],
    filter: &FilterState,
) -> Vec<&'a FeedbackRecord> {
    if filter.is_unconstrained() {
        return records.iter().collect();
    }
    records.iter().filter(|r| matches(r, filter)).collect()
}

/// Unvalidated filter input as it arrives from a query string or CLI flags.
///
/// List dimensions are comma-separated; `None` or a blank value leaves the
/// dimension unconstrained.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterInput {
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

impl FilterInput {
    /// Validates the input and folds it into a [`FilterState`] through the reducer.
    ///
    /// Brands are applied before models so that an explicit model selection
    /// survives the brand reset.
    ///
    /// # Errors
    ///
    /// Returns [`FilterParseError`] for an unknown sentiment label or a date
    /// in neither supported format.
    pub fn build(&self) -> Result<FilterState, FilterParseError> {
        let sentiments = csv_values(self.sentiments.as_deref())
            .into_iter()
            .map(|label| {
                label
                    .parse::<SentimentCategory>()
                    .map(|c| c.label().to_string())
                    .map_err(|_| FilterParseError::UnknownSentiment(label))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let from = optional_date("from", self.from.as_deref())?;
        let to = optional_date("to", self.to.as_deref())?;

        let lists = [
            (Dimension::Brands, csv_values(self.brands.as_deref())),
            (Dimension::Models, csv_values(self.models.as_deref())),
            (Dimension::Features, csv_values(self.features.as_deref())),
            (Dimension::Sentiments, sentiments),
            (Dimension::Sources, csv_values(self.sources.as_deref())),
            (Dimension::Categories, csv_values(self.categories.as_deref())),
            (Dimension::Countries, csv_values(self.countries.as_deref())),
        ];

        let state = lists
            .into_iter()
            .fold(FilterState::default(), |state, (dimension, values)| {
                state.apply(FilterAction::Replace { dimension, values })
            })
            .apply(FilterAction::SetDateRange { from, to });
        Ok(state)
    }
}

fn csv_values(raw: Option<&str>) -> Vec<String> {
    raw.map(|s| {
        s.split(',')
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(String::from)
            .collect()
    })
    .unwrap_or_default()
}

fn optional_date(
    field: &'static str,
    raw: Option<&str>,
) -> Result<Option<chrono::NaiveDate>, FilterParseError> {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        None => Ok(None),
        Some(value) => parse_date(value)
            .map(Some)
            .ok_or_else(|| FilterParseError::InvalidDate {
                field,
                value: value.to_string(),
            }),
    }
}

#[cfg(test)]
#[path = "filter_test.rs"]
mod tests;
