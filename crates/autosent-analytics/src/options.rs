//! Selectable values for each filter dimension.

use std::collections::BTreeSet;

use autosent_core::{FeedbackRecord, SentimentCategory, Selection};
use serde::{Deserialize, Serialize};

use crate::normalize::{
    eq_ignore_case, is_noise_brand, is_noise_feature, is_noise_model, is_noise_source,
};

/// Sorted, de-duplicated option lists with placeholder values removed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DimensionOptions {
    pub brands: Vec<String>,
    /// Models of the currently selected brands, or of every brand.
    pub models: Vec<String>,
    /// Features of the currently selected models, or of every model.
    pub features: Vec<String>,
    pub sentiments: Vec<String>,
    pub sources: Vec<String>,
    pub categories: Vec<String>,
    pub countries: Vec<String>,
}

fn selected(selection: &Selection, value: Option<&str>) -> bool {
    match selection.values() {
        None => true,
        Some(wanted) => value.is_some_and(|v| wanted.iter().any(|w| eq_ignore_case(w, v))),
    }
}

impl DimensionOptions {
    /// Builds every list from `records`.
    ///
    /// Lists cascade: models are limited to the selected `brands` and
    /// features to the selected `models`. Both comparisons ignore case.
    #[must_use]
    pub fn from_records(records: &[FeedbackRecord], brands: &Selection, models: &Selection) -> Self {
        let collect = |rows: &[&FeedbackRecord],
                       field: fn(&FeedbackRecord) -> Option<&str>,
                       noise: fn(&str) -> bool| {
            rows.iter()
                .filter_map(|r| field(r))
                .filter(|v| !noise(v))
                .map(String::from)
                .collect::<BTreeSet<_>>()
                .into_iter()
                .collect::<Vec<_>>()
        };

        let all: Vec<&FeedbackRecord> = records.iter().collect();
        let of_brands: Vec<&FeedbackRecord> = records
            .iter()
            .filter(|r| selected(brands, r.brand.as_deref()))
            .collect();
        let of_models: Vec<&FeedbackRecord> = records
            .iter()
            .filter(|r| selected(models, r.model.as_deref()))
            .collect();

        Self {
            brands: collect(&all, |r| r.brand.as_deref(), is_noise_brand),
            models: collect(&of_brands, |r| r.model.as_deref(), is_noise_model),
            features: collect(&of_models, |r| r.feature.as_deref(), is_noise_feature),
            sentiments: SentimentCategory::ALL
                .iter()
                .map(|c| c.label().to_string())
                .collect(),
            sources: collect(&all, |r| r.source.as_deref(), is_noise_source),
            categories: collect(&all, |r| r.category.as_deref(), |_| false),
            countries: collect(&all, |r| r.country.as_deref(), |_| false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::record;

    fn sample() -> Vec<FeedbackRecord> {
        vec![
            record(0)
                .brand("Nissan")
                .model("Altima")
                .feature("Brake")
                .source("Reddit")
                .category("Price")
                .country("USA")
                .build(),
            record(1)
                .brand("nissan")
                .model("Leaf")
                .feature("0")
                .source("1500000")
                .build(),
            record(2)
                .brand("Toyota")
                .model("Camry")
                .feature("Seats")
                .source("Twitter")
                .country("Japan")
                .build(),
            record(3).brand("Very Positive").model("Unknown").build(),
            record(4).brand("Nissan").model("Climate Control").build(),
            record(5).brand("Nissan").model("2020").build(),
        ]
    }

    #[test]
    fn lists_are_sorted_unique_and_noise_free() {
        let options = DimensionOptions::from_records(
            &sample(),
            &Selection::Unconstrained,
            &Selection::Unconstrained,
        );
        assert_eq!(options.brands, vec!["Nissan", "Toyota", "nissan"]);
        assert_eq!(options.models, vec!["Altima", "Camry", "Leaf"]);
        assert_eq!(options.features, vec!["Brake", "Seats"]);
        assert_eq!(options.sources, vec!["Reddit", "Twitter"]);
        assert_eq!(options.categories, vec!["Price"]);
        assert_eq!(options.countries, vec!["Japan", "USA"]);
        assert_eq!(options.sentiments.len(), 5);
        assert_eq!(options.sentiments[0], "Very Positive");
    }

    #[test]
    fn models_follow_brand_selection_ignoring_case() {
        let options = DimensionOptions::from_records(
            &sample(),
            &Selection::from_values(["NISSAN"]),
            &Selection::Unconstrained,
        );
        assert_eq!(options.models, vec!["Altima", "Leaf"]);
    }

    #[test]
    fn features_follow_model_selection() {
        let options = DimensionOptions::from_records(
            &sample(),
            &Selection::Unconstrained,
            &Selection::from_values(["camry"]),
        );
        assert_eq!(options.features, vec!["Seats"]);
        assert_eq!(options.models, vec!["Altima", "Camry", "Leaf"]);
    }

    #[test]
    fn brand_cascade_ignores_case_beyond_ascii() {
        let records = vec![
            record(0).brand("CITROËN").model("C4").build(),
            record(1).brand("Nissan").model("Leaf").build(),
        ];
        let options = DimensionOptions::from_records(
            &records,
            &Selection::from_values(["Citroën"]),
            &Selection::Unconstrained,
        );
        assert_eq!(options.models, vec!["C4"]);
    }

    #[test]
    fn empty_dataset_still_lists_sentiments() {
        let options = DimensionOptions::from_records(&[], &Selection::Unconstrained, &Selection::Unconstrained);
        assert!(options.brands.is_empty());
        assert_eq!(options.sentiments.len(), 5);
    }
}
