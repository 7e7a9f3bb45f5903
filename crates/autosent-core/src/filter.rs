//! Filter state for the dashboard and the reducer that updates it.
//!
//! A dimension is either [`Selection::Unconstrained`] or a non-empty set of
//! concrete values. [`FilterState::apply`] is the only way the dashboard
//! changes filters, so the invariants below hold after every action:
//!
//! - no dimension ever holds an empty selection;
//! - removing the last value of a dimension reverts it to unconstrained;
//! - any change to `brands` resets `models`, because model choices are
//!   conditioned on brand.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Values chosen for one filter dimension.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "values", rename_all = "snake_case")]
pub enum Selection {
    #[default]
    Unconstrained,
    Selected(BTreeSet<String>),
}

impl Selection {
    /// Builds a selection from raw values, trimming them and dropping blanks.
    ///
    /// An empty result collapses to [`Selection::Unconstrained`].
    pub fn from_values<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let set: BTreeSet<String> = values
            .into_iter()
            .map(|v| v.as_ref().trim().to_string())
            .filter(|v| !v.is_empty())
            .collect();
        if set.is_empty() {
            Selection::Unconstrained
        } else {
            Selection::Selected(set)
        }
    }

    /// Parses a comma-separated list such as `"Nissan,Toyota"`.
    #[must_use]
    pub fn from_csv(raw: &str) -> Self {
        Self::from_values(raw.split(','))
    }

    #[must_use]
    pub fn is_unconstrained(&self) -> bool {
        match self {
            Selection::Unconstrained => true,
            Selection::Selected(set) => set.is_empty(),
        }
    }

    /// Concrete values, or `None` when the dimension is unconstrained.
    #[must_use]
    pub fn values(&self) -> Option<&BTreeSet<String>> {
        match self {
            Selection::Selected(set) if !set.is_empty() => Some(set),
            _ => None,
        }
    }

    /// Adds `value` if absent, removes it if present.
    #[must_use]
    pub fn toggled(&self, value: &str) -> Self {
        let value = value.trim();
        if value.is_empty() {
            return self.clone();
        }
        let mut set = self.values().cloned().unwrap_or_default();
        if !set.remove(value) {
            set.insert(value.to_string());
        }
        Self::from_values(set)
    }
}

/// Filterable record dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Brands,
    Models,
    Features,
    Sentiments,
    Sources,
    Categories,
    Countries,
}

impl Dimension {
    pub const ALL: [Dimension; 7] = [
        Dimension::Brands,
        Dimension::Models,
        Dimension::Features,
        Dimension::Sentiments,
        Dimension::Sources,
        Dimension::Categories,
        Dimension::Countries,
    ];
}

impl std::fmt::Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Dimension::Brands => "brands",
            Dimension::Models => "models",
            Dimension::Features => "features",
            Dimension::Sentiments => "sentiments",
            Dimension::Sources => "sources",
            Dimension::Categories => "categories",
            Dimension::Countries => "countries",
        };
        f.write_str(name)
    }
}

/// A user intent that changes the filter state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterAction {
    /// Drop every constraint on one dimension.
    SelectAll(Dimension),
    /// Replace a dimension's selection; an empty list means unconstrained.
    Replace {
        dimension: Dimension,
        values: Vec<String>,
    },
    /// Add or remove a single value.
    Toggle { dimension: Dimension, value: String },
    SetDateRange {
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    },
    /// Reset everything to unconstrained.
    Clear,
}

/// Current filter selections across every dimension plus an optional date range.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    pub brands: Selection,
    pub models: Selection,
    pub features: Selection,
    pub sentiments: Selection,
    pub sources: Selection,
    pub categories: Selection,
    pub countries: Selection,
    pub from_date: Option<NaiveDate>,
    pub to_date: Option<NaiveDate>,
}

impl FilterState {
    #[must_use]
    pub fn selection(&self, dimension: Dimension) -> &Selection {
        match dimension {
            Dimension::Brands => &self.brands,
            Dimension::Models => &self.models,
            Dimension::Features => &self.features,
            Dimension::Sentiments => &self.sentiments,
            Dimension::Sources => &self.sources,
            Dimension::Categories => &self.categories,
            Dimension::Countries => &self.countries,
        }
    }

    fn selection_mut(&mut self, dimension: Dimension) -> &mut Selection {
        match dimension {
            Dimension::Brands => &mut self.brands,
            Dimension::Models => &mut self.models,
            Dimension::Features => &mut self.features,
            Dimension::Sentiments => &mut self.sentiments,
            Dimension::Sources => &mut self.sources,
            Dimension::Categories => &mut self.categories,
            Dimension::Countries => &mut self.countries,
        }
    }

    /// `true` when no dimension is constrained and no date bound is set.
    #[must_use]
    pub fn is_unconstrained(&self) -> bool {
        Dimension::ALL
            .iter()
            .all(|d| self.selection(*d).is_unconstrained())
            && self.from_date.is_none()
            && self.to_date.is_none()
    }

    /// Applies one action and returns the resulting state.
    #[must_use]
    pub fn apply(mut self, action: FilterAction) -> Self {
        let touched = match action {
            FilterAction::SelectAll(dimension) => {
                *self.selection_mut(dimension) = Selection::Unconstrained;
                Some(dimension)
            }
            FilterAction::Replace { dimension, values } => {
                *self.selection_mut(dimension) = Selection::from_values(values);
                Some(dimension)
            }
            FilterAction::Toggle { dimension, value } => {
                let next = self.selection(dimension).toggled(&value);
                *self.selection_mut(dimension) = next;
                Some(dimension)
            }
            FilterAction::SetDateRange { from, to } => {
                self.from_date = from;
                self.to_date = to;
                None
            }
            FilterAction::Clear => return FilterState::default(),
        };

        if touched == Some(Dimension::Brands) {
            self.models = Selection::Unconstrained;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selected(values: &[&str]) -> Selection {
        Selection::from_values(values.iter().copied())
    }

    #[test]
    fn from_values_with_no_values_is_unconstrained() {
        assert_eq!(
            Selection::from_values(Vec::<String>::new()),
            Selection::Unconstrained
        );
        assert_eq!(Selection::from_csv(" , ,"), Selection::Unconstrained);
    }

    #[test]
    fn from_csv_trims_values() {
        let selection = Selection::from_csv("Nissan, Toyota ");
        let values = selection.values().expect("selected");
        assert!(values.contains("Nissan"));
        assert!(values.contains("Toyota"));
    }

    #[test]
    fn toggle_adds_then_removes_back_to_unconstrained() {
        let state = FilterState::default().apply(FilterAction::Toggle {
            dimension: Dimension::Sources,
            value: "Reddit".into(),
        });
        assert_eq!(state.sources, selected(&["Reddit"]));

        let state = state.apply(FilterAction::Toggle {
            dimension: Dimension::Sources,
            value: "Reddit".into(),
        });
        assert_eq!(state.sources, Selection::Unconstrained);
    }

    #[test]
    fn select_all_clears_other_values() {
        let state = FilterState::default()
            .apply(FilterAction::Replace {
                dimension: Dimension::Features,
                values: vec!["Brake".into(), "Seats".into()],
            })
            .apply(FilterAction::SelectAll(Dimension::Features));
        assert_eq!(state.features, Selection::Unconstrained);
    }

    #[test]
    fn replace_with_empty_list_reverts_to_unconstrained() {
        let state = FilterState::default()
            .apply(FilterAction::Replace {
                dimension: Dimension::Categories,
                values: vec!["Price".into()],
            })
            .apply(FilterAction::Replace {
                dimension: Dimension::Categories,
                values: vec![],
            });
        assert_eq!(state.categories, Selection::Unconstrained);
    }

    #[test]
    fn changing_brands_resets_models() {
        let state = FilterState::default()
            .apply(FilterAction::Replace {
                dimension: Dimension::Models,
                values: vec!["Altima".into()],
            })
            .apply(FilterAction::Toggle {
                dimension: Dimension::Brands,
                value: "Nissan".into(),
            });
        assert_eq!(state.models, Selection::Unconstrained);
        assert_eq!(state.brands, selected(&["Nissan"]));
    }

    #[test]
    fn changing_other_dimensions_keeps_models() {
        let state = FilterState::default()
            .apply(FilterAction::Replace {
                dimension: Dimension::Models,
                values: vec!["Altima".into()],
            })
            .apply(FilterAction::Replace {
                dimension: Dimension::Sources,
                values: vec!["Reddit".into()],
            });
        assert_eq!(state.models, selected(&["Altima"]));
    }

    #[test]
    fn clear_resets_everything() {
        let from = NaiveDate::from_ymd_opt(2024, 1, 1);
        let state = FilterState::default()
            .apply(FilterAction::SetDateRange { from, to: None })
            .apply(FilterAction::Replace {
                dimension: Dimension::Brands,
                values: vec!["Nissan".into()],
            })
            .apply(FilterAction::Clear);
        assert!(state.is_unconstrained());
    }

    #[test]
    fn date_range_is_not_unconstrained() {
        let state = FilterState::default().apply(FilterAction::SetDateRange {
            from: None,
            to: NaiveDate::from_ymd_opt(2024, 6, 30),
        });
        assert!(!state.is_unconstrained());
    }
}
