//! Typed dashboard routes.
//!
//! Drill-down context (the feature and polarity a user clicked on) is part of
//! the route itself rather than ambient navigation state, so a route rendered
//! with [`Route::path`] fully describes the view it opens.

use std::str::FromStr;

use chrono::NaiveDate;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};

use crate::CoreError;

/// Characters left unescaped in path segments and query values.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Sign bucket of a critical ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Polarity {
    /// `critical_ranking >= 0`
    Positive,
    /// `critical_ranking < 0`
    Negative,
}

impl Polarity {
    #[must_use]
    pub fn of(ranking: f64) -> Self {
        if ranking >= 0.0 {
            Polarity::Positive
        } else {
            Polarity::Negative
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Polarity::Positive => "positive",
            Polarity::Negative => "negative",
        }
    }
}

impl std::fmt::Display for Polarity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Polarity {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "positive" => Ok(Polarity::Positive),
            "negative" => Ok(Polarity::Negative),
            _ => Err(CoreError::UnknownPolarity(s.to_string())),
        }
    }
}

/// A feature ranking cell the user drilled into.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureFocus {
    pub feature: String,
    pub polarity: Polarity,
}

/// Parameters of the detailed summary view and of `GET /detailed-summary`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryQuery {
    pub category: String,
    pub models: Vec<String>,
    pub date: String,
    pub brand: String,
}

impl SummaryQuery {
    /// Query pairs in upstream order; `models` is comma-joined.
    #[must_use]
    pub fn query_pairs(&self) -> [(&'static str, String); 4] {
        [
            ("category", self.category.clone()),
            ("models", self.models.join(",")),
            ("date", self.date.clone()),
            ("brand", self.brand.clone()),
        ]
    }
}

/// Every client-side view of the dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Landing,
    SignIn,
    SignUp,
    Home,
    /// Numbered dashboards `1..=4`.
    Dashboard(u8),
    ModelFeedback {
        model: String,
        focus: Option<FeatureFocus>,
    },
    FeedbackDetails {
        model: String,
        index: usize,
        date: NaiveDate,
    },
    FeatureFeedback {
        feature: String,
    },
    FeatureFeedbackDetails {
        feature: String,
        brand: String,
        model: String,
    },
    DetailedSummary(SummaryQuery),
}

/// Number of numbered dashboards.
pub const DASHBOARD_COUNT: u8 = 4;

impl Route {
    /// Entries of the top navigation bar, in display order.
    #[must_use]
    pub fn navigation() -> Vec<Route> {
        std::iter::once(Route::Landing)
            .chain((1..=DASHBOARD_COUNT).map(Route::Dashboard))
            .collect()
    }

    /// Renders the route as a client path with percent-encoded components.
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Route::Landing => "/".to_string(),
            Route::SignIn => "/signin".to_string(),
            Route::SignUp => "/signup".to_string(),
            Route::Home => "/home".to_string(),
            Route::Dashboard(n) => format!("/dashboard{n}"),
            Route::ModelFeedback { model, focus } => {
                let base = format!("/feedback/{}", encode(model));
                match focus {
                    Some(focus) => format!(
                        "{base}?feature={}&polarity={}",
                        encode(&focus.feature),
                        focus.polarity
                    ),
                    None => base,
                }
            }
            Route::FeedbackDetails { model, index, date } => format!(
                "/feedback/details/{}/{index}/{}",
                encode(model),
                date.format("%d-%m-%Y")
            ),
            Route::FeatureFeedback { feature } => {
                format!("/feature-feedback/{}", encode(feature))
            }
            Route::FeatureFeedbackDetails {
                feature,
                brand,
                model,
            } => format!(
                "/feature-feedback/details/{}/{}/{}",
                encode(feature),
                encode(brand),
                encode(model)
            ),
            Route::DetailedSummary(query) => {
                let pairs: Vec<String> = query
                    .query_pairs()
                    .iter()
                    .map(|(k, v)| format!("{k}={}", encode(v)))
                    .collect();
                format!("/detailed-summary?{}", pairs.join("&"))
            }
        }
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.path())
    }
}

fn encode(component: &str) -> String {
    utf8_percent_encode(component, COMPONENT).to_string()
}
