//! Feedback analytics for the autosent dashboard.
//!
//! Normalizes raw feedback rows, classifies sentiment labels, evaluates
//! filters, and derives every chart and drill-down the dashboard shows. All
//! functions are synchronous and recompute from the full record set.

pub mod aggregate;
pub mod classify;
pub mod dataset;
pub mod drilldown;
pub mod error;
pub mod filter;
pub mod normalize;
pub mod options;
pub mod ranking;
pub mod session;
pub mod trend;
pub mod types;

#[cfg(test)]
mod test_support;

pub use aggregate::{aggregate_by_date_and_category, aggregate_by_model_and_category, sentiment_breakdown};
pub use classify::classify;
pub use dataset::Dataset;
pub use drilldown::{feature_feedback, model_feedback, paginate, truncate_words, Page};
pub use error::{AnalyticsError, FilterParseError};
pub use filter::{filter_records, matches, FilterInput};
pub use normalize::normalize_record;
pub use options::DimensionOptions;
pub use ranking::rank_features;
pub use session::DashboardSession;
pub use trend::moving_average;
pub use types::{
    DateCategoryRow, FeatureRanking, ModelCategoryRow, ModelFeatureRanking, MovingAveragePoint,
    SentimentAverages, SentimentBreakdown, SentimentCounts, SentimentShare,
};
