//! Shared types and configuration for the autosent feedback dashboard.

pub mod app_config;
pub mod config;
pub mod filter;
pub mod record;
pub mod route;
pub mod sentiment;

use thiserror::Error;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use filter::{Dimension, FilterAction, FilterState, Selection};
pub use record::{FeedbackRecord, RawFeedbackRecord};
pub use route::{FeatureFocus, Polarity, Route, SummaryQuery};
pub use sentiment::SentimentCategory;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("unknown sentiment category: {0}")]
    UnknownSentiment(String),

    #[error("unknown polarity: {0}")]
    UnknownPolarity(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
