use thiserror::Error;

/// Rejected user-supplied filter input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FilterParseError {
    #[error("unknown sentiment label: {0}")]
    UnknownSentiment(String),

    #[error("invalid {field} date '{value}': expected YYYY-MM-DD or DD-MM-YYYY")]
    InvalidDate { field: &'static str, value: String },
}

#[derive(Debug, Error)]
pub enum AnalyticsError {
    #[error("filter error: {0}")]
    Filter(#[from] FilterParseError),

    #[error("dataset JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
