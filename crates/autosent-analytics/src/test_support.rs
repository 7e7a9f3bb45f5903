use autosent_core::{FeedbackRecord, SentimentCategory};
use chrono::NaiveDate;

/// Fluent builder for normalized records used across unit tests.
pub(crate) struct RecordBuilder(FeedbackRecord);

pub(crate) fn record(index: usize) -> RecordBuilder {
    RecordBuilder(FeedbackRecord::empty(index))
}

impl RecordBuilder {
    pub(crate) fn brand(mut self, value: &str) -> Self {
        self.0.brand = Some(value.to_string());
        self
    }

    pub(crate) fn model(mut self, value: &str) -> Self {
        self.0.model = Some(value.to_string());
        self
    }

    pub(crate) fn feature(mut self, value: &str) -> Self {
        self.0.feature = Some(value.to_string());
        self
    }

    pub(crate) fn sentiment(mut self, value: SentimentCategory) -> Self {
        self.0.sentiment_label = Some(value.label().to_string());
        self.0.sentiment = value;
        self
    }

    pub(crate) fn source(mut self, value: &str) -> Self {
        self.0.source = Some(value.to_string());
        self
    }

    pub(crate) fn country(mut self, value: &str) -> Self {
        self.0.country = Some(value.to_string());
        self
    }

    pub(crate) fn category(mut self, value: &str) -> Self {
        self.0.category = Some(value.to_string());
        self
    }

    pub(crate) fn date(mut self, y: i32, m: u32, d: u32) -> Self {
        self.0.date = NaiveDate::from_ymd_opt(y, m, d);
        self
    }

    pub(crate) fn ranking(mut self, value: f64) -> Self {
        self.0.critical_ranking = Some(value);
        self
    }

    pub(crate) fn text(mut self, feedback: &str) -> Self {
        self.0.feedback_text = Some(feedback.to_string());
        self
    }

    pub(crate) fn build(self) -> FeedbackRecord {
        self.0
    }
}
