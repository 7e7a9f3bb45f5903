//! Dashboard application state: the shared dataset plus the current filters.

use std::sync::Arc;

use autosent_core::{FeedbackRecord, FilterAction, FilterState};

use crate::dataset::Dataset;
use crate::filter::filter_records;
use crate::options::DimensionOptions;

/// One user's view of the dataset.
///
/// Filters only change through [`DashboardSession::dispatch`]; every read
/// recomputes from the immutable dataset.
#[derive(Debug, Clone)]
pub struct DashboardSession {
    dataset: Arc<Dataset>,
    filters: FilterState,
}

impl DashboardSession {
    #[must_use]
    pub fn new(dataset: Arc<Dataset>) -> Self {
        Self::with_filters(dataset, FilterState::default())
    }

    #[must_use]
    pub fn with_filters(dataset: Arc<Dataset>, filters: FilterState) -> Self {
        Self { dataset, filters }
    }

    #[must_use]
    pub fn records(&self) -> &[FeedbackRecord] {
        self.dataset.records()
    }

    #[must_use]
    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    /// Records matching the current filters, in dataset order.
    #[must_use]
    pub fn filtered(&self) -> Vec<&FeedbackRecord> {
        filter_records(self.dataset.records(), &self.filters)
    }

    /// Option lists, with models narrowed to the selected brands and
    /// features to the selected models.
    #[must_use]
    pub fn options(&self) -> DimensionOptions {
        DimensionOptions::from_records(
            self.dataset.records(),
            &self.filters.brands,
            &self.filters.models,
        )
    }

    pub fn dispatch(&mut self, action: FilterAction) {
        tracing::debug!(?action, "dispatching filter action");
        let current = std::mem::take(&mut self.filters);
        self.filters = current.apply(action);
    }
}

#[cfg(test)]
mod tests {
    use autosent_core::{Dimension, SentimentCategory};

    use super::*;
    use crate::test_support::record;

    fn session() -> DashboardSession {
        let dataset = Dataset::from_records(vec![
            record(0)
                .brand("Nissan")
                .model("Altima")
                .sentiment(SentimentCategory::Positive)
                .build(),
            record(1)
                .brand("Toyota")
                .model("Camry")
                .sentiment(SentimentCategory::Negative)
                .build(),
            record(2).brand("nissan").model("Leaf").build(),
        ]);
        DashboardSession::new(Arc::new(dataset))
    }

    #[test]
    fn starts_unconstrained() {
        let session = session();
        assert!(session.filters().is_unconstrained());
        assert_eq!(session.filtered().len(), session.records().len());
    }

    #[test]
    fn dispatch_routes_through_reducer() {
        let mut session = session();
        session.dispatch(FilterAction::Replace {
            dimension: Dimension::Models,
            values: vec!["Camry".into()],
        });
        session.dispatch(FilterAction::Toggle {
            dimension: Dimension::Brands,
            value: "Nissan".into(),
        });
        // The brand change reset the model selection.
        assert!(session.filters().models.is_unconstrained());
        let indices: Vec<usize> = session.filtered().iter().map(|r| r.index).collect();
        assert_eq!(indices, vec![0, 2]);
    }

    #[test]
    fn options_follow_brand_filter() {
        let mut session = session();
        session.dispatch(FilterAction::Replace {
            dimension: Dimension::Brands,
            values: vec!["Toyota".into()],
        });
        assert_eq!(session.options().models, vec!["Camry"]);
    }

    #[test]
    fn clear_restores_full_view() {
        let mut session = session();
        session.dispatch(FilterAction::Toggle {
            dimension: Dimension::Sentiments,
            value: "Negative".into(),
        });
        assert_eq!(session.filtered().len(), 1);
        session.dispatch(FilterAction::Clear);
        assert_eq!(session.filtered().len(), 3);
    }
}
