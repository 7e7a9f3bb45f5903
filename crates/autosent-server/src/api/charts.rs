use autosent_analytics::{
    aggregate_by_date_and_category, aggregate_by_model_and_category, moving_average,
    sentiment_breakdown, DateCategoryRow, ModelCategoryRow, MovingAveragePoint,
    SentimentBreakdown,
};
use autosent_core::{FilterState, Route, SummaryQuery};
use axum::{
    extract::{Query, State},
    Extension, Json,
};
use serde::{Deserialize, Serialize};

use crate::middleware::RequestId;

use super::filters::{filtered, FilterQuery};
use super::{ApiError, ApiResponse, AppState};

#[derive(Debug, Deserialize)]
pub(super) struct TimeseriesQuery {
    pub window: Option<usize>,
}

/// A chart bar plus the feedback view it opens.
#[derive(Debug, Serialize)]
pub(super) struct ModelCategoryItem {
    #[serde(flatten)]
    pub row: ModelCategoryRow,
    pub feedback_path: String,
}

impl From<ModelCategoryRow> for ModelCategoryItem {
    fn from(row: ModelCategoryRow) -> Self {
        let feedback_path = Route::ModelFeedback {
            model: row.model.clone(),
            focus: None,
        }
        .path();
        Self { row, feedback_path }
    }
}

/// A daily point plus the summary view for that day and category.
#[derive(Debug, Serialize)]
pub(super) struct SeriesItem {
    #[serde(flatten)]
    pub row: DateCategoryRow,
    /// Present only while at least one model is selected.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary_path: Option<String>,
}

#[derive(Debug, Serialize)]
pub(super) struct TimeseriesData {
    pub window: usize,
    pub series: Vec<SeriesItem>,
    pub moving_average: Vec<MovingAveragePoint>,
}

fn summary_path(row: &DateCategoryRow, filters: &FilterState) -> Option<String> {
    let models: Vec<String> = filters.models.values()?.iter().cloned().collect();
    let brand = filters
        .brands
        .values()
        .map(|brands| brands.iter().cloned().collect::<Vec<_>>().join(","))
        .unwrap_or_default();
    let route = Route::DetailedSummary(SummaryQuery {
        category: row.category.clone(),
        models,
        date: row.date.format("%d-%m-%Y").to_string(),
        brand,
    });
    Some(route.path())
}

pub(super) async fn model_category(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(filter): Query<FilterQuery>,
) -> Result<Json<ApiResponse<Vec<ModelCategoryItem>>>, ApiError> {
    let filters = filter.into_state(&req_id.0)?;
    let rows = aggregate_by_model_and_category(filtered(&state, &filters))
        .into_iter()
        .map(ModelCategoryItem::from)
        .collect();
    Ok(ApiResponse::new(rows, req_id.0))
}

pub(super) async fn timeseries(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(filter): Query<FilterQuery>,
    Query(query): Query<TimeseriesQuery>,
) -> Result<Json<ApiResponse<TimeseriesData>>, ApiError> {
    let filters = filter.into_state(&req_id.0)?;
    let window = match query.window {
        Some(0) => {
            return Err(ApiError::new(
                req_id.0,
                "bad_request",
                "window must be at least 1",
            ))
        }
        Some(w) => w,
        None => state.moving_average_window,
    };

    let series = aggregate_by_date_and_category(filtered(&state, &filters));
    let moving_average = moving_average(&series, window);
    let series = series
        .into_iter()
        .map(|row| SeriesItem {
            summary_path: summary_path(&row, &filters),
            row,
        })
        .collect();
    Ok(ApiResponse::new(
        TimeseriesData {
            window,
            series,
            moving_average,
        },
        req_id.0,
    ))
}

pub(super) async fn breakdown(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(filter): Query<FilterQuery>,
) -> Result<Json<ApiResponse<SentimentBreakdown>>, ApiError> {
    let filters = filter.into_state(&req_id.0)?;
    let breakdown = sentiment_breakdown(filtered(&state, &filters));
    Ok(ApiResponse::new(breakdown, req_id.0))
}
