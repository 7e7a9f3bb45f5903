use autosent_analytics::drilldown::{DEFAULT_FEATURE_LIMIT, DEFAULT_PAGE_SIZE};
use autosent_analytics::{
    feature_feedback as feature_records, model_feedback as model_records, paginate, Page,
};
use autosent_core::{FeatureFocus, FeedbackRecord, Polarity, Route, SentimentCategory};
use axum::{
    extract::{Path, Query, State},
    Extension, Json,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::middleware::RequestId;

use super::filters::{filtered, FilterQuery};
use super::{ApiError, ApiResponse, AppState};

const MAX_PAGE_SIZE: usize = 100;

#[derive(Debug, Clone, Serialize)]
pub(super) struct FeedbackItem {
    pub index: usize,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub feature: Option<String>,
    pub sentiment: SentimentCategory,
    pub source: Option<String>,
    pub country: Option<String>,
    pub date: Option<NaiveDate>,
    pub feedback: Option<String>,
    pub summary: Option<String>,
    pub critical_ranking: Option<f64>,
    pub category: Option<String>,
    pub segment: Option<String>,
    /// Client path of the detail view; absent without a model and date.
    pub details_path: Option<String>,
}

impl From<&FeedbackRecord> for FeedbackItem {
    fn from(record: &FeedbackRecord) -> Self {
        let details_path = record
            .model
            .clone()
            .zip(record.date)
            .map(|(model, date)| {
                Route::FeedbackDetails {
                    model,
                    index: record.index,
                    date,
                }
                .path()
            });
        Self {
            index: record.index,
            brand: record.brand.clone(),
            model: record.model.clone(),
            feature: record.feature.clone(),
            sentiment: record.sentiment,
            source: record.source.clone(),
            country: record.country.clone(),
            date: record.date,
            feedback: record.feedback_text.clone(),
            summary: record.summary_text.clone(),
            critical_ranking: record.critical_ranking,
            category: record.category.clone(),
            segment: record.segment.clone(),
            details_path,
        }
    }
}

/// A feature-feedback row plus the per-brand, per-model detail view it opens.
#[derive(Debug, Serialize)]
pub(super) struct FeatureFeedbackItem {
    #[serde(flatten)]
    pub item: FeedbackItem,
    /// Absent without a brand and model.
    pub feature_details_path: Option<String>,
}

impl FeatureFeedbackItem {
    fn new(feature: &str, record: &FeedbackRecord) -> Self {
        let feature_details_path = record
            .brand
            .clone()
            .zip(record.model.clone())
            .map(|(brand, model)| {
                Route::FeatureFeedbackDetails {
                    feature: feature.to_string(),
                    brand,
                    model,
                }
                .path()
            });
        Self {
            item: FeedbackItem::from(record),
            feature_details_path,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(super) struct ModelFeedbackQuery {
    pub feature: Option<String>,
    pub polarity: Option<String>,
    pub page: Option<usize>,
    pub per_page: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub(super) struct FeatureFeedbackQuery {
    pub limit: Option<usize>,
}

fn parse_focus(
    request_id: &str,
    feature: Option<String>,
    polarity: Option<String>,
) -> Result<Option<FeatureFocus>, ApiError> {
    match (feature, polarity) {
        (None, None) => Ok(None),
        (Some(feature), Some(polarity)) => {
            let polarity = polarity
                .parse::<Polarity>()
                .map_err(|e| ApiError::new(request_id, "bad_request", e.to_string()))?;
            Ok(Some(FeatureFocus { feature, polarity }))
        }
        _ => Err(ApiError::new(
            request_id,
            "bad_request",
            "feature and polarity must be given together",
        )),
    }
}

pub(super) async fn model_feedback(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(model): Path<String>,
    Query(filter): Query<FilterQuery>,
    Query(query): Query<ModelFeedbackQuery>,
) -> Result<Json<ApiResponse<Page<FeedbackItem>>>, ApiError> {
    let filters = filter.into_state(&req_id.0)?;
    let focus = parse_focus(&req_id.0, query.feature, query.polarity)?;

    let records = model_records(filtered(&state, &filters), &model, focus.as_ref());
    let items: Vec<FeedbackItem> = records
        .into_iter()
        .map(FeedbackItem::from)
        .collect();
    if items.is_empty() {
        return Err(ApiError::new(
            req_id.0,
            "not_found",
            format!("no feedback for model '{model}'"),
        ));
    }

    let per_page = query
        .per_page
        .unwrap_or(DEFAULT_PAGE_SIZE)
        .clamp(1, MAX_PAGE_SIZE);
    let page = paginate(&items, query.page.unwrap_or(1), per_page);
    Ok(ApiResponse::new(page, req_id.0))
}

pub(super) async fn feature_feedback(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(feature): Path<String>,
    Query(filter): Query<FilterQuery>,
    Query(query): Query<FeatureFeedbackQuery>,
) -> Result<Json<ApiResponse<Vec<FeatureFeedbackItem>>>, ApiError> {
    let filters = filter.into_state(&req_id.0)?;
    let limit = query
        .limit
        .unwrap_or(DEFAULT_FEATURE_LIMIT)
        .clamp(1, MAX_PAGE_SIZE);
    let items = feature_records(filtered(&state, &filters), &feature, limit)
        .into_iter()
        .map(|record| FeatureFeedbackItem::new(&feature, record))
        .collect();
    Ok(ApiResponse::new(items, req_id.0))
}
