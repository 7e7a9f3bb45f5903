use autosent_analytics::{rank_features, FeatureRanking, ModelFeatureRanking};
use autosent_core::{FeatureFocus, Polarity, Route};
use axum::{
    extract::{Query, State},
    Extension, Json,
};
use serde::Serialize;

use crate::middleware::RequestId;

use super::filters::{filtered, FilterQuery};
use super::{ApiError, ApiResponse, AppState};

/// A ranked feature plus the drill-down path for its feedback.
#[derive(Debug, Serialize)]
pub(super) struct RankedFeatureItem {
    #[serde(flatten)]
    pub ranking: FeatureRanking,
    pub feedback_path: String,
}

#[derive(Debug, Serialize)]
pub(super) struct ModelFeaturesItem {
    pub model: String,
    pub positive_features: Vec<RankedFeatureItem>,
    pub negative_features: Vec<RankedFeatureItem>,
}

fn with_paths(
    model: &str,
    polarity: Polarity,
    rankings: Vec<FeatureRanking>,
) -> Vec<RankedFeatureItem> {
    rankings
        .into_iter()
        .map(|ranking| {
            let route = Route::ModelFeedback {
                model: model.to_string(),
                focus: Some(FeatureFocus {
                    feature: ranking.feature.clone(),
                    polarity,
                }),
            };
            RankedFeatureItem {
                ranking,
                feedback_path: route.path(),
            }
        })
        .collect()
}

impl From<ModelFeatureRanking> for ModelFeaturesItem {
    fn from(row: ModelFeatureRanking) -> Self {
        Self {
            positive_features: with_paths(&row.model, Polarity::Positive, row.positive_features),
            negative_features: with_paths(&row.model, Polarity::Negative, row.negative_features),
            model: row.model,
        }
    }
}

pub(super) async fn top_features(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(filter): Query<FilterQuery>,
) -> Result<Json<ApiResponse<Vec<ModelFeaturesItem>>>, ApiError> {
    let filters = filter.into_state(&req_id.0)?;
    let data = rank_features(filtered(&state, &filters))
        .into_iter()
        .map(ModelFeaturesItem::from)
        .collect();
    Ok(ApiResponse::new(data, req_id.0))
}
