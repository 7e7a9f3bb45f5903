use autosent_analytics::DimensionOptions;
use axum::{
    extract::{Query, State},
    Extension, Json,
};

use crate::middleware::RequestId;

use super::filters::FilterQuery;
use super::{ApiError, ApiResponse, AppState};

/// Option lists for every filter; `brands` narrows models and `models`
/// narrows features.
pub(super) async fn get_options(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(filter): Query<FilterQuery>,
) -> Result<Json<ApiResponse<DimensionOptions>>, ApiError> {
    let filters = filter.into_state(&req_id.0)?;
    let options =
        DimensionOptions::from_records(state.dataset.records(), &filters.brands, &filters.models);
    Ok(ApiResponse::new(options, req_id.0))
}
