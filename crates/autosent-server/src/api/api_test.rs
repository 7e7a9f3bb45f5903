use super::*;
use axum::body::{to_bytes, Body};
use axum::http::Request;
use tower::ServiceExt;

const FIXTURE: &str = r#"[
    {"brand": "Nissan", "model": "Altima", "Feature": "Brake", "fact": "Very Positive",
     "source": "Reddit", "country": "USA", "date": "10-01-2024", "category": "Price",
     "feedback": "Brakes are superb", "CriticalRanking": 0.8},
    {"brand": "nissan", "model": "Altima", "Feature": "Brake", "fact": "Positive",
     "source": "Reddit", "country": "USA", "date": "11-01-2024", "category": "Price",
     "CriticalRanking": 0.4},
    {"brand": "Nissan", "model": "Altima", "Feature": "Seats", "fact": "Negative",
     "source": "Twitter", "country": "USA", "date": "11-01-2024", "category": "Segment",
     "CriticalRanking": -0.2},
    {"brand": "Toyota", "model": "Camry", "Feature": "Audio", "fact": "Neutral",
     "source": "Twitter", "country": "Japan", "date": "2024-02-01", "category": "Segment",
     "CriticalRanking": "N/A"},
    {"brand": "Very Positive", "model": "Unknown", "source": "1500000"}
]"#;

fn test_app() -> Router {
    let dataset = Dataset::from_json(FIXTURE).expect("fixture dataset");
    build_app(AppState {
        dataset: Arc::new(dataset),
        moving_average_window: 7,
    })
}

async fn get_json(uri: &str) -> (StatusCode, serde_json::Value) {
    let response = test_app()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).expect("request"))
        .await
        .expect("response");
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body bytes");
    let json = serde_json::from_slice(&body).expect("json parse");
    (status, json)
}

#[test]
fn api_error_bad_request_maps_to_400() {
    let response = ApiError::new("req-1", "bad_request", "invalid input").into_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[test]
fn api_error_unknown_code_maps_to_500() {
    let response = ApiError::new("req-1", "boom", "unexpected").into_response();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn health_reports_record_count() {
    let (status, json) = get_json("/api/v1/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["status"], "ok");
    assert_eq!(json["data"]["records"], 5);
    assert!(json["meta"]["request_id"].is_string());
}

#[tokio::test]
async fn request_id_header_is_echoed() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .uri("/api/v1/health")
                .header("x-request-id", "abc-123")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");
    assert_eq!(
        response
            .headers()
            .get("x-request-id")
            .and_then(|v| v.to_str().ok()),
        Some("abc-123")
    );
}

#[tokio::test]
async fn model_category_puts_price_first() {
    let (status, json) = get_json("/api/v1/charts/model-category").await;
    assert_eq!(status, StatusCode::OK);
    let rows = json["data"].as_array().expect("rows");
    assert_eq!(rows[0]["model"], "Altima");
    assert_eq!(rows[0]["category"], "Price");
    assert_eq!(rows[0]["total"], 2);
    assert_eq!(rows[0]["feedback_path"], "/feedback/Altima");
    let total: u64 = rows.iter().filter_map(|r| r["total"].as_u64()).sum();
    assert_eq!(total, 5);
}

#[tokio::test]
async fn model_category_applies_brand_filter_ignoring_case() {
    let (status, json) = get_json("/api/v1/charts/model-category?brands=NISSAN").await;
    assert_eq!(status, StatusCode::OK);
    let total: u64 = json["data"]
        .as_array()
        .expect("rows")
        .iter()
        .filter_map(|r| r["total"].as_u64())
        .sum();
    assert_eq!(total, 3);
}

#[tokio::test]
async fn unknown_sentiment_is_bad_request() {
    let (status, json) = get_json("/api/v1/charts/breakdown?sentiments=ecstatic").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "bad_request");
}

#[tokio::test]
async fn invalid_date_is_bad_request() {
    let (status, _) = get_json("/api/v1/charts/breakdown?from=2024/01/01").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn breakdown_respects_date_range() {
    let (status, json) =
        get_json("/api/v1/charts/breakdown?from=2024-01-11&to=31-01-2024").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["total"], 2);
    assert_eq!(json["data"]["counts"]["Positive"], 1);
    assert_eq!(json["data"]["counts"]["Negative"], 1);
}

#[tokio::test]
async fn timeseries_uses_configured_window_by_default() {
    let (status, json) = get_json("/api/v1/charts/timeseries").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["window"], 7);
    let series = json["data"]["series"].as_array().expect("series");
    assert_eq!(series.len(), 4);
    assert_eq!(series[0]["date"], "2024-01-10");
    assert_eq!(
        json["data"]["moving_average"].as_array().map(Vec::len),
        Some(4)
    );
}

#[tokio::test]
async fn timeseries_links_summary_only_with_models_selected() {
    let (_, json) = get_json("/api/v1/charts/timeseries").await;
    assert!(json["data"]["series"][0]["summary_path"].is_null());

    let (status, json) = get_json("/api/v1/charts/timeseries?brands=Nissan&models=Altima").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json["data"]["series"][0]["summary_path"],
        "/detailed-summary?category=Price&models=Altima&date=10-01-2024&brand=Nissan"
    );
}

#[tokio::test]
async fn timeseries_rejects_zero_window() {
    let (status, _) = get_json("/api/v1/charts/timeseries?window=0").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn top_features_include_drilldown_paths() {
    let (status, json) = get_json("/api/v1/features/top").await;
    assert_eq!(status, StatusCode::OK);
    let models = json["data"].as_array().expect("models");
    assert_eq!(models.len(), 1, "N/A ranking and noise model are excluded");
    let altima = &models[0];
    assert_eq!(altima["model"], "Altima");
    assert_eq!(altima["positive_features"][0]["feature"], "Brake");
    assert_eq!(altima["positive_features"][0]["count"], 2);
    assert_eq!(
        altima["positive_features"][0]["feedback_path"],
        "/feedback/Altima?feature=Brake&polarity=positive"
    );
    assert_eq!(altima["negative_features"][0]["feature"], "Seats");
}

#[tokio::test]
async fn options_drop_noise_and_follow_brands() {
    let (status, json) = get_json("/api/v1/options?brands=Toyota").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["models"], serde_json::json!(["Camry"]));
    assert_eq!(
        json["data"]["sources"],
        serde_json::json!(["Reddit", "Twitter"])
    );
    assert!(json["data"]["brands"]
        .as_array()
        .expect("brands")
        .iter()
        .all(|b| b != "Very Positive"));
}

#[tokio::test]
async fn options_features_follow_models() {
    let (status, json) = get_json("/api/v1/options?models=camry").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["features"], serde_json::json!(["Audio"]));
}

#[tokio::test]
async fn model_feedback_pages_results() {
    let (status, json) = get_json("/api/v1/feedback/altima?per_page=2&page=2").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["total_items"], 3);
    assert_eq!(json["data"]["total_pages"], 2);
    let items = json["data"]["items"].as_array().expect("items");
    assert_eq!(items.len(), 1);
    assert_eq!(
        items[0]["details_path"],
        "/feedback/details/Altima/2/11-01-2024"
    );
}

#[tokio::test]
async fn model_feedback_with_focus() {
    let (status, json) =
        get_json("/api/v1/feedback/Altima?feature=Brake&polarity=negative").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"]["code"], "not_found");

    let (status, json) =
        get_json("/api/v1/feedback/Altima?feature=Brake&polarity=positive").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["total_items"], 2);
}

#[tokio::test]
async fn model_feedback_requires_complete_focus() {
    let (status, _) = get_json("/api/v1/feedback/Altima?feature=Brake").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn feature_feedback_limits_results() {
    let (status, json) = get_json("/api/v1/feature-feedback/Brake?limit=1").await;
    assert_eq!(status, StatusCode::OK);
    let items = json["data"].as_array().expect("items");
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["feedback"], "Brakes are superb");
    assert_eq!(
        items[0]["feature_details_path"],
        "/feature-feedback/details/Brake/Nissan/Altima"
    );
}
