use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use chrono::{Duration, Local};
use daytrip_api::{app, app_config::BrandConfig, AppState};
use daytrip_core::SearchConfig;
use serde_json::Value;
use tower::ServiceExt;

fn test_app() -> Router {
    app(AppState::new(SearchConfig::default(), BrandConfig::default()))
}

async fn get(app: Router, uri: &str) -> (StatusCode, Option<String>, String) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .map(|v| v.to_str().unwrap().to_string());
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, content_type, String::from_utf8(bytes.to_vec()).unwrap())
}

async fn get_json(uri: &str) -> (StatusCode, Value) {
    let (status, _, body) = get(test_app(), uri).await;
    (status, serde_json::from_str(&body).expect("Response was not JSON"))
}

fn prices(body: &Value) -> Vec<u64> {
    body["flights"]
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["price_total"].as_u64().unwrap())
        .collect()
}

#[tokio::test]
async fn test_api_search_returns_sorted_options() {
    let (status, body) =
        get_json("/api/search?origin=sfo&destination=dtw&trip_date=2025-07-14").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ok"], true);
    assert_eq!(body["params"]["origin"], "SFO");
    assert_eq!(body["params"]["destination"], "DTW");
    assert_eq!(body["params"]["trip_date"], "2025-07-14");
    assert_eq!(body["params"]["morning_arrival"], true);
    assert_eq!(body["params"]["evening_departure"], true);
    assert_eq!(body["params"]["max_price"], Value::Null);

    let flights = body["flights"].as_array().unwrap();
    assert_eq!(flights.len(), 3);
    let first = &flights[0];
    assert_eq!(first["outbound"]["origin"], "SFO");
    assert_eq!(first["return"]["origin"], "DTW");
    assert_eq!(first["currency"], "USD");
    assert_eq!(
        first["total_duration_minutes"].as_i64().unwrap(),
        first["outbound"]["duration_minutes"].as_i64().unwrap()
            + first["return"]["duration_minutes"].as_i64().unwrap()
    );
    assert!(first["deeplink"]
        .as_str()
        .unwrap()
        .ends_with("#flt=SFO.DTW.2025-07-14*DTW.SFO.2025-07-14"));

    let prices = prices(&body);
    assert!(prices.windows(2).all(|w| w[0] <= w[1]));
    assert!((149..=208).contains(&prices[0]));
}

#[tokio::test]
async fn test_api_search_is_deterministic() {
    let uri = "/api/search?origin=JFK&destination=BOS&trip_date=2025-09-01&morning_arrival=false";
    let (_, first, a) = get(test_app(), uri).await;
    let (_, second, b) = get(test_app(), uri).await;
    assert_eq!(first, second);
    assert_eq!(a, b);
}

#[tokio::test]
async fn test_api_search_same_airport_is_empty() {
    let (status, body) =
        get_json("/api/search?origin=SFO&destination=SFO&trip_date=2025-07-14&max_price=1000").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ok"], true);
    assert_eq!(body["flights"], Value::Array(Vec::new()));
}

#[tokio::test]
async fn test_api_search_missing_codes_is_empty() {
    let (status, body) = get_json("/api/search").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["params"]["origin"], "");
    assert!(body["flights"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_api_search_max_price() {
    let (_, body) =
        get_json("/api/search?origin=SFO&destination=DTW&trip_date=2025-07-14&max_price=150").await;
    assert_eq!(body["params"]["max_price"], 150);
    let capped = prices(&body);
    assert!(capped.len() <= 3);
    assert!(capped.iter().all(|p| *p <= 150));

    let (_, body) =
        get_json("/api/search?origin=SFO&destination=DTW&trip_date=2025-07-14&max_price=cheap").await;
    assert_eq!(body["params"]["max_price"], Value::Null);
    assert_eq!(prices(&body).len(), 3);
}

#[tokio::test]
async fn test_api_search_bad_date_falls_back_a_week_ahead() {
    let (status, body) =
        get_json("/api/search?origin=SFO&destination=DTW&trip_date=someday").await;
    assert_eq!(status, StatusCode::OK);

    let expected = (Local::now().date_naive() + Duration::days(7)).format("%Y-%m-%d").to_string();
    assert_eq!(body["params"]["trip_date"], expected);
    assert_eq!(body["flights"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_search_page_renders_results() {
    let (status, content_type, html) =
        get(test_app(), "/search?origin=sfo&destination=dtw&trip_date=2025-07-14").await;
    assert_eq!(status, StatusCode::OK);
    assert!(content_type.unwrap().starts_with("text/html"));
    assert!(html.contains("SFO &rarr; DTW on 2025-07-14"));
    assert!(html.contains("No filters applied."));
    assert_eq!(html.matches("<li class=\"trip\">").count(), 3);
}

#[tokio::test]
async fn test_search_page_escapes_input() {
    let (status, _, html) =
        get(test_app(), "/search?origin=%3Cb&destination=DTW&trip_date=2025-07-14").await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("&lt;B &rarr; DTW"));
    assert!(!html.contains("<B"));
    assert!(html.contains("No day trips match your search."));
}

#[tokio::test]
async fn test_index_and_info_pages() {
    for uri in ["/", "/how-it-works", "/pricing", "/faq", "/about", "/contact"] {
        let (status, content_type, html) = get(test_app(), uri).await;
        assert_eq!(status, StatusCode::OK, "{}", uri);
        assert!(content_type.unwrap().starts_with("text/html"));
        assert!(html.contains("Daytrippr"));
    }

    let (_, _, index) = get(test_app(), "/").await;
    assert!(index.contains("action=\"/search\""));
}

#[tokio::test]
async fn test_pwa_assets() {
    let cases = [
        ("/manifest.webmanifest", "application/manifest+json"),
        ("/sw.js", "application/javascript"),
        ("/logo.svg", "image/svg+xml"),
    ];
    for (uri, expected) in cases {
        let (status, content_type, body) = get(test_app(), uri).await;
        assert_eq!(status, StatusCode::OK, "{}", uri);
        assert_eq!(content_type.as_deref(), Some(expected));
        assert!(!body.is_empty());
    }
}

#[tokio::test]
async fn test_not_found() {
    let (status, content_type, html) = get(test_app(), "/nowhere").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(content_type.unwrap().starts_with("text/html"));
    assert!(html.contains("Page not found"));

    let (status, body) = get_json("/api/nowhere").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "No route for /api/nowhere");
}

#[tokio::test]
async fn test_healthz() {
    let (status, body) = get_json("/healthz").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}
