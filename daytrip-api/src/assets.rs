use axum::{
    body::Body,
    http::header,
    response::Response,
    routing::get,
    Router,
};

use crate::error::AppError;
use crate::state::AppState;

const MANIFEST: &str = include_str!("../static/manifest.webmanifest");
const SERVICE_WORKER: &str = include_str!("../static/sw.js");
const LOGO: &str = include_str!("../static/logo.svg");

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/manifest.webmanifest", get(manifest))
        .route("/sw.js", get(service_worker))
        .route("/logo.svg", get(logo))
}

fn asset(body: &'static str, content_type: &'static str) -> Result<Response, AppError> {
    let response = Response::builder()
        .header(header::CONTENT_TYPE, content_type)
        .header(header::CACHE_CONTROL, "public, max-age=3600")
        .body(Body::from(body))?;
    Ok(response)
}

pub async fn manifest() -> Result<Response, AppError> {
    asset(MANIFEST, "application/manifest+json")
}

/// Served from the root so its scope covers the whole site.
pub async fn service_worker() -> Result<Response, AppError> {
    asset(SERVICE_WORKER, "application/javascript")
}

pub async fn logo() -> Result<Response, AppError> {
    asset(LOGO, "image/svg+xml")
}
