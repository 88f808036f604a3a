use axum::{
    routing::post,
    Router,
    extract::State,
    response::{IntoResponse, Response},
};
use tower_http::cors::{CorsLayer, Any};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::error::{AppError, Resource, Result};
use crate::api::models::{ApiJson, ExtractRequest};
use crate::api::response;
use crate::extract::{run_blocking, ImageExtractor, PdfExtractor};
use crate::fetch::fetch_bytes;
use crate::AppState;

pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/ocr", post(ocr_handler))
        .route("/pdf", post(pdf_handler))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(app_state)
}

/// Download an image and OCR it with the configured language.
async fn ocr_handler(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<ExtractRequest>,
) -> Response {
    info!(url = %req.url, "OCR request");
    respond(Resource::Image, process_ocr_request(&state, &req).await)
}

/// Download a PDF and return its text layer.
async fn pdf_handler(ApiJson(req): ApiJson<ExtractRequest>) -> Response {
    info!(url = %req.url, "PDF request");
    respond(Resource::Pdf, process_pdf_request(&req).await)
}

fn respond(resource: Resource, result: Result<String>) -> Response {
    match result {
        Ok(text) => {
            info!(%resource, chars = text.chars().count(), "extraction succeeded");
            response::success(text).into_response()
        }
        Err(err) => {
            warn!(%resource, status = %err.status(), "{}", err);
            err.into_response()
        }
    }
}

async fn process_ocr_request(state: &AppState, req: &ExtractRequest) -> Result<String> {
    let bytes = fetch_bytes(req.url.as_url())
        .await
        .map_err(|e| AppError::download(Resource::Image, e))?;

    let extractor = ImageExtractor::from_config(&state.config);
    run_blocking(move || extractor.extract(&bytes))
        .await
        .map_err(|e| AppError::extraction(Resource::Image, e))
}

async fn process_pdf_request(req: &ExtractRequest) -> Result<String> {
    let bytes = fetch_bytes(req.url.as_url())
        .await
        .map_err(|e| AppError::download(Resource::Pdf, e))?;

    run_blocking(move || PdfExtractor::new().extract(&bytes))
        .await
        .map_err(|e| AppError::extraction(Resource::Pdf, e))
}
