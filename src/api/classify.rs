//! REST API endpoint for screenshot classification

use actix_web::{HttpResponse, post, web};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::api::error::{ApiError, ErrorResponse};
use crate::app::AppState;
use crate::model::ClassifyResponse;
use crate::service::extraction::ensure_image_data_url;

/// Screenshot to classify
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClassifyRequest {
    /// Inline `data:image/...;base64,` URL
    #[serde(default)]
    pub image_data_url: String,
}

/// Extract evidence from a screenshot and resolve it to a seat product
#[utoipa::path(
    post,
    path = "/v1/classify",
    request_body = ClassifyRequest,
    responses(
        (status = 200, description = "Screenshot classified", body = ClassifyResponse),
        (status = 400, description = "Image is not a data:image URL", body = ErrorResponse),
        (status = 502, description = "Extraction failed", body = ErrorResponse),
        (status = 503, description = "No extractor configured", body = ErrorResponse)
    ),
    tag = "resolve"
)]
#[post("/v1/classify")]
pub async fn classify(
    state: web::Data<AppState>,
    body: web::Json<ClassifyRequest>,
) -> Result<HttpResponse, ApiError> {
    ensure_image_data_url(&body.image_data_url)?;

    let extractor = state.extractor.as_ref().ok_or_else(|| {
        ApiError::ServiceUnavailable("Screenshot extraction is not configured".to_string())
    })?;

    let evidence = extractor.extract(&body.image_data_url).await?;
    let resolution = state.resolver.resolve(&evidence);

    tracing::info!(
        extractor = extractor.name(),
        status = ?resolution.status,
        confidence = resolution.confidence,
        product = %resolution.seat_product.id,
        "Screenshot classified"
    );

    Ok(HttpResponse::Ok().json(ClassifyResponse {
        evidence,
        resolution,
    }))
}

/// Configure classification routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(classify);
}
