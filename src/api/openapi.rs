//! OpenAPI specification endpoints

use actix_web::{HttpResponse, Responder, get};
use utoipa::OpenApi;

use crate::api::error::ApiError;
use crate::api::{classify, error, health, resolve, rules};
use crate::model;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Seat Resolver",
        description = "Resolves flight evidence to a named premium seat product"
    ),
    paths(
        resolve::normalize,
        resolve::resolve,
        classify::classify,
        rules::list_rules,
        health::liveness,
        health::readiness
    ),
    components(schemas(
        model::RawIdentifiers,
        model::CanonicalIdentifiers,
        model::EvidenceBundle,
        model::EvidenceClue,
        model::FeatureMarkers,
        model::Cabin,
        model::Marker,
        model::RuleCabin,
        model::RuleSummary,
        model::ResolveStatus,
        model::SeatProduct,
        model::Candidate,
        model::Resolution,
        model::ClassifyResponse,
        classify::ClassifyRequest,
        rules::RuleListResponse,
        error::ErrorResponse
    )),
    tags(
        (name = "resolve", description = "Identifier normalization and seat product resolution"),
        (name = "rules", description = "Product rule catalog"),
        (name = "health", description = "Liveness and readiness probes")
    )
)]
pub struct ApiDoc;

/// Serve OpenAPI JSON specification
#[get("/openapi.json")]
pub async fn openapi_json() -> impl Responder {
    HttpResponse::Ok().json(ApiDoc::openapi())
}

/// Serve OpenAPI YAML specification
#[get("/openapi.yaml")]
pub async fn openapi_yaml() -> Result<HttpResponse, ApiError> {
    let yaml = ApiDoc::openapi()
        .to_yaml()
        .map_err(|e| ApiError::Internal(format!("Failed to render OpenAPI YAML: {}", e)))?;

    Ok(HttpResponse::Ok().content_type("text/yaml").body(yaml))
}

/// Configure OpenAPI routes
pub fn configure(cfg: &mut actix_web::web::ServiceConfig) {
    cfg.service(openapi_json).service(openapi_yaml);
}
