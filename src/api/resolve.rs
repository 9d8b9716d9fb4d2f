//! REST API endpoints for identifier normalization and evidence resolution

use actix_web::{HttpResponse, Responder, post, web};

use crate::app::AppState;
use crate::model::{CanonicalIdentifiers, ClassifyResponse, EvidenceBundle, RawIdentifiers};
use crate::service::normalize::normalize_identifiers;

/// Normalize freeform airline, aircraft and route strings
#[utoipa::path(
    post,
    path = "/v1/normalize",
    request_body = RawIdentifiers,
    responses(
        (status = 200, description = "Canonical identifiers", body = CanonicalIdentifiers)
    ),
    tag = "resolve"
)]
#[post("/v1/normalize")]
pub async fn normalize(body: web::Json<RawIdentifiers>) -> impl Responder {
    let canonical = normalize_identifiers(&body);

    tracing::debug!(
        airline = %canonical.airline,
        aircraft = %canonical.aircraft,
        route = %canonical.route,
        route_valid = canonical.route_valid,
        "Normalized identifiers"
    );

    HttpResponse::Ok().json(canonical)
}

/// Resolve an already-extracted evidence bundle to a seat product
///
/// The response echoes the evidence merged with the resolution.
#[utoipa::path(
    post,
    path = "/v1/resolve",
    request_body = EvidenceBundle,
    responses(
        (status = 200, description = "Resolution computed", body = ClassifyResponse)
    ),
    tag = "resolve"
)]
#[post("/v1/resolve")]
pub async fn resolve(state: web::Data<AppState>, body: web::Json<EvidenceBundle>) -> impl Responder {
    let evidence = body.into_inner();
    let resolution = state.resolver.resolve(&evidence);

    HttpResponse::Ok().json(ClassifyResponse {
        evidence,
        resolution,
    })
}

/// Configure resolution routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(normalize).service(resolve);
}
