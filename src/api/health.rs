//! Health check endpoints for Kubernetes liveness and readiness probes

use actix_web::{HttpResponse, Responder, get, web};
use serde::Serialize;
use utoipa::ToSchema;

use crate::app::AppState;

#[derive(Serialize, ToSchema)]
pub struct HealthStatus {
    pub status: String,
    pub version: String,
}

#[derive(Serialize, ToSchema)]
pub struct ReadinessStatus {
    pub status: String,
    pub version: String,
    pub catalog: CatalogHealth,
    pub dependencies: DependencyHealth,
}

#[derive(Serialize, ToSchema)]
pub struct CatalogHealth {
    pub rules: usize,
    pub fingerprint: String,
}

#[derive(Serialize, ToSchema)]
pub struct DependencyHealth {
    pub extractor: String,
}

/// Liveness probe endpoint
///
/// Always returns 200 OK if the service is running.
/// Used by Kubernetes to determine if the pod should be restarted.
#[utoipa::path(
    get,
    path = "/health/live",
    responses(
        (status = 200, description = "Service is alive", body = HealthStatus)
    ),
    tag = "health"
)]
#[get("/health/live")]
pub async fn liveness() -> impl Responder {
    HttpResponse::Ok().json(HealthStatus {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Readiness probe endpoint
///
/// The catalog is validated at startup, so a running instance can always
/// resolve. A missing extractor only disables classification and is
/// reported as `disabled`.
#[utoipa::path(
    get,
    path = "/health/ready",
    responses(
        (status = 200, description = "Service is ready", body = ReadinessStatus)
    ),
    tag = "health"
)]
#[get("/health/ready")]
pub async fn readiness(state: web::Data<AppState>) -> impl Responder {
    let catalog = state.resolver.catalog();

    let extractor_status = match state.extractor.as_ref() {
        Some(_) => "configured",
        None => "disabled",
    };

    HttpResponse::Ok().json(ReadinessStatus {
        status: "ready".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        catalog: CatalogHealth {
            rules: catalog.len(),
            fingerprint: catalog.fingerprint(),
        },
        dependencies: DependencyHealth {
            extractor: extractor_status.to_string(),
        },
    })
}

/// Configure health check routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(liveness).service(readiness);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::{StubExtractor, test_state};
    use crate::model::EvidenceBundle;
    use actix_web::{App, test};
    use serde_json::Value;
    use std::sync::Arc;

    #[actix_web::test]
    async fn test_liveness() {
        let app = test::init_service(App::new().configure(configure)).await;
        let req = test::TestRequest::get().uri("/health/live").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["status"], "ok");
    }

    #[actix_web::test]
    async fn test_readiness_reports_catalog_and_extractor() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_state(None)))
                .configure(configure),
        )
        .await;
        let req = test::TestRequest::get().uri("/health/ready").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["status"], "ready");
        assert_eq!(body["catalog"]["rules"], 15);
        assert_eq!(body["dependencies"]["extractor"], "disabled");

        let stub = StubExtractor::returning(EvidenceBundle::default());
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_state(Some(Arc::new(stub)))))
                .configure(configure),
        )
        .await;
        let req = test::TestRequest::get().uri("/health/ready").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["dependencies"]["extractor"], "configured");
    }
}
