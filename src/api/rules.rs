//! REST API endpoint for browsing the loaded rule catalog

use actix_web::{HttpResponse, Responder, get, web};
use serde::Serialize;
use utoipa::ToSchema;

use crate::app::AppState;
use crate::model::RuleSummary;

#[derive(Debug, Serialize, ToSchema)]
pub struct RuleListResponse {
    pub rules: Vec<RuleSummary>,
    pub total_count: usize,
    /// SHA-256 of the loaded catalog
    pub fingerprint: String,
}

/// List the product rules in catalog order
#[utoipa::path(
    get,
    path = "/v1/rules",
    responses(
        (status = 200, description = "Rules retrieved successfully", body = RuleListResponse)
    ),
    tag = "rules"
)]
#[get("/v1/rules")]
pub async fn list_rules(state: web::Data<AppState>) -> impl Responder {
    let catalog = state.resolver.catalog();

    HttpResponse::Ok().json(RuleListResponse {
        rules: catalog.iter().map(RuleSummary::from).collect(),
        total_count: catalog.len(),
        fingerprint: catalog.fingerprint(),
    })
}

/// Configure rule catalog routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(list_rules);
}
