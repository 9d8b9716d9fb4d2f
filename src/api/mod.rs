pub mod classify;
pub mod error;
pub mod health;
pub mod openapi;
pub mod resolve;
pub mod rules;

pub use error::{ApiError, ErrorResponse};

/// Register every route of the service
pub fn configure(cfg: &mut actix_web::web::ServiceConfig) {
    cfg.configure(resolve::configure)
        .configure(classify::configure)
        .configure(rules::configure)
        .configure(health::configure)
        .configure(openapi::configure);
}
