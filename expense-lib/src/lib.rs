#[macro_use]
extern crate actix_web;

use actix_web::web::{Data, JsonConfig, ServiceConfig};
use actix_web::HttpRequest;
use auth::Authorization;
use error::HandlerError;
use expense_repo::expense_repo::ExpenseRepo;
use std::future::Future;
use std::sync::Arc;

pub mod auth;
pub mod config;
pub mod error;
pub mod expense;
pub mod health;
pub mod tracing;

/// Undecodable JSON bodies become 400 responses with a `{"message": ...}` body.
pub fn json_config() -> JsonConfig {
    JsonConfig::default().error_handler(|err, req| {
        ::tracing::debug!(req_path = req.path(), %err, "undecodable json body");
        HandlerError::Validation(err.to_string()).into()
    })
}

/// Registers the health probe and the expense routes. Everything under `/expenses` is wrapped in
/// `authorization`.
pub fn app_config_func<F, O>(
    expense_repo: Arc<dyn ExpenseRepo>,
    authorization: Authorization<F>,
) -> impl FnOnce(&mut ServiceConfig)
where
    F: Fn(String, HttpRequest) -> O + 'static,
    O: Future<Output = Result<bool, anyhow::Error>> + 'static,
{
    move |cfg: &mut ServiceConfig| {
        cfg.app_data(Data::new(expense_repo))
            .app_data(json_config())
            .service(health::health)
            .service(expense::expense_service().wrap(authorization));
    }
}
