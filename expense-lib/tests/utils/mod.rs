#![allow(dead_code, unused_macros)]

use std::sync::Arc;

use actix_web::http::header::AUTHORIZATION;
use actix_web::test::TestRequest;
use rstest::*;
use tracing::info;
use tracing::Level;

use expense_repo::expense_repo::{ExpenseRepo, NewExpense};

pub mod mock;

pub const TEST_TOKEN: &str = "November 10, 2009";

macro_rules! build_app {
    ($expense_repo:expr) => {{
        let authorization = expense_lib::auth::Authorization::new(
            expense_lib::auth::static_token_validator(crate::utils::TEST_TOKEN.to_string()),
        );
        let app = actix_web::App::new()
            .wrap(expense_lib::tracing::create_middleware())
            .configure(expense_lib::app_config_func($expense_repo, authorization));
        tracing::info!("Built app");
        app
    }};
}

macro_rules! create_expense {
    (&$service:ident, $new_expense:expr) => {{
        let request = crate::utils::authorized(TestRequest::post())
            .uri("/expenses")
            .set_json(&$new_expense)
            .to_request();
        let response = test::call_service(&$service, request).await;
        assert_eq!(
            response.status(),
            actix_web::http::StatusCode::CREATED,
            "Got {} response when creating expense",
            response.status()
        );
        test::read_body_json(response).await
    }};
}

/// Adds the token the test app accepts.
pub fn authorized(request: TestRequest) -> TestRequest {
    request.insert_header((AUTHORIZATION, TEST_TOKEN))
}

pub fn strawberry_smoothie() -> NewExpense {
    NewExpense::new(
        "strawberry smoothie".to_string(),
        79,
        "night market promotion discount 10 bath".to_string(),
        vec!["food".to_string(), "beverage".to_string()],
    )
}

pub fn apple_smoothie() -> NewExpense {
    NewExpense::new(
        "apple smoothie".to_string(),
        89,
        "no discount".to_string(),
        vec!["beverage".to_string()],
    )
}

#[fixture]
#[once]
pub fn tracing_setup() -> () {
    tracing_subscriber::fmt()
        .pretty()
        .with_max_level(Level::DEBUG)
        .init();
    info!("tracing initialized");
}

#[fixture]
pub fn repo() -> Arc<dyn ExpenseRepo> {
    expense_repo::mem_repo::create_repo()
}

#[fixture]
pub fn failing_repo() -> Arc<dyn ExpenseRepo> {
    Arc::new(mock::FailingExpenseRepo)
}
