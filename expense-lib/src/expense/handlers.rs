use crate::error::HandlerError;
use anyhow::Context;
use actix_web::{web, HttpMessage, HttpRequest, HttpResponse, Responder};
use expense_repo::expense_repo::{ExpenseRepo, NewExpense};
use std::sync::Arc;
use tracing::{debug, info};
use tracing_actix_web::RootSpan;

fn record_expense_id(req: &HttpRequest, expense_id: i32) {
    if let Some(root_span) = req.extensions().get::<RootSpan>() {
        root_span.record("expense_id", &expense_id);
    }
}

#[post("")]
pub async fn create_expense(
    expense_repo: web::Data<Arc<dyn ExpenseRepo>>,
    new_expense: web::Json<NewExpense>,
    req: HttpRequest,
) -> Result<impl Responder, HandlerError> {
    let expense = expense_repo
        .create_expense(new_expense.into_inner())
        .await?;
    record_expense_id(&req, expense.id);
    info!(expense_id = expense.id, "created expense");
    Ok(HttpResponse::Created().json(expense))
}

#[get("")]
pub async fn get_all_expenses(
    expense_repo: web::Data<Arc<dyn ExpenseRepo>>,
) -> Result<impl Responder, HandlerError> {
    let expenses = expense_repo.get_all_expenses().await?;
    debug!(count = expenses.len(), "fetched expenses");
    Ok(HttpResponse::Ok().json(expenses))
}

/// The id is not validated up front. A segment that does not fit the integer id column fails
/// like a malformed query would, with a 500.
#[get("/{expense_id}")]
pub async fn get_expense(
    expense_repo: web::Data<Arc<dyn ExpenseRepo>>,
    expense_id: web::Path<String>,
    req: HttpRequest,
) -> Result<impl Responder, HandlerError> {
    let expense_id = expense_id
        .parse::<i32>()
        .with_context(|| format!("Invalid expense id {:?}", expense_id.as_str()))
        .map_err(HandlerError::Storage)?;
    record_expense_id(&req, expense_id);

    let expense = expense_repo.get_expense(expense_id).await?;
    Ok(HttpResponse::Ok().json(expense))
}

#[put("/{expense_id}")]
pub async fn update_expense(
    expense_repo: web::Data<Arc<dyn ExpenseRepo>>,
    expense_id: web::Path<String>,
    updated_expense: web::Json<NewExpense>,
    req: HttpRequest,
) -> Result<impl Responder, HandlerError> {
    let expense_id: i32 = expense_id
        .parse()
        .map_err(|_| HandlerError::Validation("invalid id".to_string()))?;
    record_expense_id(&req, expense_id);

    let expense = expense_repo
        .update_expense(expense_id, updated_expense.into_inner())
        .await?;
    info!(expense_id, "updated expense");
    Ok(HttpResponse::Ok().json(expense))
}
