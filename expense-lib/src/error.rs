use actix_web::body::BoxBody;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use expense_repo::expense_repo::ExpenseRepoError;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{error, warn};

/// Body of every error response.
#[derive(Serialize, Deserialize, Debug)]
pub struct ErrorMessage {
    pub message: String,
}

#[derive(Error, Debug)]
pub enum HandlerError {
    #[error("{0}")]
    Validation(String),
    #[error("expense not found")]
    NotFound,
    #[error("{0:#}")]
    Storage(anyhow::Error),
    #[error("missing authorization header")]
    MissingCredential,
    #[error("invalid authorization header")]
    InvalidCredential,
    #[error("unauthorized")]
    Unauthorized,
}

impl From<ExpenseRepoError> for HandlerError {
    fn from(e: ExpenseRepoError) -> Self {
        match e {
            ExpenseRepoError::ExpenseNotFound(_) => HandlerError::NotFound,
            ExpenseRepoError::Other(e) => HandlerError::Storage(e),
        }
    }
}

impl ResponseError for HandlerError {
    fn status_code(&self) -> StatusCode {
        match self {
            HandlerError::Validation(_) => StatusCode::BAD_REQUEST,
            HandlerError::NotFound => StatusCode::NOT_FOUND,
            HandlerError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            HandlerError::MissingCredential => StatusCode::BAD_REQUEST,
            HandlerError::InvalidCredential => StatusCode::BAD_REQUEST,
            HandlerError::Unauthorized => StatusCode::UNAUTHORIZED,
        }
    }

    fn error_response(&self) -> HttpResponse<BoxBody> {
        let status = self.status_code();
        if status.is_server_error() {
            error!(%status, err = %self);
        } else {
            warn!(%status, err = %self);
        }

        HttpResponse::build(status).json(ErrorMessage {
            message: self.to_string(),
        })
    }
}
