use actix_web::{HttpResponse, ResponseError};
use std::fmt;

/// Errors surfaced to the submitting UI. Message text is fixed and
/// human-readable; there is no retry and no structured error code.
#[derive(Debug)]
pub enum AppError {
    /// No active session; the message names the attempted action.
    Unauthenticated(String),
    /// A form field failed validation.
    Validation(&'static str),
    /// The target booking does not belong to the caller.
    Forbidden(&'static str),
    /// A backend write failed. The underlying cause is logged at the call
    /// site; only the fixed message reaches the client.
    Persistence(&'static str),
    /// A backend read failed (ownership probe and the like).
    Db(sqlx::Error),
}

impl AppError {
    pub fn unauthenticated(action: &str) -> Self {
        AppError::Unauthenticated(format!("You must be logged in to {action}"))
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Unauthenticated(msg) => write!(f, "{msg}"),
            AppError::Validation(msg) => write!(f, "{msg}"),
            AppError::Forbidden(msg) => write!(f, "{msg}"),
            AppError::Persistence(msg) => write!(f, "{msg}"),
            AppError::Db(e) => write!(f, "Database error: {e}"),
        }
    }
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::Unauthenticated(msg) => HttpResponse::Unauthorized().body(msg.clone()),
            AppError::Validation(msg) => HttpResponse::BadRequest().body(*msg),
            AppError::Forbidden(msg) => HttpResponse::Forbidden().body(*msg),
            AppError::Persistence(msg) => HttpResponse::InternalServerError().body(*msg),
            AppError::Db(_) => {
                log::error!("{self}");
                HttpResponse::InternalServerError().body("Internal Server Error")
            }
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        AppError::Db(e)
    }
}
