use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

/// Infrastructure failures. Domain outcomes (validation, forbidden,
/// not-found) are handled per-handler with flash messages; only errors the
/// user can do nothing about end up here.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("database error: {0}")]
    Database(#[from] sea_orm::DbErr),
    #[error("session store error: {0}")]
    Session(#[from] redis::RedisError),
    #[error("template error: {0}")]
    Template(#[from] tera::Error),
    #[error("password hashing error: {0}")]
    PasswordHash(#[from] argon2::password_hash::Error),
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn error_response(&self) -> HttpResponse {
        tracing::error!(error = %self, "request failed");
        HttpResponse::InternalServerError()
            .content_type("text/html; charset=utf-8")
            .body("<h1>Something went wrong</h1><p>Please try again later.</p>")
    }
}
