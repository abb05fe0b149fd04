// Erreurs de l'application et leur traduction en réponse HTTP

use actix_web::http::{StatusCode, header};
use actix_web::{HttpResponse, ResponseError};
use sea_orm::DbErr;
use thiserror::Error;
use validator::ValidationErrors;

use crate::views;

#[derive(Debug, Error)]
pub enum AppError {
    /// Erreurs de champs: le formulaire est ré-affiché, rien n'est écrit
    #[error("invalid submission: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("{0}")]
    NotFound(String),

    #[error("authentication required")]
    Unauthenticated,

    #[error("access denied for {username}")]
    Forbidden { username: String },

    #[error("database error: {0}")]
    Database(#[from] DbErr),

    #[error("password hashing error: {0}")]
    PasswordHash(String),

    #[error("session error: {0}")]
    Session(String),
}

impl AppError {
    pub fn not_found(message: impl Into<String>) -> Self {
        AppError::NotFound(message.into())
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Unauthenticated | AppError::Session(_) => StatusCode::FOUND,
            AppError::Forbidden { .. } => StatusCode::FORBIDDEN,
            AppError::Database(_) | AppError::PasswordHash(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::Unauthenticated | AppError::Session(_) => HttpResponse::Found()
                .insert_header((header::LOCATION, "/app/login"))
                .finish(),
            AppError::Forbidden { username } => HttpResponse::Forbidden()
                .content_type("text/html; charset=utf-8")
                .body(views::pages::forbidden(username)),
            AppError::NotFound(message) => HttpResponse::NotFound()
                .content_type("text/html; charset=utf-8")
                .body(views::pages::error_page("Not found", message)),
            AppError::Validation(errors) => HttpResponse::BadRequest()
                .content_type("text/html; charset=utf-8")
                .body(views::pages::error_page("Invalid data", &errors.to_string())),
            AppError::Database(e) => {
                // Ne pas exposer les erreurs SQL au client
                tracing::error!("database error: {}", e);
                internal_error()
            }
            AppError::PasswordHash(e) => {
                tracing::error!("password hashing error: {}", e);
                internal_error()
            }
        }
    }
}

fn internal_error() -> HttpResponse {
    HttpResponse::InternalServerError()
        .content_type("text/html; charset=utf-8")
        .body(views::pages::error_page(
            "Unexpected error",
            "An error occurred while processing your request.",
        ))
}
