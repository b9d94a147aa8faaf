use actix_web::http::{header, StatusCode};
use actix_web::{HttpResponse, ResponseError};
use sea_orm::DbErr;
use serde::Serialize;
use thiserror::Error;
use tracing::error;

use crate::routes::LOGIN_PATH;

#[derive(Debug, Error)]
pub enum AppError {
    // auth-domain outcomes, expected control flow
    #[error("an account with this email already exists")]
    DuplicateEmail,
    #[error("invalid email or password")]
    InvalidCredentials,
    #[error("authentication required")]
    Unauthenticated,
    #[error("validation error: {0}")]
    Validation(String),

    // infra things
    #[error(transparent)]
    Db(#[from] DbErr),
    #[error("internal error: {0}")]
    Internal(String),
}

#[derive(Serialize)]
struct ErrorBody<'a, 'b> {
    error: &'a str,
    message: &'b str,
}

impl AppError {
    fn kind(&self) -> &'static str {
        match self {
            Self::DuplicateEmail => "DUPLICATE_EMAIL",
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::Unauthenticated => "UNAUTHENTICATED",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Db(_) => "DB_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::DuplicateEmail => StatusCode::CONFLICT,
            Self::InvalidCredentials | Self::Unauthenticated => StatusCode::SEE_OTHER,
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Db(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            // Unknown email and wrong password render identically; the
            // redirect carries a generic marker and nothing else.
            Self::InvalidCredentials => HttpResponse::SeeOther()
                .insert_header((header::LOCATION, "/login?error=1"))
                .finish(),
            Self::Unauthenticated => HttpResponse::SeeOther()
                .insert_header((header::LOCATION, LOGIN_PATH))
                .finish(),
            Self::Db(e) => {
                error!("credential store failure: {e}");
                HttpResponse::build(self.status_code()).json(ErrorBody {
                    error: self.kind(),
                    message: "internal error",
                })
            }
            Self::Internal(msg) => {
                error!("internal error: {msg}");
                HttpResponse::build(self.status_code()).json(ErrorBody {
                    error: self.kind(),
                    message: "internal error",
                })
            }
            _ => {
                let message = self.to_string();
                HttpResponse::build(self.status_code()).json(ErrorBody {
                    error: self.kind(),
                    message: &message,
                })
            }
        }
    }
}
