use actix_web::http::header;
use actix_web::{HttpResponse, Responder};
use serde::Serialize;

use crate::types::error::AppError;

pub enum ApiResponse<T> {
    Ok(T),
    EmptyOk,
    SeeOther(&'static str),
}

impl<T: Serialize> Responder for ApiResponse<T> {
    type Body = actix_web::body::BoxBody;
    fn respond_to(self, _: &actix_web::HttpRequest) -> HttpResponse {
        match self {
            ApiResponse::Ok(v) => HttpResponse::Ok().json(v),
            ApiResponse::EmptyOk => HttpResponse::Ok().finish(),
            ApiResponse::SeeOther(location) => HttpResponse::SeeOther()
                .insert_header((header::LOCATION, location))
                .finish(),
        }
    }
}

pub type ApiResult<T> = Result<ApiResponse<T>, AppError>;
