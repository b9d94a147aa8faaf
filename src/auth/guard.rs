//! Session resolution and access enforcement for every inbound request.

use std::future::{ready, Ready};
use std::sync::Arc;

use actix_web::body::{BoxBody, MessageBody};
use actix_web::dev::{Payload, ServiceRequest, ServiceResponse};
use actix_web::http::header;
use actix_web::middleware::Next;
use actix_web::{web, Error, FromRequest, HttpMessage, HttpRequest, HttpResponse};
use uuid::Uuid;

use crate::auth::policy::{AccessPolicy, Decision};
use crate::auth::session::{SessionStore, SESSION_COOKIE};
use crate::routes::LOGIN_PATH;
use crate::types::error::AppError;

/// Identity resolved from a live session, available to handlers behind
/// protected paths.
#[derive(Clone)]
pub struct CurrentUser {
    pub id: Uuid,
    /// The raw session token, kept so logout can revoke it.
    pub token: String,
}

impl FromRequest for CurrentUser {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(
            req.extensions()
                .get::<CurrentUser>()
                .cloned()
                .ok_or_else(|| AppError::Unauthenticated.into()),
        )
    }
}

/// Wrapped around the whole app: resolves the session cookie, records the
/// identity for handlers, and turns away anonymous requests to protected
/// paths. A denial is always a redirect to the login page; there is no
/// 403 variant that would reveal anything more.
pub async fn access_guard(
    req: ServiceRequest,
    next: Next<impl MessageBody + 'static>,
) -> Result<ServiceResponse<BoxBody>, Error> {
    let policy = req
        .app_data::<web::Data<AccessPolicy>>()
        .ok_or_else(|| actix_web::error::ErrorInternalServerError("access policy not configured"))?
        .clone();
    let sessions = req
        .app_data::<web::Data<Arc<SessionStore>>>()
        .ok_or_else(|| actix_web::error::ErrorInternalServerError("session store not configured"))?
        .clone();

    let identity = req.request().cookie(SESSION_COOKIE).and_then(|cookie| {
        sessions.resolve(cookie.value()).map(|user_id| CurrentUser {
            id: user_id,
            token: cookie.value().to_owned(),
        })
    });

    let authenticated = identity.is_some();
    if let Some(user) = identity {
        req.extensions_mut().insert(user);
    }

    match policy.decide(req.path(), authenticated) {
        Decision::Allow => Ok(next.call(req).await?.map_into_boxed_body()),
        Decision::RequireLogin => {
            let response = HttpResponse::SeeOther()
                .insert_header((header::LOCATION, LOGIN_PATH))
                .finish();
            Ok(req.into_response(response))
        }
    }
}
