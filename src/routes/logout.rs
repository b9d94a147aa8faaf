use std::sync::Arc;

use actix_web::cookie::Cookie;
use actix_web::http::header;
use actix_web::{post, web, HttpResponse};

use crate::auth::guard::CurrentUser;
use crate::auth::session::{SessionStore, SESSION_COOKIE};
use crate::routes::LOGIN_PATH;

#[post("")]
async fn logout(user: CurrentUser, sessions: web::Data<Arc<SessionStore>>) -> HttpResponse {
    sessions.revoke(&user.token);

    let mut expired = Cookie::build(SESSION_COOKIE, "").path("/").finish();
    expired.make_removal();

    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, LOGIN_PATH))
        .cookie(expired)
        .finish()
}
