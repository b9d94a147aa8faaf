use std::sync::Arc;

use actix_web::cookie::{Cookie, SameSite};
use actix_web::http::header;
use actix_web::{get, post, web, HttpResponse};
use serde::Deserialize;

use crate::auth::password;
use crate::auth::session::{SessionStore, SESSION_COOKIE};
use crate::db::service::DbService;
use crate::routes::HOME_PATH;
use crate::types::error::AppError;
use crate::types::user::LoginForm;

#[derive(Deserialize)]
struct LoginQuery {
    error: Option<String>,
}

#[get("")]
async fn page(query: web::Query<LoginQuery>) -> HttpResponse {
    // One message for every failure; the page never says which check failed.
    let banner = if query.error.is_some() {
        "<p>Invalid email or password.</p>"
    } else {
        ""
    };
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(format!(
            r#"<!doctype html>
<html>
<head><title>Log in</title></head>
<body>
  <h1>Log in</h1>
  {banner}
  <form method="post" action="/login">
    <label>Email <input type="email" name="email" required></label>
    <label>Password <input type="password" name="password" required></label>
    <button type="submit">Log in</button>
  </form>
  <p><a href="/signup">Need an account? Sign up</a></p>
</body>
</html>
"#
        ))
}

#[post("")]
async fn submit(
    db: web::Data<Arc<DbService>>,
    sessions: web::Data<Arc<SessionStore>>,
    form: web::Form<LoginForm>,
) -> Result<HttpResponse, AppError> {
    let form = form.into_inner();
    let email = form.email.trim().to_lowercase();

    let Some(user) = db.find_user_by_email(&email).await? else {
        // Unknown email burns the same hashing cost as a wrong password.
        password::equalize_timing(form.password).await?;
        return Err(AppError::InvalidCredentials);
    };

    if !password::verify_password_blocking(form.password, user.password_hash).await? {
        return Err(AppError::InvalidCredentials);
    }

    let token = sessions.issue(user.id);

    Ok(HttpResponse::SeeOther()
        .insert_header((header::LOCATION, HOME_PATH))
        .cookie(session_cookie(token))
        .finish())
}

fn session_cookie(token: String) -> Cookie<'static> {
    Cookie::build(SESSION_COOKIE, token)
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .finish()
}
