use std::sync::Arc;

use actix_web::{get, post, web, HttpResponse};

use crate::auth::password;
use crate::db::service::DbService;
use crate::routes::LOGIN_PATH;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::{NewUser, SignupForm};

const SIGNUP_PAGE: &str = r#"<!doctype html>
<html>
<head><title>Sign up</title></head>
<body>
  <h1>Sign up</h1>
  <form method="post" action="/signup">
    <label>Email <input type="email" name="email" required></label>
    <label>Password <input type="password" name="password" required></label>
    <button type="submit">Create account</button>
  </form>
  <p><a href="/login">Already have an account? Log in</a></p>
</body>
</html>
"#;

#[get("")]
async fn page() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(SIGNUP_PAGE)
}

#[post("")]
async fn submit(db: web::Data<Arc<DbService>>, form: web::Form<SignupForm>) -> ApiResult<()> {
    let form = form.into_inner();
    let email = form.email.trim().to_lowercase();

    if email.is_empty() || !email.contains('@') {
        return Err(AppError::Validation("invalid email format".into()));
    }
    if form.password.len() < 8 {
        return Err(AppError::Validation(
            "password must be at least 8 characters".into(),
        ));
    }

    let password_hash = password::hash_password_blocking(form.password).await?;
    db.create_user(NewUser {
        email,
        password_hash,
    })
    .await?;

    Ok(ApiResponse::SeeOther(LOGIN_PATH))
}
