use std::sync::Arc;

use actix_web::{get, web, HttpResponse};

use crate::auth::guard::CurrentUser;
use crate::db::service::DbService;
use crate::types::error::AppError;

#[get("")]
async fn home(user: CurrentUser, db: web::Data<Arc<DbService>>) -> Result<HttpResponse, AppError> {
    // The guard already vetted the session; a missing row means the store
    // lost the user out from under a live session.
    let record = db
        .get_user_by_id(&user.id)
        .await?
        .ok_or(AppError::Unauthenticated)?;

    Ok(HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(format!(
            r#"<!doctype html>
<html>
<head><title>Home</title></head>
<body>
  <h1>Welcome, {}</h1>
  <form method="post" action="/logout">
    <button type="submit">Log out</button>
  </form>
</body>
</html>
"#,
            escape_html(&record.email)
        )))
}

fn escape_html(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
