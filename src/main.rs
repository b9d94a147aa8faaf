use std::sync::Arc;
use std::time::Duration;

use actix_web::middleware::from_fn;
use actix_web::{web, App, HttpServer};
use tracing::info;
use tracing_subscriber::EnvFilter;

use portal_auth::auth::guard::access_guard;
use portal_auth::auth::policy::AccessPolicy;
use portal_auth::auth::session::SessionStore;
use portal_auth::config::{EnvConfig, CONFIG};
use portal_auth::db::service::DbService;
use portal_auth::routes::configure_routes;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = EnvConfig::from_env();
    let addr = format!("0.0.0.0:{}", config.port);

    let db = Arc::new(
        DbService::connect(&config.db_url)
            .await
            .expect("Failed to initialize database"),
    );
    let sessions = Arc::new(SessionStore::new(Duration::from_secs(
        config.session_ttl_secs,
    )));
    let policy = AccessPolicy::default_policy();

    CONFIG.set(config).expect("Config already initialized");

    info!("starting server on {addr}");

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(Arc::clone(&db)))
            .app_data(web::Data::new(Arc::clone(&sessions)))
            .app_data(web::Data::new(policy.clone()))
            .wrap(from_fn(access_guard))
            .configure(configure_routes)
    })
    .bind(addr)?
    .run()
    .await
}
