use std::sync::Arc;

use actix_web::middleware::from_fn;
use actix_web::{web, App};
use portal_auth::auth::guard::access_guard;
use portal_auth::auth::password;
use portal_auth::auth::policy::AccessPolicy;
use portal_auth::auth::session::SessionStore;
use portal_auth::db::service::DbService;
use portal_auth::routes::configure_routes;
use portal_auth::types::user::NewUser;
use uuid::Uuid;

pub struct TestClient {
    pub db: Arc<DbService>,
    pub sessions: Arc<SessionStore>,
}

impl TestClient {
    pub fn new(db: Arc<DbService>, sessions: Arc<SessionStore>) -> Self {
        TestClient { db, sessions }
    }

    #[allow(dead_code)]
    pub fn create_app(
        &self,
    ) -> actix_web::App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(Arc::clone(&self.db)))
            .app_data(web::Data::new(Arc::clone(&self.sessions)))
            .app_data(web::Data::new(AccessPolicy::default_policy()))
            .wrap(from_fn(access_guard))
            .configure(configure_routes)
    }

    /// Seed a user directly through the store, returning (id, email).
    #[allow(dead_code)]
    pub async fn create_test_user(&self, email: Option<String>, password: &str) -> (Uuid, String) {
        let email = email.unwrap_or_else(|| format!("user-{}@test.com", Uuid::new_v4()));
        let password_hash = password::hash_password(password).expect("Failed to hash password");

        let user_id = self
            .db
            .create_user(NewUser {
                email: email.clone(),
                password_hash,
            })
            .await
            .expect("Failed to create user");

        (user_id, email)
    }

    /// Issue a session for an already-created user, as a successful login
    /// would.
    #[allow(dead_code)]
    pub fn open_session(&self, user_id: Uuid) -> String {
        self.sessions.issue(user_id)
    }
}
