use std::sync::Arc;
use std::time::Duration;

use portal_auth::auth::session::SessionStore;
use portal_auth::db::service::DbService;
use tempfile::TempDir;

pub mod client;

pub struct TestContext {
    pub db: Arc<DbService>,
    pub sessions: Arc<SessionStore>,
    _data_dir: TempDir,
}

impl TestContext {
    /// Fresh store per test: a throwaway SQLite file brought up through
    /// the same migration path production uses.
    pub async fn new() -> TestContext {
        let data_dir = TempDir::new().expect("Failed to create temp dir");
        let db_path = data_dir.path().join("portal-auth-test.sqlite");
        let db_url = format!("sqlite://{}?mode=rwc", db_path.display());

        let db = Arc::new(
            DbService::connect(&db_url)
                .await
                .expect("Failed to initialize test database"),
        );

        TestContext {
            db,
            sessions: Arc::new(SessionStore::new(Duration::from_secs(3600))),
            _data_dir: data_dir,
        }
    }
}

// Test data helpers
pub mod test_data {
    use portal_auth::types::user::{LoginForm, SignupForm};

    pub const PASSWORD: &str = "a sound passphrase";

    pub fn sample_signup() -> SignupForm {
        SignupForm {
            email: "test@example.com".to_string(),
            password: PASSWORD.to_string(),
        }
    }

    pub fn signup_with_email(email: &str) -> SignupForm {
        SignupForm {
            email: email.to_string(),
            password: PASSWORD.to_string(),
        }
    }

    pub fn login(email: &str, password: &str) -> LoginForm {
        LoginForm {
            email: email.to_string(),
            password: password.to_string(),
        }
    }
}
