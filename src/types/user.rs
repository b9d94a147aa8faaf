use serde::{Deserialize, Serialize};

// No Debug derives here: a formatted form would put the plaintext
// password into log output.

/// Inbound signup form.
#[derive(Serialize, Deserialize)]
pub struct SignupForm {
    pub email: String,
    pub password: String,
}

/// Inbound login form.
#[derive(Serialize, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// Create payload handed to the credential store. The password has
/// already been hashed by the time this exists.
#[derive(Clone)]
pub struct NewUser {
    pub email: String,
    pub password_hash: String,
}
