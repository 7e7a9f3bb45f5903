use serde::{Deserialize, Serialize};

/// Body of `POST /signup`.
#[derive(Clone, Serialize)]
pub struct SignUpRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Body of `POST /signin`.
#[derive(Clone, Serialize)]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
}

impl std::fmt::Debug for SignUpRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignUpRequest")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl std::fmt::Debug for SignInRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignInRequest")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SignUpResponse {
    pub message: String,
}

/// Successful sign-in. `user` is passed through untouched.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SignInResponse {
    pub message: String,
    #[serde(default)]
    pub user: Option<serde_json::Value>,
}
