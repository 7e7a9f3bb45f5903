//! Client for the sign-up/sign-in collaborator service.

use autosent_core::AppConfig;
use reqwest::{Client, StatusCode, Url};

use crate::error::ClientError;
use crate::http::{build_http_client, endpoint, parse_base_url, read_json};
use crate::types::{SignInRequest, SignInResponse, SignUpRequest, SignUpResponse};

const DEFAULT_USER_AGENT: &str = "autosent/0.1 (feedback-dashboard)";

pub struct AuthClient {
    client: Client,
    base_url: Url,
}

impl AuthClient {
    /// # Errors
    ///
    /// Returns [`ClientError::Http`] if the `reqwest::Client` cannot be
    /// built, or [`ClientError::InvalidBaseUrl`] for a malformed base URL.
    pub fn from_config(config: &AppConfig) -> Result<Self, ClientError> {
        Ok(Self {
            client: build_http_client(config.http_timeout_secs, &config.user_agent)?,
            base_url: parse_base_url(&config.auth_base_url)?,
        })
    }

    /// # Errors
    ///
    /// Returns [`ClientError::InvalidBaseUrl`] if `base_url` is not a valid URL.
    pub fn with_base_url(base_url: &str, timeout_secs: u64) -> Result<Self, ClientError> {
        Ok(Self {
            client: build_http_client(timeout_secs, DEFAULT_USER_AGENT)?,
            base_url: parse_base_url(base_url)?,
        })
    }

    /// Registers a new user.
    ///
    /// # Errors
    ///
    /// - [`ClientError::Http`] on network failure or timeout.
    /// - [`ClientError::Api`] on any non-2xx status, with the service's message.
    pub async fn sign_up(&self, request: &SignUpRequest) -> Result<SignUpResponse, ClientError> {
        let url = endpoint(&self.base_url, &["signup"])?;
        let result = match self.client.post(url).json(request).send().await {
            Ok(response) => read_json(response, "POST /signup").await,
            Err(e) => Err(ClientError::Http(e)),
        };
        result.inspect_err(|e| tracing::warn!(error = %e, "sign-up failed"))
    }

    /// Authenticates an existing user.
    ///
    /// # Errors
    ///
    /// - [`ClientError::Http`] on network failure or timeout.
    /// - [`ClientError::UserNotFound`] on `404`.
    /// - [`ClientError::InvalidCredentials`] on `401`.
    /// - [`ClientError::Api`] on any other non-2xx status.
    pub async fn sign_in(&self, request: &SignInRequest) -> Result<SignInResponse, ClientError> {
        let url = endpoint(&self.base_url, &["signin"])?;
        let result = match self.client.post(url).json(request).send().await {
            Ok(response) => match response.status() {
                StatusCode::NOT_FOUND => Err(ClientError::UserNotFound),
                StatusCode::UNAUTHORIZED => Err(ClientError::InvalidCredentials),
                _ => read_json(response, "POST /signin").await,
            },
            Err(e) => Err(ClientError::Http(e)),
        };
        result.inspect_err(|e| tracing::warn!(error = %e, "sign-in failed"))
    }
}
