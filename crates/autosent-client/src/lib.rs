//! HTTP clients for the feedback data API and the auth collaborator.

pub mod auth;
pub mod data;
pub mod error;
pub mod types;

mod http;

pub use auth::AuthClient;
pub use data::DataApiClient;
pub use error::ClientError;
pub use types::{SignInRequest, SignInResponse, SignUpRequest, SignUpResponse};
