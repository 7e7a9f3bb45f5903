use autosent_client::{AuthClient, ClientError, SignInRequest, SignInResponse, SignUpRequest};
use autosent_core::{AppConfig, Route};

/// Line printed after a sign-in attempt. A success also names the next view.
pub(crate) fn sign_in_outcome(result: &Result<SignInResponse, ClientError>) -> String {
    match result {
        Ok(response) => format!("{} -> {}", response.message, Route::Home),
        Err(ClientError::UserNotFound) => "User not found!".to_string(),
        Err(ClientError::InvalidCredentials) => "Invalid credentials!".to_string(),
        Err(e) => format!("sign-in failed: {e}"),
    }
}

pub(crate) async fn run_sign_in(
    config: &AppConfig,
    email: String,
    password: String,
) -> anyhow::Result<()> {
    let client = AuthClient::from_config(config)?;
    let result = client.sign_in(&SignInRequest { email, password }).await;
    let outcome = sign_in_outcome(&result);
    let response = result.map_err(|_| anyhow::anyhow!(outcome.clone()))?;
    if let Some(user) = &response.user {
        tracing::debug!(%user, "signed in");
    }
    println!("{outcome}");
    Ok(())
}

pub(crate) async fn run_sign_up(
    config: &AppConfig,
    username: String,
    email: String,
    password: String,
) -> anyhow::Result<()> {
    let client = AuthClient::from_config(config)?;
    let response = client
        .sign_up(&SignUpRequest {
            username,
            email,
            password,
        })
        .await?;
    println!("{} -> {}", response.message, Route::SignIn);
    Ok(())
}
