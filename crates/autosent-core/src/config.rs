use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

const DEFAULT_API_BASE_URL: &str = "http://localhost:3001";
const DEFAULT_AUTH_BASE_URL: &str = "http://localhost:5000";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the process environment so it can be tested with a plain
/// `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_addr = |var: &str, default: &str| -> Result<SocketAddr, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<usize>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let env = parse_environment(&or_default("AUTOSENT_ENV", "development"))?;

    // The dashboard historically read REACT_APP_API_BASE_URL; honour it as a
    // fallback so existing deployments keep working.
    let api_base_url = lookup("AUTOSENT_API_BASE_URL")
        .or_else(|_| lookup("REACT_APP_API_BASE_URL"))
        .ok();
    let api_base_url = match (api_base_url, &env) {
        (Some(url), _) => url,
        (None, Environment::Production) => {
            return Err(ConfigError::MissingEnvVar(
                "AUTOSENT_API_BASE_URL".to_string(),
            ))
        }
        (None, _) => DEFAULT_API_BASE_URL.to_string(),
    };
    validate_url("AUTOSENT_API_BASE_URL", &api_base_url)?;

    let auth_base_url = or_default("AUTOSENT_AUTH_BASE_URL", DEFAULT_AUTH_BASE_URL);
    validate_url("AUTOSENT_AUTH_BASE_URL", &auth_base_url)?;

    let bind_addr = parse_addr("AUTOSENT_BIND_ADDR", "0.0.0.0:3000")?;
    let log_level = or_default("AUTOSENT_LOG_LEVEL", "info");
    let http_timeout_secs = parse_u64("AUTOSENT_HTTP_TIMEOUT_SECS", "30")?;
    let user_agent = or_default("AUTOSENT_USER_AGENT", "autosent/0.1 (feedback-dashboard)");

    let moving_average_window = parse_usize("AUTOSENT_MOVING_AVERAGE_WINDOW", "7")?;
    if moving_average_window == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "AUTOSENT_MOVING_AVERAGE_WINDOW".to_string(),
            reason: "window must be at least 1".to_string(),
        });
    }

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        api_base_url,
        auth_base_url,
        http_timeout_secs,
        user_agent,
        moving_average_window,
    })
}

/// Parse a string into an `Environment` variant.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "AUTOSENT_ENV".to_string(),
            reason: format!("expected development, test or production; got '{other}'"),
        }),
    }
}

fn validate_url(var: &str, raw: &str) -> Result<(), ConfigError> {
    if raw.starts_with("http://") || raw.starts_with("https://") {
        Ok(())
    } else {
        Err(ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: format!("'{raw}' is not an http(s) URL"),
        })
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
