use std::net::SocketAddr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    /// Base URL of the upstream feedback data API.
    pub api_base_url: String,
    /// Base URL of the sign-up/sign-in service. Configured separately from
    /// the data API because the two are deployed independently.
    pub auth_base_url: String,
    pub http_timeout_secs: u64,
    pub user_agent: String,
    pub moving_average_window: usize,
}
