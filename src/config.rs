use std::env;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 5002;

/// Server settings read from the environment (after `.env` is loaded).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_values(env::var("HOST").ok(), env::var("PORT").ok())
    }

    fn from_values(host: Option<String>, port: Option<String>) -> Self {
        Self {
            host: host.unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: port
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_PORT),
        }
    }
}
