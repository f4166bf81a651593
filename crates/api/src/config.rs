//! Application configuration loaded from environment variables.

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_ENVIRONMENT: &str = "development";
const DEFAULT_LOG_LEVEL: &str = "info";
const DEFAULT_WELCOME_MESSAGE: &str = "Welcome to the Axum Server with Jenkins CI/CD";

/// Server configuration with sensible defaults.
///
/// Reads from environment variables:
/// - `HOST` — bind address (default: `"0.0.0.0"`)
/// - `PORT` — listen port (default: `3000`)
/// - `APP_ENV`, falling back to `NODE_ENV` — environment label (default: `"development"`)
/// - `RUST_LOG` — tracing filter directive (default: `"info"`)
/// - `WELCOME_MESSAGE` — body of `GET /` (default: the Jenkins CI/CD greeting)
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub environment: String,
    pub log_level: String,
    pub welcome_message: String,
}

impl Config {
    /// Loads configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolves configuration through an arbitrary variable lookup.
    ///
    /// Empty values are treated as unset. An unparseable `PORT` falls back
    /// to the default rather than aborting startup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            host: get("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: get("PORT")
                .and_then(|p| p.trim().parse().ok())
                .unwrap_or(DEFAULT_PORT),
            environment: get("APP_ENV")
                .or_else(|| get("NODE_ENV"))
                .unwrap_or_else(|| DEFAULT_ENVIRONMENT.to_string()),
            log_level: get("RUST_LOG").unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
            welcome_message: get("WELCOME_MESSAGE")
                .unwrap_or_else(|| DEFAULT_WELCOME_MESSAGE.to_string()),
        }
    }

    /// Returns the `"host:port"` bind address string.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Whether the environment label names a production deployment.
    pub fn is_production(&self) -> bool {
        self.environment.eq_ignore_ascii_case("production")
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            environment: DEFAULT_ENVIRONMENT.to_string(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            welcome_message: DEFAULT_WELCOME_MESSAGE.to_string(),
        }
    }
}
