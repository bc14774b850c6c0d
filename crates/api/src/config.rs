use crate::auth::jwt::SessionConfig;

/// Server configuration loaded from environment variables.
///
/// All fields except the admin secrets have defaults suitable for local
/// development. In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Apply pending migrations before serving (default: `true`).
    pub run_migrations_on_startup: bool,
    /// Admin password and session token settings.
    pub session: SessionConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                     | Default   |
    /// |-----------------------------|-----------|
    /// | `HOST`                      | `0.0.0.0` |
    /// | `PORT`                      | `3000`    |
    /// | `REQUEST_TIMEOUT_SECS`      | `30`      |
    /// | `RUN_MIGRATIONS_ON_STARTUP` | `true`    |
    ///
    /// See [`SessionConfig::from_env`] for the admin settings.
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let run_migrations_on_startup: bool = std::env::var("RUN_MIGRATIONS_ON_STARTUP")
            .unwrap_or_else(|_| "true".into())
            .parse()
            .expect("RUN_MIGRATIONS_ON_STARTUP must be true or false");

        let session = SessionConfig::from_env();

        Self {
            host,
            port,
            request_timeout_secs,
            run_migrations_on_startup,
            session,
        }
    }
}
