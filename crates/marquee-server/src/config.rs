//! Application configuration loaded from environment variables.

use crate::error::AppError;

/// Default bind host.
const DEFAULT_HOST: &str = "0.0.0.0";

/// Default bind port.
const DEFAULT_PORT: u16 = 3000;

/// Default page templates directory.
const DEFAULT_TEMPLATES_DIR: &str = "templates";

/// Complete application configuration loaded from the environment.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// `PostgreSQL` connection URL.
    pub database_url: String,
    /// The host address to bind to.
    pub host: String,
    /// The TCP port to listen on.
    pub port: u16,
    /// Path to the page templates directory.
    pub templates_dir: String,
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// Required variables:
    /// - `DATABASE_URL` -- `PostgreSQL` connection string
    ///
    /// Optional variables:
    /// - `BIND_HOST` -- bind address (default `0.0.0.0`)
    /// - `BIND_PORT` -- listen port (default 3000)
    /// - `TEMPLATES_DIR` -- path to page templates (default `templates`)
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Config`] when `DATABASE_URL` is missing or
    /// `BIND_PORT` is not a valid port number.
    pub fn from_env() -> Result<Self, AppError> {
        let database_url = std::env::var("DATABASE_URL")
            .map_err(|e| AppError::Config(format!("missing required env var DATABASE_URL: {e}")))?;

        let host = std::env::var("BIND_HOST").unwrap_or_else(|_| DEFAULT_HOST.to_owned());

        let port: u16 = match std::env::var("BIND_PORT") {
            Ok(raw) => raw
                .parse()
                .map_err(|e| AppError::Config(format!("invalid BIND_PORT: {e}")))?,
            Err(_) => DEFAULT_PORT,
        };

        let templates_dir =
            std::env::var("TEMPLATES_DIR").unwrap_or_else(|_| DEFAULT_TEMPLATES_DIR.to_owned());

        Ok(Self {
            database_url,
            host,
            port,
            templates_dir,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sane() {
        assert_eq!(DEFAULT_HOST, "0.0.0.0");
        assert_eq!(DEFAULT_PORT, 3000);
        assert_eq!(DEFAULT_TEMPLATES_DIR, "templates");
    }
}
