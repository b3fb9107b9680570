use std::env;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),

    #[error("{key} is invalid: {reason}")]
    Invalid { key: &'static str, reason: String },
}

/// Process-level settings read once at startup
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub environment: String,
    pub db_max_connections: u32,
    pub db_min_connections: u32,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|key| env::var(key).ok())
    }

    pub(crate) fn from_vars<F>(var: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = var("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?;
        let host = var("HOST").ok_or(ConfigError::Missing("HOST"))?;
        let port = parse_var(&var, "PORT")?.ok_or(ConfigError::Missing("PORT"))?;
        let environment = var("RUST_ENV").unwrap_or_else(|| "development".to_string());

        let db_max_connections = parse_var(&var, "DB_MAX_CONNECTIONS")?.unwrap_or(50);
        let db_min_connections = parse_var(&var, "DB_MIN_CONNECTIONS")?.unwrap_or(10);

        if db_min_connections > db_max_connections {
            return Err(ConfigError::Invalid {
                key: "DB_MIN_CONNECTIONS",
                reason: format!("must not exceed DB_MAX_CONNECTIONS ({db_max_connections})"),
            });
        }

        Ok(Self {
            database_url,
            host,
            port,
            environment,
            db_max_connections,
            db_min_connections,
        })
    }

    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_var<F, T>(var: &F, key: &'static str) -> Result<Option<T>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match var(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|e| ConfigError::Invalid {
                key,
                reason: e.to_string(),
            }),
        None => Ok(None),
    }
}
