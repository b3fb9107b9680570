use std::env;

use crate::config::ConfigError;

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret_key: String,
    pub issuer: String,
    pub leeway_seconds: u64,
}

impl JwtConfig {
    /// Load JWT verification settings from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|key| env::var(key).ok())
    }

    pub(crate) fn from_vars<F>(var: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let secret_key = var("JWT_SECRET").ok_or(ConfigError::Missing("JWT_SECRET"))?;

        // HS256 requires at least 32 bytes
        if secret_key.len() < 32 {
            return Err(ConfigError::Invalid {
                key: "JWT_SECRET",
                reason: "must be at least 32 characters long for HS256".to_string(),
            });
        }

        let issuer = var("JWT_ISSUER").unwrap_or_else(|| "learning-log".to_string());

        let leeway_seconds = match var("JWT_LEEWAY_SECONDS") {
            Some(raw) => raw.parse::<u64>().map_err(|e| ConfigError::Invalid {
                key: "JWT_LEEWAY_SECONDS",
                reason: e.to_string(),
            })?,
            None => 30,
        };

        Ok(Self {
            secret_key,
            issuer,
            leeway_seconds,
        })
    }
}
