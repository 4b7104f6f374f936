use crate::error::config::ConfigError;
use axum::http::HeaderValue;

const DEFAULT_PORT: u16 = 8000;
const DEFAULT_ENVIRONMENT: &str = "development";
const DEFAULT_FRONTEND_URL: &str = "http://localhost:3000";

/// Settings used to verify bearer tokens issued by the external identity provider
#[derive(Clone)]
pub struct JwtSettings {
    /// HS256 shared secret
    pub secret: String,
    pub issuer: Option<String>,
    pub audience: Option<String>,
}

#[derive(Clone)]
pub struct AppConfig {
    pub port: u16,
    pub database_url: String,
    /// Deployment environment name, `development` unless overridden
    pub environment: String,
    /// Origin allowed by CORS
    pub frontend_origin: HeaderValue,
    pub jwt: JwtSettings,
}

impl AppConfig {
    /// Loads configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Loads configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let port = match var("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidEnvVar {
                    name: "PORT",
                    value: raw,
                })?,
            None => DEFAULT_PORT,
        };

        // MONGODB_URI is still honoured for older deployments
        let database_url = var("DATABASE_URL")
            .or_else(|| var("MONGODB_URI"))
            .ok_or(ConfigError::MissingEnvVar("DATABASE_URL"))?;

        let environment = var("APP_ENV")
            .or_else(|| var("NODE_ENV"))
            .unwrap_or_else(|| DEFAULT_ENVIRONMENT.to_string());

        let frontend_url = var("FRONTEND_URL").unwrap_or_else(|| DEFAULT_FRONTEND_URL.to_string());
        let frontend_origin =
            HeaderValue::from_str(&frontend_url).map_err(|_| ConfigError::InvalidEnvVar {
                name: "FRONTEND_URL",
                value: frontend_url.clone(),
            })?;

        let jwt = JwtSettings {
            secret: var("JWT_SECRET").ok_or(ConfigError::MissingEnvVar("JWT_SECRET"))?,
            issuer: var("JWT_ISSUER"),
            audience: var("JWT_AUDIENCE"),
        };

        Ok(Self {
            port,
            database_url,
            environment,
            frontend_origin,
            jwt,
        })
    }

    pub fn is_production(&self) -> bool {
        self.environment.eq_ignore_ascii_case("production")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn applies_defaults() {
        let config = load(&[("DATABASE_URL", "sqlite::memory:"), ("JWT_SECRET", "s")]).unwrap();

        assert_eq!(config.port, 8000);
        assert_eq!(config.environment, "development");
        assert_eq!(config.frontend_origin, "http://localhost:3000");
        assert!(!config.is_production());
    }

    #[test]
    fn database_url_is_required() {
        let err = load(&[("JWT_SECRET", "s")]).err().unwrap();
        assert!(matches!(err, ConfigError::MissingEnvVar("DATABASE_URL")));
    }

    #[test]
    fn legacy_names_are_accepted() {
        let config = load(&[
            ("MONGODB_URI", "postgres://localhost/reservations"),
            ("NODE_ENV", "production"),
            ("JWT_SECRET", "s"),
        ])
        .unwrap();

        assert_eq!(config.database_url, "postgres://localhost/reservations");
        assert!(config.is_production());
    }

    #[test]
    fn invalid_port_is_rejected() {
        let err = load(&[
            ("PORT", "eighty"),
            ("DATABASE_URL", "sqlite::memory:"),
            ("JWT_SECRET", "s"),
        ])
        .err()
        .unwrap();
        assert!(matches!(err, ConfigError::InvalidEnvVar { name: "PORT", .. }));
    }

    #[test]
    fn jwt_secret_is_required() {
        let err = load(&[("DATABASE_URL", "sqlite::memory:")]).err().unwrap();
        assert!(matches!(err, ConfigError::MissingEnvVar("JWT_SECRET")));
    }
}
