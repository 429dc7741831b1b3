use axum::http::HeaderValue;
use config::{Config, ConfigError, Environment};
use secrecy::Secret;
use serde::Deserialize;

/// Process configuration, read from the environment.
///
/// `DATABASE_URL` is mandatory; [`Settings::load`] fails without it and
/// the service refuses to start before serving any request.
#[derive(Debug, Deserialize)]
pub struct Settings {
    pub database_url: Secret<String>,
    #[serde(default)]
    pub allowed_origins: Option<String>,
}

impl Settings {
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(Environment::default())
            .build()?
            .try_deserialize()
    }

    /// CORS origins from `ALLOWED_ORIGINS`, comma-separated.
    pub fn allowed_origins(&self) -> Option<AllowedOrigins> {
        self.allowed_origins.as_deref().map(AllowedOrigins::parse)
    }
}

#[derive(Debug, Clone, Default)]
pub struct AllowedOrigins(Vec<HeaderValue>);

impl AllowedOrigins {
    pub fn parse(raw: &str) -> Self {
        Self(
            raw.split(',')
                .map(str::trim)
                .filter(|origin| !origin.is_empty())
                .filter_map(|origin| HeaderValue::from_str(origin).ok())
                .collect(),
        )
    }

    pub fn contains(&self, origin: &HeaderValue) -> bool {
        self.0.iter().any(|allowed| allowed == origin)
    }
}
