use std::env;
use std::time::Duration;

use serde::{Deserialize, Serialize};

pub const LOCAL_ENDPOINT: &str = "http://localhost:5000/api/get-thumbnail";
pub const DEPLOYED_ENDPOINT: &str = "https://amazon-thumbnail-widget.onrender.com/api/get-thumbnail";

/// Which lookup service deployment the widget talks to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Local,
    #[default]
    Deployed,
}

impl Environment {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "local" | "dev" => Some(Environment::Local),
            "deployed" | "prod" | "production" => Some(Environment::Deployed),
            _ => None,
        }
    }

    pub fn default_endpoint(self) -> &'static str {
        match self {
            Environment::Local => LOCAL_ENDPOINT,
            Environment::Deployed => DEPLOYED_ENDPOINT,
        }
    }
}

fn default_timeout_seconds() -> u64 {
    60
}

fn default_max_results() -> u32 {
    5
}

/// A parsed value, treating 0 and garbage as unset
fn positive<T>(raw: Option<String>) -> Option<T>
where
    T: std::str::FromStr + Default + PartialEq,
{
    raw.and_then(|v| v.trim().parse().ok())
        .filter(|v: &T| *v != T::default())
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LookupConfig {
    pub environment: Environment,
    /// Explicit endpoint, takes precedence over `environment`
    pub endpoint: Option<String>,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
    #[serde(default = "default_max_results")]
    pub max_results: u32,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            environment: Environment::default(),
            endpoint: None,
            timeout_seconds: default_timeout_seconds(),
            max_results: default_max_results(),
        }
    }
}

impl LookupConfig {
    pub fn new() -> Self {
        let environment = env::var("COVERPICK_ENV")
            .ok()
            .and_then(|v| Environment::parse(&v))
            .unwrap_or_default();

        let endpoint = env::var("LOOKUP_URL").ok().filter(|v| !v.trim().is_empty());

        let timeout_seconds = positive(env::var("LOOKUP_TIMEOUT_SECONDS").ok())
            .unwrap_or_else(default_timeout_seconds);

        let max_results = positive(env::var("LOOKUP_MAX_RESULTS").ok())
            .unwrap_or_else(default_max_results);

        Self {
            environment,
            endpoint,
            timeout_seconds,
            max_results,
        }
    }

    /// The endpoint URL the lookup client should post to
    pub fn endpoint_url(&self) -> &str {
        self.endpoint
            .as_deref()
            .unwrap_or_else(|| self.environment.default_endpoint())
    }

    /// A zero timeout from a config file falls back to the default
    pub fn timeout(&self) -> Duration {
        match self.timeout_seconds {
            0 => Duration::from_secs(default_timeout_seconds()),
            secs => Duration::from_secs(secs),
        }
    }
}
