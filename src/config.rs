use anyhow::{Context, Result};
use std::env;
use std::fmt;
use std::time::Duration;

/// Process-wide settings, read once at startup.
#[derive(Clone)]
pub struct Config {
    pub environment: String,
    pub dynamodb_table: String,
    pub dynamodb_endpoint: Option<String>,
    pub dynamodb_timeout: Duration,
    pub external_api_key: Option<String>,
    pub service_host: String,
    pub service_port: u16,
    pub request_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build a config from an arbitrary variable source.
    ///
    /// `from_env` is this with `std::env::var`; tests pass a map instead of
    /// mutating the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        // PYTHON_ENV is what existing deployments set
        let environment = lookup("APP_ENV")
            .or_else(|| lookup("PYTHON_ENV"))
            .unwrap_or_else(|| "unknown".to_string());

        let dynamodb_table = lookup("DYNAMODB_TABLE")
            .filter(|table| !table.is_empty())
            .context("DYNAMODB_TABLE environment variable is required")?;

        let dynamodb_endpoint = lookup("DYNAMODB_ENDPOINT").filter(|url| !url.is_empty());

        let dynamodb_timeout = lookup("DYNAMODB_TIMEOUT_SECS")
            .unwrap_or_else(|| "5".to_string())
            .parse::<u64>()
            .context("DYNAMODB_TIMEOUT_SECS must be a whole number of seconds")?;

        // An empty key is as good as no key.
        let external_api_key = lookup("EXTERNAL_API_KEY").filter(|key| !key.is_empty());

        let service_port = lookup("SERVICE_PORT")
            .unwrap_or_else(|| "8000".to_string())
            .parse::<u16>()
            .context("SERVICE_PORT must be a valid port number (0-65535)")?;

        let service_host = lookup("SERVICE_HOST").unwrap_or_else(|| "127.0.0.1".to_string());

        let request_timeout = lookup("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|| "10".to_string())
            .parse::<u64>()
            .context("REQUEST_TIMEOUT_SECS must be a whole number of seconds")?;

        Ok(Config {
            environment,
            dynamodb_table,
            dynamodb_endpoint,
            dynamodb_timeout: Duration::from_secs(dynamodb_timeout),
            external_api_key,
            service_port,
            service_host,
            request_timeout: Duration::from_secs(request_timeout),
        })
    }

    pub fn secret_configured(&self) -> bool {
        self.external_api_key.is_some()
    }

    pub fn log_startup(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Environment: {}", self.environment);
        tracing::info!("  DynamoDB table: {}", self.dynamodb_table);
        tracing::info!(
            "  DynamoDB endpoint: {}",
            self.dynamodb_endpoint.as_deref().unwrap_or("default (AWS)")
        );
        tracing::info!("  DynamoDB timeout: {:?}", self.dynamodb_timeout);
        tracing::info!(
            "  External API key: {}",
            if self.secret_configured() { "configured" } else { "not configured" }
        );
        tracing::info!("  Request timeout: {:?}", self.request_timeout);
        tracing::info!("  Service listening on: {}:{}", self.service_host, self.service_port);
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("environment", &self.environment)
            .field("dynamodb_table", &self.dynamodb_table)
            .field("dynamodb_endpoint", &self.dynamodb_endpoint)
            .field("dynamodb_timeout", &self.dynamodb_timeout)
            .field(
                "external_api_key",
                &self.external_api_key.as_ref().map(|_| "<redacted>"),
            )
            .field("service_host", &self.service_host)
            .field("service_port", &self.service_port)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}
