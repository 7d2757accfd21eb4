use std::{env, str::FromStr, time::Duration};

use url::Url;

use crate::error::{AppError, Result};

pub const STORE_URL_VAR: &str = "SUPABASE_URL";
pub const STORE_ANON_KEY_VAR: &str = "SUPABASE_ANON_KEY";
pub const STORE_SERVICE_KEY_VAR: &str = "SUPABASE_SERVICE_ROLE_KEY";

/// Lookup server configuration, built once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub store: StoreConfig,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub max_concurrent_requests: usize,
    pub max_body_bytes: usize,
}

#[derive(Clone)]
pub struct StoreConfig {
    pub url: Url,
    pub api_key: String,
    pub timeout: Duration,
}

// Keeps the key out of logs.
impl std::fmt::Debug for StoreConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoreConfig")
            .field("url", &self.url.as_str())
            .field("api_key", &"<redacted>")
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Variable lookup used by the config loaders; `env::var` in production.
pub trait VarSource {
    fn var(&self, key: &str) -> Option<String>;
}

pub struct ProcessEnv;

impl VarSource for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        env::var(key).ok()
    }
}

impl Config {
    /// Reads the process environment. Call `dotenvy::dotenv()` first to merge
    /// a local `.env` file.
    pub fn from_env() -> Result<Self> {
        Self::from_source(&ProcessEnv)
    }

    pub fn from_source(source: &impl VarSource) -> Result<Self> {
        Ok(Self {
            server: ServerConfig {
                host: var_or_default(source, "HOST", "127.0.0.1"),
                port: var_or_parse(source, "PORT", 8080)?,
                max_concurrent_requests: var_or_parse(
                    source,
                    "SERVER_MAX_CONCURRENT_REQUESTS",
                    100,
                )?,
                max_body_bytes: var_or_parse(source, "SERVER_MAX_BODY_BYTES", 1024 * 1024)?,
            },
            store: StoreConfig::from_source(source, STORE_SERVICE_KEY_VAR)?,
        })
    }

    pub fn validate(&self) -> Result<()> {
        if self.server.max_concurrent_requests == 0 {
            return Err(AppError::Validation(
                "SERVER_MAX_CONCURRENT_REQUESTS must be positive".into(),
            ));
        }

        if self.server.max_body_bytes == 0 {
            return Err(AppError::Validation(
                "SERVER_MAX_BODY_BYTES must be positive".into(),
            ));
        }

        self.store.validate()
    }
}

impl StoreConfig {
    /// Reads the store endpoint plus the key held in `key_var`.
    ///
    /// The generator uses the anon key; the lookup server uses the
    /// service-role key, which bypasses row-level security.
    pub fn from_env(key_var: &str) -> Result<Self> {
        Self::from_source(&ProcessEnv, key_var)
    }

    pub fn from_source(source: &impl VarSource, key_var: &str) -> Result<Self> {
        let raw_url = var_required(source, STORE_URL_VAR)?;
        let api_key = var_required(source, key_var)?;
        let url = Url::parse(&raw_url)
            .map_err(|e| AppError::Validation(format!("Invalid value for {STORE_URL_VAR}: {e}")))?;

        Ok(Self {
            url,
            api_key,
            timeout: Duration::from_secs(var_or_parse(source, "STORE_TIMEOUT_SECS", 30)?),
        })
    }

    pub fn validate(&self) -> Result<()> {
        if !matches!(self.url.scheme(), "http" | "https") {
            return Err(AppError::Validation(format!(
                "{STORE_URL_VAR} must be an http(s) URL"
            )));
        }

        if self.timeout.is_zero() {
            return Err(AppError::Validation(
                "STORE_TIMEOUT_SECS must be positive".into(),
            ));
        }

        Ok(())
    }
}

fn var_or_default(source: &impl VarSource, key: &str, default: &str) -> String {
    source.var(key).unwrap_or_else(|| default.to_string())
}

fn var_or_parse<T: FromStr>(source: &impl VarSource, key: &str, default: T) -> Result<T> {
    match source.var(key) {
        Some(val) => val
            .parse()
            .map_err(|_| AppError::Validation(format!("Invalid value for {key}"))),
        None => Ok(default),
    }
}

fn var_required(source: &impl VarSource, key: &str) -> Result<String> {
    match source.var(key) {
        Some(val) if !val.trim().is_empty() => Ok(val),
        _ => Err(AppError::ConfigurationMissing(key.to_string())),
    }
}
