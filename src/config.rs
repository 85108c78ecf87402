use std::collections::HashMap;
use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::{Result, ServiceError};

const DEFAULT_BASE_URL: &str = "https://api.example.com";
const DEFAULT_TIMEOUT_MS: i64 = 30_000;
const DEFAULT_MAX_RETRIES: i32 = 3;

/// Connection parameters for [`ServiceClient`](crate::ServiceClient).
///
/// Fields are public and may be changed at any time; [`Configuration::validate`]
/// only checks the values as they are at the moment it is called.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Configuration {
    /// API key used to authenticate against the service.
    pub api_key: String,
    /// Absolute base URL of the service.
    pub base_url: String,
    /// Request timeout in milliseconds. Must be positive.
    pub timeout_ms: i64,
    /// Maximum number of retry attempts. Stored for callers, not consumed by the client.
    pub max_retries: i32,
    /// Whether to request compressed payloads. Stored for callers, not consumed by the client.
    pub use_compression: bool,
    /// Extra headers to attach to requests.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_headers: Option<HashMap<String, String>>,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            max_retries: DEFAULT_MAX_RETRIES,
            use_compression: true,
            custom_headers: None,
        }
    }
}

impl fmt::Debug for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Configuration")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeout_ms", &self.timeout_ms)
            .field("max_retries", &self.max_retries)
            .field("use_compression", &self.use_compression)
            .field("custom_headers", &self.custom_headers)
            .finish()
    }
}

impl Configuration {
    /// Creates a configuration with the given API key and default values
    /// for every other field.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Self::default()
        }
    }

    /// Creates a configuration from environment variables.
    ///
    /// Reads:
    /// - `SERVICE_API_KEY`: API key
    /// - `SERVICE_BASE_URL`: base URL
    /// - `SERVICE_TIMEOUT_MS`: timeout in milliseconds
    /// - `SERVICE_MAX_RETRIES`: retry budget
    /// - `SERVICE_USE_COMPRESSION`: `true`/`false`/`1`/`0`
    ///
    /// Unset variables keep their defaults (an unset API key stays empty).
    /// Only unparsable numbers and flags fail here; the result is not
    /// validated, so call [`Configuration::validate`] before using it.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use service_client::Configuration;
    ///
    /// let config = Configuration::from_env().expect("malformed SERVICE_* env vars");
    /// config.validate().expect("invalid configuration");
    /// ```
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::new(lookup("SERVICE_API_KEY").unwrap_or_default());

        if let Some(base_url) = lookup("SERVICE_BASE_URL") {
            config.base_url = base_url;
        }
        if let Some(raw) = lookup("SERVICE_TIMEOUT_MS") {
            config.timeout_ms = raw.trim().parse().map_err(|err| {
                ServiceError::config(format!("SERVICE_TIMEOUT_MS is not an integer: {err}"))
            })?;
        }
        if let Some(raw) = lookup("SERVICE_MAX_RETRIES") {
            config.max_retries = raw.trim().parse().map_err(|err| {
                ServiceError::config(format!("SERVICE_MAX_RETRIES is not an integer: {err}"))
            })?;
        }
        if let Some(raw) = lookup("SERVICE_USE_COMPRESSION") {
            config.use_compression = parse_flag(&raw).ok_or_else(|| {
                ServiceError::config(format!("SERVICE_USE_COMPRESSION is not a boolean: {raw}"))
            })?;
        }

        Ok(config)
    }

    /// Sets the base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Sets the timeout from a [`Duration`], rounding up to whole milliseconds
    /// and saturating at `i64::MAX`. Any non-zero duration stores at least 1 ms.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        let mut millis = timeout.as_millis();
        if timeout.subsec_nanos() % 1_000_000 != 0 {
            millis += 1;
        }
        self.timeout_ms = i64::try_from(millis).unwrap_or(i64::MAX);
        self
    }

    /// Sets the timeout in milliseconds.
    pub fn with_timeout_ms(mut self, timeout_ms: i64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    pub fn with_max_retries(mut self, max_retries: i32) -> Self {
        self.max_retries = max_retries;
        self
    }

    pub fn with_compression(mut self, enabled: bool) -> Self {
        self.use_compression = enabled;
        self
    }

    /// Adds a custom header, replacing any previous value for the same name.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.custom_headers
            .get_or_insert_with(HashMap::new)
            .insert(name.into(), value.into());
        self
    }

    /// Timeout as a [`Duration`]. Non-positive values map to [`Duration::ZERO`].
    pub fn timeout(&self) -> Duration {
        u64::try_from(self.timeout_ms)
            .map(Duration::from_millis)
            .unwrap_or(Duration::ZERO)
    }

    /// Checks the configuration, stopping at the first violated rule.
    ///
    /// Rules run in order: API key, base URL presence, base URL shape,
    /// timeout, retry count.
    pub fn validate(&self) -> Result<()> {
        if self.api_key.trim().is_empty() {
            return Err(ServiceError::config("API key is required"));
        }

        if self.base_url.trim().is_empty() {
            return Err(ServiceError::config("Base URL is required"));
        }

        // `Url::parse` has no base, so relative references are rejected.
        if url::Url::parse(&self.base_url).is_err() {
            return Err(ServiceError::config(
                "Base URL must be a valid absolute URI",
            ));
        }

        if self.timeout_ms <= 0 {
            return Err(ServiceError::config("Timeout must be greater than zero"));
        }

        if self.max_retries < 0 {
            return Err(ServiceError::config("Max retries cannot be negative"));
        }

        Ok(())
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
