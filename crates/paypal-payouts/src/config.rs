//! Public configuration for the `PayPal` client.
//!
//! `ClientConfig` selects the endpoint and transport settings. It can be
//! built in code, derived from a properties map (see
//! [`crate::init_config_from_path`]) or read from the environment.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;
use url::Url;

use crate::error::{PayPalError, PayPalResult};

/// Sandbox REST endpoint.
pub const SANDBOX_ENDPOINT: &str = "https://api.sandbox.paypal.com/";
/// Live REST endpoint.
pub const LIVE_ENDPOINT: &str = "https://api.paypal.com/";

/// Properties key for the target environment.
pub const MODE_KEY: &str = "mode";
/// Properties key for an explicit endpoint.
pub const ENDPOINT_KEY: &str = "service.EndPoint";
/// Properties key for the request timeout in milliseconds.
pub const TIMEOUT_KEY: &str = "http.ConnectionTimeOut";

/// Environment variable selecting the target environment.
pub const MODE_ENV: &str = "PAYPAL_MODE";
/// Environment variable overriding the endpoint.
pub const ENDPOINT_ENV: &str = "PAYPAL_ENDPOINT";
/// Environment variable setting the request timeout in seconds.
pub const TIMEOUT_ENV: &str = "PAYPAL_TIMEOUT_SECS";

// ============================================================================
// Mode
// ============================================================================

/// Target `PayPal` environment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    /// Test environment (default)
    #[default]
    Sandbox,
    /// Production environment
    Live,
}

impl Mode {
    /// Default endpoint for this environment.
    pub const fn endpoint(self) -> &'static str {
        match self {
            Self::Sandbox => SANDBOX_ENDPOINT,
            Self::Live => LIVE_ENDPOINT,
        }
    }

    /// Name used in configuration files.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sandbox => "sandbox",
            Self::Live => "live",
        }
    }
}

impl FromStr for Mode {
    type Err = PayPalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sandbox" => Ok(Self::Sandbox),
            "live" => Ok(Self::Live),
            other => Err(PayPalError::configuration(format!(
                "unknown mode '{other}', expected 'sandbox' or 'live'"
            ))),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// SDK Identity
// ============================================================================

/// SDK identity reported in the `User-Agent` header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SdkVersion {
    /// SDK name
    pub id: String,
    /// SDK version
    pub version: String,
}

impl Default for SdkVersion {
    fn default() -> Self {
        Self {
            id: "paypal-payouts-rust".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

impl SdkVersion {
    /// Create a custom SDK identity.
    pub fn new(id: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            version: version.into(),
        }
    }

    /// `User-Agent` value for this SDK on the current platform.
    pub fn user_agent(&self) -> String {
        format!(
            "PayPalSDK/{} {} (rust; os={}; arch={})",
            self.id,
            self.version,
            std::env::consts::OS,
            std::env::consts::ARCH
        )
    }
}

// ============================================================================
// Client Configuration
// ============================================================================

/// Configuration for the `PayPal` client.
///
/// # Example
///
/// ```
/// use paypal_payouts::{ClientConfig, Mode};
/// use std::time::Duration;
///
/// let config = ClientConfig::new()
///     .with_mode(Mode::Live)
///     .with_timeout(Duration::from_secs(60));
/// assert_eq!(config.endpoint().unwrap().as_str(), "https://api.paypal.com/");
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Target environment
    pub(crate) mode: Mode,
    /// Explicit endpoint, overriding the mode default
    pub(crate) base_url: Option<String>,
    /// Request timeout
    pub(crate) timeout: Duration,
    /// SDK identity for the user agent
    pub(crate) sdk_version: SdkVersion,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            mode: Mode::default(),
            base_url: None,
            timeout: Duration::from_secs(30),
            sdk_version: SdkVersion::default(),
        }
    }
}

impl ClientConfig {
    /// Create a new configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Select the target environment.
    #[must_use]
    pub const fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Select the target environment and drop any explicit endpoint, so
    /// requests go to the mode's default endpoint.
    #[must_use]
    pub fn with_mode_endpoint(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self.base_url = None;
        self
    }

    /// Use an explicit endpoint instead of the mode default.
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the request timeout.
    ///
    /// Defaults to 30 seconds.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the SDK identity reported in the user agent.
    #[must_use]
    pub fn with_sdk_version(mut self, sdk_version: SdkVersion) -> Self {
        self.sdk_version = sdk_version;
        self
    }

    /// The target environment.
    pub const fn mode(&self) -> Mode {
        self.mode
    }

    /// The request timeout.
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Resolved endpoint. Always ends with `/` so resource paths join onto it.
    pub fn endpoint(&self) -> PayPalResult<Url> {
        let raw = self.base_url.as_deref().unwrap_or_else(|| self.mode.endpoint());
        let mut url = Url::parse(raw)?;
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }
        Ok(url)
    }

    /// Build a configuration from properties (`mode`, `service.EndPoint`,
    /// `http.ConnectionTimeOut` in milliseconds).
    pub fn from_properties(properties: &HashMap<String, String>) -> PayPalResult<Self> {
        let mut config = Self::default();
        if let Some(mode) = properties.get(MODE_KEY) {
            config.mode = mode.parse()?;
        }
        if let Some(endpoint) = properties.get(ENDPOINT_KEY).filter(|v| !v.trim().is_empty()) {
            config.base_url = Some(endpoint.trim().to_string());
        }
        if let Some(timeout) = properties.get(TIMEOUT_KEY) {
            let millis: u64 = timeout.trim().parse().map_err(|_| {
                PayPalError::configuration(format!("{TIMEOUT_KEY} must be a number, got '{timeout}'"))
            })?;
            // 0 means no explicit timeout; keep the default
            if millis > 0 {
                config.timeout = Duration::from_millis(millis);
            }
        }
        Ok(config)
    }

    /// Build a configuration from `PAYPAL_MODE`, `PAYPAL_ENDPOINT` and
    /// `PAYPAL_TIMEOUT_SECS`.
    pub fn from_env() -> PayPalResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> PayPalResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(mode) = lookup(MODE_ENV) {
            config.mode = mode.parse()?;
        }
        if let Some(endpoint) = lookup(ENDPOINT_ENV).filter(|v| !v.trim().is_empty()) {
            config.base_url = Some(endpoint);
        }
        if let Some(timeout) = lookup(TIMEOUT_ENV) {
            let secs: u64 = timeout.trim().parse().map_err(|_| {
                PayPalError::configuration(format!("{TIMEOUT_ENV} must be a number, got '{timeout}'"))
            })?;
            if secs > 0 {
                config.timeout = Duration::from_secs(secs);
            }
        }
        Ok(config)
    }
}
