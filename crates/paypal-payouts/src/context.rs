//! Per-call API context: access token, extra headers and request id.

use std::collections::BTreeMap;
use std::fmt;

use crate::config::SdkVersion;
use crate::error::{PayPalError, PayPalResult};

/// Header carrying the idempotency key of a request.
pub const REQUEST_ID_HEADER: &str = "PayPal-Request-Id";

/// Context for a single API call.
///
/// The client never mutates a context; headers are merged into each request
/// as it is built, with `Content-Type` always forced to JSON.
#[derive(Clone, Default)]
pub struct ApiContext {
    access_token: Option<String>,
    headers: BTreeMap<String, String>,
    request_id: Option<String>,
    sdk_version: Option<SdkVersion>,
}

impl ApiContext {
    /// Create a context carrying an access token.
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: Some(access_token.into()),
            ..Self::default()
        }
    }

    /// Add a header sent with every request made through this context.
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Set an explicit idempotency key.
    #[must_use]
    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.request_id = Some(request_id.into());
        self
    }

    /// Use a freshly generated idempotency key.
    #[must_use]
    pub fn with_generated_request_id(mut self) -> Self {
        self.request_id = Some(uuid::Uuid::new_v4().to_string());
        self
    }

    /// Override the SDK identity reported in the user agent.
    #[must_use]
    pub fn with_sdk_version(mut self, sdk_version: SdkVersion) -> Self {
        self.sdk_version = Some(sdk_version);
        self
    }

    /// The raw access token, if any.
    pub fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }

    /// Caller-supplied headers.
    pub const fn headers(&self) -> &BTreeMap<String, String> {
        &self.headers
    }

    /// The idempotency key, if any.
    pub fn request_id(&self) -> Option<&str> {
        self.request_id.as_deref()
    }

    /// The SDK identity override, if any.
    pub const fn sdk_version(&self) -> Option<&SdkVersion> {
        self.sdk_version.as_ref()
    }

    /// Check that the context can authenticate a request.
    ///
    /// Returns the trimmed access token.
    pub fn validate(&self) -> PayPalResult<&str> {
        match self.access_token.as_deref().map(str::trim) {
            Some(token) if !token.is_empty() => Ok(token),
            _ => Err(PayPalError::invalid_argument(
                "AccessToken cannot be null or empty",
            )),
        }
    }

    /// Value of the `Authorization` header.
    ///
    /// Tokens that already carry a scheme (`Bearer ...`, `Basic ...`) are sent
    /// as-is; bare tokens get the `Bearer` scheme.
    pub fn authorization(&self) -> PayPalResult<String> {
        let token = self.validate()?;
        if token.starts_with("Bearer ") || token.starts_with("Basic ") {
            Ok(token.to_string())
        } else {
            Ok(format!("Bearer {token}"))
        }
    }
}

impl fmt::Debug for ApiContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiContext")
            .field("access_token", &self.access_token.as_ref().map(|_| "<redacted>"))
            .field("headers", &self.headers)
            .field("request_id", &self.request_id)
            .field("sdk_version", &self.sdk_version)
            .finish()
    }
}
