//! `PayPal` REST client and the shared request-execution helper.
//!
//! Resource operations format a path and call
//! [`PayPalClient::configure_and_execute`], which validates the context,
//! builds headers, sends the request and decodes the response.

mod payouts;

use serde::de::DeserializeOwned;
use std::sync::{Mutex, PoisonError};
use url::Url;

use crate::config::{ClientConfig, SdkVersion};
use crate::context::{ApiContext, REQUEST_ID_HEADER};
use crate::error::{PayPalError, PayPalResult};
use crate::http::{ApiRequest, HttpBackend, HttpMethod, ReqwestBackend};
use crate::models::ErrorDetails;

const CONTENT_TYPE_JSON: &str = "application/json";

// ============================================================================
// Type Aliases
// ============================================================================

/// Default `PayPal` client using the reqwest HTTP backend.
pub type DefaultPayPalClient = PayPalClient<ReqwestBackend>;

// ============================================================================
// Client
// ============================================================================

/// Most recent request payload and response body.
#[derive(Debug, Default)]
struct Exchange {
    request: Option<String>,
    response: Option<String>,
}

/// Client for the `PayPal` REST API.
///
/// Generic over an HTTP backend so tests can swap the transport. Use
/// [`DefaultPayPalClient`] in production code.
pub struct PayPalClient<B: HttpBackend> {
    backend: B,
    endpoint: Url,
    sdk_version: SdkVersion,
    last_exchange: Mutex<Exchange>,
}

impl DefaultPayPalClient {
    /// Create a new client with the given configuration.
    pub fn new(config: &ClientConfig) -> PayPalResult<Self> {
        let backend = ReqwestBackend::new(config)?;
        Self::with_backend(config, backend)
    }

    /// Create a new client for the sandbox with default settings.
    pub fn default_client() -> PayPalResult<Self> {
        Self::new(&ClientConfig::default())
    }
}

impl<B: HttpBackend> PayPalClient<B> {
    /// Create a client with a custom backend.
    pub fn with_backend(config: &ClientConfig, backend: B) -> PayPalResult<Self> {
        Ok(Self {
            backend,
            endpoint: config.endpoint()?,
            sdk_version: config.sdk_version.clone(),
            last_exchange: Mutex::new(Exchange::default()),
        })
    }

    /// The HTTP backend.
    pub const fn backend(&self) -> &B {
        &self.backend
    }

    /// The resolved endpoint requests are sent to.
    pub const fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Payload of the most recent request (empty for `GET`).
    pub fn last_request(&self) -> Option<String> {
        self.exchange().request.clone()
    }

    /// Body of the most recent response.
    pub fn last_response(&self) -> Option<String> {
        self.exchange().response.clone()
    }

    fn exchange(&self) -> std::sync::MutexGuard<'_, Exchange> {
        self.last_exchange
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Send a request for a resource and decode the JSON response.
    ///
    /// `path` is relative to the endpoint. An empty `payload` sends no body.
    pub async fn configure_and_execute<T: DeserializeOwned>(
        &self,
        ctx: &ApiContext,
        method: HttpMethod,
        path: &str,
        payload: &str,
    ) -> PayPalResult<T> {
        let request = self.build_request(ctx, method, path, payload)?;

        tracing::debug!(
            method = %method,
            url = %request.url,
            request_id = ?ctx.request_id(),
            "Sending PayPal request"
        );
        {
            let mut exchange = self.exchange();
            exchange.request = Some(payload.to_string());
            exchange.response = None;
        }

        let response = self.backend.send(&request).await?;
        self.exchange().response = Some(response.body.clone());

        tracing::debug!(
            method = %method,
            url = %request.url,
            status = response.status,
            "Received PayPal response"
        );

        if !response.is_success() {
            let details = serde_json::from_str::<ErrorDetails>(&response.body).ok();
            tracing::warn!(
                status = response.status,
                error = details.as_ref().and_then(|d| d.name.as_deref()),
                debug_id = details.as_ref().and_then(|d| d.debug_id.as_deref()),
                "PayPal request failed"
            );
            return Err(PayPalError::Api {
                status: response.status,
                details,
                body: response.body,
            });
        }

        Ok(serde_json::from_str(&response.body)?)
    }

    fn build_request(
        &self,
        ctx: &ApiContext,
        method: HttpMethod,
        path: &str,
        payload: &str,
    ) -> PayPalResult<ApiRequest> {
        let authorization = ctx.authorization()?;
        let url = self.endpoint.join(path)?;
        let sdk_version = ctx.sdk_version().unwrap_or(&self.sdk_version);

        let mut headers: Vec<(String, String)> = ctx
            .headers()
            .iter()
            .filter(|(name, _)| {
                !name.eq_ignore_ascii_case("Content-Type")
                    && !name.eq_ignore_ascii_case("Authorization")
            })
            .map(|(name, value)| (name.clone(), value.clone()))
            .collect();
        headers.push(("Authorization".to_string(), authorization));
        headers.push(("Content-Type".to_string(), CONTENT_TYPE_JSON.to_string()));
        headers.push(("Accept".to_string(), CONTENT_TYPE_JSON.to_string()));
        if !headers.iter().any(|(name, _)| name.eq_ignore_ascii_case("User-Agent")) {
            headers.push(("User-Agent".to_string(), sdk_version.user_agent()));
        }
        if let Some(request_id) = ctx.request_id() {
            headers.push((REQUEST_ID_HEADER.to_string(), request_id.to_string()));
        }

        Ok(ApiRequest {
            method,
            url,
            headers,
            body: (!payload.is_empty()).then(|| payload.to_string()),
        })
    }
}
