//! CLI bootstrap - the composition root.
//!
//! This module is the ONLY place where the HTTP client is instantiated.
//! Command handlers receive a `CliContext` and talk to the API through the
//! `PayoutsPort` trait.

use std::path::Path;
use std::sync::Arc;

use paypal_payouts::{
    ApiContext, ClientConfig, DefaultPayPalClient, Mode, PayoutsPort, parse_properties,
};

use crate::error::CliError;

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Client settings (endpoint, timeout).
    pub client: ClientConfig,
    /// Access token for API calls.
    pub access_token: Option<String>,
}

impl CliConfig {
    /// Resolve configuration from a properties file (when given) or the
    /// environment, then apply command-line overrides.
    ///
    /// An explicit `mode` also replaces any configured endpoint with that
    /// mode's default.
    pub fn resolve(
        config_file: Option<&Path>,
        mode: Option<Mode>,
        access_token: Option<String>,
    ) -> Result<Self, CliError> {
        let mut client = match config_file {
            Some(path) => {
                let text = std::fs::read_to_string(path).map_err(|e| {
                    CliError::Config(format!("cannot read {}: {e}", path.display()))
                })?;
                ClientConfig::from_properties(&parse_properties(&text))?
            }
            None => ClientConfig::from_env()?,
        };
        if let Some(mode) = mode {
            client = client.with_mode_endpoint(mode);
        }

        Ok(Self {
            client,
            access_token,
        })
    }
}

/// Fully composed application context for CLI commands.
pub struct CliContext {
    /// Payout operations.
    pub payouts: Arc<dyn PayoutsPort>,
    /// Access token for API calls.
    pub access_token: Option<String>,
}

impl CliContext {
    /// Access the payouts port.
    pub fn payouts(&self) -> &dyn PayoutsPort {
        self.payouts.as_ref()
    }

    /// Build the per-call API context.
    pub fn api_context(&self, request_id: Option<&str>) -> Result<ApiContext, CliError> {
        let token = self
            .access_token
            .as_deref()
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| {
                CliError::Config(
                    "no access token; pass --token or set PAYPAL_ACCESS_TOKEN".to_string(),
                )
            })?;

        let ctx = ApiContext::new(token);
        Ok(match request_id {
            Some(id) => ctx.with_request_id(id),
            None => ctx,
        })
    }
}

/// Bootstrap the CLI application.
pub fn bootstrap(config: CliConfig) -> Result<CliContext, CliError> {
    tracing::debug!(
        mode = %config.client.mode(),
        timeout_secs = config.client.timeout().as_secs(),
        "Bootstrapping PayPal client"
    );
    let client = DefaultPayPalClient::new(&config.client)?;

    Ok(CliContext {
        payouts: Arc::new(client),
        access_token: config.access_token,
    })
}
