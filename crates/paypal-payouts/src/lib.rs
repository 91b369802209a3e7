#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

mod client;
mod config;
mod context;
mod credential;
mod error;
mod http;
mod models;
mod port;
mod url;

// ============================================================================
// Public API
// ============================================================================

// Client
pub use client::{DefaultPayPalClient, PayPalClient};
pub use port::PayoutsPort;

// Transport
pub use http::{ApiRequest, ApiResponse, HttpBackend, HttpMethod, ReqwestBackend};

// Configuration and credentials
pub use config::{ClientConfig, LIVE_ENDPOINT, Mode, SANDBOX_ENDPOINT, SdkVersion};
pub use context::{ApiContext, REQUEST_ID_HEADER};
pub use credential::{
    OAuthTokenCredential, init_config_from_map, init_config_from_path, init_config_from_reader,
    parse_properties,
};

// Errors
pub use error::{PayPalError, PayPalResult};

// Models
pub use models::{
    BatchStatus, Currency, ErrorDetail, ErrorDetails, Links, Payout, PayoutBatch,
    PayoutBatchHeader, PayoutItem, PayoutItemDetails, PayoutSenderBatchHeader, RecipientType,
    SYNC_MODE_PARAM, TransactionStatus,
};

// Silence unused dev-dependency warnings
#[cfg(test)]
use wiremock as _;
