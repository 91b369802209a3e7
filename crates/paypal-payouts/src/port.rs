//! Port trait for payout operations.
//!
//! `Payout`'s API calls and the CLI depend on this trait rather than on a
//! concrete client, so any transport (or a mock) can stand behind them.

use async_trait::async_trait;
use std::collections::HashMap;

use crate::client::PayPalClient;
use crate::context::ApiContext;
use crate::error::PayPalResult;
use crate::http::HttpBackend;
use crate::models::{Payout, PayoutBatch};

/// Operations on payout batches.
#[async_trait]
pub trait PayoutsPort: Send + Sync {
    /// Submit a payout batch.
    async fn create_payout(
        &self,
        ctx: &ApiContext,
        payout: &Payout,
        parameters: &HashMap<String, String>,
    ) -> PayPalResult<PayoutBatch>;

    /// Fetch a payout batch by its `PayPal` id.
    async fn get_payout(&self, ctx: &ApiContext, payout_batch_id: &str)
    -> PayPalResult<PayoutBatch>;

    /// Payload of the most recent request.
    fn last_request(&self) -> Option<String>;

    /// Body of the most recent response.
    fn last_response(&self) -> Option<String>;
}

#[async_trait]
impl<B: HttpBackend> PayoutsPort for PayPalClient<B> {
    async fn create_payout(
        &self,
        ctx: &ApiContext,
        payout: &Payout,
        parameters: &HashMap<String, String>,
    ) -> PayPalResult<PayoutBatch> {
        Self::create_payout(self, ctx, payout, parameters).await
    }

    async fn get_payout(
        &self,
        ctx: &ApiContext,
        payout_batch_id: &str,
    ) -> PayPalResult<PayoutBatch> {
        Self::get_payout(self, ctx, payout_batch_id).await
    }

    fn last_request(&self) -> Option<String> {
        Self::last_request(self)
    }

    fn last_response(&self) -> Option<String> {
        Self::last_response(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClientConfig;
    use crate::http::testing::{CannedResponse, FakeBackend};
    use serde_json::json;
    use std::sync::Arc;

    // Verify the trait is object-safe
    fn _assert_object_safe(_: Arc<dyn PayoutsPort>) {}

    #[tokio::test]
    async fn test_client_through_trait_object() {
        let backend = FakeBackend::new().with_response(
            "v1/payments/payouts/ABC",
            CannedResponse::ok(json!({
                "batch_header": {"payout_batch_id": "ABC", "batch_status": "DENIED"}
            })),
        );
        let client: Arc<dyn PayoutsPort> =
            Arc::new(PayPalClient::with_backend(&ClientConfig::default(), backend).unwrap());

        let batch = Payout::get(client.as_ref(), &ApiContext::new("tok"), "ABC")
            .await
            .unwrap();

        assert_eq!(batch.payout_batch_id(), "ABC");
        assert!(client.last_response().unwrap().contains("DENIED"));
        assert_eq!(client.last_request().as_deref(), Some(""));
    }
}
