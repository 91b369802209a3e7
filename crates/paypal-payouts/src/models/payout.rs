//! The `Payout` resource: a batch-payout request and its API calls.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use super::batch::PayoutBatch;
use super::common::{Links, PayoutItem, PayoutSenderBatchHeader};
use crate::context::ApiContext;
use crate::error::PayPalResult;
use crate::port::PayoutsPort;

/// Query parameter that selects synchronous processing.
pub const SYNC_MODE_PARAM: &str = "sync_mode";

/// A payout batch request.
///
/// Submitting it with [`Payout::create`] returns the [`PayoutBatch`] the
/// platform created. All calls take the client explicitly; the `*_with_token`
/// variants build a fresh [`ApiContext`] from a bare access token.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payout {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    sender_batch_header: Option<PayoutSenderBatchHeader>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    items: Option<Vec<PayoutItem>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    links: Option<Vec<Links>>,
}

impl Payout {
    /// Create an empty payout.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a payout from a sender batch header and its items.
    pub fn with_items(
        sender_batch_header: PayoutSenderBatchHeader,
        items: Vec<PayoutItem>,
    ) -> Self {
        Self {
            sender_batch_header: Some(sender_batch_header),
            items: Some(items),
            links: None,
        }
    }

    /// Set the sender batch header.
    #[must_use]
    pub fn set_sender_batch_header(mut self, header: PayoutSenderBatchHeader) -> Self {
        self.sender_batch_header = Some(header);
        self
    }

    /// The sender batch header, if set.
    pub const fn sender_batch_header(&self) -> Option<&PayoutSenderBatchHeader> {
        self.sender_batch_header.as_ref()
    }

    /// Set the payout items.
    #[must_use]
    pub fn set_items(mut self, items: Vec<PayoutItem>) -> Self {
        self.items = Some(items);
        self
    }

    /// The payout items, if set.
    pub fn items(&self) -> Option<&[PayoutItem]> {
        self.items.as_deref()
    }

    /// Set the links.
    #[must_use]
    pub fn set_links(mut self, links: Vec<Links>) -> Self {
        self.links = Some(links);
        self
    }

    /// The links, if set.
    pub fn links(&self) -> Option<&[Links]> {
        self.links.as_deref()
    }

    /// JSON representation of this payout.
    pub fn to_json(&self) -> PayPalResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    // ------------------------------------------------------------------------
    // API calls
    // ------------------------------------------------------------------------

    /// Create a payout batch.
    ///
    /// `parameters` supplies the query values of the create endpoint; only
    /// `sync_mode` is recognised, and an absent value is left off the URL.
    pub async fn create<P: PayoutsPort + ?Sized>(
        &self,
        client: &P,
        ctx: &ApiContext,
        parameters: &HashMap<String, String>,
    ) -> PayPalResult<PayoutBatch> {
        client.create_payout(ctx, self, parameters).await
    }

    /// Create a payout batch using a bare access token.
    pub async fn create_with_token<P: PayoutsPort + ?Sized>(
        &self,
        client: &P,
        access_token: &str,
        parameters: &HashMap<String, String>,
    ) -> PayPalResult<PayoutBatch> {
        let ctx = ApiContext::new(access_token);
        self.create(client, &ctx, parameters).await
    }

    /// Create a payout batch and wait for it to be processed.
    pub async fn create_synchronous<P: PayoutsPort + ?Sized>(
        &self,
        client: &P,
        ctx: &ApiContext,
    ) -> PayPalResult<PayoutBatch> {
        self.create(client, ctx, &sync_mode_parameters()).await
    }

    /// Synchronous create using a bare access token.
    pub async fn create_synchronous_with_token<P: PayoutsPort + ?Sized>(
        &self,
        client: &P,
        access_token: &str,
    ) -> PayPalResult<PayoutBatch> {
        let ctx = ApiContext::new(access_token);
        self.create_synchronous(client, &ctx).await
    }

    /// Fetch the current state of a payout batch.
    ///
    /// Can be called repeatedly to poll a batch until it reaches a final status.
    pub async fn get<P: PayoutsPort + ?Sized>(
        client: &P,
        ctx: &ApiContext,
        payout_batch_id: &str,
    ) -> PayPalResult<PayoutBatch> {
        client.get_payout(ctx, payout_batch_id).await
    }

    /// Fetch a payout batch using a bare access token.
    pub async fn get_with_token<P: PayoutsPort + ?Sized>(
        client: &P,
        access_token: &str,
        payout_batch_id: &str,
    ) -> PayPalResult<PayoutBatch> {
        let ctx = ApiContext::new(access_token);
        Self::get(client, &ctx, payout_batch_id).await
    }

    /// The last request payload sent through `client`.
    pub fn last_request<P: PayoutsPort + ?Sized>(client: &P) -> Option<String> {
        client.last_request()
    }

    /// The last response body received through `client`.
    pub fn last_response<P: PayoutsPort + ?Sized>(client: &P) -> Option<String> {
        client.last_response()
    }
}

impl fmt::Display for Payout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = self.to_json().map_err(|_| fmt::Error)?;
        f.write_str(&json)
    }
}

fn sync_mode_parameters() -> HashMap<String, String> {
    HashMap::from([(SYNC_MODE_PARAM.to_string(), "true".to_string())])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::PayPalClient;
    use crate::config::ClientConfig;
    use crate::http::testing::{CannedResponse, FakeBackend};
    use crate::http::HttpMethod;
    use crate::models::{Currency, RecipientType};
    use serde_json::json;

    fn sample_payout() -> Payout {
        Payout::with_items(
            PayoutSenderBatchHeader::new()
                .with_sender_batch_id("batch_42")
                .with_email_subject("You have a payment"),
            vec![
                PayoutItem::new("receiver@example.com", Currency::new("USD", "1.00"))
                    .with_recipient_type(RecipientType::Email)
                    .with_sender_item_id("item_1"),
            ],
        )
    }

    fn batch_json(id: &str, status: &str) -> serde_json::Value {
        json!({"batch_header": {"payout_batch_id": id, "batch_status": status}})
    }

    fn client_with(backend: FakeBackend) -> PayPalClient<FakeBackend> {
        PayPalClient::with_backend(&ClientConfig::default(), backend).unwrap()
    }

    #[test]
    fn test_to_json_omits_unset_fields() {
        assert_eq!(Payout::new().to_json().unwrap(), "{}");

        let value: serde_json::Value =
            serde_json::from_str(&sample_payout().to_json().unwrap()).unwrap();
        assert_eq!(value["sender_batch_header"]["sender_batch_id"], "batch_42");
        assert_eq!(value["items"][0]["receiver"], "receiver@example.com");
        assert!(value.get("links").is_none());
    }

    #[test]
    fn test_display_matches_json() {
        let payout = sample_payout();
        assert_eq!(payout.to_string(), payout.to_json().unwrap());
    }

    #[test]
    fn test_setters_and_getters() {
        let payout = Payout::new()
            .set_sender_batch_header(PayoutSenderBatchHeader::new().with_sender_batch_id("b"))
            .set_items(vec![PayoutItem::new("r@example.com", Currency::new("USD", "2.00"))])
            .set_links(vec![Links {
                href: "https://example.com".to_string(),
                rel: "self".to_string(),
                ..Default::default()
            }]);

        assert_eq!(
            payout.sender_batch_header().unwrap().sender_batch_id.as_deref(),
            Some("b")
        );
        assert_eq!(payout.items().unwrap().len(), 1);
        assert_eq!(payout.links().unwrap()[0].rel, "self");
    }

    #[tokio::test]
    async fn test_create_synchronous_sets_sync_mode() {
        let backend = FakeBackend::new().with_response(
            "v1/payments/payouts",
            CannedResponse::created(batch_json("BATCH1", "SUCCESS")),
        );
        let client = client_with(backend);

        let batch = sample_payout()
            .create_synchronous_with_token(&client, "A21AA-token")
            .await
            .unwrap();

        assert_eq!(batch.payout_batch_id(), "BATCH1");
        let requests = client.backend().requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, HttpMethod::Post);
        assert_eq!(
            requests[0].url.as_str(),
            "https://api.sandbox.paypal.com/v1/payments/payouts?sync_mode=true"
        );
    }

    #[tokio::test]
    async fn test_create_without_parameters_drops_query() {
        let backend = FakeBackend::new().with_response(
            "v1/payments/payouts",
            CannedResponse::created(batch_json("BATCH2", "PENDING")),
        );
        let client = client_with(backend);
        let ctx = ApiContext::new("A21AA-token");

        let batch = sample_payout()
            .create(&client, &ctx, &HashMap::new())
            .await
            .unwrap();

        assert_eq!(batch.payout_batch_id(), "BATCH2");
        let requests = client.backend().requests();
        assert_eq!(
            requests[0].url.as_str(),
            "https://api.sandbox.paypal.com/v1/payments/payouts"
        );
        assert_eq!(
            Payout::last_request(&client),
            Some(sample_payout().to_json().unwrap())
        );
    }

    #[tokio::test]
    async fn test_get_with_token() {
        let backend = FakeBackend::new().with_response(
            "v1/payments/payouts/BATCH3",
            CannedResponse::ok(batch_json("BATCH3", "PROCESSING")),
        );
        let client = client_with(backend);

        let batch = Payout::get_with_token(&client, "A21AA-token", "BATCH3")
            .await
            .unwrap();

        assert_eq!(batch.payout_batch_id(), "BATCH3");
        assert_eq!(client.backend().requests()[0].method, HttpMethod::Get);
        assert!(
            Payout::last_response(&client)
                .unwrap()
                .contains("PROCESSING")
        );
    }

    #[tokio::test]
    async fn test_blank_token_is_rejected_before_sending() {
        let client = client_with(FakeBackend::new());

        let err = sample_payout()
            .create_synchronous_with_token(&client, "   ")
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "AccessToken cannot be null or empty");
        assert!(client.backend().requests().is_empty());
    }
}
