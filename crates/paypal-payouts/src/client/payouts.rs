//! Payout batch operations.

use std::collections::HashMap;

use crate::context::ApiContext;
use crate::error::{PayPalError, PayPalResult};
use crate::http::{HttpBackend, HttpMethod};
use crate::models::{Payout, PayoutBatch};
use crate::url::{CREATE_PAYOUT_PATTERN, GET_PAYOUT_PATTERN, format_query_path, format_uri_path};

use super::PayPalClient;

impl<B: HttpBackend> PayPalClient<B> {
    /// Submit a payout batch.
    ///
    /// `parameters` fills the create endpoint's query (`sync_mode`).
    pub async fn create_payout(
        &self,
        ctx: &ApiContext,
        payout: &Payout,
        parameters: &HashMap<String, String>,
    ) -> PayPalResult<PayoutBatch> {
        ctx.validate()?;

        let path = format_query_path(CREATE_PAYOUT_PATTERN, parameters);
        let payload = payout.to_json()?;
        tracing::info!(
            path = %path,
            items = payout.items().map_or(0, <[_]>::len),
            "Creating payout batch"
        );

        let batch: PayoutBatch = self
            .configure_and_execute(ctx, HttpMethod::Post, &path, &payload)
            .await?;
        tracing::info!(
            payout_batch_id = %batch.payout_batch_id(),
            status = %batch.batch_header.batch_status,
            "Payout batch created"
        );
        Ok(batch)
    }

    /// Fetch the current state of a payout batch.
    pub async fn get_payout(
        &self,
        ctx: &ApiContext,
        payout_batch_id: &str,
    ) -> PayPalResult<PayoutBatch> {
        ctx.validate()?;
        if payout_batch_id.trim().is_empty() {
            return Err(PayPalError::invalid_argument("payoutBatchId cannot be null"));
        }

        let path = format_uri_path(GET_PAYOUT_PATTERN, &[payout_batch_id]);
        tracing::debug!(payout_batch_id, "Fetching payout batch");
        self.configure_and_execute(ctx, HttpMethod::Get, &path, "")
            .await
    }
}
