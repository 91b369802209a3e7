//! Get command handler.

use paypal_payouts::{Payout, PayoutBatch};

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::display_batch;

/// Execute the get command.
///
/// # Errors
///
/// Fails if no access token is configured, the batch id is blank or the
/// API call fails.
pub async fn execute(
    ctx: &CliContext,
    payout_batch_id: &str,
    json: bool,
) -> Result<PayoutBatch, CliError> {
    let api = ctx.api_context(None)?;
    let batch = Payout::get(ctx.payouts(), &api, payout_batch_id).await?;

    if json {
        let body = serde_json::to_string_pretty(&batch)
            .map_err(|e| CliError::Api(format!("cannot render response: {e}")))?;
        println!("{body}");
    } else {
        display_batch(&batch);
    }

    Ok(batch)
}
