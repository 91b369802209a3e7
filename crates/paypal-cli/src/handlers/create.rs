//! Create command handler.
//!
//! Reads a payout request from a JSON file and submits it.

use std::collections::HashMap;
use std::path::Path;

use paypal_payouts::{Payout, PayoutBatch};

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::display_batch;

/// Options for the create command.
#[derive(Debug, Clone, Default)]
pub struct CreateOptions<'a> {
    /// Wait for the batch to be processed
    pub sync: bool,
    /// Idempotency key
    pub request_id: Option<&'a str>,
    /// Print raw JSON
    pub json: bool,
}

/// Load a payout request from a JSON file.
///
/// # Errors
///
/// Returns [`CliError::Io`] when the file cannot be read and
/// [`CliError::Arguments`] when it is not a valid payout request.
pub fn load_payout(path: &Path) -> Result<Payout, CliError> {
    let text = std::fs::read_to_string(path)?;
    let payout: Payout = serde_json::from_str(&text)
        .map_err(|e| CliError::Arguments(format!("{}: {e}", path.display())))?;

    if payout.items().is_none_or(<[_]>::is_empty) {
        return Err(CliError::Arguments(format!(
            "{}: payout has no items",
            path.display()
        )));
    }
    Ok(payout)
}

/// Execute the create command.
///
/// # Errors
///
/// Fails if the input file is unusable, no access token is configured or
/// the API call fails.
pub async fn execute(
    ctx: &CliContext,
    file: &Path,
    options: CreateOptions<'_>,
) -> Result<PayoutBatch, CliError> {
    let payout = load_payout(file)?;
    let api = ctx.api_context(options.request_id)?;

    tracing::info!(
        items = payout.items().map_or(0, <[_]>::len),
        sync = options.sync,
        "Submitting payout batch"
    );

    let batch = if options.sync {
        payout.create_synchronous(ctx.payouts(), &api).await?
    } else {
        payout.create(ctx.payouts(), &api, &HashMap::new()).await?
    };

    if options.json {
        let body = serde_json::to_string_pretty(&batch)
            .map_err(|e| CliError::Api(format!("cannot render response: {e}")))?;
        println!("{body}");
    } else {
        display_batch(&batch);
    }

    Ok(batch)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::tests::{MockPayouts, context_with, sample_batch};
    use paypal_payouts::PayPalError;
    use std::io::Write;

    fn payout_file() -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{
                "sender_batch_header": {{
                    "sender_batch_id": "2014021801",
                    "email_subject": "You have a payment"
                }},
                "items": [{{
                    "recipient_type": "EMAIL",
                    "amount": {{ "currency": "USD", "value": "1.00" }},
                    "receiver": "shirt-supplier-one@mail.com",
                    "sender_item_id": "item-1"
                }}]
            }}"#
        )
        .unwrap();
        file
    }

    #[test]
    fn test_load_payout_rejects_empty_items() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "sender_batch_header": {{}}, "items": [] }}"#).unwrap();

        let err = load_payout(file.path()).unwrap_err();
        assert!(matches!(err, CliError::Arguments(ref m) if m.contains("no items")));
    }

    #[test]
    fn test_load_payout_missing_file() {
        let err = load_payout(Path::new("/nonexistent/batch.json")).unwrap_err();
        assert_eq!(err.exit_code(), 74);
    }

    #[tokio::test]
    async fn test_create_async_sends_no_sync_mode() {
        let mut mock = MockPayouts::new();
        mock.expect_create_payout()
            .withf(|ctx, payout, params| {
                ctx.request_id() == Some("idem-1")
                    && payout.items().map(<[_]>::len) == Some(1)
                    && params.is_empty()
            })
            .times(1)
            .returning(|_, _, _| Ok(sample_batch("PENDING")));

        let ctx = context_with(mock, Some("A21AA-test"));
        let file = payout_file();
        let options = CreateOptions {
            request_id: Some("idem-1"),
            ..CreateOptions::default()
        };

        let batch = execute(&ctx, file.path(), options).await.unwrap();
        assert_eq!(batch.payout_batch_id(), "FYXMPQTX4JC9N");
    }

    #[tokio::test]
    async fn test_create_sync_sets_sync_mode() {
        let mut mock = MockPayouts::new();
        mock.expect_create_payout()
            .withf(|_, _, params| params.get("sync_mode").map(String::as_str) == Some("true"))
            .times(1)
            .returning(|_, _, _| Ok(sample_batch("SUCCESS")));

        let ctx = context_with(mock, Some("A21AA-test"));
        let file = payout_file();
        let options = CreateOptions {
            sync: true,
            json: true,
            ..CreateOptions::default()
        };

        let batch = execute(&ctx, file.path(), options).await.unwrap();
        assert!(batch.batch_header.batch_status.is_final());
    }

    #[tokio::test]
    async fn test_create_without_token_never_calls_api() {
        let mut mock = MockPayouts::new();
        mock.expect_create_payout().never();

        let ctx = context_with(mock, None);
        let file = payout_file();

        let err = execute(&ctx, file.path(), CreateOptions::default())
            .await
            .unwrap_err();
        assert_eq!(err.exit_code(), 78);
    }

    #[tokio::test]
    async fn test_create_api_error_maps_to_exit_code_one() {
        let mut mock = MockPayouts::new();
        mock.expect_create_payout().returning(|_, _, _| {
            Err(PayPalError::Api {
                status: 400,
                details: None,
                body: r#"{"name":"VALIDATION_ERROR"}"#.to_string(),
            })
        });

        let ctx = context_with(mock, Some("A21AA-test"));
        let file = payout_file();

        let err = execute(&ctx, file.path(), CreateOptions::default())
            .await
            .unwrap_err();
        assert_eq!(err.exit_code(), 1);
    }
}
