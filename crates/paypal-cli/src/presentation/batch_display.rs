//! Human-readable rendering of payout batches.

use paypal_payouts::{PayoutBatch, PayoutItemDetails};

use super::tables::{format_optional, print_separator, truncate_string};

const RECEIVER_WIDTH: usize = 32;
const TABLE_WIDTH: usize = 86;

/// Summary lines for a batch header.
pub fn batch_summary_lines(batch: &PayoutBatch) -> Vec<String> {
    let header = &batch.batch_header;
    let sender_batch_id = header
        .sender_batch_header
        .as_ref()
        .and_then(|h| h.sender_batch_id.as_ref());

    let mut lines = vec![
        format!("Payout batch:    {}", header.payout_batch_id),
        format!("Status:          {}", header.batch_status),
        format!("Sender batch id: {}", format_optional(sender_batch_id, "-")),
        format!("Amount:          {}", format_optional(header.amount.as_ref(), "-")),
        format!("Fees:            {}", format_optional(header.fees.as_ref(), "-")),
    ];
    if let Some(created) = header.time_created {
        lines.push(format!("Created:         {}", created.to_rfc3339()));
    }
    if let Some(completed) = header.time_completed {
        lines.push(format!("Completed:       {}", completed.to_rfc3339()));
    }
    if let Some(errors) = &header.errors {
        lines.push(format!("Error:           {errors}"));
    }
    lines
}

/// One table row for a processed item.
pub fn item_row(item: &PayoutItemDetails) -> String {
    format!(
        "{:<16} {:<width$} {:>14} {:<12}",
        truncate_string(&item.payout_item_id, 16),
        truncate_string(&item.payout_item.receiver, RECEIVER_WIDTH),
        item.payout_item.amount.to_string(),
        format_optional(item.transaction_status.as_ref(), "-"),
        width = RECEIVER_WIDTH,
    )
}

/// Print a batch summary followed by its item table.
pub fn display_batch(batch: &PayoutBatch) {
    for line in batch_summary_lines(batch) {
        println!("{line}");
    }

    if batch.items.is_empty() {
        return;
    }

    println!();
    println!(
        "{:<16} {:<width$} {:>14} {:<12}",
        "ITEM",
        "RECEIVER",
        "AMOUNT",
        "STATUS",
        width = RECEIVER_WIDTH,
    );
    print_separator(TABLE_WIDTH);
    for item in &batch.items {
        println!("{}", item_row(item));
    }
}
