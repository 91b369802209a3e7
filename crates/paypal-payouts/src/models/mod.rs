//! Request and response types for the payouts API.

mod batch;
mod common;
mod payout;

pub use batch::{BatchStatus, PayoutBatch, PayoutBatchHeader, PayoutItemDetails, TransactionStatus};
pub use common::{
    Currency, ErrorDetail, ErrorDetails, Links, PayoutItem, PayoutSenderBatchHeader, RecipientType,
};
pub use payout::{Payout, SYNC_MODE_PARAM};
