//! Response types for payout batches.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use super::common::{Currency, ErrorDetails, Links, PayoutItem, PayoutSenderBatchHeader};

// ============================================================================
// Status Values
// ============================================================================

/// Processing state of a payout batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BatchStatus {
    /// Accepted, not yet processed
    Pending,
    /// Items are being processed
    Processing,
    /// All items reached a final state
    Success,
    /// The batch was rejected
    Denied,
    /// Processing was cancelled
    Canceled,
    /// A status this client doesn't know about yet
    Other(String),
}

impl BatchStatus {
    /// Get the API value for this status.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Pending => "PENDING",
            Self::Processing => "PROCESSING",
            Self::Success => "SUCCESS",
            Self::Denied => "DENIED",
            Self::Canceled => "CANCELED",
            Self::Other(value) => value,
        }
    }

    /// Whether the batch will not change state any more.
    pub const fn is_final(&self) -> bool {
        matches!(self, Self::Success | Self::Denied | Self::Canceled)
    }
}

impl From<String> for BatchStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "PENDING" => Self::Pending,
            "PROCESSING" => Self::Processing,
            "SUCCESS" => Self::Success,
            "DENIED" => Self::Denied,
            "CANCELED" => Self::Canceled,
            _ => Self::Other(value),
        }
    }
}

/// Processing state of a single payout item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionStatus {
    /// Funds were delivered
    Success,
    /// The item failed
    Failed,
    /// Awaiting processing
    Pending,
    /// Receiver has not claimed the payment yet
    Unclaimed,
    /// Unclaimed funds went back to the sender
    Returned,
    /// Held for review
    Onhold,
    /// Blocked by risk checks
    Blocked,
    /// Cancelled by the sender
    Refunded,
    /// Reversed after completion
    Reversed,
    /// A status this client doesn't know about yet
    Other(String),
}

impl TransactionStatus {
    /// Get the API value for this status.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Success => "SUCCESS",
            Self::Failed => "FAILED",
            Self::Pending => "PENDING",
            Self::Unclaimed => "UNCLAIMED",
            Self::Returned => "RETURNED",
            Self::Onhold => "ONHOLD",
            Self::Blocked => "BLOCKED",
            Self::Refunded => "REFUNDED",
            Self::Reversed => "REVERSED",
            Self::Other(value) => value,
        }
    }
}

impl From<String> for TransactionStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "SUCCESS" => Self::Success,
            "FAILED" => Self::Failed,
            "PENDING" => Self::Pending,
            "UNCLAIMED" => Self::Unclaimed,
            "RETURNED" => Self::Returned,
            "ONHOLD" => Self::Onhold,
            "BLOCKED" => Self::Blocked,
            "REFUNDED" => Self::Refunded,
            "REVERSED" => Self::Reversed,
            _ => Self::Other(value),
        }
    }
}

macro_rules! string_backed_serde {
    ($ty:ty) => {
        impl Serialize for $ty {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                String::deserialize(deserializer).map(Self::from)
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

string_backed_serde!(BatchStatus);
string_backed_serde!(TransactionStatus);

// ============================================================================
// Batch
// ============================================================================

/// Header of a payout batch as reported by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayoutBatchHeader {
    /// Id assigned by `PayPal`
    pub payout_batch_id: String,
    /// Current state of the batch
    pub batch_status: BatchStatus,
    /// When processing started
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_created: Option<DateTime<Utc>>,
    /// When processing finished
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_completed: Option<DateTime<Utc>>,
    /// The header as submitted by the sender
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sender_batch_header: Option<PayoutSenderBatchHeader>,
    /// Total amount requested
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<Currency>,
    /// Total fees charged
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fees: Option<Currency>,
    /// Batch-level error, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<ErrorDetails>,
}

/// Result of processing one payout item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayoutItemDetails {
    /// Id assigned to the item by `PayPal`
    pub payout_item_id: String,
    /// Id of the underlying transaction
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<String>,
    /// Current state of the item
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_status: Option<TransactionStatus>,
    /// Fee charged for this item
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payout_item_fee: Option<Currency>,
    /// Batch this item belongs to
    pub payout_batch_id: String,
    /// Sender batch id of the owning batch
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sender_batch_id: Option<String>,
    /// The item as submitted
    pub payout_item: PayoutItem,
    /// When the item was processed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_processed: Option<DateTime<Utc>>,
    /// Item-level error, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<ErrorDetails>,
    /// Related links
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<Links>,
}

/// A payout batch: header, per-item results and links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayoutBatch {
    /// Batch-level information
    pub batch_header: PayoutBatchHeader,
    /// Item results (empty until items are processed)
    #[serde(default)]
    pub items: Vec<PayoutItemDetails>,
    /// Related links
    #[serde(default)]
    pub links: Vec<Links>,
}

impl PayoutBatch {
    /// The `PayPal` id of this batch.
    pub fn payout_batch_id(&self) -> &str {
        &self.batch_header.payout_batch_id
    }

    /// Find a link by its relation.
    pub fn link(&self, rel: &str) -> Option<&Links> {
        self.links.iter().find(|link| link.rel == rel)
    }
}
