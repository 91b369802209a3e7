//! Value types shared between payout requests and responses.

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Money
// ============================================================================

/// An amount in a specific currency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Currency {
    /// Three-character ISO-4217 currency code
    pub currency: String,
    /// Amount up to N digits after the decimal separator, as a string
    pub value: String,
}

impl Currency {
    /// Create a new amount.
    pub fn new(currency: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            currency: currency.into(),
            value: value.into(),
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.currency)
    }
}

// ============================================================================
// HATEOAS Links
// ============================================================================

/// A related resource link returned by the API.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Links {
    /// URL of the related resource
    pub href: String,
    /// Relation to the current resource (`self`, `item`, ...)
    pub rel: String,
    /// HTTP method to use with `href`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    /// Encoding type of the request body
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enc_type: Option<String>,
}

// ============================================================================
// Recipients
// ============================================================================

/// How a payout receiver is identified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RecipientType {
    /// Receiver is an email address
    Email,
    /// Receiver is a mobile phone number
    Phone,
    /// Receiver is an encrypted `PayPal` account number
    PaypalId,
}

impl RecipientType {
    /// Get the API value for this recipient type.
    pub const fn as_api_value(self) -> &'static str {
        match self {
            Self::Email => "EMAIL",
            Self::Phone => "PHONE",
            Self::PaypalId => "PAYPAL_ID",
        }
    }
}

// ============================================================================
// Request Parts
// ============================================================================

/// The original batch header as provided by the payment sender.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayoutSenderBatchHeader {
    /// Sender-created id used for duplicate detection
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sender_batch_id: Option<String>,
    /// Subject line of the notification email sent to recipients
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email_subject: Option<String>,
    /// Body of the notification email sent to recipients
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email_message: Option<String>,
    /// Default recipient type for items that don't set their own
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipient_type: Option<RecipientType>,
}

impl PayoutSenderBatchHeader {
    /// Create an empty header.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the sender batch id.
    #[must_use]
    pub fn with_sender_batch_id(mut self, id: impl Into<String>) -> Self {
        self.sender_batch_id = Some(id.into());
        self
    }

    /// Set the notification email subject.
    #[must_use]
    pub fn with_email_subject(mut self, subject: impl Into<String>) -> Self {
        self.email_subject = Some(subject.into());
        self
    }

    /// Set the notification email message.
    #[must_use]
    pub fn with_email_message(mut self, message: impl Into<String>) -> Self {
        self.email_message = Some(message.into());
        self
    }

    /// Set the default recipient type.
    #[must_use]
    pub const fn with_recipient_type(mut self, recipient_type: RecipientType) -> Self {
        self.recipient_type = Some(recipient_type);
        self
    }
}

/// A single payout in a batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayoutItem {
    /// How `receiver` should be interpreted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipient_type: Option<RecipientType>,
    /// Amount to pay
    pub amount: Currency,
    /// Note to the recipient
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    /// Receiver email, phone or account id
    pub receiver: String,
    /// Sender-specified id for this item
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sender_item_id: Option<String>,
    /// Wallet the receiver is paid into (`PAYPAL`, `VENMO`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipient_wallet: Option<String>,
}

impl PayoutItem {
    /// Create an item paying `amount` to `receiver`.
    pub fn new(receiver: impl Into<String>, amount: Currency) -> Self {
        Self {
            recipient_type: None,
            amount,
            note: None,
            receiver: receiver.into(),
            sender_item_id: None,
            recipient_wallet: None,
        }
    }

    /// Set the recipient type.
    #[must_use]
    pub const fn with_recipient_type(mut self, recipient_type: RecipientType) -> Self {
        self.recipient_type = Some(recipient_type);
        self
    }

    /// Set the note to the recipient.
    #[must_use]
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    /// Set the sender item id.
    #[must_use]
    pub fn with_sender_item_id(mut self, id: impl Into<String>) -> Self {
        self.sender_item_id = Some(id.into());
        self
    }
}

// ============================================================================
// Error Body
// ============================================================================

/// A single field-level problem reported by the API.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// Name of the offending field
    #[serde(default)]
    pub field: Option<String>,
    /// What is wrong with it
    #[serde(default)]
    pub issue: Option<String>,
}

/// Error body returned by the API on failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDetails {
    /// Error name (e.g. `VALIDATION_ERROR`)
    #[serde(default)]
    pub name: Option<String>,
    /// Human-readable message
    #[serde(default)]
    pub message: Option<String>,
    /// Id to quote when contacting support
    #[serde(default)]
    pub debug_id: Option<String>,
    /// Documentation link for this error
    #[serde(default)]
    pub information_link: Option<String>,
    /// Field-level details
    #[serde(default)]
    pub details: Vec<ErrorDetail>,
}

impl fmt::Display for ErrorDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name.as_deref().unwrap_or("UNKNOWN_ERROR"))?;
        if let Some(ref message) = self.message {
            write!(f, ": {message}")?;
        }
        for detail in &self.details {
            write!(
                f,
                " [{}: {}]",
                detail.field.as_deref().unwrap_or("-"),
                detail.issue.as_deref().unwrap_or("-")
            )?;
        }
        if let Some(ref debug_id) = self.debug_id {
            write!(f, " (debug_id {debug_id})")?;
        }
        Ok(())
    }
}
