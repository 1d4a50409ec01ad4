//! Payment types shared by the gateway interface and the HTTP layer

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Payment providers announced to clients
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PaymentProvider {
    Stripe,
    Paypal,
    ApplePay,
    GooglePay,
}

impl PaymentProvider {
    pub const SUPPORTED: [PaymentProvider; 4] =
        [Self::Stripe, Self::Paypal, Self::ApplePay, Self::GooglePay];
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    Succeeded,
}

/// Request DTO for a payment
#[derive(Debug, Clone, Deserialize)]
pub struct PaymentRequest {
    pub booking_id: String,
    pub amount: Decimal,
    pub payment_method_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PaymentConfirmation {
    pub id: String,
    pub booking_id: String,
    pub amount: Decimal,
    pub status: PaymentStatus,
    pub created: DateTime<Utc>,
}

/// Static capability announcement
#[derive(Debug, Clone, Serialize)]
pub struct PaymentCapabilities {
    pub message: String,
    pub status: String,
    pub supported_methods: Vec<PaymentProvider>,
}

impl Default for PaymentCapabilities {
    fn default() -> Self {
        Self {
            message: "Payment API endpoint".to_string(),
            status: "active".to_string(),
            supported_methods: PaymentProvider::SUPPORTED.to_vec(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PaymentError {
    #[error("amount must be greater than zero (got {0})")]
    InvalidAmount(Decimal),

    #[error("payment method '{0}' is not accepted")]
    UnsupportedMethod(String),

    #[error("payment declined: {0}")]
    Declined(String),
}
