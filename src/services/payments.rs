//! Payment gateway interface and the simulated processor behind it.
//!
//! Handlers only see [`PaymentGateway`]; swapping in a real processor means
//! adding another implementation, not touching routes.

use async_trait::async_trait;
use chrono::Utc;
use rust_decimal::Decimal;
use std::time::Duration;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::domain::payments::{PaymentConfirmation, PaymentError, PaymentStatus};

#[async_trait]
pub trait PaymentGateway: Send + Sync {
    async fn authorize(
        &self,
        booking_id: &str,
        amount: Decimal,
        payment_method_id: &str,
    ) -> Result<PaymentConfirmation, PaymentError>;
}

/// Payment method id that the simulated processor always declines
pub const DECLINED_TEST_METHOD: &str = "pm_card_chargeDeclined";

/// Simulated processor: waits a fixed delay, then succeeds with a random id.
#[derive(Debug, Clone)]
pub struct MockPaymentGateway {
    delay: Duration,
}

impl MockPaymentGateway {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl PaymentGateway for MockPaymentGateway {
    #[instrument(skip(self))]
    async fn authorize(
        &self,
        booking_id: &str,
        amount: Decimal,
        payment_method_id: &str,
    ) -> Result<PaymentConfirmation, PaymentError> {
        if amount <= Decimal::ZERO {
            return Err(PaymentError::InvalidAmount(amount));
        }
        if payment_method_id.trim().is_empty() {
            return Err(PaymentError::UnsupportedMethod(payment_method_id.to_string()));
        }

        tokio::time::sleep(self.delay).await;

        if payment_method_id == DECLINED_TEST_METHOD {
            warn!(booking_id, "Simulated decline");
            return Err(PaymentError::Declined("card was declined".to_string()));
        }

        let confirmation = PaymentConfirmation {
            id: payment_id(),
            booking_id: booking_id.to_string(),
            amount,
            status: PaymentStatus::Succeeded,
            created: Utc::now(),
        };
        info!(payment_id = %confirmation.id, "Payment authorized");
        Ok(confirmation)
    }
}

/// `payment_` followed by nine random hex characters
fn payment_id() -> String {
    let suffix: String = Uuid::new_v4().simple().to_string().chars().take(9).collect();
    format!("payment_{}", suffix)
}
