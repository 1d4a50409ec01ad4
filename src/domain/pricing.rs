//! Reservation pricing
//!
//! A quote is recomputed in full whenever the rate or either date changes.
//! Amounts are exact decimals; rounding to cents happens only when a figure
//! is formatted for display, each figure independently.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Fee and rounding rules applied to every quote
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PricingPolicy {
    pub service_fee_rate: Decimal,
}

impl Default for PricingPolicy {
    fn default() -> Self {
        Self::from_percent(Decimal::from(10))
    }
}

impl PricingPolicy {
    pub fn from_percent(percent: Decimal) -> Self {
        Self {
            service_fee_rate: percent / Decimal::ONE_HUNDRED,
        }
    }

    /// Price a date range. Returns `Ok(None)` until both dates are known.
    ///
    /// The day count floors at one: same-day and inverted ranges are billed
    /// as a single day rather than rejected.
    pub fn quote(
        &self,
        price_per_day: Decimal,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    ) -> Result<Option<Quote>, PricingError> {
        let (Some(start_date), Some(end_date)) = (start_date, end_date) else {
            return Ok(None);
        };

        let days = rental_days(start_date, end_date);
        let base_cost = price_per_day
            .checked_mul(Decimal::from(days))
            .ok_or(PricingError::Overflow)?;
        let service_fee = base_cost
            .checked_mul(self.service_fee_rate)
            .ok_or(PricingError::Overflow)?;
        let total = base_cost
            .checked_add(service_fee)
            .ok_or(PricingError::Overflow)?;

        Ok(Some(Quote {
            start_date,
            end_date,
            days,
            price_per_day,
            base_cost,
            service_fee,
            total,
        }))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PricingError {
    /// The cost exceeds what a `Decimal` can hold
    #[error("price_per_day is too large")]
    Overflow,
}

/// Whole calendar days between the dates, never less than one
pub fn rental_days(start_date: NaiveDate, end_date: NaiveDate) -> i64 {
    (end_date - start_date).num_days().max(1)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub days: i64,
    pub price_per_day: Decimal,
    pub base_cost: Decimal,
    pub service_fee: Decimal,
    pub total: Decimal,
}

impl Quote {
    pub fn display(&self) -> QuoteDisplay {
        QuoteDisplay {
            line_item: format!(
                "${} × {} {}",
                self.price_per_day.normalize(),
                self.days,
                if self.days == 1 { "day" } else { "days" }
            ),
            base_cost: format_money(self.base_cost),
            service_fee: format_money(self.service_fee),
            total: format_money(self.total),
        }
    }
}

/// Cost breakdown formatted for the booking card
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuoteDisplay {
    pub line_item: String,
    pub base_cost: String,
    pub service_fee: String,
    pub total: String,
}

/// Two-decimal rendering, half away from zero
pub fn format_money(amount: Decimal) -> String {
    let rounded =
        amount.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero);
    format!("{:.2}", rounded)
}
