use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::pricing::QuoteDisplay;

/// Booking status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingStatus {
    #[default]
    Pending,
    Confirmed,
    Active,
    Completed,
    Cancelled,
}

impl BookingStatus {
    /// Upcoming or in progress
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Pending | Self::Confirmed | Self::Active)
    }

    pub fn is_past(&self) -> bool {
        matches!(self, Self::Completed | Self::Cancelled)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CarSummary {
    pub make: String,
    pub model: String,
    pub year: u16,
    pub image_url: Option<String>,
    pub license_plate: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OwnerContact {
    pub name: String,
    pub phone: Option<String>,
}

/// Booking entity
#[derive(Debug, Clone, Serialize)]
pub struct Booking {
    pub id: String,
    pub car_id: String,
    pub car: CarSummary,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pickup_time: Option<NaiveTime>,
    pub total_cost: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost_breakdown: Option<QuoteDisplay>,
    pub status: BookingStatus,
    pub owner: OwnerContact,
    pub created_at: DateTime<Utc>,
}

/// Request DTO for a booking request
#[derive(Debug, Clone, Deserialize)]
pub struct CreateBookingRequest {
    pub car_id: String,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub pickup_time: Option<NaiveTime>,
}

/// Pick-up slots offered on the booking form: on the hour, 9:00 to 17:00
pub fn is_valid_pickup_time(time: NaiveTime) -> bool {
    use chrono::Timelike;

    time.minute() == 0 && time.second() == 0 && (9..=17).contains(&time.hour())
}

/// Bookings grouped the way the trips page shows them
#[derive(Debug, Clone, Serialize, Default)]
pub struct BookingsOverview {
    pub active: Vec<Booking>,
    pub past: Vec<Booking>,
}

impl BookingsOverview {
    pub fn from_bookings(bookings: impl IntoIterator<Item = Booking>) -> Self {
        let mut overview = Self::default();
        for booking in bookings {
            if booking.status.is_active() {
                overview.active.push(booking);
            } else if booking.status.is_past() {
                overview.past.push(booking);
            }
        }
        overview
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn booking(id: &str, status: BookingStatus) -> Booking {
        Booking {
            id: id.to_string(),
            car_id: "1".to_string(),
            car: CarSummary {
                make: "Toyota".to_string(),
                model: "Camry".to_string(),
                year: 2022,
                image_url: None,
                license_plate: Some("ABC-123".to_string()),
            },
            start_date: NaiveDate::from_ymd_opt(2024, 2, 15).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 2, 18).unwrap(),
            pickup_time: None,
            total_cost: Decimal::from(135),
            cost_breakdown: None,
            status,
            owner: OwnerContact {
                name: "John Doe".to_string(),
                phone: None,
            },
            created_at: Utc::now(),
        }
    }

    #[test]
    fn overview_splits_active_and_past() {
        let overview = BookingsOverview::from_bookings(vec![
            booking("1", BookingStatus::Confirmed),
            booking("2", BookingStatus::Completed),
            booking("3", BookingStatus::Pending),
            booking("4", BookingStatus::Cancelled),
            booking("5", BookingStatus::Active),
        ]);

        let active: Vec<&str> = overview.active.iter().map(|b| b.id.as_str()).collect();
        let past: Vec<&str> = overview.past.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(active, vec!["1", "3", "5"]);
        assert_eq!(past, vec!["2", "4"]);
    }

    #[test]
    fn status_uses_upper_case_wire_names() {
        assert_eq!(
            serde_json::to_string(&BookingStatus::Confirmed).unwrap(),
            "\"CONFIRMED\""
        );
    }

    #[test]
    fn pickup_slots() {
        let at = |h, m| NaiveTime::from_hms_opt(h, m, 0).unwrap();
        assert!(is_valid_pickup_time(at(9, 0)));
        assert!(is_valid_pickup_time(at(17, 0)));
        assert!(!is_valid_pickup_time(at(8, 0)));
        assert!(!is_valid_pickup_time(at(18, 0)));
        assert!(!is_valid_pickup_time(at(10, 30)));
    }
}
