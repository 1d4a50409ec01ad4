//! In-memory booking ledger

use chrono::Utc;
use parking_lot::RwLock;
use uuid::Uuid;

use crate::domain::pricing::Quote;
use crate::domain::{Booking, BookingStatus, BookingsOverview, CarSummary, Listing, OwnerContact};

pub struct BookingLedger {
    bookings: RwLock<Vec<Booking>>,
}

impl BookingLedger {
    pub fn new(bookings: Vec<Booking>) -> Self {
        Self {
            bookings: RwLock::new(bookings),
        }
    }

    pub fn seeded() -> Self {
        Self::new(super::seed::bookings())
    }

    pub fn overview(&self) -> BookingsOverview {
        BookingsOverview::from_bookings(self.bookings.read().iter().cloned())
    }

    /// Record a booking request against `listing`, priced by `quote`.
    /// New requests wait for the owner as [`BookingStatus::Pending`].
    pub fn request(
        &self,
        listing: &Listing,
        quote: &Quote,
        pickup_time: Option<chrono::NaiveTime>,
    ) -> Booking {
        let booking = Booking {
            id: Uuid::new_v4().to_string(),
            car_id: listing.id.clone(),
            car: CarSummary {
                make: listing.make.clone(),
                model: listing.model.clone(),
                year: listing.year,
                image_url: listing.image_urls.first().cloned(),
                license_plate: listing.license_plate.clone(),
            },
            start_date: quote.start_date,
            end_date: quote.end_date,
            pickup_time,
            total_cost: quote.total,
            cost_breakdown: Some(quote.display()),
            status: BookingStatus::Pending,
            owner: OwnerContact {
                name: listing.owner.name.clone(),
                phone: None,
            },
            created_at: Utc::now(),
        };

        self.bookings.write().push(booking.clone());
        booking
    }

    pub fn get(&self, id: &str) -> Option<Booking> {
        self.bookings.read().iter().find(|b| b.id == id).cloned()
    }
}
