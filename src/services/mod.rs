//! Service layer: in-memory marketplace stores and the payment gateway.
//!
//! Contains the listing catalog, booking ledger, profile store and the
//! payment gateway interface with its simulated processor.

pub mod bookings;
pub mod catalog;
pub mod payments;
pub mod profiles;
pub mod seed;

pub use bookings::BookingLedger;
pub use catalog::Catalog;
pub use payments::{MockPaymentGateway, PaymentGateway};
pub use profiles::ProfileStore;
