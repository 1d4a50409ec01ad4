//! Domain types and DTOs
//!
//! Listings, the search engine, reservation pricing, bookings, payments and
//! profiles. Everything here is free of HTTP and shared-state concerns.

pub mod bookings;
pub mod car_type;
pub mod listings;
pub mod payments;
pub mod pricing;
pub mod profiles;
pub mod search;

// Re-export commonly used types
pub use bookings::*;
pub use car_type::*;
pub use listings::*;
pub use profiles::*;

// Search, pricing and payment types are accessed via their modules
