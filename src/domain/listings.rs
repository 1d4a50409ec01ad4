//! Listing domain types
//!
//! A listing is a single rentable vehicle: pricing, location, features,
//! rating, and the detail attributes shown on the car page.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use uuid::Uuid;

use super::car_type::{classify_model, CarType};

/// Features an owner can pick when listing a car
pub const KNOWN_FEATURES: [&str; 14] = [
    "AC",
    "GPS",
    "Bluetooth",
    "USB",
    "Backup Camera",
    "Cruise Control",
    "Sunroof",
    "Leather Seats",
    "Heated Seats",
    "Apple CarPlay",
    "Android Auto",
    "Parking Sensors",
    "Lane Assist",
    "Automatic Parking",
];

pub fn is_known_feature(name: &str) -> bool {
    KNOWN_FEATURES.contains(&name)
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum Transmission {
    #[default]
    Automatic,
    Manual,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum FuelType {
    #[default]
    Gasoline,
    Diesel,
    Hybrid,
    Electric,
}

/// Listing owner as shown on the car page
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Owner {
    pub id: String,
    pub name: String,
    pub avatar_url: Option<String>,
    pub joined_date: NaiveDate,
    pub total_trips: u32,
    pub response_rate: u8, // percent
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// Listing entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Listing {
    pub id: String,
    pub make: String,
    pub model: String,
    pub year: u16,
    pub color: String,
    pub location: String,
    pub price_per_day: Decimal,
    pub features: BTreeSet<String>,
    pub rating: f64,
    pub review_count: u32,
    pub description: Option<String>,
    pub license_plate: Option<String>,
    pub image_urls: Vec<String>,
    pub mileage: Option<u32>,
    pub fuel_type: FuelType,
    pub transmission: Transmission,
    pub seats: u8,
    pub coordinates: Option<Coordinates>,
    pub owner: Owner,
}

impl Listing {
    pub fn car_type(&self) -> CarType {
        classify_model(&self.model)
    }

    pub fn has_feature(&self, feature: &str) -> bool {
        self.features.contains(feature)
    }

    pub fn title(&self) -> String {
        format!("{} {} {}", self.year, self.make, self.model)
    }
}

/// Review left by a renter
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Review {
    pub id: String,
    pub author: String,
    pub avatar_url: Option<String>,
    pub rating: u8,
    pub comment: String,
    pub date: NaiveDate,
}

/// Card shown in search results
#[derive(Debug, Clone, Serialize)]
pub struct ListingSummary {
    pub id: String,
    pub make: String,
    pub model: String,
    pub year: u16,
    pub color: String,
    pub car_type: CarType,
    pub location: String,
    pub price_per_day: Decimal,
    pub features: BTreeSet<String>,
    pub rating: f64,
    pub review_count: u32,
    pub image_url: Option<String>,
    pub owner_name: String,
    pub owner_avatar_url: Option<String>,
}

impl From<&Listing> for ListingSummary {
    fn from(l: &Listing) -> Self {
        Self {
            id: l.id.clone(),
            make: l.make.clone(),
            model: l.model.clone(),
            year: l.year,
            color: l.color.clone(),
            car_type: l.car_type(),
            location: l.location.clone(),
            price_per_day: l.price_per_day,
            features: l.features.clone(),
            rating: l.rating,
            review_count: l.review_count,
            image_url: l.image_urls.first().cloned(),
            owner_name: l.owner.name.clone(),
            owner_avatar_url: l.owner.avatar_url.clone(),
        }
    }
}

/// Response DTO for the car detail page
#[derive(Debug, Clone, Serialize)]
pub struct ListingDetail {
    #[serde(flatten)]
    pub listing: Listing,
    pub car_type: CarType,
    pub reviews: Vec<Review>,
}

/// Request DTO for listing a car
#[derive(Debug, Clone, Deserialize)]
pub struct CreateListingRequest {
    pub make: String,
    pub model: String,
    pub year: u16,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub license_plate: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub price_per_day: Decimal,
    pub location: String,
    #[serde(default)]
    pub fuel_type: FuelType,
    #[serde(default)]
    pub transmission: Transmission,
    #[serde(default = "default_seats")]
    pub seats: u8,
    #[serde(default)]
    pub mileage: Option<u32>,
    #[serde(default)]
    pub features: Vec<String>,
}

fn default_seats() -> u8 {
    5
}

impl CreateListingRequest {
    /// Check the submission; returns every problem found, not just the first.
    pub fn validate(&self, today: NaiveDate) -> Result<(), Vec<String>> {
        use chrono::Datelike;

        let mut problems = Vec::new();

        if self.make.trim().is_empty() {
            problems.push("make is required".to_string());
        }
        if self.model.trim().is_empty() {
            problems.push("model is required".to_string());
        }
        if self.location.trim().is_empty() {
            problems.push("location is required".to_string());
        }
        if self.price_per_day <= Decimal::ZERO {
            problems.push("price_per_day must be greater than zero".to_string());
        }

        let latest_year = today.year() + 1;
        if !(1900..=latest_year).contains(&i32::from(self.year)) {
            problems.push(format!("year must be between 1900 and {}", latest_year));
        }
        if !(1..=9).contains(&self.seats) {
            problems.push("seats must be between 1 and 9".to_string());
        }

        for feature in &self.features {
            if !is_known_feature(feature) {
                problems.push(format!("unknown feature '{}'", feature));
            }
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(problems)
        }
    }
}

/// Review state of a submitted listing
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionStatus {
    #[default]
    PendingReview,
    Published,
    Rejected,
}

/// A listing waiting in the review queue. Submissions are not searchable.
#[derive(Debug, Clone, Serialize)]
pub struct ListingSubmission {
    pub id: Uuid,
    pub status: SubmissionStatus,
    pub make: String,
    pub model: String,
    pub year: u16,
    pub car_type: CarType,
    pub color: Option<String>,
    pub license_plate: Option<String>,
    pub description: Option<String>,
    pub price_per_day: Decimal,
    pub location: String,
    pub fuel_type: FuelType,
    pub transmission: Transmission,
    pub seats: u8,
    pub mileage: Option<u32>,
    pub features: BTreeSet<String>,
    pub submitted_at: DateTime<Utc>,
}

impl ListingSubmission {
    pub fn from_request(req: CreateListingRequest, submitted_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            status: SubmissionStatus::PendingReview,
            car_type: classify_model(&req.model),
            make: req.make.trim().to_string(),
            model: req.model.trim().to_string(),
            year: req.year,
            color: req.color,
            license_plate: req.license_plate,
            description: req.description,
            price_per_day: req.price_per_day,
            location: req.location.trim().to_string(),
            fuel_type: req.fuel_type,
            transmission: req.transmission,
            seats: req.seats,
            mileage: req.mileage,
            features: req.features.into_iter().collect(),
            submitted_at,
        }
    }
}
