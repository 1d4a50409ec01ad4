//! Built-in marketplace data
//!
//! The service runs entirely on this data set; nothing is persisted.

use chrono::{NaiveDate, TimeZone, Utc};
use rust_decimal::Decimal;

use crate::domain::{
    Booking, BookingStatus, CarSummary, Coordinates, FuelType, Listing, Owner, OwnerContact,
    Profile, ProfileStats, Review, Transmission,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn features(names: &[&str]) -> std::collections::BTreeSet<String> {
    names.iter().map(|n| n.to_string()).collect()
}

fn unsplash(photo: &str, w: u32, h: u32) -> String {
    format!(
        "https://images.unsplash.com/{}?w={}&h={}&fit=crop",
        photo, w, h
    )
}

pub fn listings() -> Vec<Listing> {
    vec![
        Listing {
            id: "1".to_string(),
            make: "Toyota".to_string(),
            model: "Camry".to_string(),
            year: 2022,
            color: "Silver".to_string(),
            location: "Downtown Seattle".to_string(),
            price_per_day: Decimal::from(45),
            features: features(&[
                "AC",
                "GPS",
                "Bluetooth",
                "USB",
                "Backup Camera",
                "Cruise Control",
            ]),
            rating: 4.8,
            review_count: 24,
            description: Some(
                "A reliable and comfortable sedan perfect for city driving and weekend trips. \
                 Well-maintained with recent service records."
                    .to_string(),
            ),
            license_plate: Some("ABC-123".to_string()),
            image_urls: vec![
                unsplash("photo-1621007947382-bb3c3994e3fb", 800, 600),
                unsplash("photo-1617531653520-bd466a8f2316", 800, 600),
                unsplash("photo-1619767886558-efdc259cde1a", 800, 600),
                unsplash("photo-1549317661-bd32c8ce0db2", 800, 600),
            ],
            mileage: Some(35_000),
            fuel_type: FuelType::Gasoline,
            transmission: Transmission::Automatic,
            seats: 5,
            coordinates: Some(Coordinates {
                latitude: 47.6062,
                longitude: -122.3321,
            }),
            owner: Owner {
                id: "owner1".to_string(),
                name: "John Doe".to_string(),
                avatar_url: Some(unsplash("photo-1472099645785-5658abf4ff4e", 60, 60)),
                joined_date: date(2021, 3, 15),
                total_trips: 142,
                response_rate: 98,
            },
        },
        Listing {
            id: "2".to_string(),
            make: "Honda".to_string(),
            model: "Civic".to_string(),
            year: 2021,
            color: "Blue".to_string(),
            location: "Capitol Hill".to_string(),
            price_per_day: Decimal::from(35),
            features: features(&["AC", "Bluetooth", "USB"]),
            rating: 4.9,
            review_count: 31,
            description: Some("Economical compact with great mileage around town.".to_string()),
            license_plate: Some("XYZ-789".to_string()),
            image_urls: vec![unsplash("photo-1590362891991-f776e747a588", 800, 600)],
            mileage: Some(28_000),
            fuel_type: FuelType::Gasoline,
            transmission: Transmission::Automatic,
            seats: 5,
            coordinates: None,
            owner: Owner {
                id: "owner2".to_string(),
                name: "Jane Smith".to_string(),
                avatar_url: Some(unsplash("photo-1438761681033-6461ffad8d80", 60, 60)),
                joined_date: date(2020, 8, 2),
                total_trips: 87,
                response_rate: 95,
            },
        },
        Listing {
            id: "3".to_string(),
            make: "Tesla".to_string(),
            model: "Model 3".to_string(),
            year: 2023,
            color: "White".to_string(),
            location: "Belltown".to_string(),
            price_per_day: Decimal::from(85),
            features: features(&["Autopilot", "Supercharging", "Premium Audio"]),
            rating: 5.0,
            review_count: 12,
            description: Some("All-electric with Autopilot and Supercharger access.".to_string()),
            license_plate: Some("ELC-456".to_string()),
            image_urls: vec![unsplash("photo-1560958089-b8a1929cea89", 800, 600)],
            mileage: Some(9_500),
            fuel_type: FuelType::Electric,
            transmission: Transmission::Automatic,
            seats: 5,
            coordinates: None,
            owner: Owner {
                id: "owner3".to_string(),
                name: "Mike Johnson".to_string(),
                avatar_url: Some(unsplash("photo-1500648767791-00dcc994a43e", 60, 60)),
                joined_date: date(2022, 1, 10),
                total_trips: 39,
                response_rate: 100,
            },
        },
        Listing {
            id: "4".to_string(),
            make: "BMW".to_string(),
            model: "X3".to_string(),
            year: 2022,
            color: "Black".to_string(),
            location: "Queen Anne".to_string(),
            price_per_day: Decimal::from(75),
            features: features(&["AC", "GPS", "Leather Seats", "Sunroof"]),
            rating: 4.7,
            review_count: 18,
            description: Some("Roomy luxury SUV, ready for mountain weekends.".to_string()),
            license_plate: Some("BMW-303".to_string()),
            image_urls: vec![unsplash("photo-1555215695-3004980ad54e", 800, 600)],
            mileage: Some(21_000),
            fuel_type: FuelType::Gasoline,
            transmission: Transmission::Automatic,
            seats: 5,
            coordinates: None,
            owner: Owner {
                id: "owner4".to_string(),
                name: "Sarah Wilson".to_string(),
                avatar_url: Some(unsplash("photo-1494790108377-be9c29b29330", 60, 60)),
                joined_date: date(2021, 11, 5),
                total_trips: 56,
                response_rate: 97,
            },
        },
    ]
}

/// Reviews keyed by listing id
pub fn reviews() -> Vec<(String, Review)> {
    vec![
        (
            "1".to_string(),
            Review {
                id: "1".to_string(),
                author: "Sarah Miller".to_string(),
                avatar_url: Some(unsplash("photo-1494790108377-be9c29b29330", 40, 40)),
                rating: 5,
                comment: "Great car and excellent communication from John. \
                          The car was clean and exactly as described."
                    .to_string(),
                date: date(2024, 1, 15),
            },
        ),
        (
            "1".to_string(),
            Review {
                id: "2".to_string(),
                author: "Mike Chen".to_string(),
                avatar_url: Some(unsplash("photo-1507003211169-0a1dd7228f2d", 40, 40)),
                rating: 4,
                comment: "Reliable car for my business trip. Pickup was smooth and on time."
                    .to_string(),
                date: date(2024, 1, 10),
            },
        ),
    ]
}

pub fn bookings() -> Vec<Booking> {
    let created = |y, m, d| {
        Utc.with_ymd_and_hms(y, m, d, 12, 0, 0)
            .single()
            .unwrap_or_default()
    };

    vec![
        Booking {
            id: "1".to_string(),
            car_id: "1".to_string(),
            car: CarSummary {
                make: "Toyota".to_string(),
                model: "Camry".to_string(),
                year: 2022,
                image_url: Some(unsplash("photo-1621007947382-bb3c3994e3fb", 200, 160)),
                license_plate: Some("ABC-123".to_string()),
            },
            start_date: date(2024, 2, 15),
            end_date: date(2024, 2, 18),
            pickup_time: None,
            total_cost: Decimal::from(135),
            cost_breakdown: None,
            status: BookingStatus::Confirmed,
            owner: OwnerContact {
                name: "John Doe".to_string(),
                phone: Some("+1 (555) 123-4567".to_string()),
            },
            created_at: created(2024, 2, 1),
        },
        Booking {
            id: "2".to_string(),
            car_id: "2".to_string(),
            car: CarSummary {
                make: "Honda".to_string(),
                model: "Civic".to_string(),
                year: 2021,
                image_url: Some(unsplash("photo-1590362891991-f776e747a588", 200, 160)),
                license_plate: Some("XYZ-789".to_string()),
            },
            start_date: date(2024, 1, 20),
            end_date: date(2024, 1, 22),
            pickup_time: None,
            total_cost: Decimal::from(70),
            cost_breakdown: None,
            status: BookingStatus::Completed,
            owner: OwnerContact {
                name: "Jane Smith".to_string(),
                phone: Some("+1 (555) 987-6543".to_string()),
            },
            created_at: created(2024, 1, 5),
        },
        Booking {
            id: "3".to_string(),
            car_id: "3".to_string(),
            car: CarSummary {
                make: "Tesla".to_string(),
                model: "Model 3".to_string(),
                year: 2023,
                image_url: Some(unsplash("photo-1560958089-b8a1929cea89", 200, 160)),
                license_plate: Some("ELC-456".to_string()),
            },
            start_date: date(2024, 3, 1),
            end_date: date(2024, 3, 3),
            pickup_time: None,
            total_cost: Decimal::from(170),
            cost_breakdown: None,
            status: BookingStatus::Pending,
            owner: OwnerContact {
                name: "Mike Johnson".to_string(),
                phone: Some("+1 (555) 456-7890".to_string()),
            },
            created_at: created(2024, 2, 20),
        },
    ]
}

pub fn profile() -> Profile {
    Profile {
        name: "Alex Rivera".to_string(),
        email: "alex@example.com".to_string(),
        phone: Some("+1 (555) 123-4567".to_string()),
        location: Some("Seattle, WA".to_string()),
        bio: Some(
            "Love exploring new places and meeting new people through car sharing!".to_string(),
        ),
        join_date: date(2021, 3, 15),
        stats: ProfileStats {
            total_trips: 24,
            cars_listed: 2,
            rating: 4.9,
            earnings: Decimal::from(1250),
        },
    }
}
