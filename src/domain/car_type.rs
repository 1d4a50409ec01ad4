//! Car type classification
//!
//! Listings don't carry a body type. It is inferred from the model name
//! through a fixed classification table, checked in order; anything that
//! matches no rule is a sedan.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Car type shown in the search filters
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CarType {
    Sedan,
    #[serde(rename = "SUV")]
    Suv,
    Hatchback,
    Convertible,
    Truck,
    Electric,
}

impl CarType {
    pub const ALL: [CarType; 6] = [
        Self::Sedan,
        Self::Suv,
        Self::Hatchback,
        Self::Convertible,
        Self::Truck,
        Self::Electric,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sedan => "Sedan",
            Self::Suv => "SUV",
            Self::Hatchback => "Hatchback",
            Self::Convertible => "Convertible",
            Self::Truck => "Truck",
            Self::Electric => "Electric",
        }
    }
}

impl std::fmt::Display for CarType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown car type '{0}'")]
pub struct UnknownCarType(pub String);

impl FromStr for CarType {
    type Err = UnknownCarType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| UnknownCarType(trimmed.to_string()))
    }
}

/// Model-name fragment → car type, first match wins
const CLASSIFICATION_RULES: &[(&str, CarType)] = &[
    ("Model 3", CarType::Electric),
    ("X3", CarType::Suv),
];

const FALLBACK: CarType = CarType::Sedan;

/// Infer the car type of a model name. Total: unknown models fall back to
/// [`CarType::Sedan`].
pub fn classify_model(model: &str) -> CarType {
    CLASSIFICATION_RULES
        .iter()
        .find(|(fragment, _)| model.contains(fragment))
        .map(|(_, car_type)| *car_type)
        .unwrap_or(FALLBACK)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_models_are_classified() {
        assert_eq!(classify_model("Model 3"), CarType::Electric);
        assert_eq!(classify_model("Model 3 Long Range"), CarType::Electric);
        assert_eq!(classify_model("X3"), CarType::Suv);
    }

    #[test]
    fn unknown_models_fall_back_to_sedan() {
        assert_eq!(classify_model("Camry"), CarType::Sedan);
        assert_eq!(classify_model(""), CarType::Sedan);
        // matching is case-sensitive
        assert_eq!(classify_model("x3"), CarType::Sedan);
    }

    #[test]
    fn parses_filter_labels() {
        assert_eq!("SUV".parse::<CarType>(), Ok(CarType::Suv));
        assert_eq!(" electric ".parse::<CarType>(), Ok(CarType::Electric));
        assert_eq!(
            "Minivan".parse::<CarType>(),
            Err(UnknownCarType("Minivan".to_string()))
        );
    }

    #[test]
    fn serializes_with_filter_labels() {
        assert_eq!(serde_json::to_string(&CarType::Suv).unwrap(), "\"SUV\"");
        assert_eq!(serde_json::to_string(&CarType::Sedan).unwrap(), "\"Sedan\"");
    }
}
