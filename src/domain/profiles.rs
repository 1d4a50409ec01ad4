use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProfileStats {
    pub total_trips: u32,
    pub cars_listed: u32,
    pub rating: f64,
    pub earnings: Decimal,
}

/// User profile
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Profile {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub bio: Option<String>,
    pub join_date: NaiveDate,
    pub stats: ProfileStats,
}

/// Request DTO for editing a profile. Absent fields are left unchanged.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct UpdateProfileRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
}

impl UpdateProfileRequest {
    pub fn validate(&self) -> Result<(), String> {
        if let Some(name) = &self.name {
            if name.trim().is_empty() {
                return Err("name must not be empty".to_string());
            }
        }
        if let Some(email) = &self.email {
            let email = email.trim();
            let well_formed = email
                .split_once('@')
                .map(|(local, domain)| !local.is_empty() && domain.contains('.'))
                .unwrap_or(false);
            if !well_formed {
                return Err(format!("'{}' is not a valid email address", email));
            }
        }
        Ok(())
    }

    /// Apply the edit. Blank optional fields clear the stored value.
    pub fn apply_to(self, profile: &mut Profile) {
        if let Some(name) = self.name {
            profile.name = name.trim().to_string();
        }
        if let Some(email) = self.email {
            profile.email = email.trim().to_string();
        }
        if let Some(phone) = self.phone {
            profile.phone = non_blank(phone);
        }
        if let Some(location) = self.location {
            profile.location = non_blank(location);
        }
        if let Some(bio) = self.bio {
            profile.bio = non_blank(bio);
        }
    }
}

fn non_blank(value: String) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
