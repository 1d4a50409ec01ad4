//! Profile store for the signed-in demo user

use parking_lot::RwLock;

use crate::domain::{Profile, UpdateProfileRequest};

pub struct ProfileStore {
    profile: RwLock<Profile>,
}

impl ProfileStore {
    pub fn new(profile: Profile) -> Self {
        Self {
            profile: RwLock::new(profile),
        }
    }

    pub fn seeded() -> Self {
        Self::new(super::seed::profile())
    }

    pub fn current(&self) -> Profile {
        self.profile.read().clone()
    }

    /// Apply an already validated edit and return the updated profile.
    pub fn update(&self, req: UpdateProfileRequest) -> Profile {
        let mut profile = self.profile.write();
        req.apply_to(&mut profile);
        profile.clone()
    }
}
