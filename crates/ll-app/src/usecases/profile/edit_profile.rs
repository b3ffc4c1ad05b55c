use std::sync::Arc;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use tracing::{info, info_span, Instrument};

use ll_core::ports::UserProfileRepositoryPort;
use ll_core::profile::UserProfile;

/// Partial edit of the profile. `None` leaves a field as it is.
///
/// `phone_number` and `avatar` take `Some(None)` to clear the value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileChanges {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<Option<String>>,
    pub avatar: Option<Option<String>>,
    pub order_status: Option<bool>,
    pub password_change: Option<bool>,
    pub special_offers: Option<bool>,
    pub newsletter: Option<bool>,
}

impl ProfileChanges {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn apply_to(&self, profile: &mut UserProfile) {
        if let Some(first_name) = &self.first_name {
            profile.first_name = first_name.trim().to_string();
        }
        if let Some(last_name) = &self.last_name {
            profile.last_name = last_name.trim().to_string();
        }
        if let Some(email) = &self.email {
            profile.email = email.trim().to_string();
        }
        if let Some(phone_number) = &self.phone_number {
            profile.phone_number = phone_number.clone();
        }
        if let Some(avatar) = &self.avatar {
            profile.avatar = avatar.clone();
        }

        let notifications = &mut profile.notifications;
        if let Some(flag) = self.order_status {
            notifications.order_status = flag;
        }
        if let Some(flag) = self.password_change {
            notifications.password_change = flag;
        }
        if let Some(flag) = self.special_offers {
            notifications.special_offers = flag;
        }
        if let Some(flag) = self.newsletter {
            notifications.newsletter = flag;
        }
    }
}

/// Read-modify-write of the singleton profile.
///
/// The store only supports full overwrites, so the current record (or a
/// blank draft) is loaded, patched and written back whole.
pub struct EditProfile {
    profile_repo: Arc<dyn UserProfileRepositoryPort>,
}

impl EditProfile {
    pub fn new(profile_repo: Arc<dyn UserProfileRepositoryPort>) -> Self {
        Self { profile_repo }
    }

    pub fn from_ports(profile_repo: Arc<dyn UserProfileRepositoryPort>) -> Self {
        Self::new(profile_repo)
    }

    pub async fn execute(&self, changes: &ProfileChanges) -> anyhow::Result<UserProfile> {
        let span = info_span!("usecase.edit_profile.execute");

        async {
            // A failed read must not turn into an overwrite with a blank draft.
            let mut profile = self
                .profile_repo
                .get()
                .await
                .context("Failed to load profile for editing")?
                .unwrap_or_else(UserProfile::blank);

            changes.apply_to(&mut profile);
            profile.validate()?;

            self.profile_repo
                .save(&profile)
                .await
                .context("Failed to save profile")?;

            info!("Profile updated");
            Ok(profile)
        }
        .instrument(span)
        .await
    }
}
