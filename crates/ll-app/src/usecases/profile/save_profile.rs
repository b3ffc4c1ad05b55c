use std::sync::Arc;

use anyhow::Context;
use tracing::{info, info_span, Instrument};

use ll_core::ports::UserProfileRepositoryPort;
use ll_core::profile::UserProfile;

/// Validates and stores the whole profile record.
pub struct SaveProfile {
    profile_repo: Arc<dyn UserProfileRepositoryPort>,
}

impl SaveProfile {
    pub fn new(profile_repo: Arc<dyn UserProfileRepositoryPort>) -> Self {
        Self { profile_repo }
    }

    pub fn from_ports(profile_repo: Arc<dyn UserProfileRepositoryPort>) -> Self {
        Self::new(profile_repo)
    }

    pub async fn execute(&self, profile: &UserProfile) -> anyhow::Result<()> {
        let span = info_span!("usecase.save_profile.execute");

        async {
            profile.validate()?;
            self.profile_repo
                .save(profile)
                .await
                .context("Failed to save profile")?;
            info!("Profile saved");
            Ok(())
        }
        .instrument(span)
        .await
    }
}
