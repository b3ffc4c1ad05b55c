use std::sync::Arc;

use tracing::{info_span, warn, Instrument};

use ll_core::ports::UserProfileRepositoryPort;
use ll_core::profile::UserProfile;
use ll_core::SoftRead;

pub struct GetProfile {
    profile_repo: Arc<dyn UserProfileRepositoryPort>,
}

impl GetProfile {
    pub fn new(profile_repo: Arc<dyn UserProfileRepositoryPort>) -> Self {
        Self { profile_repo }
    }

    pub fn from_ports(profile_repo: Arc<dyn UserProfileRepositoryPort>) -> Self {
        Self::new(profile_repo)
    }

    /// The stored profile; `None` both when nothing was saved and when the
    /// read failed (the latter as a degraded read).
    pub async fn execute(&self) -> SoftRead<Option<UserProfile>> {
        let span = info_span!("usecase.get_profile.execute");

        async {
            let read = SoftRead::from_result(self.profile_repo.get().await);
            if let Some(reason) = read.reason() {
                warn!(%reason, "Profile read failed, showing empty profile");
            }
            read
        }
        .instrument(span)
        .await
    }
}
