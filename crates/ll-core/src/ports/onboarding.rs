//! Onboarding state port
//!
//! This port defines the contract for persisting and retrieving the
//! onboarding completion record.

use async_trait::async_trait;

use crate::onboarding::OnboardingStatus;
use crate::ports::errors::StorageError;
use crate::profile::UserProfile;

#[async_trait]
pub trait OnboardingStatePort: Send + Sync {
    /// Get the onboarding record, `None` if onboarding never finished
    async fn get_status(&self) -> Result<Option<OnboardingStatus>, StorageError>;

    /// Persist the completion record together with the profile it creates.
    ///
    /// Both writes become visible together or not at all.
    async fn complete(
        &self,
        status: &OnboardingStatus,
        profile: &UserProfile,
    ) -> Result<(), StorageError>;

    /// Delete the onboarding record (the profile is left untouched)
    async fn reset(&self) -> Result<(), StorageError>;

    /// Check if onboarding is completed
    async fn is_completed(&self) -> Result<bool, StorageError> {
        Ok(self
            .get_status()
            .await?
            .map(|status| status.completed)
            .unwrap_or(false))
    }
}
