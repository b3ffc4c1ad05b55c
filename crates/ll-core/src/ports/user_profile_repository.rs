use async_trait::async_trait;

use crate::ports::errors::StorageError;
use crate::profile::UserProfile;

#[async_trait]
pub trait UserProfileRepositoryPort: Send + Sync {
    /// The singleton profile, or `None` when none was saved yet.
    async fn get(&self) -> Result<Option<UserProfile>, StorageError>;

    /// Insert or overwrite the singleton profile (every field).
    async fn save(&self, profile: &UserProfile) -> Result<(), StorageError>;
}
