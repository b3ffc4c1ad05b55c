use async_trait::async_trait;
use diesel::prelude::*;
use tracing::debug;

use ll_core::onboarding::OnboardingStatus;
use ll_core::ports::{OnboardingStatePort, StorageError};
use ll_core::profile::UserProfile;

use crate::db::models::{OnboardingRow, UserProfileRow};
use crate::db::ports::{DbExecutor, InsertMapper, RowMapper};
use crate::db::schema::{onboarding, user_profile};

/// Onboarding record store.
///
/// Completion also writes the profile row, so the repository carries the
/// profile mapper as well.
pub struct DieselOnboardingRepository<E, M, P> {
    executor: E,
    mapper: M,
    profile_mapper: P,
}

impl<E, M, P> DieselOnboardingRepository<E, M, P> {
    pub fn new(executor: E, mapper: M, profile_mapper: P) -> Self {
        Self {
            executor,
            mapper,
            profile_mapper,
        }
    }
}

#[async_trait]
impl<E, M, P> OnboardingStatePort for DieselOnboardingRepository<E, M, P>
where
    E: DbExecutor,
    M: InsertMapper<OnboardingStatus, OnboardingRow> + RowMapper<OnboardingRow, OnboardingStatus>,
    P: InsertMapper<UserProfile, UserProfileRow>,
{
    async fn get_status(&self) -> Result<Option<OnboardingStatus>, StorageError> {
        self.executor
            .run(|conn| {
                let row = onboarding::table
                    .find(OnboardingStatus::SINGLETON_ID)
                    .first::<OnboardingRow>(conn)
                    .optional()?;
                row.map(|r| self.mapper.to_domain(&r)).transpose()
            })
            .map_err(|e| StorageError::Read(e.to_string()))
    }

    async fn complete(
        &self,
        status: &OnboardingStatus,
        profile: &UserProfile,
    ) -> Result<(), StorageError> {
        let status_row = self
            .mapper
            .to_row(status)
            .map_err(|e| StorageError::Write(e.to_string()))?;
        let profile_row = self
            .profile_mapper
            .to_row(profile)
            .map_err(|e| StorageError::Write(e.to_string()))?;

        self.executor
            .run(|conn| {
                conn.transaction::<_, anyhow::Error, _>(|conn| {
                    diesel::replace_into(user_profile::table)
                        .values(&profile_row)
                        .execute(conn)?;
                    diesel::replace_into(onboarding::table)
                        .values(&status_row)
                        .execute(conn)?;
                    Ok(())
                })
            })
            .map_err(|e| StorageError::Write(e.to_string()))?;

        debug!(completed = status.completed, "onboarding record saved");
        Ok(())
    }

    async fn reset(&self) -> Result<(), StorageError> {
        let removed = self
            .executor
            .run(|conn| {
                let removed =
                    diesel::delete(onboarding::table.find(OnboardingStatus::SINGLETON_ID))
                        .execute(conn)?;
                Ok(removed)
            })
            .map_err(|e| StorageError::Write(e.to_string()))?;

        debug!(removed, "onboarding record reset");
        Ok(())
    }
}
