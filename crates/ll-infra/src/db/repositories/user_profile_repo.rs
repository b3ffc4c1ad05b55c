use async_trait::async_trait;
use diesel::prelude::*;
use tracing::debug;

use ll_core::ports::{StorageError, UserProfileRepositoryPort};
use ll_core::profile::UserProfile;

use crate::db::models::UserProfileRow;
use crate::db::ports::{DbExecutor, InsertMapper, RowMapper};
use crate::db::schema::user_profile;

pub struct DieselUserProfileRepository<E, M> {
    executor: E,
    mapper: M,
}

impl<E, M> DieselUserProfileRepository<E, M> {
    pub fn new(executor: E, mapper: M) -> Self {
        Self { executor, mapper }
    }
}

#[async_trait]
impl<E, M> UserProfileRepositoryPort for DieselUserProfileRepository<E, M>
where
    E: DbExecutor,
    M: InsertMapper<UserProfile, UserProfileRow> + RowMapper<UserProfileRow, UserProfile>,
{
    async fn get(&self) -> Result<Option<UserProfile>, StorageError> {
        self.executor
            .run(|conn| {
                let row = user_profile::table
                    .find(UserProfile::SINGLETON_ID)
                    .first::<UserProfileRow>(conn)
                    .optional()?;
                row.map(|r| self.mapper.to_domain(&r)).transpose()
            })
            .map_err(|e| StorageError::Read(e.to_string()))
    }

    async fn save(&self, profile: &UserProfile) -> Result<(), StorageError> {
        let row = self
            .mapper
            .to_row(profile)
            .map_err(|e| StorageError::Write(e.to_string()))?;

        self.executor
            .run(|conn| {
                diesel::replace_into(user_profile::table)
                    .values(&row)
                    .execute(conn)?;
                Ok(())
            })
            .map_err(|e| StorageError::Write(e.to_string()))?;

        debug!("user profile saved");
        Ok(())
    }
}
