use super::{bool_to_flag, flag_to_bool};
use crate::db::models::OnboardingRow;
use crate::db::ports::{InsertMapper, RowMapper};
use anyhow::Result;
use ll_core::onboarding::OnboardingStatus;

pub struct OnboardingRowMapper;

impl InsertMapper<OnboardingStatus, OnboardingRow> for OnboardingRowMapper {
    fn to_row(&self, domain: &OnboardingStatus) -> Result<OnboardingRow> {
        Ok(OnboardingRow {
            id: OnboardingStatus::SINGLETON_ID.to_string(),
            completed: bool_to_flag(domain.completed),
            first_name: Some(domain.first_name.clone()),
            email: Some(domain.email.clone()),
        })
    }
}

impl RowMapper<OnboardingRow, OnboardingStatus> for OnboardingRowMapper {
    fn to_domain(&self, row: &OnboardingRow) -> Result<OnboardingStatus> {
        Ok(OnboardingStatus {
            completed: flag_to_bool(row.completed),
            first_name: row.first_name.clone().unwrap_or_default(),
            email: row.email.clone().unwrap_or_default(),
        })
    }
}
