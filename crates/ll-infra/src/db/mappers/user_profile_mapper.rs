use super::{bool_to_flag, flag_to_bool};
use crate::db::models::UserProfileRow;
use crate::db::ports::{InsertMapper, RowMapper};
use anyhow::Result;
use ll_core::profile::{NotificationPreferences, UserProfile};

pub struct UserProfileRowMapper;

impl InsertMapper<UserProfile, UserProfileRow> for UserProfileRowMapper {
    fn to_row(&self, domain: &UserProfile) -> Result<UserProfileRow> {
        Ok(UserProfileRow {
            id: UserProfile::SINGLETON_ID.to_string(),
            first_name: domain.first_name.clone(),
            last_name: Some(domain.last_name.clone()),
            email: domain.email.clone(),
            phone_number: domain.phone_number.clone(),
            avatar: domain.avatar.clone(),
            order_status_notification: bool_to_flag(domain.notifications.order_status),
            password_change_notification: bool_to_flag(domain.notifications.password_change),
            special_offers_notification: bool_to_flag(domain.notifications.special_offers),
            newsletter_notification: bool_to_flag(domain.notifications.newsletter),
        })
    }
}

impl RowMapper<UserProfileRow, UserProfile> for UserProfileRowMapper {
    fn to_domain(&self, row: &UserProfileRow) -> Result<UserProfile> {
        Ok(UserProfile {
            first_name: row.first_name.clone(),
            last_name: row.last_name.clone().unwrap_or_default(),
            email: row.email.clone(),
            phone_number: row.phone_number.clone(),
            avatar: row.avatar.clone(),
            notifications: NotificationPreferences {
                order_status: flag_to_bool(row.order_status_notification),
                password_change: flag_to_bool(row.password_change_notification),
                special_offers: flag_to_bool(row.special_offers_notification),
                newsletter: flag_to_bool(row.newsletter_notification),
            },
        })
    }
}
