use crate::db::schema::user_profile;
use diesel::prelude::*;

/// Notification flags are stored as 0/1 integers.
#[derive(Debug, Clone, Queryable, Insertable)]
#[diesel(table_name = user_profile)]
pub struct UserProfileRow {
    pub id: String,
    pub first_name: String,
    pub last_name: Option<String>,
    pub email: String,
    pub phone_number: Option<String>,
    pub avatar: Option<String>,
    pub order_status_notification: i32,
    pub password_change_notification: i32,
    pub special_offers_notification: i32,
    pub newsletter_notification: i32,
}
