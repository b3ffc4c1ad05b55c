use crate::db::schema::onboarding;
use diesel::prelude::*;

#[derive(Debug, Clone, Queryable, Insertable)]
#[diesel(table_name = onboarding)]
pub struct OnboardingRow {
    pub id: String,
    pub completed: i32,
    pub first_name: Option<String>,
    pub email: Option<String>,
}
