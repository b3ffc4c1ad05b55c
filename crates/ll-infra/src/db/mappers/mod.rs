pub mod menu_item_mapper;
pub mod onboarding_mapper;
pub mod user_profile_mapper;

pub use menu_item_mapper::MenuItemRowMapper;
pub use onboarding_mapper::OnboardingRowMapper;
pub use user_profile_mapper::UserProfileRowMapper;

fn bool_to_flag(value: bool) -> i32 {
    i32::from(value)
}

fn flag_to_bool(value: i32) -> bool {
    value != 0
}
