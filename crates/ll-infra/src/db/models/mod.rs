pub mod menu_item_row;
pub mod onboarding_row;
pub mod user_profile_row;

pub use menu_item_row::{MenuItemRow, NewMenuItemRow};
pub use onboarding_row::OnboardingRow;
pub use user_profile_row::UserProfileRow;
