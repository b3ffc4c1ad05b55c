//! Profile screen use cases

pub mod edit_profile;
pub mod get_profile;
pub mod save_profile;

pub use edit_profile::{EditProfile, ProfileChanges};
pub use get_profile::GetProfile;
pub use save_profile::SaveProfile;
