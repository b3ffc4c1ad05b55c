mod menu_repo;
mod onboarding_repo;
mod user_profile_repo;

pub use menu_repo::DieselMenuRepository;
pub use onboarding_repo::DieselOnboardingRepository;
pub use user_profile_repo::DieselUserProfileRepository;
