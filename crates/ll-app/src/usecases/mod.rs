//! Business logic use cases
//!
//! Reads that feed a screen return [`ll_core::SoftRead`] and never fail;
//! user-triggered writes return errors so the caller can keep the form and
//! offer a retry.

pub mod menu;
pub mod onboarding;
pub mod profile;

pub use menu::{ListMenuByCategory, LoadMenu, MenuFilter, RefreshMenu, SearchMenu};
pub use onboarding::{
    CompleteOnboarding, CompleteOnboardingError, GetOnboardingStatus, Logout, ResetOnboarding,
    ResolveStartupRoute,
};
pub use profile::{EditProfile, GetProfile, ProfileChanges, SaveProfile};
