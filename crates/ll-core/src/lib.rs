//! # ll-core
//!
//! Core domain models and business rules for Little Lemon.
//!
//! This crate contains pure business logic without any infrastructure dependencies.

pub mod app_dirs;
pub mod config;
pub mod menu;
pub mod onboarding;
pub mod ports;
pub mod profile;
pub mod read;

// Re-export commonly used types at the crate root
pub use config::AppConfig;
pub use menu::{MenuCategory, MenuError, MenuItem, MenuItemId, Price};
pub use onboarding::{
    GateEvent, GateState, OnboardingForm, OnboardingFormErrors, OnboardingGate, OnboardingStatus,
    StartupRoute,
};
pub use ports::StorageError;
pub use profile::{NotificationPreferences, ProfileError, UserProfile};
pub use read::SoftRead;
