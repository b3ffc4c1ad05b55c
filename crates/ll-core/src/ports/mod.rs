//! Port interfaces for the application layer
//!
//! Ports define the contract between the use cases and the infrastructure
//! implementations, keeping the domain independent of SQLite, the file system
//! and the menu source.

pub mod app_dirs;
pub mod errors;
pub mod menu_repository;
pub mod menu_source;
pub mod onboarding;
pub mod user_profile_repository;

pub use app_dirs::AppDirsPort;
pub use errors::{AppDirsError, StorageError};
pub use menu_repository::MenuRepositoryPort;
pub use menu_source::MenuSourcePort;
pub use onboarding::OnboardingStatePort;
pub use user_profile_repository::UserProfileRepositoryPort;
