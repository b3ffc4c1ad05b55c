//! Onboarding use cases
//!
//! Startup routing, the first-run form submission, and the actions that send
//! the user back to onboarding (reset and logout).

pub mod complete;
pub mod get_status;
pub mod logout;
pub mod reset;
pub mod resolve_route;

pub use complete::{CompleteOnboarding, CompleteOnboardingError};
pub use get_status::GetOnboardingStatus;
pub use logout::Logout;
pub use reset::ResetOnboarding;
pub use resolve_route::ResolveStartupRoute;
