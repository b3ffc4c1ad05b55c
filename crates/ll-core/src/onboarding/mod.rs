//! Onboarding domain models
//!
//! This module defines the first-run flow: the persisted completion record,
//! the form the user submits, and the gate that decides which screen the
//! application boots into.

pub mod form;
pub mod gate;

pub use form::{FieldError, OnboardingForm, OnboardingFormErrors, ValidOnboarding};
pub use gate::{transition, GateEvent, GateState, OnboardingGate, StartupRoute};

use serde::{Deserialize, Serialize};

/// Singleton record of the first-run flow.
///
/// An absent record means onboarding has not been completed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OnboardingStatus {
    /// Whether onboarding has been completed
    pub completed: bool,
    /// Name captured by the onboarding form
    pub first_name: String,
    /// Email captured by the onboarding form
    pub email: String,
}

impl OnboardingStatus {
    /// Fixed key of the singleton onboarding record.
    pub const SINGLETON_ID: &'static str = "onboarding_1";

    pub fn completed(first_name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            completed: true,
            first_name: first_name.into(),
            email: email.into(),
        }
    }
}
