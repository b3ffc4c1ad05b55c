//! User profile domain models
//!
//! The application supports exactly one local profile. It is written in full
//! on every save; there is no field-level patching at the storage level.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::onboarding::form::{is_valid_email, FieldError};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProfileError {
    #[error("first name: {0}")]
    FirstName(FieldError),

    #[error("email: {0}")]
    Email(FieldError),
}

/// Notification opt-ins shown on the profile screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationPreferences {
    pub order_status: bool,
    pub password_change: bool,
    pub special_offers: bool,
    pub newsletter: bool,
}

impl NotificationPreferences {
    pub const fn all_enabled() -> Self {
        Self {
            order_status: true,
            password_change: true,
            special_offers: true,
            newsletter: true,
        }
    }
}

impl Default for NotificationPreferences {
    fn default() -> Self {
        Self::all_enabled()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub first_name: String,
    /// May be blank; onboarding does not ask for it.
    pub last_name: String,
    pub email: String,
    pub phone_number: Option<String>,
    pub avatar: Option<String>,
    pub notifications: NotificationPreferences,
}

impl UserProfile {
    /// Fixed key of the singleton profile record.
    pub const SINGLETON_ID: &'static str = "user_1";

    /// Profile created as a side effect of finishing onboarding.
    pub fn from_onboarding(first_name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: String::new(),
            email: email.into(),
            phone_number: None,
            avatar: None,
            notifications: NotificationPreferences::all_enabled(),
        }
    }

    /// Empty draft used by the profile editor when nothing is stored yet.
    pub fn blank() -> Self {
        Self::from_onboarding(String::new(), String::new())
    }

    /// Checks the required fields before a save.
    pub fn validate(&self) -> Result<(), ProfileError> {
        if self.first_name.trim().is_empty() {
            return Err(ProfileError::FirstName(FieldError::Required));
        }
        if self.email.trim().is_empty() {
            return Err(ProfileError::Email(FieldError::Required));
        }
        if !is_valid_email(&self.email) {
            return Err(ProfileError::Email(FieldError::InvalidEmail));
        }
        Ok(())
    }
}
