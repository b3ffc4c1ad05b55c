//! Onboarding form validation.
//!
//! 入门表单校验：名字必填，邮箱必填且格式为 `local@domain.tld`。

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern must compile"));

/// Loose `local@domain.tld` shape check.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email.trim())
}

#[derive(Debug, Clone, Copy, Error, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldError {
    #[error("is required")]
    Required,

    #[error("is not a valid email")]
    InvalidEmail,
}

/// Raw values as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OnboardingForm {
    pub first_name: String,
    pub email: String,
}

/// Per-field validation errors, so the screen can flag each input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OnboardingFormErrors {
    pub first_name: Option<FieldError>,
    pub email: Option<FieldError>,
}

impl OnboardingFormErrors {
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none() && self.email.is_none()
    }
}

impl fmt::Display for OnboardingFormErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        if let Some(err) = self.first_name {
            parts.push(format!("first name {err}"));
        }
        if let Some(err) = self.email {
            parts.push(format!("email {err}"));
        }
        write!(f, "invalid onboarding form: {}", parts.join(", "))
    }
}

impl std::error::Error for OnboardingFormErrors {}

/// Trimmed, validated onboarding values. Only obtainable through
/// [`OnboardingForm::validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidOnboarding {
    first_name: String,
    email: String,
}

impl ValidOnboarding {
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}

impl OnboardingForm {
    pub fn new(first_name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            email: email.into(),
        }
    }

    pub fn validate(&self) -> Result<ValidOnboarding, OnboardingFormErrors> {
        let first_name = self.first_name.trim();
        let email = self.email.trim();

        let mut errors = OnboardingFormErrors::default();
        if first_name.is_empty() {
            errors.first_name = Some(FieldError::Required);
        }
        if email.is_empty() {
            errors.email = Some(FieldError::Required);
        } else if !is_valid_email(email) {
            errors.email = Some(FieldError::InvalidEmail);
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(ValidOnboarding {
            first_name: first_name.to_string(),
            email: email.to_string(),
        })
    }
}
