use std::sync::Arc;

use thiserror::Error;
use tracing::{info, info_span, Instrument};

use ll_core::onboarding::{OnboardingForm, OnboardingFormErrors, OnboardingStatus};
use ll_core::ports::{OnboardingStatePort, StorageError};
use ll_core::profile::UserProfile;

#[derive(Debug, Error)]
pub enum CompleteOnboardingError {
    /// The form is not submittable; nothing was written.
    #[error(transparent)]
    Invalid(#[from] OnboardingFormErrors),

    /// Neither the onboarding record nor the profile was written.
    #[error("Failed to complete onboarding: {0}")]
    Storage(#[from] StorageError),
}

/// Submits the first-run form.
///
/// Stores the completion record and the initial profile (blank last name,
/// every notification enabled) as one write.
pub struct CompleteOnboarding {
    onboarding_state: Arc<dyn OnboardingStatePort>,
}

impl CompleteOnboarding {
    pub fn new(onboarding_state: Arc<dyn OnboardingStatePort>) -> Self {
        Self { onboarding_state }
    }

    pub fn from_ports(onboarding_state: Arc<dyn OnboardingStatePort>) -> Self {
        Self::new(onboarding_state)
    }

    pub async fn execute(
        &self,
        form: &OnboardingForm,
    ) -> Result<UserProfile, CompleteOnboardingError> {
        let span = info_span!("usecase.complete_onboarding.execute");

        async {
            let valid = form.validate()?;
            let status = OnboardingStatus::completed(valid.first_name(), valid.email());
            let profile = UserProfile::from_onboarding(valid.first_name(), valid.email());

            self.onboarding_state.complete(&status, &profile).await?;

            info!("Onboarding completed");
            Ok(profile)
        }
        .instrument(span)
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{InMemoryOnboarding, MockOnboarding};
    use ll_core::onboarding::FieldError;
    use ll_core::NotificationPreferences;

    #[tokio::test]
    async fn valid_form_writes_status_and_default_profile() {
        let state = Arc::new(InMemoryOnboarding::default());
        let use_case = CompleteOnboarding::new(state.clone());

        let profile = use_case
            .execute(&OnboardingForm::new(" Tilly ", "tilly@example.com "))
            .await
            .unwrap();

        assert_eq!(profile.first_name, "Tilly");
        assert_eq!(profile.email, "tilly@example.com");
        assert_eq!(profile.last_name, "");
        assert_eq!(profile.notifications, NotificationPreferences::all_enabled());
        assert!(state.is_completed().await.unwrap());
        assert_eq!(state.profile.lock().unwrap().as_ref(), Some(&profile));
        assert_eq!(
            state.status.lock().unwrap().as_ref().map(|s| s.first_name.as_str()),
            Some("Tilly")
        );
    }

    #[tokio::test]
    async fn invalid_form_writes_nothing() {
        let mut mock = MockOnboarding::new();
        mock.expect_complete().never();

        let err = CompleteOnboarding::new(Arc::new(mock))
            .execute(&OnboardingForm::new("", "tilly@"))
            .await
            .unwrap_err();

        match err {
            CompleteOnboardingError::Invalid(errors) => {
                assert_eq!(errors.first_name, Some(FieldError::Required));
                assert_eq!(errors.email, Some(FieldError::InvalidEmail));
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn storage_failure_is_reported_as_write_error() {
        let mut mock = MockOnboarding::new();
        mock.expect_complete()
            .times(1)
            .returning(|_, _| Err(StorageError::Write("database is locked".into())));

        let err = CompleteOnboarding::new(Arc::new(mock))
            .execute(&OnboardingForm::new("Tilly", "tilly@example.com"))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            CompleteOnboardingError::Storage(StorageError::Write(_))
        ));
    }
}
