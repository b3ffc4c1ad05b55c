use std::sync::Arc;

use tracing::{debug, info_span, warn, Instrument};

use ll_core::ports::OnboardingStatePort;
use ll_core::SoftRead;

/// Whether the first-run flow has been completed.
///
/// Never fails: a storage error yields a degraded `false`.
pub struct GetOnboardingStatus {
    onboarding_state: Arc<dyn OnboardingStatePort>,
}

impl GetOnboardingStatus {
    pub fn new(onboarding_state: Arc<dyn OnboardingStatePort>) -> Self {
        Self { onboarding_state }
    }

    pub fn from_ports(onboarding_state: Arc<dyn OnboardingStatePort>) -> Self {
        Self::new(onboarding_state)
    }

    pub async fn execute(&self) -> SoftRead<bool> {
        let span = info_span!("usecase.get_onboarding_status.execute");

        async {
            let read = SoftRead::from_result(self.onboarding_state.is_completed().await);
            match read.reason() {
                Some(reason) => warn!(%reason, "Onboarding status unavailable"),
                None => debug!(completed = *read.value(), "Onboarding status loaded"),
            }
            read
        }
        .instrument(span)
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{InMemoryOnboarding, MockOnboarding};
    use ll_core::onboarding::OnboardingStatus;
    use ll_core::ports::StorageError;
    use ll_core::profile::UserProfile;

    #[tokio::test]
    async fn fresh_state_is_not_completed() {
        let state = Arc::new(InMemoryOnboarding::default());

        let read = GetOnboardingStatus::new(state).execute().await;

        assert_eq!(read, SoftRead::Loaded(false));
    }

    #[tokio::test]
    async fn completed_record_reads_true() {
        let state = Arc::new(InMemoryOnboarding::default());
        state
            .complete(
                &OnboardingStatus::completed("Ana", "ana@example.com"),
                &UserProfile::from_onboarding("Ana", "ana@example.com"),
            )
            .await
            .unwrap();

        let read = GetOnboardingStatus::from_ports(state).execute().await;

        assert_eq!(read, SoftRead::Loaded(true));
    }

    #[tokio::test]
    async fn record_with_completed_false_reads_false() {
        let state = Arc::new(InMemoryOnboarding::default());
        *state.status.lock().unwrap() = Some(OnboardingStatus {
            completed: false,
            first_name: String::new(),
            email: String::new(),
        });

        let read = GetOnboardingStatus::new(state).execute().await;

        assert_eq!(read, SoftRead::Loaded(false));
    }

    #[tokio::test]
    async fn storage_error_degrades_to_false() {
        let mut mock = MockOnboarding::new();
        mock.expect_is_completed()
            .return_once(|| Err(StorageError::Read("unable to open database file".into())));

        let read = GetOnboardingStatus::new(Arc::new(mock)).execute().await;

        assert!(read.is_degraded());
        assert!(!read.value());
    }
}
