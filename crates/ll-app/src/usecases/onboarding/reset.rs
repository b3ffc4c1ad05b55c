use std::sync::Arc;

use anyhow::Context;
use tracing::{info, info_span, Instrument};

use ll_core::ports::OnboardingStatePort;

/// Deletes the onboarding record so the next start shows the form again.
/// The profile is kept.
pub struct ResetOnboarding {
    onboarding_state: Arc<dyn OnboardingStatePort>,
}

impl ResetOnboarding {
    pub fn new(onboarding_state: Arc<dyn OnboardingStatePort>) -> Self {
        Self { onboarding_state }
    }

    pub fn from_ports(onboarding_state: Arc<dyn OnboardingStatePort>) -> Self {
        Self::new(onboarding_state)
    }

    pub async fn execute(&self) -> anyhow::Result<()> {
        let span = info_span!("usecase.reset_onboarding.execute");

        async {
            self.onboarding_state
                .reset()
                .await
                .context("Failed to reset onboarding")?;
            info!("Onboarding reset");
            Ok(())
        }
        .instrument(span)
        .await
    }
}
