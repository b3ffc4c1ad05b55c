use std::sync::Arc;

use anyhow::Context;
use tracing::{info, info_span, Instrument};

use ll_core::ports::OnboardingStatePort;

/// Logs the user out.
///
/// There is no account or session; logging out only clears the onboarding
/// record, so the next start routes to the onboarding form. The stored
/// profile stays and is overwritten when the form is submitted again.
pub struct Logout {
    onboarding_state: Arc<dyn OnboardingStatePort>,
}

impl Logout {
    pub fn new(onboarding_state: Arc<dyn OnboardingStatePort>) -> Self {
        Self { onboarding_state }
    }

    pub fn from_ports(onboarding_state: Arc<dyn OnboardingStatePort>) -> Self {
        Self::new(onboarding_state)
    }

    pub async fn execute(&self) -> anyhow::Result<()> {
        let span = info_span!("usecase.logout.execute");

        async {
            self.onboarding_state
                .reset()
                .await
                .context("Failed to log out")?;
            info!("User logged out");
            Ok(())
        }
        .instrument(span)
        .await
    }
}
