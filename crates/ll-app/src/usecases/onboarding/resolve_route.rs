use std::sync::Arc;

use tracing::{info, info_span, Instrument};

use ll_core::onboarding::{OnboardingGate, StartupRoute};
use ll_core::ports::OnboardingStatePort;

use super::GetOnboardingStatus;

/// Decides the first screen of a session.
pub struct ResolveStartupRoute {
    get_status: GetOnboardingStatus,
}

impl ResolveStartupRoute {
    pub fn new(onboarding_state: Arc<dyn OnboardingStatePort>) -> Self {
        Self {
            get_status: GetOnboardingStatus::new(onboarding_state),
        }
    }

    pub fn from_ports(onboarding_state: Arc<dyn OnboardingStatePort>) -> Self {
        Self::new(onboarding_state)
    }

    /// Runs the startup status check through a fresh gate.
    ///
    /// The returned gate is already out of `Unknown`, so the caller can keep
    /// feeding it (e.g. `OnboardingCompleted` after the form is submitted).
    pub async fn resolve_gate(&self) -> OnboardingGate {
        let span = info_span!("usecase.resolve_startup_route.execute");

        async {
            let status = self.get_status.execute().await;
            let mut gate = OnboardingGate::new();
            let state = gate.resolve(&status);
            info!(?state, degraded = status.is_degraded(), "Startup gate resolved");
            gate
        }
        .instrument(span)
        .await
    }

    pub async fn execute(&self) -> StartupRoute {
        self.resolve_gate()
            .await
            .route()
            .unwrap_or(StartupRoute::Menu)
    }
}
