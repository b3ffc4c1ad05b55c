//! Onboarding gate state machine.
//!
//! Decides, once per application start, whether the user lands on the
//! onboarding form or on the menu.
//!
//! 启动闸门：每次启动只决定一次进入引导页还是菜单页。

use serde::{Deserialize, Serialize};

use crate::read::SoftRead;

/// Gate state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GateState {
    /// Storage has not been queried yet.
    Unknown,
    /// Onboarding was never completed (or was reset).
    NeedsOnboarding,
    /// Main experience is available.
    Ready,
}

/// Events that drive the gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GateEvent {
    /// The onboarding status was read from storage.
    StatusResolved { completed: bool },
    /// The onboarding status could not be read.
    StatusUnavailable,
    /// The onboarding form was submitted and persisted.
    OnboardingCompleted,
}

/// Screen the application should show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StartupRoute {
    Onboarding,
    Menu,
}

/// Pure transition function.
///
/// `Unknown` is left exactly once, on the first status event. A storage
/// failure during that check resolves to `Ready`. `NeedsOnboarding` only moves
/// on `OnboardingCompleted`; `Ready` is terminal. Any other pairing leaves the
/// state unchanged.
pub fn transition(state: GateState, event: GateEvent) -> GateState {
    match (state, event) {
        (GateState::Unknown, GateEvent::StatusResolved { completed: true }) => GateState::Ready,
        (GateState::Unknown, GateEvent::StatusResolved { completed: false }) => {
            GateState::NeedsOnboarding
        }
        (GateState::Unknown, GateEvent::StatusUnavailable) => GateState::Ready,
        (GateState::NeedsOnboarding, GateEvent::OnboardingCompleted) => GateState::Ready,
        (state, _) => state,
    }
}

/// Holder of the gate state for one application session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OnboardingGate {
    state: GateState,
}

impl Default for OnboardingGate {
    fn default() -> Self {
        Self::new()
    }
}

impl OnboardingGate {
    pub fn new() -> Self {
        Self {
            state: GateState::Unknown,
        }
    }

    pub fn state(&self) -> GateState {
        self.state
    }

    pub fn apply(&mut self, event: GateEvent) -> GateState {
        let next = transition(self.state, event);
        #[cfg(feature = "tracing")]
        if next != self.state {
            tracing::debug!(from = ?self.state, to = ?next, ?event, "onboarding gate transition");
        }
        self.state = next;
        next
    }

    /// Feeds the result of the startup status read into the gate.
    ///
    /// A degraded read is a storage failure, not a "not completed" answer, so
    /// it fails open.
    pub fn resolve(&mut self, status: &SoftRead<bool>) -> GateState {
        let event = match status {
            SoftRead::Loaded(completed) => GateEvent::StatusResolved {
                completed: *completed,
            },
            SoftRead::Degraded { .. } => GateEvent::StatusUnavailable,
        };
        self.apply(event)
    }

    /// Route for the current state; `None` until the status has been read.
    pub fn route(&self) -> Option<StartupRoute> {
        match self.state {
            GateState::Unknown => None,
            GateState::NeedsOnboarding => Some(StartupRoute::Onboarding),
            GateState::Ready => Some(StartupRoute::Menu),
        }
    }
}
