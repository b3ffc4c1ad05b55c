//! First-run flow expressed purely with domain types: the status read feeds
//! the gate, the form is validated, and its values seed the profile.

use ll_core::onboarding::FieldError;
use ll_core::{
    GateEvent, GateState, NotificationPreferences, OnboardingForm, OnboardingGate,
    OnboardingStatus, SoftRead, StartupRoute, UserProfile,
};

#[test]
fn fresh_install_goes_through_onboarding_then_menu() {
    let mut gate = OnboardingGate::new();
    assert_eq!(gate.state(), GateState::Unknown);

    gate.resolve(&SoftRead::Loaded(false));
    assert_eq!(gate.route(), Some(StartupRoute::Onboarding));

    let rejected = OnboardingForm::new("Ana", "not-an-email").validate();
    assert_eq!(rejected.unwrap_err().email, Some(FieldError::InvalidEmail));
    assert_eq!(gate.state(), GateState::NeedsOnboarding);

    let valid = OnboardingForm::new("Ana", "ana@example.com")
        .validate()
        .expect("form should validate");
    let status = OnboardingStatus::completed(valid.first_name(), valid.email());
    let profile = UserProfile::from_onboarding(valid.first_name(), valid.email());

    assert!(status.completed);
    assert_eq!(profile.notifications, NotificationPreferences::all_enabled());

    gate.apply(GateEvent::OnboardingCompleted);
    assert_eq!(gate.route(), Some(StartupRoute::Menu));
}

#[test]
fn returning_user_skips_onboarding() {
    let mut gate = OnboardingGate::new();
    gate.resolve(&SoftRead::Loaded(true));
    assert_eq!(gate.route(), Some(StartupRoute::Menu));
}
