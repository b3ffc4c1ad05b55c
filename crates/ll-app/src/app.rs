//! Application handle and use case accessor.

use crate::deps::AppDeps;
use crate::usecases::{
    CompleteOnboarding, EditProfile, GetOnboardingStatus, GetProfile, ListMenuByCategory,
    LoadMenu, Logout, RefreshMenu, ResetOnboarding, ResolveStartupRoute, SaveProfile,
    SearchMenu,
};

/// Wired application: owns the ports and hands out use cases.
pub struct App {
    deps: AppDeps,
}

impl App {
    pub fn new(deps: AppDeps) -> Self {
        Self { deps }
    }

    pub fn deps(&self) -> &AppDeps {
        &self.deps
    }

    pub fn usecases(&self) -> UseCases<'_> {
        UseCases::new(self)
    }
}

/// Builds use cases from the application's ports.
///
/// Use cases are cheap to construct (a few `Arc` clones), so a fresh one is
/// created per call.
///
/// ```rust,no_run
/// # use ll_app::App;
/// # async fn example(app: &App) {
/// let route = app.usecases().resolve_startup_route().execute().await;
/// # let _ = route;
/// # }
/// ```
pub struct UseCases<'a> {
    app: &'a App,
}

impl<'a> UseCases<'a> {
    pub fn new(app: &'a App) -> Self {
        Self { app }
    }

    pub fn load_menu(&self) -> LoadMenu {
        LoadMenu::from_ports(
            self.app.deps.menu_repo.clone(),
            self.app.deps.menu_source.clone(),
        )
    }

    pub fn refresh_menu(&self) -> RefreshMenu {
        RefreshMenu::from_ports(
            self.app.deps.menu_repo.clone(),
            self.app.deps.menu_source.clone(),
        )
    }

    pub fn list_menu_by_category(&self) -> ListMenuByCategory {
        ListMenuByCategory::from_ports(self.app.deps.menu_repo.clone())
    }

    pub fn search_menu(&self) -> SearchMenu {
        SearchMenu::from_ports(self.app.deps.menu_repo.clone())
    }

    pub fn get_profile(&self) -> GetProfile {
        GetProfile::from_ports(self.app.deps.profile_repo.clone())
    }

    pub fn save_profile(&self) -> SaveProfile {
        SaveProfile::from_ports(self.app.deps.profile_repo.clone())
    }

    pub fn edit_profile(&self) -> EditProfile {
        EditProfile::from_ports(self.app.deps.profile_repo.clone())
    }

    pub fn get_onboarding_status(&self) -> GetOnboardingStatus {
        GetOnboardingStatus::from_ports(self.app.deps.onboarding_state.clone())
    }

    pub fn complete_onboarding(&self) -> CompleteOnboarding {
        CompleteOnboarding::from_ports(self.app.deps.onboarding_state.clone())
    }

    pub fn reset_onboarding(&self) -> ResetOnboarding {
        ResetOnboarding::from_ports(self.app.deps.onboarding_state.clone())
    }

    pub fn logout(&self) -> Logout {
        Logout::from_ports(self.app.deps.onboarding_state.clone())
    }

    pub fn resolve_startup_route(&self) -> ResolveStartupRoute {
        ResolveStartupRoute::from_ports(self.app.deps.onboarding_state.clone())
    }
}
