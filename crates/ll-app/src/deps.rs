//! # Application Dependencies / 应用依赖
//!
//! Dependency grouping for [`crate::App`] construction. Not a builder: no
//! defaults, no build steps, every port is required.
//!
//! 仅用于参数打包，所有依赖都是必需的。

use std::sync::Arc;

use ll_core::ports::{
    MenuRepositoryPort, MenuSourcePort, OnboardingStatePort, UserProfileRepositoryPort,
};

pub struct AppDeps {
    // Menu / 菜单
    pub menu_repo: Arc<dyn MenuRepositoryPort>,
    pub menu_source: Arc<dyn MenuSourcePort>,

    // Profile / 用户资料
    pub profile_repo: Arc<dyn UserProfileRepositoryPort>,

    // Onboarding / 入门引导
    pub onboarding_state: Arc<dyn OnboardingStatePort>,
}
