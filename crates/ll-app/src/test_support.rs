//! Port doubles shared by the use case unit tests.

use std::sync::Mutex;

use async_trait::async_trait;
use mockall::mock;

use ll_core::menu::{MenuCategory, MenuItem, MenuItemId, Price};
use ll_core::onboarding::OnboardingStatus;
use ll_core::ports::{
    MenuRepositoryPort, MenuSourcePort, OnboardingStatePort, StorageError,
    UserProfileRepositoryPort,
};
use ll_core::profile::UserProfile;

mock! {
    pub MenuRepo {}

    #[async_trait]
    impl MenuRepositoryPort for MenuRepo {
        async fn replace_all(&self, items: &[MenuItem]) -> Result<(), StorageError>;
        async fn list_all(&self) -> Result<Vec<MenuItem>, StorageError>;
        async fn find_by_category(&self, category: MenuCategory)
            -> Result<Vec<MenuItem>, StorageError>;
        async fn search_by_name(&self, query: &str) -> Result<Vec<MenuItem>, StorageError>;
    }
}

mock! {
    pub MenuSource {}

    #[async_trait]
    impl MenuSourcePort for MenuSource {
        async fn fetch_menu(&self) -> anyhow::Result<Vec<MenuItem>>;
    }
}

mock! {
    pub ProfileRepo {}

    #[async_trait]
    impl UserProfileRepositoryPort for ProfileRepo {
        async fn get(&self) -> Result<Option<UserProfile>, StorageError>;
        async fn save(&self, profile: &UserProfile) -> Result<(), StorageError>;
    }
}

mock! {
    pub Onboarding {}

    #[async_trait]
    impl OnboardingStatePort for Onboarding {
        async fn get_status(&self) -> Result<Option<OnboardingStatus>, StorageError>;
        async fn complete(
            &self,
            status: &OnboardingStatus,
            profile: &UserProfile,
        ) -> Result<(), StorageError>;
        async fn reset(&self) -> Result<(), StorageError>;
        async fn is_completed(&self) -> Result<bool, StorageError>;
    }
}

/// In-memory onboarding + profile state, written together like the real store.
#[derive(Default)]
pub struct InMemoryOnboarding {
    pub status: Mutex<Option<OnboardingStatus>>,
    pub profile: Mutex<Option<UserProfile>>,
}

#[async_trait]
impl OnboardingStatePort for InMemoryOnboarding {
    async fn get_status(&self) -> Result<Option<OnboardingStatus>, StorageError> {
        Ok(self.status.lock().unwrap().clone())
    }

    async fn complete(
        &self,
        status: &OnboardingStatus,
        profile: &UserProfile,
    ) -> Result<(), StorageError> {
        *self.profile.lock().unwrap() = Some(profile.clone());
        *self.status.lock().unwrap() = Some(status.clone());
        Ok(())
    }

    async fn reset(&self) -> Result<(), StorageError> {
        *self.status.lock().unwrap() = None;
        Ok(())
    }
}

pub fn menu_item(id: &str, name: &str, category: MenuCategory) -> MenuItem {
    MenuItem {
        id: MenuItemId::from(id),
        name: name.to_string(),
        price: Price::new(7.5).unwrap(),
        category,
        description: None,
        image: None,
    }
}
