use std::path::PathBuf;

use ll_core::{
    app_dirs::AppDirs,
    ports::{AppDirsError, AppDirsPort},
};

const APP_DIR_NAME: &str = "little-lemon";

/// Resolves the application data directory under the platform's local data
/// directory (`~/.local/share` on Linux, `%LOCALAPPDATA%` on Windows, ...).
pub struct DirsAppDirsAdapter {
    base_data_local_dir_override: Option<PathBuf>,
}

impl Default for DirsAppDirsAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl DirsAppDirsAdapter {
    pub fn new() -> Self {
        Self {
            base_data_local_dir_override: None,
        }
    }

    /// Adapter rooted at `base` instead of the system directory.
    pub fn with_base_data_local_dir(base: PathBuf) -> Self {
        Self {
            base_data_local_dir_override: Some(base),
        }
    }

    pub fn base_data_local_dir(&self) -> Option<PathBuf> {
        if let Some(base) = &self.base_data_local_dir_override {
            return Some(base.clone());
        }
        dirs::data_local_dir()
    }
}

impl AppDirsPort for DirsAppDirsAdapter {
    fn get_app_dirs(&self) -> Result<AppDirs, AppDirsError> {
        let base_data = self
            .base_data_local_dir()
            .ok_or(AppDirsError::DataLocalDirUnavailable)?;

        Ok(AppDirs {
            app_data_root: base_data.join(APP_DIR_NAME),
        })
    }
}
