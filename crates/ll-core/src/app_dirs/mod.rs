use std::path::PathBuf;

/// Base directories of the application, as resolved by the platform layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppDirs {
    pub app_data_root: PathBuf,
}
