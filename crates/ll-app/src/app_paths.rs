use std::path::PathBuf;

use ll_core::app_dirs::AppDirs;

/// Concrete file locations under the application data directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppPaths {
    pub db_path: PathBuf,
    pub config_path: PathBuf,
    pub logs_dir: PathBuf,
}

impl AppPaths {
    pub fn from_app_dirs(dirs: &AppDirs) -> Self {
        Self {
            db_path: dirs.app_data_root.join("little_lemon.db"),
            config_path: dirs.app_data_root.join("config.toml"),
            logs_dir: dirs.app_data_root.join("logs"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ll_core::AppConfig;

    #[test]
    fn app_paths_derives_concrete_locations_from_app_data_root() {
        let dirs = AppDirs {
            app_data_root: PathBuf::from("/tmp/little-lemon"),
        };

        let paths = AppPaths::from_app_dirs(&dirs);

        assert_eq!(paths.db_path, PathBuf::from("/tmp/little-lemon/little_lemon.db"));
        assert_eq!(paths.config_path, PathBuf::from("/tmp/little-lemon/config.toml"));
        assert_eq!(paths.logs_dir, PathBuf::from("/tmp/little-lemon/logs"));
    }

    #[test]
    fn default_config_points_at_the_same_database() {
        let root = PathBuf::from("/tmp/little-lemon");
        let paths = AppPaths::from_app_dirs(&AppDirs {
            app_data_root: root.clone(),
        });

        assert_eq!(AppConfig::with_system_defaults(root).database_path, paths.db_path);
    }
}
