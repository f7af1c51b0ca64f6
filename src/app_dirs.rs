use directories::ProjectDirs;
use std::path::PathBuf;

/// Centralized application directory resolution
pub struct AppDirs;

impl AppDirs {
    pub fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "trivia").map(|pd| pd.config_dir().join("config.json"))
    }

    pub fn results_dir() -> Option<PathBuf> {
        if let Ok(home) = std::env::var("HOME") {
            Some(
                PathBuf::from(home)
                    .join(".local")
                    .join("share")
                    .join("trivia")
                    .join("results"),
            )
        } else {
            ProjectDirs::from("", "", "trivia")
                .map(|proj_dirs| proj_dirs.data_local_dir().join("results"))
        }
    }
}
