use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::warn;

use crate::app_dirs::AppDirs;
use crate::provider::{DEFAULT_API_URL, DEFAULT_REGION, DEFAULT_TIMEOUT};
use crate::session::DEFAULT_NUMBER_OF_QUESTIONS;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub number_of_questions: usize,
    pub region: String,
    pub api_url: String,
    pub timeout_secs: u64,
    pub pacing_ms: u64,
    pub shuffle_questions: bool,
    pub results_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            number_of_questions: DEFAULT_NUMBER_OF_QUESTIONS,
            region: DEFAULT_REGION.to_string(),
            api_url: DEFAULT_API_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT.as_secs(),
            pacing_ms: 500,
            shuffle_questions: false,
            results_dir: None,
        }
    }
}

impl Config {
    /// Provider timeout; a zero value falls back to the default
    pub fn timeout(&self) -> Duration {
        match self.timeout_secs {
            0 => DEFAULT_TIMEOUT,
            secs => Duration::from_secs(secs),
        }
    }

    pub fn pacing(&self) -> Duration {
        Duration::from_millis(self.pacing_ms)
    }

    /// Configured results directory, else the platform default, else cwd
    pub fn results_dir(&self) -> PathBuf {
        self.results_dir
            .clone()
            .or_else(AppDirs::results_dir)
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

pub trait ConfigStore {
    fn load(&self) -> Config;
    fn save(&self, cfg: &Config) -> io::Result<()>;
}

#[derive(Debug, Clone)]
pub struct FileConfigStore {
    path: PathBuf,
}

impl FileConfigStore {
    pub fn new() -> Self {
        let path = AppDirs::config_path().unwrap_or_else(|| PathBuf::from("trivia_config.json"));
        Self { path }
    }

    pub fn with_path<P: AsRef<Path>>(p: P) -> Self {
        Self {
            path: p.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for FileConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigStore for FileConfigStore {
    fn load(&self) -> Config {
        let Ok(bytes) = fs::read(&self.path) else {
            return Config::default();
        };
        match serde_json::from_slice::<Config>(&bytes) {
            Ok(cfg) => cfg,
            Err(err) => {
                warn!(path = %self.path.display(), %err, "ignoring unreadable config");
                Config::default()
            }
        }
    }

    fn save(&self, cfg: &Config) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_vec_pretty(cfg).map_err(io::Error::other)?;
        fs::write(&self.path, data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn roundtrip_default_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        let store = FileConfigStore::with_path(&path);
        let cfg = Config::default();
        store.save(&cfg).unwrap();
        let loaded = store.load();
        assert_eq!(cfg, loaded);
    }

    #[test]
    fn save_and_load_custom_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let store = FileConfigStore::with_path(&path);
        let cfg = Config {
            number_of_questions: 20,
            region: "US".into(),
            api_url: "http://localhost:9999/api/questions".into(),
            timeout_secs: 5,
            pacing_ms: 0,
            shuffle_questions: true,
            results_dir: Some(dir.path().join("out")),
        };
        store.save(&cfg).unwrap();
        let loaded = store.load();
        assert_eq!(cfg, loaded);
    }

    #[test]
    fn missing_or_corrupt_file_yields_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        assert_eq!(FileConfigStore::with_path(&path).load(), Config::default());

        fs::write(&path, b"{ not json").unwrap();
        assert_eq!(FileConfigStore::with_path(&path).load(), Config::default());
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, br#"{"number_of_questions": 5}"#).unwrap();

        let cfg = FileConfigStore::with_path(&path).load();
        assert_eq!(cfg.number_of_questions, 5);
        assert_eq!(cfg.region, "GB");
        assert_eq!(cfg.timeout(), Duration::from_secs(30));
    }

    #[test]
    fn zero_timeout_falls_back_to_default() {
        let cfg = Config {
            timeout_secs: 0,
            ..Config::default()
        };
        assert_eq!(cfg.timeout(), DEFAULT_TIMEOUT);

        let cfg = Config {
            timeout_secs: 7,
            ..Config::default()
        };
        assert_eq!(cfg.timeout(), Duration::from_secs(7));
    }

    #[test]
    fn store_reports_its_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        assert_eq!(FileConfigStore::with_path(&path).path(), path.as_path());
    }

    #[test]
    fn explicit_results_dir_wins() {
        let cfg = Config {
            results_dir: Some(PathBuf::from("/tmp/quiz")),
            ..Config::default()
        };
        assert_eq!(cfg.results_dir(), PathBuf::from("/tmp/quiz"));
    }
}
