//! Runtime configuration

use std::path::{Path, PathBuf};

/// File name of the record store inside the data directory
pub const RECORDS_FILE: &str = "dados.json";

/// Application configuration, threaded into every request handler
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Directory holding the record file and the catalog files
    pub data_dir: PathBuf,

    /// Accept submissions with zero selected skills (off by default)
    pub allow_empty_skills: bool,
}

impl AppConfig {
    pub fn new(data_dir: impl Into<PathBuf>, allow_empty_skills: bool) -> Self {
        AppConfig {
            data_dir: data_dir.into(),
            allow_empty_skills,
        }
    }

    pub fn records_path(&self) -> PathBuf {
        self.data_dir.join(RECORDS_FILE)
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
