use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::core::error::{SplitError, SplitResult};
use crate::core::operations::CollisionPolicy;

/// Settings for a split run.
///
/// Every field has a default, so a config file only needs the values it
/// wants to change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SplitConfig {
    /// Directory holding `images/` and `labels/`
    pub dataset_root: PathBuf,

    /// Fraction of images assigned to `train`
    pub train_ratio: f64,

    /// Recognized image extensions, matched case-insensitively
    pub extensions: Vec<String>,

    /// Fixed shuffle seed; unseeded when absent
    pub seed: Option<u64>,

    pub on_collision: CollisionPolicy,

    /// Plan and report without touching the filesystem
    pub dry_run: bool,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            dataset_root: PathBuf::from("dataset"),
            train_ratio: 0.8,
            extensions: vec!["jpg".to_string(), "jpeg".to_string(), "png".to_string()],
            seed: None,
            on_collision: CollisionPolicy::Fail,
            dry_run: false,
        }
    }
}

impl SplitConfig {
    /// `<platform config dir>/dataset-splitter/splitter.json`
    pub fn default_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "dataset-splitter")
            .map(|dirs| dirs.config_dir().join("splitter.json"))
    }

    /// Load config from disk, or return defaults if the file doesn't exist
    /// or is corrupted
    pub fn load(path: &Path) -> Self {
        info!("Loading config from: {:?}", path);

        match fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str::<SplitConfig>(&contents) {
                Ok(config) => {
                    info!("Successfully loaded config");
                    return config;
                }
                Err(e) => {
                    warn!("Failed to parse config file: {}. Using defaults.", e);
                }
            },
            Err(e) => {
                if e.kind() != std::io::ErrorKind::NotFound {
                    warn!("Failed to read config file: {}. Using defaults.", e);
                } else {
                    info!("No config file found. Using defaults.");
                }
            }
        }

        Self::default()
    }

    /// Save config to disk as pretty JSON
    pub fn save(&self, path: &Path) {
        if let Some(parent) = path.parent() {
            if let Err(e) = fs::create_dir_all(parent) {
                warn!("Failed to create config directory: {}", e);
                return;
            }
        }

        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(e) = fs::write(path, json) {
                    warn!("Failed to write config file: {}", e);
                } else {
                    info!("Config saved to: {:?}", path);
                }
            }
            Err(e) => {
                warn!("Failed to serialize config: {}", e);
            }
        }
    }

    /// Lowercase the extensions, strip leading dots and drop blanks.
    pub fn normalize(&mut self) {
        let mut extensions: Vec<String> = self
            .extensions
            .iter()
            .map(|ext| ext.trim().trim_start_matches('.').to_lowercase())
            .filter(|ext| !ext.is_empty())
            .collect();
        extensions.sort();
        extensions.dedup();
        self.extensions = extensions;
    }

    pub fn validate(&self) -> SplitResult<()> {
        if !(0.0..=1.0).contains(&self.train_ratio) {
            return Err(SplitError::InvalidRatio(self.train_ratio));
        }
        if self.extensions.iter().all(|ext| ext.trim_start_matches('.').is_empty()) {
            return Err(SplitError::NoExtensions);
        }
        Ok(())
    }
}
