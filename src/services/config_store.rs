// Configuration Storage Service
// Handles config file read/write and version backup

use crate::error::{HumanizerError, Result};
use crate::models::Intensity;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub const CONFIG_VERSION: &str = "1.0.0";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_version")]
    pub version: String,
    #[serde(default)]
    pub detection: DetectionConfig,
    #[serde(default)]
    pub humanize: HumanizeConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            detection: DetectionConfig::default(),
            humanize: HumanizeConfig::default(),
        }
    }
}

/// Per-dimension weights of the combined score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DimensionWeights {
    #[serde(default = "default_lexical_weight")]
    pub lexical: f64,
    #[serde(default = "default_syntactic_weight")]
    pub syntactic: f64,
    #[serde(default = "default_structural_weight")]
    pub structural: f64,
    #[serde(default = "default_semantic_weight")]
    pub semantic: f64,
}

impl Default for DimensionWeights {
    fn default() -> Self {
        Self {
            lexical: default_lexical_weight(),
            syntactic: default_syntactic_weight(),
            structural: default_structural_weight(),
            semantic: default_semantic_weight(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectionConfig {
    #[serde(default)]
    pub weights: DimensionWeights,
    /// Combined score at or above which text is judged AI-generated.
    #[serde(default = "default_ai_threshold")]
    pub ai_threshold: f64,
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            weights: DimensionWeights::default(),
            ai_threshold: default_ai_threshold(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HumanizeConfig {
    #[serde(default)]
    pub default_intensity: Intensity,
    /// Fixed seed for reproducible rewrites; entropy when absent.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for HumanizeConfig {
    fn default() -> Self {
        Self {
            default_intensity: Intensity::Medium,
            seed: None,
        }
    }
}

fn default_version() -> String { CONFIG_VERSION.to_string() }
fn default_lexical_weight() -> f64 { 0.30 }
fn default_syntactic_weight() -> f64 { 0.25 }
fn default_structural_weight() -> f64 { 0.25 }
fn default_semantic_weight() -> f64 { 0.20 }
fn default_ai_threshold() -> f64 { 60.0 }

pub struct ConfigStore {
    config_dir: PathBuf,
    config_file: PathBuf,
}

impl ConfigStore {
    pub fn new(config_dir: PathBuf) -> Self {
        let config_file = config_dir.join("config.json");
        Self { config_dir, config_file }
    }

    /// Get default config directory
    pub fn default_config_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("zh-humanizer"))
    }

    pub fn config_file(&self) -> &Path {
        &self.config_file
    }

    /// Ensure config directory exists
    pub fn ensure_dir(&self) -> Result<()> {
        fs::create_dir_all(&self.config_dir)
            .map_err(|e| HumanizerError::Config(format!("Failed to create config dir: {}", e)))
    }

    /// Load configuration from file; a missing file yields defaults.
    pub fn load(&self) -> Result<AppConfig> {
        if !self.config_file.exists() {
            debug!("[config] {} not found, using defaults", self.config_file.display());
            return Ok(AppConfig::default());
        }

        let content = fs::read_to_string(&self.config_file)?;
        serde_json::from_str(&content)
            .map_err(|e| HumanizerError::Config(format!("Failed to parse config: {}", e)))
    }

    /// Save configuration to file
    pub fn save(&self, config: &AppConfig) -> Result<()> {
        self.ensure_dir()?;

        // Create backup if file exists
        if self.config_file.exists() {
            self.create_backup()?;
        }

        let content = serde_json::to_string_pretty(config)?;
        fs::write(&self.config_file, content)?;
        info!("[config] saved {}", self.config_file.display());
        Ok(())
    }

    /// Create a backup of current config
    fn create_backup(&self) -> Result<()> {
        let backup_dir = self.config_dir.join("backups");
        fs::create_dir_all(&backup_dir)?;

        let timestamp = chrono::Utc::now().format("%Y%m%d_%H%M%S%3f");
        let backup_file = backup_dir.join(format!("config_{}.json", timestamp));
        fs::copy(&self.config_file, &backup_file)?;

        // Keep only last 10 backups
        self.cleanup_old_backups(&backup_dir, 10)
    }

    /// Remove old backups, keeping only the most recent N
    fn cleanup_old_backups(&self, backup_dir: &Path, keep: usize) -> Result<()> {
        let mut entries: Vec<_> = fs::read_dir(backup_dir)?
            .filter_map(|e| e.ok())
            .filter(|e| e.path().extension().map_or(false, |ext| ext == "json"))
            .collect();

        if entries.len() <= keep {
            return Ok(());
        }

        // Timestamped names sort chronologically
        entries.sort_by_key(|e| e.file_name());

        let remove_count = entries.len() - keep;
        for entry in entries.iter().take(remove_count) {
            let _ = fs::remove_file(entry.path());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.detection.weights.lexical, 0.30);
        assert_eq!(config.detection.weights.semantic, 0.20);
        assert_eq!(config.detection.ai_threshold, 60.0);
        assert_eq!(config.humanize.default_intensity, Intensity::Medium);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let parsed: AppConfig =
            serde_json::from_str(r#"{"detection": {"ai_threshold": 70.0}}"#).unwrap();
        assert_eq!(parsed.version, CONFIG_VERSION);
        assert_eq!(parsed.detection.ai_threshold, 70.0);
        assert_eq!(parsed.detection.weights, DimensionWeights::default());
        assert_eq!(parsed.humanize.seed, None);
    }

    #[test]
    fn test_invalid_intensity_in_config_is_rejected() {
        let parsed = serde_json::from_str::<AppConfig>(r#"{"humanize": {"default_intensity": "extreme"}}"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_load_missing_file_returns_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let store = ConfigStore::new(dir.path().join("nested"));
        let config = store.load().unwrap();
        assert_eq!(config.detection, DetectionConfig::default());
    }

    #[test]
    fn test_save_and_reload_with_backup() {
        let dir = tempfile::tempdir().unwrap();
        let store = ConfigStore::new(dir.path().to_path_buf());

        let mut config = AppConfig::default();
        store.save(&config).unwrap();
        config.humanize.seed = Some(7);
        config.humanize.default_intensity = Intensity::Heavy;
        store.save(&config).unwrap();

        let reloaded = store.load().unwrap();
        assert_eq!(reloaded.humanize.seed, Some(7));
        assert_eq!(reloaded.humanize.default_intensity, Intensity::Heavy);

        let backups = fs::read_dir(dir.path().join("backups")).unwrap().count();
        assert_eq!(backups, 1);
    }

    #[test]
    fn test_malformed_file_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = ConfigStore::new(dir.path().to_path_buf());
        fs::write(store.config_file(), "{not json").unwrap();
        assert!(matches!(store.load(), Err(HumanizerError::Config(_))));
    }
}
