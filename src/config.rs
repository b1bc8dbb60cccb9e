use crate::error::{PrepError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const APP_DIR: &str = "competitor-lens-prep";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Workbook inspected when no path is given
    pub workbook_path: PathBuf,
    /// Directory receiving `<stem>_converted.csv`
    pub export_dir: PathBuf,
    /// Screenshot output directory
    pub screenshot_dir: PathBuf,
    /// TrueType fonts tried in order before the built-in font
    pub font_paths: Vec<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_config()
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            tracing::debug!(path = %config_path.display(), "loaded config");
            Ok(config)
        } else {
            Ok(Self::default_config())
        }
    }

    pub fn save(&self) -> Result<PathBuf> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(config_path)
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| PrepError::Config("home directory not found".into()))?;
        Ok(home.join(".config").join(APP_DIR).join("config.json"))
    }

    fn default_config() -> Self {
        Self {
            workbook_path: PathBuf::from("sample-data/excel/feature_matrix_FINAL_v3.xlsx"),
            export_dir: PathBuf::from("sample-data/excel"),
            screenshot_dir: PathBuf::from("backend/uploads/screenshots"),
            font_paths: vec![
                PathBuf::from("/System/Library/Fonts/Arial.ttf"),
                PathBuf::from("/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf"),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_paths() {
        let config = Config::default();
        assert_eq!(config.export_dir, PathBuf::from("sample-data/excel"));
        assert_eq!(config.screenshot_dir, PathBuf::from("backend/uploads/screenshots"));
        assert_eq!(config.font_paths.len(), 2);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: Config = serde_json::from_str(r#"{"export_dir": "/tmp/out"}"#).unwrap();
        assert_eq!(config.export_dir, PathBuf::from("/tmp/out"));
        assert_eq!(config.screenshot_dir, Config::default().screenshot_dir);
    }
}
