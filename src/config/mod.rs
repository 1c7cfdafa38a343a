use crate::core::options::{OvernightPolicy, ReconcileOptions};
use crate::errors::{AppError, AppResult, ValidationError};
use crate::models::shift::{ShiftConfig, ShiftKind};
use crate::utils::time::parse_offset;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub shift: ShiftKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shift_start: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shift_end: Option<String>,
    pub utc_offset: String,
    pub overnight: String,
    pub newest_first: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            shift: ShiftKind::None,
            shift_start: None,
            shift_end: None,
            utc_offset: "+00:00".to_string(),
            overnight: OvernightPolicy::Auto.to_string(),
            newest_first: false,
        }
    }
}

impl Config {
    /// Return the standard configuration directory (`~/.rtimesheet`)
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".rtimesheet")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rtimesheet.conf")
    }

    /// Load configuration from `path` (or the standard location), falling
    /// back to defaults when the file does not exist.
    pub fn load(path: Option<&Path>) -> AppResult<Self> {
        let path = path.map(Path::to_path_buf).unwrap_or_else(Self::config_file);

        if !path.exists() {
            return Ok(Self::default());
        }

        let content =
            fs::read_to_string(&path).map_err(|e| AppError::ConfigLoad(e.to_string()))?;
        serde_yaml::from_str(&content).map_err(|e| AppError::ConfigLoad(e.to_string()))
    }

    pub fn save(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)?;
        }
        let yaml = serde_yaml::to_string(self).map_err(|e| AppError::ConfigSave(e.to_string()))?;
        fs::write(path, yaml).map_err(|e| AppError::ConfigSave(e.to_string()))
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))
    }

    pub fn shift_config(&self) -> Result<ShiftConfig, ValidationError> {
        ShiftConfig::from_parts(
            self.shift,
            self.shift_start.as_deref(),
            self.shift_end.as_deref(),
        )
    }

    pub fn reconcile_options(&self) -> Result<ReconcileOptions, ValidationError> {
        Ok(ReconcileOptions::new(
            parse_offset(&self.utc_offset)?,
            self.overnight.parse()?,
        ))
    }
}
