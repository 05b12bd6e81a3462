use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tflow_core::TokenizationMethod;
use tflow_security::MaskingProfile;

/// Simple configuration for tflow
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub masking: MaskingProfile,

    #[serde(default)]
    pub report: ReportConfig,

    #[serde(default)]
    pub ledger: LedgerConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Counting methods printed after an optimization
    #[serde(default = "default_methods")]
    pub methods: Vec<TokenizationMethod>,

    #[serde(default = "default_true")]
    pub show_detections: bool,

    /// Also print a cl100k BPE estimate
    #[serde(default = "default_true")]
    pub bpe_estimate: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            methods: default_methods(),
            show_detections: true,
            bpe_estimate: true,
        }
    }
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            path: None,
        }
    }
}

fn default_methods() -> Vec<TokenizationMethod> {
    TokenizationMethod::ALL.to_vec()
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Load config from default location or create default if not found
    pub fn load() -> anyhow::Result<Self> {
        let path = Self::config_path();

        if path.exists() {
            Self::load_from(&path)
        } else {
            // Create default config file
            let config = Config::default();
            config.save_to(&path)?;
            Ok(config)
        }
    }

    /// Load config from an explicit file. Unknown method names are an error.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Get config file path
    pub fn config_path() -> PathBuf {
        if let Some(dirs) = directories::ProjectDirs::from("com", "tflow", "tflow") {
            dirs.config_dir().join("config.toml")
        } else {
            PathBuf::from("~/.tflow/config.toml")
        }
    }
}
