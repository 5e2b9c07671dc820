use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub record: RecordDefaults,
    pub enrichment: EnrichmentConfig,
}

/// Fixed operational strings stamped onto every assembled record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordDefaults {
    pub access_level: String,
    pub status: String,
    pub data_owner: String,
    pub version: String,
    pub change_note: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnrichmentConfig {
    pub mode: EnrichmentMode,
}

/// Which enrichment strategy the caller wires in. `Live` is a placeholder
/// for an out-of-tree client; without one it resolves to the fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnrichmentMode {
    Fallback,
    Live,
}

#[derive(Debug, Clone)]
pub struct ConfigPaths {
    pub config_path: PathBuf,
    pub data_dir: PathBuf,
}

impl Config {
    pub fn default_config() -> Self {
        Self {
            record: RecordDefaults {
                access_level: "公开".to_string(),
                status: "生效中".to_string(),
                data_owner: "数据运营组".to_string(),
                version: "v1.0".to_string(),
                change_note: "初始创建".to_string(),
            },
            enrichment: EnrichmentConfig {
                mode: EnrichmentMode::Fallback,
            },
        }
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: Config = toml::from_str(contents).context("parse config TOML")?;
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        let output = toml::to_string_pretty(self).context("render config TOML")?;
        Ok(output)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("read config at {}", path.display()))?;
        Self::from_toml_str(&contents)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("create config dir {}", parent.display()))?;
        }
        let contents = self.to_toml_string()?;
        fs::write(path, contents).with_context(|| format!("write config at {}", path.display()))?;
        Ok(())
    }
}

impl ConfigPaths {
    pub fn resolve() -> Result<Self> {
        let project_dirs = ProjectDirs::from("io", "taimeter", "taimeter")
            .ok_or_else(|| anyhow::anyhow!("unable to determine project directories"))?;
        let config_dir = project_dirs.config_dir();
        let data_dir = project_dirs.data_dir();
        Ok(Self {
            config_path: config_dir.join("config.toml"),
            data_dir: data_dir.to_path_buf(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_round_trips_through_toml() {
        let config = Config::default_config();
        let rendered = config.to_toml_string().unwrap();
        let parsed = Config::from_toml_str(&rendered).unwrap();
        assert_eq!(parsed.record.data_owner, config.record.data_owner);
        assert_eq!(parsed.enrichment.mode, EnrichmentMode::Fallback);
    }

    #[test]
    fn enrichment_mode_parses_lowercase() {
        let toml = r#"
            [record]
            access_level = "公开"
            status = "生效中"
            data_owner = "数据运营组"
            version = "v1.0"
            change_note = "初始创建"

            [enrichment]
            mode = "live"
        "#;
        let config = Config::from_toml_str(toml).unwrap();
        assert_eq!(config.enrichment.mode, EnrichmentMode::Live);
    }
}
