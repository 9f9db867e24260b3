use pagesmith_compiler_html::DEFAULT_ANALYTICS_ENDPOINT;
use pagesmith_publish::{PublishConfig, DEFAULT_APP_URL};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

pub const DEFAULT_CONFIG_NAME: &str = "pagesmith.config.json";

/// Pagesmith configuration file format
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    /// Directory holding stored pages
    pub data_dir: String,

    /// Directory published HTML files are written to
    pub out_dir: String,

    pub app_url: String,

    pub analytics_endpoint: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: ".pagesmith".to_string(),
            out_dir: "dist".to_string(),
            app_url: DEFAULT_APP_URL.to_string(),
            analytics_endpoint: DEFAULT_ANALYTICS_ENDPOINT.to_string(),
        }
    }
}

impl Config {
    /// Load config from a directory; a missing file gives the defaults
    pub fn load(cwd: &Path) -> anyhow::Result<Self> {
        let config_path = cwd.join(DEFAULT_CONFIG_NAME);

        if config_path.exists() {
            debug!(path = %config_path.display(), "Loading config");
            let content = std::fs::read_to_string(&config_path)?;
            Ok(serde_json::from_str(&content)?)
        } else {
            Ok(Config::default())
        }
    }

    pub fn data_dir(&self, cwd: &Path) -> PathBuf {
        cwd.join(&self.data_dir)
    }

    pub fn out_dir(&self, cwd: &Path) -> PathBuf {
        cwd.join(&self.out_dir)
    }

    pub fn publish_config(&self) -> PublishConfig {
        PublishConfig {
            app_url: self.app_url.clone(),
            analytics_endpoint: self.analytics_endpoint.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let json = r#"{
            "dataDir": "pages",
            "appUrl": "https://pages.example.com"
        }"#;

        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.data_dir, "pages");
        assert_eq!(config.out_dir, "dist");
        assert_eq!(config.publish_config().public_url("a"), "https://pages.example.com/a");
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(dir.path()).unwrap();

        assert_eq!(config, Config::default());
        assert_eq!(config.analytics_endpoint, "/api/analytics/track");
        assert_eq!(config.data_dir(dir.path()), dir.path().join(".pagesmith"));
    }
}
