use pagesmith_compiler_html::DEFAULT_ANALYTICS_ENDPOINT;
use serde::{Deserialize, Serialize};

pub const DEFAULT_APP_URL: &str = "http://localhost:3000";

/// Settings the publisher bakes into compiled pages
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PublishConfig {
    /// Base URL published slugs are served under
    pub app_url: String,
    pub analytics_endpoint: String,
}

impl Default for PublishConfig {
    fn default() -> Self {
        Self {
            app_url: DEFAULT_APP_URL.to_string(),
            analytics_endpoint: DEFAULT_ANALYTICS_ENDPOINT.to_string(),
        }
    }
}

impl PublishConfig {
    pub fn public_url(&self, slug: &str) -> String {
        format!("{}/{}", self.app_url.trim_end_matches('/'), slug)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_url_trims_trailing_slash() {
        let config = PublishConfig {
            app_url: "https://pages.example.com/".to_string(),
            ..Default::default()
        };
        assert_eq!(config.public_url("acme"), "https://pages.example.com/acme");
        assert_eq!(
            PublishConfig::default().public_url("acme"),
            "http://localhost:3000/acme"
        );
    }
}
