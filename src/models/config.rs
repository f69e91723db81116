//! Application configuration structures.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{AppError, Result};

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// GraphQL backend settings
    #[serde(default)]
    pub backend: BackendConfig,

    /// Site-wide presentation settings
    #[serde(default)]
    pub site: SiteConfig,

    /// External form handler settings
    #[serde(default)]
    pub forms: FormsConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration or return default if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Config load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }

    /// Defaults overlaid with the process environment.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.apply_env(|key| std::env::var(key).ok());
        config
    }

    /// Overlay values from an environment lookup.
    ///
    /// Empty values are treated as unset.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(endpoint) = get(env::API_URL) {
            self.backend.endpoint = Some(endpoint);
        }
        if let Some(secs) = get(env::REVALIDATE_SECS) {
            match secs.trim().parse() {
                Ok(secs) => self.backend.revalidate_secs = secs,
                Err(_) => log::warn!("Ignoring non-numeric {}={}", env::REVALIDATE_SECS, secs),
            }
        }
        if let Some(date) = get(env::LAUNCH_DATE) {
            self.site.launch_date = Some(date);
        }
        if let Some(flag) = get(env::BYPASS_COMING_SOON) {
            self.site.bypass_coming_soon = flag.trim() == "1";
        }
        if let Some(base) = get(env::BASE_URL) {
            self.site.base_url = Some(base);
        }
        if let Some(endpoint) = get(env::FORM_ENDPOINT) {
            self.forms.endpoint = Some(endpoint);
        }
    }

    /// Validate configuration values for basic sanity.
    ///
    /// Only presence and shape are checked; nothing is contacted.
    pub fn validate(&self) -> Result<()> {
        if let Some(endpoint) = &self.backend.endpoint {
            Url::parse(endpoint).map_err(|e| {
                AppError::validation(format!("backend.endpoint is not a URL: {e}"))
            })?;
        }
        if self.backend.revalidate_secs == 0 {
            return Err(AppError::validation("backend.revalidate_secs must be > 0"));
        }
        if self.backend.user_agent.trim().is_empty() {
            return Err(AppError::validation("backend.user_agent is empty"));
        }
        if let Some(base) = &self.site.base_url {
            Url::parse(base)
                .map_err(|e| AppError::validation(format!("site.base_url is not a URL: {e}")))?;
        }
        if let Some(endpoint) = &self.forms.endpoint {
            Url::parse(endpoint).map_err(|e| {
                AppError::validation(format!("forms.endpoint is not a URL: {e}"))
            })?;
        }
        Ok(())
    }
}

/// Environment variable names read by [`Config::apply_env`].
pub mod env {
    pub const API_URL: &str = "WORDPRESS_API_URL";
    pub const REVALIDATE_SECS: &str = "CMS_REVALIDATE_SECS";
    pub const LAUNCH_DATE: &str = "SITE_LAUNCH_DATE";
    pub const BYPASS_COMING_SOON: &str = "SITE_BYPASS_COMING_SOON";
    pub const BASE_URL: &str = "SITE_BASE_URL";
    pub const FORM_ENDPOINT: &str = "FORM_ENDPOINT";
}

/// GraphQL backend settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    /// GraphQL endpoint URL
    #[serde(default)]
    pub endpoint: Option<String>,

    /// Seconds a response may be reused by the hosting platform
    #[serde(default = "defaults::revalidate")]
    pub revalidate_secs: u64,

    /// User-Agent header for HTTP requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Optional request timeout; the platform timeout applies when unset
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            revalidate_secs: defaults::revalidate(),
            user_agent: defaults::user_agent(),
            timeout_secs: None,
        }
    }
}

/// Site-wide presentation settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Launch date used when the CMS has none
    #[serde(default)]
    pub launch_date: Option<String>,

    /// Skip the coming-soon page regardless of launch date
    #[serde(default)]
    pub bypass_coming_soon: bool,

    /// Public base URL of the site
    #[serde(default)]
    pub base_url: Option<String>,
}

/// External form handler settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FormsConfig {
    /// Endpoint receiving multipart form posts
    #[serde(default)]
    pub endpoint: Option<String>,
}

mod defaults {
    pub fn revalidate() -> u64 {
        60
    }
    pub fn user_agent() -> String {
        concat!("cms-presenter/", env!("CARGO_PKG_VERSION")).into()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::io::Write;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn validate_default_config_ok() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn default_has_no_endpoint() {
        let config = Config::default();
        assert!(config.backend.endpoint.is_none());
        assert_eq!(config.backend.revalidate_secs, 60);
    }

    #[test]
    fn validate_rejects_bad_endpoint() {
        let mut config = Config::default();
        config.backend.endpoint = Some("not a url".to_string());
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_reports_bad_urls_as_validation_errors() {
        let mut config = Config::default();
        config.site.base_url = Some("example.org".to_string());
        let err = config.validate().unwrap_err();
        assert!(matches!(err, AppError::Validation(ref msg) if msg.contains("site.base_url")));

        let mut config = Config::default();
        config.forms.endpoint = Some("::".to_string());
        let err = config.validate().unwrap_err();
        assert!(matches!(err, AppError::Validation(ref msg) if msg.contains("forms.endpoint")));
    }

    #[test]
    fn validate_rejects_zero_revalidate() {
        let mut config = Config::default();
        config.backend.revalidate_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn apply_env_overlays_values() {
        let mut config = Config::default();
        config.apply_env(lookup(&[
            (env::API_URL, "https://cms.example.org/graphql"),
            (env::LAUNCH_DATE, "2030-01-01"),
            (env::BYPASS_COMING_SOON, "1"),
            (env::FORM_ENDPOINT, "https://forms.example.org/f/abc"),
            (env::REVALIDATE_SECS, "30"),
        ]));

        assert_eq!(
            config.backend.endpoint.as_deref(),
            Some("https://cms.example.org/graphql")
        );
        assert_eq!(config.site.launch_date.as_deref(), Some("2030-01-01"));
        assert!(config.site.bypass_coming_soon);
        assert_eq!(config.backend.revalidate_secs, 30);
        assert!(config.forms.endpoint.is_some());
    }

    #[test]
    fn apply_env_ignores_empty_and_non_numeric() {
        let mut config = Config::default();
        config.apply_env(lookup(&[
            (env::API_URL, "  "),
            (env::REVALIDATE_SECS, "soon"),
            (env::BYPASS_COMING_SOON, "yes"),
        ]));

        assert!(config.backend.endpoint.is_none());
        assert_eq!(config.backend.revalidate_secs, 60);
        assert!(!config.site.bypass_coming_soon);
    }

    #[test]
    fn load_reads_toml_with_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[backend]\nendpoint = \"https://cms.example.org/graphql\"\n\n[site]\nbypass_coming_soon = true"
        )
        .unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(
            config.backend.endpoint.as_deref(),
            Some("https://cms.example.org/graphql")
        );
        assert_eq!(config.backend.revalidate_secs, 60);
        assert!(config.site.bypass_coming_soon);
        assert!(config.forms.endpoint.is_none());
    }

    #[test]
    fn load_or_default_falls_back_on_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_or_default(dir.path().join("missing.toml"));
        assert!(config.backend.endpoint.is_none());
    }
}
