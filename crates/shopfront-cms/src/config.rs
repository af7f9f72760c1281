//! CMS connection configuration.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A required setting was not provided.
    #[error("Missing setting: {0}")]
    Missing(&'static str),

    /// A setting was provided but is not valid.
    #[error("Invalid {key}: {reason}")]
    Invalid { key: &'static str, reason: String },

    /// The configuration document could not be parsed.
    #[error("Failed to parse configuration: {0}")]
    Parse(String),
}

/// Connection settings for the content backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CmsConfig {
    /// Project identifier (e.g. "tt81m3xp").
    pub project_id: String,
    #[serde(default = "default_dataset")]
    pub dataset: String,
    /// Dated API version, `YYYY-MM-DD`.
    #[serde(default = "default_api_version")]
    pub api_version: String,
    /// Read through the CDN. Ignored when a token is set.
    #[serde(default = "default_use_cdn")]
    pub use_cdn: bool,
    /// Read token for private datasets.
    #[serde(default, skip_serializing)]
    pub token: Option<String>,
    /// Document type holding products.
    #[serde(default = "default_document_type")]
    pub document_type: String,
}

fn default_dataset() -> String {
    "production".to_string()
}

fn default_api_version() -> String {
    "2024-01-03".to_string()
}

fn default_use_cdn() -> bool {
    true
}

fn default_document_type() -> String {
    "product".to_string()
}

impl CmsConfig {
    /// Lookup keys, as Spin variable names.
    pub const PROJECT_ID_KEY: &'static str = "cms_project_id";
    pub const DATASET_KEY: &'static str = "cms_dataset";
    pub const API_VERSION_KEY: &'static str = "cms_api_version";
    pub const USE_CDN_KEY: &'static str = "cms_use_cdn";
    pub const TOKEN_KEY: &'static str = "cms_token";
    pub const DOCUMENT_TYPE_KEY: &'static str = "cms_document_type";

    /// Configuration for `project_id` with every other setting defaulted.
    pub fn new(project_id: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            dataset: default_dataset(),
            api_version: default_api_version(),
            use_cdn: default_use_cdn(),
            token: None,
            document_type: default_document_type(),
        }
    }

    pub fn with_dataset(mut self, dataset: impl Into<String>) -> Self {
        self.dataset = dataset.into();
        self
    }

    pub fn with_api_version(mut self, api_version: impl Into<String>) -> Self {
        self.api_version = api_version.into();
        self
    }

    pub fn with_cdn(mut self, use_cdn: bool) -> Self {
        self.use_cdn = use_cdn;
        self
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Parse and validate a TOML document.
    ///
    /// ```rust
    /// use shopfront_cms::CmsConfig;
    ///
    /// let config = CmsConfig::from_toml_str(r#"project_id = "tt81m3xp""#).unwrap();
    /// assert_eq!(config.dataset, "production");
    /// assert!(config.use_cdn);
    /// ```
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Build from a key lookup such as Spin variables.
    ///
    /// Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let project_id = get(Self::PROJECT_ID_KEY).ok_or(ConfigError::Missing(Self::PROJECT_ID_KEY))?;
        let mut config = Self::new(project_id.trim());

        if let Some(dataset) = get(Self::DATASET_KEY) {
            config.dataset = dataset.trim().to_string();
        }
        if let Some(api_version) = get(Self::API_VERSION_KEY) {
            config.api_version = api_version.trim().to_string();
        }
        if let Some(use_cdn) = get(Self::USE_CDN_KEY) {
            config.use_cdn = parse_bool(Self::USE_CDN_KEY, &use_cdn)?;
        }
        if let Some(document_type) = get(Self::DOCUMENT_TYPE_KEY) {
            config.document_type = document_type.trim().to_string();
        }
        config.token = get(Self::TOKEN_KEY);

        config.validate()?;
        Ok(config)
    }

    /// Check every setting.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.project_id.is_empty() {
            return Err(ConfigError::Missing("project_id"));
        }
        if !self
            .project_id
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
        {
            return Err(ConfigError::Invalid {
                key: "project_id",
                reason: format!("'{}' must be lowercase letters, digits and dashes", self.project_id),
            });
        }

        if !is_valid_dataset(&self.dataset) {
            return Err(ConfigError::Invalid {
                key: "dataset",
                reason: format!(
                    "'{}' must be 1-64 lowercase letters, digits, '_' or '-', starting with a letter or digit",
                    self.dataset
                ),
            });
        }

        if !is_valid_api_version(&self.api_version) {
            return Err(ConfigError::Invalid {
                key: "api_version",
                reason: format!("'{}' must be YYYY-MM-DD or 1", self.api_version),
            });
        }

        if self.document_type.trim().is_empty() {
            return Err(ConfigError::Missing("document_type"));
        }

        Ok(())
    }

    /// Whether requests go through the CDN host.
    pub fn uses_cdn(&self) -> bool {
        self.use_cdn && self.token.is_none()
    }

    /// Query endpoint for this project and dataset.
    pub fn query_url(&self) -> String {
        let host = if self.uses_cdn() { "apicdn" } else { "api" };
        format!(
            "https://{}.{}.sanity.io/v{}/data/query/{}",
            self.project_id, host, self.api_version, self.dataset
        )
    }
}

fn parse_bool(key: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        other => Err(ConfigError::Invalid {
            key,
            reason: format!("'{}' is not a boolean", other),
        }),
    }
}

fn is_valid_dataset(dataset: &str) -> bool {
    let starts_ok = dataset
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_lowercase() || c.is_ascii_digit());
    starts_ok
        && dataset.len() <= 64
        && dataset
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' || c == '-')
}

fn is_valid_api_version(version: &str) -> bool {
    if version == "1" {
        return true;
    }
    let parts: Vec<&str> = version.split('-').collect();
    matches!(parts.as_slice(), [y, m, d]
        if y.len() == 4 && m.len() == 2 && d.len() == 2
            && [y, m, d].iter().all(|p| p.chars().all(|c| c.is_ascii_digit())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    // === Defaults ===

    #[test]
    fn test_new_defaults() {
        let config = CmsConfig::new("tt81m3xp");
        assert_eq!(config.dataset, "production");
        assert_eq!(config.api_version, "2024-01-03");
        assert!(config.use_cdn);
        assert_eq!(config.document_type, "product");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_query_url_cdn() {
        let config = CmsConfig::new("tt81m3xp");
        assert_eq!(
            config.query_url(),
            "https://tt81m3xp.apicdn.sanity.io/v2024-01-03/data/query/production"
        );
    }

    #[test]
    fn test_token_bypasses_cdn() {
        let config = CmsConfig::new("tt81m3xp").with_token("secret");
        assert!(!config.uses_cdn());
        assert!(config.query_url().starts_with("https://tt81m3xp.api.sanity.io/"));
    }

    #[test]
    fn test_cdn_disabled() {
        let config = CmsConfig::new("abc").with_cdn(false).with_dataset("staging");
        assert_eq!(
            config.query_url(),
            "https://abc.api.sanity.io/v2024-01-03/data/query/staging"
        );
    }

    // === TOML ===

    #[test]
    fn test_from_toml_full() {
        let config = CmsConfig::from_toml_str(
            r#"
            project_id = "abc123"
            dataset = "staging"
            api_version = "2023-05-03"
            use_cdn = false
            document_type = "item"
            "#,
        )
        .unwrap();
        assert_eq!(config.dataset, "staging");
        assert_eq!(config.api_version, "2023-05-03");
        assert!(!config.use_cdn);
        assert_eq!(config.document_type, "item");
    }

    #[test]
    fn test_from_toml_missing_project() {
        assert!(matches!(
            CmsConfig::from_toml_str(r#"dataset = "production""#),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_token_not_serialized() {
        let config = CmsConfig::new("abc").with_token("secret");
        let json = serde_json::to_string(&config).unwrap();
        assert!(!json.contains("secret"));
    }

    // === Lookup ===

    #[test]
    fn test_from_lookup_minimal() {
        let config = CmsConfig::from_lookup(lookup(&[("cms_project_id", "tt81m3xp")])).unwrap();
        assert_eq!(config, CmsConfig::new("tt81m3xp"));
    }

    #[test]
    fn test_from_lookup_overrides() {
        let config = CmsConfig::from_lookup(lookup(&[
            ("cms_project_id", "tt81m3xp"),
            ("cms_dataset", "staging"),
            ("cms_use_cdn", "false"),
            ("cms_token", "sk-read"),
            ("cms_document_type", "item"),
        ]))
        .unwrap();
        assert_eq!(config.document_type, "item");
        assert_eq!(config.dataset, "staging");
        assert!(!config.use_cdn);
        assert_eq!(config.token.as_deref(), Some("sk-read"));
    }

    #[test]
    fn test_from_lookup_missing_project() {
        assert_eq!(
            CmsConfig::from_lookup(lookup(&[])),
            Err(ConfigError::Missing("cms_project_id"))
        );
    }

    #[test]
    fn test_from_lookup_empty_token_is_unset() {
        let config =
            CmsConfig::from_lookup(lookup(&[("cms_project_id", "abc"), ("cms_token", "")])).unwrap();
        assert!(config.token.is_none());
    }

    #[test]
    fn test_from_lookup_bad_bool() {
        assert!(matches!(
            CmsConfig::from_lookup(lookup(&[("cms_project_id", "abc"), ("cms_use_cdn", "maybe")])),
            Err(ConfigError::Invalid { key: "cms_use_cdn", .. })
        ));
    }

    // === Validation ===

    #[test]
    fn test_validate_project_id() {
        assert_eq!(
            CmsConfig::new("").validate(),
            Err(ConfigError::Missing("project_id"))
        );
        assert!(CmsConfig::new("Bad Id").validate().is_err());
    }

    #[test]
    fn test_validate_dataset() {
        assert!(CmsConfig::new("abc").with_dataset("prod_eu-1").validate().is_ok());
        assert!(CmsConfig::new("abc").with_dataset("_private").validate().is_err());
        assert!(CmsConfig::new("abc").with_dataset("Production").validate().is_err());
        assert!(CmsConfig::new("abc").with_dataset("a".repeat(65)).validate().is_err());
    }

    #[test]
    fn test_validate_api_version() {
        assert!(CmsConfig::new("abc").with_api_version("1").validate().is_ok());
        assert!(CmsConfig::new("abc").with_api_version("2021-10-21").validate().is_ok());
        assert!(CmsConfig::new("abc").with_api_version("v2021").validate().is_err());
        assert!(CmsConfig::new("abc").with_api_version("2021-1-21").validate().is_err());
    }
}
