use crate::adapters::document::DARK_MODE_CLASS;
use crate::utils::error::{Result, SiteError};
use crate::utils::validation::{
    validate_endpoint_path, validate_non_empty_string, validate_path, validate_positive_number,
    validate_url, Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub api: ApiConfig,
    pub theme: ThemeConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_seconds: u64,
    pub endpoints: EndpointConfig,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000".to_string(),
            timeout_seconds: 10,
            endpoints: EndpointConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EndpointConfig {
    pub services: String,
    pub team: String,
    pub contact: String,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            services: "/api/services".to_string(),
            team: "/api/team".to_string(),
            contact: "/api/contact".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub storage_path: String,
    pub marker_class: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_path: "./.site-content/storage.json".to_string(),
            marker_class: DARK_MODE_CLASS.to_string(),
        }
    }
}

impl SiteConfig {
    /// Loads the configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// Parses TOML after `${VAR}` substitution; missing sections take their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| SiteError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unknown variables are left as-is.
    fn substitute_env_vars(content: &str) -> String {
        static ENV_VAR: OnceLock<Regex> = OnceLock::new();
        let re = ENV_VAR.get_or_init(|| {
            Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is valid")
        });

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .into_owned()
    }
}

impl Validate for SiteConfig {
    fn validate(&self) -> Result<()> {
        validate_url("api.base_url", &self.api.base_url)?;
        validate_positive_number("api.timeout_seconds", self.api.timeout_seconds, 1)?;
        validate_endpoint_path("api.endpoints.services", &self.api.endpoints.services)?;
        validate_endpoint_path("api.endpoints.team", &self.api.endpoints.team)?;
        validate_endpoint_path("api.endpoints.contact", &self.api.endpoints.contact)?;
        validate_path("theme.storage_path", &self.theme.storage_path)?;
        validate_non_empty_string("theme.marker_class", &self.theme.marker_class)?;
        Ok(())
    }
}
