// file: src/config.rs
// description: application configuration management with toml support
// reference: https://docs.rs/config

use crate::error::{Result, SearchError};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub api: ApiConfig,
    pub search: SearchConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    pub base_url: String,
    /// Bearer token for the CRM portal. Injected via
    /// COMPANY_SEARCH__API__TOKEN rather than committed to a config file.
    pub token: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchConfig {
    /// When true, a match missing a requested property is logged and
    /// dropped instead of aborting the whole run.
    pub skip_malformed: bool,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    pub path: PathBuf,
}

impl ApiConfig {
    pub fn search_url(&self) -> String {
        format!(
            "{}/crm/v3/objects/companies/search",
            self.base_url.trim_end_matches('/')
        )
    }
}

impl Config {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        dotenv().ok();

        let mut builder = config::Config::builder();

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path));
        } else {
            builder = builder.add_source(config::File::from(Path::new("config/default.toml")));
        }

        builder = builder.add_source(
            config::Environment::with_prefix("COMPANY_SEARCH")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .map_err(|e| SearchError::Config(e.to_string()))?;

        let config: Config = settings
            .try_deserialize()
            .map_err(|e| SearchError::Config(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    pub fn default_config() -> Self {
        Self {
            api: ApiConfig {
                base_url: "https://api.hubapi.com".to_string(),
                token: None,
            },
            search: SearchConfig {
                skip_malformed: false,
            },
            output: OutputConfig {
                path: PathBuf::from("companies.csv"),
            },
        }
    }

    /// Token is required for any command that talks to the endpoint.
    pub fn require_token(&self) -> Result<&str> {
        self.api
            .token
            .as_deref()
            .filter(|t| !t.is_empty())
            .ok_or_else(|| {
                SearchError::Config(
                    "api.token is not set (export COMPANY_SEARCH__API__TOKEN)".to_string(),
                )
            })
    }

    fn validate(&self) -> Result<()> {
        if self.api.base_url.is_empty() {
            return Err(SearchError::Config(
                "api.base_url must not be empty".to_string(),
            ));
        }

        if self.output.path.as_os_str().is_empty() {
            return Err(SearchError::Config(
                "output.path must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config() {
        let config = Config::default_config();
        assert_eq!(config.api.base_url, "https://api.hubapi.com");
        assert!(config.api.token.is_none());
        assert!(!config.search.skip_malformed);
        assert_eq!(config.output.path, PathBuf::from("companies.csv"));
    }

    #[test]
    fn test_search_url_strips_trailing_slash() {
        let api = ApiConfig {
            base_url: "https://api.hubapi.com/".to_string(),
            token: None,
        };
        assert_eq!(
            api.search_url(),
            "https://api.hubapi.com/crm/v3/objects/companies/search"
        );
    }

    #[test]
    fn test_require_token_missing() {
        let config = Config::default_config();
        assert!(config.require_token().is_err());
    }

    #[test]
    fn test_require_token_empty_string() {
        let mut config = Config::default_config();
        config.api.token = Some(String::new());
        assert!(config.require_token().is_err());
    }

    #[test]
    fn test_validate_rejects_empty_base_url() {
        let mut config = Config::default_config();
        config.api.base_url = String::new();
        assert!(config.validate().is_err());
    }
}
