pub mod local;

use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, validate_url, Validate};
use serde::{Deserialize, Serialize};

/// Fixed site origin used to absolutize product image and link URLs.
pub const DEFAULT_SITE_URL: &str = "https://www.rudraxcell.com";

/// Everything one pipeline run needs to know. The defaults mirror the
/// site's layout; callers that operate on another tree build the struct
/// themselves.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    pub data_path: String,
    pub html_path: String,
    pub site_base_url: String,
}

impl PipelineConfig {
    /// Defaults for the distributor schema run.
    pub fn distributors() -> Self {
        Self {
            data_path: "data/distributors.json".to_string(),
            html_path: "distributors.html".to_string(),
            site_base_url: DEFAULT_SITE_URL.to_string(),
        }
    }

    /// Defaults for the product schema run.
    pub fn products() -> Self {
        Self {
            data_path: "data/products.json".to_string(),
            html_path: "products.html".to_string(),
            site_base_url: DEFAULT_SITE_URL.to_string(),
        }
    }
}

impl ConfigProvider for PipelineConfig {
    fn data_path(&self) -> &str {
        &self.data_path
    }

    fn html_path(&self) -> &str {
        &self.html_path
    }

    fn site_base_url(&self) -> &str {
        &self.site_base_url
    }
}

impl Validate for PipelineConfig {
    fn validate(&self) -> Result<()> {
        validate_path("data_path", &self.data_path)?;
        validate_path("html_path", &self.html_path)?;
        validate_url("site_base_url", &self.site_base_url)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_configs_are_valid() {
        assert!(PipelineConfig::distributors().validate().is_ok());
        assert!(PipelineConfig::products().validate().is_ok());
    }

    #[test]
    fn test_default_paths() {
        let config = PipelineConfig::distributors();
        assert_eq!(config.data_path(), "data/distributors.json");
        assert_eq!(config.html_path(), "distributors.html");

        let config = PipelineConfig::products();
        assert_eq!(config.data_path(), "data/products.json");
        assert_eq!(config.html_path(), "products.html");
    }

    #[test]
    fn test_rejects_bad_values() {
        let mut config = PipelineConfig::products();
        config.html_path = String::new();
        assert!(config.validate().is_err());

        let mut config = PipelineConfig::products();
        config.site_base_url = "ftp://example.com".to_string();
        assert!(config.validate().is_err());
    }
}
