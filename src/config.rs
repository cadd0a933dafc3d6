use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::time::Duration;

use crate::scroll::DEFAULT_SCROLL_THRESHOLD;

/// Main search configuration structure
#[derive(Debug, Deserialize, Clone)]
pub struct SearchConfig {
    /// Edamam application identifier (sent as `app_id`)
    pub app_id: Option<String>,
    /// Edamam application key (sent as `app_key`)
    pub app_key: Option<String>,
    /// Base URL of the recipe API, without the `/search` path
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in seconds. No timeout when unset.
    pub timeout: Option<u64>,
    /// Distance from the document bottom that triggers the next page
    #[serde(default = "default_scroll_threshold")]
    pub scroll_threshold: f64,
    /// Drop results of fetches issued before the latest submit
    #[serde(default)]
    pub fence_stale_results: bool,
    /// Image hosts the renderer may load from
    #[serde(default)]
    pub images: ImageConfig,
}

/// Configuration for the image-host allow-list
#[derive(Debug, Deserialize, Clone)]
pub struct ImageConfig {
    /// Hosts images may be loaded from over https
    #[serde(default = "default_image_hosts")]
    pub hosts: Vec<String>,
    /// Accept images from any https host
    #[serde(default)]
    pub allow_any: bool,
}

impl Default for ImageConfig {
    fn default() -> Self {
        Self {
            hosts: default_image_hosts(),
            allow_any: false,
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            app_id: None,
            app_key: None,
            base_url: default_base_url(),
            timeout: None,
            scroll_threshold: default_scroll_threshold(),
            fence_stale_results: false,
            images: ImageConfig::default(),
        }
    }
}

// Default value functions
fn default_base_url() -> String {
    "https://api.edamam.com".to_string()
}

fn default_scroll_threshold() -> f64 {
    DEFAULT_SCROLL_THRESHOLD
}

fn default_image_hosts() -> Vec<String> {
    vec![
        "edamam-product-images.s3.amazonaws.com".to_string(),
        "w7.pngwing.com".to_string(),
    ]
}

impl SearchConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with EDAMAM_ prefix
    /// 2. recipe-search.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: EDAMAM_APP_ID, EDAMAM_IMAGES__ALLOW_ANY
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout.map(Duration::from_secs)
    }
}

/// Load configuration from file and environment variables
///
/// See [`SearchConfig::load`] for the lookup order.
pub fn load_config() -> Result<SearchConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name("recipe-search").required(false))
        // Single underscore after the prefix, double underscore for nesting.
        // Values stay strings so credentials keep leading zeros and never read as numbers.
        .add_source(
            Environment::with_prefix("EDAMAM")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    settings.try_deserialize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn test_default_values() {
        assert_eq!(default_base_url(), "https://api.edamam.com");
        assert_eq!(default_scroll_threshold(), 500.0);
        assert_eq!(default_image_hosts().len(), 2);
    }

    #[test]
    fn test_search_config_default() {
        let config = SearchConfig::default();
        assert!(config.app_id.is_none());
        assert!(config.app_key.is_none());
        assert!(config.timeout().is_none());
        assert!(!config.fence_stale_results);
        assert!(!config.images.allow_any);
    }

    #[test]
    fn test_deserialize_partial_toml() {
        let config: SearchConfig = Config::builder()
            .add_source(config::File::from_str(
                r#"
                app_id = "abc"
                app_key = "def"
                timeout = 15

                [images]
                allow_any = true
                "#,
                config::FileFormat::Toml,
            ))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.app_id.as_deref(), Some("abc"));
        assert_eq!(config.app_key.as_deref(), Some("def"));
        assert_eq!(config.timeout(), Some(Duration::from_secs(15)));
        assert_eq!(config.base_url, "https://api.edamam.com");
        assert_eq!(config.scroll_threshold, 500.0);
        assert!(config.images.allow_any);
        assert_eq!(config.images.hosts, default_image_hosts());
    }

    #[test]
    fn test_load_config_from_environment() {
        // Single test owns every EDAMAM_ variable; parallel tests would race on process env
        let keys_to_clear: Vec<String> = env::vars()
            .filter(|(k, _)| k.starts_with("EDAMAM_"))
            .map(|(k, _)| k)
            .collect();
        for key in keys_to_clear {
            env::remove_var(&key);
        }

        // Missing credentials are not a load error; requests are built without them
        let config = load_config().unwrap();
        assert!(config.app_id.is_none());
        assert!(config.app_key.is_none());

        let vars = [
            ("EDAMAM_APP_ID", "0123e456"),
            ("EDAMAM_APP_KEY", "00412345"),
            ("EDAMAM_TIMEOUT", "15"),
            ("EDAMAM_SCROLL_THRESHOLD", "250"),
            ("EDAMAM_FENCE_STALE_RESULTS", "true"),
            ("EDAMAM_IMAGES__ALLOW_ANY", "true"),
        ];
        for (key, value) in vars {
            env::set_var(key, value);
        }

        let result = load_config();
        for (key, _) in vars {
            env::remove_var(key);
        }
        let config = result.unwrap();

        assert_eq!(config.app_id.as_deref(), Some("0123e456"));
        assert_eq!(config.app_key.as_deref(), Some("00412345"));
        assert_eq!(config.timeout(), Some(Duration::from_secs(15)));
        assert_eq!(config.scroll_threshold, 250.0);
        assert!(config.fence_stale_results);
        assert!(config.images.allow_any);
        assert_eq!(config.images.hosts, default_image_hosts());
        assert_eq!(config.base_url, "https://api.edamam.com");
    }
}
