use reqwest::Url;

use crate::config::ImageConfig;

/// Hosts recipe and logo images may be loaded from.
///
/// Closed by default: an image served from a host not on the list is not
/// loaded, even when the recipe API returns it.
#[derive(Debug, Clone)]
pub struct ImageAllowList {
    hosts: Vec<String>,
    allow_any: bool,
}

impl ImageAllowList {
    pub fn new(hosts: Vec<String>) -> Self {
        Self {
            hosts: hosts.into_iter().map(|h| h.to_ascii_lowercase()).collect(),
            allow_any: false,
        }
    }

    pub fn from_config(config: &ImageConfig) -> Self {
        let mut list = Self::new(config.hosts.clone());
        list.allow_any = config.allow_any;
        list
    }

    /// Accept any https host
    pub fn allow_any(mut self) -> Self {
        self.allow_any = true;
        self
    }

    pub fn permits(&self, image_url: &str) -> bool {
        let Ok(url) = Url::parse(image_url) else {
            return false;
        };
        if url.scheme() != "https" {
            return false;
        }
        match url.host_str() {
            Some(host) => self.allow_any || self.hosts.iter().any(|h| h == host),
            None => false,
        }
    }
}

impl Default for ImageAllowList {
    fn default() -> Self {
        Self::from_config(&ImageConfig::default())
    }
}
