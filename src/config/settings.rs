//! Settings structures for bookfinder configuration

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use url::Url;

/// Main settings structure, loaded from settings.yml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub general: GeneralSettings,
    pub server: ServerSettings,
    pub outgoing: OutgoingSettings,
    pub openlibrary: OpenLibrarySettings,
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Self::from_yaml(&content)
    }

    /// Parse settings from a YAML document
    pub fn from_yaml(content: &str) -> Result<Self> {
        let settings: Settings = serde_yaml::from_str(content)?;
        Ok(settings)
    }

    /// Merge with environment variables (BOOKFINDER_* prefix)
    pub fn merge_env(&mut self) {
        if let Ok(val) = std::env::var("BOOKFINDER_DEBUG") {
            self.general.debug = val.parse().unwrap_or(false);
        }
        if let Ok(val) = std::env::var("BOOKFINDER_PORT") {
            if let Ok(port) = val.parse() {
                self.server.port = port;
            }
        }
        if let Ok(val) = std::env::var("BOOKFINDER_BIND_ADDRESS") {
            self.server.bind_address = val;
        }
        if let Ok(val) = std::env::var("BOOKFINDER_SEARCH_URL") {
            self.openlibrary.search_url = val;
        }
    }

    /// Reject settings the server cannot run with
    pub fn validate(&self) -> Result<()> {
        if self.general.instance_name.trim().is_empty() {
            bail!("general.instance_name must not be empty");
        }

        let endpoints = [
            ("openlibrary.search_url", &self.openlibrary.search_url),
            ("openlibrary.cover_url", &self.openlibrary.cover_url),
            ("openlibrary.library_url", &self.openlibrary.library_url),
            ("openlibrary.placeholder_cover", &self.openlibrary.placeholder_cover),
        ];
        for (name, value) in endpoints {
            Url::parse(value).with_context(|| format!("{} is not a valid URL: {}", name, value))?;
        }

        if let Some(timeout) = self.outgoing.request_timeout {
            if timeout.is_nan() || timeout <= 0.0 {
                bail!("outgoing.request_timeout must be positive");
            }
        }

        Ok(())
    }
}

/// General settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralSettings {
    /// Enable debug mode
    pub debug: bool,
    /// Instance name displayed in UI
    pub instance_name: String,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            debug: false,
            instance_name: "Book Search".to_string(),
        }
    }
}

/// Server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    /// Server port
    pub port: u16,
    /// Bind address
    pub bind_address: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            port: 8888,
            bind_address: "127.0.0.1".to_string(),
        }
    }
}

/// Outgoing request settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutgoingSettings {
    /// Request timeout in seconds (none = transport default)
    pub request_timeout: Option<f64>,
    /// Pool max size
    pub pool_maxsize: usize,
    /// Proxy settings
    pub proxies: ProxySettings,
}

impl Default for OutgoingSettings {
    fn default() -> Self {
        Self {
            request_timeout: None,
            pool_maxsize: 20,
            proxies: ProxySettings::default(),
        }
    }
}

/// Proxy settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProxySettings {
    pub http: Option<String>,
    pub https: Option<String>,
    pub all: Option<String>,
}

/// Open Library endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OpenLibrarySettings {
    /// Search API endpoint
    pub search_url: String,
    /// Host serving cover images
    pub cover_url: String,
    /// Host serving work/edition detail pages
    pub library_url: String,
    /// Image shown when a record has no cover
    pub placeholder_cover: String,
}

impl Default for OpenLibrarySettings {
    fn default() -> Self {
        Self {
            search_url: "https://openlibrary.org/search.json".to_string(),
            cover_url: "https://covers.openlibrary.org".to_string(),
            library_url: "https://openlibrary.org".to_string(),
            placeholder_cover: "https://via.placeholder.com/150x200?text=No+Cover".to_string(),
        }
    }
}
