//! Configuration for the Foodhub API client
//!
//! Supports environment-based configuration, TOML files, and sensible defaults.

use crate::error::{ApiError, ApiResult};
use crate::resource::Resource;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;
use std::time::Duration;

/// Default production backend URL
const DEFAULT_API_URL: &str = "https://api.foodhub.app/api";

/// Default request timeout in seconds
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Environment types
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development backend
    Development,
    /// Staging environment
    Staging,
    /// Production environment
    #[default]
    Production,
}

impl Environment {
    /// Parse an environment name, falling back to production
    #[must_use]
    pub fn parse(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "development" | "dev" | "local" => Self::Development,
            "staging" | "stage" => Self::Staging,
            _ => Self::Production,
        }
    }

    /// Read `FOODHUB_ENV`
    #[must_use]
    pub fn from_env() -> Self {
        Self::parse(&env::var("FOODHUB_ENV").unwrap_or_default())
    }
}

/// Path segment of every resource, appended to the base URL
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResourcePaths {
    /// Food items
    pub food: String,
    /// Restaurants
    pub restaurant: String,
    /// Bookmarks
    pub bookmark: String,
    /// Carts
    pub cart: String,
}

impl Default for ResourcePaths {
    fn default() -> Self {
        Self {
            food: Resource::Food.default_path().to_string(),
            restaurant: Resource::Restaurant.default_path().to_string(),
            bookmark: Resource::Bookmark.default_path().to_string(),
            cart: Resource::Cart.default_path().to_string(),
        }
    }
}

impl ResourcePaths {
    /// Path configured for `resource`
    #[must_use]
    pub fn path_for(&self, resource: Resource) -> &str {
        match resource {
            Resource::Food => &self.food,
            Resource::Restaurant => &self.restaurant,
            Resource::Bookmark => &self.bookmark,
            Resource::Cart => &self.cart,
        }
    }
}

/// Client configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Backend base URL, without trailing slash
    pub base_url: String,
    /// Per-resource path segments
    pub paths: ResourcePaths,
    /// Request timeout
    #[serde(rename = "timeout_secs", with = "duration_secs")]
    pub timeout: Duration,
    /// Current environment
    pub environment: Environment,
}

mod duration_secs {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        duration.as_secs().serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        let secs = u64::deserialize(deserializer)?;
        Ok(Duration::from_secs(secs))
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            paths: ResourcePaths::default(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            environment: Environment::default(),
        }
    }
}

impl ClientConfig {
    /// Create configuration from environment variables
    ///
    /// Reads the following environment variables:
    /// - `FOODHUB_API_URL`: Backend base URL
    /// - `FOODHUB_ENV`: Environment (development/staging/production)
    /// - `FOODHUB_TIMEOUT_SECS`: Request timeout in seconds
    pub fn from_env() -> ApiResult<Self> {
        let environment = Environment::from_env();
        let defaults = Self::for_environment(environment);

        let base_url = env::var("FOODHUB_API_URL").unwrap_or(defaults.base_url);

        let timeout = match env::var("FOODHUB_TIMEOUT_SECS") {
            Ok(raw) => raw
                .parse()
                .map(Duration::from_secs)
                .map_err(|_| ApiError::config(format!("FOODHUB_TIMEOUT_SECS is not a number: {raw}")))?,
            Err(_) => defaults.timeout,
        };

        Ok(Self {
            base_url: normalize_base_url(&base_url),
            paths: ResourcePaths::default(),
            timeout,
            environment,
        })
    }

    /// Parse configuration from TOML text; missing keys keep their defaults
    pub fn from_toml_str(content: &str) -> ApiResult<Self> {
        parse_toml(content).map_err(|e| ApiError::config(format!("invalid TOML: {e}")))
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> ApiResult<Self> {
        let path = path.as_ref();
        let display = path.display().to_string();

        let content = std::fs::read_to_string(path).map_err(|e| ApiError::config_file(&display, e))?;
        parse_toml(&content).map_err(|e| ApiError::config_file(&display, e))
    }

    /// Load from `path` when given, otherwise from the environment
    pub fn load(path: Option<&Path>) -> ApiResult<Self> {
        match path {
            Some(p) => Self::from_file(p),
            None => Self::from_env(),
        }
    }

    /// Defaults for an environment
    #[must_use]
    pub fn for_environment(environment: Environment) -> Self {
        match environment {
            Environment::Development => Self::development(),
            Environment::Staging => Self::staging(),
            Environment::Production => Self::production(),
        }
    }

    /// Create development configuration (local backend)
    #[must_use]
    pub fn development() -> Self {
        Self {
            base_url: "http://localhost:3000/api".to_string(),
            timeout: Duration::from_secs(10),
            environment: Environment::Development,
            ..Self::default()
        }
    }

    /// Create staging configuration
    #[must_use]
    pub fn staging() -> Self {
        Self {
            base_url: "https://staging.api.foodhub.app/api".to_string(),
            environment: Environment::Staging,
            ..Self::default()
        }
    }

    /// Create production configuration
    #[must_use]
    pub fn production() -> Self {
        Self::default()
    }

    /// Builder-style method to set base URL
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = normalize_base_url(&url.into());
        self
    }

    /// Builder-style method to set one resource path
    #[must_use]
    pub fn with_path(mut self, resource: Resource, path: impl Into<String>) -> Self {
        let path = path.into();
        match resource {
            Resource::Food => self.paths.food = path,
            Resource::Restaurant => self.paths.restaurant = path,
            Resource::Bookmark => self.paths.bookmark = path,
            Resource::Cart => self.paths.cart = path,
        }
        self
    }

    /// Builder-style method to set timeout
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> ApiResult<()> {
        if self.base_url.is_empty() {
            return Err(ApiError::config("base_url cannot be empty"));
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ApiError::config("base_url must start with http:// or https://"));
        }

        if self.timeout.is_zero() {
            return Err(ApiError::config("timeout cannot be zero"));
        }

        for resource in Resource::ALL {
            if !self.paths.path_for(resource).starts_with('/') {
                return Err(ApiError::config(format!(
                    "path for {} must start with '/'",
                    resource.label()
                )));
            }
        }

        Ok(())
    }
}

/// Keys a TOML file may set; absent keys come from the environment preset
#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    base_url: Option<String>,
    timeout_secs: Option<u64>,
    environment: Option<Environment>,
    paths: Option<ResourcePaths>,
}

fn parse_toml(content: &str) -> Result<ClientConfig, toml::de::Error> {
    let file: FileConfig = toml::from_str(content)?;
    let mut config = ClientConfig::for_environment(file.environment.unwrap_or_default());

    if let Some(url) = file.base_url {
        config.base_url = normalize_base_url(&url);
    }
    if let Some(secs) = file.timeout_secs {
        config.timeout = Duration::from_secs(secs);
    }
    if let Some(paths) = file.paths {
        config.paths = paths;
    }
    Ok(config)
}

fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}
