//! Application configuration.
//!
//! Defaults are embedded as TOML; compile-time environment variables
//! (`VITE_API_URL`, `TENDER_FLAVOR`, `TENDER_AUTH`) override them.

use crate::shared::theme::Theme;
use serde::Deserialize;
use thiserror::Error;

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[api]
base_url = "http://localhost:8000"

[app]
flavor = "marketplace"

[auth]
mode = "server"

[catalog]
limit = 50
debounce_ms = 300
"#;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config: {0}")]
    Toml(#[from] toml::de::Error),
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub app: AppSection,
    pub auth: AuthConfig,
    pub catalog: CatalogConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiConfig {
    pub base_url: String,
    /// Процент на доставку для калькуляторов; без него сервер берёт 15
    #[serde(default)]
    pub delivery_percent: Option<f64>,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppSection {
    pub flavor: Flavor,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AuthConfig {
    pub mode: AuthMode,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CatalogConfig {
    pub limit: u32,
    pub debounce_ms: u32,
}

/// Which of the two storefront variants to run.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Flavor {
    /// Accounts, favorites, product passed through from the list
    #[default]
    Marketplace,
    /// No accounts, product page re-fetches the lot by id
    Showcase,
}

/// How the product page obtains its lot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductSource {
    PassThrough,
    Refetch,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum AuthMode {
    #[default]
    Server,
    /// Local demo user, no network
    Demo,
}

impl Flavor {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "marketplace" => Some(Flavor::Marketplace),
            "showcase" => Some(Flavor::Showcase),
            _ => None,
        }
    }

    pub fn has_accounts(&self) -> bool {
        matches!(self, Flavor::Marketplace)
    }

    pub fn product_source(&self) -> ProductSource {
        match self {
            Flavor::Marketplace => ProductSource::PassThrough,
            Flavor::Showcase => ProductSource::Refetch,
        }
    }

    pub fn theme(&self) -> Theme {
        match self {
            Flavor::Marketplace => Theme::Violet,
            Flavor::Showcase => Theme::Slate,
        }
    }
}

impl AuthMode {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "server" => Some(AuthMode::Server),
            "demo" => Some(AuthMode::Demo),
            _ => None,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                base_url: "http://localhost:8000".to_string(),
                delivery_percent: None,
            },
            app: AppSection {
                flavor: Flavor::Marketplace,
            },
            auth: AuthConfig {
                mode: AuthMode::Server,
            },
            catalog: CatalogConfig {
                limit: 50,
                debounce_ms: 300,
            },
        }
    }
}

/// Overrides coming from the build environment
#[derive(Debug, Clone, Default)]
pub struct EnvOverrides<'a> {
    pub api_url: Option<&'a str>,
    pub flavor: Option<&'a str>,
    pub auth: Option<&'a str>,
}

impl EnvOverrides<'static> {
    pub fn compiled() -> Self {
        Self {
            api_url: option_env!("VITE_API_URL"),
            flavor: option_env!("TENDER_FLAVOR"),
            auth: option_env!("TENDER_AUTH"),
        }
    }
}

fn present(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Load configuration from the embedded defaults and the build environment
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_with(DEFAULT_CONFIG, &EnvOverrides::compiled())
}

pub fn load_config_with(source: &str, env: &EnvOverrides<'_>) -> Result<AppConfig, ConfigError> {
    let mut config: AppConfig = toml::from_str(source)?;

    if let Some(url) = present(env.api_url) {
        log::info!("API base URL overridden: {}", url);
        config.api.base_url = url.to_string();
    }
    if let Some(raw) = present(env.flavor) {
        match Flavor::parse(raw) {
            Some(flavor) => config.app.flavor = flavor,
            None => log::warn!("unknown TENDER_FLAVOR '{}', keeping {:?}", raw, config.app.flavor),
        }
    }
    if let Some(raw) = present(env.auth) {
        match AuthMode::parse(raw) {
            Some(mode) => config.auth.mode = mode,
            None => log::warn!("unknown TENDER_AUTH '{}', keeping {:?}", raw, config.auth.mode),
        }
    }

    let trimmed = config.api.base_url.trim_end_matches('/').to_string();
    config.api.base_url = trimmed;
    Ok(config)
}
