//! Site configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub author: String,
    pub description: String,
    pub language: String,
    #[serde(default)]
    pub social: SocialConfig,

    // URL
    pub url: String,
    pub path_prefix: String,

    // Directory
    pub posts_dir: String,
    pub assets_dir: String,

    // Date display format (Moment-style tokens)
    pub date_format: String,

    // Web app manifest
    #[serde(default)]
    pub manifest: ManifestConfig,

    // Image transforms
    #[serde(default)]
    pub images: ImagesConfig,

    // Web fonts
    #[serde(default)]
    pub fonts: Vec<FontConfig>,

    // Analytics
    #[serde(default)]
    pub analytics: AnalyticsConfig,

    // Store any additional fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Caderno".to_string(),
            author: String::new(),
            description: String::new(),
            language: "pt-BR".to_string(),
            social: SocialConfig::default(),

            url: "https://example.com".to_string(),
            path_prefix: "/".to_string(),

            posts_dir: "posts".to_string(),
            assets_dir: "assets".to_string(),

            date_format: "DD MMM YYYY".to_string(),

            manifest: ManifestConfig::default(),
            images: ImagesConfig::default(),
            fonts: vec![FontConfig::default()],
            analytics: AnalyticsConfig::default(),
            extra: HashMap::new(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }
}

/// Social account handles
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialConfig {
    pub twitter: String,
}

/// Web app manifest configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ManifestConfig {
    pub name: String,
    pub short_name: String,
    pub start_url: String,
    pub background_color: String,
    pub theme_color: String,
    pub display: String,
    pub icon: String,
}

impl Default for ManifestConfig {
    fn default() -> Self {
        Self {
            name: String::new(),
            short_name: String::new(),
            start_url: "/".to_string(),
            background_color: "#101723".to_string(),
            theme_color: "#101723".to_string(),
            display: "standalone".to_string(),
            icon: "static/favicon.png".to_string(),
        }
    }
}

/// Image transform configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ImagesConfig {
    pub max_width: u32,
}

impl Default for ImagesConfig {
    fn default() -> Self {
        Self { max_width: 590 }
    }
}

/// A web font family with the variants to load
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FontConfig {
    pub family: String,
    pub variants: Vec<String>,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            family: "Nunito Sans".to_string(),
            variants: vec![
                "400".to_string(),
                "600".to_string(),
                "700".to_string(),
                "800".to_string(),
            ],
        }
    }
}

/// Analytics configuration
///
/// The tracking ID itself never lives in the config file; only the name of
/// the environment variable that carries it does.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyticsConfig {
    pub tracking_id_env: String,
    pub head: bool,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            tracking_id_env: "GOOGLE_ANALYTICS_ID".to_string(),
            head: false,
        }
    }
}

impl AnalyticsConfig {
    /// Resolve the tracking ID from the environment, if set and non-empty.
    pub fn tracking_id(&self) -> Option<String> {
        std::env::var(&self.tracking_id_env)
            .ok()
            .filter(|id| !id.is_empty())
    }
}
