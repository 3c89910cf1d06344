//! caderno: the content engine of a Markdown personal blog
//!
//! Posts live as one front-matter + Markdown file each in a flat posts
//! directory. This crate loads them, formats their dates for display in
//! the site's locale, orders the post list by calendar date, and carries
//! the site's static build configuration.

pub mod commands;
pub mod config;
pub mod content;
pub mod helpers;
pub mod theme;

use anyhow::Result;
use std::path::Path;

/// The main caderno application
#[derive(Clone)]
pub struct Caderno {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: std::path::PathBuf,
    /// Posts directory
    pub posts_dir: std::path::PathBuf,
    /// Static assets directory
    pub assets_dir: std::path::PathBuf,
}

impl Caderno {
    /// Create a new caderno instance from a directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        let posts_dir = base_dir.join(&config.posts_dir);
        let assets_dir = base_dir.join(&config.assets_dir);

        Ok(Self {
            config,
            base_dir,
            posts_dir,
            assets_dir,
        })
    }

    /// A content loader over this site
    pub fn loader(&self) -> content::ContentLoader<'_> {
        content::ContentLoader::new(self)
    }

    /// Scaffold the site skeleton in the base directory
    pub fn init(&self) -> Result<()> {
        commands::init::run(self)
    }

    /// Create a new post
    pub fn new_post(&self, title: &str, category: Option<&str>) -> Result<()> {
        commands::new::run(self, title, category)
    }
}
