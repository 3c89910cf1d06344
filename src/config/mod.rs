//! Configuration module

mod site;

pub use site::AnalyticsConfig;
pub use site::FontConfig;
pub use site::ImagesConfig;
pub use site::ManifestConfig;
pub use site::SiteConfig;
pub use site::SocialConfig;
