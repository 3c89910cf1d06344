//! Content module - posts and their front-matter

mod frontmatter;
pub mod loader;
mod markdown;
mod post;

pub use frontmatter::FrontMatter;
pub use loader::ContentLoader;
pub use markdown::render_html;
pub use post::Post;
