//! List posts

use anyhow::Result;

use crate::content::ContentLoader;
use crate::Caderno;

/// List all posts, newest first
pub fn run(app: &Caderno, json: bool) -> Result<()> {
    let loader = ContentLoader::new(app);
    let posts = loader.all_posts()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&posts)?);
        return Ok(());
    }

    println!("Posts ({}):", posts.len());
    for post in &posts {
        println!(
            "  {} - {} [{}]",
            post.display_date().unwrap_or("(no date)"),
            post.title().unwrap_or(&post.slug),
            post.slug
        );
    }

    Ok(())
}
