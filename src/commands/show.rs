//! Show a single post

use anyhow::Result;

use crate::content::ContentLoader;
use crate::Caderno;

/// Print one post: the reconstructed document, or a JSON/HTML projection
pub fn run(app: &Caderno, slug: &str, html: bool, json: bool) -> Result<()> {
    let loader = ContentLoader::new(app);

    let Some(post) = loader.post_by_slug(slug)? else {
        anyhow::bail!("Empty slug");
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&post)?);
        return Ok(());
    }

    if html {
        println!("{}", post.content_html());
        return Ok(());
    }

    println!("---");
    print!("{}", serde_yaml::to_string(&post.frontmatter)?);
    println!("---");
    println!("{}", post.content);

    let posts = loader.all_posts()?;
    let next = post.next(&posts);
    let previous = post.previous(&posts);
    if next.is_some() || previous.is_some() {
        println!();
    }
    if let Some(next) = next {
        println!("Next: {}", next.path());
    }
    if let Some(previous) = previous {
        println!("Previous: {}", previous.path());
    }

    Ok(())
}
