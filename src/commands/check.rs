//! Check the posts directory for problems

use anyhow::Result;
use walkdir::WalkDir;

use crate::content::{ContentLoader, Post};
use crate::Caderno;

/// Entries in the posts directory that would break post listing
fn stray_entries(app: &Caderno) -> Result<Vec<String>> {
    let mut stray = Vec::new();

    for entry in WalkDir::new(&app.posts_dir).min_depth(1) {
        let entry = entry?;
        let path = entry.path();
        if entry.file_type().is_dir() {
            stray.push(format!("{:?} is a directory", path));
        } else if path.extension().and_then(|e| e.to_str()) != Some("md") {
            stray.push(format!("{:?} is not a Markdown file", path));
        }
    }

    Ok(stray)
}

/// Advisory problems in posts that load fine
fn post_warnings(app: &Caderno, posts: &[Post]) -> Vec<String> {
    let mut warnings = Vec::new();

    for post in posts {
        if post.date.is_empty() {
            warnings.push(format!("{:?} has no date", post.slug));
        } else if post.parsed_date().is_none() {
            warnings.push(format!(
                "{:?} has unparseable date {:?}",
                post.slug, post.date
            ));
        }

        if let Some(banner) = post.frontmatter.get("banner").and_then(|v| v.as_str()) {
            if !app.posts_dir.join(banner).exists() {
                warnings.push(format!("{:?} banner {:?} not found", post.slug, banner));
            }
        }
    }

    warnings
}

/// Walk the posts directory and report anything broken or suspicious
pub fn run(app: &Caderno) -> Result<()> {
    let stray = stray_entries(app)?;
    if !stray.is_empty() {
        for problem in &stray {
            println!("  {}", problem);
        }
        anyhow::bail!("{} entries would break post listing", stray.len());
    }

    let loader = ContentLoader::new(app);
    let posts = loader.all_posts()?;

    let warnings = post_warnings(app, &posts);
    for warning in &warnings {
        println!("  warning: {}", warning);
    }
    println!("Checked {} posts, {} warnings", posts.len(), warnings.len());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn site_with_posts(posts: &[(&str, &str)]) -> (TempDir, Caderno) {
        let dir = TempDir::new().unwrap();
        let posts_dir = dir.path().join("posts");
        fs::create_dir_all(&posts_dir).unwrap();
        for (name, content) in posts {
            fs::write(posts_dir.join(name), content).unwrap();
        }
        let app = Caderno::new(dir.path()).unwrap();
        (dir, app)
    }

    #[test]
    fn test_stray_entries_reported() {
        let (_dir, app) = site_with_posts(&[
            ("ok.md", "---\ndate: \"2021-01-01\"\n---\nOk"),
            ("notas.txt", "stray"),
        ]);
        fs::create_dir(app.posts_dir.join("rascunhos")).unwrap();

        let stray = stray_entries(&app).unwrap();
        assert_eq!(stray.len(), 2);
        assert!(run(&app).is_err());
    }

    #[test]
    fn test_clean_site_passes() {
        let (_dir, app) = site_with_posts(&[("ok.md", "---\ndate: \"2021-01-01\"\n---\nOk")]);

        assert!(stray_entries(&app).unwrap().is_empty());
        run(&app).unwrap();
    }

    #[test]
    fn test_post_warnings() {
        let (_dir, app) = site_with_posts(&[
            ("sem-data.md", "---\ntitle: \"A\"\n---\nCorpo"),
            ("data-ruim.md", "---\ndate: \"amanhã\"\n---\nCorpo"),
            (
                "sem-banner.md",
                "---\ndate: \"2021-01-01\"\nbanner: \"./capa.jpg\"\n---\nCorpo",
            ),
        ]);

        let posts = ContentLoader::new(&app).all_posts().unwrap();
        let warnings = post_warnings(&app, &posts);
        assert_eq!(warnings.len(), 3);
    }

    #[test]
    fn test_banner_in_assets_found() {
        let (_dir, app) = site_with_posts(&[(
            "com-banner.md",
            "---\ndate: \"2021-01-01\"\nbanner: \"../assets/capa.jpg\"\n---\nCorpo",
        )]);
        fs::create_dir_all(&app.assets_dir).unwrap();
        fs::write(app.assets_dir.join("capa.jpg"), b"jpg").unwrap();

        let posts = ContentLoader::new(&app).all_posts().unwrap();
        assert!(post_warnings(&app, &posts).is_empty());
    }
}
