//! Create a new post

use anyhow::Result;
use std::fs;

use crate::Caderno;

/// Create a new post file from a title
pub fn create_post(app: &Caderno, title: &str, category: Option<&str>) -> Result<()> {
    let now = chrono::Local::now();
    let slug = slug::slugify(title);

    fs::create_dir_all(&app.posts_dir)?;

    let file_path = app.posts_dir.join(format!("{}.md", slug));
    if file_path.exists() {
        anyhow::bail!("File already exists: {:?}", file_path);
    }

    let mut content = format!(
        "---\ntitle: \"{}\"\ndate: \"{}\"\n",
        title,
        now.format("%Y-%m-%d")
    );
    if let Some(category) = category {
        content.push_str(&format!("category: \"{}\"\n", category));
    }
    content.push_str("---\n\n");

    fs::write(&file_path, content)?;

    println!("Created: {:?}", file_path);

    Ok(())
}

/// Run the new command
pub fn run(app: &Caderno, title: &str, category: Option<&str>) -> Result<()> {
    create_post(app, title, category)
}
