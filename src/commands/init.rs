//! Initialize a new caderno site

use anyhow::Result;
use std::fs;
use std::path::Path;

use crate::Caderno;

/// Initialize a new site in the given directory
pub fn init_site(target_dir: &Path) -> Result<()> {
    // Create directory structure
    fs::create_dir_all(target_dir)?;
    fs::create_dir_all(target_dir.join("posts"))?;
    fs::create_dir_all(target_dir.join("assets"))?;

    // Create default _config.yml
    let config_content = r#"# Caderno Configuration

# Site
title: Caderno
author: ''
description: ''
language: pt-BR
social:
  twitter: ''

# URL
url: https://example.com
path_prefix: /

# Directory
posts_dir: posts
assets_dir: assets

# Date display format (Moment-style tokens)
date_format: DD MMM YYYY

# Web app manifest
manifest:
  name: Caderno
  short_name: Caderno
  start_url: /
  background_color: '#101723'
  theme_color: '#101723'
  display: standalone
  icon: static/favicon.png

# Image transforms
images:
  max_width: 590

# Web fonts
fonts:
  - family: Nunito Sans
    variants: ['400', '600', '700', '800']

# Analytics (the tracking ID is read from this environment variable)
analytics:
  tracking_id_env: GOOGLE_ANALYTICS_ID
  head: false
"#;

    fs::write(target_dir.join("_config.yml"), config_content)?;

    // Create a sample post
    let now = chrono::Local::now();
    let sample_post = format!(
        r#"---
title: "Olá, mundo"
date: "{}"
category: "geral"
---

Este é o primeiro post do seu caderno. Edite ou remova este arquivo e
escreva os seus próprios textos em `posts/`.

## Como escrever

Cada post é um arquivo Markdown com metadados YAML no topo:

```markdown
---
title: "Meu novo post"
date: "{}"
---
```

O nome do arquivo vira o slug do post: `posts/ola-mundo.md` é publicado
em `/ola-mundo/`.
"#,
        now.format("%Y-%m-%d"),
        now.format("%Y-%m-%d")
    );

    fs::write(target_dir.join("posts/ola-mundo.md"), sample_post)?;

    Ok(())
}

/// Run the init command with an existing caderno instance
pub fn run(app: &Caderno) -> Result<()> {
    init_site(&app.base_dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_site_scaffold() {
        let dir = TempDir::new().unwrap();
        init_site(dir.path()).unwrap();

        assert!(dir.path().join("_config.yml").exists());
        assert!(dir.path().join("posts/ola-mundo.md").exists());
        assert!(dir.path().join("assets").is_dir());
    }

    #[test]
    fn test_scaffolded_site_loads() {
        let dir = TempDir::new().unwrap();
        Caderno::new(dir.path()).unwrap().init().unwrap();

        let app = Caderno::new(dir.path()).unwrap();
        assert_eq!(app.config.language, "pt-BR");

        let posts = app.loader().all_posts().unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].slug, "ola-mundo");
        assert!(posts[0].parsed_date().is_some());
    }
}
