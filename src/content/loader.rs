//! Content loader - reads posts from the posts directory

use std::cmp::Reverse;
use std::fs;

use anyhow::Result;
use chrono::Locale;

use crate::content::{FrontMatter, Post};
use crate::helpers;
use crate::Caderno;

/// Loads posts from the site's posts directory.
pub struct ContentLoader<'a> {
    app: &'a Caderno,
    locale: Locale,
}

impl<'a> ContentLoader<'a> {
    pub fn new(app: &'a Caderno) -> Self {
        let locale = helpers::locale_for_tag(&app.config.language);
        Self { app, locale }
    }

    /// Load a single post by slug.
    ///
    /// An empty slug yields `Ok(None)`. A trailing `.md` on the slug is
    /// stripped, so `post_by_slug("hello.md")` and `post_by_slug("hello")`
    /// load the same file. A slug with no matching file is an error.
    pub fn post_by_slug(&self, slug: &str) -> Result<Option<Post>> {
        if slug.is_empty() {
            return Ok(None);
        }

        let slug = slug.strip_suffix(".md").unwrap_or(slug);
        let path = self.app.posts_dir.join(format!("{}.md", slug));
        let raw = fs::read_to_string(&path)?;

        let (fm, body) = FrontMatter::parse(&raw)?;

        let date = fm.date.clone().unwrap_or_default();
        let display_date = fm.date.as_ref().map(|raw_date| match fm.parse_date() {
            Some(parsed) => {
                helpers::format_display_date(parsed, &self.app.config.date_format, self.locale)
            }
            None => {
                tracing::warn!("Unparseable date {:?} in {:?}", raw_date, path);
                raw_date.clone()
            }
        });

        Ok(Some(Post {
            slug: slug.to_string(),
            date,
            content: body.to_string(),
            frontmatter: fm.into_fields(display_date),
        }))
    }

    /// Load every post in the posts directory, newest first.
    ///
    /// Posts are ordered by their parsed calendar date, not by the
    /// localized display string. Posts without a parseable date sort
    /// after all dated ones.
    pub fn all_posts(&self) -> Result<Vec<Post>> {
        let mut posts = Vec::new();

        for entry in fs::read_dir(&self.app.posts_dir)? {
            let entry = entry?;
            let name = entry.file_name();
            if let Some(post) = self.post_by_slug(&name.to_string_lossy())? {
                posts.push(post);
            }
        }

        posts.sort_by_cached_key(|post| Reverse(post.parsed_date()));

        Ok(posts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
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
    fn test_post_by_slug_round_trip() {
        let (_dir, app) = site_with_posts(&[(
            "primeiro-post.md",
            "---\ntitle: \"Primeiro post\"\ndate: \"2021-01-15\"\n---\nOlá, mundo.",
        )]);
        let loader = ContentLoader::new(&app);

        let post = loader.post_by_slug("primeiro-post").unwrap().unwrap();
        assert_eq!(post.slug, "primeiro-post");
        assert_eq!(post.date, "2021-01-15");
        assert_eq!(post.content, "Olá, mundo.");
        assert_eq!(
            post.frontmatter.get("title").and_then(|v| v.as_str()),
            Some("Primeiro post")
        );
        // The frontmatter copy of the date is the localized display string.
        assert_eq!(
            post.frontmatter.get("date").and_then(|v| v.as_str()),
            Some("15 jan 2021")
        );
    }

    #[test]
    fn test_post_by_slug_strips_md_extension() {
        let (_dir, app) = site_with_posts(&[(
            "primeiro-post.md",
            "---\ntitle: \"Primeiro post\"\ndate: \"2021-01-15\"\n---\nOlá.",
        )]);
        let loader = ContentLoader::new(&app);

        let post = loader.post_by_slug("primeiro-post.md").unwrap().unwrap();
        assert_eq!(post.slug, "primeiro-post");
    }

    #[test]
    fn test_post_by_slug_empty_slug_is_none() {
        let (_dir, app) = site_with_posts(&[]);
        let loader = ContentLoader::new(&app);

        assert!(loader.post_by_slug("").unwrap().is_none());
    }

    #[test]
    fn test_post_by_slug_missing_file_is_not_found() {
        let (_dir, app) = site_with_posts(&[]);
        let loader = ContentLoader::new(&app);

        let err = loader.post_by_slug("nao-existe").unwrap_err();
        let io = err
            .downcast_ref::<std::io::Error>()
            .expect("missing post should surface the underlying I/O error");
        assert_eq!(io.kind(), std::io::ErrorKind::NotFound);
    }

    #[test]
    fn test_all_posts_one_per_file() {
        let (_dir, app) = site_with_posts(&[
            ("um.md", "---\ndate: \"2021-01-01\"\n---\nUm"),
            ("dois.md", "---\ndate: \"2021-01-02\"\n---\nDois"),
            ("tres.md", "---\ndate: \"2021-01-03\"\n---\nTrês"),
        ]);
        let loader = ContentLoader::new(&app);

        let posts = loader.all_posts().unwrap();
        assert_eq!(posts.len(), 3);
        let mut slugs: Vec<_> = posts.iter().map(|p| p.slug.as_str()).collect();
        slugs.sort_unstable();
        assert_eq!(slugs, ["dois", "tres", "um"]);
    }

    #[test]
    fn test_all_posts_sorted_by_calendar_date() {
        // The display strings for these dates ("01 mar 2021", "10 jan 2021",
        // "20 fev 2021") would order fev < jan < mar lexically. The sort must
        // use the calendar dates instead.
        let (_dir, app) = site_with_posts(&[
            ("janeiro.md", "---\ndate: \"2021-01-10\"\n---\nJan"),
            ("marco.md", "---\ndate: \"2021-03-01\"\n---\nMar"),
            ("fevereiro.md", "---\ndate: \"2021-02-20\"\n---\nFev"),
        ]);
        let loader = ContentLoader::new(&app);

        let posts = loader.all_posts().unwrap();
        let slugs: Vec<_> = posts.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, ["marco", "fevereiro", "janeiro"]);
    }

    #[test]
    fn test_neighbors_in_post_list() {
        let (_dir, app) = site_with_posts(&[
            ("janeiro.md", "---\ndate: \"2021-01-10\"\n---\nJan"),
            ("marco.md", "---\ndate: \"2021-03-01\"\n---\nMar"),
            ("fevereiro.md", "---\ndate: \"2021-02-20\"\n---\nFev"),
        ]);
        let loader = ContentLoader::new(&app);

        let posts = loader.all_posts().unwrap();
        let middle = &posts[1];
        assert_eq!(middle.slug, "fevereiro");
        assert_eq!(middle.next(&posts).map(|p| p.slug.as_str()), Some("marco"));
        assert_eq!(
            middle.previous(&posts).map(|p| p.slug.as_str()),
            Some("janeiro")
        );
        assert!(posts[0].next(&posts).is_none());
        assert!(posts[2].previous(&posts).is_none());
    }

    #[test]
    fn test_all_posts_undated_sort_last() {
        let (_dir, app) = site_with_posts(&[
            ("sem-data.md", "---\ntitle: \"Rascunho\"\n---\nCorpo"),
            ("novo.md", "---\ndate: \"2021-02-01\"\n---\nNovo"),
            ("velho.md", "---\ndate: \"2020-01-01\"\n---\nVelho"),
        ]);
        let loader = ContentLoader::new(&app);

        let posts = loader.all_posts().unwrap();
        let slugs: Vec<_> = posts.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, ["novo", "velho", "sem-data"]);
    }

    #[test]
    fn test_all_posts_unparseable_date_keeps_raw_string() {
        let (_dir, app) =
            site_with_posts(&[("em-breve.md", "---\ndate: \"em breve\"\n---\nAguarde")]);
        let loader = ContentLoader::new(&app);

        let posts = loader.all_posts().unwrap();
        assert_eq!(posts[0].date, "em breve");
        assert_eq!(
            posts[0].frontmatter.get("date").and_then(|v| v.as_str()),
            Some("em breve")
        );
        assert!(posts[0].parsed_date().is_none());
    }

    #[test]
    fn test_all_posts_stray_file_fails() {
        let (_dir, app) = site_with_posts(&[
            ("post.md", "---\ndate: \"2021-01-01\"\n---\nOk"),
            ("notas.txt", "not a post"),
        ]);
        let loader = ContentLoader::new(&app);

        assert!(loader.all_posts().is_err());
    }
}
