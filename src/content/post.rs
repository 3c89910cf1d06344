//! Post model

use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::{frontmatter, markdown};

/// A blog post: the in-memory projection of one content file.
///
/// Constructed fresh on every read; never cached, never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    /// URL-safe identifier, the filename minus its extension
    pub slug: String,

    /// Publication date exactly as authored in the front-matter
    pub date: String,

    /// Markdown body source (not HTML)
    pub content: String,

    /// Every metadata key as authored, with `date` replaced by the
    /// locale-formatted display string
    pub frontmatter: IndexMap<String, serde_yaml::Value>,
}

impl Post {
    /// The authored date as a calendar date, when parseable.
    ///
    /// This is the ordering key: lists compare calendar dates, never the
    /// formatted display strings.
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        frontmatter::parse_date_string(&self.date)
    }

    /// Post title from the metadata map
    pub fn title(&self) -> Option<&str> {
        self.frontmatter.get("title").and_then(|v| v.as_str())
    }

    /// Locale-formatted display date (`15 jan 2021`)
    pub fn display_date(&self) -> Option<&str> {
        self.frontmatter.get("date").and_then(|v| v.as_str())
    }

    /// URL path consumed by the page-template collaborator
    pub fn path(&self) -> String {
        format!("/{}/", self.slug)
    }

    /// Markdown body rendered to HTML
    pub fn content_html(&self) -> String {
        markdown::render_html(&self.content)
    }

    /// The older neighbor in a newest-first list
    pub fn previous<'a>(&self, posts: &'a [Post]) -> Option<&'a Post> {
        let pos = posts.iter().position(|p| p.slug == self.slug)?;
        posts.get(pos + 1)
    }

    /// The newer neighbor in a newest-first list
    pub fn next<'a>(&self, posts: &'a [Post]) -> Option<&'a Post> {
        let pos = posts.iter().position(|p| p.slug == self.slug)?;
        pos.checked_sub(1).map(|i| &posts[i])
    }
}
