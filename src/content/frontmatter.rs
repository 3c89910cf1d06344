//! Front-matter parsing
//!
//! Posts open with a `---` delimited YAML block followed by the Markdown
//! body. The block is an open map: `title`, `date`, `category` and `banner`
//! get typed fields because the loader and the page-template contract read
//! them, everything else flows through `extra` in authored order.

use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Front-matter metadata from a post file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FrontMatter {
    pub title: Option<String>,
    /// Publication date, verbatim as authored (`2021-01-15`)
    pub date: Option<String>,
    pub category: Option<String>,
    /// Banner image path, relative to the post file
    pub banner: Option<String>,

    /// Additional custom fields, in authored order
    #[serde(flatten)]
    pub extra: IndexMap<String, serde_yaml::Value>,
}

impl FrontMatter {
    /// Split front-matter from file content.
    ///
    /// Returns `(front_matter, body)`. A file that does not open with a
    /// `---` line has no front-matter: the whole content is the body. A
    /// well-formed block that fails to deserialize is an error.
    pub fn parse(content: &str) -> Result<(Self, &str)> {
        let Some(after_open) = strip_delimiter_line(content) else {
            return Ok((FrontMatter::default(), content));
        };

        let Some((yaml, body)) = split_at_closing_delimiter(after_open) else {
            // Opening delimiter but no closing one: not a metadata block
            return Ok((FrontMatter::default(), content));
        };

        if yaml.trim().is_empty() {
            return Ok((FrontMatter::default(), body));
        }

        let fm: FrontMatter =
            serde_yaml::from_str(yaml).context("invalid YAML front-matter")?;
        Ok((fm, body))
    }

    /// Parse the authored date into a calendar date
    pub fn parse_date(&self) -> Option<NaiveDate> {
        self.date.as_deref().and_then(parse_date_string)
    }

    /// Build the complete metadata map for a [`Post`](super::Post), with the
    /// `date` key overridden by the formatted display string.
    ///
    /// `display_date` is `None` when the post has no date at all; the key is
    /// then left out instead of being forced in empty.
    pub fn into_fields(
        self,
        display_date: Option<String>,
    ) -> IndexMap<String, serde_yaml::Value> {
        let mut fields = IndexMap::new();
        if let Some(title) = self.title {
            fields.insert("title".to_string(), serde_yaml::Value::String(title));
        }
        if let Some(display) = display_date {
            fields.insert("date".to_string(), serde_yaml::Value::String(display));
        }
        if let Some(category) = self.category {
            fields.insert("category".to_string(), serde_yaml::Value::String(category));
        }
        if let Some(banner) = self.banner {
            fields.insert("banner".to_string(), serde_yaml::Value::String(banner));
        }
        fields.extend(self.extra);
        fields
    }
}

/// Strip a `---` delimiter that forms a complete line (or ends the input).
fn strip_delimiter_line(s: &str) -> Option<&str> {
    let rest = s.strip_prefix("---")?;
    if rest.is_empty() {
        return Some(rest);
    }
    rest.strip_prefix("\r\n").or_else(|| rest.strip_prefix('\n'))
}

/// Find the closing `---` line and split the block from the body.
///
/// The closing delimiter must sit on its own line; a run of dashes inside
/// the YAML does not close the block.
fn split_at_closing_delimiter(after_open: &str) -> Option<(&str, &str)> {
    // Closing delimiter immediately after the opening one: empty block
    if let Some(body) = strip_delimiter_line(after_open) {
        return Some(("", body));
    }

    let mut search_from = 0;
    while let Some(pos) = after_open[search_from..].find("\n---") {
        let at = search_from + pos;
        if let Some(body) = strip_delimiter_line(&after_open[at + 1..]) {
            return Some((&after_open[..at], body));
        }
        search_from = at + 1;
    }
    None
}

/// Parse a date string in the formats blog authors actually write.
pub(crate) fn parse_date_string(s: &str) -> Option<NaiveDate> {
    let s = s.trim();

    const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%Y/%m/%d"];
    for fmt in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(s, fmt) {
            return Some(date);
        }
    }

    const DATETIME_FORMATS: [&str; 4] = [
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%Y/%m/%d %H:%M:%S",
        "%Y-%m-%dT%H:%M:%S",
    ];
    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.date());
        }
    }

    // RFC 3339 / ISO 8601 with offset
    DateTime::parse_from_rfc3339(s)
        .ok()
        .map(|dt| dt.date_naive())
}
