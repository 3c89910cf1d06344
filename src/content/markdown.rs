//! Markdown to HTML projection
//!
//! Posts store their body as Markdown source; page templates may consume a
//! pre-rendered HTML form instead. Rendering is one pulldown-cmark pass,
//! nothing more: highlighting, image transforms and the like belong to the
//! external build pipeline.

use pulldown_cmark::{html, Options, Parser};

/// Render a Markdown body to HTML.
pub fn render_html(markdown: &str) -> String {
    // Front-matter is already split off by the loader, so YAML metadata
    // blocks stay disabled here.
    let options = Options::ENABLE_TABLES
        | Options::ENABLE_FOOTNOTES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS
        | Options::ENABLE_SMART_PUNCTUATION
        | Options::ENABLE_HEADING_ATTRIBUTES
        | Options::ENABLE_DEFINITION_LIST
        | Options::ENABLE_GFM;

    let parser = Parser::new_ext(markdown, options);
    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}
