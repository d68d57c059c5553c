//! HTML meta-tag export.
//!
//! Assembles the `<title>`, description, Open Graph and Twitter card tags
//! for a page, escaping `&`, `<`, `>` in element text and additionally `"`
//! inside attribute values. Tags are emitted only for fields that are
//! present; the `twitter:card` and `og:type` tags are always emitted.

use crate::models::PageMetadata;

fn escape(s: &str, quotes: bool) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' if quotes => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Escape element text (`&`, `<`, `>`; quotes are left alone).
pub fn escape_text(s: &str) -> String {
    escape(s, false)
}

/// Escape an attribute value (`&`, `<`, `>`, `"`).
pub fn escape_attr(s: &str) -> String {
    escape(s, true)
}

/// Generate the meta-tag block for `page`, one tag per line.
pub fn meta_tags(page: &PageMetadata) -> String {
    let mut tags: Vec<String> = Vec::new();

    if !page.title.is_empty() {
        tags.push(format!("<title>{}</title>", escape_text(&page.title)));
        tags.push(format!(
            r#"<meta property="og:title" content="{}" />"#,
            escape_attr(&page.title)
        ));
        tags.push(format!(
            r#"<meta name="twitter:title" content="{}" />"#,
            escape_attr(&page.title)
        ));
    }

    if !page.description.is_empty() {
        tags.push(format!(
            r#"<meta name="description" content="{}" />"#,
            escape_attr(&page.description)
        ));
        tags.push(format!(
            r#"<meta property="og:description" content="{}" />"#,
            escape_attr(&page.description)
        ));
        tags.push(format!(
            r#"<meta name="twitter:description" content="{}" />"#,
            escape_attr(&page.description)
        ));
    }

    if !page.url.is_empty() {
        tags.push(format!(
            r#"<meta property="og:url" content="{}" />"#,
            escape_attr(&page.url)
        ));
    }

    if !page.og_image.is_empty() {
        tags.push(format!(
            r#"<meta property="og:image" content="{}" />"#,
            escape_attr(&page.og_image)
        ));
        tags.push(format!(
            r#"<meta name="twitter:image" content="{}" />"#,
            escape_attr(&page.og_image)
        ));
        tags.push(r#"<meta name="twitter:card" content="summary_large_image" />"#.to_string());
    } else {
        tags.push(r#"<meta name="twitter:card" content="summary" />"#.to_string());
    }

    tags.push(r#"<meta property="og:type" content="website" />"#.to_string());

    tags.join("\n")
}
