//! Per-platform preview assembly.
//!
//! Builders here turn [`PageMetadata`](crate::models::PageMetadata) plus the
//! rich-result configuration into structured snippet values a front end (or
//! the CLI) can lay out. Pixel truncation happens here, through an injected
//! [`TextMeasurer`](crate::measure::TextMeasurer); everything else is
//! deterministic string assembly.

pub mod google;
pub mod social;

/// The separator Google draws between URL path segments.
pub const CRUMB_SEP: &str = " › ";

fn strip_scheme(url: &str) -> &str {
    url.strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .unwrap_or(url)
}

/// Host portion of a URL. Malformed input degrades to "strip the scheme and
/// take everything before the first slash", never an error.
pub fn domain(url: &str) -> String {
    strip_scheme(url)
        .split(['/', '?', '#'])
        .next()
        .unwrap_or("")
        .to_string()
}

/// Google-style URL line: `host › path › segments` (query and fragment
/// dropped), or just the host for a root URL. Input without an http(s)
/// scheme is returned raw, the degraded handling for URLs that would not
/// parse.
pub fn breadcrumb_path(url: &str) -> String {
    let Some(stripped) = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
    else {
        return url.to_string();
    };
    let without_tail = stripped
        .split(['?', '#'])
        .next()
        .unwrap_or(stripped);
    let mut segments = without_tail.split('/').filter(|s| !s.is_empty());
    let host = segments.next().unwrap_or("").to_string();
    segments.fold(host, |mut acc, seg| {
        acc.push_str(CRUMB_SEP);
        acc.push_str(seg);
        acc
    })
}
