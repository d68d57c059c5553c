// Meta-tag export: tag selection, ordering, and HTML escaping.

use serpview::export::meta_tags;
use serpview::models::PageMetadata;

fn full_page() -> PageMetadata {
    PageMetadata {
        title: "Best Wireless Headphones 2025".into(),
        description: "Compare the top-rated wireless headphones of 2025.".into(),
        url: "https://www.techreviews.com/audio/best-wireless-headphones".into(),
        og_image: "https://images.example.com/headphones.jpg".into(),
    }
}

#[test]
fn full_page_emits_all_tags_in_order() {
    let tags = meta_tags(&full_page());
    let lines: Vec<&str> = tags.lines().collect();
    assert_eq!(lines.len(), 11);
    assert_eq!(lines[0], "<title>Best Wireless Headphones 2025</title>");
    assert!(lines[1].starts_with(r#"<meta property="og:title""#));
    assert!(lines[2].starts_with(r#"<meta name="twitter:title""#));
    assert!(lines[3].starts_with(r#"<meta name="description""#));
    assert!(lines[4].starts_with(r#"<meta property="og:description""#));
    assert!(lines[5].starts_with(r#"<meta name="twitter:description""#));
    assert!(lines[6].starts_with(r#"<meta property="og:url""#));
    assert!(lines[7].starts_with(r#"<meta property="og:image""#));
    assert!(lines[8].starts_with(r#"<meta name="twitter:image""#));
    assert_eq!(
        lines[9],
        r#"<meta name="twitter:card" content="summary_large_image" />"#
    );
    assert_eq!(lines[10], r#"<meta property="og:type" content="website" />"#);
}

#[test]
fn card_is_summary_without_an_image() {
    let mut page = full_page();
    page.og_image.clear();
    let tags = meta_tags(&page);
    assert!(tags.contains(r#"<meta name="twitter:card" content="summary" />"#));
    assert!(!tags.contains("twitter:image"));
    assert!(!tags.contains("og:image"));
}

#[test]
fn og_type_is_always_last() {
    for page in [PageMetadata::default(), full_page()] {
        let tags = meta_tags(&page);
        assert_eq!(
            tags.lines().last().unwrap(),
            r#"<meta property="og:type" content="website" />"#
        );
    }
}

#[test]
fn title_text_and_attribute_escaping_differ() {
    let page = PageMetadata {
        title: r#"<script>&"</script>"#.into(),
        ..Default::default()
    };
    let tags = meta_tags(&page);
    // Element text: & < > escaped, the quote left alone.
    assert!(tags.contains(r#"<title>&lt;script&gt;&amp;"&lt;/script&gt;</title>"#));
    // Attribute value: additionally escapes the quote.
    assert!(tags.contains(
        r#"<meta property="og:title" content="&lt;script&gt;&amp;&quot;&lt;/script&gt;" />"#
    ));
}

#[test]
fn url_fields_are_attribute_escaped() {
    let page = PageMetadata {
        url: r#"https://example.com/?q="a"&b=<c>"#.into(),
        ..Default::default()
    };
    let tags = meta_tags(&page);
    assert!(tags.contains(
        r#"<meta property="og:url" content="https://example.com/?q=&quot;a&quot;&amp;b=&lt;c&gt;" />"#
    ));
}

#[test]
fn partial_page_emits_only_present_fields() {
    let page = PageMetadata {
        description: "Only a description.".into(),
        ..Default::default()
    };
    let tags = meta_tags(&page);
    assert!(!tags.contains("<title>"));
    assert!(!tags.contains("og:url"));
    assert!(tags.contains(r#"<meta name="description" content="Only a description." />"#));
    assert_eq!(tags.lines().count(), 5); // 3 descriptions + card + og:type
}
