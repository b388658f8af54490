//! Extraction module tests
//!
//! These tests verify text, image and structured data extraction on raw
//! document bodies.

use smart_seo::extraction::{
    ContentExtractor, ExtractedLinks, LinkExtractor, LinkRecord, MarkupInspector,
    StructuredDataInspector,
};

#[test]
fn test_extracted_content_counts() {
    let content = ContentExtractor::extract("<h1>Hello world.</h1><p>This is a <em>test</em>.</p>");
    assert_eq!(content.text, "Hello world. This is a test .");
    assert_eq!(content.word_count, 6);
}

#[test]
fn test_persian_text_word_count() {
    let content = ContentExtractor::extract("<p>سئو محتوای خوب می\u{200c}خواهد</p>");
    assert_eq!(content.word_count, 4);
}

#[test]
fn test_link_record_serialization() {
    let link = LinkRecord {
        url: "https://site.example/a".to_string(),
        anchor_text: "A".to_string(),
        is_internal: true,
    };
    let json = serde_json::to_string(&link).unwrap();
    assert!(json.contains("\"url\":\"https://site.example/a\""));
    assert!(json.contains("\"is_internal\":true"));
}

#[test]
fn test_relative_resolution() {
    let extractor = LinkExtractor::new("https://site.example/");
    assert_eq!(extractor.site_prefix(), "https://site.example");
    assert_eq!(
        extractor.resolve("/blog/post").as_deref(),
        Some("https://site.example/blog/post")
    );
    assert_eq!(
        extractor.resolve("//cdn.example/file.js").as_deref(),
        Some("https://cdn.example/file.js")
    );
    assert_eq!(extractor.resolve("   "), None);
    assert_eq!(extractor.resolve("tel:+100"), None);
}

#[test]
fn test_extracted_links_default() {
    let links = ExtractedLinks::default();
    assert!(links.is_empty());
    assert_eq!(links.len(), 0);
}

#[test]
fn test_faq_inspector_on_article() {
    let body = r#"
        <h2>Questions</h2>
        <script type="application/ld+json">
        {
            "@context": "https://schema.org",
            "@type": "FAQPage",
            "mainEntity": [{
                "@type": "Question",
                "name": "What is a widget?",
                "acceptedAnswer": {"@type": "Answer", "text": "A small gadget."}
            }]
        }
        </script>
    "#;
    assert!(StructuredDataInspector.has_faq_markup(body));
    assert!(!StructuredDataInspector.has_faq_markup("<h2>Questions</h2>"));
}
