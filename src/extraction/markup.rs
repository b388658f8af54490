//! Structured data inspection
//!
//! Detects FAQ structured data in a document body, either as JSON-LD
//! (`<script type="application/ld+json">`) or as schema.org microdata.

use scraper::{ElementRef, Html};
use serde_json::Value;
use tracing::debug;

/// schema.org type marking question/answer content
const FAQ_TYPE: &str = "FAQPage";

/// Capability to probe raw markup for FAQ structured data
pub trait MarkupInspector: Send + Sync {
    /// Whether the body carries FAQ structured data
    fn has_faq_markup(&self, raw_body: &str) -> bool;
}

/// Default inspector reading JSON-LD blocks and microdata `itemtype`s
#[derive(Debug, Clone, Copy, Default)]
pub struct StructuredDataInspector;

impl StructuredDataInspector {
    /// Parse every JSON-LD block in the body, skipping unparseable ones
    pub fn json_ld_blocks(raw_body: &str) -> Vec<Value> {
        let fragment = Html::parse_fragment(raw_body);
        let blocks = fragment
            .root_element()
            .descendants()
            .filter_map(ElementRef::wrap)
            .filter(|el| {
                el.value().name() == "script"
                    && el
                        .value()
                        .attr("type")
                        .is_some_and(|t| t.trim().eq_ignore_ascii_case("application/ld+json"))
            })
            .filter_map(|el| {
                let raw: String = el.text().collect();
                match serde_json::from_str(&raw) {
                    Ok(value) => Some(value),
                    Err(e) => {
                        debug!("Skipping malformed JSON-LD block: {}", e);
                        None
                    }
                }
            })
            .collect();
        blocks
    }

    fn has_faq_microdata(raw_body: &str) -> bool {
        let fragment = Html::parse_fragment(raw_body);
        let found = fragment
            .root_element()
            .descendants()
            .filter_map(ElementRef::wrap)
            .filter_map(|el| el.value().attr("itemtype"))
            .flat_map(str::split_whitespace)
            .any(|t| t.trim_end_matches('/').ends_with("schema.org/FAQPage"));
        found
    }
}

impl MarkupInspector for StructuredDataInspector {
    fn has_faq_markup(&self, raw_body: &str) -> bool {
        Self::json_ld_blocks(raw_body).iter().any(declares_faq) || Self::has_faq_microdata(raw_body)
    }
}

/// Whether a JSON-LD value declares `@type: FAQPage` anywhere inside it
fn declares_faq(value: &Value) -> bool {
    match value {
        Value::Object(map) => {
            let typed = match map.get("@type") {
                Some(Value::String(t)) => t == FAQ_TYPE,
                Some(Value::Array(types)) => types.iter().any(|t| t.as_str() == Some(FAQ_TYPE)),
                _ => false,
            };
            typed || map.values().any(declares_faq)
        }
        Value::Array(items) => items.iter().any(declares_faq),
        _ => false,
    }
}
