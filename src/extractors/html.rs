use scraper::{ElementRef, Html};

/// Extract visible text from an HTML document.
///
/// Text nodes are collected in document order with `script`/`style` content
/// skipped; each node is trimmed, empty nodes are dropped, and the remainder
/// is joined with newlines. Parsing is lenient and never fails; html5ever
/// recovers from malformed markup.
pub fn extract(html: &str) -> String {
    let document = Html::parse_document(html);
    let mut parts = Vec::new();
    collect_text(&document.root_element(), &mut parts);
    parts.join("\n")
}

fn collect_text(element: &ElementRef, parts: &mut Vec<String>) {
    const SKIP_TAGS: &[&str] = &["script", "style", "noscript"];

    for child in element.children() {
        if let Some(child_element) = child.value().as_element() {
            if SKIP_TAGS.contains(&child_element.name()) {
                continue;
            }
            if let Some(child_ref) = ElementRef::wrap(child) {
                collect_text(&child_ref, parts);
            }
        } else if let Some(text_node) = child.value().as_text() {
            let trimmed = text_node.trim();
            if !trimmed.is_empty() {
                parts.push(trimmed.to_string());
            }
        }
    }
}
