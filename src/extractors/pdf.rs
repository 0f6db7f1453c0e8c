use lopdf::Document;
use std::path::Path;

use crate::{ExtractError, Result};

/// Extract text from a PDF file on disk
pub fn extract_from_file(path: &Path) -> Result<String> {
    let doc = Document::load(path).map_err(|e| parse_error(&e))?;
    Ok(extract_from_document(&doc))
}

/// Extract text from PDF bytes already in memory
pub fn extract_from_bytes(bytes: &[u8]) -> Result<String> {
    let doc = Document::load_mem(bytes).map_err(|e| parse_error(&e))?;
    Ok(extract_from_document(&doc))
}

/// Walk the document's pages in order, appending each page's text followed by
/// a newline separator. Every page contributes a separator, including the last
/// and any page without extractable text.
fn extract_from_document(doc: &Document) -> String {
    let pages = doc.get_pages();
    let mut text = String::new();

    for page_num in pages.keys() {
        let page_text = doc.extract_text(&[*page_num]).unwrap_or_default();
        text.push_str(&page_text);
        text.push('\n');
    }

    text
}

fn parse_error(err: &lopdf::Error) -> ExtractError {
    ExtractError::Parse {
        format: "PDF",
        message: err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lopdf::content::{Content, Operation};
    use lopdf::{dictionary, Object, Stream};

    // Build a PDF with one text page per entry; None produces a page with no
    // content stream at all
    fn build_pdf(page_texts: &[Option<&str>]) -> Vec<u8> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Courier",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! { "F1" => font_id },
        });

        let mut kids: Vec<Object> = Vec::new();
        for page_text in page_texts {
            let mut page = dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Resources" => resources_id,
                "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
            };
            if let Some(text) = page_text {
                let content = Content {
                    operations: vec![
                        Operation::new("BT", vec![]),
                        Operation::new("Tf", vec!["F1".into(), 48.into()]),
                        Operation::new("Td", vec![100.into(), 600.into()]),
                        Operation::new("Tj", vec![Object::string_literal(*text)]),
                        Operation::new("ET", vec![]),
                    ],
                };
                let content_id =
                    doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
                page.set("Contents", content_id);
            }
            kids.push(doc.add_object(page).into());
        }

        let pages = dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => page_texts.len() as i64,
        };
        doc.objects.insert(pages_id, Object::Dictionary(pages));
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut bytes = Vec::new();
        doc.save_to(&mut bytes).unwrap();
        bytes
    }

    #[test]
    fn test_extract_from_bytes() {
        let text = extract_from_bytes(&build_pdf(&[Some("Hello World!")])).unwrap();
        assert!(text.contains("Hello World!"));
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn test_empty_page_still_contributes_separator() {
        // Two pages, the second with no content stream: pages are never
        // skipped, so each contributes exactly one separator
        let text = extract_from_bytes(&build_pdf(&[Some("PageOne"), None])).unwrap();
        assert!(text.contains("PageOne"));
        assert_eq!(text.matches('\n').count(), 2);
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn test_pages_extract_in_document_order() {
        let text = extract_from_bytes(&build_pdf(&[Some("PageOne"), Some("PageTwo")])).unwrap();
        let first = text.find("PageOne").unwrap();
        let second = text.find("PageTwo").unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_malformed_pdf_is_parse_error() {
        let err = extract_from_bytes(b"not a pdf at all").unwrap_err();
        assert!(matches!(err, ExtractError::Parse { format: "PDF", .. }));
    }
}
