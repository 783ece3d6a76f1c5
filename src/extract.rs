//! PDF text extraction
//!
//! Pulls the text layer out of an uploaded PDF with lopdf, page by page.
//! Extraction never fails loudly: anything unparseable yields an empty
//! string, which the ingest handler treats as "nothing to store". Scanned
//! or image-only PDFs also come back empty; there is no OCR fallback.

use lopdf::Document;
use tracing::{debug, warn};

/// Extract the text of every page, concatenated with newline separators.
/// Returns an empty string when the bytes are not a readable PDF or no
/// page has extractable text.
pub fn extract_text(data: &[u8]) -> String {
    match try_extract(data) {
        Ok(text) => text,
        Err(e) => {
            warn!("PDF text extraction failed: {}", e);
            String::new()
        }
    }
}

fn try_extract(data: &[u8]) -> Result<String, lopdf::Error> {
    let doc = Document::load_mem(data)?;

    let mut text = String::new();
    for (page_num, _page_id) in doc.get_pages() {
        match doc.extract_text(&[page_num]) {
            Ok(page_text) => {
                let trimmed = page_text.trim();
                if !trimmed.is_empty() {
                    text.push_str(trimmed);
                    text.push('\n');
                }
            }
            Err(e) => {
                debug!("No text on page {}: {}", page_num, e);
            }
        }
    }

    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lopdf::content::{Content, Operation};
    use lopdf::{dictionary, Object, Stream};

    // Build a minimal single-page PDF; `text` of None produces a blank page.
    fn build_pdf(text: Option<&str>) -> Vec<u8> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();

        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Courier",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! {
                "F1" => font_id,
            },
        });

        let mut operations = Vec::new();
        if let Some(text) = text {
            operations.extend([
                Operation::new("BT", vec![]),
                Operation::new("Tf", vec!["F1".into(), 24.into()]),
                Operation::new("Td", vec![100.into(), 600.into()]),
                Operation::new("Tj", vec![Object::string_literal(text)]),
                Operation::new("ET", vec![]),
            ]);
        }
        let content = Content { operations };
        let content_id = doc.add_object(Stream::new(
            dictionary! {},
            content.encode().unwrap(),
        ));

        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        let pages = dictionary! {
            "Type" => "Pages",
            "Kids" => vec![page_id.into()],
            "Count" => 1,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
        };
        doc.objects.insert(pages_id, Object::Dictionary(pages));

        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut buf = Vec::new();
        doc.save_to(&mut buf).unwrap();
        buf
    }

    #[test]
    fn extracts_text_from_valid_pdf() {
        let pdf = build_pdf(Some("Hello World"));
        let text = extract_text(&pdf);
        assert!(text.contains("Hello World"), "got: {:?}", text);
    }

    #[test]
    fn blank_page_yields_empty_string() {
        let pdf = build_pdf(None);
        assert!(extract_text(&pdf).trim().is_empty());
    }

    #[test]
    fn garbage_bytes_yield_empty_string() {
        assert_eq!(extract_text(b"this is not a pdf"), "");
    }

    #[test]
    fn empty_input_yields_empty_string() {
        assert_eq!(extract_text(&[]), "");
    }
}
