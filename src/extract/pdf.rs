//! Text-layer extraction from PDF documents.
//!
//! Only text already embedded in the page content is read. Scanned pages
//! without a text layer come back empty; they are not OCR'd.

use lopdf::Document;
use tracing::debug;

use super::ExtractError;

#[derive(Default)]
pub struct PdfExtractor;

impl PdfExtractor {
    pub fn new() -> Self {
        Self
    }

    pub fn extract(&self, bytes: &[u8]) -> Result<String, ExtractError> {
        let doc = Document::load_mem(bytes).map_err(|e| ExtractError::Decode(e.to_string()))?;

        let pages = doc.get_pages();
        debug!(pages = pages.len(), "loaded PDF");

        // get_pages is keyed by page number, so this walks 1..N in order.
        let mut texts = Vec::with_capacity(pages.len());
        for &page_number in pages.keys() {
            let text = doc
                .extract_text(&[page_number])
                .map_err(|e| ExtractError::Processing(format!("page {page_number}: {e}")))?;
            texts.push(Some(text));
        }

        Ok(join_page_texts(texts))
    }
}

/// Concatenate page texts in order, each non-blank page followed by one
/// newline. Pages holding only whitespace are skipped. Trailing line breaks
/// the text reader leaves on a page are dropped first so every page ends
/// with exactly one.
pub fn join_page_texts<I>(pages: I) -> String
where
    I: IntoIterator<Item = Option<String>>,
{
    let mut all_text = String::new();
    for text in pages.into_iter().flatten() {
        if text.trim().is_empty() {
            continue;
        }
        let text = text.trim_end_matches(['\r', '\n']);
        all_text.push_str(text);
        all_text.push('\n');
    }
    all_text
}
