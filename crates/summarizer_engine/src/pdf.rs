use std::path::Path;

use lopdf::Document;
use summarizer_logging::{engine_debug, engine_warn};

use crate::{ExtractionError, FailureKind};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PdfText {
    pub page_count: usize,
    pub text: String,
}

/// Concatenates the extracted text of every page of the PDF at `path`,
/// in page order.
///
/// Scanned or image-only documents have no text layer; a blank result is
/// reported as [`FailureKind::PdfEmpty`].
pub fn extract_pdf_text(path: &Path) -> Result<PdfText, ExtractionError> {
    let doc = Document::load(path).map_err(|err| {
        ExtractionError::pdf(FailureKind::PdfOpen, format!("{}: {err}", path.display()))
    })?;
    if doc.is_encrypted() {
        return Err(ExtractionError::pdf(
            FailureKind::PdfOpen,
            format!("{} is encrypted", path.display()),
        ));
    }

    // `get_pages` is keyed by 1-based page number, so iteration is page order.
    let pages = doc.get_pages();
    let mut text = String::new();
    for &page_number in pages.keys() {
        let page_text = doc.extract_text(&[page_number]).map_err(|err| {
            ExtractionError::pdf(
                FailureKind::PdfPage(page_number),
                format!("page {page_number}: {err}"),
            )
        })?;
        engine_debug!("PDF page {} yielded {} chars", page_number, page_text.len());
        text.push_str(&page_text);
    }

    if text.trim().is_empty() {
        engine_warn!(
            "PDF {} has {} page(s) but no text layer",
            path.display(),
            pages.len()
        );
        return Err(ExtractionError::pdf(
            FailureKind::PdfEmpty,
            "no text could be extracted (scanned or image-only PDF?)",
        ));
    }

    Ok(PdfText {
        page_count: pages.len(),
        text,
    })
}
