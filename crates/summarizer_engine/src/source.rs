//! The three ways article text enters the application. Pasted text never
//! reaches the engine; URL and PDF acquisition live here.

use std::path::Path;

use summarizer_logging::{engine_info, OperationTimer};

use crate::decode::decode_page;
use crate::extract::Extractor;
use crate::fetch::Fetcher;
use crate::pdf::extract_pdf_text;
use crate::{AcquiredText, ExtractionError, FailureKind, SourceRef};

/// Downloads `url` and extracts the article body as plain text.
pub async fn fetch_from_url(
    fetcher: &dyn Fetcher,
    extractor: &dyn Extractor,
    url: &str,
) -> Result<AcquiredText, ExtractionError> {
    let url = url.trim();
    let timer = OperationTimer::start(format!("fetch {url}"));
    let output = fetcher.fetch(url).await?;
    let decoded = decode_page(&output.bytes, output.metadata.content_type.as_deref())?;
    let article = extractor.extract(&decoded.html);
    if article.text.trim().is_empty() {
        return Err(ExtractionError::url(
            FailureKind::NoArticleText,
            format!("no article text found at {}", output.metadata.final_url),
        ));
    }
    timer.finish();
    engine_info!(
        "Extracted {} chars from {} ({}, {} redirect(s))",
        article.text.len(),
        output.metadata.final_url,
        decoded.encoding,
        output.metadata.redirect_count
    );

    Ok(AcquiredText {
        source: SourceRef::Url(url.to_string()),
        title: article.title,
        text: article.text,
    })
}

/// Reads every page of the PDF at `path`, concatenated in page order.
pub fn load_from_pdf(path: &Path) -> Result<AcquiredText, ExtractionError> {
    let timer = OperationTimer::start(format!("pdf {}", path.display()));
    let pdf = extract_pdf_text(path)?;
    timer.finish();
    engine_info!(
        "Extracted {} chars from {} page(s) of {}",
        pdf.text.len(),
        pdf.page_count,
        path.display()
    );

    Ok(AcquiredText {
        source: SourceRef::Pdf(path.to_path_buf()),
        title: None,
        text: pdf.text,
    })
}
