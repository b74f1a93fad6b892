use std::path::PathBuf;

use crate::{RequestId, Source};

/// Article text delivered by a URL fetch or PDF load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcquiredArticle {
    pub source: Source,
    pub title: Option<String>,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the URL field.
    UrlChanged(String),
    /// User edited the article input area.
    ArticleEdited(String),
    /// User clicked "Fetch from URL".
    FetchUrlClicked,
    /// User clicked "Load PDF".
    LoadPdfClicked,
    /// The file picker closed; `None` when the user cancelled.
    PdfChosen(Option<PathBuf>),
    /// User clicked "Summarize".
    SummarizeClicked,
    /// User clicked "Clear".
    ClearClicked,
    /// User acknowledged the error dialog.
    ErrorDismissed,
    /// The inference worker finished loading the model.
    ModelLoaded(Result<(), String>),
    /// A fetch or PDF load finished.
    TextAcquired {
        request_id: RequestId,
        result: Result<AcquiredArticle, String>,
    },
    /// A summarize request finished. `finished_at` is a display timestamp.
    SummaryDone {
        request_id: RequestId,
        result: Result<String, String>,
        finished_at: String,
    },
    /// Fallback for placeholder wiring.
    NoOp,
}
