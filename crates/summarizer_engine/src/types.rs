use std::fmt;
use std::path::PathBuf;

/// Identifier the shell attaches to every acquisition or summarize request.
pub type RequestId = u64;

/// Where a piece of article text came from. Used once per request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceRef {
    Url(String),
    Pdf(PathBuf),
}

impl fmt::Display for SourceRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceRef::Url(url) => write!(f, "{url}"),
            SourceRef::Pdf(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Article text produced by one of the acquisition paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcquiredText {
    pub source: SourceRef,
    pub title: Option<String>,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchOutput {
    pub bytes: Vec<u8>,
    pub metadata: FetchMetadata,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchMetadata {
    pub final_url: String,
    pub redirect_count: usize,
    pub content_type: Option<String>,
}

/// Events the engine workers report back to the shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    ModelLoaded(Result<(), InferenceError>),
    TextAcquired {
        request_id: RequestId,
        result: Result<AcquiredText, ExtractionError>,
    },
    Summarized {
        request_id: RequestId,
        result: Result<String, InferenceError>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    Url,
    Pdf,
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Origin::Url => write!(f, "URL"),
            Origin::Pdf => write!(f, "PDF"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    HttpStatus(u16),
    Timeout,
    RedirectLimitExceeded,
    TooLarge { max_bytes: u64, actual: Option<u64> },
    UnsupportedContentType { content_type: String },
    Network,
    Decode,
    NoArticleText,
    PdfOpen,
    PdfPage(u32),
    PdfEmpty,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::RedirectLimitExceeded => write!(f, "redirect limit exceeded"),
            FailureKind::TooLarge { max_bytes, actual } => {
                write!(f, "response too large (max {max_bytes}, actual {actual:?})")
            }
            FailureKind::UnsupportedContentType { content_type } => {
                write!(f, "unsupported content type {content_type}")
            }
            FailureKind::Network => write!(f, "network error"),
            FailureKind::Decode => write!(f, "undecodable content"),
            FailureKind::NoArticleText => write!(f, "no article text found"),
            FailureKind::PdfOpen => write!(f, "cannot open pdf"),
            FailureKind::PdfPage(page) => write!(f, "cannot extract page {page}"),
            FailureKind::PdfEmpty => write!(f, "pdf has no extractable text"),
        }
    }
}

/// Failure of any acquisition path. The input buffer stays untouched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Error extracting text from {origin}: {message}")]
pub struct ExtractionError {
    pub origin: Origin,
    pub kind: FailureKind,
    pub message: String,
}

impl ExtractionError {
    pub(crate) fn url(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            origin: Origin::Url,
            kind,
            message: message.into(),
        }
    }

    pub(crate) fn pdf(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            origin: Origin::Pdf,
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InferenceError {
    #[error("invalid summary parameters: {0}")]
    InvalidParams(String),
    #[error("summarization model unavailable: {0}")]
    ModelUnavailable(String),
    #[error("summarization failed: {0}")]
    Generation(String),
    #[error("the model produced an empty summary")]
    EmptySummary,
}
