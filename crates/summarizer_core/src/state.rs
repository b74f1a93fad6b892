use std::fmt;
use std::path::PathBuf;

use crate::token::{estimate_tokens, INPUT_TOKEN_WINDOW};
use crate::view_model::AppViewModel;

pub type RequestId = u64;

/// What the shell is currently waiting on. Anything but `Idle` blocks new actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Activity {
    #[default]
    Idle,
    FetchingUrl,
    LoadingPdf,
    Summarizing,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ModelStatus {
    #[default]
    Loading,
    Ready,
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Url(String),
    Pdf(PathBuf),
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Url(url) => write!(f, "{url}"),
            Source::Pdf(path) => write!(f, "{}", path.display()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Rejected before any engine call.
    Validation,
    /// Fetch, decode or PDF failure.
    Extraction,
    /// Model load or generation failure.
    Inference,
}

impl ErrorKind {
    pub fn title(self) -> &'static str {
        match self {
            ErrorKind::Validation => "Missing input",
            ErrorKind::Extraction => "Could not load article",
            ErrorKind::Inference => "Summarization failed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorDialog {
    pub kind: ErrorKind,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    url_input: String,
    article: String,
    summary: String,
    activity: Activity,
    model: ModelStatus,
    pending: Option<RequestId>,
    last_request_id: RequestId,
    error: Option<ErrorDialog>,
    last_source: Option<Source>,
    last_title: Option<String>,
    last_summary_at: Option<String>,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> AppViewModel {
        let article_tokens = estimate_tokens(&self.article);
        AppViewModel {
            url_input: self.url_input.clone(),
            article: self.article.clone(),
            summary: self.summary.clone(),
            activity: self.activity,
            model: self.model.clone(),
            actions_enabled: self.accepts_actions(),
            error: self.error.clone(),
            last_source: self.last_source.as_ref().map(ToString::to_string),
            last_title: self.last_title.clone(),
            last_summary_at: self.last_summary_at.clone(),
            article_tokens,
            exceeds_input_window: article_tokens > INPUT_TOKEN_WINDOW,
            dirty: self.dirty,
        }
    }

    pub fn url_input(&self) -> &str {
        &self.url_input
    }

    pub fn article(&self) -> &str {
        &self.article
    }

    pub fn summary(&self) -> &str {
        &self.summary
    }

    pub fn activity(&self) -> Activity {
        self.activity
    }

    pub fn error(&self) -> Option<&ErrorDialog> {
        self.error.as_ref()
    }

    /// Returns whether a render is due and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// New actions are accepted only when nothing is in flight and no
    /// error dialog is waiting to be dismissed.
    pub(crate) fn accepts_actions(&self) -> bool {
        self.activity == Activity::Idle && self.error.is_none()
    }

    pub(crate) fn set_url_input(&mut self, url: String) {
        if self.url_input != url {
            self.url_input = url;
            self.mark_dirty();
        }
    }

    pub(crate) fn set_article(&mut self, text: String) {
        if self.article != text {
            self.article = text;
            self.mark_dirty();
        }
    }

    pub(crate) fn clear_buffers(&mut self) {
        self.article.clear();
        self.summary.clear();
        self.last_source = None;
        self.last_title = None;
        self.mark_dirty();
    }

    pub(crate) fn begin(&mut self, activity: Activity) -> RequestId {
        self.last_request_id += 1;
        self.pending = Some(self.last_request_id);
        self.activity = activity;
        self.mark_dirty();
        self.last_request_id
    }

    /// Settles the in-flight request if `request_id` is the one awaited.
    pub(crate) fn settle(&mut self, request_id: RequestId) -> bool {
        if self.pending != Some(request_id) {
            return false;
        }
        self.pending = None;
        self.activity = Activity::Idle;
        self.mark_dirty();
        true
    }

    pub(crate) fn show_error(&mut self, kind: ErrorKind, message: impl Into<String>) {
        self.error = Some(ErrorDialog {
            kind,
            message: message.into(),
        });
        self.mark_dirty();
    }

    pub(crate) fn dismiss_error(&mut self) {
        if self.error.take().is_some() {
            self.mark_dirty();
        }
    }

    pub(crate) fn replace_article(&mut self, source: Source, title: Option<String>, text: String) {
        self.article = text;
        self.last_source = Some(source);
        self.last_title = title;
        self.mark_dirty();
    }

    pub(crate) fn replace_summary(&mut self, summary: String, finished_at: String) {
        self.summary = summary;
        self.last_summary_at = Some(finished_at);
        self.mark_dirty();
    }

    pub(crate) fn set_model_status(&mut self, status: ModelStatus) {
        self.model = status;
        self.mark_dirty();
    }
}
