use crate::{Activity, ErrorDialog, ModelStatus};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub url_input: String,
    pub article: String,
    pub summary: String,
    pub activity: Activity,
    pub model: ModelStatus,
    pub actions_enabled: bool,
    pub error: Option<ErrorDialog>,
    pub last_source: Option<String>,
    pub last_title: Option<String>,
    pub last_summary_at: Option<String>,
    /// Approximate model tokens in the article buffer.
    pub article_tokens: usize,
    pub exceeds_input_window: bool,
    pub dirty: bool,
}
