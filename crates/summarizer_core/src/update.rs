use crate::{Activity, AppState, Effect, ErrorKind, ModelStatus, Msg};

pub const EMPTY_URL_MESSAGE: &str = "Please enter a valid URL.";
pub const EMPTY_INPUT_MESSAGE: &str = "Please provide text to summarize.";

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::UrlChanged(url) => {
            state.set_url_input(url);
            Vec::new()
        }
        Msg::ArticleEdited(text) => {
            state.set_article(text);
            Vec::new()
        }
        // Only one action may be in flight; clicks while busy are dropped, not queued.
        Msg::FetchUrlClicked
        | Msg::LoadPdfClicked
        | Msg::SummarizeClicked
        | Msg::ClearClicked
            if !state.accepts_actions() =>
        {
            Vec::new()
        }
        Msg::FetchUrlClicked => {
            let url = state.url_input().trim().to_string();
            if url.is_empty() {
                state.show_error(ErrorKind::Validation, EMPTY_URL_MESSAGE);
                Vec::new()
            } else {
                let request_id = state.begin(Activity::FetchingUrl);
                vec![Effect::FetchUrl { request_id, url }]
            }
        }
        Msg::LoadPdfClicked => vec![Effect::OpenPdfDialog],
        Msg::PdfChosen(None) => Vec::new(),
        Msg::PdfChosen(Some(path)) => {
            if state.accepts_actions() {
                let request_id = state.begin(Activity::LoadingPdf);
                vec![Effect::LoadPdf { request_id, path }]
            } else {
                Vec::new()
            }
        }
        Msg::SummarizeClicked => {
            let text = state.article().trim().to_string();
            if text.is_empty() {
                state.show_error(ErrorKind::Validation, EMPTY_INPUT_MESSAGE);
                Vec::new()
            } else {
                let request_id = state.begin(Activity::Summarizing);
                vec![Effect::Summarize { request_id, text }]
            }
        }
        Msg::ClearClicked => {
            state.clear_buffers();
            Vec::new()
        }
        Msg::ErrorDismissed => {
            state.dismiss_error();
            Vec::new()
        }
        Msg::ModelLoaded(result) => {
            state.set_model_status(match result {
                Ok(()) => ModelStatus::Ready,
                Err(message) => ModelStatus::Failed(message),
            });
            Vec::new()
        }
        Msg::TextAcquired { request_id, result } => {
            if state.settle(request_id) {
                match result {
                    Ok(article) => {
                        state.replace_article(article.source, article.title, article.text)
                    }
                    Err(message) => state.show_error(ErrorKind::Extraction, message),
                }
            }
            Vec::new()
        }
        Msg::SummaryDone {
            request_id,
            result,
            finished_at,
        } => {
            if state.settle(request_id) {
                match result {
                    Ok(summary) => state.replace_summary(summary, finished_at),
                    Err(message) => state.show_error(ErrorKind::Inference, message),
                }
            }
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
