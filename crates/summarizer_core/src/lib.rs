//! Summarizer core: pure state machine and view-model helpers.
mod effect;
mod msg;
mod state;
mod token;
mod update;
mod view_model;

pub use effect::Effect;
pub use msg::{AcquiredArticle, Msg};
pub use state::{Activity, AppState, ErrorDialog, ErrorKind, ModelStatus, RequestId, Source};
pub use token::{estimate_tokens, INPUT_TOKEN_WINDOW};
pub use update::{update, EMPTY_INPUT_MESSAGE, EMPTY_URL_MESSAGE};
pub use view_model::AppViewModel;
