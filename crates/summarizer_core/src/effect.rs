use std::path::PathBuf;

use crate::RequestId;

/// Work the shell must perform outside the pure update function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Show the native file picker restricted to `*.pdf`.
    OpenPdfDialog,
    FetchUrl { request_id: RequestId, url: String },
    LoadPdf { request_id: RequestId, path: PathBuf },
    Summarize { request_id: RequestId, text: String },
}
