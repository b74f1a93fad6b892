pub const APP_NAME: &str = "summarizer_app";
pub const WINDOW_TITLE: &str = "Text Summarizer";
pub const MIN_WINDOW_SIZE: [f32; 2] = [520.0, 420.0];

pub const INPUT_HEADING: &str = "Input Article";
pub const SUMMARY_HEADING: &str = "Summary";
pub const URL_HINT: &str = "Enter URL here...";
pub const ARTICLE_HINT: &str = "Paste an article, fetch one from a URL, or load a PDF.";

pub const BUTTON_FETCH: &str = "Fetch from URL";
pub const BUTTON_LOAD_PDF: &str = "Load PDF";
pub const BUTTON_CLEAR: &str = "Clear";
pub const BUTTON_SUMMARIZE: &str = "Summarize";
pub const BUTTON_DISMISS: &str = "OK";

pub const PDF_FILTER_NAME: &str = "PDF files";
pub const PDF_FILTER_EXTENSIONS: &[&str] = &["pdf"];

pub const ARTICLE_ROWS: usize = 12;
pub const SUMMARY_ROWS: usize = 8;
pub const ERROR_DIALOG_WIDTH: f32 = 360.0;
