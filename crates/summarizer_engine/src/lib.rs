//! Summarizer engine: article acquisition and model inference workers.
mod decode;
mod engine;
mod extract;
mod fetch;
mod pdf;
mod source;
mod summarize;
mod types;

pub use decode::{decode_page, DecodedPage};
pub use engine::{EngineConfig, EngineHandle};
pub use extract::{ExtractedArticle, Extractor, ReadabilityLikeExtractor};
pub use fetch::{parse_article_url, FetchSettings, Fetcher, ReqwestFetcher};
pub use pdf::{extract_pdf_text, PdfText};
pub use source::{fetch_from_url, load_from_pdf};
pub use summarize::{
    bart_factory, BartSummarizer, Summarizer, SummarizerFactory, SummaryParams, DEFAULT_MODEL_NAME,
};
pub use types::{
    AcquiredText, EngineEvent, ExtractionError, FailureKind, FetchMetadata, FetchOutput,
    InferenceError, Origin, RequestId, SourceRef,
};
