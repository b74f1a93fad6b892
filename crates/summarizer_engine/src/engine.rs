use std::path::PathBuf;
use std::sync::{mpsc, Arc};
use std::thread;

use summarizer_logging::{engine_error, engine_info, engine_warn, OperationTimer};

use crate::extract::{Extractor, ReadabilityLikeExtractor};
use crate::fetch::{FetchSettings, Fetcher, ReqwestFetcher};
use crate::source::{fetch_from_url, load_from_pdf};
use crate::summarize::{bart_factory, Summarizer, SummarizerFactory, SummaryParams};
use crate::{EngineEvent, ExtractionError, FailureKind, InferenceError, RequestId};

#[derive(Debug, Clone, Default)]
pub struct EngineConfig {
    pub fetch: FetchSettings,
    pub summary: SummaryParams,
}

enum AcquireCommand {
    FetchUrl { request_id: RequestId, url: String },
    LoadPdf { request_id: RequestId, path: PathBuf },
}

enum InferCommand {
    Summarize { request_id: RequestId, text: String },
}

/// Owns the two engine workers.
///
/// The acquisition worker runs URL fetches and PDF loads; the inference
/// worker constructs the model once and then serves summarize requests.
/// Each worker completes one command before taking the next.
pub struct EngineHandle {
    acquire_tx: mpsc::Sender<AcquireCommand>,
    infer_tx: mpsc::Sender<InferCommand>,
}

impl EngineHandle {
    /// Starts the engine with the HTTP fetcher and the BART backend.
    pub fn new(config: EngineConfig) -> (Self, mpsc::Receiver<EngineEvent>) {
        Self::with_components(
            Arc::new(ReqwestFetcher::new(config.fetch)),
            Arc::new(ReadabilityLikeExtractor),
            bart_factory(config.summary),
        )
    }

    pub fn with_components(
        fetcher: Arc<dyn Fetcher>,
        extractor: Arc<dyn Extractor>,
        summarizer: SummarizerFactory,
    ) -> (Self, mpsc::Receiver<EngineEvent>) {
        let (acquire_tx, acquire_rx) = mpsc::channel();
        let (infer_tx, infer_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();

        let acquire_events = event_tx.clone();
        thread::spawn(move || run_acquisition(fetcher, extractor, acquire_rx, acquire_events));
        thread::spawn(move || run_inference(summarizer, infer_rx, event_tx));

        (
            Self {
                acquire_tx,
                infer_tx,
            },
            event_rx,
        )
    }

    pub fn fetch_url(&self, request_id: RequestId, url: impl Into<String>) {
        let _ = self.acquire_tx.send(AcquireCommand::FetchUrl {
            request_id,
            url: url.into(),
        });
    }

    pub fn load_pdf(&self, request_id: RequestId, path: impl Into<PathBuf>) {
        let _ = self.acquire_tx.send(AcquireCommand::LoadPdf {
            request_id,
            path: path.into(),
        });
    }

    pub fn summarize(&self, request_id: RequestId, text: impl Into<String>) {
        let _ = self.infer_tx.send(InferCommand::Summarize {
            request_id,
            text: text.into(),
        });
    }
}

fn run_acquisition(
    fetcher: Arc<dyn Fetcher>,
    extractor: Arc<dyn Extractor>,
    commands: mpsc::Receiver<AcquireCommand>,
    events: mpsc::Sender<EngineEvent>,
) {
    let runtime = match tokio::runtime::Runtime::new() {
        Ok(runtime) => Some(runtime),
        Err(err) => {
            engine_error!("Failed to start tokio runtime: {}", err);
            None
        }
    };

    while let Ok(command) = commands.recv() {
        let event = match command {
            AcquireCommand::FetchUrl { request_id, url } => {
                let result = match runtime.as_ref() {
                    Some(runtime) => {
                        runtime.block_on(fetch_from_url(fetcher.as_ref(), extractor.as_ref(), &url))
                    }
                    None => Err(ExtractionError::url(
                        FailureKind::Network,
                        "network runtime unavailable",
                    )),
                };
                if let Err(err) = &result {
                    engine_warn!("Fetch request {} failed: {}", request_id, err);
                }
                EngineEvent::TextAcquired { request_id, result }
            }
            AcquireCommand::LoadPdf { request_id, path } => {
                let result = load_from_pdf(&path);
                if let Err(err) = &result {
                    engine_warn!("PDF request {} failed: {}", request_id, err);
                }
                EngineEvent::TextAcquired { request_id, result }
            }
        };
        if events.send(event).is_err() {
            break;
        }
    }
}

fn run_inference(
    factory: SummarizerFactory,
    commands: mpsc::Receiver<InferCommand>,
    events: mpsc::Sender<EngineEvent>,
) {
    let model: Result<Box<dyn Summarizer>, InferenceError> = factory();
    match &model {
        Ok(_) => engine_info!("Summarization model loaded"),
        Err(err) => engine_error!("Summarization model failed to load: {}", err),
    }
    let loaded = model.as_ref().map(|_| ()).map_err(Clone::clone);
    if events.send(EngineEvent::ModelLoaded(loaded)).is_err() {
        return;
    }

    while let Ok(InferCommand::Summarize { request_id, text }) = commands.recv() {
        let result = match &model {
            Ok(model) => {
                let timer = OperationTimer::start(format!("summarize request {request_id}"));
                let result = model.summarize(&text);
                timer.finish();
                result
            }
            Err(InferenceError::ModelUnavailable(reason)) => {
                Err(InferenceError::ModelUnavailable(reason.clone()))
            }
            Err(other) => Err(InferenceError::ModelUnavailable(other.to_string())),
        };
        if let Err(err) = &result {
            engine_warn!("Summarize request {} failed: {}", request_id, err);
        }
        if events
            .send(EngineEvent::Summarized { request_id, result })
            .is_err()
        {
            break;
        }
    }
}
