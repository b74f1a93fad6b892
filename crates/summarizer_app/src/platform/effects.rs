use std::sync::mpsc;
use std::thread;

use chrono::Local;
use summarizer_core::{AcquiredArticle, Effect, Msg, Source};
use summarizer_engine::{EngineConfig, EngineEvent, EngineHandle, SourceRef};
use summarizer_logging::{engine_debug, engine_info};

use super::ui::constants::{PDF_FILTER_EXTENSIONS, PDF_FILTER_NAME};

pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    /// Starts the engine and forwards its events to `msg_tx`, waking the UI
    /// through `repaint` after each one.
    pub fn new(
        config: EngineConfig,
        msg_tx: mpsc::Sender<Msg>,
        repaint: eframe::egui::Context,
    ) -> Self {
        let (engine, events) = EngineHandle::new(config);
        spawn_event_forwarder(events, msg_tx, repaint);
        Self { engine }
    }

    /// Runs `effects`. Effects that complete on the UI thread (the file
    /// picker) return their follow-up messages.
    pub fn run(&self, effects: Vec<Effect>) -> Vec<Msg> {
        let mut follow_up = Vec::new();
        for effect in effects {
            match effect {
                Effect::OpenPdfDialog => {
                    let picked = rfd::FileDialog::new()
                        .add_filter(PDF_FILTER_NAME, PDF_FILTER_EXTENSIONS)
                        .pick_file();
                    engine_debug!("PDF picker returned {:?}", picked);
                    follow_up.push(Msg::PdfChosen(picked));
                }
                Effect::FetchUrl { request_id, url } => {
                    engine_info!("FetchUrl request_id={} url={}", request_id, url);
                    self.engine.fetch_url(request_id, url);
                }
                Effect::LoadPdf { request_id, path } => {
                    engine_info!("LoadPdf request_id={} path={:?}", request_id, path);
                    self.engine.load_pdf(request_id, path);
                }
                Effect::Summarize { request_id, text } => {
                    engine_info!(
                        "Summarize request_id={} text_len={}",
                        request_id,
                        text.len()
                    );
                    self.engine.summarize(request_id, text);
                }
            }
        }
        follow_up
    }
}

fn spawn_event_forwarder(
    events: mpsc::Receiver<EngineEvent>,
    msg_tx: mpsc::Sender<Msg>,
    repaint: eframe::egui::Context,
) {
    thread::spawn(move || {
        while let Ok(event) = events.recv() {
            if msg_tx.send(map_event(event)).is_err() {
                break;
            }
            repaint.request_repaint();
        }
    });
}

fn map_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::ModelLoaded(result) => Msg::ModelLoaded(result.map_err(|err| err.to_string())),
        EngineEvent::TextAcquired { request_id, result } => Msg::TextAcquired {
            request_id,
            result: result
                .map(|acquired| AcquiredArticle {
                    source: map_source(acquired.source),
                    title: acquired.title,
                    text: acquired.text,
                })
                .map_err(|err| err.to_string()),
        },
        EngineEvent::Summarized { request_id, result } => Msg::SummaryDone {
            request_id,
            result: result.map_err(|err| err.to_string()),
            finished_at: Local::now().format("%H:%M:%S").to_string(),
        },
    }
}

fn map_source(source: SourceRef) -> Source {
    match source {
        SourceRef::Url(url) => Source::Url(url),
        SourceRef::Pdf(path) => Source::Pdf(path),
    }
}
