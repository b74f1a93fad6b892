use std::path::Path;
use std::sync::mpsc;

use eframe::egui;
use summarizer_core::{update, AppState, AppViewModel, Msg};
use summarizer_logging::engine_info;

use super::effects::EffectRunner;
use super::logging::{self, LogDestination};
use super::settings::{self, AppSettings, SETTINGS_FILENAME};
use super::ui;

pub fn run_app() -> eframe::Result<()> {
    logging::initialize(LogDestination::Both);
    let settings = settings::load_or_default(Path::new(SETTINGS_FILENAME));

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(ui::constants::WINDOW_TITLE)
            .with_inner_size([settings.window_width, settings.window_height])
            .with_min_inner_size(ui::constants::MIN_WINDOW_SIZE),
        ..Default::default()
    };

    engine_info!("Starting {}", ui::constants::APP_NAME);
    eframe::run_native(
        ui::constants::APP_NAME,
        options,
        Box::new(move |cc| Ok(Box::new(SummarizerApp::new(cc, &settings)))),
    )
}

struct SummarizerApp {
    state: AppState,
    view: AppViewModel,
    buffers: ui::render::EditBuffers,
    runner: EffectRunner,
    msg_rx: mpsc::Receiver<Msg>,
}

impl SummarizerApp {
    fn new(cc: &eframe::CreationContext<'_>, settings: &AppSettings) -> Self {
        let (msg_tx, msg_rx) = mpsc::channel::<Msg>();
        let runner = EffectRunner::new(settings.engine_config(), msg_tx, cc.egui_ctx.clone());
        let state = AppState::new();
        let view = state.view();

        Self {
            state,
            view,
            buffers: ui::render::EditBuffers::default(),
            runner,
            msg_rx,
        }
    }

    fn process_pending_messages(&mut self) {
        let inbox: Vec<Msg> = self.msg_rx.try_iter().collect();
        for msg in inbox {
            self.dispatch_msg(msg);
        }
    }

    fn dispatch_msg(&mut self, msg: Msg) {
        let mut queue = vec![msg];
        while let Some(msg) = queue.pop() {
            let state = std::mem::take(&mut self.state);
            let (mut state, effects) = update(state, msg);
            if state.consume_dirty() {
                self.view = state.view();
                self.buffers.sync_from(&self.view);
            }
            self.state = state;
            queue.extend(self.runner.run(effects));
        }
    }
}

impl eframe::App for SummarizerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_pending_messages();
        for msg in ui::render::render(ctx, &self.view, &mut self.buffers) {
            self.dispatch_msg(msg);
        }
    }
}
