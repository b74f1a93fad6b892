use eframe::egui::{self, Color32, RichText};
use summarizer_core::{Activity, AppViewModel, ErrorDialog, ModelStatus, Msg, INPUT_TOKEN_WINDOW};

use super::constants::*;

/// Text the user is editing. egui needs owned buffers; they are refreshed
/// from the view model whenever core state changes.
#[derive(Debug, Default)]
pub struct EditBuffers {
    pub url: String,
    pub article: String,
}

impl EditBuffers {
    pub fn sync_from(&mut self, view: &AppViewModel) {
        if self.url != view.url_input {
            self.url.clone_from(&view.url_input);
        }
        if self.article != view.article {
            self.article.clone_from(&view.article);
        }
    }
}

/// Draws one frame and returns the messages produced by user input.
pub fn render(ctx: &egui::Context, view: &AppViewModel, buffers: &mut EditBuffers) -> Vec<Msg> {
    let mut msgs = Vec::new();

    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            if view.activity != Activity::Idle {
                ui.spinner();
            }
            ui.label(status_text(view));
        });
    });

    egui::CentralPanel::default().show(ctx, |ui| {
        ui.add_enabled_ui(view.error.is_none(), |ui| {
            input_section(ui, view, buffers, &mut msgs);
            ui.add_space(8.0);
            ui.vertical_centered(|ui| {
                let summarize = egui::Button::new(RichText::new(BUTTON_SUMMARIZE).strong().size(16.0));
                if ui.add_enabled(view.actions_enabled, summarize).clicked() {
                    msgs.push(Msg::SummarizeClicked);
                }
            });
            ui.add_space(8.0);
            summary_section(ui, view);
        });
    });

    if let Some(error) = &view.error {
        if error_dialog(ctx, error) {
            msgs.push(Msg::ErrorDismissed);
        }
    }

    msgs
}

fn input_section(
    ui: &mut egui::Ui,
    view: &AppViewModel,
    buffers: &mut EditBuffers,
    msgs: &mut Vec<Msg>,
) {
    ui.heading(INPUT_HEADING);
    ui.horizontal(|ui| {
        let url = ui.add(
            egui::TextEdit::singleline(&mut buffers.url)
                .hint_text(URL_HINT)
                .desired_width(ui.available_width() - 260.0),
        );
        if url.changed() {
            msgs.push(Msg::UrlChanged(buffers.url.clone()));
        }
        let submitted = url.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        let fetch = ui.add_enabled(view.actions_enabled, egui::Button::new(BUTTON_FETCH));
        if fetch.clicked() || (submitted && view.actions_enabled) {
            msgs.push(Msg::FetchUrlClicked);
        }
        if ui
            .add_enabled(view.actions_enabled, egui::Button::new(BUTTON_LOAD_PDF))
            .clicked()
        {
            msgs.push(Msg::LoadPdfClicked);
        }
        if ui
            .add_enabled(view.actions_enabled, egui::Button::new(BUTTON_CLEAR))
            .clicked()
        {
            msgs.push(Msg::ClearClicked);
        }
    });

    egui::ScrollArea::vertical()
        .id_salt("article_scroll")
        .max_height(ui.available_height() * 0.5)
        .show(ui, |ui| {
            let edit = ui.add(
                egui::TextEdit::multiline(&mut buffers.article)
                    .hint_text(ARTICLE_HINT)
                    .desired_rows(ARTICLE_ROWS)
                    .desired_width(f32::INFINITY),
            );
            if edit.changed() {
                msgs.push(Msg::ArticleEdited(buffers.article.clone()));
            }
        });

    let tokens = format!("~{} / {} tokens", view.article_tokens, INPUT_TOKEN_WINDOW);
    if view.exceeds_input_window {
        ui.label(
            RichText::new(format!("{tokens}: text past the limit will be ignored"))
                .color(Color32::from_rgb(200, 120, 0)),
        );
    } else {
        ui.weak(tokens);
    }
}

fn summary_section(ui: &mut egui::Ui, view: &AppViewModel) {
    ui.heading(SUMMARY_HEADING);
    egui::ScrollArea::vertical()
        .id_salt("summary_scroll")
        .show(ui, |ui| {
            // A `&str` buffer makes the text area read-only but still selectable.
            let mut summary = view.summary.as_str();
            ui.add(
                egui::TextEdit::multiline(&mut summary)
                    .desired_rows(SUMMARY_ROWS)
                    .desired_width(f32::INFINITY),
            );
        });
}

/// Returns true once the user dismisses the dialog.
fn error_dialog(ctx: &egui::Context, error: &ErrorDialog) -> bool {
    let response = egui::Modal::new(egui::Id::new("error_dialog")).show(ctx, |ui| {
        ui.set_width(ERROR_DIALOG_WIDTH);
        ui.heading(error.kind.title());
        ui.add_space(4.0);
        ui.label(error.message.as_str());
        ui.add_space(8.0);
        ui.vertical_centered(|ui| ui.button(BUTTON_DISMISS).clicked()).inner
    });
    response.inner || response.should_close()
}

fn status_text(view: &AppViewModel) -> String {
    let activity = match view.activity {
        Activity::Idle => "Ready",
        Activity::FetchingUrl => "Fetching article...",
        Activity::LoadingPdf => "Reading PDF...",
        Activity::Summarizing => "Summarizing...",
    };
    let model = match &view.model {
        ModelStatus::Loading => "Model: loading".to_string(),
        ModelStatus::Ready => "Model: ready".to_string(),
        ModelStatus::Failed(reason) => format!("Model: unavailable ({reason})"),
    };

    let mut parts = vec![activity.to_string(), model];
    match (&view.last_title, &view.last_source) {
        (Some(title), Some(source)) => parts.push(format!("Source: {title} ({source})")),
        (None, Some(source)) => parts.push(format!("Source: {source}")),
        _ => {}
    }
    if let Some(at) = &view.last_summary_at {
        parts.push(format!("Last summary: {at}"));
    }
    parts.join(" | ")
}
