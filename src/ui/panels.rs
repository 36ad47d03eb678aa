use eframe::egui::{self, Color32, RichText, Ui};

use disease_predictor::data::batch::{self, BatchReport};
use disease_predictor::{Dispatcher, Panel};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – panel navigation
// ---------------------------------------------------------------------------

/// Render the sidebar menu.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.heading("Prediction of Disease Outbreaks System");
    });
    ui.separator();

    for panel in Panel::ALL {
        let loaded = state.registry.handle(panel).is_some();

        ui.horizontal(|ui: &mut Ui| {
            if ui
                .selectable_label(state.selected == panel, panel.spec().name)
                .clicked()
            {
                state.select(panel);
            }

            // Model status marker, diagnostic on hover.
            let marker = if loaded {
                RichText::new("●").color(Color32::GREEN)
            } else {
                RichText::new("●").color(Color32::RED)
            };
            let response = ui.label(marker);
            match state.registry.load_error(panel) {
                Some(e) => {
                    response.on_hover_text(e.to_string());
                }
                None => {
                    response.on_hover_text("Model loaded");
                }
            }
        });
    }

    ui.separator();
    ui.label(format!(
        "{}/{} models loaded",
        state.registry.loaded_count(),
        Panel::ALL.len()
    ));
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open batch…").clicked() {
                open_batch_dialog(state);
                ui.close_menu();
            }
            if state.batch.is_some() && ui.button("Close batch").clicked() {
                state.batch = None;
                ui.close_menu();
            }
        });

        ui.separator();
        ui.label(state.selected.spec().name);

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_batch_dialog(state: &mut AppState) {
    let panel = state.selected;
    let file = rfd::FileDialog::new()
        .set_title(format!("Open batch for {panel}"))
        .add_filter("Supported files", &["csv", "json"])
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .pick_file();

    let Some(path) = file else {
        return;
    };

    match batch::load_file(&path, panel) {
        Ok(records) => {
            let report = BatchReport::run(
                &Dispatcher::new(&state.registry),
                panel,
                path.display().to_string(),
                &records,
            );
            log::info!(
                "Ran {} records from {} through {panel}",
                report.len(),
                report.source
            );
            state.batch = Some(report);
            state.status_message = None;
        }
        Err(e) => {
            log::error!("Failed to load batch file: {e:#}");
            state.status_message = Some(format!("Error: {e:#}"));
        }
    }
}
