use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use disease_predictor::{Panel, PredictionOutcome};

use crate::state::AppState;

const COLUMNS: usize = 3;

// ---------------------------------------------------------------------------
// Central panel – input form for the selected panel
// ---------------------------------------------------------------------------

/// Render the selected panel's form, submit button and result.
pub fn prediction_form(ui: &mut Ui, state: &mut AppState) {
    let panel = state.selected;
    let spec = panel.spec();

    ui.heading(spec.title);
    ui.add_space(8.0);

    ScrollArea::vertical()
        .auto_shrink([false, true])
        .max_height(ui.available_height() * 0.6)
        .show(ui, |ui: &mut Ui| {
            // Fields flow left to right across three columns, row by row.
            let form = state.form_mut(panel);
            egui::Grid::new(("form", panel.index()))
                .num_columns(COLUMNS)
                .spacing([24.0, 12.0])
                .show(ui, |ui: &mut Ui| {
                    for (i, (label, value)) in spec.labels().zip(form.inputs.iter_mut()).enumerate() {
                        ui.vertical(|ui: &mut Ui| {
                            ui.label(label);
                            ui.text_edit_singleline(value);
                        });
                        if (i + 1) % COLUMNS == 0 {
                            ui.end_row();
                        }
                    }
                });
        });

    ui.add_space(8.0);
    ui.horizontal(|ui: &mut Ui| {
        if ui.button(spec.button_label).clicked() {
            state.submit(panel);
        }
        if ui.button("Clear").clicked() {
            state.clear(panel);
        }
    });

    if let Some(outcome) = state.form(panel).outcome {
        ui.add_space(8.0);
        outcome_banner(ui, panel, outcome);
    }
}

fn outcome_banner(ui: &mut Ui, panel: Panel, outcome: PredictionOutcome) {
    let (prefix, color) = if outcome.is_prediction() {
        ("✅", Color32::from_rgb(40, 160, 70))
    } else if outcome == PredictionOutcome::InvalidInput {
        ("⚠", Color32::from_rgb(220, 150, 30))
    } else {
        ("❌", Color32::RED)
    };

    egui::Frame::group(ui.style()).show(ui, |ui: &mut Ui| {
        ui.label(
            RichText::new(format!("{prefix} {}", outcome.message(panel)))
                .color(color)
                .strong(),
        );
    });
}
