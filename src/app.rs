use eframe::egui;

use crate::state::AppState;
use crate::ui::{batch, form, panels};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct PredictorApp {
    pub state: AppState,
}

impl PredictorApp {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl eframe::App for PredictorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: navigation ----
        egui::SidePanel::left("nav_panel")
            .default_width(260.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: form + batch results ----
        egui::CentralPanel::default().show(ctx, |ui| {
            form::prediction_form(ui, &mut self.state);
            if let Some(report) = &self.state.batch {
                batch::batch_view(ui, report);
            }
        });
    }
}
