use eframe::egui::{Color32, Ui};
use egui_extras::{Column, TableBuilder};
use egui_plot::{Bar, BarChart, Plot};

use disease_predictor::data::batch::{outcome_key, BatchReport};
use disease_predictor::PredictionOutcome;

// ---------------------------------------------------------------------------
// Batch results (below the form)
// ---------------------------------------------------------------------------

const ORDER: [PredictionOutcome; 3] = [
    PredictionOutcome::Positive,
    PredictionOutcome::Negative,
    PredictionOutcome::InvalidInput,
];

fn outcome_color(outcome: PredictionOutcome) -> Color32 {
    match outcome {
        PredictionOutcome::Positive => Color32::from_rgb(200, 70, 60),
        PredictionOutcome::Negative => Color32::from_rgb(60, 150, 90),
        PredictionOutcome::InvalidInput => Color32::from_rgb(220, 150, 30),
        PredictionOutcome::ModelUnavailable => Color32::GRAY,
    }
}

/// Render the summary chart and per-record table for a batch run.
pub fn batch_view(ui: &mut Ui, report: &BatchReport) {
    ui.separator();
    ui.strong(format!("Batch: {} ({} records)", report.source, report.len()));

    if report.count(PredictionOutcome::ModelUnavailable) > 0 {
        ui.label(PredictionOutcome::ModelUnavailable.message(report.panel));
        return;
    }

    let bars: Vec<Bar> = ORDER
        .iter()
        .enumerate()
        .map(|(i, &outcome)| {
            Bar::new(i as f64, report.count(outcome) as f64)
                .name(outcome_key(outcome))
                .fill(outcome_color(outcome))
        })
        .collect();

    Plot::new("batch_summary")
        .height(140.0)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .show_x(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars).width(0.6));
        });

    TableBuilder::new(ui)
        .striped(true)
        .column(Column::auto().at_least(48.0))
        .column(Column::remainder())
        .header(20.0, |mut header| {
            header.col(|ui| {
                ui.strong("Row");
            });
            header.col(|ui| {
                ui.strong("Result");
            });
        })
        .body(|body| {
            body.rows(18.0, report.len(), |mut row| {
                let i = row.index();
                let outcome = report.outcomes[i];
                row.col(|ui| {
                    ui.label(i.to_string());
                });
                row.col(|ui| {
                    ui.colored_label(outcome_color(outcome), outcome.message(report.panel));
                });
            });
        });
}
