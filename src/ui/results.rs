use eframe::egui::{self, Color32, RichText, Ui};
use egui_plot::{Bar, BarChart, Plot};

use crate::model::pollutants::Pollutant;
use crate::state::{AppState, Outcome, OutcomeSource};

// ---------------------------------------------------------------------------
// Results view (central panel)
// ---------------------------------------------------------------------------

/// Render the latest outcome: levels table, per-rule-set verdicts, bar chart.
pub fn results_view(ui: &mut Ui, state: &AppState) {
    let outcome = match &state.outcome {
        Some(o) => o,
        None => {
            ui.centered_and_justified(|ui: &mut Ui| {
                ui.heading("Run a prediction or a manual check to see results");
            });
            return;
        }
    };

    match &outcome.source {
        OutcomeSource::Predicted { year, station_id } => {
            ui.heading(format!("Prediction for station '{station_id}' in {year}"));
        }
        OutcomeSource::Manual => {
            ui.heading("Manual safety check");
        }
    }
    ui.separator();

    ui.columns(2, |cols| {
        levels_table(&mut cols[0], state, outcome);
        verdicts(&mut cols[1], outcome);
    });

    ui.separator();
    levels_chart(ui, state, outcome);
}

fn levels_table(ui: &mut Ui, state: &AppState, outcome: &Outcome) {
    ui.strong("Pollutant levels");
    egui::Grid::new("levels_table")
        .num_columns(2)
        .striped(true)
        .spacing([16.0, 4.0])
        .show(ui, |ui: &mut Ui| {
            for p in Pollutant::ALL {
                let color = state.colors.color_for(p);
                ui.label(RichText::new(p.name()).color(color));
                ui.label(format!("{:.2} mg/L", outcome.levels.get(p)));
                ui.end_row();
            }
        });
}

fn verdicts(ui: &mut Ui, outcome: &Outcome) {
    ui.strong("Safety classification");
    for report in &outcome.reports {
        if report.assessment.passed() {
            ui.label(
                RichText::new(format!("✔ {}: pass", report.set_name))
                    .color(Color32::DARK_GREEN),
            );
        } else {
            ui.label(
                RichText::new(format!("✘ {}: fail", report.set_name)).color(Color32::RED),
            );
            for issue in &report.assessment.issues {
                ui.label(RichText::new(format!("    • {issue}")).color(Color32::RED));
            }
        }
    }
    if outcome.reports.is_empty() {
        ui.label(RichText::new("No rule sets enabled").weak());
    }
}

fn levels_chart(ui: &mut Ui, state: &AppState, outcome: &Outcome) {
    let bars: Vec<Bar> = Pollutant::ALL
        .iter()
        .enumerate()
        .map(|(i, &p)| {
            Bar::new(i as f64, outcome.levels.get(p))
                .name(p.name())
                .fill(state.colors.color_for(p))
                .width(0.6)
        })
        .collect();

    Plot::new("levels_chart")
        .y_axis_label("mg/L")
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .allow_boxed_zoom(false)
        .show_x(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars));
        });
}
