use std::path::Path;

use anyhow::{Context, Result};
use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::model::pollutants::Pollutant;
use crate::state::{AppState, Outcome, OutcomeSource, Tab};

// ---------------------------------------------------------------------------
// Top bar – menu, tabs, status
// ---------------------------------------------------------------------------

/// Render the top menu / tab bar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            let has_outcome = state.outcome.is_some();
            if ui
                .add_enabled(has_outcome, egui::Button::new("Export results…"))
                .clicked()
            {
                export_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if ui
            .selectable_label(state.tab == Tab::Predict, "Predict")
            .clicked()
        {
            state.tab = Tab::Predict;
        }
        if ui
            .selectable_label(state.tab == Tab::ManualCheck, "Manual check")
            .clicked()
        {
            state.tab = Tab::ManualCheck;
        }

        ui.separator();

        if let Some(msg) = &state.status_message {
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// Left side panel – input forms
// ---------------------------------------------------------------------------

/// Render the input panel for the active tab plus the rule-set toggles.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.add_space(4.0);
    ui.heading("Inputs");
    ui.separator();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            match state.tab {
                Tab::Predict => predict_form(ui, state),
                Tab::ManualCheck => manual_form(ui, state),
            }

            ui.separator();
            rule_set_toggles(ui, state);
        });
}

fn predict_form(ui: &mut Ui, state: &mut AppState) {
    egui::Grid::new("predict_form")
        .num_columns(2)
        .spacing([8.0, 6.0])
        .show(ui, |ui: &mut Ui| {
            ui.label("Year");
            ui.add(egui::DragValue::new(&mut state.year_input).range(2000..=2100));
            ui.end_row();

            ui.label("Station ID");
            ui.text_edit_singleline(&mut state.station_input);
            ui.end_row();
        });

    ui.add_space(6.0);
    if ui.button("Predict").clicked() {
        state.run_prediction();
    }

    ui.add_space(4.0);
    let n_stations = state.schema.station_ids().count();
    ui.label(
        RichText::new(format!("{n_stations} stations in the trained model"))
            .small()
            .weak(),
    );
}

fn manual_form(ui: &mut Ui, state: &mut AppState) {
    egui::Grid::new("manual_form")
        .num_columns(2)
        .spacing([8.0, 6.0])
        .show(ui, |ui: &mut Ui| {
            for p in Pollutant::ALL {
                ui.label(p.name());
                let mut value = state.manual_levels.get(p);
                let response = ui.add(
                    egui::DragValue::new(&mut value)
                        .speed(0.1)
                        .range(0.0..=f64::INFINITY)
                        .suffix(" mg/L"),
                );
                if response.changed() {
                    state.manual_levels.set(p, value);
                }
                ui.end_row();
            }
        });

    ui.add_space(6.0);
    if ui.button("Check safety").clicked() {
        state.run_manual_check();
    }
}

fn rule_set_toggles(ui: &mut Ui, state: &mut AppState) {
    ui.strong("Rule sets");
    let mut changed = false;
    for toggle in &mut state.rule_sets {
        if ui.checkbox(&mut toggle.enabled, toggle.set.name).changed() {
            changed = true;
        }
    }
    if changed {
        state.reclassify();
    }
}

// ---------------------------------------------------------------------------
// CSV export
// ---------------------------------------------------------------------------

fn export_dialog(state: &mut AppState) {
    let Some(outcome) = state.outcome.clone() else {
        return;
    };

    let file = rfd::FileDialog::new()
        .set_title("Export results")
        .set_file_name("water_quality.csv")
        .add_filter("CSV", &["csv"])
        .save_file();

    if let Some(path) = file {
        match write_outcome_csv(&path, &outcome) {
            Ok(()) => {
                log::info!("exported results to {}", path.display());
                state.status_message = None;
            }
            Err(e) => {
                log::error!("export failed: {e:#}");
                state.status_message = Some(format!("Export failed: {e:#}"));
            }
        }
    }
}

/// Write the outcome as CSV: one row per pollutant level, then one row per
/// evaluated rule set with its verdict and issues.
fn write_outcome_csv(path: &Path, outcome: &Outcome) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .flexible(true)
        .from_path(path)
        .context("creating CSV file")?;

    match &outcome.source {
        OutcomeSource::Predicted { year, station_id } => {
            let detail = format!("station {station_id}, {year}");
            writer.write_record(["source", "predicted", detail.as_str()])?;
        }
        OutcomeSource::Manual => writer.write_record(["source", "manual", ""])?,
    }

    writer.write_record(["pollutant", "level_mg_l", ""])?;
    for p in Pollutant::ALL {
        let level = format!("{:.2}", outcome.levels.get(p));
        writer.write_record([p.name(), level.as_str(), ""])?;
    }

    writer.write_record(["rule_set", "passed", "issues"])?;
    for report in &outcome.reports {
        let issues = report.assessment.issues.join("; ");
        writer.write_record([
            report.set_name,
            if report.assessment.passed() { "yes" } else { "no" },
            issues.as_str(),
        ])?;
    }

    writer.flush().context("writing CSV file")?;
    Ok(())
}
