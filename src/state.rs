use crate::color::PollutantColors;
use crate::model::pollutants::PollutantVector;
use crate::model::predictor::LinearModel;
use crate::model::schema::{EncodeError, ModelColumnSchema};
use crate::rules::{Assessment, RuleSet, builtin_sets};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// Which input form is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Predict,
    ManualCheck,
}

/// A rule set plus whether the user wants it evaluated.
#[derive(Debug, Clone)]
pub struct RuleSetToggle {
    pub set: RuleSet,
    pub enabled: bool,
}

/// Where the levels of an [`Outcome`] came from.
#[derive(Debug, Clone, PartialEq)]
pub enum OutcomeSource {
    Predicted { year: i32, station_id: String },
    Manual,
}

/// One rule set's verdict within an outcome.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleReport {
    pub set_name: &'static str,
    pub assessment: Assessment,
}

/// The result of the most recent predict or manual-check request.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    pub source: OutcomeSource,
    pub levels: PollutantVector,
    pub reports: Vec<RuleReport>,
}

/// The full UI state, independent of rendering. The schema and model are
/// loaded once at startup and never mutated afterwards; every request reads
/// them through `&self`.
pub struct AppState {
    /// Column schema the predictor was trained with (read-only).
    pub schema: ModelColumnSchema,

    /// The pre-trained predictor (read-only).
    pub model: LinearModel,

    /// Built-in rule sets with their evaluation toggles.
    pub rule_sets: Vec<RuleSetToggle>,

    /// Active input form.
    pub tab: Tab,

    /// Predict-form inputs.
    pub year_input: i32,
    pub station_input: String,

    /// Manual-check form inputs.
    pub manual_levels: PollutantVector,

    /// Result of the last request (None until the first submission).
    pub outcome: Option<Outcome>,

    /// Status / warning message shown in the UI.
    pub status_message: Option<String>,

    /// Bar-chart colours, fixed per pollutant.
    pub colors: PollutantColors,
}

impl AppState {
    pub fn new(model: LinearModel, schema: ModelColumnSchema) -> Self {
        let rule_sets = builtin_sets()
            .into_iter()
            .map(|set| RuleSetToggle {
                // Legacy set off by default; Drinkable/Usable on.
                enabled: set.name != "General safety",
                set,
            })
            .collect();

        Self {
            schema,
            model,
            rule_sets,
            tab: Tab::Predict,
            year_input: 2022,
            station_input: "1".to_string(),
            manual_levels: PollutantVector {
                nh4: 0.3,
                bsk5: 2.0,
                suspended: 5.0,
                o2: 8.0,
                no3: 10.0,
                no2: 0.2,
                so4: 100.0,
                po4: 0.1,
                cl: 100.0,
            },
            outcome: None,
            status_message: None,
            colors: PollutantColors::default(),
        }
    }

    /// Predict request: encode → predict → classify. On any failure the
    /// predictor is not (re)invoked and only the status message changes.
    pub fn run_prediction(&mut self) {
        let features = match self.schema.encode(self.year_input, &self.station_input) {
            Ok(features) => features,
            Err(EncodeError::EmptyStationId) => {
                self.status_message = Some("Please enter a valid Station ID.".to_string());
                return;
            }
        };

        let station_id = self.station_input.trim().to_string();
        if !self.schema.knows_station(&station_id) {
            log::warn!(
                "station id '{station_id}' not in the trained schema; using baseline encoding"
            );
        }

        match self.model.predict(&features) {
            Ok(levels) => {
                log::info!(
                    "predicted pollutants for station '{station_id}' in {}",
                    self.year_input
                );
                self.outcome = Some(self.classify(
                    levels,
                    OutcomeSource::Predicted {
                        year: self.year_input,
                        station_id: station_id.clone(),
                    },
                ));
                self.status_message = if self.schema.knows_station(&station_id) {
                    None
                } else {
                    Some(format!(
                        "Station '{station_id}' was not seen during training; \
                         prediction uses the baseline station profile."
                    ))
                };
            }
            Err(e) => {
                log::error!("prediction failed: {e}");
                self.status_message = Some(format!("Prediction failed: {e}"));
            }
        }
    }

    /// Manual-check request: classify the user-entered levels, no prediction.
    pub fn run_manual_check(&mut self) {
        self.outcome = Some(self.classify(self.manual_levels, OutcomeSource::Manual));
        self.status_message = None;
    }

    /// Re-evaluate the current outcome's levels against the enabled rule sets.
    /// Called when a rule-set toggle changes; safe because evaluation is pure.
    pub fn reclassify(&mut self) {
        if let Some(outcome) = self.outcome.take() {
            self.outcome = Some(self.classify(outcome.levels, outcome.source));
        }
    }

    fn classify(&self, levels: PollutantVector, source: OutcomeSource) -> Outcome {
        let reports = self
            .rule_sets
            .iter()
            .filter(|toggle| toggle.enabled)
            .map(|toggle| RuleReport {
                set_name: toggle.set.name,
                assessment: toggle.set.evaluate(&levels),
            })
            .collect();
        Outcome {
            source,
            levels,
            reports,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::pollutants::Pollutant;

    fn state() -> AppState {
        let schema = ModelColumnSchema::new(vec![
            "year".to_string(),
            "id_1".to_string(),
            "id_2".to_string(),
        ]);
        // Constant model: every pollutant predicted at a safe level, except
        // station 2 pushes NH4 over the drinkable limit.
        let mut coefficients = vec![vec![0.0, 0.0, 0.0]; 9];
        coefficients[0] = vec![0.0, 0.0, 0.6]; // NH4 += 0.6 for station 2
        let intercepts = vec![0.1, 1.0, 2.0, 8.0, 5.0, 0.1, 50.0, 0.1, 50.0];
        AppState::new(LinearModel::new(intercepts, coefficients), schema)
    }

    #[test]
    fn empty_station_warns_without_predicting() {
        let mut s = state();
        s.station_input = "  ".to_string();
        s.run_prediction();
        assert!(s.outcome.is_none());
        assert_eq!(
            s.status_message.as_deref(),
            Some("Please enter a valid Station ID.")
        );
    }

    #[test]
    fn prediction_produces_reports_for_enabled_sets() {
        let mut s = state();
        s.station_input = "1".to_string();
        s.run_prediction();

        let outcome = s.outcome.as_ref().unwrap();
        assert_eq!(
            outcome.source,
            OutcomeSource::Predicted {
                year: 2022,
                station_id: "1".to_string()
            }
        );
        let names: Vec<&str> = outcome.reports.iter().map(|r| r.set_name).collect();
        assert_eq!(names, vec!["Drinkable", "Usable"]);
        assert!(outcome.reports.iter().all(|r| r.assessment.passed()));
        assert!(s.status_message.is_none());
    }

    #[test]
    fn station_effect_shows_in_classification() {
        let mut s = state();
        s.station_input = "2".to_string();
        s.run_prediction();

        let outcome = s.outcome.as_ref().unwrap();
        assert!((outcome.levels.get(Pollutant::Nh4) - 0.7).abs() < 1e-12);
        let drinkable = &outcome.reports[0];
        assert_eq!(drinkable.assessment.issues, vec!["NH4 too high"]);
    }

    #[test]
    fn unknown_station_predicts_with_baseline_and_notes_it() {
        let mut s = state();
        s.station_input = "999".to_string();
        s.run_prediction();

        let outcome = s.outcome.as_ref().unwrap();
        assert!((outcome.levels.get(Pollutant::Nh4) - 0.1).abs() < 1e-12);
        assert!(s.status_message.unwrap().contains("not seen during training"));
    }

    #[test]
    fn manual_check_skips_prediction() {
        let mut s = state();
        s.manual_levels.o2 = 5.0;
        s.run_manual_check();

        let outcome = s.outcome.as_ref().unwrap();
        assert_eq!(outcome.source, OutcomeSource::Manual);
        assert_eq!(outcome.levels.o2, 5.0);
        assert_eq!(
            outcome.reports[0].assessment.issues,
            vec!["O2 below 6 mg/L"]
        );
        assert!(outcome.reports[1].assessment.passed());
    }

    #[test]
    fn toggling_a_rule_set_reclassifies_without_repredicting() {
        let mut s = state();
        s.run_manual_check();
        assert_eq!(s.outcome.as_ref().unwrap().reports.len(), 2);

        s.rule_sets[2].enabled = true;
        s.reclassify();

        let outcome = s.outcome.as_ref().unwrap();
        assert_eq!(outcome.reports.len(), 3);
        assert_eq!(outcome.reports[2].set_name, "General safety");
        assert_eq!(outcome.source, OutcomeSource::Manual);
    }
}
