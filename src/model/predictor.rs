use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::pollutants::{Pollutant, PollutantVector};
use super::schema::FeatureVector;

// ---------------------------------------------------------------------------
// LinearModel – the serialized multi-output regressor
// ---------------------------------------------------------------------------

/// The pre-trained predictor: one linear regression per pollutant, sharing the
/// same input columns. Deserialized from the model artifact at startup and
/// treated as a black box afterwards (no retraining, no introspection).
///
/// Artifact layout:
/// ```json
/// {
///   "intercepts":   [b_NH4, ..., b_CL],
///   "coefficients": [[w_NH4_0, ...], ..., [w_CL_0, ...]]
/// }
/// ```
/// Rows follow [`Pollutant::ALL`]; row width is the schema's column count.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearModel {
    intercepts: Vec<f64>,
    coefficients: Vec<Vec<f64>>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelShapeError {
    #[error("model has {got} outputs, expected 9")]
    WrongOutputCount { got: usize },
    #[error("coefficient row {row} has {got} columns, expected {expected}")]
    RaggedCoefficients {
        row: usize,
        got: usize,
        expected: usize,
    },
    #[error("model expects {model} input columns but the schema has {schema}")]
    SchemaWidthMismatch { model: usize, schema: usize },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PredictError {
    #[error("feature vector has {got} values, model expects {expected}")]
    FeatureLengthMismatch { expected: usize, got: usize },
}

impl LinearModel {
    pub fn new(intercepts: Vec<f64>, coefficients: Vec<Vec<f64>>) -> Self {
        LinearModel {
            intercepts,
            coefficients,
        }
    }

    /// Number of input columns the model was trained on.
    pub fn n_features(&self) -> usize {
        self.coefficients.first().map_or(0, Vec::len)
    }

    /// Check internal consistency and agreement with the column schema.
    /// Run once at startup so `predict` only has to validate the row length.
    pub fn validate(&self, schema_len: usize) -> Result<(), ModelShapeError> {
        let n_outputs = Pollutant::ALL.len();
        if self.coefficients.len() != n_outputs {
            return Err(ModelShapeError::WrongOutputCount {
                got: self.coefficients.len(),
            });
        }
        if self.intercepts.len() != n_outputs {
            return Err(ModelShapeError::WrongOutputCount {
                got: self.intercepts.len(),
            });
        }
        let expected = self.n_features();
        for (row, coeffs) in self.coefficients.iter().enumerate() {
            if coeffs.len() != expected {
                return Err(ModelShapeError::RaggedCoefficients {
                    row,
                    got: coeffs.len(),
                    expected,
                });
            }
        }
        if expected != schema_len {
            return Err(ModelShapeError::SchemaWidthMismatch {
                model: expected,
                schema: schema_len,
            });
        }
        Ok(())
    }

    /// Predict all nine pollutant concentrations for one encoded input row.
    pub fn predict(&self, features: &FeatureVector) -> Result<PollutantVector, PredictError> {
        let expected = self.n_features();
        if features.len() != expected {
            return Err(PredictError::FeatureLengthMismatch {
                expected,
                got: features.len(),
            });
        }

        let x = features.as_slice();
        let mut out = [0.0; 9];
        let rows = self.intercepts.iter().zip(self.coefficients.iter());
        for (slot, (intercept, coeffs)) in out.iter_mut().zip(rows) {
            let dot: f64 = coeffs.iter().zip(x.iter()).map(|(w, xi)| w * xi).sum();
            *slot = *intercept + dot;
        }
        Ok(PollutantVector::from_array(out))
    }
}
