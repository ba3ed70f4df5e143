use std::collections::BTreeMap;

use thiserror::Error;

// ---------------------------------------------------------------------------
// ModelColumnSchema – the trained model's expected input columns
// ---------------------------------------------------------------------------

/// Prefix used for one-hot station indicator columns, matching the naming the
/// model was trained with (`id_<station>`).
pub const STATION_PREFIX: &str = "id_";

/// Name of the numeric year column.
pub const YEAR_COLUMN: &str = "year";

/// The ordered list of input columns the predictor requires: the `year`
/// column plus one indicator column per station seen during training.
/// Loaded once at startup and read-only for the process lifetime.
#[derive(Debug, Clone)]
pub struct ModelColumnSchema {
    columns: Vec<String>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EncodeError {
    #[error("station id must not be empty")]
    EmptyStationId,
}

impl ModelColumnSchema {
    pub fn new(columns: Vec<String>) -> Self {
        ModelColumnSchema { columns }
    }

    /// Number of input features.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Whether the schema has an indicator column for this station id.
    pub fn knows_station(&self, station_id: &str) -> bool {
        let indicator = format!("{STATION_PREFIX}{station_id}");
        self.columns.iter().any(|c| *c == indicator)
    }

    /// Station ids the model was trained on (indicator columns sans prefix).
    pub fn station_ids(&self) -> impl Iterator<Item = &str> {
        self.columns
            .iter()
            .filter_map(|c| c.strip_prefix(STATION_PREFIX))
    }

    /// One-hot encode a (year, station id) pair into a [`FeatureVector`]
    /// aligned to this schema.
    ///
    /// The raw input is a two-entry mapping: `year` and the station's
    /// indicator column set to 1. Every schema column missing from the raw
    /// mapping is filled with 0, and raw keys not in the schema are dropped.
    /// A station id the model never saw therefore encodes to the
    /// all-indicators-zero baseline vector; callers can detect that case via
    /// [`ModelColumnSchema::knows_station`].
    pub fn encode(&self, year: i32, station_id: &str) -> Result<FeatureVector, EncodeError> {
        let station_id = station_id.trim();
        if station_id.is_empty() {
            return Err(EncodeError::EmptyStationId);
        }

        let mut raw: BTreeMap<String, f64> = BTreeMap::new();
        raw.insert(YEAR_COLUMN.to_string(), f64::from(year));
        raw.insert(format!("{STATION_PREFIX}{station_id}"), 1.0);

        // Materialize in schema order; absent columns default to 0.
        let values = self
            .columns
            .iter()
            .map(|col| raw.get(col).copied().unwrap_or(0.0))
            .collect();

        Ok(FeatureVector { values })
    }
}

// ---------------------------------------------------------------------------
// FeatureVector – one encoded model input row
// ---------------------------------------------------------------------------

/// A dense input row whose positions correspond 1:1 to the schema's columns.
/// Built fresh per request, never persisted. Only [`ModelColumnSchema::encode`]
/// constructs these, which is what guarantees the alignment invariant.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector {
    values: Vec<f64>,
}

impl FeatureVector {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }
}
