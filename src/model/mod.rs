/// Model layer: pollutant types, feature encoding, prediction, and artifact loading.
///
/// Architecture:
/// ```text
///  pollution_model.json / model_columns.json
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse + validate artifacts at startup
///   └──────────┘
///        │
///        ▼
///   ┌───────────────────┐      ┌─────────────┐
///   │ ModelColumnSchema  │──────│ LinearModel  │
///   └───────────────────┘      └─────────────┘
///        │ encode(year, station)       │ predict(FeatureVector)
///        ▼                             ▼
///   FeatureVector  ─────────────▶  PollutantVector
/// ```

pub mod loader;
pub mod pollutants;
pub mod predictor;
pub mod schema;
