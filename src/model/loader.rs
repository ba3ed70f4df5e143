use std::path::Path;

use anyhow::{Context, Result, bail};

use super::predictor::LinearModel;
use super::schema::{ModelColumnSchema, YEAR_COLUMN};

// ---------------------------------------------------------------------------
// Startup artifacts
// ---------------------------------------------------------------------------

/// Default artifact file names, alongside the executable's working directory.
pub const DEFAULT_MODEL_PATH: &str = "pollution_model.json";
pub const DEFAULT_COLUMNS_PATH: &str = "model_columns.json";

/// Load and validate both startup artifacts.
///
/// * model artifact – JSON-serialized [`LinearModel`]
/// * columns artifact – JSON array of column names, in model input order
///
/// Any missing, unreadable, or inconsistent artifact is an error; the caller
/// is expected to abort startup on failure.
pub fn load_artifacts(
    model_path: &Path,
    columns_path: &Path,
) -> Result<(LinearModel, ModelColumnSchema)> {
    let schema = load_columns(columns_path)
        .with_context(|| format!("loading column schema from {}", columns_path.display()))?;
    let model = load_model(model_path, &schema)
        .with_context(|| format!("loading model from {}", model_path.display()))?;

    log::info!(
        "Loaded model: {} input columns, {} known stations",
        schema.len(),
        schema.station_ids().count()
    );
    Ok((model, schema))
}

fn load_columns(path: &Path) -> Result<ModelColumnSchema> {
    let text = std::fs::read_to_string(path).context("reading columns file")?;
    let columns: Vec<String> = serde_json::from_str(&text).context("parsing columns JSON")?;

    if columns.is_empty() {
        bail!("column schema is empty");
    }
    if !columns.iter().any(|c| c == YEAR_COLUMN) {
        bail!("column schema has no '{YEAR_COLUMN}' column");
    }
    Ok(ModelColumnSchema::new(columns))
}

fn load_model(path: &Path, schema: &ModelColumnSchema) -> Result<LinearModel> {
    let text = std::fs::read_to_string(path).context("reading model file")?;
    let model: LinearModel = serde_json::from_str(&text).context("parsing model JSON")?;
    model.validate(schema.len()).context("checking model shape")?;
    Ok(model)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    struct TempFile(PathBuf);

    impl TempFile {
        fn write(name: &str, contents: &str) -> Self {
            let path = std::env::temp_dir().join(format!("aquasight-{}-{name}", std::process::id()));
            std::fs::write(&path, contents).unwrap();
            TempFile(path)
        }
    }

    impl Drop for TempFile {
        fn drop(&mut self) {
            let _ = std::fs::remove_file(&self.0);
        }
    }

    fn model_json(n_features: usize) -> String {
        let row: Vec<f64> = vec![0.5; n_features];
        serde_json::to_string(&serde_json::json!({
            "intercepts": vec![1.0; 9],
            "coefficients": vec![row; 9],
        }))
        .unwrap()
    }

    #[test]
    fn loads_consistent_artifacts() {
        let cols = TempFile::write("cols.json", r#"["year", "id_1", "id_2"]"#);
        let model = TempFile::write("model.json", &model_json(3));

        let (m, schema) = load_artifacts(&model.0, &cols.0).unwrap();
        assert_eq!(schema.len(), 3);
        assert_eq!(m.n_features(), 3);
        assert_eq!(schema.station_ids().collect::<Vec<_>>(), vec!["1", "2"]);
    }

    #[test]
    fn missing_artifact_fails() {
        let cols = TempFile::write("cols-only.json", r#"["year", "id_1"]"#);
        let missing = std::env::temp_dir().join("aquasight-does-not-exist.json");
        assert!(load_artifacts(&missing, &cols.0).is_err());
    }

    #[test]
    fn rejects_schema_without_year() {
        let cols = TempFile::write("no-year.json", r#"["id_1", "id_2"]"#);
        let model = TempFile::write("no-year-model.json", &model_json(2));
        let err = load_artifacts(&model.0, &cols.0).unwrap_err();
        assert!(format!("{err:#}").contains("year"));
    }

    #[test]
    fn rejects_model_schema_width_mismatch() {
        let cols = TempFile::write("wide-cols.json", r#"["year", "id_1", "id_2", "id_3"]"#);
        let model = TempFile::write("narrow-model.json", &model_json(3));
        let err = load_artifacts(&model.0, &cols.0).unwrap_err();
        assert!(format!("{err:#}").contains("input columns"));
    }
}
