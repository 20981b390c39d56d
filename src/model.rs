//! The pre-trained prediction pipeline, loaded from a JSON artifact.
//!
//! The artifact is an opaque collaborator as far as the rest of the crate
//! is concerned: it is loaded once at startup, validated for shape, and
//! only ever asked for `predict` and `predict_proba`. Nothing here trains
//! or updates anything.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use ndarray::{Array1, Array2};
use serde::Deserialize;

use crate::error::{PredictorError, Result};
use crate::schema;
use crate::table::Table;

pub const DEFAULT_ARTIFACT_PATH: &str = "models/dropout_pipeline.json";

const PREPROCESSOR_STAGE: &str = "preprocessor";
const CLASSIFIER_STAGE: &str = "classifier";

pub const DROPOUT_LABEL: &str = "Dropout";
pub const NON_DROPOUT_LABEL: &str = "Non-Dropout";

#[derive(Debug, Deserialize)]
struct ArtifactDoc {
    #[serde(default)]
    model_name: String,
    stages: Vec<StageDoc>,
}

#[derive(Debug, Deserialize)]
struct StageDoc {
    name: String,
    #[serde(flatten)]
    spec: StageSpec,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum StageSpec {
    StandardScaler {
        columns: Vec<String>,
        means: Vec<f64>,
        scales: Vec<f64>,
        /// Closed code sets the preprocessor enforces for categorical
        /// columns. Values outside a declared domain are rejected at
        /// scoring time, mirroring the trained preprocessor's behavior.
        #[serde(default)]
        categorical_domains: HashMap<String, Vec<i64>>,
    },
    LogisticRegression {
        coefficients: Vec<f64>,
        intercept: f64,
    },
}

/// A validated, ready-to-score pipeline.
pub struct Pipeline {
    pub model_name: String,
    columns: Vec<String>,
    means: Array1<f64>,
    scales: Array1<f64>,
    domains: HashMap<String, Vec<i64>>,
    coefficients: Array1<f64>,
    intercept: f64,
}

impl Pipeline {
    /// Load and validate the artifact file. Every failure mode (absent
    /// file, bad JSON, wrong shape, missing named stages) is an
    /// `ArtifactLoad` error; the caller decides whether to serve without
    /// a prediction UI.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|e| {
            PredictorError::ArtifactLoad(format!("cannot read {}: {e}", path.display()))
        })?;
        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        let doc: ArtifactDoc = serde_json::from_str(raw)
            .map_err(|e| PredictorError::ArtifactLoad(format!("not a valid artifact: {e}")))?;

        let mut preprocessor = None;
        let mut classifier = None;
        for stage in doc.stages {
            match (stage.name.as_str(), stage.spec) {
                (PREPROCESSOR_STAGE, spec @ StageSpec::StandardScaler { .. }) => {
                    preprocessor = Some(spec)
                }
                (CLASSIFIER_STAGE, spec @ StageSpec::LogisticRegression { .. }) => {
                    classifier = Some(spec)
                }
                (other, _) => {
                    return Err(PredictorError::ArtifactLoad(format!(
                        "unrecognized stage {other:?} in pipeline"
                    )))
                }
            }
        }
        let (columns, means, scales, domains) = match preprocessor {
            Some(StageSpec::StandardScaler {
                columns,
                means,
                scales,
                categorical_domains,
            }) => (columns, means, scales, categorical_domains),
            _ => {
                return Err(PredictorError::ArtifactLoad(
                    "pipeline has no \"preprocessor\" stage".into(),
                ))
            }
        };
        let (coefficients, intercept) = match classifier {
            Some(StageSpec::LogisticRegression {
                coefficients,
                intercept,
            }) => (coefficients, intercept),
            _ => {
                return Err(PredictorError::ArtifactLoad(
                    "pipeline has no \"classifier\" stage".into(),
                ))
            }
        };

        let expected = schema::all_features();
        if columns != expected {
            return Err(PredictorError::ArtifactLoad(format!(
                "preprocessor column list does not match the schema ({} vs {} columns)",
                columns.len(),
                expected.len()
            )));
        }
        if means.len() != columns.len() || scales.len() != columns.len() {
            return Err(PredictorError::ArtifactLoad(
                "preprocessor means/scales length does not match its columns".into(),
            ));
        }
        if coefficients.len() != columns.len() {
            return Err(PredictorError::ArtifactLoad(
                "classifier coefficient length does not match the preprocessor columns".into(),
            ));
        }
        if scales.iter().any(|s| *s == 0.0 || !s.is_finite()) {
            return Err(PredictorError::ArtifactLoad(
                "preprocessor scales must be finite and nonzero".into(),
            ));
        }

        Ok(Pipeline {
            model_name: doc.model_name,
            columns,
            means: Array1::from(means),
            scales: Array1::from(scales),
            domains,
            coefficients: Array1::from(coefficients),
            intercept,
        })
    }

    pub fn n_features(&self) -> usize {
        self.columns.len()
    }

    /// Binary labels, one per row, row order preserved. 1 = dropout.
    pub fn predict(&self, table: &Table) -> Result<Vec<u8>> {
        let proba = self.predict_proba(table)?;
        Ok(proba
            .iter()
            .map(|&(_, p_dropout)| u8::from(p_dropout >= 0.5))
            .collect())
    }

    /// Per-row `(p_non_dropout, p_dropout)`, row order preserved.
    pub fn predict_proba(&self, table: &Table) -> Result<Vec<(f64, f64)>> {
        let x = self.transform(table)?;
        let z = x.dot(&self.coefficients) + self.intercept;
        Ok(z.iter()
            .map(|&z| {
                let p = sigmoid(z);
                (1.0 - p, p)
            })
            .collect())
    }

    /// Assemble and scale the feature matrix. This is the preprocessor's
    /// own rejection path: absent columns, missing or non-finite cells,
    /// and values outside a declared categorical domain are `Prediction`
    /// errors surfaced as-is.
    fn transform(&self, table: &Table) -> Result<Array2<f64>> {
        let n = table.n_rows();
        let mut x = Array2::zeros((n, self.columns.len()));
        for (j, name) in self.columns.iter().enumerate() {
            let col = table.column(name).ok_or_else(|| {
                PredictorError::Prediction(format!("input table lacks column {name}"))
            })?;
            let domain = self.domains.get(name);
            for (i, cell) in col.iter().enumerate() {
                let v = cell.ok_or_else(|| {
                    PredictorError::Prediction(format!(
                        "missing value for {name} in row {i}; the preprocessor cannot impute"
                    ))
                })?;
                if !v.is_finite() {
                    return Err(PredictorError::Prediction(format!(
                        "non-finite value for {name} in row {i}"
                    )));
                }
                if let Some(codes) = domain {
                    if v.fract() != 0.0 || !codes.contains(&(v as i64)) {
                        return Err(PredictorError::Prediction(format!(
                            "value {v} for {name} in row {i} is outside the trained categorical range"
                        )));
                    }
                }
                x[[i, j]] = (v - self.means[j]) / self.scales[j];
            }
        }
        Ok(x)
    }
}

fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}

/// One row's merged prediction, as rendered and exported.
#[derive(Debug, Clone, serde::Serialize)]
pub struct Prediction {
    pub predicted_is_dropout: u8,
    pub probability_non_dropout: f64,
    pub probability_dropout: f64,
    pub predicted_status: &'static str,
}

/// Run both collaborator calls and merge per row.
pub fn score(pipeline: &Pipeline, table: &Table) -> Result<Vec<Prediction>> {
    let labels = pipeline.predict(table)?;
    let proba = pipeline.predict_proba(table)?;
    Ok(labels
        .into_iter()
        .zip(proba)
        .map(|(label, (p0, p1))| Prediction {
            predicted_is_dropout: label,
            probability_non_dropout: p0,
            probability_dropout: p1,
            predicted_status: if label == 1 {
                DROPOUT_LABEL
            } else {
                NON_DROPOUT_LABEL
            },
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sigmoid_is_symmetric() {
        assert!((sigmoid(0.0) - 0.5).abs() < 1e-12);
        assert!((sigmoid(3.0) + sigmoid(-3.0) - 1.0).abs() < 1e-12);
    }
}
