use serde::{Deserialize, Serialize};

use super::Classifier;

// ---------------------------------------------------------------------------
// Saved-model formats
// ---------------------------------------------------------------------------

/// On-disk model description, tagged by `"kind"`:
///
/// ```json
/// { "kind": "linear",   "weights": [...], "intercept": -1.2 }
/// { "kind": "logistic", "weights": [...], "intercept": 0.3, "threshold": 0.5,
///   "scaler": { "mean": [...], "scale": [...] } }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum SavedModel {
    Linear(LinearClassifier),
    Logistic(LogisticClassifier),
}

impl SavedModel {
    pub fn name(&self) -> Option<&str> {
        match self {
            SavedModel::Linear(m) => m.name.as_deref(),
            SavedModel::Logistic(m) => m.name.as_deref(),
        }
    }

    /// Check internal consistency (matching vector lengths, sane scales).
    pub fn validate(&self) -> Result<(), String> {
        let (weights, scaler) = match self {
            SavedModel::Linear(m) => (&m.weights, &m.scaler),
            SavedModel::Logistic(m) => (&m.weights, &m.scaler),
        };
        if weights.is_empty() {
            return Err("no weights".to_string());
        }
        if let Some(scaler) = scaler {
            scaler.validate(weights.len())?;
        }
        if let SavedModel::Logistic(m) = self {
            if !(0.0..=1.0).contains(&m.threshold) {
                return Err(format!("threshold {} outside [0, 1]", m.threshold));
            }
        }
        Ok(())
    }
}

/// Per-feature standardisation applied before the linear term:
/// `(x - mean) / scale`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scaler {
    pub mean: Vec<f64>,
    pub scale: Vec<f64>,
}

impl Scaler {
    fn validate(&self, n_features: usize) -> Result<(), String> {
        if self.mean.len() != n_features || self.scale.len() != n_features {
            return Err(format!(
                "scaler has {} means and {} scales for {} weights",
                self.mean.len(),
                self.scale.len(),
                n_features
            ));
        }
        if let Some(i) = self.scale.iter().position(|s| *s == 0.0 || !s.is_finite()) {
            return Err(format!("scale[{i}] must be finite and non-zero"));
        }
        Ok(())
    }

    fn transform(&self, i: usize, x: f64) -> f64 {
        (x - self.mean[i]) / self.scale[i]
    }
}

fn decision(weights: &[f64], intercept: f64, scaler: Option<&Scaler>, sample: &[f64]) -> f64 {
    let dot: f64 = weights
        .iter()
        .zip(sample.iter())
        .enumerate()
        .map(|(i, (w, &x))| {
            let x = match scaler {
                Some(s) => s.transform(i, x),
                None => x,
            };
            w * x
        })
        .sum();
    dot + intercept
}

// ---------------------------------------------------------------------------
// LinearClassifier – sign of the decision function (linear SVM)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearClassifier {
    #[serde(default)]
    pub name: Option<String>,
    pub weights: Vec<f64>,
    pub intercept: f64,
    #[serde(default)]
    pub scaler: Option<Scaler>,
}

impl LinearClassifier {
    pub fn decision_function(&self, sample: &[f64]) -> f64 {
        decision(&self.weights, self.intercept, self.scaler.as_ref(), sample)
    }
}

impl Classifier for LinearClassifier {
    fn n_features(&self) -> usize {
        self.weights.len()
    }

    fn predict(&self, sample: &[f64]) -> i64 {
        debug_assert_eq!(sample.len(), self.n_features());
        if self.decision_function(sample) > 0.0 {
            1
        } else {
            0
        }
    }
}

// ---------------------------------------------------------------------------
// LogisticClassifier – sigmoid probability against a threshold
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogisticClassifier {
    #[serde(default)]
    pub name: Option<String>,
    pub weights: Vec<f64>,
    pub intercept: f64,
    #[serde(default)]
    pub scaler: Option<Scaler>,
    #[serde(default = "default_threshold")]
    pub threshold: f64,
}

fn default_threshold() -> f64 {
    0.5
}

impl LogisticClassifier {
    /// Probability of the positive class.
    pub fn predict_proba(&self, sample: &[f64]) -> f64 {
        let z = decision(&self.weights, self.intercept, self.scaler.as_ref(), sample);
        1.0 / (1.0 + (-z).exp())
    }
}

impl Classifier for LogisticClassifier {
    fn n_features(&self) -> usize {
        self.weights.len()
    }

    fn predict(&self, sample: &[f64]) -> i64 {
        debug_assert_eq!(sample.len(), self.n_features());
        if self.predict_proba(sample) >= self.threshold {
            1
        } else {
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_sign() {
        let m = LinearClassifier {
            name: None,
            weights: vec![1.0, -1.0],
            intercept: 0.0,
            scaler: None,
        };
        assert_eq!(m.predict(&[2.0, 1.0]), 1);
        assert_eq!(m.predict(&[1.0, 2.0]), 0);
        // Exactly on the boundary is the negative class.
        assert_eq!(m.predict(&[1.0, 1.0]), 0);
    }

    #[test]
    fn test_scaler_applied() {
        let m = LinearClassifier {
            name: None,
            weights: vec![1.0],
            intercept: 0.0,
            scaler: Some(Scaler {
                mean: vec![100.0],
                scale: vec![10.0],
            }),
        };
        assert!((m.decision_function(&[120.0]) - 2.0).abs() < 1e-12);
        assert_eq!(m.predict(&[90.0]), 0);
    }

    #[test]
    fn test_logistic_threshold() {
        let mut m = LogisticClassifier {
            name: None,
            weights: vec![1.0],
            intercept: 0.0,
            scaler: None,
            threshold: 0.5,
        };
        assert!((m.predict_proba(&[0.0]) - 0.5).abs() < 1e-12);
        assert_eq!(m.predict(&[0.0]), 1);
        m.threshold = 0.9;
        assert_eq!(m.predict(&[1.0]), 0);
        assert_eq!(m.predict(&[5.0]), 1);
    }

    #[test]
    fn test_deserialize_tagged() {
        let json = r#"{"kind":"logistic","weights":[0.1,0.2],"intercept":-0.5}"#;
        let model: SavedModel = serde_json::from_str(json).unwrap();
        match model {
            SavedModel::Logistic(m) => {
                assert_eq!(m.threshold, 0.5);
                assert!(m.scaler.is_none());
            }
            other => panic!("unexpected model: {other:?}"),
        }
    }

    #[test]
    fn test_validate_rejects_bad_scaler() {
        let model = SavedModel::Linear(LinearClassifier {
            name: None,
            weights: vec![1.0, 2.0],
            intercept: 0.0,
            scaler: Some(Scaler {
                mean: vec![0.0, 0.0],
                scale: vec![1.0, 0.0],
            }),
        });
        assert!(model.validate().unwrap_err().contains("scale[1]"));
    }

    #[test]
    fn test_validate_rejects_empty_weights() {
        let model = SavedModel::Linear(LinearClassifier {
            name: None,
            weights: vec![],
            intercept: 0.0,
            scaler: None,
        });
        assert!(model.validate().is_err());
    }
}
