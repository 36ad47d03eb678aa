/// Model layer: classifier trait, saved-model formats and loading.
///
/// Architecture:
/// ```text
///  saved_models/*.json
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  read + parse → Arc<dyn Classifier>
///   └──────────┘
///        │
///        ▼
///   ┌───────────────┐
///   │ ModelRegistry │  one slot per Panel, loaded once
///   └───────────────┘
/// ```

pub mod linear;
pub mod loader;

pub use linear::{LinearClassifier, LogisticClassifier, SavedModel, Scaler};
pub use loader::{load_model, ModelRegistry};

/// A pre-trained binary classifier, opaque beyond its predict operation.
pub trait Classifier: Send + Sync {
    /// Number of features a sample must have.
    fn n_features(&self) -> usize;

    /// Class label for a single sample (`1` = condition present).
    ///
    /// `sample.len()` must equal [`Classifier::n_features`].
    fn predict(&self, sample: &[f64]) -> i64;
}
