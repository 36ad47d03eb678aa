use std::path::Path;
use std::sync::Arc;

use crate::data::panel::Panel;
use crate::error::ModelLoadError;

use super::{Classifier, SavedModel};

// ---------------------------------------------------------------------------
// Single-file loader
// ---------------------------------------------------------------------------

/// Load one saved model from `dir/file_name`.
pub fn load_model(dir: &Path, file_name: &str) -> Result<Arc<dyn Classifier>, ModelLoadError> {
    let path = dir.join(file_name);
    if !path.exists() {
        return Err(ModelLoadError::NotFound { path });
    }

    let text = match std::fs::read_to_string(&path) {
        Ok(text) => text,
        Err(source) => return Err(ModelLoadError::Read { path, source }),
    };
    let saved: SavedModel = match serde_json::from_str(&text) {
        Ok(saved) => saved,
        Err(source) => return Err(ModelLoadError::Parse { path, source }),
    };
    if let Err(reason) = saved.validate() {
        return Err(ModelLoadError::Malformed { path, reason });
    }

    log::debug!(
        "Parsed {} ({})",
        path.display(),
        saved.name().unwrap_or("unnamed")
    );

    Ok(match saved {
        SavedModel::Linear(m) => Arc::new(m),
        SavedModel::Logistic(m) => Arc::new(m),
    })
}

// ---------------------------------------------------------------------------
// ModelRegistry – read-only context, one slot per panel
// ---------------------------------------------------------------------------

/// The classifiers for every panel, resolved once at startup.
///
/// A slot holds either the loaded handle or the reason it could not be
/// loaded. Nothing is reloaded afterwards.
pub struct ModelRegistry {
    slots: [Result<Arc<dyn Classifier>, ModelLoadError>; 3],
}

impl ModelRegistry {
    /// Load every panel's model from `dir`. Failures are logged and kept;
    /// they never abort the load of the other panels.
    pub fn load(dir: &Path) -> Self {
        let slots = Panel::ALL.map(|panel| {
            let spec = panel.spec();
            let result = load_model(dir, spec.model_file).and_then(|model| {
                if model.n_features() == spec.feature_count() {
                    Ok(model)
                } else {
                    Err(ModelLoadError::FeatureMismatch {
                        path: dir.join(spec.model_file),
                        expected: spec.feature_count(),
                        found: model.n_features(),
                    })
                }
            });

            match &result {
                Ok(model) => log::info!(
                    "Loaded {} model ({} features)",
                    panel,
                    model.n_features()
                ),
                Err(e) => log::error!("{panel} disabled: {e}"),
            }
            result
        });

        Self { slots }
    }

    /// Build a registry from already constructed handles; `None` marks a
    /// panel whose model is unavailable.
    pub fn from_handles(handles: [Option<Arc<dyn Classifier>>; 3]) -> Self {
        let slot = |panel: Panel, handle: Option<Arc<dyn Classifier>>| {
            handle.ok_or_else(|| ModelLoadError::NotFound {
                path: panel.spec().model_file.into(),
            })
        };
        let [diabetes, heart, parkinsons] = handles;
        Self {
            slots: [
                slot(Panel::Diabetes, diabetes),
                slot(Panel::Heart, heart),
                slot(Panel::Parkinsons, parkinsons),
            ],
        }
    }

    /// The panel's classifier, if it loaded.
    pub fn handle(&self, panel: Panel) -> Option<&dyn Classifier> {
        self.slots[panel.index()].as_ref().ok().map(|m| m.as_ref())
    }

    /// Why the panel's classifier is unavailable, if it is.
    pub fn load_error(&self, panel: Panel) -> Option<&ModelLoadError> {
        self.slots[panel.index()].as_ref().err()
    }

    pub fn loaded_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_ok()).count()
    }
}
