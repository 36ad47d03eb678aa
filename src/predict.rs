//! Prediction dispatch: availability check → coercion → classifier → message.

use crate::data::coerce::coerce;
use crate::data::panel::Panel;
use crate::error::InvalidInput;
use crate::model::{Classifier, ModelRegistry};

pub const INVALID_INPUT_MESSAGE: &str = "Please enter valid numeric values!";
pub const MODEL_UNAVAILABLE_MESSAGE: &str = "Model not loaded. Check the file path!";

/// Result of one submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PredictionOutcome {
    Positive,
    Negative,
    InvalidInput,
    ModelUnavailable,
}

impl PredictionOutcome {
    /// Whether a classifier produced this outcome.
    pub fn is_prediction(self) -> bool {
        matches!(self, PredictionOutcome::Positive | PredictionOutcome::Negative)
    }

    /// Display string for the given panel.
    pub fn message(self, panel: Panel) -> &'static str {
        let spec = panel.spec();
        match self {
            PredictionOutcome::Positive => spec.positive_message,
            PredictionOutcome::Negative => spec.negative_message,
            PredictionOutcome::InvalidInput => INVALID_INPUT_MESSAGE,
            PredictionOutcome::ModelUnavailable => MODEL_UNAVAILABLE_MESSAGE,
        }
    }
}

/// Map a classifier label to an outcome: `1` is positive, anything else negative.
pub fn outcome_for_label(label: i64) -> PredictionOutcome {
    if label == 1 {
        PredictionOutcome::Positive
    } else {
        PredictionOutcome::Negative
    }
}

/// Run one prediction.
///
/// An absent handle wins over invalid input; the classifier is only invoked
/// with a fully valid vector.
pub fn predict(
    handle: Option<&dyn Classifier>,
    input: Result<&[f64], InvalidInput>,
) -> PredictionOutcome {
    let Some(model) = handle else {
        return PredictionOutcome::ModelUnavailable;
    };
    let Ok(sample) = input else {
        return PredictionOutcome::InvalidInput;
    };
    outcome_for_label(model.predict(sample))
}

// ---------------------------------------------------------------------------
// Dispatcher – panel-level entry point used by the UI
// ---------------------------------------------------------------------------

/// Stateless front door over a [`ModelRegistry`].
pub struct Dispatcher<'a> {
    registry: &'a ModelRegistry,
}

impl<'a> Dispatcher<'a> {
    pub fn new(registry: &'a ModelRegistry) -> Self {
        Self { registry }
    }

    /// Coerce the raw form values for `panel` and predict.
    pub fn submit<S: AsRef<str>>(&self, panel: Panel, raw: &[S]) -> PredictionOutcome {
        debug_assert_eq!(raw.len(), panel.spec().feature_count());

        let handle = self.registry.handle(panel);
        if handle.is_none() {
            return PredictionOutcome::ModelUnavailable;
        }

        let values = coerce(raw);
        if let Err(e) = &values {
            log::debug!("{panel}: {e}");
        }
        let outcome = predict(handle, values.as_deref().map_err(|&e| e));
        log::debug!("{panel}: {outcome:?}");
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    /// Returns a fixed label and counts how often it was asked.
    struct Fixed {
        label: i64,
        n_features: usize,
        calls: AtomicUsize,
    }

    impl Fixed {
        fn new(label: i64, n_features: usize) -> Arc<Self> {
            Arc::new(Self {
                label,
                n_features,
                calls: AtomicUsize::new(0),
            })
        }
    }

    impl Classifier for Fixed {
        fn n_features(&self) -> usize {
            self.n_features
        }

        fn predict(&self, _sample: &[f64]) -> i64 {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.label
        }
    }

    #[test]
    fn test_absent_handle_wins() {
        assert_eq!(
            predict(None, Err(InvalidInput { index: 0 })),
            PredictionOutcome::ModelUnavailable
        );
        assert_eq!(predict(None, Ok(&[1.0][..])), PredictionOutcome::ModelUnavailable);
    }

    #[test]
    fn test_invalid_input_skips_model() {
        let model = Fixed::new(1, 1);
        let outcome = predict(Some(model.as_ref() as &dyn Classifier), Err(InvalidInput { index: 0 }));
        assert_eq!(outcome, PredictionOutcome::InvalidInput);
        assert_eq!(model.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_label_mapping() {
        for (label, expected) in [
            (1, PredictionOutcome::Positive),
            (0, PredictionOutcome::Negative),
            (2, PredictionOutcome::Negative),
            (-1, PredictionOutcome::Negative),
        ] {
            let model = Fixed::new(label, 1);
            assert_eq!(predict(Some(model.as_ref() as &dyn Classifier), Ok(&[0.0][..])), expected);
        }
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            PredictionOutcome::Negative.message(Panel::Diabetes),
            "The person is not diabetic"
        );
        assert_eq!(
            PredictionOutcome::Positive.message(Panel::Heart),
            "The person has heart disease"
        );
        assert_eq!(
            PredictionOutcome::ModelUnavailable.message(Panel::Parkinsons),
            MODEL_UNAVAILABLE_MESSAGE
        );
    }

    #[test]
    fn test_submit_is_idempotent() {
        let model = Fixed::new(1, 8);
        let handle: Arc<dyn Classifier> = model.clone();
        let registry = ModelRegistry::from_handles([Some(handle), None, None]);
        let dispatcher = Dispatcher::new(&registry);
        let raw = ["1", "2", "3", "4", "5", "6", "7", "8"];
        let first = dispatcher.submit(Panel::Diabetes, &raw);
        let second = dispatcher.submit(Panel::Diabetes, &raw);
        assert_eq!(first, PredictionOutcome::Positive);
        assert_eq!(first, second);
        assert_eq!(model.calls.load(Ordering::SeqCst), 2);
    }
}
