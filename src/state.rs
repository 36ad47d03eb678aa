use disease_predictor::data::batch::BatchReport;
use disease_predictor::{Dispatcher, ModelRegistry, Panel, PredictionOutcome};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// Per-panel form contents and the last result shown under it.
#[derive(Debug, Clone)]
pub struct FormState {
    /// Raw text, one entry per panel field.
    pub inputs: Vec<String>,
    pub outcome: Option<PredictionOutcome>,
}

impl FormState {
    fn new(panel: Panel) -> Self {
        Self {
            inputs: vec![String::new(); panel.spec().feature_count()],
            outcome: None,
        }
    }
}

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Classifiers loaded at startup; never replaced.
    pub registry: ModelRegistry,

    /// Panel selected in the sidebar.
    pub selected: Panel,

    /// One form per panel, indexed by `Panel::index`.
    pub forms: [FormState; 3],

    /// Last batch run, if any.
    pub batch: Option<BatchReport>,

    /// Status / error message shown in the top bar.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(registry: ModelRegistry) -> Self {
        Self {
            registry,
            selected: Panel::default(),
            forms: Panel::ALL.map(FormState::new),
            batch: None,
            status_message: None,
        }
    }

    pub fn form(&self, panel: Panel) -> &FormState {
        &self.forms[panel.index()]
    }

    pub fn form_mut(&mut self, panel: Panel) -> &mut FormState {
        &mut self.forms[panel.index()]
    }

    /// Switch panels; the batch view belongs to the panel it was run for.
    pub fn select(&mut self, panel: Panel) {
        if self.selected != panel {
            self.selected = panel;
            self.batch = None;
        }
    }

    /// Predict from the current form of `panel` and remember the outcome.
    pub fn submit(&mut self, panel: Panel) -> PredictionOutcome {
        let outcome = Dispatcher::new(&self.registry).submit(panel, &self.form(panel).inputs);
        self.form_mut(panel).outcome = Some(outcome);
        outcome
    }

    /// Reset a panel's inputs and result.
    pub fn clear(&mut self, panel: Panel) {
        self.forms[panel.index()] = FormState::new(panel);
    }
}
