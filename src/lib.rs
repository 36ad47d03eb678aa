//! Disease Predictor
//!
//! Collects clinical measurements for three panels (diabetes, heart disease,
//! Parkinson's disease), coerces them to numeric features and asks a
//! pre-trained binary classifier for a verdict.

pub mod config;
pub mod data;
pub mod error;
pub mod model;
pub mod predict;

pub use config::AppConfig;
pub use data::panel::{Panel, PanelSpec};
pub use error::{InvalidInput, ModelLoadError};
pub use model::{Classifier, ModelRegistry};
pub use predict::{Dispatcher, PredictionOutcome};
