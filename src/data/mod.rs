/// Data layer: panel definitions, input coercion, and batch files.
///
/// Architecture:
/// ```text
///   form text / .csv / .json
///        │
///        ▼
///   ┌──────────┐
///   │  batch    │  file → Vec<RawRecord>  (forms skip this step)
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  coerce   │  raw text → Vec<f64> | InvalidInput
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  panel    │  field order + feature count the model expects
///   └──────────┘
/// ```

pub mod batch;
pub mod coerce;
pub mod panel;
