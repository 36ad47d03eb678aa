use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde_json::Value as JsonValue;

use super::panel::Panel;
use crate::predict::{Dispatcher, PredictionOutcome};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Raw values of one record, aligned with the panel's fields.
pub type RawRecord = Vec<String>;

/// Load batch records for `panel` from a file.  Dispatch by extension.
///
/// Columns are matched by the panel's dataset column names; any other
/// columns (targets, identifiers) are ignored.
///
/// Supported formats:
/// * `.csv`  – header row, one record per line
/// * `.json` – `[{ "Glucose": 120, "BMI": "25.0", ... }, ...]`
pub fn load_file(path: &Path, panel: Panel) -> Result<Vec<RawRecord>> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "csv" => load_csv(path, panel),
        "json" => load_json(path, panel),
        other => bail!("Unsupported file extension: .{other}"),
    }
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

fn load_csv(path: &Path, panel: Panel) -> Result<Vec<RawRecord>> {
    let reader = csv::Reader::from_path(path).context("opening CSV")?;
    read_csv(reader, panel)
}

fn read_csv<R: std::io::Read>(mut reader: csv::Reader<R>, panel: Panel) -> Result<Vec<RawRecord>> {
    let headers: Vec<String> = reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let indices = panel
        .spec()
        .columns()
        .map(|col| {
            headers
                .iter()
                .position(|h| h == col)
                .with_context(|| format!("CSV missing '{col}' column"))
        })
        .collect::<Result<Vec<usize>>>()?;

    let mut records = Vec::new();
    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;
        records.push(
            indices
                .iter()
                .map(|&i| record.get(i).unwrap_or("").to_string())
                .collect(),
        );
    }

    Ok(records)
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Values may be JSON numbers or strings; both go through the same numeric
/// coercion as form input. `null` and missing keys become empty text.
fn load_json(path: &Path, panel: Panel) -> Result<Vec<RawRecord>> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    parse_json(&text, panel)
}

fn parse_json(text: &str, panel: Panel) -> Result<Vec<RawRecord>> {
    let root: JsonValue = serde_json::from_str(text).context("parsing JSON")?;
    let rows = root
        .as_array()
        .context("Expected top-level JSON array")?;

    rows.iter()
        .enumerate()
        .map(|(i, row)| -> Result<RawRecord> {
            let obj = row
                .as_object()
                .with_context(|| format!("Row {i} is not a JSON object"))?;
            Ok(panel
                .spec()
                .columns()
                .map(|col| json_to_raw(obj.get(col)))
                .collect())
        })
        .collect()
}

fn json_to_raw(val: Option<&JsonValue>) -> String {
    match val {
        Some(JsonValue::String(s)) => s.clone(),
        Some(JsonValue::Number(n)) => n.to_string(),
        Some(JsonValue::Null) | None => String::new(),
        Some(other) => other.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Batch run
// ---------------------------------------------------------------------------

/// Outcome of every record in a batch, in file order.
#[derive(Debug, Clone)]
pub struct BatchReport {
    pub panel: Panel,
    pub source: String,
    pub outcomes: Vec<PredictionOutcome>,
}

impl BatchReport {
    /// Push every record through the same path as a form submission.
    pub fn run(
        dispatcher: &Dispatcher<'_>,
        panel: Panel,
        source: String,
        records: &[RawRecord],
    ) -> Self {
        let outcomes: Vec<PredictionOutcome> = records
            .iter()
            .enumerate()
            .map(|(row, raw)| {
                let outcome = dispatcher.submit(panel, raw);
                if outcome == PredictionOutcome::InvalidInput {
                    log::warn!("{source}: row {row} has non-numeric values");
                }
                outcome
            })
            .collect();

        Self {
            panel,
            source,
            outcomes,
        }
    }

    /// Number of records per outcome.
    pub fn counts(&self) -> BTreeMap<&'static str, usize> {
        let mut counts = BTreeMap::new();
        for outcome in &self.outcomes {
            *counts.entry(outcome_key(*outcome)).or_insert(0) += 1;
        }
        counts
    }

    pub fn count(&self, outcome: PredictionOutcome) -> usize {
        self.outcomes.iter().filter(|o| **o == outcome).count()
    }

    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }
}

/// Short label used in the summary chart.
pub fn outcome_key(outcome: PredictionOutcome) -> &'static str {
    match outcome {
        PredictionOutcome::Positive => "positive",
        PredictionOutcome::Negative => "negative",
        PredictionOutcome::InvalidInput => "invalid",
        PredictionOutcome::ModelUnavailable => "unavailable",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const DIABETES_CSV: &str = "\
Pregnancies,Glucose,BloodPressure,SkinThickness,Insulin,BMI,DiabetesPedigreeFunction,Age,Outcome
6,148,72,35,0,33.6,0.627,50,1
1,85,66,29,,26.6,0.351,31,0
";

    #[test]
    fn test_csv_columns_in_field_order() {
        let reader = csv::Reader::from_reader(DIABETES_CSV.as_bytes());
        let records = read_csv(reader, Panel::Diabetes).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(
            records[0],
            vec!["6", "148", "72", "35", "0", "33.6", "0.627", "50"]
        );
        // Empty cell stays empty so coercion rejects it.
        assert_eq!(records[1][4], "");
    }

    #[test]
    fn test_csv_reordered_header() {
        let csv_text = "Age,Pregnancies,Glucose,BloodPressure,SkinThickness,Insulin,BMI,DiabetesPedigreeFunction\n\
                        33,2,120,70,30,80,25.0,0.5\n";
        let reader = csv::Reader::from_reader(csv_text.as_bytes());
        let records = read_csv(reader, Panel::Diabetes).unwrap();
        assert_eq!(
            records[0],
            vec!["2", "120", "70", "30", "80", "25.0", "0.5", "33"]
        );
    }

    #[test]
    fn test_csv_missing_column() {
        let reader = csv::Reader::from_reader("age,sex\n1,0\n".as_bytes());
        let err = read_csv(reader, Panel::Heart).unwrap_err();
        assert!(err.to_string().contains("'cp'"));
    }

    #[test]
    fn test_json_numbers_and_strings() {
        let text = r#"[{"Pregnancies":2,"Glucose":"120","BloodPressure":70,"SkinThickness":30,
                       "Insulin":80,"BMI":25.5,"DiabetesPedigreeFunction":0.5,"Age":null}]"#;
        let records = parse_json(text, Panel::Diabetes).unwrap();
        assert_eq!(
            records[0],
            vec!["2", "120", "70", "30", "80", "25.5", "0.5", ""]
        );
    }

    #[test]
    fn test_json_not_array() {
        assert!(parse_json("{}", Panel::Diabetes).is_err());
    }

    #[test]
    fn test_unsupported_extension() {
        let err = load_file(Path::new("inputs.parquet"), Panel::Heart).unwrap_err();
        assert!(err.to_string().contains(".parquet"));
    }
}
