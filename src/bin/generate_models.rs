//! Writes illustrative model files (and a sample diabetes batch) so the app
//! can be run without a training pipeline. The coefficients are hand-picked,
//! not fitted; do not use the output for anything clinical.
//!
//! Usage: `generate_models [DIR]` (defaults to `saved_models`).

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use disease_predictor::model::{LinearClassifier, LogisticClassifier, SavedModel, Scaler};
use disease_predictor::Panel;

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5)).rotate_left(7).wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

// Population statistics of the public training sets, used as scaler values.
const DIABETES_MEAN: [f64; 8] = [3.85, 120.89, 69.11, 20.54, 79.80, 31.99, 0.47, 33.24];
const DIABETES_STD: [f64; 8] = [3.37, 31.97, 19.36, 15.95, 115.24, 7.88, 0.33, 11.76];

const HEART_MEAN: [f64; 13] = [
    54.37, 0.68, 0.97, 131.62, 246.26, 0.15, 0.53, 149.65, 0.33, 1.04, 1.40, 0.73, 2.31,
];
const HEART_STD: [f64; 13] = [
    9.08, 0.47, 1.03, 17.54, 51.83, 0.36, 0.53, 22.91, 0.47, 1.16, 0.62, 1.02, 0.61,
];

const PARKINSONS_MEAN: [f64; 22] = [
    154.23, 197.10, 116.32, 0.0062, 0.00004, 0.0033, 0.0034, 0.0099, 0.0297, 0.2823, 0.0157,
    0.0179, 0.0241, 0.0470, 0.0248, 21.886, 0.4985, 0.7181, -5.684, 0.2265, 2.3818, 0.2066,
];
const PARKINSONS_STD: [f64; 22] = [
    41.39, 91.49, 43.52, 0.0048, 0.00003, 0.0030, 0.0028, 0.0089, 0.0189, 0.1949, 0.0102,
    0.0120, 0.0169, 0.0305, 0.0404, 4.4258, 0.1039, 0.0553, 1.0902, 0.0834, 0.3828, 0.0901,
];

fn scaler(mean: &[f64], std: &[f64]) -> Option<Scaler> {
    Some(Scaler {
        mean: mean.to_vec(),
        scale: std.to_vec(),
    })
}

fn models() -> Vec<(Panel, SavedModel)> {
    vec![
        (
            Panel::Diabetes,
            SavedModel::Linear(LinearClassifier {
                name: Some("diabetes-linear-svm".to_string()),
                weights: vec![0.35, 1.10, -0.15, 0.02, -0.12, 0.68, 0.30, 0.18],
                intercept: -0.75,
                scaler: scaler(&DIABETES_MEAN, &DIABETES_STD),
            }),
        ),
        (
            Panel::Heart,
            SavedModel::Logistic(LogisticClassifier {
                name: Some("heart-logistic".to_string()),
                weights: vec![
                    -0.10, -0.75, 0.85, -0.30, -0.20, 0.05, 0.20, 0.55, -0.45, -0.55, 0.35,
                    -0.80, -0.60,
                ],
                intercept: 0.25,
                scaler: scaler(&HEART_MEAN, &HEART_STD),
                threshold: 0.5,
            }),
        ),
        (
            Panel::Parkinsons,
            SavedModel::Linear(LinearClassifier {
                name: Some("parkinsons-linear-svm".to_string()),
                weights: vec![
                    -0.45, -0.10, -0.30, 0.15, 0.20, 0.10, 0.15, 0.10, 0.20, 0.15, 0.10, 0.15,
                    0.20, 0.10, 0.10, -0.25, 0.20, 0.25, 0.70, 0.30, 0.25, 0.65,
                ],
                intercept: 1.10,
                scaler: scaler(&PARKINSONS_MEAN, &PARKINSONS_STD),
            }),
        ),
    ]
}

fn write_models(dir: &Path) -> Result<()> {
    for (panel, model) in models() {
        let path = dir.join(panel.spec().model_file);
        let json = serde_json::to_string_pretty(&model)?;
        std::fs::write(&path, json).with_context(|| format!("writing {}", path.display()))?;
        println!("Wrote {panel} model to {}", path.display());
    }
    Ok(())
}

fn write_sample_batch(dir: &Path, rows: usize) -> Result<()> {
    let mut rng = SimpleRng::new(42);
    let path = dir.join("sample_diabetes.csv");
    let mut writer = csv::Writer::from_path(&path).context("creating sample CSV")?;

    writer.write_record(Panel::Diabetes.spec().columns())?;
    for _ in 0..rows {
        let record: Vec<String> = DIABETES_MEAN
            .iter()
            .zip(DIABETES_STD.iter())
            .map(|(&mean, &std)| format!("{:.3}", rng.gauss(mean, std).max(0.0)))
            .collect();
        writer.write_record(&record)?;
    }
    writer.flush()?;

    println!("Wrote {rows} sample records to {}", path.display());
    Ok(())
}

fn main() -> Result<()> {
    let dir: PathBuf = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("saved_models"));
    std::fs::create_dir_all(&dir).with_context(|| format!("creating {}", dir.display()))?;

    write_models(&dir)?;
    write_sample_batch(&dir, 50)
}
