//! Offline training job producing the three model artifacts.
//!
//! Consumes the four Disease-Symptom CSVs (dataset, descriptions, precautions,
//! symptom severities), fits a multinomial logistic regression by full-batch
//! gradient descent and writes `model.json`, `features.json` and
//! `disease_info.json` into the model directory.

use std::{
    collections::{BTreeSet, HashMap},
    fs,
    path::Path,
};

use anyhow::{Context, Result};
use indexmap::IndexMap;
use ndarray::{Array1, Array2, Axis};
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};
use tracing::info;

use crate::{
    artifacts::{DiseaseInfo, FeatureSpace, DISEASE_INFO_FILE, FEATURES_FILE, MODEL_FILE},
    config::Settings,
    model::{softmax, SoftmaxClassifier},
    triage::risk,
};

const SPLIT_SEED: u64 = 42;
const TEST_FRACTION: f64 = 0.2;
const LEARNING_RATE: f64 = 0.5;
const EPOCHS: usize = 300;
const L2_PENALTY: f64 = 1e-4;
/// Severity weight assumed for symptoms absent from the severity table.
const DEFAULT_SYMPTOM_WEIGHT: f64 = 3.0;

#[derive(Debug)]
struct CaseRow {
    disease: String,
    symptoms: Vec<String>,
}

/// Train the classifier and assemble disease metadata.
pub fn run(settings: &Settings) -> Result<()> {
    let cases = load_dataset(&settings.join_data("dataset.csv"))?;
    info!(rows = cases.len(), "loaded training dataset");

    let vocabulary: Vec<String> = cases
        .iter()
        .flat_map(|c| c.symptoms.iter().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();
    let classes: Vec<String> = cases
        .iter()
        .map(|c| c.disease.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();
    info!(
        symptoms = vocabulary.len(),
        diseases = classes.len(),
        "built feature space"
    );

    let (x, y) = encode_cases(&cases, &vocabulary, &classes);
    let (train_idx, test_idx) = split_indices(cases.len());

    let classifier = fit_softmax(&x, &y, &train_idx, classes.len())?;
    let accuracy = holdout_accuracy(&classifier, &x, &y, &test_idx);
    info!(accuracy = format!("{:.2}%", accuracy * 100.0), "holdout accuracy");

    let disease_info = build_disease_info(settings, &cases, &classes)?;

    fs::create_dir_all(&settings.model_dir).context("creating model dir")?;
    write_json(&settings.join_model(MODEL_FILE), &classifier.to_params())?;
    write_json(
        &settings.join_model(FEATURES_FILE),
        &FeatureSpace {
            symptoms: vocabulary,
            classes,
        },
    )?;
    write_json(&settings.join_model(DISEASE_INFO_FILE), &disease_info)?;
    info!(dir = %settings.model_dir.display(), "wrote model artifacts");
    Ok(())
}

fn load_dataset(path: &Path) -> Result<Vec<CaseRow>> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| {
            format!(
                "opening {}; download the Disease-Symptom dataset first",
                path.display()
            )
        })?;
    let headers = reader.headers()?.clone();
    let disease_col = headers
        .iter()
        .position(|h| h.trim() == "Disease")
        .context("dataset.csv has no Disease column")?;
    let symptom_cols: Vec<usize> = headers
        .iter()
        .enumerate()
        .filter(|(_, h)| h.trim().starts_with("Symptom"))
        .map(|(i, _)| i)
        .collect();

    let mut cases = Vec::new();
    for record in reader.records() {
        let record = record?;
        let disease = record
            .get(disease_col)
            .unwrap_or_default()
            .trim()
            .to_string();
        if disease.is_empty() {
            continue;
        }
        let symptoms = symptom_cols
            .iter()
            .filter_map(|&i| record.get(i))
            .map(|s| s.trim().to_lowercase())
            .filter(|s| !s.is_empty())
            .collect();
        cases.push(CaseRow { disease, symptoms });
    }
    Ok(cases)
}

fn encode_cases(
    cases: &[CaseRow],
    vocabulary: &[String],
    classes: &[String],
) -> (Array2<f64>, Vec<usize>) {
    let mut x = Array2::zeros((cases.len(), vocabulary.len()));
    let mut y = Vec::with_capacity(cases.len());
    for (row, case) in cases.iter().enumerate() {
        for symptom in &case.symptoms {
            if let Ok(col) = vocabulary.binary_search(symptom) {
                x[[row, col]] = 1.0;
            }
        }
        let class = classes
            .binary_search(&case.disease)
            .expect("disease came from the same rows");
        y.push(class);
    }
    (x, y)
}

fn split_indices(n: usize) -> (Vec<usize>, Vec<usize>) {
    let mut indices: Vec<usize> = (0..n).collect();
    let mut rng = StdRng::seed_from_u64(SPLIT_SEED);
    indices.shuffle(&mut rng);
    let test_len = ((n as f64) * TEST_FRACTION).round() as usize;
    let test = indices[..test_len].to_vec();
    let train = indices[test_len..].to_vec();
    (train, test)
}

/// Full-batch gradient descent on the cross-entropy objective.
fn fit_softmax(
    x: &Array2<f64>,
    y: &[usize],
    train_idx: &[usize],
    n_classes: usize,
) -> Result<SoftmaxClassifier> {
    let n_features = x.ncols();
    let x_train = x.select(Axis(0), train_idx);
    let n = train_idx.len() as f64;

    let mut onehot = Array2::zeros((train_idx.len(), n_classes));
    for (row, &idx) in train_idx.iter().enumerate() {
        onehot[[row, y[idx]]] = 1.0;
    }

    let mut weights: Array2<f64> = Array2::zeros((n_classes, n_features));
    let mut intercepts: Array1<f64> = Array1::zeros(n_classes);

    for _ in 0..EPOCHS {
        let mut probs = x_train.dot(&weights.t()) + &intercepts;
        for mut row in probs.outer_iter_mut() {
            let dist = softmax(row.view());
            for (slot, value) in row.iter_mut().zip(dist) {
                *slot = value;
            }
        }
        let diff = probs - &onehot;
        let grad_w = diff.t().dot(&x_train) / n + &(L2_PENALTY * &weights);
        let grad_b = diff.sum_axis(Axis(0)) / n;
        weights = weights - LEARNING_RATE * grad_w;
        intercepts = intercepts - LEARNING_RATE * grad_b;
    }

    Ok(SoftmaxClassifier::new(weights, intercepts)?)
}

fn holdout_accuracy(
    classifier: &SoftmaxClassifier,
    x: &Array2<f64>,
    y: &[usize],
    test_idx: &[usize],
) -> f64 {
    use crate::model::Classifier;

    if test_idx.is_empty() {
        return 0.0;
    }
    let mut correct = 0usize;
    for &idx in test_idx {
        let Ok(dist) = classifier.predict_distribution(x.row(idx)) else {
            continue;
        };
        let best = dist
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.partial_cmp(b.1).unwrap_or(std::cmp::Ordering::Equal))
            .map(|(i, _)| i)
            .unwrap_or(0);
        if best == y[idx] {
            correct += 1;
        }
    }
    correct as f64 / test_idx.len() as f64
}

fn build_disease_info(
    settings: &Settings,
    cases: &[CaseRow],
    classes: &[String],
) -> Result<IndexMap<String, DiseaseInfo>> {
    let severity_map = load_two_columns(&settings.join_data("symptom_severity.csv"))?
        .into_iter()
        .filter_map(|(symptom, weight)| {
            weight
                .trim()
                .parse::<f64>()
                .ok()
                .map(|w| (symptom.trim().to_lowercase(), w))
        })
        .collect::<HashMap<String, f64>>();
    let desc_map: HashMap<String, String> =
        load_two_columns(&settings.join_data("symptom_Description.csv"))?
            .into_iter()
            .map(|(disease, description)| (disease.trim().to_string(), description.trim().to_string()))
            .collect();
    let precaution_map = load_precautions(&settings.join_data("symptom_precaution.csv"))?;

    // Mean severity over every symptom occurrence attributed to the disease.
    let mut occurrences: HashMap<&str, Vec<f64>> = HashMap::new();
    for case in cases {
        let bucket = occurrences.entry(case.disease.as_str()).or_default();
        for symptom in &case.symptoms {
            bucket.push(
                severity_map
                    .get(symptom)
                    .copied()
                    .unwrap_or(DEFAULT_SYMPTOM_WEIGHT),
            );
        }
    }

    let mut table = IndexMap::new();
    for disease in classes {
        let score = occurrences
            .get(disease.as_str())
            .filter(|weights| !weights.is_empty())
            .map(|weights| weights.iter().sum::<f64>() / weights.len() as f64)
            .unwrap_or(DEFAULT_SYMPTOM_WEIGHT);
        table.insert(
            disease.clone(),
            DiseaseInfo {
                description: desc_map
                    .get(disease)
                    .cloned()
                    .unwrap_or_else(|| format!("A medical condition: {disease}.")),
                precautions: precaution_map.get(disease).cloned().unwrap_or_else(|| {
                    vec![
                        "Consult a doctor".to_string(),
                        "Rest well".to_string(),
                        "Stay hydrated".to_string(),
                    ]
                }),
                severity_score: score,
                risk_level: risk::risk_level(disease, score),
                is_emergency: risk::is_emergency(disease, score),
            },
        );
    }
    Ok(table)
}

/// Read a two-column CSV into (first, second) pairs, skipping the header.
fn load_two_columns(path: &Path) -> Result<Vec<(String, String)>> {
    let mut reader =
        csv::Reader::from_path(path).with_context(|| format!("opening {}", path.display()))?;
    let mut pairs = Vec::new();
    for record in reader.records() {
        let record = record?;
        let (Some(first), Some(second)) = (record.get(0), record.get(1)) else {
            continue;
        };
        pairs.push((first.to_string(), second.to_string()));
    }
    Ok(pairs)
}

fn load_precautions(path: &Path) -> Result<HashMap<String, Vec<String>>> {
    let mut reader =
        csv::Reader::from_path(path).with_context(|| format!("opening {}", path.display()))?;
    let headers = reader.headers()?.clone();
    let disease_col = headers
        .iter()
        .position(|h| h.trim() == "Disease")
        .context("symptom_precaution.csv has no Disease column")?;
    let precaution_cols: Vec<usize> = headers
        .iter()
        .enumerate()
        .filter(|(_, h)| h.trim().starts_with("Precaution"))
        .map(|(i, _)| i)
        .collect();

    let mut map = HashMap::new();
    for record in reader.records() {
        let record = record?;
        let disease = record
            .get(disease_col)
            .unwrap_or_default()
            .trim()
            .to_string();
        if disease.is_empty() {
            continue;
        }
        let precautions: Vec<String> = precaution_cols
            .iter()
            .filter_map(|&i| record.get(i))
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();
        map.insert(disease, precautions);
    }
    Ok(map)
}

fn write_json<T: serde::Serialize>(path: &Path, value: &T) -> Result<()> {
    let payload = serde_json::to_string_pretty(value)?;
    fs::write(path, payload).with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}
