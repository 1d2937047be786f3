//! End-to-end scorer usage: config files feeding a candidate ranking loop

use hyperfs::{
    create_scorer, Direction, Error, Estimator, MetricFn, MetricSpec, ResponseMethod, Result,
    Scorer, ScorerConfig, ScorerFactory,
};
use ndarray::{array, Array2, ArrayView2};
use std::fs;

/// Linear model `y = w·x + b`, thresholded at 0.5 for labels
struct Linear {
    weights: Vec<f64>,
    bias: f64,
}

impl Linear {
    fn raw(&self, x: ArrayView2<'_, f64>) -> Vec<f64> {
        x.rows()
            .into_iter()
            .map(|row| row.iter().zip(&self.weights).map(|(a, b)| a * b).sum::<f64>() + self.bias)
            .collect()
    }
}

impl Estimator for Linear {
    fn predict(&self, x: ArrayView2<'_, f64>) -> Result<Vec<f64>> {
        Ok(self.raw(x))
    }

    fn decision_function(&self, x: ArrayView2<'_, f64>) -> Result<Vec<f64>> {
        Ok(self.raw(x).into_iter().map(|v| v - 0.5).collect())
    }

    fn predict_proba(&self, x: ArrayView2<'_, f64>) -> Result<Array2<f64>> {
        let p: Vec<f64> = self.raw(x).into_iter().map(|v| 1.0 / (1.0 + (-v).exp())).collect();
        Ok(Array2::from_shape_fn((p.len(), 2), |(i, j)| if j == 1 { p[i] } else { 1.0 - p[i] }))
    }
}

/// Index of the best candidate under "larger is better"
fn best_candidate(scorer: &Scorer, candidates: &[Linear], x: ArrayView2<'_, f64>, y: &[f64]) -> usize {
    let scores: Vec<f64> = candidates
        .iter()
        .map(|model| scorer.score(model, x, y).unwrap())
        .collect();
    scores
        .iter()
        .enumerate()
        .max_by(|a, b| a.1.total_cmp(b.1))
        .map(|(i, _)| i)
        .unwrap()
}

fn regression_data() -> (Array2<f64>, Vec<f64>) {
    let x = array![[0.0, 1.0], [1.0, 0.0], [2.0, 1.0], [3.0, 2.0], [4.0, 0.5]];
    let y = x.rows().into_iter().map(|r| 2.0 * r[0] + r[1]).collect();
    (x, y)
}

fn candidates() -> Vec<Linear> {
    vec![
        Linear { weights: vec![0.0, 0.0], bias: 3.0 },
        Linear { weights: vec![2.0, 1.0], bias: 0.0 },
        Linear { weights: vec![1.0, 1.0], bias: 1.0 },
    ]
}

#[test]
fn test_minimized_error_ranks_true_model_first() {
    let (x, y) = regression_data();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scorer.yaml");
    fs::write(&path, "metric: neg_mean_squared_error\ndirection: minimize\nresponse_method: predict\n").unwrap();

    let config = ScorerConfig::from_file(&path).unwrap();
    let scorer = ScorerFactory::default().create_from_config(&config).unwrap();

    assert_eq!(best_candidate(&scorer, &candidates(), x.view(), &y), 1);
}

#[test]
fn test_wrong_direction_ranks_worst_model_first() {
    let (x, y) = regression_data();
    let scorer = create_scorer("neg_mean_squared_error", Direction::Maximize, ResponseMethod::Predict).unwrap();
    assert_ne!(best_candidate(&scorer, &candidates(), x.view(), &y), 1);
}

#[test]
fn test_json_config_matches_direct_construction() {
    let (x, y) = regression_data();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scorer.json");
    fs::write(&path, r#"{"metric": "r2", "direction": "maximize"}"#).unwrap();

    let from_config = ScorerFactory::default()
        .create_from_config(&ScorerConfig::from_file(&path).unwrap())
        .unwrap();
    let direct = create_scorer("r2", Direction::Maximize, ResponseMethod::Predict).unwrap();

    for model in candidates() {
        assert_eq!(
            from_config.score(&model, x.view(), &y).unwrap(),
            direct.score(&model, x.view(), &y).unwrap()
        );
    }
}

#[test]
fn test_invalid_config_values_fail_at_construction() {
    let factory = ScorerFactory::default();

    let bad_direction = ScorerConfig::new("r2", "upwards");
    assert!(matches!(factory.create_from_config(&bad_direction), Err(Error::InvalidArgument(_))));

    let bad_method = ScorerConfig::new("roc_auc", "maximize").with_response_method("predict_log_proba");
    assert!(matches!(factory.create_from_config(&bad_method), Err(Error::InvalidArgument(_))));

    let bad_metric = ScorerConfig::from_yaml_str("metric: [r2]\ndirection: maximize\n").unwrap();
    assert!(matches!(factory.create_from_config(&bad_metric), Err(Error::Type(_))));
}

#[test]
fn test_probability_and_decision_channels_agree_on_ranking() {
    let x = array![[0.1], [0.3], [0.7], [0.9]];
    let y = [0.0, 0.0, 1.0, 1.0];
    let model = Linear { weights: vec![1.0], bias: 0.0 };

    let by_proba = create_scorer("roc_auc", Direction::Maximize, ResponseMethod::PredictProba).unwrap();
    let by_decision = create_scorer("roc_auc", Direction::Maximize, ResponseMethod::DecisionFunction).unwrap();

    assert_eq!(by_proba.score(&model, x.view(), &y).unwrap(), 1.0);
    assert_eq!(by_decision.score(&model, x.view(), &y).unwrap(), 1.0);
}

#[test]
fn test_custom_metric_in_ranking_loop() {
    let (x, y) = regression_data();
    let neg_max_error = MetricFn::new(|model: &dyn Estimator, x: ArrayView2<f64>, y_true: &[f64], _w: Option<&[f64]>| {
        let pred = model.predict(x)?;
        Ok(-pred
            .iter()
            .zip(y_true)
            .map(|(p, t)| (p - t).abs())
            .fold(0.0, f64::max))
    })
    .named("neg_max_error");

    // direction is not applied: the metric already returns larger-is-better
    let scorer = create_scorer(MetricSpec::custom(neg_max_error), Direction::Minimize, ResponseMethod::Predict).unwrap();
    assert_eq!(scorer.name(), "neg_max_error");
    assert_eq!(best_candidate(&scorer, &candidates(), x.view(), &y), 1);
}
