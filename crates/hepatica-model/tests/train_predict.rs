//! End-to-end training flows on the synthetic datasets.

use hepatica_data::{CohortConfig, ScreeningConfig, generate_cohort, generate_standard};
use hepatica_model::{
    ForestConfig, LogisticConfig, RandomForest, ScreeningPipeline, metrics,
};

fn fit_standard_pipeline() -> (ScreeningPipeline, hepatica_data::FeatureTable) {
    let table = generate_standard(&ScreeningConfig::default()).unwrap();
    let pipeline = ScreeningPipeline::fit(
        table.feature_names().to_vec(),
        table.features(),
        table.labels(),
        &LogisticConfig::default(),
    )
    .unwrap();
    (pipeline, table)
}

#[test]
fn standard_pipeline_recovers_the_generating_signal() {
    let (pipeline, table) = fit_standard_pipeline();

    let probs = pipeline.predict_proba(table.features()).unwrap();
    let scores: Vec<f64> = probs.to_vec();
    let auc = metrics::roc_auc(&scores, table.labels());

    // The labels are a deterministic function of the same columns, so the
    // fit should rank the training rows almost perfectly.
    assert!(auc > 0.97, "training AUC was {auc}");
}

#[test]
fn standard_pipeline_fit_is_deterministic() {
    let (a, _) = fit_standard_pipeline();
    let (b, _) = fit_standard_pipeline();
    assert_eq!(a.model().coefficients(), b.model().coefficients());
    assert_eq!(a.model().intercept(), b.model().intercept());
}

#[test]
fn standard_pipeline_weights_every_risk_factor_upward() {
    let (pipeline, _) = fit_standard_pipeline();
    // Every generating weight is positive, and so should every fitted
    // coefficient be.
    for (name, weight) in pipeline.normalized_coefficients() {
        assert!(weight > 0.0, "{name} was weighted {weight}");
    }
}

#[test]
fn forest_beats_chance_on_held_out_cohort() {
    let table = generate_cohort(&CohortConfig {
        samples: 800,
        ..Default::default()
    })
    .unwrap();
    let (train, test) = table.split(0.2, 42).unwrap();

    let forest = RandomForest::fit(
        train.feature_names().to_vec(),
        train.features(),
        train.labels(),
        &ForestConfig {
            trees: 25,
            max_depth: Some(8),
            ..Default::default()
        },
    )
    .unwrap();

    let probs = forest.predict_proba(test.features()).unwrap().to_vec();
    let preds = forest.predict(test.features()).unwrap();

    let accuracy = metrics::accuracy(&preds, test.labels());
    let auc = metrics::roc_auc(&probs, test.labels());

    // The cohort labels are mostly a function of the features with mild
    // noise, so a forest should separate the classes comfortably.
    assert!(accuracy > 0.75, "held-out accuracy was {accuracy}");
    assert!(auc > 0.8, "held-out AUC was {auc}");
}

#[test]
fn forest_importances_favor_formula_features() {
    let table = generate_cohort(&CohortConfig {
        samples: 800,
        ..Default::default()
    })
    .unwrap();

    let forest = RandomForest::fit(
        table.feature_names().to_vec(),
        table.features(),
        table.labels(),
        &ForestConfig {
            trees: 25,
            max_depth: Some(8),
            ..Default::default()
        },
    )
    .unwrap();

    let importances: std::collections::HashMap<String, f64> =
        forest.feature_importances().into_iter().collect();

    // `bmi` carries the largest generating weight; `age` never enters the
    // label formula at all.
    assert!(importances["bmi"] > importances["age"]);
}
