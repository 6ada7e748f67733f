//! Orchestration of the generate, train, assess, and features subcommands.

use std::error::Error;
use std::path::Path;
use std::time::Duration;

use indicatif::ProgressBar;

use hepatica::ScreeningProfile;
use hepatica::screening::FeatureKind;
use hepatica_data::{
    CohortConfig, ExtendedScreeningConfig, FeatureTable, ScreeningConfig, generate_cohort,
    generate_extended, generate_standard,
};
use hepatica_model::{
    ForestConfig, LogisticConfig, ModelArtifact, RandomForest, SavedModel, ScreeningPipeline,
    metrics,
};
use hepatica_report::{
    EvaluationExport, ExportFormat, Exporter, FeatureInfluence, RiskAssessment, band_banner,
    influence_chart_svg,
};

use super::form::{AssessArgs, DatasetArg, ProfileArg};

pub(crate) fn run_generate(
    dataset: DatasetArg,
    samples: Option<usize>,
    seed: u64,
    output: &Path,
) -> Result<(), Box<dyn Error>> {
    let table = build_dataset(dataset, samples, seed)?;
    table.write_csv(output)?;

    println!(
        "Wrote {} rows x {} features to {} (positive rate {:.1}%)",
        table.n_samples(),
        table.n_features(),
        output.display(),
        table.positive_rate() * 100.0
    );
    Ok(())
}

fn build_dataset(
    dataset: DatasetArg,
    samples: Option<usize>,
    seed: u64,
) -> Result<FeatureTable, Box<dyn Error>> {
    let table = match dataset {
        DatasetArg::Standard => {
            let mut config = ScreeningConfig { seed, ..Default::default() };
            if let Some(samples) = samples {
                config.samples = samples;
            }
            generate_standard(&config)?
        }
        DatasetArg::Extended => {
            let mut config = ExtendedScreeningConfig { seed, ..Default::default() };
            if let Some(samples) = samples {
                config.samples = samples;
            }
            generate_extended(&config)?
        }
        DatasetArg::Cohort => {
            let mut config = CohortConfig { seed, ..Default::default() };
            if let Some(samples) = samples {
                config.samples = samples;
            }
            generate_cohort(&config)?
        }
    };
    Ok(table)
}

pub(crate) fn run_train(
    trees: usize,
    test_fraction: f64,
    seed: u64,
    data_out: &Path,
    model_out: &Path,
    format: &str,
) -> Result<(), Box<dyn Error>> {
    let cohort = generate_cohort(&CohortConfig { seed, ..Default::default() })?;
    cohort.write_csv(data_out)?;

    let (train, test) = cohort.split(test_fraction, seed)?;

    let spinner = ProgressBar::new_spinner();
    spinner.set_message(format!(
        "Training random forest ({} trees on {} rows)",
        trees,
        train.n_samples()
    ));
    spinner.enable_steady_tick(Duration::from_millis(100));

    let forest = RandomForest::fit(
        train.feature_names().to_vec(),
        train.features(),
        train.labels(),
        &ForestConfig { trees, seed, ..Default::default() },
    )?;
    spinner.finish_and_clear();

    let probabilities = forest.predict_proba(test.features())?.to_vec();
    let predictions = forest.predict(test.features())?;

    let evaluation = EvaluationExport {
        model_name: "random_forest".to_string(),
        train_rows: train.n_samples(),
        test_rows: test.n_samples(),
        accuracy: metrics::accuracy(&predictions, test.labels()),
        roc_auc: metrics::roc_auc(&probabilities, test.labels()),
    };

    let artifact = ModelArtifact::new(
        "liver_risk_forest",
        train.n_samples(),
        SavedModel::Forest(forest),
    );
    artifact.save(model_out)?;

    match format {
        "json" => println!("{}", evaluation.export_to_string(ExportFormat::PrettyJson)?),
        _ => {
            println!("Accuracy: {:.3}", evaluation.accuracy);
            println!("AUC-ROC:  {:.3}", evaluation.roc_auc);
        }
    }
    println!("Model saved to {}", model_out.display());
    println!("Dataset snapshot saved to {}", data_out.display());
    Ok(())
}

pub(crate) fn run_assess(args: &AssessArgs) -> Result<(), Box<dyn Error>> {
    let profile = args.profile();
    let record = args.to_record()?;

    let pipeline = fit_profile_pipeline(profile)?;
    let features = record.to_features(profile)?;
    let probability = pipeline.predict_proba_named(&features)?;
    let influences = FeatureInfluence::from_pairs(pipeline.normalized_coefficients());

    let assessment = RiskAssessment::from_probability(probability)
        .with_bmi(record.bmi())
        .with_influences(influences);

    if let Some(chart_out) = &args.chart_out {
        let svg = influence_chart_svg(&assessment.influences, 640, 320);
        std::fs::write(chart_out, svg)?;
    }

    match args.format.as_str() {
        "json" => println!("{}", assessment.to_json()?),
        _ => {
            println!("{}", band_banner(assessment.band));
            println!("{}", assessment.to_ascii_table());
            if let Some(chart_out) = &args.chart_out {
                println!("Influence chart saved to {}", chart_out.display());
            }
        }
    }
    Ok(())
}

/// Fit the in-process screening pipeline for a profile.
///
/// The screening form retrains on its fixed-seed synthetic dataset at each
/// invocation, exactly as the original app rebuilt its model per run.
fn fit_profile_pipeline(profile: ScreeningProfile) -> Result<ScreeningPipeline, Box<dyn Error>> {
    let table = match profile {
        ScreeningProfile::Standard => generate_standard(&ScreeningConfig::default())?,
        ScreeningProfile::Extended => generate_extended(&ExtendedScreeningConfig::default())?,
    };
    Ok(ScreeningPipeline::fit(
        table.feature_names().to_vec(),
        table.features(),
        table.labels(),
        &LogisticConfig::default(),
    )?)
}

pub(crate) fn run_features(profile: Option<ProfileArg>) {
    let profiles: Vec<ScreeningProfile> = match profile {
        Some(profile) => vec![profile.into()],
        None => ScreeningProfile::all(),
    };

    for profile in profiles {
        println!("\n{} profile:", profile);
        println!("{:<18} {:<22} {}", "Feature", "Kind", "Description");
        println!("{}", "-".repeat(72));
        for feature in profile.features() {
            let kind = match feature.kind {
                FeatureKind::Continuous { min, max } => format!("continuous [{min}, {max}]"),
                FeatureKind::Binary => "binary".to_string(),
                FeatureKind::Ordinal { levels } => format!("ordinal ({levels} levels)"),
            };
            println!("{:<18} {:<22} {}", feature.name, kind, feature.description);
        }
    }
}
