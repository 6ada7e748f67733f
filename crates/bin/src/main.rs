//! Hepatica CLI binary.
//!
//! Command-line front end for the screening toolkit: synthetic dataset
//! generation, offline forest training, single-patient assessment, and the
//! feature registry listing.

mod integration;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process;

use integration::form::{AssessArgs, DatasetArg, ProfileArg};
use integration::workflow;

#[derive(Parser)]
#[command(name = "hepatica")]
#[command(about = "Hepatica: educational liver-risk screening on synthetic data", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a synthetic dataset to CSV
    Generate {
        /// Dataset to generate
        #[arg(long, value_enum, default_value = "cohort")]
        dataset: DatasetArg,

        /// Number of rows (defaults to the dataset's own default)
        #[arg(long)]
        samples: Option<usize>,

        /// Random seed
        #[arg(long, default_value_t = 42)]
        seed: u64,

        /// Output CSV path
        #[arg(long, default_value = "data/synthetic_liver_risk.csv")]
        output: PathBuf,
    },

    /// Train the random forest on the synthetic cohort and save artifacts
    Train {
        /// Number of trees in the forest
        #[arg(long, default_value_t = 100)]
        trees: usize,

        /// Fraction of rows held out for evaluation
        #[arg(long, default_value_t = 0.2)]
        test_fraction: f64,

        /// Random seed for generation, splitting, and training
        #[arg(long, default_value_t = 42)]
        seed: u64,

        /// CSV snapshot path for the generated cohort
        #[arg(long, default_value = "data/synthetic_liver_risk.csv")]
        data_out: PathBuf,

        /// Serialized model path
        #[arg(long, default_value = "models/forest.json")]
        model_out: PathBuf,

        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Screen one patient and print the risk assessment
    Assess(AssessArgs),

    /// List the feature registry
    Features {
        /// Restrict to one screening profile
        #[arg(long, value_enum)]
        profile: Option<ProfileArg>,
    },
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            dataset,
            samples,
            seed,
            output,
        } => workflow::run_generate(dataset, samples, seed, &output),
        Commands::Train {
            trees,
            test_fraction,
            seed,
            data_out,
            model_out,
            format,
        } => workflow::run_train(trees, test_fraction, seed, &data_out, &model_out, &format),
        Commands::Assess(args) => workflow::run_assess(&args),
        Commands::Features { profile } => {
            workflow::run_features(profile);
            Ok(())
        }
    }
}
