//! Command-line interface for dominant_colors
//!
//! With no arguments, clusters `./data.csv` into three colors and prints one
//! `r g b` line per cluster center.

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use dominant_colors::{
    find_dominant_colors, output, ClusterConfig, ClusteringSpace, DataError, InputKind,
    OutputFormat,
};
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "dominant-colors",
    about = "Find the dominant colors of an RGB dataset with k-means",
    version
)]
struct Cli {
    /// CSV dataset (header line, then r,g,b rows) or image with --image
    input: Option<PathBuf>,

    /// Number of dominant colors
    #[arg(short = 'k', long = "clusters")]
    clusters: Option<usize>,

    /// Seed for reproducible output
    #[arg(short, long)]
    seed: Option<u64>,

    /// Independent k-means runs; the tightest is kept
    #[arg(long)]
    runs: Option<usize>,

    /// Iteration cap per run
    #[arg(long)]
    max_iterations: Option<usize>,

    /// Convergence threshold (space dependent)
    #[arg(long)]
    convergence: Option<f32>,

    /// Color space distances are measured in
    #[arg(long, value_enum)]
    space: Option<SpaceArg>,

    /// Treat the input as an image and cluster its pixels
    #[arg(long)]
    image: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "plain")]
    format: FormatArg,

    /// JSON configuration file; command-line flags override its values
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
enum SpaceArg {
    Rgb,
    Lab,
}

impl From<SpaceArg> for ClusteringSpace {
    fn from(arg: SpaceArg) -> Self {
        match arg {
            SpaceArg::Rgb => ClusteringSpace::Rgb,
            SpaceArg::Lab => ClusteringSpace::Lab,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum FormatArg {
    Plain,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Plain => OutputFormat::Plain,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

impl Cli {
    fn resolve_config(&self) -> Result<ClusterConfig> {
        let mut config = match &self.config {
            Some(path) => ClusterConfig::from_json_file(path)?,
            None => ClusterConfig::default(),
        };

        if let Some(input) = &self.input {
            config.input_path = input.clone();
        }
        if self.image {
            config.input_kind = InputKind::Image;
        }
        if let Some(clusters) = self.clusters {
            config.cluster_count = clusters;
        }
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if let Some(runs) = self.runs {
            config.runs = runs;
        }
        if let Some(max_iterations) = self.max_iterations {
            config.max_iterations = max_iterations;
        }
        if let Some(convergence) = self.convergence {
            config.convergence = Some(convergence);
        }
        if let Some(space) = self.space {
            config.space = space.into();
        }

        Ok(config)
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = cli.resolve_config()?;
    debug!(?config, "resolved configuration");

    let outcome = find_dominant_colors(&config)
        .with_context(|| format!("Failed to cluster {}", config.input_path.display()))?;

    output::write_centers(&outcome, cli.format.into(), io::stdout().lock())?;
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("Error: {:#}", error);
            if let Some(data_error) = error.downcast_ref::<DataError>() {
                eprintln!("Suggestion: {}", data_error.user_message());
            }
            ExitCode::FAILURE
        }
    }
}
