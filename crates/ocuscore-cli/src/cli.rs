use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Full evaluation as JSON
    #[default]
    Json,
    /// Clinical report envelope as JSON
    Report,
    /// Markdown clinical summary
    Markdown,
}

#[derive(Parser, Debug)]
#[command(name = "ocuscore")]
#[command(about = "Post-operative eye surgery risk scoring", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (defaults to the platform config directory)
    #[arg(long, global = true, env = "OCUSCORE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Score an assessment and print the results
    Score(ScoreArgs),

    /// List every scoring rule
    Rules,
}

#[derive(clap::Args, Debug, Default)]
pub struct ScoreArgs {
    /// Assessment JSON file, or `-` for stdin
    pub assessment: PathBuf,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Patient-facing explanation in the Markdown summary
    #[arg(long)]
    pub simplified: bool,

    /// Seed for the random source, for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,

    /// Raw image-analysis answer to attach as media findings
    #[arg(long, conflicts_with = "simulate_media")]
    pub media: Option<PathBuf>,

    /// Attach simulated media findings
    #[arg(long)]
    pub simulate_media: bool,

    /// Raw report-extraction answer to merge into the assessment
    #[arg(long)]
    pub extraction: Option<PathBuf>,

    /// Tera template for the Markdown summary
    #[arg(long)]
    pub template: Option<PathBuf>,

    /// Mark the report as confirmed by the treating clinician
    #[arg(long)]
    pub confirmed: bool,
}
