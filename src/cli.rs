use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "oasreport")]
#[command(version)]
#[command(about = "OpenAPI documentation report and lint tool", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build a flattened documentation report from an OpenAPI file
    Report {
        /// Path to OpenAPI JSON file
        #[arg(short, long)]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short = 'O', long)]
        output: Option<PathBuf>,
    },

    /// Run the validation rule set against an OpenAPI file
    Validate {
        /// Path to OpenAPI JSON file
        #[arg(short, long)]
        input: PathBuf,

        /// Path to a rule configuration file (bundled rules if not specified)
        #[arg(short, long)]
        rules: Option<PathBuf>,

        /// Emit findings as JSON instead of terminal output
        #[arg(long)]
        json: bool,
    },

    /// Fetch remote OpenAPI documents and build one report per request
    Batch {
        /// Path to a JSON requests file: [{"url", "reportFileName"}]
        #[arg(short, long)]
        requests: PathBuf,

        /// Output directory for the generated reports
        #[arg(short = 'O', long)]
        output: PathBuf,

        /// Skip TLS certificate verification for fetches
        #[arg(long)]
        insecure: bool,
    },
}
