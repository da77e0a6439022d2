//! CLI entry point for the score grader tool.
//!
//! Provides subcommands for grading a stream of integer scores read from a
//! file or stdin, and for showing the resolved grade mapping.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use score_grader::grader::Grader;
use score_grader::output::{print_json, print_pretty};
use score_grader::reader::{grade_lines, open_input};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "score_grader")]
#[command(about = "A tool to convert numeric scores into grade labels", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Grading scheme configuration shared by every subcommand.
#[derive(Args)]
struct SchemeArgs {
    /// Comma-separated grade labels, lowest band first
    #[arg(short, long, value_delimiter = ',')]
    labels: Option<Vec<String>>,

    /// Comma-separated cutoffs; each is the lowest score of the band above it
    #[arg(short, long, value_delimiter = ',')]
    cutoffs: Option<Vec<f64>>,

    /// Lowest score to accept (default: unbounded)
    #[arg(long)]
    min_score: Option<f64>,

    /// Highest score to accept (default: unbounded)
    #[arg(long)]
    max_score: Option<f64>,
}

impl SchemeArgs {
    /// Builds the grader, falling back to the F/D/C/B/A defaults for any
    /// flag the user did not pass.
    fn build(self) -> Result<Grader> {
        let labels = self
            .labels
            .unwrap_or_else(|| Grader::DEFAULT_LABELS.iter().map(|s| s.to_string()).collect());
        let cutoffs = self.cutoffs.unwrap_or_else(|| Grader::DEFAULT_CUTOFFS.to_vec());
        let min_score = self.min_score.unwrap_or(f64::NEG_INFINITY);
        let max_score = self.max_score.unwrap_or(f64::INFINITY);

        Ok(Grader::new(labels, cutoffs, min_score, max_score)?)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Grade scores from a file or stdin, one integer per line
    Grade {
        /// Path to read scores from; stdin when omitted
        #[arg(value_name = "FILE")]
        source: Option<PathBuf>,

        #[command(flatten)]
        scheme: SchemeArgs,
    },
    /// Show the resolved grade mapping and score domain
    Describe {
        /// Print the mapping as JSON instead of plain text
        #[arg(long, default_value_t = false)]
        json: bool,

        #[command(flatten)]
        scheme: SchemeArgs,
    },
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/score_grader.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("score_grader.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse().unwrap()));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse().unwrap()));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Grade { source, scheme } => {
            let grader = scheme.build()?;
            let input = open_input(source.as_deref())?;

            let stdout = std::io::stdout();
            let summary = grade_lines(input, stdout.lock(), &grader)?;

            info!(
                lines = summary.lines,
                graded = summary.graded,
                malformed = summary.malformed,
                rejected = summary.rejected,
                "Grading finished"
            );
        }
        Commands::Describe { json, scheme } => {
            let grader = scheme.build()?;

            if json {
                print_json(&grader)?;
            } else {
                print_pretty(&grader);
            }
        }
    }

    Ok(())
}
