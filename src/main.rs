use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use seoking::config::Config;
use seoking::pipeline::review::Review;

/// seoking: find market, common and unique keywords across competitor brands.
///
/// Feed it one keyword export per brand (the file name becomes the brand
/// name). It strips duplicates and brand-name terms, then classifies what
/// is left by how many brands share it.
#[derive(Parser)]
#[command(name = "seoking", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the duplicate and brand-name keywords cleanup would remove
    Detect {
        /// Keyword export files (CSV or TSV), one per brand
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Print candidates as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Clean every brand's keywords and classify market/common/unique terms
    Analyze {
        /// Keyword export files (CSV or TSV), one per brand
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Keep this keyword even if it was flagged (repeatable)
        #[arg(long = "keep", value_name = "KEYWORD")]
        keep: Vec<String>,

        /// Keep keywords containing the brand's own name
        #[arg(long)]
        keep_brand_terms: bool,

        /// How many market keywords to list (default: 25)
        #[arg(long, default_value = "25")]
        top: usize,

        /// Write CSV exports to this directory
        #[arg(long)]
        out: Option<PathBuf>,

        /// Also write CSV exports to SEOKING_OUTPUT_DIR or a timestamped directory
        #[arg(long)]
        export: bool,

        /// Print the full report as JSON instead of tables
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("seoking=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Detect { files, json } => {
            let corpora = seoking::ingest::read_brand_files(&files).await?;
            seoking::pipeline::run::ensure_unique_brands(&corpora)?;

            let results = seoking::cleanup::detect::detect_all(&corpora);

            if json {
                println!("{}", serde_json::to_string_pretty(&results)?);
            } else {
                seoking::output::terminal::display_cleanup_candidates(&results);
                println!(
                    "{}",
                    "Run `seoking analyze` with --keep / --keep-brand-terms to override.".dimmed()
                );
            }
        }

        Commands::Analyze {
            files,
            keep,
            keep_brand_terms,
            top,
            out,
            export,
            json,
        } => {
            let config = Config::load()?;
            let corpora = seoking::ingest::read_brand_files(&files).await?;

            let review = Review {
                keep_keywords: keep,
                keep_brand_terms,
            };

            let report = run_analysis(corpora, review, config.analysis).await?;

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                seoking::output::terminal::display_summary(&report.summary);
                seoking::output::terminal::display_market_keywords(&report.market, top);
                seoking::output::terminal::display_unique_keywords(&report.unique, 5);
            }

            let export_dir = match out {
                Some(dir) => Some(dir),
                None if export => Some(config.output_dir.clone().unwrap_or_else(|| {
                    seoking::export::files::default_output_dir(chrono::Local::now())
                })),
                None => None,
            };

            if let Some(dir) = export_dir {
                let written = seoking::export::files::write_report(&dir, &report)?;
                // Keep stdout clean for --json consumers
                eprintln!(
                    "{}",
                    format!("Exported {} CSV files to {}", written.len(), dir.display()).bold()
                );
            }
        }
    }

    Ok(())
}

/// Run the pipeline off the async runtime with a spinner.
///
/// Large corpora take a moment to aggregate; the spinner keeps the terminal
/// alive meanwhile.
async fn run_analysis(
    corpora: Vec<seoking::corpus::models::BrandCorpus>,
    review: Review,
    config: seoking::analysis::market::AnalysisConfig,
) -> Result<seoking::pipeline::run::AnalysisReport> {
    let keyword_count: usize = corpora.iter().map(|c| c.original_count).sum();
    info!(
        brands = corpora.len(),
        keywords = keyword_count,
        "Starting analysis"
    );

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("  {spinner} {msg}")
            .expect("valid template"),
    );
    pb.set_message(format!(
        "Analyzing {} keywords across {} brands...",
        keyword_count,
        corpora.len()
    ));
    pb.enable_steady_tick(Duration::from_millis(100));

    let result = tokio::task::spawn_blocking(move || {
        seoking::pipeline::run::run(&corpora, &review, &config)
    })
    .await
    .context("Analysis worker panicked")?;

    pb.finish_and_clear();
    result
}
