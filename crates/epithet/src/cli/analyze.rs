//! The `epithet analyze` command: pick adjectives for a file of photos.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::Context;
use clap::{Args, ValueEnum};
use epithet_core::config::AnalysisConfig;
use epithet_core::{
    AnalyzeOptions, Config, Epithet, OutputFormat as CoreOutputFormat, OutputWriter, Photo,
};

use super::store::VocabularyFile;

/// Supported output formats.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// A JSON array of results
    Json,
    /// One JSON object per line (newline-delimited)
    Jsonl,
}

impl From<OutputFormat> for CoreOutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Json => CoreOutputFormat::Json,
            OutputFormat::Jsonl => CoreOutputFormat::JsonLines,
        }
    }
}

/// Arguments for the `analyze` command.
#[derive(Args, Debug, Default)]
pub struct AnalyzeArgs {
    /// JSON array or JSONL file of photos
    #[arg(required = true)]
    pub input: PathBuf,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output format (defaults to `[output] format` from config)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Single-line JSON instead of pretty-printed
    #[arg(long)]
    pub compact: bool,

    /// Maximum adjectives per photo
    #[arg(short, long)]
    pub max_adjectives: Option<usize>,

    /// Omit the category → words map
    #[arg(long)]
    pub no_categories: bool,

    /// Omit the enhanced description
    #[arg(long)]
    pub no_description: bool,

    /// Do not learn vocabulary from the photos
    #[arg(long)]
    pub no_learn: bool,

    /// Use the legacy selection (themes plus random catalog words)
    #[arg(long)]
    pub legacy: bool,

    /// Rank learned and catalog words by frequency
    #[arg(long)]
    pub prefer_frequent: bool,

    /// Seed the random catalog fill for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,

    /// Do not write learned words back to the vocabulary file
    #[arg(long)]
    pub no_save: bool,
}

/// Execute the analyze command.
pub async fn execute(
    args: AnalyzeArgs,
    mut config: Config,
    store: VocabularyFile,
) -> anyhow::Result<()> {
    if !args.input.exists() {
        anyhow::bail!(
            "Input file does not exist: {:?}\n\n  Hint: Check the file path and try again.",
            args.input
        );
    }

    if args.seed.is_some() {
        config.selection.seed = args.seed;
    }
    let options = build_options(&args, &config.analysis);
    let format = resolve_format(args.format, &config.output.format);
    let pretty = config.output.pretty && !args.compact;

    let content = tokio::fs::read_to_string(&args.input)
        .await
        .with_context(|| format!("Failed to read {:?}", args.input))?;
    let photos = parse_photos(&content)?;
    if photos.is_empty() {
        tracing::warn!("No photos found in {:?}", args.input);
        return Ok(());
    }
    tracing::info!("Analyzing {} photo(s)", photos.len());

    let epithet = Epithet::new(config);
    store.load_into(&epithet).await?;
    let learned_before = epithet.stats().learned_count;

    let sink: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("Failed to create {path:?}"))?,
        )),
        None => Box::new(io::stdout().lock()),
    };
    let mut writer = OutputWriter::new(sink, format, pretty);

    let batch = photos.len() > 1;
    let progress = if batch {
        create_progress_bar(photos.len() as u64)
    } else {
        indicatif::ProgressBar::hidden()
    };

    let start_time = Instant::now();
    let mut adjective_total = 0usize;
    for photo in &photos {
        let result = epithet.analyze(photo, &options);
        adjective_total += result.adjectives.len();
        writer.write(&result)?;

        progress.inc(1);
        let elapsed = start_time.elapsed().as_secs_f64();
        if elapsed > 0.0 {
            progress.set_message(format!("{:.1} photos/sec", progress.position() as f64 / elapsed));
        }
    }
    writer.finish()?;
    progress.finish_and_clear();

    if let Some(path) = &args.output {
        tracing::info!("Output written to {:?}", path);
    }

    let learned_after = epithet.stats().learned_count;
    if batch {
        print_summary(
            photos.len(),
            adjective_total,
            learned_after.saturating_sub(learned_before),
            start_time.elapsed(),
        );
    }

    if args.no_save {
        tracing::debug!("--no-save: vocabulary file left untouched");
    } else {
        store.save(&epithet).await?;
    }

    Ok(())
}

/// Merge command-line flags over the `[analysis]` config defaults.
fn build_options(args: &AnalyzeArgs, defaults: &AnalysisConfig) -> AnalyzeOptions {
    let mut options = AnalyzeOptions::from(defaults);
    if let Some(max) = args.max_adjectives {
        options.max_adjectives = max;
    }
    if args.no_categories {
        options.include_categories = false;
    }
    if args.no_description {
        options.enhance_description = false;
    }
    if args.no_learn {
        options.learn_from_input = false;
    }
    if args.legacy {
        options.expand_vocabulary = false;
    }
    if args.prefer_frequent {
        options.prefer_frequent = true;
    }
    options
}

fn resolve_format(flag: Option<OutputFormat>, configured: &str) -> CoreOutputFormat {
    match flag {
        Some(format) => format.into(),
        None => CoreOutputFormat::parse(configured).unwrap_or(CoreOutputFormat::Json),
    }
}

/// Parse photos from a JSON array, or from JSONL (one object per line).
fn parse_photos(content: &str) -> anyhow::Result<Vec<Photo>> {
    let trimmed = content.trim_start();
    if trimmed.starts_with('[') {
        return serde_json::from_str(trimmed).context("Input is not a valid JSON array of photos");
    }

    let mut photos = Vec::new();
    for (index, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let photo = serde_json::from_str(line)
            .with_context(|| format!("Invalid photo on line {}", index + 1))?;
        photos.push(photo);
    }
    Ok(photos)
}

/// Create a progress bar for batch analysis.
fn create_progress_bar(total: u64) -> indicatif::ProgressBar {
    use indicatif::{ProgressBar, ProgressStyle};

    let pb = ProgressBar::new(total);
    pb.set_style(
        ProgressStyle::default_bar()
            .template(
                "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {msg}",
            )
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("##-"),
    );
    pb.set_message("starting...");
    pb
}

/// Print a formatted summary table after batch analysis.
fn print_summary(photos: usize, adjectives: usize, learned: usize, elapsed: Duration) {
    let seconds = elapsed.as_secs_f64();
    let rate = if seconds > 0.0 { photos as f64 / seconds } else { 0.0 };
    let average = adjectives as f64 / photos.max(1) as f64;

    eprintln!();
    eprintln!("  ====================================");
    eprintln!("               Summary");
    eprintln!("  ====================================");
    eprintln!("    Photos:       {:>8}", photos);
    eprintln!("    Adjectives:   {:>8}", adjectives);
    eprintln!("    Per photo:    {:>8.1}", average);
    eprintln!("    New words:    {:>8}", learned);
    eprintln!("  ------------------------------------");
    eprintln!("    Duration:     {:>7.1}s", seconds);
    eprintln!("    Rate:         {:>7.1} photos/sec", rate);
    eprintln!("  ====================================");
}
