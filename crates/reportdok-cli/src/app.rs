//! CLI Application logic
//!
//! Contains the command-line interface implementation.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand, ValueEnum};
use tempfile::NamedTempFile;
use tracing_subscriber::EnvFilter;

use reportdok_data::{BuiltinSource, DatasetLoader, FileSource, Settings};
use reportdok_model::{AuditDataset, Lang, ProductDataset, StatusSummary};
use reportdok_pdf::{AuditReport, ProductReport, RenderOptions, RenderedDocument};

/// Output format for the status summary
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output for scripts and CI
    Json,
}

/// Languages to render the product report in
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum LangChoice {
    De,
    En,
    /// One file per language
    #[default]
    Both,
}

impl LangChoice {
    pub fn langs(self) -> &'static [Lang] {
        match self {
            LangChoice::De => &[Lang::De],
            LangChoice::En => &[Lang::En],
            LangChoice::Both => &Lang::ALL,
        }
    }
}

#[derive(Parser)]
#[command(name = "reportdok")]
#[command(author, version, about = "Bilingual audit and product reports as PDF", long_about = None)]
struct Cli {
    /// Settings file (defaults to ./reportdok.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Report date as YYYY-MM-DD (defaults to today)
    #[arg(long, global = true, value_parser = parse_date)]
    date: Option<NaiveDate>,

    /// Log progress to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the bilingual audit report
    Audit {
        /// Audit dataset (TOML); the built-in dataset when omitted
        #[arg(short, long)]
        data: Option<PathBuf>,

        /// Output PDF file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Render the product report, one file per language
    Product {
        /// Product dataset (TOML); the built-in dataset when omitted
        #[arg(short, long)]
        data: Option<PathBuf>,

        /// Output directory
        #[arg(short, long)]
        output_dir: Option<PathBuf>,

        /// Language(s) to render
        #[arg(short, long, value_enum, default_value = "both")]
        lang: LangChoice,
    },

    /// Render every report from the built-in datasets (the default)
    All,

    /// Print feature status counts without rendering
    Summary {
        /// Audit dataset (TOML); the built-in dataset when omitted
        #[arg(short, long)]
        data: Option<PathBuf>,

        /// Output format (text or json)
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
}

fn parse_date(value: &str) -> std::result::Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|e| format!("expected YYYY-MM-DD, got '{}': {}", value, e))
}

/// Settings and render options shared by all commands of one run
#[derive(Debug, Clone)]
pub struct RunContext {
    pub settings: Settings,
    pub options: RenderOptions,
}

impl RunContext {
    pub fn new(settings: Settings, date: NaiveDate) -> Self {
        let mut options = RenderOptions::new(date);
        options.repeat_table_headers = settings.layout.repeat_table_headers;
        options.stripe_rows = settings.layout.stripe_rows;
        Self { settings, options }
    }

    /// Load settings from `config`, or discover them in the working directory
    pub fn load(config: Option<&Path>, date: Option<NaiveDate>) -> Result<Self> {
        let settings = match config {
            Some(path) => Settings::load(path)
                .with_context(|| format!("Failed to load config: {}", path.display()))?,
            None => {
                let cwd = std::env::current_dir().context("Failed to read working directory")?;
                Settings::discover(&cwd).context("Failed to load reportdok.toml")?
            }
        };
        let date = date.unwrap_or_else(|| Local::now().date_naive());
        Ok(Self::new(settings, date))
    }

    fn output_dir(&self) -> &Path {
        &self.settings.output.dir
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    // A subscriber may already be installed when running from tests
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Run the CLI application
///
/// This is the main entry point for the command-line interface.
/// It parses arguments and dispatches to the appropriate command.
pub fn run_cli() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let ctx = RunContext::load(cli.config.as_deref(), cli.date)?;

    match cli.command.unwrap_or(Commands::All) {
        Commands::Audit { data, output } => {
            let summary = audit_command(&ctx, data.as_deref(), output.as_deref())?;
            println!();
            println!("{}", completion_summary(&summary));
        }
        Commands::Product {
            data,
            output_dir,
            lang,
        } => {
            product_command(&ctx, data.as_deref(), output_dir.as_deref(), lang.langs())?;
        }
        Commands::All => {
            let summary = all_command(&ctx)?;
            println!();
            println!("{}", completion_summary(&summary));
        }
        Commands::Summary { data, format } => {
            summary_command(data.as_deref(), format)?;
        }
    }

    Ok(())
}

fn load_audit(data: Option<&Path>) -> Result<AuditDataset> {
    match data {
        Some(path) => DatasetLoader::audit(&FileSource::new(path))
            .with_context(|| format!("Failed to load audit dataset: {}", path.display())),
        None => DatasetLoader::audit(&BuiltinSource::AUDIT)
            .context("Failed to load built-in audit dataset"),
    }
}

fn load_product(data: Option<&Path>) -> Result<ProductDataset> {
    match data {
        Some(path) => DatasetLoader::product(&FileSource::new(path))
            .with_context(|| format!("Failed to load product dataset: {}", path.display())),
        None => DatasetLoader::product(&BuiltinSource::PRODUCT)
            .context("Failed to load built-in product dataset"),
    }
}

/// Execute the audit command
///
/// # Returns
/// The feature status counts of the rendered dataset
pub fn audit_command(
    ctx: &RunContext,
    data: Option<&Path>,
    output: Option<&Path>,
) -> Result<StatusSummary> {
    println!("reportdok v{}", reportdok_model::VERSION);
    let dataset = load_audit(data)?;

    let output_path = match output {
        Some(path) => path.to_path_buf(),
        None => ctx.output_dir().join(&ctx.settings.output.audit_file),
    };

    println!("Rendering audit report: {}", dataset.product);
    let document = AuditReport::new(&dataset, &ctx.options)
        .render()
        .context("Failed to render audit report")?;
    write_atomic(&output_path, &document)?;
    println!("  Created: {} ({} pages)", output_path.display(), document.pages);

    Ok(dataset.summary())
}

/// Execute the product command
///
/// # Returns
/// Paths of the written files, in language order
pub fn product_command(
    ctx: &RunContext,
    data: Option<&Path>,
    output_dir: Option<&Path>,
    langs: &[Lang],
) -> Result<Vec<PathBuf>> {
    println!("reportdok v{}", reportdok_model::VERSION);
    let dataset = load_product(data)?;
    let dir = output_dir.unwrap_or_else(|| ctx.output_dir());

    let mut written = Vec::with_capacity(langs.len());
    for (i, lang) in langs.iter().enumerate() {
        println!(
            "[{}/{}] Rendering product report ({})...",
            i + 1,
            langs.len(),
            lang
        );
        let report = ProductReport::new(&dataset, *lang, &ctx.options);
        let document = report
            .render()
            .with_context(|| format!("Failed to render product report ({})", lang))?;
        let path = dir.join(report.file_name());
        write_atomic(&path, &document)?;
        println!("      Saved: {} ({} pages)", path.display(), document.pages);
        written.push(path);
    }

    Ok(written)
}

/// Execute the default run: audit report plus both product reports from
/// the built-in datasets
pub fn all_command(ctx: &RunContext) -> Result<StatusSummary> {
    let summary = audit_command(ctx, None, None)?;
    product_command(ctx, None, None, &Lang::ALL)?;
    Ok(summary)
}

/// Execute the summary command
pub fn summary_command(data: Option<&Path>, format: OutputFormat) -> Result<StatusSummary> {
    let dataset = load_audit(data)?;
    let summary = dataset.summary();

    match format {
        OutputFormat::Text => println!("{}", completion_summary(&summary)),
        OutputFormat::Json => {
            let json = serde_json::json!({
                "product": dataset.product,
                "total": summary.total,
                "implemented": summary.implemented,
                "partial": summary.partial,
                "missing": summary.missing,
                "percent_implemented": summary.percent_implemented(),
            });
            let json =
                serde_json::to_string_pretty(&json).context("Failed to serialize summary")?;
            println!("{}", json);
        }
    }

    Ok(summary)
}

/// Human-readable status counts printed after a run
pub fn completion_summary(summary: &StatusSummary) -> String {
    format!(
        "Total features: {}\n  Implemented: {} ({}%)\n  Partial: {}\n  Missing: {}",
        summary.total,
        summary.implemented,
        summary.percent_implemented(),
        summary.partial,
        summary.missing
    )
}

/// Write `document` to `path` via a temporary file in the same directory
///
/// The target only ever holds a complete PDF: the bytes go to a temporary
/// file that is renamed over `path` once fully written, and removed if
/// anything fails before that.
pub fn write_atomic(path: &Path, document: &RenderedDocument) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory: {}", dir.display()))?;

    let mut temp = NamedTempFile::new_in(dir)
        .with_context(|| format!("Failed to create temporary file in {}", dir.display()))?;
    document
        .write_to(&mut temp)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    temp.persist(path)
        .map_err(|e| e.error)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    tracing::info!("Wrote {} bytes to {}", document.bytes.len(), path.display());
    Ok(())
}
