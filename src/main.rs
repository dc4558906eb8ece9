use anyhow::Result;
use clap::{Parser, ValueEnum};
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Instant;
use tracing::info;

use classweb::core::{AnalyzerConfig, CodebaseAnalyzer};
use classweb::formatters::{JsonFormatter, MarkdownFormatter};

#[derive(Debug, Clone, Parser)]
#[command(
    name = "classweb",
    version,
    about = "Heuristic class-dependency extraction across projects"
)]
struct Cli {
    /// Root directory to analyze
    #[arg(short, long, value_name = "PATH")]
    input: PathBuf,

    /// Output file path (stdout when omitted)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_name = "FORMAT", value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,

    /// Maximum number of files read concurrently
    #[arg(short, long, value_name = "N")]
    jobs: Option<usize>,

    /// Resolve files one at a time instead of in parallel
    #[arg(long)]
    sequential: bool,

    /// Log level (overridden by RUST_LOG)
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    log_level: LogLevel,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, ValueEnum)]
#[value(rename_all = "kebab-case")]
enum OutputFormat {
    Json,
    JsonPretty,
    Markdown,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, ValueEnum)]
enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    fn to_tracing_level(self) -> tracing::Level {
        match self {
            LogLevel::Trace => tracing::Level::TRACE,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Error => tracing::Level::ERROR,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_level);
    run(cli)
}

fn init_tracing(level: LogLevel) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.to_tracing_level().to_string()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let Cli {
        input,
        output,
        format,
        jobs,
        sequential,
        log_level: _,
    } = cli;

    let start_time = Instant::now();

    let mut config = AnalyzerConfig::default().with_parallel_extraction(!sequential);
    if let Some(jobs) = jobs {
        config = config.with_read_concurrency(jobs);
    }
    if sequential {
        config = config.with_read_concurrency(1);
    }

    let analyzer = CodebaseAnalyzer::with_config(config);
    let report = analyzer.analyze_path(&input)?;

    match &output {
        Some(path) => {
            match format {
                OutputFormat::Json => JsonFormatter::new().format_to_file(&report, path)?,
                OutputFormat::JsonPretty => JsonFormatter::full().format_to_file(&report, path)?,
                OutputFormat::Markdown => MarkdownFormatter::new().format_to_file(&report, path)?,
            }
            info!(output = %path.display(), "report written");
        }
        None => {
            let rendered = match format {
                OutputFormat::Json => JsonFormatter::new().format_report(&report)?,
                OutputFormat::JsonPretty => JsonFormatter::full().format_report(&report)?,
                OutputFormat::Markdown => MarkdownFormatter::new().format_report(&report)?,
            };
            let mut stdout = io::stdout().lock();
            stdout.write_all(rendered.as_bytes())?;
            stdout.write_all(b"\n")?;
        }
    }

    info!(
        files = report.files_analyzed,
        classes = report.records.len(),
        failures = report.failures.len(),
        elapsed_ms = start_time.elapsed().as_millis() as u64,
        "analysis complete"
    );

    Ok(())
}
