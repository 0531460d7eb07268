use std::ffi::OsString;

use anyhow::Result;
use clap::Parser;

#[derive(Parser)]
#[command(name = "neonorm")]
#[command(about = "Normalize Japanese text for tokenization and indexing")]
#[command(version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("BUILD_HASH"), ")"))]
struct Cli {
    /// Text to normalize
    #[arg(allow_hyphen_values = true)]
    text: OsString,

    /// Print every stage as JSON instead of the plain result
    #[arg(long)]
    json: bool,

    /// Print each stage's output to stderr
    #[arg(long, conflicts_with = "json")]
    trace: bool,

    /// Log level: error, warn, info, debug, trace
    #[arg(long, default_value = "warn", value_enum)]
    log_level: LogLevel,

    /// Use UTC timestamps instead of local time
    #[arg(long)]
    utc: bool,
}

#[derive(Clone, clap::ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn as_filter(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

fn init_logging(cli: &Cli) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(cli.log_level.as_filter()));

    // Timestamp format: 2026-02-14 19:44:09.123 -08:00
    let time_format = "%Y-%m-%d %H:%M:%S%.3f %:z".to_string();

    // stdout carries only the normalized text
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr);

    if cli.utc {
        builder
            .with_timer(tracing_subscriber::fmt::time::ChronoUtc::new(time_format))
            .init();
    } else {
        builder
            .with_timer(tracing_subscriber::fmt::time::ChronoLocal::new(time_format))
            .init();
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli);

    // Invalid UTF-8 is replaced rather than rejected
    let text = cli.text.to_string_lossy();
    tracing::debug!(chars = text.chars().count(), "Normalizing input");

    if cli.json {
        let trace = neonorm::trace(&text);
        println!("{}", serde_json::to_string_pretty(&trace)?);
    } else if cli.trace {
        let trace = neonorm::trace(&text);
        for step in &trace.stages {
            eprintln!("{:<24} {}", step.stage, step.output);
        }
        println!("{}", trace.output);
    } else {
        println!("{}", neonorm::normalize(&text));
    }

    Ok(())
}
