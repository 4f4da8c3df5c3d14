//! Command-line entry point for the timesheet report generator.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use timesheet_report::api::{AppState, create_router};
use timesheet_report::config::ConfigLoader;
use timesheet_report::convert::convert_file;
use timesheet_report::models::SeverityTier;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Debug, Parser)]
#[command(name = "timesheet-report", version, about = "Summarise unsubmitted timesheets")]
struct Cli {
    /// YAML configuration file; defaults apply when omitted.
    #[arg(short, long, global = true, env = "TIMESHEET_REPORT_CONFIG")]
    config: Option<PathBuf>,

    /// Log filter used when RUST_LOG is not set.
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Convert one exported report into a summary workbook.
    Convert {
        /// The exported timesheet report (.xlsx or .xls).
        input: PathBuf,
        /// Where to write the summary workbook.
        #[arg(default_value = "summary_colored.xlsx")]
        output: PathBuf,
    },
    /// Run the upload/convert/download web service.
    Serve {
        /// Address to bind, overriding the configuration file.
        #[arg(long)]
        bind: Option<String>,
    },
}

fn setup_logging(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false))
        .init();
}

fn load_config(path: Option<&PathBuf>) -> Result<ConfigLoader> {
    match path {
        Some(path) => ConfigLoader::load(path).context("failed to load configuration"),
        None => Ok(ConfigLoader::default()),
    }
}

fn run_convert(loader: &ConfigLoader, input: PathBuf, output: PathBuf) -> ExitCode {
    if !input.exists() {
        eprintln!("Input file not found: {}", input.display());
        return ExitCode::FAILURE;
    }

    match convert_file(&input, &output, loader.report()) {
        Ok(summary) => {
            println!("Successfully created output file: {}", output.display());
            for tier in SeverityTier::ALL {
                println!("  {:<8} {}", tier, summary.count(tier));
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!(kind = ?err.kind(), error = %err, "Conversion failed");
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

async fn run_serve(loader: ConfigLoader, bind: Option<String>) -> Result<()> {
    let mut config = loader.into_config();
    if let Some(bind) = bind {
        config.service.bind_address = bind;
    }
    let bind_address = config.service.bind_address.clone();

    let state = AppState::new(config);
    state
        .ensure_directories()
        .context("failed to create upload/processed directories")?;

    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("failed to bind {bind_address}"))?;
    tracing::info!("Listening on {}", bind_address);

    axum::serve(listener, create_router(state))
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("Ctrl+C received; shutting down");
        })
        .await
        .context("server error")
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    setup_logging(&cli.log_level);

    let loader = match load_config(cli.config.as_ref()) {
        Ok(loader) => loader,
        Err(err) => {
            eprintln!("Error: {err:#}");
            return ExitCode::FAILURE;
        }
    };

    match cli.command {
        Command::Convert { input, output } => run_convert(&loader, input, output),
        Command::Serve { bind } => match run_serve(loader, bind).await {
            Ok(()) => ExitCode::SUCCESS,
            Err(err) => {
                eprintln!("Error: {err:#}");
                ExitCode::FAILURE
            }
        },
    }
}
