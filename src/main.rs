//! cnpj-validator - CNPJ x warehouse validation CLI
//!
//! Reads CNPJs from a CSV file, queries every client warehouse for each one
//! and exports the pairs that are registered.

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use cnpj_validator_rs::core::batch::TracingProgress;
use cnpj_validator_rs::io::{dump_records, export_to_dir, load_identifiers};
use cnpj_validator_rs::utils::{LogFormat, init_logging};
use cnpj_validator_rs::{BatchOrchestrator, BatchStatus, Config, build_info};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{Level, info};

#[derive(Debug, Parser)]
#[command(name = "cnpj-validator", version, about = "Validate CNPJs against client warehouses")]
struct Cli {
    /// Client configuration file
    #[arg(
        long,
        global = true,
        env = "CNPJ_VALIDATOR_CONFIG",
        default_value = "config/clients.yaml"
    )]
    config: PathBuf,

    /// Log output format (pretty or json)
    #[arg(long, global = true, default_value = "pretty")]
    log_format: LogFormat,

    /// Log at debug level
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Query every CNPJ of the input file against the client's warehouses
    Run {
        /// CSV file with a column whose name contains "cnpj"
        #[arg(short, long)]
        input: PathBuf,

        /// Client id
        #[arg(short, long)]
        client: String,

        /// Directory for the export file
        #[arg(short, long, default_value = ".")]
        output_dir: PathBuf,

        /// Also write every record as JSON Lines to this file
        #[arg(long)]
        records: Option<PathBuf>,

        /// Field delimiter of the input file
        #[arg(long, default_value_t = ',')]
        delimiter: char,
    },
    /// List configured clients and their warehouses
    Clients,
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    init_logging(cli.log_format, level);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let build = build_info();
    info!(
        "cnpj-validator {} ({}, built {})",
        build.version, build.git_hash, build.build_time
    );

    let config = Config::from_file(&cli.config)
        .await
        .with_context(|| format!("Could not load {}", cli.config.display()))?;

    match cli.command {
        Command::Clients => {
            list_clients(&config);
            Ok(())
        }
        Command::Run {
            input,
            client,
            output_dir,
            records,
            delimiter,
        } => {
            let Ok(delimiter) = u8::try_from(delimiter) else {
                bail!("Delimiter must be a single ASCII character");
            };
            run_batch(&config, input, &client, output_dir, records, delimiter).await
        }
    }
}

fn list_clients(config: &Config) {
    let registry = config.registry();
    for id in registry.client_ids() {
        let token = if registry.has_token(id) {
            "token set"
        } else {
            "NO TOKEN"
        };
        println!(
            "{:<12} warehouses: [{}] ({})",
            id,
            registry.warehouses(id).join(", "),
            token
        );
    }
}

async fn run_batch(
    config: &Config,
    input: PathBuf,
    client: &str,
    output_dir: PathBuf,
    records_path: Option<PathBuf>,
    delimiter: u8,
) -> anyhow::Result<()> {
    let source = load_identifiers(&input, delimiter)
        .with_context(|| format!("Could not read CNPJs from {}", input.display()))?;
    println!(
        "Loaded {} rows from '{}': {} unique CNPJs",
        source.rows,
        source.column,
        source.identifiers.len()
    );

    let orchestrator =
        BatchOrchestrator::from_config(config)?.with_progress(Arc::new(TracingProgress));
    let report = orchestrator
        .run_with_report(&source.identifiers, client)
        .await?;

    for diagnostic in &report.diagnostics {
        eprintln!("{}", diagnostic);
    }

    if let Some(path) = records_path {
        dump_records(&path, &report.records)?;
        println!("Full records written to {}", path.display());
    }

    match report.status() {
        BatchStatus::Empty => {
            println!("No data found for any CNPJ/warehouse pair.");
        }
        BatchStatus::Completed => {
            let rows = report.export_rows();
            let path = export_to_dir(&output_dir, client, &rows)?;
            println!(
                "Done: {} records, {} unique warehouse/CNPJ pairs in {:.1}s",
                report.records.len(),
                rows.len(),
                report.elapsed().num_milliseconds() as f64 / 1000.0
            );
            println!("Export written to {}", path.display());
        }
    }

    Ok(())
}
