// file: src/main.rs
// description: commandline application entry point with command handling
// reference: application bootstrap and orchestration

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use company_search::utils::logging::{format_error, format_success, format_warning};
use company_search::{
    CompanySearchClient, Config, CredentialStatus, CsvExporter, MalformedPolicy, SearchRunner,
};
use std::fs;
use std::path::PathBuf;
use std::time::Instant;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "company_search")]
#[command(version = "0.1.0")]
#[command(about = "Search a CRM portal for company names and export matches to CSV", long_about = None)]
struct Cli {
    #[arg(
        short,
        long,
        value_name = "FILE",
        default_value = "config/default.toml"
    )]
    config: PathBuf,

    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    color: bool,

    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search for each company name and export the matches
    Search {
        /// Company names to search for
        names: Vec<String>,

        /// Newline-delimited file of additional names
        #[arg(short, long, value_name = "FILE")]
        input: Option<PathBuf>,

        /// Destination CSV (overrides output.path from config)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Check the configured credential against the live endpoint
    Verify,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    company_search::utils::logging::init_logger(cli.color, cli.verbose);

    info!("Loading configuration from: {}", cli.config.display());

    let config = if cli.config.exists() {
        Config::load(Some(cli.config.as_path())).context("Failed to load configuration")?
    } else {
        warn!(
            "Config file {} not found, using default configuration",
            cli.config.display()
        );
        Config::load(None).unwrap_or_else(|e| {
            warn!("Falling back to built-in defaults: {}", e);
            Config::default_config()
        })
    };

    match cli.command {
        Commands::Search {
            names,
            input,
            output,
        } => {
            cmd_search(&config, names, input, output, cli.color).await?;
        }
        Commands::Verify => {
            cmd_verify(&config).await?;
        }
    }

    Ok(())
}

async fn cmd_search(
    config: &Config,
    mut names: Vec<String>,
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    color: bool,
) -> Result<()> {
    if let Some(path) = input {
        names.extend(read_names_file(&path)?);
    }

    if names.is_empty() {
        warn!("No company names given; output will contain only the header row");
    }

    let token = config.require_token()?;
    let destination = output.unwrap_or_else(|| config.output.path.clone());

    info!("Searching {} company name(s)", names.len());
    let start_time = Instant::now();

    let client = CompanySearchClient::new(&config.api, token.to_string());
    let policy = if config.search.skip_malformed {
        MalformedPolicy::Skip
    } else {
        MalformedPolicy::Abort
    };
    let runner = SearchRunner::new(client, policy).with_color(color);

    let outcome = runner.run(&names).await.context("Search run failed")?;

    // The write happens only once the full loop has completed; an
    // aborted run leaves any previous output file untouched.
    let exporter = CsvExporter::new(&destination);
    exporter
        .write_records(&outcome.records)
        .with_context(|| format!("Failed to write {}", destination.display()))?;

    let elapsed = start_time.elapsed();
    let stats = &outcome.stats;

    println!(
        "{}",
        format_success(&format!(
            "{} record(s) saved to {}",
            outcome.records.len(),
            destination.display()
        ))
    );
    info!(
        "Queried {} name(s) in {:.2}s: {} matched, {} rejected, {} skipped",
        stats.names_queried,
        elapsed.as_secs_f64(),
        stats.records_matched,
        stats.names_rejected,
        stats.hits_skipped
    );

    Ok(())
}

async fn cmd_verify(config: &Config) -> Result<()> {
    let token = config.require_token()?;
    let client = CompanySearchClient::new(&config.api, token.to_string());

    info!("Verifying credential against {}", config.api.base_url);

    match client.verify_credentials().await? {
        CredentialStatus::Accepted => {
            println!("{}", format_success("Credential accepted"));
        }
        CredentialStatus::Rejected(status @ (401 | 403)) => {
            println!(
                "{}",
                format_error(&format!("Credential rejected (status {})", status))
            );
            anyhow::bail!("Credential rejected");
        }
        CredentialStatus::Rejected(status) => {
            println!(
                "{}",
                format_warning(&format!(
                    "Endpoint reachable but probe returned status {}",
                    status
                ))
            );
        }
    }

    Ok(())
}

fn read_names_file(path: &PathBuf) -> Result<Vec<String>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read names file {}", path.display()))?;

    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}
