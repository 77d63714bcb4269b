use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use passbook_ai::{config::MODEL_VAR, AiConfig, GeminiClient};
use passbook_ingest::{
    process_document, supported_formats, DocumentRenderer, FileRenderer, StatementOutcome,
};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{debug, error, info, warn};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

mod config;
mod output;

use config::Config;
use output::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "passbook", version, about = "Extract transactions from bank statements")]
struct Cli {
    /// Log level when RUST_LOG is not set
    #[arg(long, global = true, default_value_t = LevelFilter::WARN)]
    log_level: LevelFilter,

    /// Directory holding config.toml (defaults to ~/.passbook)
    #[arg(long, global = true, env = "PASSBOOK_HOME")]
    home: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse a statement (.pdf or .txt) with the rule-based extractor
    Parse {
        file: PathBuf,

        /// Owner id stamped on every transaction (default: config default_owner)
        #[arg(long)]
        owner: Option<String>,

        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,

        /// Ask the model API when the rule-based parser finds nothing
        #[arg(long)]
        ai_fallback: bool,
    },

    /// Extraction through the model API only
    Ai {
        #[command(subcommand)]
        command: AiCommand,
    },

    /// Manage ~/.passbook/config.toml
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand, Debug)]
enum AiCommand {
    /// Extract total, date and merchant from a receipt image
    Receipt {
        image: PathBuf,

        #[arg(long)]
        owner: Option<String>,
    },

    /// Extract transactions from a statement document
    Statement {
        file: PathBuf,

        #[arg(long)]
        owner: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Write a default config file if none exists
    Init,
    /// Print the effective config
    Show,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logger(cli.log_level);

    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            error!("Exiting with error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<ExitCode> {
    let home = match cli.home {
        Some(h) => h,
        None => config::passbook_home()?,
    };
    let cfg = config::load_config(&home)?;
    debug!(home = %home.display(), "loaded config");

    match cli.command {
        Command::Parse {
            file,
            owner,
            format,
            ai_fallback,
        } => {
            let owner = owner.unwrap_or_else(|| cfg.default_owner.clone());
            let mut outcome = process_document(&FileRenderer, &file, &owner);

            if outcome.success && outcome.count == 0 && ai_fallback {
                if cfg.ai.enabled {
                    info!("rule-based parser found no transactions; trying AI fallback");
                    outcome = ai_statement(&cfg, &file, &owner).await?;
                } else {
                    warn!("AI fallback requested but disabled in config");
                }
            }

            match format {
                OutputFormat::Json => output::write_json(std::io::stdout().lock(), &outcome)?,
                OutputFormat::Csv => {
                    if let Some(err) = &outcome.error {
                        eprintln!("error: {err}");
                    }
                    output::write_csv(std::io::stdout().lock(), &outcome.transactions)?
                }
            }

            Ok(if outcome.success {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }

        Command::Ai { command } => match command {
            AiCommand::Receipt { image, owner } => {
                if !image.exists() {
                    bail!("receipt not found: {}", image.display());
                }
                let owner = owner.unwrap_or_else(|| cfg.default_owner.clone());
                let client = gemini_client(&cfg)?;
                let extraction = client
                    .parse_receipt(&image)
                    .await
                    .context("AI could not process the receipt")?;
                let transaction = extraction
                    .clone()
                    .into_transaction(&owner, image.display().to_string());

                output::write_json(
                    std::io::stdout().lock(),
                    &serde_json::json!({
                        "extraction": extraction,
                        "transaction": transaction,
                    }),
                )?;
                Ok(ExitCode::SUCCESS)
            }
            AiCommand::Statement { file, owner } => {
                let owner = owner.unwrap_or_else(|| cfg.default_owner.clone());
                let outcome = ai_statement(&cfg, &file, &owner).await?;
                output::write_json(std::io::stdout().lock(), &outcome)?;
                Ok(ExitCode::SUCCESS)
            }
        },

        Command::Config { command } => match command {
            ConfigCommand::Init => {
                let (path, created) = config::init_config(&home)?;
                if created {
                    println!("Wrote {}", path.display());
                } else {
                    println!("Config already exists: {}", path.display());
                }
                Ok(ExitCode::SUCCESS)
            }
            ConfigCommand::Show => {
                println!("# {}", config::config_path(&home).display());
                print!("{}", toml::to_string_pretty(&cfg).context("serialize config")?);
                Ok(ExitCode::SUCCESS)
            }
        },
    }
}

async fn ai_statement(cfg: &Config, file: &Path, owner: &str) -> Result<StatementOutcome> {
    if !file.exists() {
        bail!("statement not found: {}", file.display());
    }
    let text = FileRenderer.render(file).with_context(|| {
        format!(
            "rendering {} (supported: {})",
            file.display(),
            supported_formats().join(", ")
        )
    })?;
    if text.trim().is_empty() {
        bail!("no text could be extracted from {}", file.display());
    }

    let client = gemini_client(cfg)?;
    let transactions = client
        .parse_statement(&text, owner)
        .await
        .context("AI could not process the statement")?;
    Ok(StatementOutcome::success(transactions, &text))
}

/// Validate the API key once and build the client. File config only
/// overrides model names when the environment does not.
fn gemini_client(cfg: &Config) -> Result<GeminiClient> {
    let mut ai = AiConfig::from_env().context("AI extraction is not configured")?;
    if std::env::var(MODEL_VAR).is_err() {
        if let Some(model) = &cfg.ai.statement_model {
            ai.statement_model = model.clone();
        }
        if let Some(model) = &cfg.ai.receipt_model {
            ai.receipt_model = model.clone();
        }
    }
    debug!(?ai, "model API configured");
    Ok(GeminiClient::new(ai))
}

/// Initializes the tracing subscriber on stderr so stdout stays machine-readable.
fn init_logger(level: LevelFilter) {
    let filter = match std::env::var("RUST_LOG").ok() {
        Some(_) => EnvFilter::from_default_env(),
        None => EnvFilter::new(format!(
            "{bin}={level},passbook_ingest={level},passbook_ai={level}",
            bin = env!("CARGO_CRATE_NAME"),
        )),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
