use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use clap::error::ErrorKind;
use currymix_cli::config::{self, ConfigMerger, OutputFormat};
use currymix_cli::error::{RunError, USAGE_EXIT_CODE};
use currymix_render::{render_json, render_text};
use currymix_types::Outcome;
use std::process::ExitCode;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(
    name = "currymix",
    version,
    about = "Pick a finish for every curry so each customer gets at least one wish."
)]
struct Cli {
    /// Order file: item count on the first line, then one customer per line (`1 M 3 V`).
    input: Utf8PathBuf,

    /// Output format (text, json). Overrides currymix.toml.
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// Re-check the assignment against every customer before printing it.
    #[arg(long, default_value_t = false)]
    verify: bool,

    /// Config file (default: ./currymix.toml when present).
    #[arg(long)]
    config: Option<Utf8PathBuf>,
}

fn main() -> ExitCode {
    // stdout carries the answer only.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::from(USAGE_EXIT_CODE),
            };
        }
    };

    if let Err(e) = run(cli) {
        error!("{}", e);
        return ExitCode::from(e.exit_code());
    }
    ExitCode::SUCCESS
}

fn run(cli: Cli) -> Result<(), RunError> {
    let file_config = match &cli.config {
        Some(path) => config::load_config(path)?,
        None => config::load_or_default(Utf8Path::new("."))
            .context("load currymix.toml config")?,
    };
    let settings = ConfigMerger::new(file_config).merge_args(cli.format, cli.verify);
    debug!(format = ?settings.format, verify = settings.verify, "merged config");

    let order = currymix_input::load_order(&cli.input)?;
    let outcome = currymix_domain::solve_order(&order);

    if settings.verify
        && let Outcome::Feasible(assignment) = &outcome
    {
        currymix_domain::verify(assignment, &order.customers)
            .context("assignment failed verification")?;
        debug!("assignment verified");
    }

    let rendered = match settings.format {
        OutputFormat::Text => render_text(&outcome),
        OutputFormat::Json => render_json(&outcome)?,
    };
    println!("{}", rendered);

    match &outcome {
        Outcome::Feasible(_) => info!(items = order.item_count, "assignment found"),
        Outcome::Infeasible(inf) => {
            info!(customer = inf.customer, reason = ?inf.reason, "no solution exists")
        }
    }
    Ok(())
}
