mod commands;
mod output;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use pananames_api::Client;

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "pananames")]
#[command(about = "Manage domains through the Pananames merchant API")]
struct Cli {
    /// Output format: table or json
    #[arg(long, default_value = "table", global = true)]
    output: String,

    /// API signature token (defaults to $PANANAMES_TOKEN)
    #[arg(long, global = true)]
    token: Option<String>,

    /// API host override (defaults to $PANANAMES_BASE_URL, then the production host)
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the account balance
    Balance,
    /// List account payments
    Payments(commands::account::PaymentsArgs),
    /// List domains in the account
    Domains(commands::domains::DomainsArgs),
    /// Show a single domain
    Domain(commands::domains::DomainArgs),
    /// Check availability and prices of one or more names
    Check(commands::domains::CheckArgs),
    /// List TLDs with prices
    Tlds,
    /// Show or replace a domain's name servers
    Nameservers(commands::nameservers::NameserversArgs),
    /// Show WHOIS contacts of a domain
    Whois(commands::whois::WhoisArgs),
    /// List DNS records hosted for a domain
    Records(commands::nameservers::RecordsArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("pananames=info".parse()?),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let format = match cli.output.as_str() {
        "json" => OutputFormat::Json,
        _ => OutputFormat::Table,
    };

    let token = match cli.token {
        Some(token) => token,
        None => std::env::var("PANANAMES_TOKEN")
            .context("no API token: pass --token or set PANANAMES_TOKEN")?,
    };
    let base_url = cli
        .base_url
        .or_else(|| std::env::var("PANANAMES_BASE_URL").ok());

    let mut builder = Client::builder(&token);
    if let Some(base_url) = &base_url {
        builder = builder.base_url(base_url);
    }
    let client = builder.build()?;

    match &cli.command {
        Commands::Balance => commands::account::run_balance(&client, &format).await?,
        Commands::Payments(args) => commands::account::run_payments(args, &client, &format).await?,
        Commands::Domains(args) => commands::domains::run_domains(args, &client, &format).await?,
        Commands::Domain(args) => commands::domains::run_domain(args, &client, &format).await?,
        Commands::Check(args) => commands::domains::run_check(args, &client, &format).await?,
        Commands::Tlds => commands::tlds::run(&client, &format).await?,
        Commands::Nameservers(args) => {
            commands::nameservers::run_nameservers(args, &client, &format).await?
        }
        Commands::Whois(args) => commands::whois::run(args, &client, &format).await?,
        Commands::Records(args) => {
            commands::nameservers::run_records(args, &client, &format).await?
        }
    }

    Ok(())
}
