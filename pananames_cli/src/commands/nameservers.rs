use anyhow::Result;
use clap::Args;
use pananames_api::{Client, SetNameServersOptions};

use crate::output::{print_json, print_name_servers, print_records_table, OutputFormat};

#[derive(Args)]
pub struct NameserversArgs {
    /// Domain name
    pub domain: String,

    /// Replace the delegation with these hosts
    #[arg(long, num_args = 1..)]
    pub set: Vec<String>,
}

#[derive(Args)]
pub struct RecordsArgs {
    /// Domain name
    pub domain: String,
}

pub async fn run_nameservers(
    args: &NameserversArgs,
    client: &Client,
    format: &OutputFormat,
) -> Result<()> {
    let name_servers = if args.set.is_empty() {
        client.get_name_servers(&args.domain, &[]).await?
    } else {
        let opts = SetNameServersOptions::new(args.set.as_slice());
        client.set_name_servers(&args.domain, &opts, &[]).await?
    };
    match format {
        OutputFormat::Table => print_name_servers(&name_servers),
        OutputFormat::Json => print_json(&name_servers),
    }
    Ok(())
}

pub async fn run_records(args: &RecordsArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let records = client.get_name_server_records(&args.domain, &[]).await?;
    match format {
        OutputFormat::Table => print_records_table(&records),
        OutputFormat::Json => print_json(&records),
    }
    Ok(())
}
