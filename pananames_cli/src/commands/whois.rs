use anyhow::Result;
use clap::Args;
use pananames_api::{Client, GetWhoisInfoOptions};

use crate::output::{print_json, print_whois_table, OutputFormat};

#[derive(Args)]
pub struct WhoisArgs {
    /// Domain name
    pub domain: String,

    /// Show the contacts as the public WHOIS displays them
    #[arg(long)]
    pub preview: bool,
}

pub async fn run(args: &WhoisArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let opts = GetWhoisInfoOptions {
        preview: args.preview,
    };
    let whois = client.get_whois_info(&args.domain, &opts, &[]).await?;
    match format {
        OutputFormat::Table => print_whois_table(&whois),
        OutputFormat::Json => print_json(&whois),
    }
    Ok(())
}
