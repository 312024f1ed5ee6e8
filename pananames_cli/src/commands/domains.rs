use anyhow::Result;
use clap::Args;
use pananames_api::{CheckDomainsBulkOptions, Client, GetDomainsOptions, ListQuery};

use crate::output::{
    print_checks_table, print_domain_detail, print_domains_table, print_json, print_pagination,
    OutputFormat,
};

#[derive(Args)]
pub struct DomainsArgs {
    /// Page number
    #[arg(long, default_value = "1")]
    pub page: i64,

    /// Results per page
    #[arg(long, default_value = "20")]
    pub limit: i64,

    /// Filter by status (e.g. ok, suspended)
    #[arg(long)]
    pub status: Option<String>,

    /// Only domains containing this text
    #[arg(long)]
    pub domain_like: Option<String>,
}

#[derive(Args)]
pub struct DomainArgs {
    /// Domain name
    pub name: String,
}

#[derive(Args)]
pub struct CheckArgs {
    /// One or more domain names
    #[arg(required = true)]
    pub names: Vec<String>,
}

pub async fn run_domains(
    args: &DomainsArgs,
    client: &Client,
    format: &OutputFormat,
) -> Result<()> {
    let mut opts = GetDomainsOptions::default()
        .with_page(args.page)
        .with_limit(args.limit);

    if let Some(status) = &args.status {
        opts = opts.with_status(status);
    }
    if let Some(domain_like) = &args.domain_like {
        opts = opts.with_domain_like(domain_like);
    }

    let (domains, pagination) = client.get_domains(&opts, &[]).await?;
    match format {
        OutputFormat::Table => print_domains_table(&domains),
        OutputFormat::Json => print_json(&domains),
    }
    print_pagination(&pagination);
    Ok(())
}

pub async fn run_domain(args: &DomainArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let domain = client.get_domain(&args.name, &[]).await?;
    match format {
        OutputFormat::Table => print_domain_detail(&domain),
        OutputFormat::Json => print_json(&domain),
    }
    Ok(())
}

pub async fn run_check(args: &CheckArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let checks = match args.names.as_slice() {
        [single] => vec![client.check_domain(single, &[]).await?],
        names => {
            client
                .check_domains_bulk(&CheckDomainsBulkOptions::new(names), &[])
                .await?
        }
    };
    match format {
        OutputFormat::Table => print_checks_table(&checks),
        OutputFormat::Json => print_json(&checks),
    }
    Ok(())
}
