use anyhow::Result;
use clap::Args;
use pananames_api::{Client, GetAccountPaymentsOptions, ListQuery};

use crate::output::{
    print_balance_table, print_json, print_pagination, print_payments_table, OutputFormat,
};

#[derive(Args)]
pub struct PaymentsArgs {
    /// Page number
    #[arg(long, default_value = "1")]
    pub page: i64,

    /// Results per page
    #[arg(long, default_value = "20")]
    pub limit: i64,

    /// Only payments for domains containing this text
    #[arg(long)]
    pub domain_like: Option<String>,

    /// Payment type (e.g. register, renew, refill)
    #[arg(long)]
    pub pay_type: Option<String>,

    /// Start of the period (YYYY-MM-DD)
    #[arg(long)]
    pub from: Option<String>,

    /// End of the period (YYYY-MM-DD)
    #[arg(long)]
    pub to: Option<String>,
}

pub async fn run_balance(client: &Client, format: &OutputFormat) -> Result<()> {
    let balance = client.get_account_balance(&[]).await?;
    match format {
        OutputFormat::Table => print_balance_table(&balance),
        OutputFormat::Json => print_json(&balance),
    }
    Ok(())
}

pub async fn run_payments(
    args: &PaymentsArgs,
    client: &Client,
    format: &OutputFormat,
) -> Result<()> {
    let mut opts = GetAccountPaymentsOptions::default()
        .with_page(args.page)
        .with_limit(args.limit);

    if let Some(domain_like) = &args.domain_like {
        opts = opts.with_domain_like(domain_like);
    }
    if let Some(pay_type) = &args.pay_type {
        opts = opts.with_pay_type(pay_type);
    }
    opts = opts.with_period(
        args.from.as_deref().unwrap_or_default(),
        args.to.as_deref().unwrap_or_default(),
    );

    let (payments, pagination) = client.get_account_payments(&opts, &[]).await?;
    match format {
        OutputFormat::Table => print_payments_table(&payments),
        OutputFormat::Json => print_json(&payments),
    }
    print_pagination(&pagination);
    Ok(())
}
