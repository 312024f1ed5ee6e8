use anyhow::Result;
use pananames_api::Client;

use crate::output::{print_json, print_tlds_table, OutputFormat};

pub async fn run(client: &Client, format: &OutputFormat) -> Result<()> {
    let tlds = client.get_tlds(&[]).await?;
    match format {
        OutputFormat::Table => print_tlds_table(&tlds),
        OutputFormat::Json => print_json(&tlds),
    }
    Ok(())
}
