use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use mondial_relay::{LabelContent, ShipmentResult};
use std::path::PathBuf;

use crate::facts;
use crate::settings::SettingsArgs;

#[derive(Args, Debug)]
pub struct ShipArgs {
    /// JSON facts: `{method, items, order, fulfillment}`
    pub facts: PathBuf,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value = "human")]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

pub fn execute(settings: &SettingsArgs, args: ShipArgs) -> Result<()> {
    let facts = facts::read_forward(&args.facts)?;
    let provider = settings.provider()?;

    let result = provider
        .create_fulfillment(&facts.method, &facts.items, &facts.order, &facts.fulfillment)
        .with_context(|| format!("Failed to create shipment for fulfillment {}", facts.fulfillment.id))?;
    print_result(&result, args.format)
}

pub fn print_result(result: &ShipmentResult, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(result)?),
        OutputFormat::Human => {
            println!("{} {}", "Shipment".green().bold(), result.shipment_number.bold());
            match result.label() {
                Some(LabelContent::Url(url)) => println!("  Label: {url}"),
                Some(LabelContent::Raw(raw)) => println!("  Label: {} bytes embedded", raw.len()),
                None => println!("  Label: {}", "none".dimmed()),
            }
            for status in &result.statuses {
                println!(
                    "  {} {} {}",
                    status.level.as_str().yellow(),
                    status.code,
                    status.message
                );
            }
        }
    }
    Ok(())
}
