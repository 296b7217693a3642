use anyhow::{Context, Result};
use clap::Args;
use mondial_relay::platform::NoOrders;
use mondial_relay::OrderLookup;
use std::path::PathBuf;

use crate::facts::{self, JsonOrders};
use crate::settings::SettingsArgs;
use crate::ship::{OutputFormat, print_result};

#[derive(Args, Debug)]
pub struct ReturnArgs {
    /// JSON return record, with the order embedded or referenced by `order_id`
    pub record: PathBuf,

    /// JSON array of orders backing the order lookup
    #[arg(long, value_name = "FILE")]
    pub orders: Option<PathBuf>,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value = "human")]
    pub format: OutputFormat,
}

pub fn execute(settings: &SettingsArgs, args: ReturnArgs) -> Result<()> {
    let record = facts::read_return(&args.record)?;
    let orders: Box<dyn OrderLookup> = match &args.orders {
        Some(path) => Box::new(JsonOrders::load(path)?),
        None => Box::new(NoOrders),
    };
    let provider = settings.provider_with_orders(orders)?;

    let result = provider
        .create_return(&record)
        .with_context(|| format!("Failed to create return shipment for {}", record.id))?;
    print_result(&result, args.format)
}
