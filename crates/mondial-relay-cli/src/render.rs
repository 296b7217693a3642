use anyhow::Result;
use clap::Args;
use mondial_relay::platform::NoOrders;
use mondial_relay::OrderLookup;
use std::path::PathBuf;

use crate::facts::{self, JsonOrders};
use crate::settings::SettingsArgs;

#[derive(Args, Debug)]
pub struct RenderArgs {
    /// JSON facts: `{method, items, order, fulfillment}`, or a return record with --return
    pub facts: PathBuf,

    /// Treat the facts file as a return record
    #[arg(long = "return")]
    pub is_return: bool,

    /// JSON array of orders, used when a return only names its order
    #[arg(long, value_name = "FILE", requires = "is_return")]
    pub orders: Option<PathBuf>,
}

pub fn execute(settings: &SettingsArgs, args: RenderArgs) -> Result<()> {
    let orders: Box<dyn OrderLookup> = match &args.orders {
        Some(path) => Box::new(JsonOrders::load(path)?),
        None => Box::new(NoOrders),
    };
    let provider = settings.provider()?;
    let assembler = provider.assembler();

    let request = if args.is_return {
        let record = facts::read_return(&args.facts)?;
        assembler.returning(&record, orders.as_ref())?
    } else {
        let facts = facts::read_forward(&args.facts)?;
        assembler.forward(
            &facts.method,
            &facts.items,
            &facts.order,
            &facts.fulfillment,
            None,
        )?
    };

    println!("{}", provider.client().render(&request)?);
    Ok(())
}
