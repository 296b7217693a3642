use anyhow::{Context, Result};
use clap::Args;
use mondial_relay::platform::NoOrders;
use mondial_relay::{CarrierOptions, Environment, FulfillmentProvider, OrderLookup};
use std::path::PathBuf;

/// Options shared by every subcommand
#[derive(Args, Debug)]
pub struct SettingsArgs {
    /// TOML file with carrier options; MONDIAL_RELAY_* variables override its values
    #[arg(short = 'c', long = "config", global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Render every label as an in-store QR code
    #[arg(long = "print-in-store", global = true)]
    pub print_in_store: bool,
}

impl SettingsArgs {
    pub fn carrier_options(&self) -> Result<CarrierOptions> {
        let Some(path) = &self.config else {
            return Ok(CarrierOptions::from_env());
        };
        let mut options = CarrierOptions::from_file(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?;
        options.apply_env(|key| std::env::var(key).ok());
        Ok(options)
    }

    pub fn provider(&self) -> Result<FulfillmentProvider> {
        self.provider_with_orders(Box::new(NoOrders))
    }

    pub fn provider_with_orders(&self, orders: Box<dyn OrderLookup>) -> Result<FulfillmentProvider> {
        let options = self.carrier_options()?;
        let environment = Environment::from_env();
        log::debug!("Using {environment:?} environment");

        let provider = FulfillmentProvider::new(&options, environment, orders)
            .context("Failed to set up the Mondial Relay provider")?;
        Ok(if self.print_in_store {
            provider.print_in_store()
        } else {
            provider
        })
    }
}
