use anyhow::Result;
use clap::Args;
use colored::Colorize;

use crate::settings::SettingsArgs;
use crate::ship::OutputFormat;

#[derive(Args, Debug)]
pub struct OptionsArgs {
    /// Output format
    #[arg(short = 'f', long, value_enum, default_value = "human")]
    pub format: OutputFormat,
}

pub fn execute(settings: &SettingsArgs, args: OptionsArgs) -> Result<()> {
    let provider = settings.provider()?;
    let options = provider.fulfillment_options();

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&options)?),
        OutputFormat::Human => {
            println!("{}", provider.identifier().bold());
            for option in &options {
                if option.is_return {
                    println!("  {} {}", option.id, "(return)".dimmed());
                } else {
                    println!("  {}", option.id);
                }
            }
        }
    }
    Ok(())
}
