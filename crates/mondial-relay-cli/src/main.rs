use clap::{Parser, Subcommand};
use colored::Colorize;
use env_logger::Env;

mod facts;
mod options;
mod render;
mod returns;
mod settings;
mod ship;

#[derive(Parser)]
#[command(name = "mrship")]
#[command(about = "Render and submit Mondial Relay shipments", long_about = None)]
#[command(version)]
struct Cli {
    #[command(flatten)]
    settings: settings::SettingsArgs,

    /// Enable debug logging
    #[arg(short = 'd', long = "debug", global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the request XML for a shipment or return without sending it
    #[command(alias = "r")]
    Render(render::RenderArgs),

    /// Create a shipment for a fulfillment
    #[command(alias = "s")]
    Ship(ship::ShipArgs),

    /// Create a return shipment
    Return(returns::ReturnArgs),

    /// List the fulfillment options offered by the provider
    Options(options::OptionsArgs),
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {e}", "Error:".red());
        for cause in e.chain().skip(1) {
            eprintln!("  {cause}");
        }
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Default level depends on --debug, RUST_LOG still wins
    let env = if cli.debug {
        Env::default().default_filter_or("debug")
    } else {
        Env::default().default_filter_or("error")
    };
    env_logger::Builder::from_env(env).init();

    match cli.command {
        Commands::Render(args) => render::execute(&cli.settings, args),
        Commands::Ship(args) => ship::execute(&cli.settings, args),
        Commands::Return(args) => returns::execute(&cli.settings, args),
        Commands::Options(args) => options::execute(&cli.settings, args),
    }
}
