mod commands;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "venuefeed")]
#[command(about = "Campus dining venues ranked by distance")]
struct Cli {
    /// Latitude of the current position (decimal degrees).
    #[arg(long, global = true, allow_negative_numbers = true)]
    lat: Option<f64>,

    /// Longitude of the current position (decimal degrees).
    #[arg(long, global = true, allow_negative_numbers = true)]
    lon: Option<f64>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Fetch venues and print them, nearest first when a position is given.
    List,
    /// Print the details of one venue.
    Show { name: String },
    /// Advance a venue's status: normal -> favorite -> disliked -> normal.
    Toggle { name: String },
    /// Print map coordinates for every venue that can be placed on a map,
    /// nearest first when a position is given.
    Markers,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = venuefeed_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(env = %config.env, data_dir = %config.data_dir.display(), "configuration loaded");

    let cli = Cli::parse();
    let position = commands::position_from_args(cli.lat, cli.lon)?;

    match cli.command {
        Some(Commands::List) | None => commands::run_list(&config, position).await,
        Some(Commands::Show { name }) => commands::run_show(&config, position, &name).await,
        Some(Commands::Toggle { name }) => commands::run_toggle(&config, position, &name).await,
        Some(Commands::Markers) => commands::run_markers(&config, position).await,
    }
}
