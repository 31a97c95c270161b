use std::path::PathBuf;

use clap::{Parser, Subcommand};

use exercise_tracker::config::ConfigLoader;
use exercise_tracker::server::Server;
use exercise_tracker::{db, logger};

#[derive(Debug, Parser)]
#[command(name = "exercise-tracker", version, about = "Exercise tracking REST API")]
struct Cli {
    /// Directory containing the layered TOML configuration files
    #[arg(long, default_value = "config", env = "TRACKER_CONFIG_DIR")]
    config_dir: PathBuf,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run the HTTP server (default when no subcommand is given)
    Serve,
    /// Run pending database migrations and exit
    Migrate,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let settings = ConfigLoader::new(&cli.config_dir).load()?;
    logger::init_logging(&settings.logger)?;

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => Server::new(settings).run().await,
        Command::Migrate => {
            db::run_migrations(&settings.database.url).await?;
            tracing::info!("Migrations applied");
            Ok(())
        }
    }
}
