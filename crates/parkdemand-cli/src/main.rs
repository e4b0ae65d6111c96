mod display;
mod session;
mod sidebar;

use clap::{Args, Parser, Subcommand};
use parkdemand_core::{
    load_panel, AppConfig, ConfigError, SidebarEvent, SnippetStore, LOCATIONS,
};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "parkdemand")]
#[command(about = "Parking demand demo: sidebar controls backed by PredictHQ")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Apply selections to the session and render the sidebar
    Sidebar(SidebarArgs),
    /// List the parking buildings in the location dropdown
    Locations,
    /// Print the code examples panel
    Examples,
}

#[derive(Debug, Default, Args)]
struct SidebarArgs {
    /// Session file (defaults to `PARKDEMAND_SESSION_PATH`)
    #[arg(long)]
    state: Option<std::path::PathBuf>,

    /// Location id to select, e.g. `miami`
    #[arg(long)]
    location: Option<String>,

    /// Date range id to select, e.g. `next_30_days`
    #[arg(long)]
    daterange: Option<String>,

    /// Override the search radius
    #[arg(long, conflicts_with = "reset_radius")]
    radius: Option<f64>,

    /// Go back to the suggested radius
    #[arg(long)]
    reset_radius: bool,

    /// Print the rendered view as JSON
    #[arg(long)]
    json: bool,
}

impl SidebarArgs {
    /// Selections from the command line, in the order a user would make them.
    fn events(&self) -> Vec<SidebarEvent> {
        let mut events = Vec::new();
        if let Some(id) = &self.location {
            events.push(SidebarEvent::SelectLocation(id.clone()));
        }
        if let Some(id) = &self.daterange {
            events.push(SidebarEvent::SelectDateRange(id.clone()));
        }
        if self.reset_radius {
            events.push(SidebarEvent::ResetRadius);
        }
        if let Some(radius) = self.radius {
            events.push(SidebarEvent::SetRadius(radius));
        }
        events
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = parkdemand_core::load_app_config();
    let log_level = config.as_ref().map_or("info", |c| c.log_level.as_str());
    let env_filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(log_level))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    dispatch(cli.command, config).await
}

/// Run a subcommand. Configuration errors only surface for commands that
/// read the configuration.
async fn dispatch(
    command: Option<Commands>,
    config: Result<AppConfig, ConfigError>,
) -> anyhow::Result<()> {
    match command {
        Some(Commands::Locations) => print!("{}", display::locations(&LOCATIONS)),
        Some(Commands::Examples) => {
            let config = config?;
            let store = SnippetStore::from_dir(config.code_examples_dir.as_deref());
            let panel = load_panel(&store)?;
            print!("{}", display::code_examples(&panel));
        }
        Some(Commands::Sidebar(args)) => {
            let config = config?;
            tracing::debug!(?config, "configuration loaded");
            sidebar::run(&config, &args).await?;
        }
        None => {
            let config = config?;
            tracing::debug!(?config, "configuration loaded");
            sidebar::run(&config, &SidebarArgs::default()).await?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests;
