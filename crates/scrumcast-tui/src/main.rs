// Fantasy rugby dashboard entry point.
//
// Startup sequence:
// 1. Initialize tracing (log to file, not terminal)
// 2. Load config
// 3. Load the player dataset
// 4. Precompute composites and per-round bounds
// 5. Run the TUI until the user quits

use std::path::Path;

use anyhow::Context;
use tracing::info;

use scrumcast_core::config;
use scrumcast_core::dataset::loader::load_players;
use scrumcast_core::Dashboard;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    init_tracing()?;
    info!("Scrumcast starting up");

    let config = config::load_config().context("failed to load configuration")?;
    info!(
        "Config loaded: players={}, default round={}, exports to {}",
        config.data_paths.players, config.default_round, config.export_dir
    );

    let players = load_players(Path::new(&config.data_paths.players))
        .with_context(|| format!("failed to load players from {}", config.data_paths.players))?;
    info!("Loaded {} players", players.len());

    let dashboard = Dashboard::new(players, &config.weights);

    scrumcast_tui::run(dashboard, &config)
        .await
        .context("dashboard exited with an error")?;

    info!("Scrumcast shut down cleanly");
    Ok(())
}

/// Log to `logs/scrumcast.log`; the terminal belongs to the TUI.
fn init_tracing() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let log_dir = std::env::current_dir()?.join("logs");
    std::fs::create_dir_all(&log_dir)?;

    let log_file = std::fs::File::create(log_dir.join("scrumcast.log"))?;

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new("scrumcast=info,scrumcast_core=info,scrumcast_tui=info,warn")
        }))
        .with_writer(log_file)
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(true)
        .with_line_number(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")?;

    Ok(())
}
