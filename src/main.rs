use std::fs::File;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use simplelog::{Config, LevelFilter, WriteLogger};

use torus_snake::app::App;
use torus_snake::game::GameConfig;

const LOG_FILE: &str = "torus_snake.log";

#[derive(Parser)]
#[command(name = "torus_snake")]
#[command(version, about = "Snake on a toroidal grid, in the terminal")]
struct Cli {
    /// Grid width in cells
    #[arg(long, default_value = "32")]
    width: usize,

    /// Grid height in cells
    #[arg(long, default_value = "24")]
    height: usize,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    anyhow::ensure!(
        cli.width >= 2 && cli.height >= 2,
        "grid must be at least 2x2 cells, got {}x{}",
        cli.width,
        cli.height
    );

    // The terminal is the game screen, so diagnostics go to a file
    WriteLogger::init(
        LevelFilter::Info,
        Config::default(),
        File::create(LOG_FILE).with_context(|| format!("Failed to create {LOG_FILE}"))?,
    )
    .context("Failed to initialize logger")?;

    info!("starting on a {}x{} grid", cli.width, cli.height);

    let config = GameConfig::new(cli.width, cli.height);
    let mut app = App::new(config);
    app.run().await?;

    info!("clean shutdown");
    Ok(())
}
