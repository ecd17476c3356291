// ABOUTME: Main application entry point.
// ABOUTME: Loads config, builds the demo tree, and runs the navigation menu on stdin/stdout.

mod demo;
mod driver;

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use cnav_core::Config;

use driver::Driver;

/// `--config <path>` is the only recognized flag
fn config_path_arg() -> Result<Option<PathBuf>> {
    let mut args = std::env::args().skip(1);
    let mut path = None;
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => {
                let value = args.next().context("--config requires a path")?;
                path = Some(PathBuf::from(value));
            }
            other => bail!("Unknown argument: {other}"),
        }
    }
    Ok(path)
}

fn load_config() -> Result<Config> {
    match config_path_arg()? {
        Some(path) => Config::load(&path)
            .with_context(|| format!("Failed to load config from {}", path.display())),
        None => Ok(Config::load_or_default()),
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("Starting component-nav");

    let config = load_config()?;
    tracing::info!(
        "Loaded config: on_miss={}, kind_labels={}",
        config.driver.on_miss.label(),
        config.display.kind_labels
    );

    let root = demo::build_demo_tree()?;

    let stdin = std::io::stdin();
    let mut driver = Driver::new(root, &config, stdin.lock(), std::io::stdout());
    if let Err(e) = driver.run() {
        tracing::error!("Driver failed: {}", e);
        return Err(e);
    }
    tracing::info!(
        "Exiting on {:?}",
        driver.current().map(|c| c.name().to_string())
    );

    Ok(())
}
