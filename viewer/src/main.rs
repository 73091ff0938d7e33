//! This file starts the viewer by loading the configuration, creating a new window and running
//! the render loop.

use std::{path::PathBuf, sync::mpsc::channel};

use clap::Parser;
use color_eyre::{eyre::eyre, eyre::WrapErr, Result};
use config::Config;
use viewer::{FileWatcher, Window};

/// A virtual keyboard kicking back when typed on.
#[derive(Parser)]
#[command(version, about)]
struct Arguments {
    /// The TOML configuration, reloaded upon change. The built-in configuration is used if omitted.
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let arguments = Arguments::parse();
    let (sender, receiver) = channel();

    let (config, _watcher) = match &arguments.config {
        Some(config_path) => {
            let config = Config::try_from_path(config_path)
                .wrap_err_with(|| format!("failed to load {}", config_path.display()))?;
            let watcher = FileWatcher::try_new(config_path, sender)?.watch()?;
            log::info!("loaded {}", config_path.display());

            (config, Some(watcher))
        }
        None => {
            log::info!("using the built-in configuration");
            (Config::default(), None)
        }
    };

    let window = Window::try_new().map_err(|error| eyre!("failed to create window: {error}"))?;
    window.run_render_loop(config, receiver);

    Ok(())
}
