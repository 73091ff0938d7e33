use std::{
    io,
    path::{Path, PathBuf},
    sync::mpsc::Sender,
};

use config::Config;
use notify::{
    event::{AccessKind::Close, AccessMode::Write},
    recommended_watcher, Event,
    EventKind::{Access, Create},
    RecommendedWatcher, RecursiveMode, Watcher,
};

/// A reloaded configuration or the error encountered while reloading it.
pub type Reload = Result<Config, config::Error>;

/// A file watcher reloading the configuration upon file change.
pub struct FileWatcher {
    config_path: PathBuf,
    sender: Sender<Reload>,
}

impl FileWatcher {
    /// Creates a new watcher for the given config file path.
    ///
    /// Upon file change, the reloaded configuration is sent via the given sender.
    ///
    /// # Errors
    ///
    /// Returns an [`Error`] if the file path could not be canonicalized.
    pub fn try_new(config_path: &Path, sender: Sender<Reload>) -> Result<Self, Error> {
        let config_path = config_path.canonicalize()?;

        Ok(Self {
            config_path,
            sender,
        })
    }

    /// Starts watching the config file in a different thread.
    ///
    /// # Errors
    ///
    /// Returns an [`Error`] if watching the file was unsuccessful.
    pub fn watch(self) -> Result<RecommendedWatcher, Error> {
        let config_directory = self
            .config_path
            .parent()
            .expect("canonicalized file paths should always have a parent")
            .to_path_buf();

        let mut watcher = recommended_watcher(move |result: notify::Result<Event>| {
            if let Ok(event) = result {
                if matches!(event.kind, Access(Close(Write)) | Create(_))
                    && event.paths.iter().any(|path| path == &self.config_path)
                {
                    self.reload_config();
                }
            }
        })?;

        watcher.watch(&config_directory, RecursiveMode::NonRecursive)?;
        log::debug!("watching {} for changes", config_directory.display());

        Ok(watcher)
    }

    /// Parses the config file and sends the result.
    fn reload_config(&self) {
        log::info!("reloading {}", self.config_path.display());

        let _ = self
            .sender
            .send(Config::try_from_path(&self.config_path));
    }
}

/// The error type for errors regarding watching the configuration.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Failed to canonicalize file path.
    #[error("failed to canonicalize file path")]
    Canonicalize(#[from] io::Error),
    /// Failed to initialize file watcher.
    #[error("failed to initialize file watcher")]
    Notify(#[from] notify::Error),
}
