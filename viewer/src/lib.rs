//! The `viewer` crate contains everything related to hosting and visualizing a kicking keyboard.

mod file_watcher;
mod key_names;
mod objects;
mod scene;
mod window;

pub use file_watcher::{Error, FileWatcher, Reload};
pub use key_names::{key_event, key_name};
pub use window::Window;
