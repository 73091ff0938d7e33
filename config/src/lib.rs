//! The `config` crate contains everything related to the available configuration options.

mod primitives;

use std::{fs::read_to_string, io, path::Path};

use serde::{Deserialize, Serialize};

pub use hex_color::HexColor as Color;
pub use primitives::{Damping, FiniteFloat, PositiveFloat, Ranged, Vec3};

/// A configuration of a kicking keyboard.
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq, Debug)]
pub struct Config {
    /// The layout configuration.
    pub layout: Layout,
    /// The physics configuration.
    pub physics: Physics,
    /// The preview configuration.
    pub preview: Preview,
    /// The colors of the keyboard.
    pub colors: Colors,
}

/// A configuration of the key layout.
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq, Hash, Debug)]
pub struct Layout {
    /// The symbol rows from top to bottom, every character becomes a key.
    pub rows: Vec<String>,
    /// Keys placed manually, replacing generated keys with the same identifier.
    pub overrides: Vec<KeyOverride>,
    /// The distance between two neighboring generated keys.
    pub spacing: PositiveFloat,
    /// The width and depth of a generated key.
    pub key_size: PositiveFloat,
    /// The height of a generated key.
    pub key_height: PositiveFloat,
    /// The vertical coordinate all generated keys are resting at.
    pub resting_height: FiniteFloat,
}

/// A manually placed key.
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq, Hash, Debug)]
pub struct KeyOverride {
    /// The host key name identifying the key.
    pub identifier: String,
    /// The text displayed on the key.
    pub label: String,
    /// The position of the key before centering.
    pub position: Vec3<FiniteFloat>,
    /// The width, height and depth of the key.
    pub size: Vec3<PositiveFloat>,
}

/// A configuration of the rotational response to key presses.
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq, Hash, Debug)]
pub struct Physics {
    /// The magnitude of the downward force applied per key press.
    pub impulse: PositiveFloat,
    /// The factor the angular velocity is multiplied with per 1/60 second.
    pub damping: Damping,
    /// The rate at which the orientation eases back toward the resting pose.
    pub return_speed: PositiveFloat,
    /// The resting and initial orientation as XYZ Euler angles in radians.
    pub resting_orientation: Vec3<FiniteFloat>,
    /// The per-axis drift of the resting orientation in radians per second.
    pub drift_rate: Vec3<FiniteFloat>,
}

/// A configuration for previewing the keyboard.
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq, Hash, Debug)]
pub struct Preview {
    /// The distance of the camera to the center of the keyboard.
    pub camera_distance: PositiveFloat,
    /// The space between the outermost keys and the board edge.
    pub board_padding: PositiveFloat,
    /// The thickness of the board below the keys.
    pub board_thickness: PositiveFloat,
    /// How far a held key is drawn sunk into the board.
    pub press_depth: FiniteFloat,
    /// The light positions.
    pub light_positions: Vec<Vec3<FiniteFloat>>,
}

/// A configuration of the colors used for displaying the keyboard.
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq, Hash, Debug)]
pub struct Colors {
    /// The color of the board.
    pub board: Color,
    /// The color of released keys.
    pub key: Color,
    /// The color of held keys.
    pub pressed_key: Color,
    /// The color of the background.
    pub background: Color,
}

impl Config {
    /// Reads a configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an [`Error`] if the file could not be read or parsed.
    pub fn try_from_path(config_path: &Path) -> Result<Self, Error> {
        Ok(toml::from_str(&read_to_string(config_path)?)?)
    }
}

impl Default for Config {
    fn default() -> Self {
        let toml_string = include_str!("default.toml");
        toml::from_str(toml_string).expect("default configuration should always be deserializable")
    }
}

/// The error type for errors regarding parsing configurations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Failed to open file.
    #[error("failed to open file")]
    FileOpen(#[from] io::Error),
    /// Failed to parse TOML.
    #[error("failed to parse TOML")]
    TomlParse(#[from] toml::de::Error),
    /// Float is not finite.
    #[error("float is not finite")]
    NonFiniteFloat,
    /// Float is not positive.
    #[error("float is not positive")]
    NonPositiveFloat,
    /// Float is out of range.
    #[error("float is out of range")]
    OutOfRangeFloat,
}
