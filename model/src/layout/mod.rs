mod bounds;
mod builder;

use std::{collections::BTreeMap, ops::Add};

use config::Layout;
use glam::DVec3;

pub use bounds::Bounds;
pub use builder::{LayoutBuilder, ManualKey};

/// A single physical key.
#[derive(Clone, Debug, PartialEq)]
pub struct KeySpec {
    /// The center of the key.
    pub position: DVec3,
    /// The width, height and depth of the key.
    pub size: DVec3,
    /// The text displayed on the key.
    pub label: String,
}

/// A read-only mapping from key identifiers to keys.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LayoutTable {
    keys: BTreeMap<String, KeySpec>,
}

impl LayoutTable {
    /// Builds the layout table from the given configuration, centered on the origin.
    #[must_use]
    pub fn from_config(config: &Layout) -> Self {
        let table = LayoutBuilder::from_config(config).build().centered();

        if let Some(bounds) = table.bounds() {
            log::debug!(
                "built layout with {} keys spanning {:?}",
                table.len(),
                bounds.size()
            );
        }

        table
    }

    /// Returns the key with the given identifier, if there is one.
    #[must_use]
    pub fn get(&self, identifier: &str) -> Option<&KeySpec> {
        self.keys.get(identifier)
    }

    /// Returns true if there is a key with the given identifier.
    #[must_use]
    pub fn contains(&self, identifier: &str) -> bool {
        self.keys.contains_key(identifier)
    }

    /// Returns an iterator over identifiers and keys, ordered by identifier.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &KeySpec)> {
        self.keys
            .iter()
            .map(|(identifier, key)| (identifier.as_str(), key))
    }

    /// Returns the number of keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Returns true if there are no keys.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Returns the bounds of all key positions, [`None`] if there are no keys.
    #[must_use]
    pub fn bounds(&self) -> Option<Bounds> {
        Bounds::from_points(self.keys.values().map(|key| key.position))
    }

    /// Returns the bounds of all key volumes, [`None`] if there are no keys.
    #[must_use]
    pub fn extent(&self) -> Option<Bounds> {
        self.keys
            .values()
            .filter_map(|key| {
                let half_size = key.size / 2.0;
                Bounds::from_points([key.position - half_size, key.position + half_size])
            })
            .reduce(|extent, bounds| extent.union(&bounds))
    }

    /// Translates all keys such that the midpoint of their position bounds is the origin.
    #[must_use]
    pub fn centered(self) -> Self {
        match self.bounds() {
            Some(bounds) => self + -bounds.center(),
            None => self,
        }
    }
}

impl Add<DVec3> for LayoutTable {
    type Output = LayoutTable;

    fn add(self, translation: DVec3) -> LayoutTable {
        let keys = self
            .keys
            .into_iter()
            .map(|(identifier, key)| {
                let key = KeySpec {
                    position: key.position + translation,
                    ..key
                };
                (identifier, key)
            })
            .collect();

        LayoutTable { keys }
    }
}
