use std::collections::BTreeMap;

use config::Layout;
use glam::{dvec3, DVec3};

use crate::layout::{KeySpec, LayoutTable};

/// A manually placed key, usually spanning more than one unit.
#[derive(Clone, Debug, PartialEq)]
pub struct ManualKey {
    /// The host key name identifying the key.
    pub identifier: String,
    /// The key itself.
    pub spec: KeySpec,
}

/// A builder generating an uncentered layout table from symbol rows and manual keys.
#[derive(Clone, Debug)]
pub struct LayoutBuilder {
    rows: Vec<String>,
    manual_keys: Vec<ManualKey>,
    spacing: f64,
    key_size: DVec3,
    resting_height: f64,
}

impl LayoutBuilder {
    /// Creates a builder without rows or manual keys.
    #[must_use]
    pub fn new(spacing: f64, key_size: DVec3, resting_height: f64) -> Self {
        Self {
            rows: Vec::new(),
            manual_keys: Vec::new(),
            spacing,
            key_size,
            resting_height,
        }
    }

    /// Creates a builder from the given layout configuration.
    #[must_use]
    pub fn from_config(config: &Layout) -> Self {
        let key_size = f64::from(config.key_size);
        let key_size = dvec3(key_size, config.key_height.into(), key_size);

        let manual_keys = config.overrides.iter().map(|key| ManualKey {
            identifier: key.identifier.clone(),
            spec: KeySpec {
                position: key.position.into(),
                size: key.size.into(),
                label: key.label.clone(),
            },
        });

        Self::new(
            config.spacing.into(),
            key_size,
            config.resting_height.into(),
        )
        .rows(config.rows.iter().cloned())
        .manual_keys(manual_keys)
    }

    /// Appends symbol rows, every character becomes a key.
    #[must_use]
    pub fn rows(mut self, rows: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.rows.extend(rows.into_iter().map(Into::into));
        self
    }

    /// Appends manual keys, which replace generated keys with the same identifier.
    #[must_use]
    pub fn manual_keys(mut self, manual_keys: impl IntoIterator<Item = ManualKey>) -> Self {
        self.manual_keys.extend(manual_keys);
        self
    }

    /// Builds the uncentered layout table.
    ///
    /// Duplicate identifiers within the rows or within the manual keys are resolved by keeping
    /// the last definition.
    #[must_use]
    pub fn build(&self) -> LayoutTable {
        let mut keys = BTreeMap::new();

        let row_lengths: Vec<_> = self.rows.iter().map(|row| row.chars().count()).collect();
        let offsets = row_offsets(&row_lengths, self.spacing);

        for (row_index, (row, offset)) in self.rows.iter().zip(offsets).enumerate() {
            #[allow(clippy::cast_precision_loss)]
            let z = row_index as f64 * self.spacing;

            for (column_index, symbol) in row.chars().enumerate() {
                #[allow(clippy::cast_precision_loss)]
                let x = column_index as f64 * self.spacing + offset;
                let key = KeySpec {
                    position: dvec3(x, self.resting_height, z),
                    size: self.key_size,
                    label: symbol.to_uppercase().collect(),
                };

                if keys.insert(symbol.to_string(), key).is_some() {
                    log::warn!("duplicate symbol {symbol:?} in layout rows, keeping the last one");
                }
            }
        }

        let mut manual_identifiers = Vec::with_capacity(self.manual_keys.len());
        for ManualKey { identifier, spec } in &self.manual_keys {
            if manual_identifiers.contains(&identifier) {
                log::warn!("duplicate manual key {identifier:?}, keeping the last one");
            } else if keys.contains_key(identifier) {
                log::debug!("manual key {identifier:?} replaces the generated one");
            }
            manual_identifiers.push(identifier);

            keys.insert(identifier.clone(), spec.clone());
        }

        LayoutTable { keys }
    }
}

/// Returns the cumulative horizontal offset of every row.
///
/// The first row starts at zero, every following row is shifted by half a spacing scaled with the
/// length ratio of the previous and the current row. Empty rows do not shift.
fn row_offsets(row_lengths: &[usize], spacing: f64) -> Vec<f64> {
    let mut offset = 0.0;
    let mut previous_length = None;

    row_lengths
        .iter()
        .map(|&length| {
            if let Some(previous_length) = previous_length {
                if length > 0 {
                    #[allow(clippy::cast_precision_loss)]
                    let ratio = previous_length as f64 / length as f64;
                    offset += spacing * ratio / 2.0;
                }
            }
            previous_length = Some(length);

            offset
        })
        .collect()
}
