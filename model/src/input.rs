use std::collections::HashSet;

use glam::DVec3;

use crate::{layout::LayoutTable, physics::PhysicsState};

/// The outcome of a key event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyEvent {
    /// A released key was pressed and kicked the keyboard.
    Pressed,
    /// A held key was pressed again and kicked the keyboard again.
    Repeated,
    /// A held key was released.
    Released,
    /// The event had no effect, either the key is not part of the layout or it was not held.
    Ignored,
}

/// A mapper translating key events into impulses and the set of held keys.
#[derive(Clone, Debug)]
pub struct InputEventMapper {
    pressed: HashSet<String>,
    impulse: f64,
}

impl InputEventMapper {
    /// Creates a mapper pushing keys down with the given impulse magnitude.
    #[must_use]
    pub fn new(impulse: f64) -> Self {
        Self {
            pressed: HashSet::new(),
            impulse,
        }
    }

    /// Handles a key press.
    ///
    /// Keys which are part of the layout are marked as held and push the keyboard down at their
    /// position, also when they are already held. Other keys are ignored.
    pub fn key_down(
        &mut self,
        identifier: &str,
        layout: &LayoutTable,
        physics: &mut PhysicsState,
    ) -> KeyEvent {
        let Some(key) = layout.get(identifier) else {
            log::trace!("ignoring press of unmapped key {identifier:?}");
            return KeyEvent::Ignored;
        };

        let event = if self.pressed.insert(identifier.to_owned()) {
            KeyEvent::Pressed
        } else {
            KeyEvent::Repeated
        };
        physics.apply_impulse(key.position, self.impulse * DVec3::NEG_Y);

        event
    }

    /// Handles a key release, releasing never affects the physics.
    pub fn key_up(&mut self, identifier: &str, layout: &LayoutTable) -> KeyEvent {
        if layout.contains(identifier) && self.pressed.remove(identifier) {
            KeyEvent::Released
        } else {
            KeyEvent::Ignored
        }
    }

    /// Returns the identifiers of all held keys.
    #[must_use]
    pub fn pressed(&self) -> &HashSet<String> {
        &self.pressed
    }
}
