use std::collections::HashSet;

use config::Config;
use glam::DQuat;

use crate::{
    input::{InputEventMapper, KeyEvent},
    layout::LayoutTable,
    physics::{PhysicsParameters, PhysicsState},
};

/// An inbound event driving the simulation.
#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    /// A key with the given host key name was pressed.
    KeyDown(String),
    /// A key with the given host key name was released.
    KeyUp(String),
    /// A frame was rendered, the given number of seconds after the previous one.
    Frame(f64),
}

/// A kicking keyboard, owning the layout, the held keys and the rotational state.
///
/// All events are handled sequentially by the owner, an impulse applied between two frames is
/// fully visible to the next frame.
#[derive(Clone, Debug)]
pub struct Simulation {
    layout: LayoutTable,
    physics: PhysicsState,
    input: InputEventMapper,
}

impl Simulation {
    /// Creates a new simulation at rest from the given configuration.
    #[must_use]
    pub fn new(config: &Config) -> Self {
        let layout = LayoutTable::from_config(&config.layout);
        let parameters = PhysicsParameters::from(&config.physics);

        Self::from_parts(layout, parameters, config.physics.impulse.into())
    }

    /// Creates a new simulation at rest from an already built layout.
    #[must_use]
    pub fn from_parts(layout: LayoutTable, parameters: PhysicsParameters, impulse: f64) -> Self {
        Self {
            layout,
            physics: PhysicsState::new(parameters),
            input: InputEventMapper::new(impulse),
        }
    }

    /// Dispatches an event, returns the outcome for key events.
    pub fn handle(&mut self, event: Event) -> Option<KeyEvent> {
        match event {
            Event::KeyDown(identifier) => Some(self.key_down(&identifier)),
            Event::KeyUp(identifier) => Some(self.key_up(&identifier)),
            Event::Frame(dt) => {
                self.frame(dt);
                None
            }
        }
    }

    /// Handles a key press.
    pub fn key_down(&mut self, identifier: &str) -> KeyEvent {
        self.input
            .key_down(identifier, &self.layout, &mut self.physics)
    }

    /// Handles a key release.
    pub fn key_up(&mut self, identifier: &str) -> KeyEvent {
        self.input.key_up(identifier, &self.layout)
    }

    /// Advances the simulation by one frame lasting `dt` seconds.
    pub fn frame(&mut self, dt: f64) {
        self.physics.integrate(dt);
    }

    /// Returns the centered layout.
    #[must_use]
    pub fn layout(&self) -> &LayoutTable {
        &self.layout
    }

    /// Returns the identifiers of all held keys.
    #[must_use]
    pub fn pressed(&self) -> &HashSet<String> {
        self.input.pressed()
    }

    /// Returns the current orientation of the keyboard.
    #[must_use]
    pub fn orientation(&self) -> DQuat {
        self.physics.orientation()
    }

    /// Returns the rotational state.
    #[must_use]
    pub fn physics(&self) -> &PhysicsState {
        &self.physics
    }
}

#[cfg(test)]
mod tests {
    use glam::{dvec3, DVec3};

    use super::*;

    #[test]
    fn press_then_frame_damps_the_kick() {
        let config = Config::default();
        let mut simulation = Simulation::new(&config);
        let position = simulation.layout().get("a").unwrap().position;
        let impulse = f64::from(config.physics.impulse);
        let damping = f64::from(config.physics.damping);
        let dt = 1.0 / 60.0;

        assert_eq!(position.y, 0.0);
        assert_eq!(
            simulation.handle(Event::KeyDown("a".to_owned())),
            Some(KeyEvent::Pressed)
        );

        let torque = position.cross(dvec3(0.0, -impulse, 0.0));
        assert_eq!(simulation.physics().angular_velocity(), torque);

        assert_eq!(simulation.handle(Event::Frame(dt)), None);

        let expected = torque * damping.powf(60.0 * dt);
        let angular_velocity = simulation.physics().angular_velocity();
        assert!(
            angular_velocity.abs_diff_eq(expected, 1e-12),
            "{angular_velocity:?} != {expected:?}"
        );
    }

    #[test]
    fn kick_tilts_then_settles() {
        let mut simulation = Simulation::new(&Config::default());
        let resting = simulation.orientation();

        simulation.key_down("q");
        simulation.frame(1.0 / 60.0);
        assert!(simulation.orientation().angle_between(resting) > 1e-4);

        for _ in 0..600 {
            simulation.frame(1.0 / 60.0);
        }
        assert!(simulation.orientation().angle_between(resting) < 1e-3);
        assert!(simulation.physics().angular_velocity().length() < 1e-6);
    }

    #[test]
    fn press_state_follows_key_events() {
        let mut simulation = Simulation::new(&Config::default());

        simulation.key_down(" ");
        simulation.key_down("Enter");
        simulation.key_up(" ");

        assert_eq!(
            simulation.pressed().iter().collect::<Vec<_>>(),
            vec!["Enter"]
        );
    }

    #[test]
    fn unmapped_key_changes_nothing() {
        let mut simulation = Simulation::new(&Config::default());
        let orientation = simulation.orientation();

        assert_eq!(
            simulation.handle(Event::KeyDown("F13".to_owned())),
            Some(KeyEvent::Ignored)
        );
        assert_eq!(
            simulation.handle(Event::KeyUp("F13".to_owned())),
            Some(KeyEvent::Ignored)
        );

        assert!(simulation.pressed().is_empty());
        assert_eq!(simulation.physics().angular_velocity(), DVec3::ZERO);
        assert_eq!(simulation.orientation(), orientation);
    }
}
