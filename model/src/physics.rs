use config::Physics;
use glam::{DQuat, DVec3, EulerRot};

/// The tick rate the damping factor is calibrated for.
const TICKS_PER_SECOND: f64 = 60.0;

/// The order the Euler angles of the orientation are applied in.
const EULER_ROTATION: EulerRot = EulerRot::XYZ;

/// The constants driving the rotational response.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PhysicsParameters {
    /// The factor the angular velocity is multiplied with per 1/60 second.
    pub damping: f64,
    /// The rate at which the orientation eases back toward the resting pose.
    pub return_speed: f64,
    /// The resting and initial orientation as XYZ Euler angles.
    pub resting_orientation: DVec3,
    /// The per-axis drift of the resting orientation per second.
    pub drift_rate: DVec3,
}

impl From<&Physics> for PhysicsParameters {
    fn from(config: &Physics) -> Self {
        Self {
            damping: config.damping.into(),
            return_speed: config.return_speed.into(),
            resting_orientation: config.resting_orientation.into(),
            drift_rate: config.drift_rate.into(),
        }
    }
}

/// A damped rotation easing back toward a resting orientation.
#[derive(Clone, Debug)]
pub struct PhysicsState {
    orientation: DQuat,
    angular_velocity: DVec3,
    elapsed: f64,
    parameters: PhysicsParameters,
}

impl PhysicsState {
    /// Creates a state at rest in the resting orientation.
    #[must_use]
    pub fn new(parameters: PhysicsParameters) -> Self {
        let orientation = euler_to_quat(parameters.resting_orientation);

        Self {
            orientation,
            angular_velocity: DVec3::ZERO,
            elapsed: 0.0,
            parameters,
        }
    }

    /// Adds the torque of a force acting at the given position directly to the angular velocity.
    pub fn apply_impulse(&mut self, position: DVec3, force: DVec3) {
        self.angular_velocity += position.cross(force);
    }

    /// Advances the simulation by `dt` seconds.
    ///
    /// The angular velocity is added to the Euler angles of the orientation, which is then
    /// spherically interpolated toward the target orientation before the angular velocity is
    /// damped.
    pub fn integrate(&mut self, dt: f64) {
        let (x, y, z) = self.orientation.to_euler(EULER_ROTATION);
        let rotated = DVec3::new(x, y, z) + self.angular_velocity * dt;
        self.orientation = euler_to_quat(rotated);

        self.elapsed += dt;

        let factor = (self.parameters.return_speed * dt).clamp(0.0, 1.0);
        self.orientation = self
            .orientation
            .slerp(self.target_orientation(), factor)
            .normalize();

        self.angular_velocity *= self.parameters.damping.powf(dt * TICKS_PER_SECOND);
    }

    /// Returns the orientation the state is currently easing toward.
    #[must_use]
    pub fn target_orientation(&self) -> DQuat {
        let drift = self.parameters.drift_rate * self.elapsed;

        euler_to_quat(self.parameters.resting_orientation + drift)
    }

    /// Returns the current orientation.
    #[must_use]
    pub fn orientation(&self) -> DQuat {
        self.orientation
    }

    /// Returns the current angular velocity.
    #[must_use]
    pub fn angular_velocity(&self) -> DVec3 {
        self.angular_velocity
    }

    /// Returns the simulated time in seconds.
    #[must_use]
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }
}

fn euler_to_quat(angles: DVec3) -> DQuat {
    DQuat::from_euler(EULER_ROTATION, angles.x, angles.y, angles.z)
}

#[cfg(test)]
mod tests {
    use config::Config;
    use glam::dvec3;
    use proptest::prelude::*;

    use super::*;

    fn parameters() -> PhysicsParameters {
        PhysicsParameters::from(&Config::default().physics)
    }

    #[test]
    fn starts_at_rest_in_resting_orientation() {
        let state = PhysicsState::new(parameters());

        assert_eq!(state.angular_velocity(), DVec3::ZERO);
        assert_eq!(state.elapsed(), 0.0);
        assert!(state.orientation().is_normalized());
        assert!(state.orientation().angle_between(state.target_orientation()) < 1e-6);
    }

    #[test]
    fn impulse_adds_torque() {
        let mut state = PhysicsState::new(parameters());

        state.apply_impulse(dvec3(2.0, 0.0, 1.0), dvec3(0.0, -0.5, 0.0));
        assert_eq!(state.angular_velocity(), dvec3(0.5, 0.0, -1.0));

        state.apply_impulse(dvec3(2.0, 0.0, 1.0), dvec3(0.0, -0.5, 0.0));
        assert_eq!(state.angular_velocity(), dvec3(1.0, 0.0, -2.0));
    }

    #[test]
    fn damping_is_frame_rate_independent() {
        let mut single = PhysicsState::new(parameters());
        let mut split = PhysicsState::new(parameters());
        single.apply_impulse(DVec3::X, DVec3::NEG_Y);
        split.apply_impulse(DVec3::X, DVec3::NEG_Y);

        single.integrate(1.0 / 30.0);
        split.integrate(1.0 / 60.0);
        split.integrate(1.0 / 60.0);

        let single = single.angular_velocity().z;
        assert!((single - split.angular_velocity().z).abs() < 1e-12);
        assert!((single + 0.95 * 0.95).abs() < 1e-12);
    }

    #[test]
    fn zero_time_step_changes_nothing() {
        let mut state = PhysicsState::new(parameters());
        state.apply_impulse(DVec3::Z, DVec3::NEG_Y);
        let orientation = state.orientation();

        state.integrate(0.0);

        assert_eq!(state.angular_velocity(), dvec3(1.0, 0.0, 0.0));
        assert!(state.orientation().angle_between(orientation) < 1e-6);
    }

    #[test]
    fn large_time_step_snaps_to_target() {
        let mut state = PhysicsState::new(parameters());
        state.apply_impulse(DVec3::Z, DVec3::NEG_Y);

        state.integrate(2.0);

        assert!(state.orientation().angle_between(state.target_orientation()) < 1e-6);
    }

    #[test]
    fn drift_moves_the_target() {
        let mut state = PhysicsState::new(PhysicsParameters {
            drift_rate: dvec3(0.0, 0.5, 0.0),
            ..parameters()
        });

        state.integrate(1.0);

        let expected = euler_to_quat(parameters().resting_orientation + dvec3(0.0, 0.5, 0.0));
        assert!(state.target_orientation().angle_between(expected) < 1e-6);
        assert_eq!(state.elapsed(), 1.0);
    }

    proptest! {
        #[test]
        fn converges_back_to_rest(
            position in (-8.0..8.0f64, -8.0..8.0f64),
            presses in 1usize..5,
            fps in 30.0..144.0f64,
        ) {
            let mut state = PhysicsState::new(parameters());
            for _ in 0..presses {
                state.apply_impulse(dvec3(position.0, 0.0, position.1), dvec3(0.0, -0.08, 0.0));
            }
            let dt = 1.0 / fps;

            let mut speed = state.angular_velocity().length();
            for _ in 0..(fps as usize * 10) {
                state.integrate(dt);

                let next_speed = state.angular_velocity().length();
                prop_assert!(next_speed <= speed);
                prop_assert!(state.orientation().is_normalized());
                speed = next_speed;
            }

            prop_assert!(speed < 1e-3);
            prop_assert!(state.orientation().angle_between(state.target_orientation()) < 1e-3);
        }
    }
}
