use std::sync::mpsc::Receiver;

use color_eyre::Report;
use config::Config;
use model::Simulation;
use three_d::{
    degrees, vec3, window, Camera, Context, Degrees, FrameInput, FrameOutput, InnerSpace,
    OrbitControl, Vec3, WindowError, WindowSettings,
};

use crate::{file_watcher::Reload, key_names::key_event, scene::Scene};

/// An application window.
pub struct Window {
    inner: window::Window,
}

impl Window {
    /// Creates a new window.
    ///
    /// # Errors
    ///
    /// Returns a [`WindowError`] if the window could not be created.
    pub fn try_new() -> Result<Self, WindowError> {
        let inner = window::Window::new(WindowSettings {
            title: "Kickboard".to_owned(),
            ..Default::default()
        })?;

        Ok(Self { inner })
    }

    /// Runs the render loop for the given configuration, replacing it with every reloaded one.
    ///
    /// This is blocking until the window is closed.
    pub fn run_render_loop(self, config: Config, receiver: Receiver<Reload>) {
        let mut application = Application::new(&self.inner, config, receiver);

        self.inner.render_loop(move |frame_input| {
            application.handle_events(frame_input);
            FrameOutput::default()
        });
    }
}

/// An application simulating and rendering a kicking keyboard.
struct Application {
    control: OrbitControl,
    camera: Camera,
    config: Config,
    simulation: Simulation,
    scene: Scene,
    receiver: Receiver<Reload>,
}

impl Application {
    /// Creates a new application given a window, the initial configuration and a receiver of
    /// reloaded configurations.
    fn new(window: &window::Window, config: Config, receiver: Receiver<Reload>) -> Self {
        const DEFAULT_FOV: Degrees = degrees(30.0);
        const DEFAULT_TARGET: Vec3 = vec3(0.0, 0.0, 0.0);

        let context = window.gl();
        #[allow(clippy::cast_possible_truncation)]
        let distance = f64::from(config.preview.camera_distance) as f32;
        let camera = Camera::new_perspective(
            window.viewport(),
            vec3(0.0, 0.6, 1.0).normalize_to(distance),
            DEFAULT_TARGET,
            Vec3::unit_y(),
            DEFAULT_FOV,
            0.1,
            1000.0,
        );
        let control = OrbitControl::new(DEFAULT_TARGET, 0.2 * distance, 5.0 * distance);

        let simulation = Simulation::new(&config);
        let scene = Scene::new(&context, &config, &simulation);

        Self {
            control,
            camera,
            config,
            simulation,
            scene,
            receiver,
        }
    }

    /// Handles events for the given frame input and renders the frame.
    fn handle_events(&mut self, mut frame_input: FrameInput) {
        if let Ok(reload) = self.receiver.try_recv() {
            self.handle_reload(&frame_input.context, reload);
        }

        self.camera.set_viewport(frame_input.viewport);
        self.control
            .handle_events(&mut self.camera, &mut frame_input.events);

        for event in frame_input.events.iter().filter_map(key_event) {
            self.simulation.handle(event);
        }
        self.simulation.frame(frame_input.elapsed_time / 1000.0);
        self.scene.update(&self.simulation);

        let screen = frame_input.screen();
        self.scene.render(&self.camera, &screen);
    }

    /// Handles a reloaded configuration, keeping the current one if reloading failed.
    fn handle_reload(&mut self, context: &Context, reload: Reload) {
        match reload {
            Ok(config) => {
                if config == self.config {
                    return;
                }
                log::info!("configuration changed, rebuilding keyboard");

                self.simulation = Simulation::new(&config);
                self.scene = Scene::new(context, &config, &self.simulation);
                self.config = config;
            }
            Err(error) => {
                log::error!("failed to reload configuration: {:#}", Report::from(error));
            }
        }
    }
}
