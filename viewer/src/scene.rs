use config::{Color, Config};
use model::Simulation;
use three_d::{
    AmbientLight, Attenuation, Camera, ClearState, Context, Light, PointLight, RenderTarget,
    Srgba,
};

use crate::objects::{rotation, vec3, Board, Keys, Render};

/// A scene rendering a kicking keyboard.
pub struct Scene {
    board: Board,
    keys: Keys,
    lights: Vec<PointLight>,
    ambient: AmbientLight,
    background: Color,
}

impl Scene {
    /// Creates a scene for the given configuration and the layout of the given simulation.
    pub fn new(context: &Context, config: &Config, simulation: &Simulation) -> Self {
        let layout = simulation.layout();
        let preview = &config.preview;

        let board = Board::new(context, layout, preview, config.colors.board);
        let keys = Keys::new(
            context,
            layout.clone(),
            preview.press_depth.into(),
            &config.colors,
        );

        let ambient = AmbientLight::new(context, 0.1, Srgba::WHITE);
        let lights = preview
            .light_positions
            .iter()
            .map(|&position| {
                PointLight::new(
                    context,
                    0.8,
                    Srgba::WHITE,
                    vec3(position.into()),
                    Attenuation::default(),
                )
            })
            .collect();

        let mut scene = Self {
            board,
            keys,
            lights,
            ambient,
            background: config.colors.background,
        };
        scene.update(simulation);

        scene
    }

    /// Updates the held keys and the orientation from the given simulation.
    pub fn update(&mut self, simulation: &Simulation) {
        let orientation = rotation(simulation.orientation());

        self.keys.update_pressed(simulation.pressed());
        self.keys.update_orientation(orientation);
        self.board.update_orientation(orientation);
    }

    /// Renders the scene with a given camera and render target.
    pub fn render(&self, camera: &Camera, render_target: &RenderTarget) {
        let Color { r, g, b, a } = self.background;

        let mut lights: Vec<_> = self
            .lights
            .iter()
            .map(|light| light as &dyn Light)
            .collect();
        lights.push(&self.ambient as &dyn Light);

        let render_target = render_target.clear(ClearState::color_and_depth(
            f32::from(r) / 255.0,
            f32::from(g) / 255.0,
            f32::from(b) / 255.0,
            f32::from(a) / 255.0,
            1.0,
        ));

        self.board.render(render_target, camera, &lights);
        self.keys.render(render_target, camera, &lights);
    }
}
