use std::collections::HashSet;

use config::Colors;
use glam::DVec3;
use model::LayoutTable;
use three_d::{Camera, Context, CpuMesh, Instances, Light, Mat4, RenderTarget, Srgba};

use crate::objects::{box_transformation, srgba, InstancedObject, Render};

/// The set of all keys of a layout.
pub struct Keys {
    inner: InstancedObject,
    layout: LayoutTable,
    press_depth: f64,
    color: Srgba,
    pressed_color: Srgba,
}

impl Keys {
    /// Creates the keys of the given layout, all released.
    pub fn new(context: &Context, layout: LayoutTable, press_depth: f64, colors: &Colors) -> Self {
        let color = srgba(colors.key);
        let pressed_color = srgba(colors.pressed_key);
        let instances = key_instances(&layout, &HashSet::new(), press_depth, color, pressed_color);

        Self {
            inner: InstancedObject::new(context, &CpuMesh::cube(), &instances),
            layout,
            press_depth,
            color,
            pressed_color,
        }
    }

    /// Sinks the held keys and raises all others.
    pub fn update_pressed(&mut self, pressed: &HashSet<String>) {
        let instances = key_instances(
            &self.layout,
            pressed,
            self.press_depth,
            self.color,
            self.pressed_color,
        );
        self.inner.update_instances(&instances);
    }
}

impl Render for Keys {
    fn render(&self, render_target: &RenderTarget, camera: &Camera, lights: &[&dyn Light]) {
        self.inner.render(render_target, camera, lights);
    }

    fn update_orientation(&mut self, orientation: Mat4) {
        self.inner.update_orientation(orientation);
    }
}

/// Returns one box instance per key, held keys are sunk by `press_depth` and use `pressed_color`.
fn key_instances(
    layout: &LayoutTable,
    pressed: &HashSet<String>,
    press_depth: f64,
    color: Srgba,
    pressed_color: Srgba,
) -> Instances {
    let (transformations, colors): (Vec<Mat4>, Vec<Srgba>) = layout
        .iter()
        .map(|(identifier, key)| {
            if pressed.contains(identifier) {
                let position = key.position - press_depth * DVec3::Y;
                (box_transformation(position, key.size), pressed_color)
            } else {
                (box_transformation(key.position, key.size), color)
            }
        })
        .unzip();

    Instances {
        transformations,
        colors: Some(colors),
        ..Default::default()
    }
}
