mod board;
mod keys;

use config::Color;
use glam::{DQuat, DVec3};
use three_d::{
    Camera, Context, CpuMaterial, CpuMesh, Gm, InstancedMesh, Instances, Light, Mat4,
    PhysicalMaterial, Quat, RenderTarget, Srgba, Vec3,
};

pub use board::Board;
pub use keys::Keys;

/// A trait for rendering an object.
pub trait Render {
    /// Renders `self` to the given render target.
    fn render(&self, render_target: &RenderTarget, camera: &Camera, lights: &[&dyn Light]);

    /// Rotates `self` around the origin into the given orientation.
    fn update_orientation(&mut self, orientation: Mat4);
}

/// An instanced object which can be rendered in a scene.
struct InstancedObject {
    inner: Gm<InstancedMesh, PhysicalMaterial>,
}

impl InstancedObject {
    /// Creates a new instanced object from a mesh and instances.
    ///
    /// The instance colors are used as is, the material itself is white.
    fn new(context: &Context, mesh: &CpuMesh, instances: &Instances) -> Self {
        let instanced_mesh = InstancedMesh::new(context, instances, mesh);
        let material = PhysicalMaterial::new_opaque(
            context,
            &CpuMaterial {
                albedo: Srgba::WHITE,
                roughness: 0.6,
                metallic: 0.0,
                ..Default::default()
            },
        );

        Self {
            inner: Gm::new(instanced_mesh, material),
        }
    }

    /// Replaces the instances of the object.
    fn update_instances(&mut self, instances: &Instances) {
        self.inner.set_instances(instances);
    }
}

impl Render for InstancedObject {
    fn render(&self, render_target: &RenderTarget, camera: &Camera, lights: &[&dyn Light]) {
        render_target.render(camera, &self.inner, lights);
    }

    fn update_orientation(&mut self, orientation: Mat4) {
        self.inner.set_transformation(orientation);
    }
}

/// Converts a color to its sRGB representation.
pub fn srgba(color: Color) -> Srgba {
    let Color { r, g, b, a } = color;

    Srgba::new(r, g, b, a)
}

/// Converts a vector to single precision.
#[allow(clippy::cast_possible_truncation)]
pub fn vec3(vector: DVec3) -> Vec3 {
    three_d::vec3(vector.x as f32, vector.y as f32, vector.z as f32)
}

/// Converts an orientation to a rotation matrix.
#[allow(clippy::cast_possible_truncation)]
pub fn rotation(orientation: DQuat) -> Mat4 {
    let DQuat { x, y, z, w } = orientation;

    Mat4::from(Quat::new(w as f32, x as f32, y as f32, z as f32))
}

/// Returns the transformation of a unit cube into a box with the given center and size.
pub fn box_transformation(center: DVec3, size: DVec3) -> Mat4 {
    let half_size = vec3(size / 2.0);

    Mat4::from_translation(vec3(center))
        * Mat4::from_nonuniform_scale(half_size.x, half_size.y, half_size.z)
}

#[cfg(test)]
mod tests {
    use glam::dvec3;
    use three_d::{vec4, InnerSpace};

    use super::*;

    #[test]
    fn box_transformation_maps_cube_corners() {
        let transformation = box_transformation(dvec3(1.0, 2.0, 3.0), dvec3(4.0, 2.0, 6.0));

        let corner = transformation * vec4(1.0, 1.0, 1.0, 1.0);
        assert!((corner.truncate() - three_d::vec3(3.0, 3.0, 6.0)).magnitude() < 1e-6);
    }

    #[test]
    fn rotation_matches_glam() {
        let orientation = DQuat::from_rotation_x(0.6) * DQuat::from_rotation_z(-0.3);
        let point = dvec3(1.0, -2.0, 0.5);

        let rotated = (rotation(orientation) * vec3(point).extend(0.0)).truncate();
        assert!((rotated - vec3(orientation * point)).magnitude() < 1e-5);
    }

    #[test]
    fn colors_keep_all_channels() {
        let color = Color::rgba(1, 2, 3, 4);

        assert_eq!(srgba(color), Srgba::new(1, 2, 3, 4));
    }
}
