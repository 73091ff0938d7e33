use config::{Color, Preview};
use glam::{dvec3, DVec3};
use model::{Bounds, LayoutTable};
use three_d::{
    Camera, Context, CpuMaterial, CpuMesh, Gm, Light, Mat4, Mesh, PhysicalMaterial, RenderTarget,
};

use crate::objects::{box_transformation, srgba, Render};

/// The backing board carrying the keys.
pub struct Board {
    inner: Option<Gm<Mesh, PhysicalMaterial>>,
    transformation: Mat4,
}

impl Board {
    /// Creates a board below the keys of the given layout.
    pub fn new(context: &Context, layout: &LayoutTable, preview: &Preview, color: Color) -> Self {
        let bounds = board_bounds(
            layout,
            preview.board_padding.into(),
            preview.board_thickness.into(),
        );
        let transformation = bounds.map_or(Mat4::from_scale(0.0), |bounds| {
            box_transformation(bounds.center(), bounds.size())
        });

        let inner = bounds.map(|_| {
            let mesh = Mesh::new(context, &CpuMesh::cube());
            let material = PhysicalMaterial::new_opaque(
                context,
                &CpuMaterial {
                    albedo: srgba(color),
                    roughness: 0.8,
                    metallic: 0.0,
                    ..Default::default()
                },
            );
            Gm::new(mesh, material)
        });

        let mut board = Self {
            inner,
            transformation,
        };
        board.update_orientation(Mat4::from_scale(1.0));

        board
    }
}

impl Render for Board {
    fn render(&self, render_target: &RenderTarget, camera: &Camera, lights: &[&dyn Light]) {
        if let Some(inner) = &self.inner {
            render_target.render(camera, inner, lights);
        }
    }

    fn update_orientation(&mut self, orientation: Mat4) {
        if let Some(inner) = &mut self.inner {
            inner.set_transformation(orientation * self.transformation);
        }
    }
}

/// Returns the bounds of a board reaching `padding` beyond all keys, with its top face at the
/// bottom of the keys.
fn board_bounds(layout: &LayoutTable, padding: f64, thickness: f64) -> Option<Bounds> {
    let extent = layout.extent()?;

    let min = dvec3(
        extent.min.x - padding,
        extent.min.y - thickness,
        extent.min.z - padding,
    );
    let max = dvec3(
        extent.max.x + padding,
        extent.min.y,
        extent.max.z + padding,
    );

    Bounds::from_points([min, max])
}

#[cfg(test)]
mod tests {
    use model::{KeySpec, LayoutBuilder, ManualKey};

    use super::*;

    #[test]
    fn board_surrounds_keys_from_below() {
        let layout = LayoutBuilder::new(1.0, dvec3(1.0, 0.4, 1.0), 0.0)
            .rows(["ab"])
            .manual_keys([ManualKey {
                identifier: " ".to_owned(),
                spec: KeySpec {
                    position: dvec3(0.5, 0.0, 1.0),
                    size: dvec3(3.0, 0.4, 1.0),
                    label: "Space".to_owned(),
                },
            }])
            .build()
            .centered();

        let bounds = board_bounds(&layout, 0.5, 0.6).unwrap();

        assert!(bounds.min.abs_diff_eq(dvec3(-2.0, -0.8, -1.5), 1e-12));
        assert!(bounds.max.abs_diff_eq(dvec3(2.0, -0.2, 1.5), 1e-12));
    }

    #[test]
    fn empty_layout_has_no_board() {
        assert_eq!(board_bounds(&LayoutTable::default(), 0.5, 0.6), None);
    }

    #[test]
    fn board_is_centered_for_default_layout() {
        let config = config::Config::default();
        let layout = LayoutTable::from_config(&config.layout);

        let bounds = board_bounds(
            &layout,
            config.preview.board_padding.into(),
            config.preview.board_thickness.into(),
        )
        .unwrap();

        assert!(bounds.center().x.abs() < 1e-9);
        assert!(bounds.size().cmpgt(DVec3::ZERO).all());
    }
}
