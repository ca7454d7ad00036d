use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3};
use lampcube_camera::FreeCamera;
use lampcube_scene::SceneParams;

/// Uniform block shared by the cube and lamp pipelines.
///
/// Every vector is padded to `vec4` so the layout matches WGSL without gaps.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct SceneUniforms {
    pub view_proj: [[f32; 4]; 4],
    pub model: [[f32; 4]; 4],
    pub normal_matrix: [[f32; 4]; 4],
    pub light_pos: [f32; 4],
    pub view_pos: [f32; 4],
    pub object_color: [f32; 4],
    pub light_color: [f32; 4],
    pub phong: [f32; 4],
    pub attenuation: [f32; 4],
}

impl SceneUniforms {
    /// Uniforms for the lit cube at `seconds` after start-up.
    pub fn object(camera: &FreeCamera, scene: &SceneParams, seconds: f32) -> Self {
        Self::build(
            camera,
            scene,
            seconds,
            scene.object_model(),
            scene.object_normal_matrix(),
        )
    }

    /// Uniforms for the lamp marker at `seconds` after start-up.
    pub fn lamp(camera: &FreeCamera, scene: &SceneParams, seconds: f32) -> Self {
        Self::build(camera, scene, seconds, scene.lamp_model(seconds), Mat4::IDENTITY)
    }

    fn build(
        camera: &FreeCamera,
        scene: &SceneParams,
        seconds: f32,
        model: Mat4,
        normal_matrix: Mat4,
    ) -> Self {
        let phong = &scene.phong;
        let att = &scene.attenuation;
        Self {
            view_proj: camera.view_projection().to_cols_array_2d(),
            model: model.to_cols_array_2d(),
            normal_matrix: normal_matrix.to_cols_array_2d(),
            light_pos: padded(scene.lamp_position(seconds)),
            view_pos: padded(camera.position()),
            object_color: padded(scene.object_color),
            light_color: padded(scene.light_color),
            phong: [phong.ambient, phong.diffuse, phong.specular, phong.shininess],
            attenuation: [att.constant, att.linear, att.quadratic, 0.0],
        }
    }
}

fn padded(v: Vec3) -> [f32; 4] {
    v.extend(1.0).to_array()
}

#[cfg(test)]
mod tests {
    use super::*;
    use lampcube_scene::SceneAdjustment;

    fn camera() -> FreeCamera {
        FreeCamera::new(800, 600, Vec3::new(0.0, 0.0, 3.0))
    }

    #[test]
    fn layout_is_vec4_aligned() {
        assert_eq!(std::mem::size_of::<SceneUniforms>(), 3 * 64 + 6 * 16);
        assert_eq!(std::mem::size_of::<SceneUniforms>() % 16, 0);
    }

    #[test]
    fn object_uniforms_carry_scene_parameters() {
        let mut scene = SceneParams::default();
        scene.apply(SceneAdjustment::ShininessUp);
        scene.apply(SceneAdjustment::AmbientDown);
        let u = SceneUniforms::object(&camera(), &scene, 0.0);

        assert!((u.phong[0] - 0.4).abs() < 1e-6);
        assert_eq!(u.phong[3], 4.0);
        assert_eq!(u.attenuation, [0.5, 0.5, 0.5, 0.0]);
        assert_eq!(u.view_pos, [0.0, 0.0, 3.0, 1.0]);
        assert_eq!(u.light_pos, [0.0, 0.1, 2.0, 1.0]);
        assert_eq!(
            Mat4::from_cols_array_2d(&u.model),
            Mat4::from_scale(Vec3::splat(3.0))
        );
    }

    #[test]
    fn lamp_uniforms_place_marker_at_light() {
        let scene = SceneParams::default();
        let u = SceneUniforms::lamp(&camera(), &scene, 0.0);
        let model = Mat4::from_cols_array_2d(&u.model);
        assert!(model.transform_point3(Vec3::ZERO).abs_diff_eq(Vec3::new(0.0, 0.1, 2.0), 1e-6));
        assert_eq!(u.light_pos[..3], model.w_axis.to_array()[..3]);
    }

    #[test]
    fn view_proj_matches_camera() {
        let cam = camera();
        let u = SceneUniforms::object(&cam, &SceneParams::default(), 1.0);
        assert_eq!(Mat4::from_cols_array_2d(&u.view_proj), cam.view_projection());
    }
}
