use glam::{Mat3, Mat4, Vec3};
use serde::{Deserialize, Serialize};

/// Step for ambient/diffuse/specular strength changes.
pub const COEFFICIENT_STEP: f32 = 0.1;
/// Degrees added per frame while a rotation key is held.
pub const ROTATION_STEP_DEGREES: f32 = 0.03;
/// Per-frame scale factors while a scale key is held.
pub const SCALE_SHRINK: f32 = 0.999;
pub const SCALE_GROW: f32 = 1.001;
/// Lamp orbit radius change per key press.
pub const RADIUS_STEP: f32 = 0.05;
/// Factor applied to the quadratic attenuation term per key press.
pub const ATTENUATION_FACTOR: f32 = 0.05;

/// Uniform scale applied outside every other object transform.
const BASE_SCALE: f32 = 3.0;
/// Uniform scale of the lamp marker cube.
const LAMP_SCALE: f32 = 0.05;
/// Translation the object takes when the view is reset.
const RESET_NUDGE: Vec3 = Vec3::new(0.0, 0.01, 0.003);

/// Phong term strengths and the specular exponent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhongCoefficients {
    pub ambient: f32,
    pub diffuse: f32,
    pub specular: f32,
    pub shininess: f32,
}

impl Default for PhongCoefficients {
    fn default() -> Self {
        Self {
            ambient: 0.5,
            diffuse: 0.5,
            specular: 0.5,
            shininess: 2.0,
        }
    }
}

/// Point-light falloff: `1 / (constant + linear * d + quadratic * d^2)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Attenuation {
    pub constant: f32,
    pub linear: f32,
    pub quadratic: f32,
}

impl Default for Attenuation {
    fn default() -> Self {
        Self {
            constant: 0.5,
            linear: 0.5,
            quadratic: 0.5,
        }
    }
}

impl Attenuation {
    pub fn factor(&self, distance: f32) -> f32 {
        1.0 / (self.constant + self.linear * distance + self.quadratic * distance * distance)
    }
}

/// Placement of the lit cube. Rotation is in degrees per axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObjectTransform {
    pub translation: Vec3,
    pub rotation: Vec3,
    pub scale: Vec3,
    /// Extra stretch along the local Y axis.
    pub height: f32,
}

impl Default for ObjectTransform {
    fn default() -> Self {
        Self {
            translation: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
            height: 1.0,
        }
    }
}

/// Circle the lamp travels in the plane `z = depth`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LampOrbit {
    pub radius: f32,
    pub depth: f32,
}

impl Default for LampOrbit {
    fn default() -> Self {
        Self {
            radius: 0.1,
            depth: 2.0,
        }
    }
}

impl LampOrbit {
    /// Lamp position `seconds` after start-up.
    pub fn position(&self, seconds: f32) -> Vec3 {
        Vec3::new(
            self.radius * seconds.sin(),
            self.radius * seconds.cos(),
            self.depth,
        )
    }
}

/// Axis of an object rotation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

/// One user tweak to the scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SceneAdjustment {
    AmbientUp,
    AmbientDown,
    DiffuseUp,
    DiffuseDown,
    SpecularUp,
    SpecularDown,
    /// Double the specular exponent.
    ShininessUp,
    /// Halve the specular exponent.
    ShininessDown,
    HeightUp,
    HeightDown,
    LampRadiusUp,
    LampRadiusDown,
    /// Divide the quadratic term by [`ATTENUATION_FACTOR`].
    QuadraticAttenuationUp,
    /// Multiply the quadratic term by [`ATTENUATION_FACTOR`].
    QuadraticAttenuationDown,
    Rotate { axis: Axis, degrees: f32 },
    Scale(f32),
    /// Nudge the object to its post-reset offset.
    ResetObject,
}

/// Everything the renderer needs besides the camera.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneParams {
    pub phong: PhongCoefficients,
    pub attenuation: Attenuation,
    pub object: ObjectTransform,
    pub lamp: LampOrbit,
    pub object_color: Vec3,
    pub light_color: Vec3,
}

impl Default for SceneParams {
    fn default() -> Self {
        Self {
            phong: PhongCoefficients::default(),
            attenuation: Attenuation::default(),
            object: ObjectTransform::default(),
            lamp: LampOrbit::default(),
            object_color: Vec3::new(0.5, 1.0, 0.31),
            light_color: Vec3::ONE,
        }
    }
}

impl SceneParams {
    pub fn apply(&mut self, adjustment: SceneAdjustment) {
        let phong = &mut self.phong;
        match adjustment {
            SceneAdjustment::AmbientUp => step_unit(&mut phong.ambient, COEFFICIENT_STEP),
            SceneAdjustment::AmbientDown => step_unit(&mut phong.ambient, -COEFFICIENT_STEP),
            SceneAdjustment::DiffuseUp => step_unit(&mut phong.diffuse, COEFFICIENT_STEP),
            SceneAdjustment::DiffuseDown => step_unit(&mut phong.diffuse, -COEFFICIENT_STEP),
            SceneAdjustment::SpecularUp => step_unit(&mut phong.specular, COEFFICIENT_STEP),
            SceneAdjustment::SpecularDown => step_unit(&mut phong.specular, -COEFFICIENT_STEP),
            SceneAdjustment::ShininessUp => phong.shininess *= 2.0,
            SceneAdjustment::ShininessDown => phong.shininess /= 2.0,
            SceneAdjustment::HeightUp => self.object.height *= 2.0,
            SceneAdjustment::HeightDown => self.object.height /= 2.0,
            SceneAdjustment::LampRadiusUp => self.lamp.radius += RADIUS_STEP,
            SceneAdjustment::LampRadiusDown => {
                self.lamp.radius = (self.lamp.radius - RADIUS_STEP).max(0.0);
            }
            SceneAdjustment::QuadraticAttenuationUp => {
                self.attenuation.quadratic /= ATTENUATION_FACTOR;
            }
            SceneAdjustment::QuadraticAttenuationDown => {
                self.attenuation.quadratic *= ATTENUATION_FACTOR;
            }
            SceneAdjustment::Rotate { axis, degrees } => match axis {
                Axis::X => self.object.rotation.x += degrees,
                Axis::Y => self.object.rotation.y += degrees,
                Axis::Z => self.object.rotation.z += degrees,
            },
            SceneAdjustment::Scale(factor) => self.object.scale *= factor,
            SceneAdjustment::ResetObject => self.object.translation = RESET_NUDGE,
        }
    }

    /// Pull externally supplied values back into the ranges `apply` keeps:
    /// strengths in [0, 1] and a non-negative lamp radius.
    pub fn sanitized(mut self) -> Self {
        let phong = &mut self.phong;
        for value in [&mut phong.ambient, &mut phong.diffuse, &mut phong.specular] {
            step_unit(value, 0.0);
        }
        self.lamp.radius = self.lamp.radius.max(0.0);
        self
    }

    /// Model matrix of the lit cube.
    pub fn object_model(&self) -> Mat4 {
        let o = &self.object;
        Mat4::from_scale(Vec3::splat(BASE_SCALE))
            * Mat4::from_translation(o.translation)
            * Mat4::from_rotation_x(o.rotation.x.to_radians())
            * Mat4::from_rotation_y(o.rotation.y.to_radians())
            * Mat4::from_rotation_z(o.rotation.z.to_radians())
            * Mat4::from_scale(Vec3::new(1.0, o.height, 1.0))
            * Mat4::from_scale(o.scale)
    }

    /// Inverse-transpose of the object model, for transforming normals.
    pub fn object_normal_matrix(&self) -> Mat4 {
        Mat4::from_mat3(Mat3::from_mat4(self.object_model()).inverse().transpose())
    }

    pub fn lamp_position(&self, seconds: f32) -> Vec3 {
        self.lamp.position(seconds)
    }

    /// Model matrix of the lamp marker cube.
    pub fn lamp_model(&self, seconds: f32) -> Mat4 {
        Mat4::from_translation(self.lamp_position(seconds)) * Mat4::from_scale(Vec3::splat(LAMP_SCALE))
    }
}

fn step_unit(value: &mut f32, delta: f32) {
    *value = (*value + delta).clamp(0.0, 1.0);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_demo_startup() {
        let p = SceneParams::default();
        assert_eq!(p.phong.ambient, 0.5);
        assert_eq!(p.phong.shininess, 2.0);
        assert_eq!(p.attenuation.quadratic, 0.5);
        assert_eq!(p.object.height, 1.0);
        assert_eq!(p.lamp.radius, 0.1);
        assert_eq!(p.object_color, Vec3::new(0.5, 1.0, 0.31));
    }

    #[test]
    fn coefficients_stay_in_unit_range() {
        let mut p = SceneParams::default();
        for _ in 0..20 {
            p.apply(SceneAdjustment::AmbientUp);
            p.apply(SceneAdjustment::DiffuseUp);
            p.apply(SceneAdjustment::SpecularDown);
        }
        assert_eq!(p.phong.ambient, 1.0);
        assert_eq!(p.phong.diffuse, 1.0);
        assert_eq!(p.phong.specular, 0.0);

        p.apply(SceneAdjustment::AmbientDown);
        assert!((p.phong.ambient - 0.9).abs() < 1e-6);
    }

    #[test]
    fn shininess_and_height_double_and_halve() {
        let mut p = SceneParams::default();
        p.apply(SceneAdjustment::ShininessUp);
        p.apply(SceneAdjustment::ShininessUp);
        assert_eq!(p.phong.shininess, 8.0);
        p.apply(SceneAdjustment::ShininessDown);
        assert_eq!(p.phong.shininess, 4.0);

        p.apply(SceneAdjustment::HeightUp);
        assert_eq!(p.object.height, 2.0);
        p.apply(SceneAdjustment::HeightDown);
        p.apply(SceneAdjustment::HeightDown);
        assert_eq!(p.object.height, 0.5);
    }

    #[test]
    fn lamp_radius_never_negative() {
        let mut p = SceneParams::default();
        p.apply(SceneAdjustment::LampRadiusUp);
        assert!((p.lamp.radius - 0.15).abs() < 1e-6);
        for _ in 0..10 {
            p.apply(SceneAdjustment::LampRadiusDown);
        }
        assert_eq!(p.lamp.radius, 0.0);
    }

    #[test]
    fn sanitized_clamps_out_of_range_values() {
        let mut p = SceneParams::default();
        p.phong.ambient = 5.0;
        p.phong.diffuse = 0.3;
        p.phong.specular = -2.0;
        p.lamp.radius = -1.0;
        let p = p.sanitized();
        assert_eq!(p.phong.ambient, 1.0);
        assert_eq!(p.phong.diffuse, 0.3);
        assert_eq!(p.phong.specular, 0.0);
        assert_eq!(p.lamp.radius, 0.0);

        assert_eq!(SceneParams::default().sanitized(), SceneParams::default());
    }

    #[test]
    fn quadratic_attenuation_scales_by_factor() {
        let mut p = SceneParams::default();
        p.apply(SceneAdjustment::QuadraticAttenuationUp);
        assert!((p.attenuation.quadratic - 10.0).abs() < 1e-4);
        p.apply(SceneAdjustment::QuadraticAttenuationDown);
        assert!((p.attenuation.quadratic - 0.5).abs() < 1e-6);
    }

    #[test]
    fn attenuation_factor_at_distance() {
        let a = Attenuation::default();
        assert_eq!(a.factor(0.0), 2.0);
        assert!((a.factor(1.0) - 1.0 / 1.5).abs() < 1e-6);
    }

    #[test]
    fn rotation_and_scale_accumulate() {
        let mut p = SceneParams::default();
        for _ in 0..100 {
            p.apply(SceneAdjustment::Rotate {
                axis: Axis::Y,
                degrees: ROTATION_STEP_DEGREES,
            });
        }
        assert!((p.object.rotation.y - 3.0).abs() < 1e-4);
        assert_eq!(p.object.rotation.x, 0.0);

        p.apply(SceneAdjustment::Scale(SCALE_GROW));
        assert!(p.object.scale.abs_diff_eq(Vec3::splat(1.001), 1e-6));
        p.apply(SceneAdjustment::Scale(SCALE_SHRINK));
        assert!(p.object.scale.abs_diff_eq(Vec3::splat(1.001 * 0.999), 1e-6));
    }

    #[test]
    fn reset_object_nudges_translation() {
        let mut p = SceneParams::default();
        p.apply(SceneAdjustment::ResetObject);
        assert_eq!(p.object.translation, Vec3::new(0.0, 0.01, 0.003));
    }

    #[test]
    fn default_object_model_is_base_scale() {
        let p = SceneParams::default();
        assert!(p.object_model().abs_diff_eq(Mat4::from_scale(Vec3::splat(3.0)), 1e-6));
    }

    #[test]
    fn height_stretches_before_base_scale() {
        let mut p = SceneParams::default();
        p.apply(SceneAdjustment::HeightUp);
        let top = p.object_model().transform_point3(Vec3::new(0.0, 0.5, 0.0));
        assert!(top.abs_diff_eq(Vec3::new(0.0, 3.0, 0.0), 1e-5));
    }

    #[test]
    fn translation_is_scaled_by_base() {
        let mut p = SceneParams::default();
        p.object.translation = Vec3::new(1.0, 0.0, 0.0);
        let origin = p.object_model().transform_point3(Vec3::ZERO);
        assert!(origin.abs_diff_eq(Vec3::new(3.0, 0.0, 0.0), 1e-5));
    }

    #[test]
    fn normal_matrix_keeps_normals_perpendicular() {
        let mut p = SceneParams::default();
        p.apply(SceneAdjustment::HeightUp);
        p.object.rotation = Vec3::new(20.0, 35.0, 0.0);
        let model = p.object_model();
        let normal = p.object_normal_matrix().transform_vector3(Vec3::Y).normalize();
        let tangent = model.transform_vector3(Vec3::X);
        assert!(normal.dot(tangent).abs() < 1e-4);
    }

    #[test]
    fn lamp_orbits_in_depth_plane() {
        let p = SceneParams::default();
        assert!(p.lamp_position(0.0).abs_diff_eq(Vec3::new(0.0, 0.1, 2.0), 1e-6));
        let quarter = p.lamp_position(std::f32::consts::FRAC_PI_2);
        assert!(quarter.abs_diff_eq(Vec3::new(0.1, 0.0, 2.0), 1e-6));

        let corner = p.lamp_model(0.0).transform_point3(Vec3::splat(0.5));
        assert!(corner.abs_diff_eq(Vec3::new(0.025, 0.125, 2.025), 1e-6));
    }
}
